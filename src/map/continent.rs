use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// Overseas departments and collectivities (DROM-COM).
const OVERSEAS_DEPARTMENTS: [&str; 10] = [
    "971", "972", "973", "974", "975", "976", "977", "986", "987", "988",
];

/// Overseas regions (Guadeloupe, Martinique, Guyane, La Réunion, Mayotte).
const OVERSEAS_REGIONS: [&str; 5] = ["01", "02", "03", "04", "06"];

/// Pseudo-departments grouping the districts of French residents abroad.
const ABROAD_DEPARTMENTS: [&str; 2] = ["999", "ZZ"];

/// Top-level pseudo-continent a zone belongs to.
///
/// Membership is decided by fixed code lists, never by geometry. Only
/// Metropolitan France has a region level; the two other buckets hold their
/// departments directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Continent {
    Metropole,
    Overseas,
    Abroad,
}

impl Continent {
    pub const ALL: [Continent; 3] = [Continent::Metropole, Continent::Overseas, Continent::Abroad];

    /// Numeric code carried by the `code_cont` property.
    pub fn code(self) -> u8 {
        match self {
            Continent::Metropole => 0,
            Continent::Overseas => 1,
            Continent::Abroad => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Continent::Metropole),
            1 => Some(Continent::Overseas),
            2 => Some(Continent::Abroad),
            _ => None,
        }
    }

    /// Display name used when the data pack does not provide the continent feature.
    pub fn name(self) -> &'static str {
        match self {
            Continent::Metropole => "France métropolitaine",
            Continent::Overseas => "Outre-mer",
            Continent::Abroad => "Français établis hors de France",
        }
    }

    #[inline]
    pub fn has_regions(self) -> bool { self == Continent::Metropole }

    /// Bucket of a (normalized) department code.
    pub fn of_department(code: &str) -> Self {
        if OVERSEAS_DEPARTMENTS.contains(&code) {
            Continent::Overseas
        } else if ABROAD_DEPARTMENTS.contains(&code) {
            Continent::Abroad
        } else {
            Continent::Metropole
        }
    }

    /// Bucket of a (normalized) region code.
    pub fn of_region(code: &str) -> Self {
        if OVERSEAS_REGIONS.contains(&code) { Continent::Overseas } else { Continent::Metropole }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Continent {
    type Err = ParseError;

    /// Exact match on "0", "1" or "2", so that a region code like "01" never
    /// reads as a continent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Continent::Metropole),
            "1" => Ok(Continent::Overseas),
            "2" => Ok(Continent::Abroad),
            _ => Err(ParseError::Continent(s.to_string())),
        }
    }
}
