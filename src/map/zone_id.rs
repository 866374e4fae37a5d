use std::{fmt, sync::Arc};

use super::{continent::Continent, zone_level::ZoneLevel};

/// Stable key for any zone across levels.
/// Keeps the original code text ("2A", "971", leading zeros) but avoids repeated owned Strings.
///
/// Equality is code equality: a district is only equal to another district
/// with the same number *and* the same department, since district numbers
/// restart in every department.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneId {
    World,
    Continent(Continent),
    Region(Arc<str>),
    Department(Arc<str>),
    District { department: Arc<str>, number: u32 },
}

impl ZoneId {
    pub fn region(code: &str) -> Self {
        ZoneId::Region(normalize_region(code))
    }

    pub fn department(code: &str) -> Self {
        ZoneId::Department(normalize_department(code))
    }

    pub fn district(department: &str, number: u32) -> Self {
        ZoneId::District { department: normalize_department(department), number }
    }

    pub fn level(&self) -> ZoneLevel {
        match self {
            ZoneId::World => ZoneLevel::World,
            ZoneId::Continent(_) => ZoneLevel::Continent,
            ZoneId::Region(_) => ZoneLevel::Region,
            ZoneId::Department(_) => ZoneLevel::Department,
            ZoneId::District { .. } => ZoneLevel::District,
        }
    }

    /// Pseudo-continent bucket this zone falls in, `None` for the world root.
    pub fn continent(&self) -> Option<Continent> {
        match self {
            ZoneId::World => None,
            ZoneId::Continent(c) => Some(*c),
            ZoneId::Region(code) => Some(Continent::of_region(code)),
            ZoneId::Department(code) | ZoneId::District { department: code, .. } => {
                Some(Continent::of_department(code))
            }
        }
    }

    /// Department code carried by departments and districts.
    pub fn department_code(&self) -> Option<&str> {
        match self {
            ZoneId::Department(code) | ZoneId::District { department: code, .. } => Some(code.as_ref()),
            _ => None,
        }
    }

    /// The URL path segment naming this zone within its parent.
    pub fn segment(&self) -> String {
        match self {
            ZoneId::World => String::new(),
            ZoneId::Continent(c) => c.to_string(),
            ZoneId::Region(code) | ZoneId::Department(code) => code.to_string(),
            ZoneId::District { number, .. } => number.to_string(),
        }
    }

    /// Whether a raw URL segment names this zone, after code normalization.
    pub fn matches_segment(&self, segment: &str) -> bool {
        match self {
            ZoneId::World => segment.is_empty(),
            ZoneId::Continent(c) => segment.parse::<Continent>().is_ok_and(|s| s == *c),
            ZoneId::Region(code) => *normalize_region(segment) == **code,
            ZoneId::Department(code) => *normalize_department(segment) == **code,
            ZoneId::District { number, .. } => segment.trim().parse::<u32>().is_ok_and(|n| n == *number),
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::World => write!(f, "world"),
            ZoneId::Continent(c) => write!(f, "continent:{c}"),
            ZoneId::Region(code) => write!(f, "region:{code}"),
            ZoneId::Department(code) => write!(f, "department:{code}"),
            ZoneId::District { department, number } => write!(f, "district:{department}-{number}"),
        }
    }
}

/// Canonical department code: trimmed, upper-cased ("2a" -> "2A") and
/// zero-padded to two digits ("1" -> "01").
pub(crate) fn normalize_department(raw: &str) -> Arc<str> {
    let code = raw.trim().to_ascii_uppercase();
    Arc::from(pad_single_digit(code))
}

/// Canonical region code: trimmed and zero-padded to two digits.
pub(crate) fn normalize_region(raw: &str) -> Arc<str> {
    Arc::from(pad_single_digit(raw.trim().to_string()))
}

fn pad_single_digit(code: String) -> String {
    if code.len() == 1 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{code}")
    } else {
        code
    }
}
