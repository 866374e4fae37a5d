use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::ParseError, map::normalize_department};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "H")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "H",
            Gender::Female => "F",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H" | "h" => Ok(Gender::Male),
            "F" | "f" => Ok(Gender::Female),
            other => Err(ParseError::Gender(other.to_string())),
        }
    }
}

/// One elected deputy, as supplied by the data source. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deputy {
    pub slug: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Full display name, matched by keyword search.
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    /// Party group code; unknown or missing codes count as unaffiliated.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(deserialize_with = "department_code")]
    pub department: String,
    pub district: u32,
    #[serde(default)]
    pub district_name: Option<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub mandates: Vec<Mandate>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub emails: Vec<String>,
    pub websites: Vec<String>,
    pub phone: Option<String>,
    pub addresses: Vec<Address>,
}

impl Contact {
    /// Phone number split in pairs of digits, "01 40 63 60 00".
    pub fn formatted_phone(&self) -> Option<String> {
        let digits: Vec<char> = self.phone.as_deref()?.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.is_empty() { return None }

        let pairs: Vec<String> = digits.chunks(2).map(|pair| pair.iter().collect()).collect();
        Some(pairs.join(" "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl Address {
    /// The address split before its postal code: street on the first line,
    /// postal code and city on the second.
    pub fn lines(&self) -> (String, String) {
        let split = self.postal_code.as_deref()
            .filter(|code| !code.is_empty())
            .and_then(|code| self.address.find(code));

        match split {
            Some(i) => (self.address[..i].trim_end().to_string(), self.address[i..].to_string()),
            None => (self.address.clone(), String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandate {
    pub label: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// Weekly parliamentary activity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub week: Option<String>,
    pub hemicycle_participations: u32,
    pub commission_participations: u32,
    pub hemicycle_presences: u32,
    pub commission_presences: u32,
    pub questions: u32,
}

impl Activity {
    /// Highest of the week's participations, presences and questions.
    pub fn peak(&self) -> u32 {
        self.hemicycle_participations.saturating_add(self.commission_participations)
            .max(self.hemicycle_presences.saturating_add(self.commission_presences))
            .max(self.questions)
    }
}

/// Department codes come as strings ("2A", "971") or bare numbers (1, 75).
fn department_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(u64),
    }

    let raw = match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Number(n) => n.to_string(),
    };
    Ok(normalize_department(&raw).to_string())
}
