use super::{Contact, Deputy, Gender, PartyGroup, Roster};

pub(crate) fn deputy(slug: &str, name: &str, gender: Gender, age: u32, group: Option<&str>, department: &str, district: u32) -> Deputy {
    Deputy {
        slug: slug.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        name: name.to_string(),
        gender,
        age,
        group: group.map(str::to_string),
        department: department.to_string(),
        district,
        district_name: None,
        contact: Contact::default(),
        mandates: Vec::new(),
        activities: Vec::new(),
    }
}

pub(crate) fn group(code: &str, rank: u32, color: &str) -> PartyGroup {
    PartyGroup { code: code.to_string(), name: format!("Groupe {code}"), rank, color: color.to_string() }
}

pub(crate) fn sample_groups() -> Vec<PartyGroup> {
    vec![group("X", 1, "#ff0000"), group("Y", 2, "#0000ff")]
}

/// A (F, 30, X), B (M, 45, X), C (F, 60, Y).
pub(crate) fn sample_roster() -> Roster {
    Roster::new(vec![
        deputy("alice-a", "Alice A", Gender::Female, 30, Some("X"), "75", 1),
        deputy("bob-b", "Bob B", Gender::Male, 45, Some("X"), "75", 2),
        deputy("carol-c", "Carol C", Gender::Female, 60, Some("Y"), "971", 1),
    ], sample_groups())
}
