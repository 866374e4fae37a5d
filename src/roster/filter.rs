//! Roster filtering by keyword, group, gender and age.
//!
//! `FilterState` is immutable: every transition returns a new state, so a
//! caller can keep the previous one around and compare.

use std::{collections::BTreeSet, sync::Arc};

use tracing::debug;

use super::{
    ages::AgeRange,
    deputy::{Deputy, Gender},
    group::GroupKey,
    roster::{known_keys, Roster},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    keyword: String,
    known: Arc<[GroupKey]>,
    groups: BTreeSet<GroupKey>,
    genders: BTreeSet<Gender>,
    age: AgeRange,
}

impl FilterState {
    /// Everything selected: empty keyword, every group key, both genders,
    /// and the roster's full age domain (every age for an empty roster).
    pub fn new(roster: &Roster) -> Self {
        let known = known_keys(roster);
        Self {
            keyword: String::new(),
            groups: known.iter().cloned().collect(),
            known,
            genders: Gender::ALL.into_iter().collect(),
            age: roster.age_domain().unwrap_or(AgeRange::ALL),
        }
    }

    #[inline] pub fn keyword(&self) -> &str { &self.keyword }
    #[inline] pub fn groups(&self) -> &BTreeSet<GroupKey> { &self.groups }
    #[inline] pub fn genders(&self) -> &BTreeSet<Gender> { &self.genders }
    #[inline] pub fn age(&self) -> AgeRange { self.age }

    /// Group keys the state was built over, in rank order.
    #[inline] pub fn known_groups(&self) -> &[GroupKey] { &self.known }

    pub fn includes_group(&self, key: &GroupKey) -> bool { self.groups.contains(key) }
    pub fn includes_gender(&self, gender: Gender) -> bool { self.genders.contains(&gender) }

    fn is_known(&self, key: &GroupKey) -> bool {
        let known = self.known.contains(key);
        if !known { debug!(key = %key, "[FilterState] ignoring unknown group key") }
        known
    }

    pub fn reset(&self, roster: &Roster) -> Self { Self::new(roster) }

    pub fn is_initial(&self, roster: &Roster) -> bool { *self == Self::new(roster) }

    /// Surrounding whitespace is dropped.
    pub fn set_keyword(&self, keyword: &str) -> Self {
        Self { keyword: keyword.trim().to_string(), ..self.clone() }
    }

    pub fn toggle_group(&self, key: &GroupKey) -> Self {
        if !self.is_known(key) { return self.clone() }
        let mut groups = self.groups.clone();
        if !groups.remove(key) {
            groups.insert(key.clone());
        }
        Self { groups, ..self.clone() }
    }

    pub fn isolate_group(&self, key: &GroupKey) -> Self {
        if !self.is_known(key) { return self.clone() }
        Self { groups: BTreeSet::from([key.clone()]), ..self.clone() }
    }

    pub fn toggle_all_groups(&self, value: bool) -> Self {
        let groups = if value { self.known.iter().cloned().collect() } else { BTreeSet::new() };
        Self { groups, ..self.clone() }
    }

    /// Removing a group from an empty selection selects all the others;
    /// otherwise toggles it.
    pub fn dismiss_group(&self, key: &GroupKey) -> Self {
        if !self.is_known(key) { return self.clone() }
        if !self.groups.is_empty() { return self.toggle_group(key) }
        let groups = self.known.iter().filter(|k| *k != key).cloned().collect();
        Self { groups, ..self.clone() }
    }

    /// Turning off the only selected gender switches to the other one, so
    /// the set is never empty.
    pub fn toggle_gender(&self, gender: Gender) -> Self {
        let mut genders = self.genders.clone();
        if genders.contains(&gender) {
            genders.remove(&gender);
            if genders.is_empty() {
                genders.insert(gender.other());
            }
        } else {
            genders.insert(gender);
        }
        Self { genders, ..self.clone() }
    }

    pub fn isolate_gender(&self, gender: Gender) -> Self {
        Self { genders: BTreeSet::from([gender]), ..self.clone() }
    }

    pub fn set_age_range(&self, range: AgeRange) -> Self {
        Self { age: range, ..self.clone() }
    }
}

/// Per-deputy predicates of one state, keyword lowercased once.
struct Matcher<'a> {
    roster: &'a Roster,
    state: &'a FilterState,
    needle: String,
}

impl<'a> Matcher<'a> {
    fn new(roster: &'a Roster, state: &'a FilterState) -> Self {
        Self { roster, state, needle: state.keyword.to_lowercase() }
    }

    fn group(&self, deputy: &Deputy) -> bool { self.state.groups.contains(&self.roster.group_key(deputy)) }
    fn gender(&self, deputy: &Deputy) -> bool { self.state.genders.contains(&deputy.gender) }
    fn age(&self, deputy: &Deputy) -> bool { self.state.age.contains(deputy.age) }

    fn keyword(&self, deputy: &Deputy) -> bool {
        self.needle.is_empty() || deputy.name.to_lowercase().contains(&self.needle)
    }

    fn all(&self, deputy: &Deputy) -> bool {
        self.group(deputy) && self.gender(deputy) && self.age(deputy) && self.keyword(deputy)
    }
}

/// Deputies of the roster passing every filter, in roster order.
pub fn filter<'r>(roster: &'r Roster, state: &FilterState) -> Vec<&'r Deputy> {
    filter_list(&roster.all(), roster, state)
}

/// Deputies of `list` passing every filter, order kept.
pub fn filter_list<'d>(list: &[&'d Deputy], roster: &Roster, state: &FilterState) -> Vec<&'d Deputy> {
    let matcher = Matcher::new(roster, state);
    list.iter().copied().filter(|d| matcher.all(d)).collect()
}

/// Deputies in group `key` passing the gender, age and keyword filters,
/// whether or not the group itself is selected.
pub fn count_by_group(roster: &Roster, state: &FilterState, key: &GroupKey) -> usize {
    let matcher = Matcher::new(roster, state);
    roster.deputies().iter()
        .filter(|d| roster.group_key(d) == *key)
        .filter(|d| matcher.gender(d) && matcher.age(d) && matcher.keyword(d))
        .count()
}

/// Deputies of `gender` passing the group, age and keyword filters,
/// whether or not the gender itself is selected.
pub fn count_by_gender(roster: &Roster, state: &FilterState, gender: Gender) -> usize {
    let matcher = Matcher::new(roster, state);
    roster.deputies().iter()
        .filter(|d| d.gender == gender)
        .filter(|d| matcher.group(d) && matcher.age(d) && matcher.keyword(d))
        .count()
}

/// `count_by_group` for every known key, in rank order.
pub fn group_counts(roster: &Roster, state: &FilterState) -> Vec<(GroupKey, usize)> {
    state.known_groups().iter()
        .map(|key| (key.clone(), count_by_group(roster, state, key)))
        .collect()
}

/// `count_by_gender` for both genders.
pub fn gender_counts(roster: &Roster, state: &FilterState) -> [(Gender, usize); 2] {
    Gender::ALL.map(|g| (g, count_by_gender(roster, state, g)))
}
