use std::sync::Arc;

use ahash::AHashMap;
use rand::{seq::SliceRandom, Rng};
use tracing::warn;

use super::{
    ages::AgeRange,
    deputy::Deputy,
    group::{GroupKey, PartyGroup},
};

/// Immutable snapshot of deputies and party groups.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    deputies: Vec<Deputy>,
    groups: Vec<PartyGroup>, // rank order
    keys: Vec<GroupKey>,     // parallel to groups
    index: AHashMap<String, u32>,
}

impl Roster {
    /// Build a roster, ordering groups by rank. A group code listed twice
    /// keeps its first entry.
    pub fn new(deputies: Vec<Deputy>, mut groups: Vec<PartyGroup>) -> Self {
        groups.sort_by_key(|g| g.rank);

        let mut index = AHashMap::with_capacity(groups.len());
        let mut unique = Vec::with_capacity(groups.len());
        for group in groups {
            if index.contains_key(&group.code) {
                warn!(code = %group.code, "[Roster::new] duplicate group code, keeping first");
                continue;
            }
            index.insert(group.code.clone(), unique.len() as u32);
            unique.push(group);
        }
        let keys = unique.iter().map(|g| GroupKey::group(&g.code)).collect();

        let unresolved = deputies.iter()
            .filter(|d| d.group.as_deref().is_some_and(|code| !index.contains_key(code)))
            .count();
        if unresolved > 0 {
            warn!(count = unresolved, "[Roster::new] deputies with an unknown group code are unaffiliated");
        }

        Self { deputies, groups: unique, keys, index }
    }

    #[inline] pub fn len(&self) -> usize { self.deputies.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.deputies.is_empty() }

    #[inline] pub fn deputies(&self) -> &[Deputy] { &self.deputies }

    /// Every deputy, borrowed, in roster order.
    pub fn all(&self) -> Vec<&Deputy> { self.deputies.iter().collect() }

    /// Groups in rank order.
    #[inline] pub fn groups(&self) -> &[PartyGroup] { &self.groups }

    pub fn group(&self, code: &str) -> Option<&PartyGroup> {
        self.index.get(code).map(|&i| &self.groups[i as usize])
    }

    pub fn group_of(&self, deputy: &Deputy) -> Option<&PartyGroup> {
        self.group(deputy.group.as_deref()?)
    }

    pub fn group_key(&self, deputy: &Deputy) -> GroupKey {
        deputy.group.as_deref()
            .and_then(|code| self.index.get(code))
            .map_or(GroupKey::Unaffiliated, |&i| self.keys[i as usize].clone())
    }

    /// Every selectable group key, groups in rank order then `Unaffiliated`.
    pub fn group_keys(&self) -> Vec<GroupKey> {
        self.keys.iter().cloned().chain([GroupKey::Unaffiliated]).collect()
    }

    pub fn contains_key(&self, key: &GroupKey) -> bool {
        match key {
            GroupKey::Group(code) => self.index.contains_key(&**code),
            GroupKey::Unaffiliated => true,
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Deputy> {
        self.deputies.iter().find(|d| d.slug == slug)
    }

    /// Youngest to oldest age in the roster, `None` when empty.
    pub fn age_domain(&self) -> Option<AgeRange> {
        AgeRange::spanning(self.deputies.iter().map(|d| d.age))
    }

    /// The roster in random order, as the deputy list is first shown.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Deputy> {
        let mut list = self.all();
        list.shuffle(rng);
        list
    }
}

/// Shared handle on the group key universe.
pub(crate) fn known_keys(roster: &Roster) -> Arc<[GroupKey]> {
    roster.group_keys().into()
}
