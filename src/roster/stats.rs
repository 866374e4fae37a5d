//! Chart-ready summaries of a list of deputies.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{
    ages::{age_ranges, fill_buckets, AgeBucket, AgeStrategy},
    deputy::{Deputy, Gender},
    group::PartyGroup,
    roster::Roster,
};

/// Below this many distinct ages the pyramid shows one bar per age.
pub const MAX_EXACT_AGES: usize = 30;

/// Number of age ranges once the pyramid switches to ranges.
pub const AGE_RANGES: usize = 6;

/// One bar of the per-group chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDatum<'r> {
    pub code: &'r str,
    pub label: &'r str,
    pub value: usize,
    pub color: &'r str,
}

impl<'r> GroupDatum<'r> {
    fn new(group: &'r PartyGroup, value: usize) -> Self {
        Self { code: &group.code, label: &group.name, value, color: &group.color }
    }
}

/// Deputy count per group, non-empty groups only, in rank order.
pub fn group_series<'r>(list: &[&Deputy], roster: &'r Roster) -> Vec<GroupDatum<'r>> {
    roster.groups().iter()
        .map(|group| GroupDatum::new(group, count_in_group(list, &group.code)))
        .filter(|datum| datum.value > 0)
        .collect()
}

pub fn count_in_group(list: &[&Deputy], code: &str) -> usize {
    list.iter().filter(|d| d.group.as_deref() == Some(code)).count()
}

pub fn count_of_gender(list: &[&Deputy], gender: Gender) -> usize {
    list.iter().filter(|d| d.gender == gender).count()
}

/// Mean age rounded half up, `None` for an empty list.
pub fn average_age(list: &[&Deputy]) -> Option<u32> {
    if list.is_empty() { return None }
    let sum: u64 = list.iter().map(|d| u64::from(d.age)).sum();
    let n = list.len() as u64;
    u32::try_from((2 * sum + n) / (2 * n)).ok()
}

/// Highest weekly activity peak across the list, 0 without activity data.
pub fn activity_max(list: &[&Deputy]) -> u32 {
    list.iter()
        .flat_map(|d| d.activities.iter().map(|a| a.peak()))
        .max()
        .unwrap_or(0)
}

/// Age pyramid of `list`, optionally restricted to one gender. Bars are
/// exact ages while the whole list has fewer than `max_exact` distinct ages,
/// `AGE_RANGES` ranges otherwise. Bars are laid out over the whole list, so
/// both halves of a pyramid share their labels.
pub fn age_series<'d>(list: &[&'d Deputy], roster: &Roster, gender: Option<Gender>, max_exact: usize) -> Vec<AgeBucket<'d>> {
    let distinct = list.iter().map(|d| d.age).collect::<BTreeSet<_>>().len();
    let strategy = AgeStrategy::adaptive(distinct, max_exact, AGE_RANGES);
    let ranges = age_ranges(list.iter().map(|d| d.age), strategy);

    let selected: Vec<&'d Deputy> = match gender {
        Some(g) => list.iter().copied().filter(|d| d.gender == g).collect(),
        None => list.to_vec(),
    };
    fill_buckets(&ranges, &selected, roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{test_support::*, Activity};

    #[test]
    fn group_series_skips_empty_groups() {
        let roster = sample_roster();
        let list: Vec<&Deputy> = roster.all().into_iter().filter(|d| d.group.as_deref() == Some("Y")).collect();
        let series = group_series(&list, &roster);
        assert_eq!(series, vec![GroupDatum { code: "Y", label: "Groupe Y", value: 1, color: "#0000ff" }]);
    }

    #[test]
    fn counts_and_average() {
        let roster = sample_roster();
        let all = roster.all();
        assert_eq!(count_in_group(&all, "X"), 2);
        assert_eq!(count_of_gender(&all, Gender::Female), 2);
        assert_eq!(average_age(&all), Some(45));
        assert_eq!(average_age(&all[..2]), Some(38)); // 37.5
        assert_eq!(average_age(&[]), None);
    }

    #[test]
    fn activity_peak_over_list() {
        let mut busy = deputy("busy", "Busy", Gender::Male, 50, None, "75", 1);
        busy.activities = vec![
            Activity { questions: 4, ..Activity::default() },
            Activity { hemicycle_presences: 6, commission_presences: 5, ..Activity::default() },
        ];
        let idle = deputy("idle", "Idle", Gender::Male, 50, None, "75", 2);
        assert_eq!(activity_max(&[&busy, &idle]), 11);
        assert_eq!(activity_max(&[&idle]), 0);
    }

    #[test]
    fn age_series_by_gender() {
        let roster = sample_roster();
        let all = roster.all();
        let female = age_series(&all, &roster, Some(Gender::Female), MAX_EXACT_AGES);
        let summary: Vec<_> = female.iter().map(|b| (b.label.as_str(), b.total)).collect();
        assert_eq!(summary, [("30", 1), ("45", 0), ("60", 1)]);

        let ranged = age_series(&all, &roster, None, 2);
        assert!(ranged.len() <= AGE_RANGES);
        assert_eq!(ranged.iter().map(|b| b.total).sum::<usize>(), 3);
    }
}
