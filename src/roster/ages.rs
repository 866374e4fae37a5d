//! Age ranges and age-pyramid bucketing.

use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::ParseError;

use super::{deputy::Deputy, group::GroupKey, roster::Roster};

/// Inclusive range of ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    /// Matches every age.
    pub const ALL: AgeRange = AgeRange { min: 0, max: u32::MAX };

    /// Range between two bounds, in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn single(age: u32) -> Self { Self { min: age, max: age } }

    /// Smallest range containing every age, `None` for no ages.
    pub fn spanning(ages: impl IntoIterator<Item = u32>) -> Option<Self> {
        ages.into_iter().fold(None, |range, age| match range {
            None => Some(Self::single(age)),
            Some(r) => Some(Self::new(r.min.min(age), r.max.max(age))),
        })
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool { self.min <= age && age <= self.max }

    /// Number of whole ages in the range.
    pub fn span(&self) -> u32 { (self.max - self.min).saturating_add(1) }

    /// Restrict both bounds into `domain`.
    pub fn clamp_to(&self, domain: AgeRange) -> AgeRange {
        AgeRange {
            min: self.min.clamp(domain.min, domain.max),
            max: self.max.clamp(domain.min, domain.max),
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

static AGE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+))?\s*$").expect("valid age label pattern")
});

impl FromStr for AgeRange {
    type Err = ParseError;

    /// Parses "45" or "45-67".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::AgeRange(s.to_string());
        let caps = AGE_LABEL.captures(s).ok_or_else(err)?;
        let bound = |i: usize| caps.get(i).map(|m| m.as_str().parse::<u32>().map_err(|_| err()));

        let min = bound(1).ok_or_else(err)??;
        let max = bound(2).transpose()?.unwrap_or(min);
        Ok(AgeRange::new(min, max))
    }
}

/// How ages are grouped into bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStrategy {
    /// One bucket per distinct age present.
    Exact,
    /// At most `n` contiguous equal-width ranges covering the ages present.
    Ranged(usize),
}

impl AgeStrategy {
    /// Exact bars while there are fewer than `max_exact` distinct ages,
    /// `buckets` ranges otherwise.
    pub fn adaptive(distinct_ages: usize, max_exact: usize, buckets: usize) -> Self {
        if distinct_ages < max_exact { AgeStrategy::Exact } else { AgeStrategy::Ranged(buckets) }
    }
}

/// One bar of the age pyramid.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBucket<'d> {
    pub label: String,
    pub total: usize,
    /// Deputies of the bucket per group key, in group rank order. Every key
    /// of the roster is listed, empty or not.
    pub groups: Vec<(GroupKey, Vec<&'d Deputy>)>,
}

impl AgeBucket<'_> {
    /// The ages covered, parsed back from the label.
    pub fn range(&self) -> Option<AgeRange> { self.label.parse().ok() }

    pub fn group(&self, key: &GroupKey) -> &[&Deputy] {
        self.groups.iter()
            .find(|(k, _)| k == key)
            .map_or(&[][..], |(_, list)| list.as_slice())
    }
}

/// Partition `deputies` by age. Every deputy lands in exactly one bucket;
/// no deputies means no buckets.
pub fn bucket_ages<'d>(deputies: &[&'d Deputy], roster: &Roster, strategy: AgeStrategy) -> Vec<AgeBucket<'d>> {
    let ranges = age_ranges(deputies.iter().map(|d| d.age), strategy);
    fill_buckets(&ranges, deputies, roster)
}

/// Bucket bounds covering `ages`.
pub(crate) fn age_ranges(ages: impl IntoIterator<Item = u32>, strategy: AgeStrategy) -> Vec<AgeRange> {
    let ages: BTreeSet<u32> = ages.into_iter().collect();
    let (Some(&min), Some(&max)) = (ages.first(), ages.last()) else { return Vec::new() };

    match strategy {
        AgeStrategy::Exact => ages.into_iter().map(AgeRange::single).collect(),
        AgeStrategy::Ranged(n) => {
            let n = u32::try_from(n.max(1)).unwrap_or(u32::MAX);
            let width = AgeRange::new(min, max).span().div_ceil(n);
            (0..n)
                .map(|i| min.saturating_add(i.saturating_mul(width)))
                .take_while(|&lo| lo <= max)
                .map(|lo| AgeRange::new(lo, lo.saturating_add(width - 1).min(max)))
                .collect()
        }
    }
}

/// One bucket per range, deputies split by group key in rank order.
pub(crate) fn fill_buckets<'d>(ranges: &[AgeRange], deputies: &[&'d Deputy], roster: &Roster) -> Vec<AgeBucket<'d>> {
    let keys = roster.group_keys();
    ranges.iter()
        .map(|range| {
            let members: Vec<&'d Deputy> = deputies.iter().copied().filter(|d| range.contains(d.age)).collect();
            let groups = keys.iter()
                .map(|key| {
                    let list = members.iter().copied().filter(|d| roster.group_key(d) == *key).collect();
                    (key.clone(), list)
                })
                .collect();
            AgeBucket { label: range.to_string(), total: members.len(), groups }
        })
        .collect()
}
