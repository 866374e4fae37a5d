mod ages;
mod deputy;
mod filter;
mod group;
mod roster;
mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use ages::{bucket_ages, AgeBucket, AgeRange, AgeStrategy};
pub use deputy::{Activity, Address, Contact, Deputy, Gender, Mandate};
pub use filter::{count_by_gender, count_by_group, filter, filter_list, gender_counts, group_counts, FilterState};
pub use group::{GroupKey, PartyGroup};
pub use roster::Roster;
pub use stats::{activity_max, age_series, average_age, count_in_group, count_of_gender, group_series, GroupDatum, AGE_RANGES, MAX_EXACT_AGES};
