#![doc = "Augora zone hierarchy and deputy filtering engine"]
mod common;
mod error;
mod map;
mod pack;
mod roster;
mod view;

#[doc(inline)]
pub use error::ParseError;

#[doc(inline)]
pub use map::{classify, compare_features, Atlas, AtlasLayer, Continent, ParentRefs, Segments, Zone, ZoneId, ZoneLevel};

#[doc(inline)]
pub use roster::{
    activity_max, age_series, average_age, bucket_ages, count_by_gender, count_by_group, count_in_group,
    count_of_gender, filter, filter_list, gender_counts, group_counts, group_series, Activity, Address, AgeBucket,
    AgeRange, AgeStrategy, Contact, Deputy, FilterState, Gender, GroupDatum, GroupKey, Mandate, PartyGroup, Roster,
    AGE_RANGES, MAX_EXACT_AGES,
};

#[doc(inline)]
pub use view::{resolve, Pin, ZoneView, DEFAULT_FILL, EMPTY_FILL};

#[doc(inline)]
pub use pack::{DataPack, DirPack, LayerFiles, Manifest, MemPack, PackSink, PackSource};
