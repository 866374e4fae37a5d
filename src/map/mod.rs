mod classify;
mod continent;
mod hierarchy;
mod io;
mod layer;
mod map;
mod url;
mod zone_id;
mod zone_level;

pub use classify::classify;
pub use continent::Continent;
pub use hierarchy::compare_features;
pub use layer::{AtlasLayer, ParentRefs, Zone};
pub use map::Atlas;
pub use url::Segments;
pub use zone_id::ZoneId;
pub use zone_level::ZoneLevel;

pub(crate) use zone_id::normalize_department;
