use std::sync::Arc;

use ahash::AHashMap;
use geo::Point;
use serde_json::Value;

use super::{continent::Continent, zone_id::ZoneId, zone_level::ZoneLevel};

/// One administrative zone: identity and navigation data only.
/// Geometry lives next to it in the owning layer and is never inspected here.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: Arc<str>,
    pub centroid: Option<Point<f64>>, // (lon, lat)
    pub parents: ParentRefs,
}

impl Zone {
    pub fn new(id: ZoneId, name: impl Into<Arc<str>>) -> Self {
        let department = match &id {
            ZoneId::District { department, .. } => Some(department.clone()),
            _ => None,
        };
        let parents = ParentRefs { continent: id.continent(), region: None, department };
        Self { id, name: name.into(), centroid: None, parents }
    }

    pub fn with_centroid(mut self, lon: f64, lat: f64) -> Self {
        self.centroid = Some(Point::new(lon, lat));
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.parents.region = match ZoneId::region(region) {
            ZoneId::Region(code) => Some(code),
            _ => None,
        };
        self
    }

    #[inline] pub fn level(&self) -> ZoneLevel { self.id.level() }
}

/// Quick way to access the codes of the zones above a zone.
/// These are references as declared by the source data; they may be missing
/// or point at zones that do not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRefs {
    pub continent: Option<Continent>,
    pub region: Option<Arc<str>>,
    pub department: Option<Arc<str>>,
}

impl ParentRefs {
    /// The referenced zone at `level`, if any. Districts are never parents.
    pub fn get(&self, level: ZoneLevel) -> Option<ZoneId> {
        match level {
            ZoneLevel::World => Some(ZoneId::World),
            ZoneLevel::Continent => self.continent.map(ZoneId::Continent),
            ZoneLevel::Region => self.region.clone().map(ZoneId::Region),
            ZoneLevel::Department => self.department.clone().map(ZoneId::Department),
            ZoneLevel::District => None,
        }
    }
}

/// All zones of a single level, with their geometries kept apart.
#[derive(Debug)]
pub struct AtlasLayer {
    pub(crate) level: ZoneLevel,
    pub(crate) index: AHashMap<ZoneId, u32>, // Map between zone ids and per-level contiguous indices.
    pub(crate) zones: Vec<Zone>,
    pub(crate) geoms: Vec<Option<Value>>, // Opaque GeoJSON geometries, indexed like `zones`.
}

impl AtlasLayer {
    pub fn new(level: ZoneLevel) -> Self {
        Self {
            level,
            index: AHashMap::new(),
            zones: Vec::new(),
            geoms: Vec::new(),
        }
    }

    #[inline] pub fn level(&self) -> ZoneLevel { self.level }
    #[inline] pub fn len(&self) -> usize { self.zones.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.zones.is_empty() }
    #[inline] pub fn zones(&self) -> &[Zone] { &self.zones }

    pub fn get(&self, id: &ZoneId) -> Option<&Zone> {
        self.index.get(id).map(|&i| &self.zones[i as usize])
    }

    pub fn geometry(&self, id: &ZoneId) -> Option<&Value> {
        self.index.get(id).and_then(|&i| self.geoms[i as usize].as_ref())
    }

    /// Insert a zone, replacing any zone with the same id. Returns `false`
    /// (and leaves the layer untouched) when the zone is not of this level.
    pub(crate) fn insert(&mut self, zone: Zone, geometry: Option<Value>) -> bool {
        if zone.level() != self.level { return false }

        match self.index.get(&zone.id) {
            Some(&i) => {
                self.zones[i as usize] = zone;
                self.geoms[i as usize] = geometry;
            }
            None => {
                self.index.insert(zone.id.clone(), self.zones.len() as u32);
                self.zones.push(zone);
                self.geoms.push(geometry);
            }
        }
        true
    }
}
