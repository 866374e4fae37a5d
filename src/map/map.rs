use serde_json::Value;

use super::{continent::Continent, layer::{AtlasLayer, Zone}, zone_id::ZoneId, zone_level::ZoneLevel};

/// Every zone of the map, one layer per administrative level.
///
/// The world root and the three pseudo-continents always exist: they are
/// synthesized on construction and replaced when the data provides them.
#[derive(Debug)]
pub struct Atlas {
    world: Zone,
    continents: [Zone; 3],
    root_geoms: [Option<Value>; 4], // world first, then continents by code
    regions: AtlasLayer,
    departments: AtlasLayer,
    districts: AtlasLayer,
    unclassified: usize,
}

impl Default for Atlas {
    fn default() -> Self {
        Self {
            world: Zone::new(ZoneId::World, "Monde"),
            continents: Continent::ALL.map(|c| Zone::new(ZoneId::Continent(c), c.name())),
            root_geoms: [None, None, None, None],
            regions: AtlasLayer::new(ZoneLevel::Region),
            departments: AtlasLayer::new(ZoneLevel::Department),
            districts: AtlasLayer::new(ZoneLevel::District),
            unclassified: 0,
        }
    }
}

impl Atlas {
    pub fn new() -> Self { Self::default() }

    /// The world root, the only zone without a parent.
    #[inline] pub fn root(&self) -> &Zone { &self.world }

    /// The pseudo-continent root for `continent`.
    #[inline]
    pub fn continent(&self, continent: Continent) -> &Zone {
        &self.continents[continent.code() as usize]
    }

    pub fn get_layer(&self, level: ZoneLevel) -> Option<&AtlasLayer> {
        match level {
            ZoneLevel::World | ZoneLevel::Continent => None,
            ZoneLevel::Region => Some(&self.regions),
            ZoneLevel::Department => Some(&self.departments),
            ZoneLevel::District => Some(&self.districts),
        }
    }

    fn get_layer_mut(&mut self, level: ZoneLevel) -> Option<&mut AtlasLayer> {
        match level {
            ZoneLevel::World | ZoneLevel::Continent => None,
            ZoneLevel::Region => Some(&mut self.regions),
            ZoneLevel::Department => Some(&mut self.departments),
            ZoneLevel::District => Some(&mut self.districts),
        }
    }

    /// All zones of one level, in insertion order.
    pub fn zones(&self, level: ZoneLevel) -> &[Zone] {
        match level {
            ZoneLevel::World => std::slice::from_ref(&self.world),
            ZoneLevel::Continent => &self.continents,
            _ => self.get_layer(level).map(AtlasLayer::zones).unwrap_or_default(),
        }
    }

    pub fn get(&self, id: &ZoneId) -> Option<&Zone> {
        match id {
            ZoneId::World => Some(&self.world),
            ZoneId::Continent(c) => Some(self.continent(*c)),
            _ => self.get_layer(id.level())?.get(id),
        }
    }

    /// The opaque geometry attached to a zone, for the rendering layer.
    pub fn geometry(&self, id: &ZoneId) -> Option<&Value> {
        match id {
            ZoneId::World => self.root_geoms[0].as_ref(),
            ZoneId::Continent(c) => self.root_geoms[1 + c.code() as usize].as_ref(),
            _ => self.get_layer(id.level())?.geometry(id),
        }
    }

    /// Insert or replace a zone.
    pub fn insert(&mut self, zone: Zone, geometry: Option<Value>) {
        match zone.id {
            ZoneId::World => {
                self.world = zone;
                self.root_geoms[0] = geometry;
            }
            ZoneId::Continent(c) => {
                let i = c.code() as usize;
                self.continents[i] = zone;
                self.root_geoms[1 + i] = geometry;
            }
            _ => {
                if let Some(layer) = self.get_layer_mut(zone.level()) {
                    layer.insert(zone, geometry);
                }
            }
        }
    }

    /// Number of zones, roots included.
    pub fn len(&self) -> usize {
        1 + self.continents.len() + self.regions.len() + self.departments.len() + self.districts.len()
    }

    #[inline] pub fn is_empty(&self) -> bool { false }

    /// Number of source features skipped because no zone code could be read.
    #[inline] pub fn num_unclassified(&self) -> usize { self.unclassified }

    pub(crate) fn note_unclassified(&mut self) { self.unclassified += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_are_synthesized() {
        let atlas = Atlas::new();
        assert_eq!(atlas.len(), 4);
        assert_eq!(atlas.root().id, ZoneId::World);
        for c in Continent::ALL {
            assert_eq!(atlas.continent(c).id, ZoneId::Continent(c));
            assert_eq!(&*atlas.continent(c).name, c.name());
        }
    }

    #[test]
    fn insert_routes_by_level() {
        let mut atlas = Atlas::new();
        atlas.insert(Zone::new(ZoneId::region("11"), "Île-de-France"), None);
        atlas.insert(Zone::new(ZoneId::department("75"), "Paris").with_region("11"), None);
        atlas.insert(Zone::new(ZoneId::Continent(Continent::Overseas), "DROM-COM"), Some(Value::Bool(true)));

        assert_eq!(atlas.zones(ZoneLevel::Region).len(), 1);
        assert_eq!(atlas.zones(ZoneLevel::Department).len(), 1);
        assert_eq!(&*atlas.continent(Continent::Overseas).name, "DROM-COM");
        assert_eq!(atlas.geometry(&ZoneId::Continent(Continent::Overseas)), Some(&Value::Bool(true)));
        assert!(atlas.get(&ZoneId::department("13")).is_none());
    }
}
