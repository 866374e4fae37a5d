use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::map::ZoneLevel;
use crate::pack::PackSource;

pub(crate) const MANIFEST_FILE: &str = "manifest.json";

/// GeoJSON file per zone level. Levels without a file are synthesized
/// (world, pseudo-continents) or simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerFiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

impl Default for LayerFiles {
    fn default() -> Self {
        Self {
            world: None,
            continent: Some("continents.geojson".to_string()),
            region: Some("regions.geojson".to_string()),
            department: Some("departments.geojson".to_string()),
            district: Some("districts.geojson".to_string()),
        }
    }
}

impl LayerFiles {
    pub fn get(&self, level: ZoneLevel) -> Option<&str> {
        match level {
            ZoneLevel::World => self.world.as_deref(),
            ZoneLevel::Continent => self.continent.as_deref(),
            ZoneLevel::Region => self.region.as_deref(),
            ZoneLevel::Department => self.department.as_deref(),
            ZoneLevel::District => self.district.as_deref(),
        }
    }

    /// Configured files, root level first.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneLevel, &str)> {
        ZoneLevel::order().into_iter().filter_map(|level| self.get(level).map(|file| (level, file)))
    }
}

/// Names of the files making up a data pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub deputies: String,
    pub groups: String,
    pub layers: LayerFiles,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            deputies: "deputies.json".to_string(),
            groups: "groups.json".to_string(),
            layers: LayerFiles::default(),
        }
    }
}

impl Manifest {
    /// The pack's manifest, or the default layout when it has none.
    pub fn from_pack_source(src: &dyn PackSource) -> Result<Self> {
        if !src.contains(MANIFEST_FILE) {
            return Ok(Self::default());
        }
        let bytes = src.read(MANIFEST_FILE)
            .context("[Manifest::from_pack_source] Failed to read manifest.json")?;
        serde_json::from_slice(&bytes)
            .context("[Manifest::from_pack_source] Failed to parse manifest.json")
    }
}
