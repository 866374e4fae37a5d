use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    common::require_dir_exists,
    map::Atlas,
    pack::{manifest::Manifest, DirPack, PackSource},
    roster::{Deputy, PartyGroup, Roster},
};

/// Everything the engine needs, loaded once and never mutated.
#[derive(Debug)]
pub struct DataPack {
    pub roster: Roster,
    pub atlas: Atlas,
}

impl DataPack {
    /// Load a data pack from a directory.
    pub fn read_from_dir(path: &Path) -> Result<Self> {
        require_dir_exists(path)?;
        Self::read_from_pack_source(&DirPack::new(path))
            .with_context(|| format!("[pack::read] Failed to load data pack from {}", path.display()))
    }

    /// Load a data pack from any source. Layer files that are not present
    /// are skipped; the roster files are required.
    pub fn read_from_pack_source(src: &dyn PackSource) -> Result<Self> {
        let manifest = Manifest::from_pack_source(src)?;

        let deputies: Vec<Deputy> = read_json(src, &manifest.deputies)?;
        let groups: Vec<PartyGroup> = read_json(src, &manifest.groups)?;
        let roster = Roster::new(deputies, groups);

        let mut atlas = Atlas::new();
        for (level, file) in manifest.layers.iter() {
            if !src.contains(file) {
                debug!(level = %level, file = file, "[pack::read] layer file not found, skipping");
                continue;
            }
            let bytes = src.read(file)?;
            let collection: serde_json::Value = serde_json::from_slice(&bytes)
                .with_context(|| format!("[pack::read] Invalid GeoJSON in {file}"))?;
            let added = atlas.add_geojson(&collection)
                .with_context(|| format!("[pack::read] Failed to load {level} layer from {file}"))?;
            info!(level = %level, file = file, zones = added, "[pack::read] loaded layer");
        }

        if atlas.num_unclassified() > 0 {
            warn!(count = atlas.num_unclassified(), "[pack::read] features without zone codes were skipped");
        }
        info!(
            deputies = roster.len(),
            groups = roster.groups().len(),
            zones = atlas.len(),
            "[pack::read] data pack loaded"
        );

        Ok(Self { roster, atlas })
    }
}

fn read_json<T: DeserializeOwned>(src: &dyn PackSource, file: &str) -> Result<T> {
    let bytes = src.read(file)
        .with_context(|| format!("[pack::read] Missing required file {file}"))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("[pack::read] Failed to parse {file}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map::ZoneId, pack::MemPack};

    const DEPUTIES: &str = r#"[
        { "slug": "alice-a", "name": "Alice A", "gender": "F", "age": 30, "group": "X", "department": "75", "district": 1 }
    ]"#;
    const GROUPS: &str = r##"[ { "code": "X", "name": "Groupe X", "rank": 1, "color": "#ff0000" } ]"##;
    const DEPARTMENTS: &str = r#"{ "type": "FeatureCollection", "features": [
        { "type": "Feature", "geometry": null, "properties": { "code_dpt": "75", "code_reg": "11", "nom": "Paris" } }
    ] }"#;

    #[test]
    fn loads_present_layers_only() {
        let pack = MemPack::new()
            .with_file("deputies.json", DEPUTIES)
            .with_file("groups.json", GROUPS)
            .with_file("departments.geojson", DEPARTMENTS);

        let data = DataPack::read_from_pack_source(&pack).unwrap();
        assert_eq!(data.roster.len(), 1);
        assert_eq!(data.atlas.get(&ZoneId::department("75")).unwrap().name.as_ref(), "Paris");
        assert_eq!(data.atlas.len(), 5);
    }

    #[test]
    fn roster_files_are_required() {
        let pack = MemPack::new().with_file("deputies.json", DEPUTIES);
        let err = DataPack::read_from_pack_source(&pack).unwrap_err();
        assert!(format!("{err:#}").contains("groups.json"));
    }

    #[test]
    fn invalid_layer_is_an_error() {
        let pack = MemPack::new()
            .with_file("deputies.json", DEPUTIES)
            .with_file("groups.json", GROUPS)
            .with_file("regions.geojson", "[]");
        assert!(DataPack::read_from_pack_source(&pack).is_err());
    }
}
