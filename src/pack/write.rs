use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    common::ensure_dir_exists,
    map::Zone,
    pack::{
        manifest::{LayerFiles, Manifest, MANIFEST_FILE},
        read::DataPack,
        DirPack, PackSink,
    },
};

impl DataPack {
    /// Write the pack to a directory, creating it if needed.
    pub fn write_to_dir(&self, path: &Path) -> Result<()> {
        ensure_dir_exists(path)?;
        self.write_to_pack_sink(&mut DirPack::new(path))
            .with_context(|| format!("[pack::write] Failed to write data pack to {}", path.display()))
    }

    /// Write every layer, including the synthesized roots, plus a manifest
    /// naming them all.
    pub fn write_to_pack_sink(&self, sink: &mut dyn PackSink) -> Result<()> {
        let manifest = Manifest {
            layers: LayerFiles { world: Some("world.geojson".to_string()), ..LayerFiles::default() },
            ..Manifest::default()
        };

        sink.write(&manifest.deputies, &serde_json::to_vec_pretty(self.roster.deputies())?)?;
        sink.write(&manifest.groups, &serde_json::to_vec_pretty(self.roster.groups())?)?;

        for (level, file) in manifest.layers.iter() {
            let zones: Vec<&Zone> = self.atlas.zones(level).iter().collect();
            let collection = self.atlas.to_geojson(&zones);
            sink.write(file, &serde_json::to_vec(&collection)?)?;
            info!(level = %level, file = file, zones = zones.len(), "[pack::write] wrote layer");
        }

        sink.write(MANIFEST_FILE, &serde_json::to_vec_pretty(&manifest)?)?;
        Ok(())
    }
}
