use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};

/// Read access to the files of a data pack by pack-relative name,
/// e.g. "manifest.json", "deputies.json", "districts.geojson".
pub trait PackSource: Send + Sync {
    fn read(&self, name: &str) -> Result<Arc<[u8]>>;
    fn contains(&self, name: &str) -> bool;
}

/// Write access to the files of a data pack.
pub trait PackSink: Send + Sync {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// A data pack laid out as a plain directory.
#[derive(Debug, Clone)]
pub struct DirPack {
    root: PathBuf,
}

impl DirPack {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    #[inline] pub fn root(&self) -> &std::path::Path { &self.root }

    fn path(&self, name: &str) -> PathBuf { self.root.join(name) }
}

impl PackSource for DirPack {
    fn read(&self, name: &str) -> Result<Arc<[u8]>> {
        let path = self.path(name);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("[DirPack::read] Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn contains(&self, name: &str) -> bool { self.path(name).is_file() }
}

impl PackSink for DirPack {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("[DirPack::write] Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, bytes)
            .with_context(|| format!("[DirPack::write] Failed to write {}", path.display()))
    }
}

/// A data pack held in memory, keyed by file name.
#[derive(Debug, Default, Clone)]
pub struct MemPack {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemPack {
    pub fn new() -> Self { Self::default() }

    /// Add a file, replacing any previous one of the same name.
    pub fn with_file(mut self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        self.files.insert(name.to_string(), Arc::from(contents.as_ref()));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.files.keys().map(String::as_str) }
}

impl PackSource for MemPack {
    fn read(&self, name: &str) -> Result<Arc<[u8]>> {
        self.files.get(name).cloned()
            .ok_or_else(|| anyhow!("[MemPack::read] Missing pack file: {name}"))
    }

    fn contains(&self, name: &str) -> bool { self.files.contains_key(name) }
}

impl PackSink for MemPack {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(name.to_string(), Arc::from(bytes));
        Ok(())
    }
}
