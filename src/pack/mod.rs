mod manifest;
mod read;
mod source;
mod write;

pub use manifest::{LayerFiles, Manifest};
pub use read::DataPack;
pub use source::{DirPack, MemPack, PackSink, PackSource};
