// appshots/src/processors/mod.rs
mod batch;
mod compressor;
mod icon;
mod loader;
mod resizer;

pub use batch::BatchProcessor;
pub use compressor::Compressor;
pub use icon::IconPreparer;
pub use loader::Loader;
pub use resizer::{contain_geometry, cover_geometry, ContainGeometry, CoverGeometry, Resizer};
