mod cli;
mod core;
pub mod jobs;
mod processors;
mod utils;

pub use cli::{Cli, Commands};
pub use crate::core::presets;
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    AppshotsError, Background, JobConfig, JobReport, ResizeAlgorithm, Result, TargetSize,
};
pub use processors::{
    contain_geometry, cover_geometry, BatchProcessor, Compressor, ContainGeometry, CoverGeometry,
    IconPreparer, Loader, Resizer,
};
pub use utils::{base_name, collect_pngs, format_file_size, output_file_name};

pub mod prelude {
    pub use crate::{
        BatchProcessor, IconPreparer, ImageProcessor, JobConfig, ResizeAlgorithm, TargetSize,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
