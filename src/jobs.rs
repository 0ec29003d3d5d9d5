// appshots/src/jobs.rs
//! The three fixed jobs, wired to the presets. `root` is the project
//! directory every preset path is resolved against.

use crate::core::presets::{
    APP_STORE_SIZES, ASSETS_DIR, ICON_BACKGROUND, ICON_OUTPUT, ICON_SIZE, ICON_SOURCE,
    IPAD_LABEL, IPAD_MAX_SOURCES, IPAD_SIZES, IPAD_SOURCE_SUFFIX, OUTPUT_DIR, SCREENSHOT_SOURCES,
};
use crate::core::{JobConfig, JobReport, Result};
use crate::processors::{BatchProcessor, IconPreparer};
use std::path::{Path, PathBuf};

/// Cover-resizes the configured screenshots to every App Store size.
pub fn screenshots(root: &Path, config: JobConfig) -> Result<JobReport> {
    let assets = root.join(ASSETS_DIR);
    let sources: Vec<PathBuf> = SCREENSHOT_SOURCES
        .iter()
        .map(|name| assets.join(name))
        .collect();

    BatchProcessor::new(config)?.resize_screenshots(
        &sources,
        &APP_STORE_SIZES,
        &root.join(OUTPUT_DIR),
    )
}

/// Builds iPad Pro 13" screenshots from earlier `screenshots` output.
pub fn ipad(root: &Path, config: JobConfig) -> Result<JobReport> {
    let config = JobConfig {
        max_sources: Some(IPAD_MAX_SOURCES),
        ..config
    };

    BatchProcessor::new(config)?.derive_from_existing(
        &root.join(OUTPUT_DIR),
        IPAD_SOURCE_SUFFIX,
        &IPAD_SIZES,
        IPAD_LABEL,
    )
}

pub fn icon(root: &Path, config: JobConfig) -> Result<JobReport> {
    IconPreparer::new(&config, ICON_SIZE, ICON_BACKGROUND)?
        .prepare(&root.join(ICON_SOURCE), &root.join(ICON_OUTPUT))
}
