// appshots/src/processors/icon.rs
use crate::core::processor::ImageProcessor;
use crate::core::{AppshotsError, Background, JobConfig, JobReport, Result};
use std::path::Path;

/// Square, fully opaque app icon. Store submission rejects icons with alpha.
pub struct IconPreparer {
    processor: ImageProcessor,
    canvas: u32,
    background: Background,
}

impl IconPreparer {
    pub fn new(config: &JobConfig, canvas: u32, background: Background) -> Result<Self> {
        config.validate()?;
        if canvas == 0 {
            return Err(AppshotsError::InvalidParameter(
                "Icon canvas must be at least 1 pixel".to_string(),
            ));
        }

        Ok(Self {
            processor: ImageProcessor::new(config),
            canvas,
            background,
        })
    }

    /// Both the source and the directory receiving `output` must exist.
    pub fn prepare(&self, source: &Path, output: &Path) -> Result<JobReport> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(AppshotsError::NotFound(parent.to_path_buf()));
            }
        }

        // Keeps alpha so transparent areas blend onto the background.
        let image = self.processor.load(source)?;
        let saved = self
            .processor
            .render_contained(&image, self.canvas, self.background, output)?;

        log::info!("Saved: {}", saved.display());

        Ok(JobReport {
            saved: vec![saved],
            skipped: Vec::new(),
        })
    }
}
