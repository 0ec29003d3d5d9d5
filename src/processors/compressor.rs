// appshots/src/processors/compressor.rs
use crate::core::{AppshotsError, Result};
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

/// Writes PNG files, losslessly recompressed with oxipng unless disabled.
pub struct Compressor {
    optimize_png: bool,
}

impl Compressor {
    pub fn new() -> Self {
        Self { optimize_png: true }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    pub fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        log::debug!(
            "Saving {}x{} PNG to {} (optimize: {})",
            image.width(),
            image.height(),
            path.display(),
            self.optimize_png
        );

        let data = self.encode_png(image)?;
        std::fs::write(path, &data)?;

        Ok(data.len() as u64)
    }

    pub fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        if !self.optimize_png {
            return Ok(buffer.into_inner());
        }

        let raw = buffer.into_inner();
        let optimized = optimize_from_memory(&raw, &Options::default())
            .map_err(|e| AppshotsError::Processing(format!("PNG optimization failed: {}", e)))?;

        log::debug!("PNG optimized: {} -> {} bytes", raw.len(), optimized.len());
        Ok(optimized)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}
