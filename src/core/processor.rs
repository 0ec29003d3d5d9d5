// appshots/src/core/processor.rs
use super::{Background, JobConfig, Result, TargetSize};
use crate::processors::{Compressor, Loader, Resizer};
use crate::utils::{format_file_size, output_file_name};
use image::DynamicImage;
use std::path::{Path, PathBuf};

pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &JobConfig) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm),
            compressor: Compressor::new().with_png_optimization(config.optimize_png),
        }
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        self.loader.load(path)
    }

    /// Decodes `path` into the canonical opaque RGB form.
    pub fn load_rgb(&self, path: &Path) -> Result<DynamicImage> {
        self.loader.load_rgb(path)
    }

    /// Cover-resizes `image` to `size` and writes it into `output_dir`
    /// under a name derived from `base`, `label` and the size.
    pub fn render_cover(
        &self,
        image: &DynamicImage,
        size: TargetSize,
        output_dir: &Path,
        base: &str,
        label: Option<&str>,
    ) -> Result<PathBuf> {
        let output_path = output_dir.join(output_file_name(base, label, size));

        let resized = self.resizer.cover(image, size)?;
        let written = self.compressor.save_png(&resized, &output_path)?;

        log::debug!("{} written ({})", output_path.display(), format_file_size(written));
        Ok(output_path)
    }

    /// Fits `image` on a square opaque canvas and writes it to `output_path`.
    pub fn render_contained(
        &self,
        image: &DynamicImage,
        canvas: u32,
        background: Background,
        output_path: &Path,
    ) -> Result<PathBuf> {
        let flattened = self
            .resizer
            .contain_on_background(image, canvas, background)?;
        let written = self.compressor.save_png(&flattened, output_path)?;

        log::debug!("{} written ({})", output_path.display(), format_file_size(written));
        Ok(output_path.to_path_buf())
    }
}
