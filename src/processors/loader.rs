// appshots/src/processors/loader.rs
use crate::core::{AppshotsError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AppshotsError::InvalidParameter(format!(
                "Image has no pixels: {}",
                path.display()
            )));
        }

        if let Some((max_w, max_h)) = self.max_dimensions {
            if width > max_w || height > max_h {
                return Err(AppshotsError::InvalidParameter(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    /// Loads and drops any alpha channel, leaving opaque 8-bit RGB.
    pub fn load_rgb(&self, path: &Path) -> Result<DynamicImage> {
        let image = self.load(path)?;
        if matches!(image, DynamicImage::ImageRgb8(_)) {
            return Ok(image);
        }
        Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AppshotsError::NotFound(path.to_path_buf()));
        }

        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(AppshotsError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
