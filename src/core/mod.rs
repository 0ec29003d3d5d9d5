// appshots/src/core/mod.rs
pub mod presets;
pub mod processor;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const MAX_DIMENSION: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    #[default]
    Lanczos3,
}

/// Output canvas in pixels. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AppshotsError::InvalidParameter(format!(
                "Target size must be positive, got {}x{}",
                width, height
            )));
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(AppshotsError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        Ok(Self { width, height })
    }

    /// Only for the compile-time presets, which are known to be valid.
    pub(crate) const fn fixed(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Solid RGB fill used behind contained images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background(pub [u8; 3]);

impl Background {
    pub fn to_rgba(self) -> image::Rgba<u8> {
        let [r, g, b] = self.0;
        image::Rgba([r, g, b, 0xFF])
    }
}

#[derive(Debug, Clone)]
pub struct JobConfig {
    pub algorithm: ResizeAlgorithm,
    pub optimize_png: bool,
    pub max_sources: Option<usize>,
    pub show_progress: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            algorithm: ResizeAlgorithm::Lanczos3,
            optimize_png: true,
            max_sources: None,
            show_progress: true,
        }
    }
}

impl JobConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_sources == Some(0) {
            return Err(AppshotsError::InvalidParameter(
                "Source limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// What a job wrote and what it had to leave out.
#[derive(Debug, Default)]
pub struct JobReport {
    pub saved: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum AppshotsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, AppshotsError>;
