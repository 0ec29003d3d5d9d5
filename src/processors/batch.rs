// appshots/src/processors/batch.rs
use crate::core::presets::KNOWN_DIMENSION_SUFFIXES;
use crate::core::processor::ImageProcessor;
use crate::core::{AppshotsError, JobConfig, JobReport, Result, TargetSize};
use crate::utils::{base_name, collect_pngs};
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Runs the cover transform for every (source, size) pair, one after another.
pub struct BatchProcessor {
    config: JobConfig,
    processor: ImageProcessor,
}

impl BatchProcessor {
    pub fn new(config: JobConfig) -> Result<Self> {
        config.validate()?;
        let processor = ImageProcessor::new(&config);

        Ok(Self { config, processor })
    }

    /// Renders each existing source at every size into `output_dir`,
    /// creating the directory if needed. Missing sources are skipped.
    pub fn resize_screenshots(
        &self,
        sources: &[PathBuf],
        sizes: &[TargetSize],
        output_dir: &Path,
    ) -> Result<JobReport> {
        std::fs::create_dir_all(output_dir)?;

        let sources = self.limit(sources);
        let pb = self.create_progress_bar(sources.len() * sizes.len());
        let mut report = JobReport::default();

        for path in sources {
            if !path.exists() {
                pb.suspend(|| log::warn!("Skipped (not found): {}", path.display()));
                pb.inc(sizes.len() as u64);
                report.skipped.push(path.clone());
                continue;
            }

            let image = self.processor.load_rgb(path)?;
            let base = base_name(path, &[]);
            self.render_sizes(&image, &base, None, sizes, output_dir, &pb, &mut report)?;
        }

        pb.finish_and_clear();
        Ok(report)
    }

    /// Re-renders earlier screenshot outputs found in `output_dir` at the
    /// given sizes, tagging the new files with `label`.
    ///
    /// Outputs of the preferred `source_suffix` are used when present,
    /// otherwise any PNG in the directory. The directory has to exist.
    pub fn derive_from_existing(
        &self,
        output_dir: &Path,
        source_suffix: &str,
        sizes: &[TargetSize],
        label: &str,
    ) -> Result<JobReport> {
        if !output_dir.is_dir() {
            return Err(AppshotsError::NotFound(output_dir.to_path_buf()));
        }

        let mut sources = collect_pngs(output_dir, source_suffix)?;
        if sources.is_empty() {
            log::debug!(
                "No *{} in {}, falling back to every PNG",
                source_suffix,
                output_dir.display()
            );
            sources = collect_pngs(output_dir, "")?;
        }

        if sources.is_empty() {
            log::warn!(
                "No PNG screenshots in {}. Run `appshots screenshots` first",
                output_dir.display()
            );
            return Ok(JobReport::default());
        }

        let sources = self.limit(&sources);
        log::debug!("Deriving {} sizes from {} sources", sizes.len(), sources.len());

        let pb = self.create_progress_bar(sources.len() * sizes.len());
        let mut report = JobReport::default();

        for path in sources {
            let image = self.processor.load_rgb(path)?;
            let base = base_name(path, &KNOWN_DIMENSION_SUFFIXES);
            self.render_sizes(&image, &base, Some(label), sizes, output_dir, &pb, &mut report)?;
        }

        pb.finish_and_clear();
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_sizes(
        &self,
        image: &DynamicImage,
        base: &str,
        label: Option<&str>,
        sizes: &[TargetSize],
        output_dir: &Path,
        pb: &ProgressBar,
        report: &mut JobReport,
    ) -> Result<()> {
        for &size in sizes {
            pb.set_message(format!("{} @ {}", base, size));
            let saved = self
                .processor
                .render_cover(image, size, output_dir, base, label)?;

            pb.suspend(|| log::info!("Saved: {}", saved.display()));
            pb.inc(1);
            report.saved.push(saved);
        }

        Ok(())
    }

    fn limit<'a>(&self, sources: &'a [PathBuf]) -> &'a [PathBuf] {
        match self.config.max_sources {
            Some(max) if sources.len() > max => &sources[..max],
            _ => sources,
        }
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}
