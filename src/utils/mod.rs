// appshots/src/utils/mod.rs
use crate::core::{AppshotsError, Result, TargetSize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File stem with every occurrence of the given dimension tags removed.
pub fn base_name(path: &Path, strip_suffixes: &[&str]) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    strip_suffixes
        .iter()
        .fold(stem, |name, suffix| name.replace(suffix, ""))
}

/// `<base>_<w>x<h>.png`, or `<base>_<label>_<w>x<h>.png` with a device label.
pub fn output_file_name(base: &str, label: Option<&str>, size: TargetSize) -> String {
    match label {
        Some(label) => format!("{}_{}_{}.png", base, label, size),
        None => format!("{}_{}.png", base, size),
    }
}

pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

/// PNG files directly inside `dir` whose names end with `suffix`, sorted.
pub fn collect_pngs(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => io.into(),
            None => AppshotsError::Processing(format!("Failed to list {}", dir.display())),
        })?;

        if !entry.file_type().is_file() || !is_png(entry.path()) {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(suffix))
            .unwrap_or(false);
        if matches {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presets::KNOWN_DIMENSION_SUFFIXES;

    #[test]
    fn base_name_strips_known_suffixes() {
        let path = Path::new("shots/home_1242x2688.png");
        assert_eq!(base_name(path, &KNOWN_DIMENSION_SUFFIXES), "home");

        let path = Path::new("shots/home_1284x2778.png");
        assert_eq!(base_name(path, &KNOWN_DIMENSION_SUFFIXES), "home");
    }

    #[test]
    fn base_name_keeps_other_stems() {
        let path = Path::new("/tmp/home_2688x1242.png");
        assert_eq!(base_name(path, &KNOWN_DIMENSION_SUFFIXES), "home_2688x1242");
        assert_eq!(base_name(Path::new("photo.png"), &[]), "photo");
    }

    #[test]
    fn output_names() {
        let size = TargetSize::new(2064, 2752).unwrap();
        assert_eq!(output_file_name("home", None, size), "home_2064x2752.png");
        assert_eq!(
            output_file_name("home", Some("iPad13"), size),
            "home_iPad13_2064x2752.png"
        );
    }

    #[test]
    fn collect_pngs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_1242x2688.png", "a_1242x2688.png", "c_2688x1242.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested_1242x2688.png")).unwrap();

        let found = collect_pngs(dir.path(), "_1242x2688.png").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a_1242x2688.png", "b_1242x2688.png"]);

        assert_eq!(collect_pngs(dir.path(), "").unwrap().len(), 3);
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(1536), "1.50 KB");
    }
}
