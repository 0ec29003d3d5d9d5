// appshots/src/processors/resizer.rs
use crate::core::{AppshotsError, Background, ResizeAlgorithm, Result, TargetSize};
use image::{imageops, imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};

/// Scale, intermediate size and crop offset for a cover resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverGeometry {
    pub scale: f64,
    pub scaled: (u32, u32),
    pub offset: (u32, u32),
}

/// Scale, pasted size and paste offset for a contain-on-canvas resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainGeometry {
    pub scale: f64,
    pub scaled: (u32, u32),
    pub offset: (u32, u32),
}

/// Computes the cover transform for `source` onto `target`.
///
/// The scaled size never falls below the target on either axis: rounding
/// can leave the minor axis one pixel short, in which case it is bumped up
/// to the target instead of letting the crop run off the edge.
pub fn cover_geometry(source: (u32, u32), target: TargetSize) -> Result<CoverGeometry> {
    let (iw, ih) = source;
    if iw == 0 || ih == 0 {
        return Err(AppshotsError::InvalidParameter(format!(
            "Cannot resize an empty {}x{} image",
            iw, ih
        )));
    }

    let (tw, th) = (target.width, target.height);
    let scale = (tw as f64 / iw as f64).max(th as f64 / ih as f64);

    let new_w = ((iw as f64 * scale).round() as u32).max(tw);
    let new_h = ((ih as f64 * scale).round() as u32).max(th);

    Ok(CoverGeometry {
        scale,
        scaled: (new_w, new_h),
        offset: ((new_w - tw) / 2, (new_h - th) / 2),
    })
}

/// Computes how `source` fits centered inside a `canvas`×`canvas` square.
/// Sources smaller than the canvas keep their size.
pub fn contain_geometry(source: (u32, u32), canvas: u32) -> Result<ContainGeometry> {
    let (iw, ih) = source;
    if iw == 0 || ih == 0 || canvas == 0 {
        return Err(AppshotsError::InvalidParameter(format!(
            "Cannot fit {}x{} into a {}px canvas",
            iw, ih, canvas
        )));
    }

    let scale = (canvas as f64 / iw as f64)
        .min(canvas as f64 / ih as f64)
        .min(1.0);

    let new_w = ((iw as f64 * scale).round() as u32).clamp(1, canvas);
    let new_h = ((ih as f64 * scale).round() as u32).clamp(1, canvas);

    Ok(ContainGeometry {
        scale,
        scaled: (new_w, new_h),
        offset: ((canvas - new_w) / 2, (canvas - new_h) / 2),
    })
}

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Scale to cover `target`, then crop the overflow around the center.
    pub fn cover(&self, image: &DynamicImage, target: TargetSize) -> Result<DynamicImage> {
        let geometry = cover_geometry(image.dimensions(), target)?;
        let (new_w, new_h) = geometry.scaled;

        log::debug!(
            "Cover {}x{} -> {} (scale {:.4}, scaled {}x{}, crop at {},{})",
            image.width(),
            image.height(),
            target,
            geometry.scale,
            new_w,
            new_h,
            geometry.offset.0,
            geometry.offset.1
        );

        let scaled = self.resize_exact(image, new_w, new_h);
        if geometry.scaled == (target.width, target.height) {
            return Ok(scaled);
        }

        let (left, top) = geometry.offset;
        Ok(scaled.crop_imm(left, top, target.width, target.height))
    }

    /// Shrink to fit a square canvas and composite onto an opaque fill.
    /// Any transparency in the source is blended against `background`.
    pub fn contain_on_background(
        &self,
        image: &DynamicImage,
        canvas: u32,
        background: Background,
    ) -> Result<DynamicImage> {
        let geometry = contain_geometry(image.dimensions(), canvas)?;
        let (new_w, new_h) = geometry.scaled;

        log::debug!(
            "Contain {}x{} in {}px canvas (scale {:.4}, pasted {}x{} at {},{})",
            image.width(),
            image.height(),
            canvas,
            geometry.scale,
            new_w,
            new_h,
            geometry.offset.0,
            geometry.offset.1
        );

        let scaled = self.resize_exact(image, new_w, new_h);

        let mut out = RgbaImage::from_pixel(canvas, canvas, background.to_rgba());
        let (x, y) = geometry.offset;
        if image.color().has_alpha() {
            imageops::overlay(&mut out, &scaled.to_rgba8(), x as i64, y as i64);
        } else {
            imageops::replace(&mut out, &scaled.to_rgba8(), x as i64, y as i64);
        }

        Ok(DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(out).to_rgb8()))
    }

    pub fn resize_exact(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        image.resize_exact(width, height, self.filter_type())
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn size(w: u32, h: u32) -> TargetSize {
        TargetSize::new(w, h).unwrap()
    }

    #[test]
    fn cover_wide_source_onto_tall_phone() {
        let g = cover_geometry((1000, 500), size(1242, 2688)).unwrap();
        assert!((g.scale - 5.376).abs() < 1e-9);
        assert_eq!(g.scaled, (5376, 2688));
        assert_eq!(g.offset, (2067, 0));
    }

    #[test]
    fn cover_same_aspect_has_no_crop() {
        let g = cover_geometry((621, 1344), size(1242, 2688)).unwrap();
        assert_eq!(g.scaled, (1242, 2688));
        assert_eq!(g.offset, (0, 0));
    }

    #[test]
    fn cover_never_undershoots_target() {
        for (iw, ih) in [(3, 7), (7, 3), (999, 1001), (1, 1), (4000, 3), (1179, 2556)] {
            for target in [size(1242, 2688), size(2752, 2064), size(5, 9), size(1, 1)] {
                let g = cover_geometry((iw, ih), target).unwrap();
                assert!(g.scaled.0 >= target.width, "{iw}x{ih} -> {target}");
                assert!(g.scaled.1 >= target.height, "{iw}x{ih} -> {target}");
                assert!(g.offset.0 + target.width <= g.scaled.0);
                assert!(g.offset.1 + target.height <= g.scaled.1);
            }
        }
    }

    #[test]
    fn cover_rejects_empty_source() {
        assert!(cover_geometry((0, 10), size(10, 10)).is_err());
    }

    #[test]
    fn contain_large_square_fills_canvas() {
        let g = contain_geometry((2000, 2000), 1024).unwrap();
        assert!((g.scale - 0.512).abs() < 1e-9);
        assert_eq!(g.scaled, (1024, 1024));
        assert_eq!(g.offset, (0, 0));
    }

    #[test]
    fn contain_wide_source_is_letterboxed() {
        let g = contain_geometry((2048, 1024), 1024).unwrap();
        assert_eq!(g.scaled, (1024, 512));
        assert_eq!(g.offset, (0, 256));
    }

    #[test]
    fn contain_never_upscales() {
        let g = contain_geometry((100, 50), 1024).unwrap();
        assert_eq!(g.scale, 1.0);
        assert_eq!(g.scaled, (100, 50));
        assert_eq!(g.offset, (462, 487));
    }

    #[test]
    fn cover_output_has_exact_target_size() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear);
        let image = DynamicImage::ImageRgb8(RgbImage::new(100, 50));

        for target in [size(124, 268), size(268, 124), size(33, 33), size(7, 200)] {
            let out = resizer.cover(&image, target).unwrap();
            assert_eq!(out.dimensions(), (target.width, target.height));
        }
    }

    #[test]
    fn cover_is_stable_on_correctly_sized_input() {
        let resizer = Resizer::new(ResizeAlgorithm::Lanczos3);
        let target = size(40, 60);
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(90, 70, Rgb([1, 2, 3])));

        let once = resizer.cover(&image, target).unwrap();
        let twice = resizer.cover(&once, target).unwrap();
        assert_eq!(twice.dimensions(), (40, 60));
        assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    #[test]
    fn cover_keeps_the_center() {
        // Left third red, middle third green, right third blue.
        let image = RgbImage::from_fn(90, 30, |x, _| match x / 30 {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let resizer = Resizer::new(ResizeAlgorithm::Nearest);

        let out = resizer
            .cover(&DynamicImage::ImageRgb8(image), size(30, 30))
            .unwrap()
            .to_rgb8();
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(out.get_pixel(29, 29), &Rgb([0, 255, 0]));
    }

    #[test]
    fn contain_flattens_transparency_onto_background() {
        let resizer = Resizer::new(ResizeAlgorithm::Nearest);
        let mut source = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 0, 0]));
        source.put_pixel(10, 5, Rgba([200, 10, 10, 255]));

        let bg = Background([0xE8, 0xE8, 0xE8]);
        let out = resizer
            .contain_on_background(&DynamicImage::ImageRgba8(source), 20, bg)
            .unwrap();

        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
        let out = out.to_rgb8();
        assert_eq!(out.dimensions(), (20, 20));
        // Letterbox band and transparent pixels both show the background.
        assert_eq!(out.get_pixel(0, 0), &Rgb([0xE8, 0xE8, 0xE8]));
        assert_eq!(out.get_pixel(0, 10), &Rgb([0xE8, 0xE8, 0xE8]));
        // Opaque pixel lands at its offset (0, 5) + (10, 5).
        let Rgb([r, g, b]) = *out.get_pixel(10, 10);
        assert!(r.abs_diff(200) <= 1 && g.abs_diff(10) <= 1 && b.abs_diff(10) <= 1);
    }
}
