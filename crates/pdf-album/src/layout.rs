//! Page layout calculation
//!
//! Pure geometry: given an image's pixel dimensions and a page policy,
//! compute the page size and where the image is drawn on it. No I/O,
//! no decoding.

use crate::types::{ComposeError, PagePolicy, Result, mm_to_pt};

/// Placement of one image on its page, in PDF points.
///
/// The drawn image is uniformly scaled and centered: the aspect ratio
/// of `drawn_width` x `drawn_height` equals the source aspect ratio,
/// and the offsets split the leftover page area evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// Width of the drawn image
    pub drawn_width: f32,
    /// Height of the drawn image
    pub drawn_height: f32,
    /// X position of the image's lower-left corner
    pub offset_x: f32,
    /// Y position of the image's lower-left corner
    pub offset_y: f32,
    /// Uniform scale factor from source pixels to points
    pub scale: f32,
}

/// Compute the page size and image placement for one source image.
///
/// Under a fixed page size the scale is `min(pageW/imgW, pageH/imgH)`,
/// so the image is fully contained; it may shrink or enlarge (no upper
/// clamp). Under [`PagePolicy::MatchImage`] the page takes the image's
/// pixel dimensions at 1 px = 1 pt and nothing is scaled or offset.
///
/// Fails only when a source dimension is zero.
pub fn compute_layout(image_width: u32, image_height: u32, policy: PagePolicy) -> Result<Layout> {
    if image_width == 0 || image_height == 0 {
        return Err(ComposeError::InvalidImageDimensions {
            width: image_width,
            height: image_height,
        });
    }

    let img_w = image_width as f32;
    let img_h = image_height as f32;

    let (page_width, page_height, scale) = match policy {
        PagePolicy::Fixed { size, orientation } => {
            let (w_mm, h_mm) = size.dimensions_with_orientation(orientation);
            let page_w = mm_to_pt(w_mm);
            let page_h = mm_to_pt(h_mm);
            let scale = (page_w / img_w).min(page_h / img_h);
            (page_w, page_h, scale)
        }
        PagePolicy::MatchImage => (img_w, img_h, 1.0),
    };

    let drawn_width = img_w * scale;
    let drawn_height = img_h * scale;

    Ok(Layout {
        page_width,
        page_height,
        drawn_width,
        drawn_height,
        offset_x: (page_width - drawn_width) / 2.0,
        offset_y: (page_height - drawn_height) / 2.0,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PaperSize};

    const A4_WIDTH_PT: f32 = 595.2765;
    const A4_HEIGHT_PT: f32 = 841.891;

    fn a4() -> PagePolicy {
        PagePolicy::Fixed {
            size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }

    #[test]
    fn test_fixed_fit_width_limited() {
        // 800x600 landscape image on portrait A4: width is the
        // limiting dimension.
        let layout = compute_layout(800, 600, a4()).unwrap();

        assert!((layout.page_width - A4_WIDTH_PT).abs() < 0.01);
        assert!((layout.page_height - A4_HEIGHT_PT).abs() < 0.01);
        assert!((layout.scale - A4_WIDTH_PT / 800.0).abs() < 0.001);
        assert!((layout.drawn_width - A4_WIDTH_PT).abs() < 0.01);
        assert!(layout.drawn_height < A4_HEIGHT_PT);
    }

    #[test]
    fn test_fixed_fit_height_limited() {
        let layout = compute_layout(600, 2400, a4()).unwrap();

        assert!((layout.scale - A4_HEIGHT_PT / 2400.0).abs() < 0.001);
        assert!((layout.drawn_height - A4_HEIGHT_PT).abs() < 0.01);
        assert!(layout.drawn_width <= layout.page_width);
    }

    #[test]
    fn test_fixed_preserves_aspect_ratio() {
        let layout = compute_layout(1280, 720, a4()).unwrap();

        let source_ratio = 1280.0 / 720.0;
        let drawn_ratio = layout.drawn_width / layout.drawn_height;
        assert!((source_ratio - drawn_ratio).abs() < 0.001);
    }

    #[test]
    fn test_fixed_centers_image() {
        let layout = compute_layout(800, 600, a4()).unwrap();

        let expected_x = (layout.page_width - layout.drawn_width) / 2.0;
        let expected_y = (layout.page_height - layout.drawn_height) / 2.0;
        assert!((layout.offset_x - expected_x).abs() < 0.001);
        assert!((layout.offset_y - expected_y).abs() < 0.001);
    }

    #[test]
    fn test_fixed_enlarges_small_images() {
        // 100x100 thumbnail: scale is > 1, no upper clamp.
        let layout = compute_layout(100, 100, a4()).unwrap();

        assert!(layout.scale > 1.0);
        assert!((layout.drawn_width - A4_WIDTH_PT).abs() < 0.01);
    }

    #[test]
    fn test_fixed_landscape_orientation() {
        let policy = PagePolicy::Fixed {
            size: PaperSize::A4,
            orientation: Orientation::Landscape,
        };
        let layout = compute_layout(800, 600, policy).unwrap();

        assert!((layout.page_width - A4_HEIGHT_PT).abs() < 0.01);
        assert!((layout.page_height - A4_WIDTH_PT).abs() < 0.01);
    }

    #[test]
    fn test_match_image() {
        let layout = compute_layout(1000, 500, PagePolicy::MatchImage).unwrap();

        assert_eq!(layout.page_width, 1000.0);
        assert_eq!(layout.page_height, 500.0);
        assert_eq!(layout.drawn_width, 1000.0);
        assert_eq!(layout.drawn_height, 500.0);
        assert_eq!(layout.offset_x, 0.0);
        assert_eq!(layout.offset_y, 0.0);
        assert_eq!(layout.scale, 1.0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            compute_layout(0, 600, a4()),
            Err(ComposeError::InvalidImageDimensions { .. })
        ));
        assert!(matches!(
            compute_layout(800, 0, PagePolicy::MatchImage),
            Err(ComposeError::InvalidImageDimensions { .. })
        ));
    }
}
