//! Sequential document building
//!
//! Consumes an ordered image list and emits one PDF page per image:
//! probe dimensions, compute the layout, paint the background, place
//! the image, append the page. One bad image is recorded and skipped;
//! the rest of the batch still goes through.

use crate::layout::compute_layout;
use crate::options::ComposeOptions;
use crate::probe::probe_dimensions;
use crate::report::{ComposeReport, PageFailure, Progress};
use crate::types::*;
use printpdf::*;
use std::path::{Path, PathBuf};

/// Compose `images` into a PDF at `output_path`.
///
/// Page generation runs on a blocking worker thread; the file write
/// happens afterwards. A write failure is recorded in
/// [`ComposeReport::finalize_error`] rather than returned as `Err`,
/// so per-image failures are never lost. `Err` is reserved for
/// invalid options and task failures before any page is produced.
pub async fn compose(
    images: &[PathBuf],
    options: &ComposeOptions,
    output_path: impl AsRef<Path>,
    progress: impl FnMut(Progress) + Send + 'static,
) -> Result<ComposeReport> {
    options.validate()?;

    let images = images.to_vec();
    let options = *options;
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let (bytes, mut report) =
        tokio::task::spawn_blocking(move || compose_to_bytes(&images, &options, progress))
            .await??;

    if let Err(e) = tokio::fs::write(&output_path, bytes).await {
        report.finalize_error = Some(format!(
            "Failed to write {}: {}",
            output_path.display(),
            e
        ));
    }

    Ok(report)
}

/// Synchronous core of [`compose`]: build the document in memory.
///
/// `progress` is called once per input image, failed ones included.
/// Writing the returned bytes to their destination is the caller's
/// finalization step.
pub fn compose_to_bytes(
    images: &[PathBuf],
    options: &ComposeOptions,
    mut progress: impl FnMut(Progress),
) -> Result<(Vec<u8>, ComposeReport)> {
    options.validate()?;

    let mut doc = PdfDocument::new("Album");
    let mut report = ComposeReport::default();
    let total = images.len();

    for (i, path) in images.iter().enumerate() {
        match render_page(&mut doc, path, options) {
            Ok(()) => report.page_count += 1,
            Err(e) => report.failures.push(PageFailure {
                source: path.clone(),
                reason: e.to_string(),
            }),
        }
        progress(Progress::new(i + 1, total));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok((bytes, report))
}

fn render_page(doc: &mut PdfDocument, path: &Path, options: &ComposeOptions) -> Result<()> {
    let bytes = std::fs::read(path)?;

    // Dimensions come from a header-only probe; the page embeds the
    // original bytes below, so the source encoding is preserved.
    let (width_px, height_px) = probe_dimensions(&bytes)?;
    let layout = compute_layout(width_px, height_px, options.page_policy)?;

    let mut warnings = Vec::new();
    let raw = RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(ComposeError::Pdf)?;
    let image_id = doc.add_image(&raw);

    let ops = vec![
        Op::SetFillColor {
            col: Color::Rgb(Rgb {
                r: options.background.r,
                g: options.background.g,
                b: options.background.b,
                icc_profile: None,
            }),
        },
        Op::DrawPolygon {
            polygon: page_background(layout.page_width, layout.page_height),
        },
        Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(layout.offset_x)),
                translate_y: Some(Pt(layout.offset_y)),
                rotate: None,
                scale_x: Some(layout.scale),
                scale_y: Some(layout.scale),
                // At 72 dpi one source pixel is one point, so `scale`
                // maps pixels directly onto the layout's drawn size.
                dpi: Some(72.0),
            },
        },
    ];

    let page_rect = Rect {
        x: Pt(0.0),
        y: Pt(0.0),
        width: Pt(layout.page_width),
        height: Pt(layout.page_height),
    };

    doc.pages.push(PdfPage {
        media_box: page_rect.clone(),
        trim_box: page_rect.clone(),
        crop_box: page_rect,
        ops,
    });

    Ok(())
}

/// Filled rectangle covering the whole page.
fn page_background(width: f32, height: f32) -> Polygon {
    let corners = [
        (0.0, 0.0),
        (width, 0.0),
        (width, height),
        (0.0, height),
    ];

    Polygon {
        rings: vec![PolygonRing {
            points: corners
                .iter()
                .map(|&(x, y)| LinePoint {
                    p: Point { x: Pt(x), y: Pt(y) },
                    bezier: false,
                })
                .collect(),
        }],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    }
}
