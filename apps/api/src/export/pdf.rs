//! PDF assembly: one portrait A4 page with the rasterized page image scaled
//! to the full page width, so the aspect ratio of the rendered document is
//! preserved.

use std::io::Cursor;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use super::ExportError;

const A4_WIDTH_MM: f64 = 210.0;
const A4_HEIGHT_MM: f64 = 297.0;
const MM_PER_INCH: f64 = 25.4;

/// The dpi at which the image spans the full page width, and the resulting
/// image height on the page in millimetres.
fn page_placement(width_px: u32, height_px: u32) -> (f64, f64) {
    let dpi = f64::from(width_px) * MM_PER_INCH / A4_WIDTH_MM;
    let height_mm = f64::from(height_px) * MM_PER_INCH / dpi;
    (dpi, height_mm)
}

/// Builds the export artifact from the rasterized PNG. The image is anchored
/// at the top-left corner of the page, as the on-screen preview is.
pub fn assemble_pdf(png: &[u8], title: &str) -> Result<Vec<u8>, ExportError> {
    let decoder =
        PngDecoder::new(Cursor::new(png)).map_err(|e| ExportError::Pdf(e.to_string()))?;
    let image = Image::try_from(decoder).map_err(|e| ExportError::Pdf(e.to_string()))?;

    let width_px = image.image.width.0 as u32;
    let height_px = image.image.height.0 as u32;
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::Pdf("rasterized image is empty".to_string()));
    }

    let (dpi, height_mm) = page_placement(width_px, height_px);

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM as f32), Mm(A4_HEIGHT_MM as f32), "page");
    let layer = doc.get_page(page).get_layer(layer);

    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm((A4_HEIGHT_MM - height_mm) as f32)),
            dpi: Some(dpi as f32),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_spans_full_page_width() {
        // 1632px wide raster (816px page at scale 2) should land at exactly
        // 210mm regardless of height.
        let (dpi, _) = page_placement(1632, 2245);
        let width_mm = f64::from(1632) * MM_PER_INCH / dpi;
        assert!((width_mm - A4_WIDTH_MM).abs() < 1e-9);
    }

    #[test]
    fn test_placement_preserves_aspect_ratio() {
        let (dpi, height_mm) = page_placement(1632, 2245);
        let width_mm = f64::from(1632) * MM_PER_INCH / dpi;
        let page_ratio = width_mm / height_mm;
        let pixel_ratio = 1632.0 / 2245.0;
        assert!((page_ratio - pixel_ratio).abs() < 1e-9);
    }
}
