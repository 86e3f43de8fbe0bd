use crate::PaginateError;
use crate::bands::{Band, image_height_units, plan_bands};
use folio_render_core::Bitmap;
use image::{Rgba, RgbaImage};
use std::ops::Range;

const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// One output page: the band of the source bitmap it shows, and its pixels.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub index: usize,
    pub band: Band,
    /// Source rows copied into this page, top-aligned.
    pub rows: Range<u32>,
    /// Page-sized image. Rows below the copied band are blank paper.
    pub image: RgbaImage,
}

/// Cuts `bitmap` into pages of `page_width_units` x `page_height_units`.
///
/// The bitmap is scaled to the page width (aspect ratio preserved) and the
/// resulting height is split into bands as by [`plan_bands`]. Each band's
/// source rows are copied into a fresh page buffer; every page has the same
/// pixel height and only the last one can have blank space at the bottom.
/// Validation happens up front, so either every page is produced or none.
pub fn paginate(
    bitmap: &Bitmap,
    page_width_units: f32,
    page_height_units: f32,
) -> Result<Vec<PageImage>, PaginateError> {
    let (width_px, height_px) = (bitmap.width_px(), bitmap.height_px());
    if width_px == 0 || height_px == 0 {
        return Err(PaginateError::InvalidBitmap {
            width: width_px,
            height: height_px,
        });
    }
    let page_size_ok = |v: f32| v.is_finite() && v > 0.0;
    if !page_size_ok(page_width_units) || !page_size_ok(page_height_units) {
        return Err(PaginateError::InvalidPageSize {
            width: page_width_units,
            height: page_height_units,
        });
    }

    let image_height = image_height_units(width_px, height_px, page_width_units);
    let bands = plan_bands(image_height, page_height_units)?;

    let px_per_unit = width_px as f64 / page_width_units as f64;
    let boundary = |band: &Band| ((band.start as f64 * px_per_unit).floor() as u32).min(height_px);
    let row_ranges: Vec<Range<u32>> = bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let end = bands.get(i + 1).map(boundary).unwrap_or(height_px);
            boundary(band)..end
        })
        .collect();

    let nominal_rows = (page_height_units as f64 * px_per_unit).ceil() as u32;
    let page_rows = row_ranges
        .iter()
        .map(|r| r.end - r.start)
        .fold(nominal_rows.max(1), u32::max);

    log::debug!(
        "Paginating {}x{} bitmap ({:.1} units tall) into {} page(s) of {} rows",
        width_px,
        height_px,
        image_height,
        bands.len(),
        page_rows
    );

    let source = bitmap.pixels().as_raw();
    let stride = width_px as usize * 4;
    let pages = bands
        .into_iter()
        .zip(row_ranges)
        .map(|(band, rows)| {
            let mut image = RgbaImage::from_pixel(width_px, page_rows, PAPER);
            let src = rows.start as usize * stride..rows.end as usize * stride;
            let dst: &mut [u8] = &mut image;
            dst[..src.len()].copy_from_slice(&source[src]);
            PageImage {
                index: band.index,
                band,
                rows,
                image,
            }
        })
        .collect();
    Ok(pages)
}
