use crate::PaginateError;

/// Tolerance on the image/page height ratio. Keeps float noise on an exact
/// multiple of the page height from producing an extra, empty page.
const RATIO_EPSILON: f32 = 1e-4;

/// The vertical slice of the scaled image shown by one page, in the same
/// physical units as the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub index: usize,
    pub start: f32,
    pub end: f32,
}

impl Band {
    pub fn height(&self) -> f32 {
        self.end - self.start
    }

    /// Where the top of the whole image would sit on this page if the image
    /// were placed unclipped with this band aligned to the page top. Always
    /// `0` for the first page and `-start` in general.
    pub fn offset(&self) -> f32 {
        -self.start
    }
}

/// Height of a `width_px` x `height_px` bitmap once scaled, aspect ratio
/// preserved, to `page_width_units`.
pub fn image_height_units(width_px: u32, height_px: u32, page_width_units: f32) -> f32 {
    (height_px as f64 * page_width_units as f64 / width_px as f64) as f32
}

/// Splits `[0, image_height)` into consecutive bands of `page_height`.
///
/// Band `k` covers `[k * page_height, min((k + 1) * page_height, image_height))`
/// and the last band ends exactly at `image_height`, so the bands are
/// contiguous, disjoint and cover the image. At least one band is returned,
/// even for an empty image.
///
/// The count is `ceil(image_height / page_height)` less a relative tolerance
/// of `RATIO_EPSILON`. An image that overshoots a multiple of the page by
/// less than that fraction gets no extra page; its last band instead runs
/// slightly past `page_height`.
pub fn plan_bands(image_height: f32, page_height: f32) -> Result<Vec<Band>, PaginateError> {
    if !page_height.is_finite() || page_height <= 0.0 {
        return Err(PaginateError::InvalidPageSize {
            width: f32::NAN,
            height: page_height,
        });
    }
    if !image_height.is_finite() || image_height < 0.0 {
        return Err(PaginateError::InvalidImageHeight(image_height));
    }

    let count = if image_height <= page_height {
        1
    } else {
        ((image_height / page_height - RATIO_EPSILON).ceil() as usize).max(1)
    };

    let bands = (0..count)
        .map(|index| {
            let start = index as f32 * page_height;
            let end = if index + 1 == count {
                image_height
            } else {
                ((index + 1) as f32 * page_height).min(image_height)
            };
            Band { index, start, end }
        })
        .collect();
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_equal_to_page_is_one_band() {
        let bands = plan_bands(295.0, 295.0).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].offset(), 0.0);
        assert_eq!((bands[0].start, bands[0].end), (0.0, 295.0));
    }

    #[test]
    fn taller_image_spans_three_pages() {
        let bands = plan_bands(600.0, 295.0).unwrap();
        assert_eq!(bands.len(), 3);
        let offsets: Vec<f32> = bands.iter().map(Band::offset).collect();
        assert_eq!(offsets, vec![0.0, -295.0, -590.0]);
        assert_eq!((bands[2].start, bands[2].end), (590.0, 600.0));
    }

    #[test]
    fn short_image_is_one_uncropped_band() {
        let bands = plan_bands(120.5, 295.0).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].end, 120.5);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(plan_bands(590.0, 295.0).unwrap().len(), 2);
        // 3 * 0.1 is not exactly 0.3 in floating point.
        assert_eq!(plan_bands(0.1 + 0.1 + 0.1, 0.1).unwrap().len(), 3);
    }

    #[test]
    fn overshoot_within_tolerance_extends_the_last_band() {
        let bands = plan_bands(295.02, 295.0).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!((bands[0].start, bands[0].end), (0.0, 295.02));
        assert!(bands[0].height() > 295.0);

        let bands = plan_bands(590.02, 295.0).unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!((bands[1].start, bands[1].end), (295.0, 590.02));

        // Past the tolerance a new page starts.
        assert_eq!(plan_bands(295.1, 295.0).unwrap().len(), 2);
    }

    #[test]
    fn empty_image_still_yields_one_band() {
        let bands = plan_bands(0.0, 295.0).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].height(), 0.0);
    }

    #[test]
    fn rejects_invalid_heights() {
        assert!(matches!(
            plan_bands(100.0, 0.0),
            Err(PaginateError::InvalidPageSize { .. })
        ));
        assert!(matches!(
            plan_bands(100.0, f32::INFINITY),
            Err(PaginateError::InvalidPageSize { .. })
        ));
        assert_eq!(
            plan_bands(-1.0, 295.0),
            Err(PaginateError::InvalidImageHeight(-1.0))
        );
    }

    #[test]
    fn scales_pixel_height_to_page_width() {
        assert_eq!(image_height_units(1600, 4000, 210.0), 525.0);
        assert_eq!(image_height_units(800, 800, 210.0), 210.0);
    }
}
