use crate::ComposerError;
use serde::Deserialize;

/// Physical page geometry in millimetres.
///
/// `band_height_mm` is the height of image shown per page. It may be a little
/// shorter than the page itself, leaving a thin blank strip at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageFormat {
    pub width_mm: f32,
    pub height_mm: f32,
    pub band_height_mm: f32,
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

impl PageFormat {
    pub const A4: PageFormat = PageFormat {
        width_mm: 210.0,
        height_mm: 297.0,
        band_height_mm: 295.0,
    };

    pub fn validate(&self) -> Result<(), ComposerError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.width_mm) || !positive(self.height_mm) {
            return Err(ComposerError::InvalidPageFormat(format!(
                "page must have a positive size, got {}x{} mm",
                self.width_mm, self.height_mm
            )));
        }
        if !positive(self.band_height_mm) || self.band_height_mm > self.height_mm {
            return Err(ComposerError::InvalidPageFormat(format!(
                "band height {} mm must be in (0, {}]",
                self.band_height_mm, self.height_mm
            )));
        }
        Ok(())
    }
}
