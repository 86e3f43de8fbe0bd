//! Assembles paginated raster pages into a PDF.
//!
//! Every page image becomes one PDF page: the image is embedded as an image
//! XObject and drawn flush with the top-left corner, scaled to the page width
//! and the format's band height.

mod error;
mod format;

pub use error::ComposerError;
pub use format::PageFormat;

use folio_paginate::PageImage;
use image::ImageFormat;
use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use std::io::Cursor;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Builds a PDF with one page per entry of `pages`, in order.
pub fn assemble(
    pages: &[PageImage],
    format: &PageFormat,
    title: &str,
) -> Result<Vec<u8>, ComposerError> {
    if pages.is_empty() {
        return Err(ComposerError::NoPages);
    }
    format.validate()?;

    let page_height_pt = format.height_mm * PT_PER_MM;
    let width_pt = format.width_mm * PT_PER_MM;
    let band_pt = format.band_height_mm * PT_PER_MM;

    let mut doc = PdfDocument::new(title);
    let mut pdf_pages = Vec::with_capacity(pages.len());
    let mut warnings = Vec::new();

    for page in pages {
        let (img_w, img_h) = page.image.dimensions();
        let mut png = Vec::new();
        page.image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let raw_image = RawImage::decode_from_bytes(&png, &mut warnings).map_err(|e| {
            ComposerError::Pdf(format!("Failed to decode page {} image: {}", page.index, e))
        })?;
        let id = XObjectId::new();
        doc.resources
            .xobjects
            .map
            .insert(id.clone(), XObject::Image(raw_image));

        let transform = XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(page_height_pt - band_pt)),
            scale_x: Some(width_pt / img_w as f32),
            scale_y: Some(band_pt / img_h as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        let ops = vec![Op::UseXobject { id, transform }];
        pdf_pages.push(PdfPage::new(Mm(format.width_mm), Mm(format.height_mm), ops));
    }

    log::debug!("Assembling '{}' with {} page(s)", title, pdf_pages.len());
    doc.pages = pdf_pages;
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("printpdf reported {} warning(s) for '{}'", warnings.len(), title);
    }
    Ok(bytes)
}
