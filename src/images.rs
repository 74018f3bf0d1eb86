use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Filter, Pdf, Ref};

use crate::error::Error;

/// A media file decoded to raw 8-bit samples, ready for an image XObject.
pub(crate) struct LoadedImage {
    pub(crate) source: String,
    pub(crate) pixel_width: u32,
    pub(crate) pixel_height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

/// Resolves `name` against `media_root` and decodes it. A missing file or
/// one in a format we cannot decode fails the whole conversion.
pub(crate) fn load(media_root: &Path, name: &str) -> Result<LoadedImage, Error> {
    let path = media_root.join(name);
    let img = image::open(&path)
        .map_err(|e| Error::Pdf(format!("failed to load image {}: {e}", path.display())))?;

    let alpha = img
        .color()
        .has_alpha()
        .then(|| img.to_rgba8().pixels().map(|p| p.0[3]).collect());

    Ok(LoadedImage {
        source: name.to_string(),
        pixel_width: img.width(),
        pixel_height: img.height(),
        rgb: img.to_rgb8().into_raw(),
        alpha,
    })
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .and_then(|_| encoder.finish())
        .map_err(|e| Error::Pdf(format!("failed to compress image data: {e}")))
}

impl LoadedImage {
    pub(crate) fn write(
        &self,
        pdf: &mut Pdf,
        image_ref: Ref,
        alloc: &mut impl FnMut() -> Ref,
    ) -> Result<(), Error> {
        let width = i32::try_from(self.pixel_width)
            .map_err(|_| Error::Pdf(format!("{} is too wide", self.source)))?;
        let height = i32::try_from(self.pixel_height)
            .map_err(|_| Error::Pdf(format!("{} is too tall", self.source)))?;

        let mask_ref = match &self.alpha {
            Some(alpha) => {
                let mask_ref = alloc();
                let data = deflate(alpha)?;
                let mut mask = pdf.image_xobject(mask_ref, &data);
                mask.filter(Filter::FlateDecode);
                mask.width(width);
                mask.height(height);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                Some(mask_ref)
            }
            None => None,
        };

        let data = deflate(&self.rgb)?;
        let mut image = pdf.image_xobject(image_ref, &data);
        image.filter(Filter::FlateDecode);
        image.width(width);
        image.height(height);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_ref) = mask_ref {
            image.s_mask(mask_ref);
        }
        Ok(())
    }
}
