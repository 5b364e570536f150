use std::path::Path;

use image::{io::Reader, DynamicImage, RgbaImage};
use log::debug;

use crate::debug::TIME;
use crate::dimension::Dimension;
use crate::error::{IconError, Result};

/// The decoded source raster, normalized to 8-bit RGBA.
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self> {
        TIME!(format!("decode {}", path.display()));

        let reader = Reader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| IconError::source_unreadable(path, e))?;
        let image = reader
            .decode()
            .map_err(|e| IconError::source_unreadable(path, e))?;

        debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );

        Self::from_image(image)
    }

    pub fn from_image(image: DynamicImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(IconError::encoding("source image has no pixels"));
        }
        Ok(Self {
            pixels: image.into_rgba8(),
        })
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.pixels.width(), self.pixels.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
