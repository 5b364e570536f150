use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::debug::TIME;
use crate::dimension::Dimension;
use crate::source::SourceImage;

/// Lanczos3 widens its support when shrinking, so large reductions average
/// over the whole source footprint instead of picking single pixels.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// One resolution of the source, ready to be embedded.
pub struct ResizedVariant {
    pixels: RgbaImage,
}

impl ResizedVariant {
    pub fn new(source: &SourceImage, target: Dimension) -> Self {
        TIME!(format!("resize to {target}"));
        let pixels = imageops::resize(source.pixels(), target.width, target.height, FILTER);
        Self { pixels }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.pixels.width(), self.pixels.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_raw()
    }
}

/// Produces one variant per target, in target order.
pub fn resize_all(source: &SourceImage, targets: &[Dimension]) -> Vec<ResizedVariant> {
    targets
        .iter()
        .map(|&target| ResizedVariant::new(source, target))
        .collect()
}
