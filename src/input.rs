//! Turning decoded grayscale rasters into height fields.
//!
//! Samples are normalized to [0, 1] the way a unorm texture is sampled:
//! 8-bit values are divided by 255, 16-bit values by 65535.

use crate::errors::Result;
use crate::height_field::HeightField;
use image::{GrayImage, ImageBuffer, Luma};
use std::path::Path;

pub type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

pub fn field_from_luma8(image: &GrayImage) -> Result<HeightField> {
    let samples = image
        .as_raw()
        .iter()
        .map(|&value| value as f32 / u8::MAX as f32)
        .collect();
    HeightField::new(image.width() as usize, image.height() as usize, samples)
}

pub fn field_from_luma16(image: &Gray16Image) -> Result<HeightField> {
    let samples = image
        .as_raw()
        .iter()
        .map(|&value| value as f32 / u16::MAX as f32)
        .collect();
    HeightField::new(image.width() as usize, image.height() as usize, samples)
}

/// Decodes a raster file and builds a height field from its luminance.
///
/// Color images are converted to luminance first; the 16-bit path is used
/// so that 16-bit elevation rasters keep their precision.
pub fn load_height_field<P: AsRef<Path>>(path: P) -> Result<HeightField> {
    let path = path.as_ref();
    tracing::info!("Loading elevation raster from: {}", path.display());

    let image = image::open(path)?;
    let field = field_from_luma16(&image.to_luma16())?;

    tracing::info!("Elevation raster loaded: {}x{}", field.width, field.height);
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReliefError;
    use crate::testing::assert_eq_approx;

    #[test]
    fn luma8_is_normalized() {
        let image = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 60 + y) as u8]));
        let field = field_from_luma8(&image).unwrap();
        assert_eq!(field.width, 4);
        assert_eq!(field.height, 3);
        assert_eq!(field.sample(0, 0), 0.0);
        assert_eq_approx(field.sample(2, 3), 182.0 / 255.0, 1e-6);
    }

    #[test]
    fn luma16_is_normalized() {
        let image = Gray16Image::from_fn(3, 3, |x, _| Luma([if x == 2 { u16::MAX } else { 0 }]));
        let field = field_from_luma16(&image).unwrap();
        assert_eq!(field.sample(1, 2), 1.0);
        assert_eq!(field.sample(1, 1), 0.0);
    }

    #[test]
    fn tiny_raster_is_rejected() {
        let image = GrayImage::new(2, 2);
        assert!(matches!(
            field_from_luma8(&image),
            Err(ReliefError::FieldTooSmall { width: 2, height: 2 })
        ));
    }

    #[test]
    fn load_round_trips_through_png() {
        std::fs::create_dir_all("target/debug").unwrap();
        let path = "target/debug/test-elevation.png";
        let image = GrayImage::from_fn(5, 4, |x, y| Luma([(x * 50 + y * 10) as u8]));
        image.save(path).unwrap();

        let field = load_height_field(path).unwrap();
        assert_eq!((field.width, field.height), (5, 4));
        assert_eq_approx(field.sample(3, 4), 230.0 / 255.0, 1e-4);
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let result = load_height_field("target/debug/does-not-exist.png");
        assert!(matches!(result, Err(ReliefError::Image(_))));
    }
}
