//! The per-pixel shading kernel. Both the batch pass and the per-frame
//! renderer go through here, so they cannot drift apart.

use crate::height_field::HeightField;
use crate::hillshading::light_model::{intensity_for_light, light_direction};
use crate::hillshading::normals::compute_normal;
use crate::hillshading::parameters::Uniforms;
use crate::rgba_bitmap::CHANNELS;
use glam::Vec3;

/// Unclamped intensity of one interior pixel.
#[inline]
pub fn shade_pixel(field: &HeightField, uniforms: &Uniforms, row: usize, col: usize) -> f32 {
    let light = light_direction(uniforms.azimuth, uniforms.elevation_angle);
    shade_pixel_lit(field, uniforms, light, row, col)
}

#[inline]
fn shade_pixel_lit(
    field: &HeightField,
    uniforms: &Uniforms,
    light: Vec3,
    row: usize,
    col: usize,
) -> f32 {
    let normal = compute_normal(field, uniforms.exaggeration, row, col);
    intensity_for_light(normal, light, uniforms)
}

/// Converts an intensity to a display byte the way a unorm render target
/// stores it: scaled by 255, saturated and rounded. NaN becomes 0.
///
/// Rounds rather than truncates so CPU output matches what a GPU pass
/// writes to an `rgba8unorm` target.
#[inline]
pub fn to_channel(intensity: f32) -> u8 {
    (intensity * 255.0).clamp(0.0, 255.0).round() as u8
}

/// Shades the interior pixels of `row` into an RGBA row of the output. The
/// first and last pixel of the row are left untouched.
pub fn shade_row(field: &HeightField, uniforms: &Uniforms, row: usize, out_row: &mut [u8]) {
    if out_row.len() != field.width * CHANNELS {
        panic!("output row does not match the field width");
    }

    let light = light_direction(uniforms.azimuth, uniforms.elevation_angle);
    for col in 1..field.width - 1 {
        let value = to_channel(shade_pixel_lit(field, uniforms, light, row, col));
        let offset = col * CHANNELS;
        out_row[offset..offset + CHANNELS].copy_from_slice(&[value, value, value, 255]);
    }
}
