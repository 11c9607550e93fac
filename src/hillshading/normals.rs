use crate::height_field::HeightField;
use glam::Vec3;

/// The z component of the unnormalized normal. It encodes a horizontal
/// sample spacing of one unit on each side, so exaggeration scales only the
/// rise.
pub const NORMAL_Z: f32 = 2.0;

/// The normal returned when the estimate cannot be normalized.
pub const DEFAULT_NORMAL: Vec3 = Vec3::Z;

/// Central differences of the elevation around an interior pixel, scaled
/// by the exaggeration: `(dx, dy)`.
#[inline]
pub fn gradient(
    field: &HeightField,
    exaggeration: f32,
    row: usize,
    col: usize,
) -> (f32, f32) {
    let dx = exaggeration * (field.sample(row, col - 1) - field.sample(row, col + 1));
    let dy = exaggeration * (field.sample(row + 1, col) - field.sample(row - 1, col));
    (dx, dy)
}

/// Estimates the unit surface normal at an interior pixel.
///
/// Only defined for `1 <= row < height - 1` and `1 <= col < width - 1`;
/// any border pixel panics. The raw normal is scaled down by its largest
/// component before normalizing so that steep slopes under a huge finite
/// exaggeration do not overflow. If it still cannot be normalized (NaN or
/// infinite elevations or exaggeration) the result is [`DEFAULT_NORMAL`]
/// rather than NaN.
#[inline]
pub fn compute_normal(
    field: &HeightField,
    exaggeration: f32,
    row: usize,
    col: usize,
) -> Vec3 {
    if !field.is_interior(row, col) {
        panic!(
            "Normal requested for border pixel ({}, {})",
            row, col
        );
    }

    let (dx, dy) = gradient(field, exaggeration, row, col);
    let scale = dx.abs().max(dy.abs()).max(NORMAL_Z);
    (Vec3::new(dx, dy, NORMAL_Z) / scale)
        .try_normalize()
        .unwrap_or(DEFAULT_NORMAL)
}
