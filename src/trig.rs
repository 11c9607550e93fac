use std::f32::consts::PI;

pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Reduces an angle in degrees to the [0, 360) range.
pub fn normalize_degrees(deg: f32) -> f32 {
    let normalized = deg.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs and
    // keeps the sign of -0
    if normalized >= 360.0 || normalized == 0.0 {
        0.0
    } else {
        normalized
    }
}
