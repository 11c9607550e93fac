use crate::height_field::HeightField;

pub fn assert_eq_approx(a: f32, b: f32, tolerance: f32) {
    if (a - b).abs() > tolerance || a.is_nan() != b.is_nan() {
        panic!(
            "assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`",
            a, b
        );
    }
}

/// Builds a height field by evaluating `elevation(row, col)` for every
/// sample.
pub fn field_from_fn<F>(width: usize, height: usize, elevation: F) -> HeightField
where
    F: Fn(usize, usize) -> f32,
{
    let mut samples = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            samples.push(elevation(row, col));
        }
    }

    HeightField::new(width, height, samples)
        .unwrap_or_else(|error| panic!("invalid test field: {}", error))
}

/// A uniform height field.
pub fn flat_field(width: usize, height: usize, elevation: f32) -> HeightField {
    field_from_fn(width, height, |_, _| elevation)
}

/// A deterministic field with a couple of ridges and a valley, so every
/// interior pixel sees a non-zero gradient on at least one axis.
pub fn ridged_field(width: usize, height: usize) -> HeightField {
    field_from_fn(width, height, |row, col| {
        let x = col as f32 / width as f32;
        let y = row as f32 / height as f32;
        let ridges = (x * 9.0).sin() * (y * 7.0).cos();
        0.5 + 0.25 * ridges + 0.2 * x * y
    })
}
