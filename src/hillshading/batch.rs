use crate::height_field::HeightField;
use crate::hillshading::kernel::shade_row;
use crate::hillshading::parameters::{ParameterSet, Uniforms};
use crate::rgba_bitmap::RgbaBitmap;
use rayon::prelude::*;
use std::time::Instant;

/// Shades the whole field in a single sequential pass.
///
/// The parameters are copied once before the pass starts. Border pixels of
/// the returned bitmap are transparent black.
pub fn render_shaded_image(field: &HeightField, parameters: &ParameterSet) -> RgbaBitmap {
    let mut bitmap = RgbaBitmap::new(field.width, field.height);
    render_shaded_image_into(field, parameters, &mut bitmap);
    bitmap
}

/// Shades the field into an existing bitmap, leaving its border ring as it
/// was.
pub fn render_shaded_image_into(
    field: &HeightField,
    parameters: &ParameterSet,
    bitmap: &mut RgbaBitmap,
) {
    check_bitmap_size(field, bitmap);

    let started = Instant::now();
    let uniforms = parameters.to_uniforms();

    for (row, out_row) in interior_rows(bitmap) {
        shade_row(field, &uniforms, row, out_row);
    }

    tracing::debug!(
        "Shaded {}x{} field sequentially in {:?}",
        field.width,
        field.height,
        started.elapsed()
    );
}

/// Same result as [`render_shaded_image`], with rows spread over the rayon
/// thread pool.
pub fn render_shaded_image_parallel(
    field: &HeightField,
    parameters: &ParameterSet,
) -> RgbaBitmap {
    let mut bitmap = RgbaBitmap::new(field.width, field.height);
    shade_rows_parallel(field, &parameters.to_uniforms(), &mut bitmap);
    bitmap
}

pub(crate) fn shade_rows_parallel(
    field: &HeightField,
    uniforms: &Uniforms,
    bitmap: &mut RgbaBitmap,
) {
    check_bitmap_size(field, bitmap);

    let started = Instant::now();
    let interior_height = field.height - 2;
    let stride = bitmap.stride();
    bitmap
        .data_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .skip(1)
        .take(interior_height)
        .for_each(|(row, out_row)| shade_row(field, uniforms, row, out_row));

    tracing::debug!(
        "Shaded {}x{} field in parallel in {:?}",
        field.width,
        field.height,
        started.elapsed()
    );
}

fn interior_rows(
    bitmap: &mut RgbaBitmap,
) -> impl Iterator<Item = (usize, &mut [u8])> + '_ {
    let interior_height = bitmap.height.saturating_sub(2);
    bitmap
        .rows_mut()
        .enumerate()
        .skip(1)
        .take(interior_height)
}

fn check_bitmap_size(field: &HeightField, bitmap: &RgbaBitmap) {
    if bitmap.width != field.width || bitmap.height != field.height {
        panic!("bitmap size does not match height field size");
    }
}
