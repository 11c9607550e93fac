use crate::errors::{ReliefError, Result};

/// The smallest field that still has an interior pixel.
pub const MIN_FIELD_SIZE: usize = 3;

/// An immutable grid of elevation samples, stored row-major.
///
/// Elevations are expected to be normalized to [0, 1] by whoever decoded the
/// source raster; the field itself stores them as given.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    pub width: usize,
    pub height: usize,
    data: Box<[f32]>,
}

impl HeightField {
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<HeightField> {
        if width < MIN_FIELD_SIZE || height < MIN_FIELD_SIZE {
            return Err(ReliefError::FieldTooSmall { width, height });
        }

        let expected = width * height;
        if data.len() != expected {
            return Err(ReliefError::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(HeightField {
            width,
            height,
            data: data.into_boxed_slice(),
        })
    }

    /// Gets the elevation at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the field. Callers only ever
    /// query interior pixels and their direct neighbors, so an out-of-range
    /// request is a bug and is never clamped.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> f32 {
        if row >= self.height || col >= self.width {
            panic!(
                "Sample coordinates out of bounds: ({}, {}) in a {}x{} field",
                row, col, self.width, self.height
            );
        }

        self.data[row * self.width + col]
    }

    /// Whether the pixel has both neighbors on each axis.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && row + 1 < self.height && col >= 1 && col + 1 < self.width
    }
}
