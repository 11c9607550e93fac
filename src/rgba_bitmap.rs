use image::{Rgba, RgbaImage};

/// Represents an 8-bit RGBA bitmap that the shading passes draw into and
/// that is then handed to the display.
///
/// Grayscale intensities are stored in all three color channels with full
/// opacity. A new bitmap is transparent black, so pixels nobody wrote to
/// (the border ring of a shaded image) stay `[0, 0, 0, 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBitmap {
    pub width: usize,
    pub height: usize,
    data: Box<[u8]>,
}

pub const CHANNELS: usize = 4;

impl RgbaBitmap {
    /// Creates a new transparent black bitmap with the given width and height.
    pub fn new(width: usize, height: usize) -> RgbaBitmap {
        RgbaBitmap {
            width,
            height,
            data: vec![0; width * height * CHANNELS].into_boxed_slice(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Gets the RGBA value of the pixel at the given coordinates.
    pub fn get_pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let index = self.pixel_index(x, y);
        [
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
            self.data[index + 3],
        ]
    }

    /// Sets the pixel to an opaque gray of the given value.
    pub fn set_gray(&mut self, x: usize, y: usize, value: u8) {
        let index = self.pixel_index(x, y);
        self.data[index..index + CHANNELS]
            .copy_from_slice(&[value, value, value, 255]);
    }

    /// Mutable access to all rows, one slice per row.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.stride();
        self.data.chunks_exact_mut(stride)
    }

    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    fn pixel_index(&self, x: usize, y: usize) -> usize {
        if x >= self.width || y >= self.height {
            panic!("Pixel coordinates out of bounds");
        }

        (y * self.width + x) * CHANNELS
    }

    /// Writes the bitmap to a PNG file.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The path to the output PNG file.
    pub fn write_to_png(&self, file_path: &str) -> Result<(), image::ImageError> {
        let mut img = RgbaImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                img.put_pixel(x as u32, y as u32, Rgba(self.get_pixel(x, y)));
            }
        }
        img.save(file_path)
    }
}
