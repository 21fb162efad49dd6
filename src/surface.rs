// Drawing target for the simulator, plus an RGBA software surface that can be
// handed to a canvas with put_image_data

use crate::color::Color;

/// The only primitive the simulator needs from a rendering backend.
pub trait Surface {
    /// Fill the axis aligned rectangle with its top left corner at (x, y).
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

// Row major RGBA8 pixels, 4 bytes per pixel
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixel_data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            pixel_data: vec![0x00; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_pixel_index(x, y).map(|idx| Color {
            r: self.pixel_data[idx],
            g: self.pixel_data[idx + 1],
            b: self.pixel_data[idx + 2],
            a: self.pixel_data[idx + 3],
        })
    }

    fn get_pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.get_pixel_index(x, y) {
            self.pixel_data[idx] = color.r;
            self.pixel_data[idx + 1] = color.g;
            self.pixel_data[idx + 2] = color.b;
            self.pixel_data[idx + 3] = color.a;
        }
    }
}

impl Surface for PixelBuffer {
    // Covers every pixel whose top left corner falls inside the rectangle,
    // anything off the buffer is clipped
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let left = (x.ceil() as i32).max(0);
        let top = (y.ceil() as i32).max(0);
        let right = ((x + width).ceil() as i32).min(self.width as i32);
        let bottom = ((y + height).ceil() as i32).min(self.height as i32);
        for pixel_y in top..bottom {
            for pixel_x in left..right {
                self.set_pixel(pixel_x, pixel_y, color);
            }
        }
    }
}
