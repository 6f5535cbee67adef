//! Typed pixel access using [`rgb::Bgr`] via bytemuck.
//!
//! The byte order of a [`PixelBuffer`] pixel is blue, green, red, which is
//! exactly the memory layout of `Bgr<u8>`, so rows reinterpret zero-copy.
//!
//! ```rust
//! use rgb::Bgr;
//! use burnish::PixelBuffer;
//!
//! let mut img = PixelBuffer::new_zeroed(4, 2, 4).unwrap();
//! img.set_bgr(3, 1, Bgr { b: 10, g: 20, r: 30 });
//! assert_eq!(img.row_bgr(1)[3], Bgr { b: 10, g: 20, r: 30 });
//! ```

use rgb::Bgr;

use crate::buffer::{CHANNELS, PixelBuffer};

impl<B: AsRef<[u8]>> PixelBuffer<B> {
    /// Pixel `(x, y)` as `Bgr<u8>`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`pixel`](Self::pixel).
    pub fn bgr(&self, x: u32, y: u32) -> Bgr<u8> {
        let [b, g, r] = self.pixel(x, y);
        Bgr { b, g, r }
    }

    /// Row `y` as typed pixels, padding excluded.
    ///
    /// # Panics
    ///
    /// If the buffer is not 3-channel or `y` is out of range.
    pub fn row_bgr(&self, y: u32) -> &[Bgr<u8>] {
        assert_eq!(self.channels(), CHANNELS, "row_bgr() needs 3 channels");
        bytemuck::cast_slice(self.row(y))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PixelBuffer<B> {
    pub fn set_bgr(&mut self, x: u32, y: u32, px: Bgr<u8>) {
        self.set_pixel(x, y, [px.b, px.g, px.r]);
    }

    /// Mutable row `y` as typed pixels, padding excluded.
    ///
    /// # Panics
    ///
    /// If the buffer is not 3-channel or `y` is out of range.
    pub fn row_bgr_mut(&mut self, y: u32) -> &mut [Bgr<u8>] {
        assert_eq!(self.channels(), CHANNELS, "row_bgr_mut() needs 3 channels");
        bytemuck::cast_slice_mut(self.row_mut(y))
    }

    /// Set every pixel to `px`, leaving padding alone.
    pub fn fill_bgr(&mut self, px: Bgr<u8>) {
        for y in 0..self.height() {
            self.row_bgr_mut(y).fill(px);
        }
    }
}
