//! Strided pixel buffer view.
//!
//! A [`PixelBuffer`] pairs a byte slice with the geometry needed to find a
//! pixel in it: width, height, channel count and row stride. Rows may carry
//! trailing padding (`stride > channels × width`); padding bytes are never
//! read or written by any transform in this crate.
//!
//! ```rust
//! use burnish::PixelBuffer;
//!
//! // 2×2 BGR image, rows padded to 8 bytes
//! let mut data = vec![0u8; 16];
//! let mut img = PixelBuffer::new(&mut data[..], 2, 2, 3, 8).unwrap();
//! img.set_pixel(1, 1, [1, 2, 3]);
//! assert_eq!(img.offset(1, 1), 11);
//! assert_eq!(img.pixel(1, 1), [1, 2, 3]);
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Shape, TransformError};

/// The only channel count the transforms accept: blue, green, red.
pub const CHANNELS: u8 = 3;

/// Signed pixel position.
///
/// Inverse mapping produces coordinates that can land left of, above, or
/// beyond the image before they are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCoordinate {
    pub x: i64,
    pub y: i64,
}

impl PixelCoordinate {
    #[inline(always)]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Interleaved 8-bit image over any byte storage.
///
/// `B` is `Vec<u8>` for an owned image, `&mut [u8]` for an image borrowed
/// for in-place editing, or `&[u8]` for a read-only source. Channel order
/// within a pixel is fixed: byte 0 is blue, 1 is green, 2 is red.
#[derive(Clone)]
pub struct PixelBuffer<B> {
    data: B,
    width: u32,
    height: u32,
    channels: u8,
    stride: u32,
}

#[inline]
fn check_layout(
    len: usize,
    width: u32,
    height: u32,
    channels: u8,
    stride: u32,
) -> Result<(), TransformError> {
    if channels == 0 {
        return Err(TransformError::InvalidChannelCount);
    }
    let invalid_stride = TransformError::InvalidStride {
        width,
        channels,
        stride,
    };
    let row_bytes = width
        .checked_mul(u32::from(channels))
        .ok_or(invalid_stride)?;
    if row_bytes > stride {
        return Err(invalid_stride);
    }
    let needed = (stride as usize)
        .checked_mul(height as usize)
        .unwrap_or(usize::MAX);
    if len < needed {
        return Err(TransformError::BufferTooSmall { len, needed });
    }
    Ok(())
}

/// Row stride for `width` pixels of `channels` bytes, rounded up to a
/// multiple of `align` bytes.
///
/// Returns `None` if `align` is zero or the stride does not fit in `u32`.
pub fn aligned_stride(width: u32, channels: u8, align: u32) -> Option<u32> {
    width
        .checked_mul(u32::from(channels))?
        .checked_next_multiple_of(align)
}

impl<B: AsRef<[u8]>> PixelBuffer<B> {
    /// Wrap `data` as a `width × height` image with `channels` bytes per
    /// pixel and `stride` bytes per row.
    ///
    /// Fails if `stride < channels × width`, if `data` is shorter than
    /// `stride × height`, or if `channels` is zero. Channel counts other than
    /// 3 are accepted here; the transforms reject them.
    pub fn new(
        data: B,
        width: u32,
        height: u32,
        channels: u8,
        stride: u32,
    ) -> Result<Self, TransformError> {
        check_layout(data.as_ref().len(), width, height, channels, stride)?;
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Wrap tightly packed 3-channel rows (`stride == 3 × width`).
    pub fn packed(data: B, width: u32, height: u32) -> Result<Self, TransformError> {
        let stride = width
            .checked_mul(u32::from(CHANNELS))
            .ok_or(TransformError::InvalidStride {
                width,
                channels: CHANNELS,
                stride: u32::MAX,
            })?;
        Self::new(data, width, height, CHANNELS, stride)
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Bytes between the starts of consecutive rows, padding included.
    #[inline(always)]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline(always)]
    pub fn shape(&self) -> Shape {
        Shape {
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Pixel bytes per row, padding excluded.
    #[inline(always)]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Padding bytes at the end of each row.
    #[inline(always)]
    pub fn padding(&self) -> usize {
        self.stride as usize - self.row_bytes()
    }

    /// Byte offset of channel 0 of pixel `(x, y)`: `y × stride + x × channels`.
    ///
    /// The coordinate must lie inside the image. This is checked in debug
    /// builds only and is never clamped; use [`checked_offset`](Self::checked_offset)
    /// for coordinates that may fall outside.
    #[inline(always)]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.stride as usize + x as usize * self.channels as usize
    }

    /// Byte offset of `coord`, or `None` when it lies outside
    /// `[0, width) × [0, height)`.
    #[inline(always)]
    pub fn checked_offset(&self, coord: PixelCoordinate) -> Option<usize> {
        if coord.x < 0
            || coord.y < 0
            || coord.x >= i64::from(self.width)
            || coord.y >= i64::from(self.height)
        {
            return None;
        }
        Some(self.offset(coord.x as u32, coord.y as u32))
    }

    /// Blue, green and red bytes of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the pixel is outside the image or the buffer has fewer than 3
    /// channels.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(self.channels >= CHANNELS, "pixel() needs 3 channels");
        let o = self.offset(x, y);
        let px = &self.data.as_ref()[o..o + 3];
        [px[0], px[1], px[2]]
    }

    /// Pixel bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`, even when the backing slice extends further.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} outside {}-row image", self.height);
        let start = y as usize * self.stride as usize;
        &self.data.as_ref()[start..][..self.row_bytes()]
    }

    /// Pixel bytes of every row, top to bottom, without padding.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// The whole backing slice, padding included.
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Shared view over the same bytes.
    pub fn view(&self) -> PixelBuffer<&[u8]> {
        PixelBuffer {
            data: self.data.as_ref(),
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.stride,
        }
    }

    /// Deep copy with the same layout, padding included.
    pub fn to_owned_buffer(&self) -> PixelBuffer<Vec<u8>> {
        PixelBuffer {
            data: self.data.as_ref().to_vec(),
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.stride,
        }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PixelBuffer<B> {
    /// Overwrite the blue, green and red bytes of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the pixel is outside the image or the buffer has fewer than 3
    /// channels.
    pub fn set_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) {
        assert!(self.channels >= CHANNELS, "set_pixel() needs 3 channels");
        let o = self.offset(x, y);
        self.data.as_mut()[o..o + 3].copy_from_slice(&bgr);
    }

    /// Mutable pixel bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`, even when the backing slice extends further.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {y} outside {}-row image", self.height);
        let start = y as usize * self.stride as usize;
        let row_bytes = self.row_bytes();
        &mut self.data.as_mut()[start..][..row_bytes]
    }

    /// Mutable pixel bytes of every row, top to bottom, without padding.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let row_bytes = self.row_bytes();
        let height = self.height as usize;
        // stride is 0 only when row_bytes is 0
        let stride = (self.stride as usize).max(1);
        self.data
            .as_mut()
            .chunks_mut(stride)
            .take(height)
            .map(move |row| &mut row[..row_bytes])
    }

    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Exclusive view over the same bytes.
    pub fn view_mut(&mut self) -> PixelBuffer<&mut [u8]> {
        PixelBuffer {
            data: self.data.as_mut(),
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.stride,
        }
    }
}

impl PixelBuffer<Vec<u8>> {
    /// Allocate a black 3-channel image whose rows are padded to a multiple
    /// of `align` bytes.
    ///
    /// `align = 4` reproduces the row layout of most BGR bitmap decoders.
    pub fn new_zeroed(width: u32, height: u32, align: u32) -> Result<Self, TransformError> {
        let stride =
            aligned_stride(width, CHANNELS, align).ok_or(TransformError::InvalidStride {
                width,
                channels: CHANNELS,
                stride: 0,
            })?;
        let len = (stride as usize)
            .checked_mul(height as usize)
            .ok_or(TransformError::BufferTooSmall {
                len: 0,
                needed: usize::MAX,
            })?;
        Self::new(vec![0u8; len], width, height, CHANNELS, stride)
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for PixelBuffer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("stride", &self.stride)
            .field("len", &self.data.as_ref().len())
            .finish()
    }
}
