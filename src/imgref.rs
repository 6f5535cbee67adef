//! Conversions between [`PixelBuffer`] and [`imgref`] images of
//! [`rgb::Bgr<u8>`].
//!
//! Borrowing conversions are zero-copy: the pixel slice of the `imgref`
//! image is reinterpreted as bytes, and its stride (in pixels) becomes a
//! byte stride.
//!
//! ```rust
//! use rgb::Bgr;
//! use ::imgref::ImgVec;
//! use burnish::{imgref, negative};
//!
//! let mut img = ImgVec::new(vec![Bgr { b: 0u8, g: 100, r: 255 }; 6], 3, 2);
//! let mut view = imgref::from_imgref_mut(img.as_mut()).unwrap();
//! negative(&mut view).unwrap();
//! assert_eq!(img.buf()[0], Bgr { b: 255, g: 155, r: 0 });
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::Bgr;

use crate::buffer::{CHANNELS, PixelBuffer};
use crate::error::TransformError;

/// Byte layout `(width, height, stride)` for an image measured in pixels.
fn byte_layout(width: usize, height: usize, stride: usize) -> Result<(u32, u32, u32), TransformError> {
    let w = u32::try_from(width).ok();
    let h = u32::try_from(height).ok();
    let s = stride
        .checked_mul(CHANNELS as usize)
        .and_then(|s| u32::try_from(s).ok());
    match (w, h, s) {
        (Some(w), Some(h), Some(s)) => Ok((w, h, s)),
        _ => Err(TransformError::InvalidStride {
            width: w.unwrap_or(u32::MAX),
            channels: CHANNELS,
            stride: s.unwrap_or(u32::MAX),
        }),
    }
}

/// Borrow an `ImgRef<Bgr<u8>>` as a read-only source buffer.
///
/// The last row must span a full stride, as every row of a `PixelBuffer`
/// does; an image whose buffer ends right after its last pixel fails with
/// [`TransformError::BufferTooSmall`] when `stride > width`.
pub fn from_imgref(img: ImgRef<'_, Bgr<u8>>) -> Result<PixelBuffer<&[u8]>, TransformError> {
    let (w, h, s) = byte_layout(img.width(), img.height(), img.stride())?;
    let bytes: &[u8] = bytemuck::cast_slice(img.into_buf());
    PixelBuffer::new(bytes, w, h, CHANNELS, s)
}

/// Borrow an `ImgRefMut<Bgr<u8>>` for in-place editing or as a
/// geometric destination.
pub fn from_imgref_mut(
    img: ImgRefMut<'_, Bgr<u8>>,
) -> Result<PixelBuffer<&mut [u8]>, TransformError> {
    let (w, h, s) = byte_layout(img.width(), img.height(), img.stride())?;
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(img.into_buf());
    PixelBuffer::new(bytes, w, h, CHANNELS, s)
}

/// Copy the pixels into a tightly packed `ImgVec<Bgr<u8>>`, dropping
/// padding.
pub fn to_imgvec<B: AsRef<[u8]>>(img: &PixelBuffer<B>) -> Result<ImgVec<Bgr<u8>>, TransformError> {
    if img.channels() != CHANNELS {
        return Err(TransformError::UnsupportedChannelLayout {
            channels: img.channels(),
        });
    }
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut buf: Vec<Bgr<u8>> = Vec::with_capacity(w * h);
    for row in img.rows() {
        buf.extend_from_slice(bytemuck::cast_slice(row));
    }
    Ok(ImgVec::new(buf, w, h))
}
