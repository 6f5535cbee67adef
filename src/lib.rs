//! # burnish
//!
//! *Polish your pixels in place.*
//!
//! Direct-access transforms for interleaved 8-bit BGR images held in
//! row-padded byte buffers. Nothing here goes through a per-pixel accessor:
//! every transform walks the raw rows once, skipping row padding, and never
//! allocates.
//!
//! ## Photometric (in place)
//!
//! [`negative`], [`grayscale`], [`red_channel`] and [`brightness_contrast`]
//! mutate one [`PixelBuffer`]. Row kernels are SIMD-dispatched at runtime
//! (x86-64 AVX2, ARM NEON, WASM SIMD128) with a scalar fallback.
//!
//! ## Geometric (source → destination)
//!
//! [`translate`], [`rotate`] and [`scale`] read a source buffer and fill a
//! separate destination of the same shape by inverse mapping, with
//! nearest-neighbour sampling by truncation and black fill outside the
//! source.
//!
//! ```rust
//! use burnish::{Angle, PixelBuffer, grayscale, rotate};
//!
//! let mut img = PixelBuffer::new_zeroed(64, 48, 4).unwrap();
//! grayscale(&mut img).unwrap();
//!
//! let mut rotated = PixelBuffer::new_zeroed(64, 48, 4).unwrap();
//! rotate(&img, &mut rotated, Angle::from_degrees(30)).unwrap();
//! ```
//!
//! Only 3-channel pixels are transformed. Any other channel count makes the
//! call a no-op that returns
//! [`TransformError::UnsupportedChannelLayout`].
//!
//! ## Feature flags
//!
//! - **`std`** (default): links `std`; required for [`rotate`]. Without it
//!   the crate is `no_std` + `alloc`.
//! - **`rgb`**: typed access with [`rgb::Bgr<u8>`] via bytemuck.
//! - **`imgref`**: zero-copy conversions from [`imgref`](::imgref) images.
//!   Implies `rgb`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod error;
mod geometric;
mod params;
mod photometric;

pub use buffer::{CHANNELS, PixelBuffer, PixelCoordinate, aligned_stride};
pub use error::{ParamError, Shape, TransformError};
#[cfg(feature = "std")]
pub use geometric::rotate;
pub use geometric::{scale, translate};
pub use params::{Angle, BrightnessContrast, OverflowPolicy, Scale, Translation};
pub use photometric::{brightness_contrast, grayscale, negative, red_channel};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
