// ---------------------------------------------------------------------------
// In-place photometric transforms with SIMD dispatch.
//
// Architecture: row kernels in scalar.rs hold the per-byte math. Each tier
// (x86-64 v3, ARM v2, WASM SIMD128, scalar) has a strided wrapper that
// compiles those kernels under its target features. The public functions
// validate once, then dispatch once via incant! for the whole image.
// ---------------------------------------------------------------------------

use archmage::incant;
use tracing::{debug, trace};

use crate::buffer::{CHANNELS, PixelBuffer};
use crate::error::TransformError;
use crate::params::BrightnessContrast;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod x86;
#[cfg(target_arch = "x86_64")]
use x86::*;

#[cfg(target_arch = "aarch64")]
mod arm;
#[cfg(target_arch = "aarch64")]
use arm::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation
// ===========================================================================

/// Returns `(stride, width, height)` in bytes/pixels for a 3-channel buffer.
#[inline]
fn check_bgr<B: AsRef<[u8]>>(
    img: &PixelBuffer<B>,
    op: &'static str,
) -> Result<(usize, usize, usize), TransformError> {
    if img.channels() != CHANNELS {
        debug!(op, channels = img.channels(), "unsupported channel layout, skipped");
        return Err(TransformError::UnsupportedChannelLayout {
            channels: img.channels(),
        });
    }
    Ok((
        img.stride() as usize,
        img.width() as usize,
        img.height() as usize,
    ))
}

// ===========================================================================
// Public API
// ===========================================================================

/// Invert every channel: `v ↦ 255 − v`.
///
/// Applying it twice restores the image. Padding bytes are not touched.
pub fn negative<B>(img: &mut PixelBuffer<B>) -> Result<(), TransformError>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let (stride, w, h) = check_bgr(img, "negative")?;
    trace!(width = w, height = h, stride, "negative");
    let buf = img.data_mut();
    incant!(
        negative_strided(buf, stride, w, h),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Replace each pixel with the rounded mean of its three channels.
///
/// `gray = round((b + g + r) / 3)`, rounding half away from zero. A sum
/// divided by 3 never lands exactly on .5, so this is `(b + g + r + 1) / 3`
/// in integer arithmetic.
pub fn grayscale<B>(img: &mut PixelBuffer<B>) -> Result<(), TransformError>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let (stride, w, h) = check_bgr(img, "grayscale")?;
    trace!(width = w, height = h, stride, "grayscale");
    let buf = img.data_mut();
    incant!(
        grayscale_strided(buf, stride, w, h),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Copy the red byte (channel 2) over blue and green.
///
/// This is a plain channel copy, not a luminance computation: the result
/// is the red plane shown as gray. Channel 2 keeps its value.
pub fn red_channel<B>(img: &mut PixelBuffer<B>) -> Result<(), TransformError>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let (stride, w, h) = check_bgr(img, "red_channel")?;
    trace!(width = w, height = h, stride, "red_channel");
    let buf = img.data_mut();
    incant!(
        red_channel_strided(buf, stride, w, h),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Remap every channel byte through `contrast × v + brightness`.
///
/// The mapping is evaluated once into a 256-entry table; see
/// [`BrightnessContrast::map`] for rounding and overflow handling.
pub fn brightness_contrast<B>(
    img: &mut PixelBuffer<B>,
    params: BrightnessContrast,
) -> Result<(), TransformError>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let (stride, w, h) = check_bgr(img, "brightness_contrast")?;
    trace!(
        width = w,
        height = h,
        stride,
        brightness = params.brightness(),
        contrast = params.contrast(),
        overflow = ?params.overflow(),
        "brightness_contrast"
    );
    let lut = params.lut();
    let buf = img.data_mut();
    incant!(
        lut_strided(buf, stride, w, h, &lut),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}
