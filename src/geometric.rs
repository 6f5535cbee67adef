//! Inverse-mapped geometric transforms.
//!
//! Every transform here reads a source image and writes a destination of
//! the same shape. For each destination pixel `(x, y)` it computes the
//! source coordinate that lands there, copies that pixel if it lies inside
//! the source, and writes black `(0, 0, 0)` otherwise. Sampling is
//! nearest-neighbour by truncation toward zero.
//!
//! Source and destination are separate borrows, so a transform can never
//! read a pixel it has already overwritten.
//!
//! ```rust
//! use burnish::{PixelBuffer, Translation, translate};
//!
//! let src_data = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
//! let src = PixelBuffer::packed(&src_data[..], 2, 2).unwrap();
//! let mut dst = PixelBuffer::new_zeroed(2, 2, 1).unwrap();
//! translate(&src, &mut dst, Translation::new(1, 0)).unwrap();
//! assert_eq!(dst.pixel(1, 0), [1, 2, 3]);
//! assert_eq!(dst.pixel(0, 0), [0, 0, 0]);
//! ```

use tracing::{debug, trace};

use crate::buffer::{CHANNELS, PixelBuffer, PixelCoordinate};
use crate::error::TransformError;
#[cfg(feature = "std")]
use crate::params::Angle;
use crate::params::{Scale, Translation};

#[inline]
fn check_pair<S, D>(
    src: &PixelBuffer<S>,
    dst: &PixelBuffer<D>,
    op: &'static str,
) -> Result<(), TransformError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]>,
{
    if src.shape() != dst.shape() {
        debug!(op, src = %src.shape(), dst = %dst.shape(), "shape mismatch, skipped");
        return Err(TransformError::ShapeMismatch {
            src: src.shape(),
            dst: dst.shape(),
        });
    }
    if src.channels() != CHANNELS {
        debug!(op, channels = src.channels(), "unsupported channel layout, skipped");
        return Err(TransformError::UnsupportedChannelLayout {
            channels: src.channels(),
        });
    }
    Ok(())
}

/// Fill `dst` by sampling `src` at `source_of(x, y)`, zero outside `src`.
///
/// Shapes are already checked equal and 3-channel; strides may differ.
fn remap<S, D>(
    src: &PixelBuffer<S>,
    dst: &mut PixelBuffer<D>,
    source_of: impl Fn(i64, i64) -> PixelCoordinate,
) where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let src_data = src.data();
    for (y, row) in dst.rows_mut().enumerate() {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            match src.checked_offset(source_of(x as i64, y as i64)) {
                Some(o) => px.copy_from_slice(&src_data[o..o + 3]),
                None => px.fill(0),
            }
        }
    }
}

/// Shift the image by `(dx, dy)` pixels.
///
/// Destination `(x, y)` takes source `(x − dx, y − dy)`. The strip uncovered
/// by the shift is black; pixels shifted past the edge are lost.
pub fn translate<S, D>(
    src: &PixelBuffer<S>,
    dst: &mut PixelBuffer<D>,
    t: Translation,
) -> Result<(), TransformError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    check_pair(src, dst, "translate")?;
    trace!(width = src.width(), height = src.height(), dx = t.dx, dy = t.dy, "translate");
    let (dx, dy) = (i64::from(t.dx), i64::from(t.dy));
    remap(src, dst, |x, y| PixelCoordinate::new(x - dx, y - dy));
    Ok(())
}

/// Rotate the image by `angle` about its centre `(width / 2, height / 2)`
/// (integer division).
///
/// For destination `(x, y)` the source is
///
/// ```text
/// nx = trunc((x − cx)·cos θ − (cy − y)·sin θ + cx)
/// ny = trunc(cy − (x − cx)·sin θ − (cy − y)·cos θ)
/// ```
///
/// evaluated in `f64` and truncated toward zero. Corners that rotate in
/// from outside the source are black. Needs the `std` feature.
#[cfg(feature = "std")]
pub fn rotate<S, D>(
    src: &PixelBuffer<S>,
    dst: &mut PixelBuffer<D>,
    angle: Angle,
) -> Result<(), TransformError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    check_pair(src, dst, "rotate")?;
    let theta = angle.radians();
    trace!(width = src.width(), height = src.height(), theta, "rotate");
    let (sin, cos) = (theta.sin(), theta.cos());
    let cx = i64::from(src.width() / 2);
    let cy = i64::from(src.height() / 2);
    let (cxf, cyf) = (cx as f64, cy as f64);
    remap(src, dst, |x, y| {
        let u = (x - cx) as f64;
        let v = (cy - y) as f64;
        let nx = u * cos - v * sin + cxf;
        let ny = cyf - u * sin - v * cos;
        PixelCoordinate::new(nx as i64, ny as i64)
    });
    Ok(())
}

/// Magnify the image by `scale.factor()` about `scale.center()`.
///
/// Destination `(x, y)` takes source `(trunc((x − cx) / f + cx),
/// trunc((y − cy) / f + cy))`, so the centre pixel stays put. Shrinking
/// leaves a black border; enlarging crops.
pub fn scale<S, D>(
    src: &PixelBuffer<S>,
    dst: &mut PixelBuffer<D>,
    scale: Scale,
) -> Result<(), TransformError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    check_pair(src, dst, "scale")?;
    let f = scale.factor();
    let (cx, cy) = scale.center();
    trace!(width = src.width(), height = src.height(), factor = f, cx, cy, "scale");
    let (cxf, cyf) = (cx as f64, cy as f64);
    remap(src, dst, |x, y| {
        // centre may be any i64, so subtract in f64
        let nx = (x as f64 - cxf) / f + cxf;
        let ny = (y as f64 - cyf) / f + cyf;
        PixelCoordinate::new(nx as i64, ny as i64)
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Packed BGR image where pixel (x, y) is `(x, y, 100 + x + y)`.
    fn coords_image(w: u32, h: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[x as u8, y as u8, (100 + x + y) as u8]);
            }
        }
        data
    }

    #[test]
    fn translate_two_by_two_right() {
        let src_data = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let src = PixelBuffer::packed(&src_data[..], 2, 2).unwrap();
        let mut dst = PixelBuffer::new_zeroed(2, 2, 1).unwrap();
        dst.data_mut().fill(0xAB);
        translate(&src, &mut dst, Translation::new(1, 0)).unwrap();
        assert_eq!(dst.pixel(1, 0), [1, 2, 3]);
        assert_eq!(dst.pixel(0, 0), [0, 0, 0]);
        assert_eq!(dst.pixel(1, 1), [7, 8, 9]);
        assert_eq!(dst.pixel(0, 1), [0, 0, 0]);
    }

    #[test]
    fn translate_zero_is_identity() {
        let data = coords_image(7, 5);
        let src = PixelBuffer::packed(&data[..], 7, 5).unwrap();
        let mut dst = PixelBuffer::new_zeroed(7, 5, 4).unwrap();
        translate(&src, &mut dst, Translation::default()).unwrap();
        for y in 0..5 {
            assert_eq!(dst.row(y), src.row(y));
        }
    }

    // An earlier variant tested `nx > 0 && ny > 0`, which blacked out the
    // first row and column even without any shift.
    #[test]
    fn translate_keeps_first_row_and_column() {
        let data = coords_image(4, 4);
        let src = PixelBuffer::packed(&data[..], 4, 4).unwrap();
        let mut dst = PixelBuffer::new_zeroed(4, 4, 1).unwrap();
        translate(&src, &mut dst, Translation::new(0, 0)).unwrap();
        assert_eq!(dst.pixel(0, 0), [0, 0, 100]);
        assert_eq!(dst.pixel(0, 3), [0, 3, 103]);
        assert_eq!(dst.pixel(3, 0), [3, 0, 103]);

        translate(&src, &mut dst, Translation::new(-1, -1)).unwrap();
        assert_eq!(dst.pixel(0, 0), src.pixel(1, 1));
        assert_eq!(dst.pixel(3, 3), [0, 0, 0]);
    }

    #[test]
    fn translate_round_trip_restores_overlap() {
        let (w, h) = (9u32, 6u32);
        let data = coords_image(w, h);
        let src = PixelBuffer::packed(&data[..], w, h).unwrap();
        let mut mid = PixelBuffer::new_zeroed(w, h, 4).unwrap();
        let mut back = PixelBuffer::new_zeroed(w, h, 4).unwrap();
        let t = Translation::new(3, -2);
        translate(&src, &mut mid, t).unwrap();
        translate(&mid, &mut back, t.inverse()).unwrap();
        for y in 0..h {
            for x in 0..w {
                // survived both shifts iff x + 3 < w and y - 2 >= 0
                let kept = x + 3 < w && y >= 2;
                let expected = if kept { src.pixel(x, y) } else { [0, 0, 0] };
                assert_eq!(back.pixel(x, y), expected, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn translate_far_outside_is_black() {
        let data = coords_image(3, 3);
        let src = PixelBuffer::packed(&data[..], 3, 3).unwrap();
        let mut dst = PixelBuffer::new_zeroed(3, 3, 1).unwrap();
        dst.data_mut().fill(9);
        translate(&src, &mut dst, Translation::new(i32::MIN, i32::MAX)).unwrap();
        assert!(dst.data().iter().all(|&b| b == 0));
    }

    #[cfg(feature = "std")]
    #[test]
    fn rotate_zero_is_identity() {
        for (w, h) in [(1, 1), (4, 4), (5, 3), (8, 11)] {
            let data = coords_image(w, h);
            let src = PixelBuffer::packed(&data[..], w, h).unwrap();
            let mut dst = PixelBuffer::new_zeroed(w, h, 4).unwrap();
            rotate(&src, &mut dst, Angle::from_degrees(0)).unwrap();
            for y in 0..h {
                assert_eq!(dst.row(y), src.row(y), "{w}x{h} row {y}");
            }
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn rotate_keeps_centre_and_blackens_corners() {
        let (w, h) = (20u32, 20u32);
        let data = coords_image(w, h);
        let src = PixelBuffer::packed(&data[..], w, h).unwrap();
        let mut dst = PixelBuffer::new_zeroed(w, h, 4).unwrap();
        rotate(&src, &mut dst, Angle::from_degrees(45)).unwrap();
        assert_eq!(dst.pixel(10, 10), src.pixel(10, 10));
        for (x, y) in [(0, 0), (19, 0), (0, 19), (19, 19)] {
            assert_eq!(dst.pixel(x, y), [0, 0, 0], "corner ({x}, {y})");
        }
    }

    #[test]
    fn scale_one_is_identity() {
        let data = coords_image(6, 4);
        let src = PixelBuffer::packed(&data[..], 6, 4).unwrap();
        let mut dst = PixelBuffer::new_zeroed(6, 4, 4).unwrap();
        scale(&src, &mut dst, Scale::about(1.0, 3, 2).unwrap()).unwrap();
        for y in 0..4 {
            assert_eq!(dst.row(y), src.row(y));
        }
    }

    #[test]
    fn uniform_scale_doubles_from_origin() {
        let data = coords_image(4, 4);
        let src = PixelBuffer::packed(&data[..], 4, 4).unwrap();
        let mut dst = PixelBuffer::new_zeroed(4, 4, 1).unwrap();
        scale(&src, &mut dst, Scale::uniform(2.0).unwrap()).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(dst.pixel(x, y), src.pixel(x / 2, y / 2), "x={x} y={y}");
            }
        }
    }

    #[test]
    fn shrinking_about_centre_leaves_black_border() {
        let data = coords_image(8, 8);
        let src = PixelBuffer::packed(&data[..], 8, 8).unwrap();
        let mut dst = PixelBuffer::new_zeroed(8, 8, 1).unwrap();
        scale(&src, &mut dst, Scale::about(0.5, 4, 4).unwrap()).unwrap();
        // x = 4 + (x - 4) * 2, so the centre is fixed
        assert_eq!(dst.pixel(4, 4), src.pixel(4, 4));
        assert_eq!(dst.pixel(5, 4), src.pixel(6, 4));
        assert_eq!(dst.pixel(3, 3), src.pixel(2, 2));
        assert_eq!(dst.pixel(2, 2), src.pixel(0, 0));
        // (7 - 4) * 2 + 4 = 10, outside
        assert_eq!(dst.pixel(7, 4), [0, 0, 0]);
        // (1 - 4) * 2 + 4 = -2, outside
        assert_eq!(dst.pixel(1, 4), [0, 0, 0]);
    }

    #[test]
    fn scale_about_extreme_centre_is_black() {
        let data = coords_image(2, 2);
        let src = PixelBuffer::packed(&data[..], 2, 2).unwrap();
        let mut dst = PixelBuffer::new_zeroed(2, 2, 1).unwrap();
        for (cx, cy) in [(i64::MIN, 0), (0, i64::MIN), (i64::MAX, i64::MAX), (i64::MIN, i64::MAX)] {
            dst.data_mut().fill(9);
            scale(&src, &mut dst, Scale::about(2.0, cx, cy).unwrap()).unwrap();
            assert!(dst.rows().flatten().all(|&b| b == 0), "centre ({cx}, {cy})");
        }
    }

    #[test]
    fn shape_mismatch_writes_nothing() {
        let data = coords_image(4, 4);
        let src = PixelBuffer::packed(&data[..], 4, 4).unwrap();
        let mut dst = PixelBuffer::new_zeroed(4, 3, 1).unwrap();
        dst.data_mut().fill(7);
        let err = translate(&src, &mut dst, Translation::new(1, 1)).unwrap_err();
        assert!(matches!(err, TransformError::ShapeMismatch { .. }));
        assert!(dst.data().iter().all(|&b| b == 7));
    }

    #[test]
    fn four_channel_pair_is_rejected() {
        let src_data = vec![5u8; 32];
        let mut dst_data = vec![7u8; 32];
        let src = PixelBuffer::new(&src_data[..], 2, 2, 4, 16).unwrap();
        let mut dst = PixelBuffer::new(&mut dst_data[..], 2, 2, 4, 16).unwrap();
        assert_eq!(
            scale(&src, &mut dst, Scale::uniform(2.0).unwrap()),
            Err(TransformError::UnsupportedChannelLayout { channels: 4 })
        );
        assert_eq!(dst_data, [7u8; 32]);
    }

    #[test]
    fn padding_in_destination_untouched() {
        let data = coords_image(5, 3);
        let src = PixelBuffer::packed(&data[..], 5, 3).unwrap();
        let mut dst_data = vec![0xCCu8; 20 * 3];
        let mut dst = PixelBuffer::new(&mut dst_data[..], 5, 3, 3, 20).unwrap();
        translate(&src, &mut dst, Translation::new(2, 1)).unwrap();
        scale(&src, &mut dst, Scale::about(0.5, 2, 1).unwrap()).unwrap();
        #[cfg(feature = "std")]
        rotate(&src, &mut dst, Angle::from_degrees(30)).unwrap();
        for y in 0..3 {
            assert_eq!(&dst_data[y * 20 + 15..][..5], &[0xCC; 5], "row {y}");
        }
    }
}
