use archmage::prelude::*;

use super::scalar::{for_each_row, grayscale_row, lut_row, negative_row, red_channel_row};

// ===========================================================================
// x86-64 v3 (AVX2) strided wrappers
//
// The kernels are #[inline(always)], so inside an #[arcane] body they are
// compiled with AVX2 enabled and the byte loops vectorize to 32 lanes.
// ===========================================================================

#[arcane]
pub(super) fn negative_strided_v3(
    _t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, negative_row);
}

#[arcane]
pub(super) fn grayscale_strided_v3(
    _t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, grayscale_row);
}

#[arcane]
pub(super) fn red_channel_strided_v3(
    _t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, red_channel_row);
}

#[arcane]
pub(super) fn lut_strided_v3(
    _t: X64V3Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    lut: &[u8; 256],
) {
    for_each_row(buf, stride, w, h, |row| lut_row(row, lut));
}
