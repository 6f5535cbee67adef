use archmage::prelude::*;

use super::scalar::{for_each_row, grayscale_row, lut_row, negative_row, red_channel_row};

// ===========================================================================
// ARM v2 (NEON) strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn negative_strided_arm_v2(
    _t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, negative_row);
}

#[arcane]
pub(super) fn grayscale_strided_arm_v2(
    _t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, grayscale_row);
}

#[arcane]
pub(super) fn red_channel_strided_arm_v2(
    _t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, red_channel_row);
}

#[arcane]
pub(super) fn lut_strided_arm_v2(
    _t: Arm64V2Token,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    lut: &[u8; 256],
) {
    for_each_row(buf, stride, w, h, |row| lut_row(row, lut));
}
