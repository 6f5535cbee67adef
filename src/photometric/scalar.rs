use archmage::prelude::*;

// ===========================================================================
// Row kernels, shared by every tier
// ===========================================================================

// Rows are `width × 3` bytes with the padding already sliced off.

#[inline(always)]
pub(super) fn negative_row(row: &mut [u8]) {
    for v in row.iter_mut() {
        *v = 255 - *v;
    }
}

#[inline(always)]
pub(super) fn grayscale_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(3) {
        let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
        let gray = ((sum + 1) / 3) as u8;
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

#[inline(always)]
pub(super) fn red_channel_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(3) {
        px[0] = px[2];
        px[1] = px[2];
    }
}

#[inline(always)]
pub(super) fn lut_row(row: &mut [u8], lut: &[u8; 256]) {
    for v in row.iter_mut() {
        *v = lut[usize::from(*v)];
    }
}

/// Apply `f` to the pixel bytes of each of `h` rows.
#[inline(always)]
pub(super) fn for_each_row(
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    mut f: impl FnMut(&mut [u8]),
) {
    for y in 0..h {
        f(&mut buf[y * stride..][..w * 3]);
    }
}

// ===========================================================================
// Scalar strided wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn negative_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, negative_row);
}

pub(super) fn grayscale_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, grayscale_row);
}

pub(super) fn red_channel_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
) {
    for_each_row(buf, stride, w, h, red_channel_row);
}

pub(super) fn lut_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    stride: usize,
    w: usize,
    h: usize,
    lut: &[u8; 256],
) {
    for_each_row(buf, stride, w, h, |row| lut_row(row, lut));
}
