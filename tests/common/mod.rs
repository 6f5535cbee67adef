#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route library `tracing` events to the test output. `RUST_LOG` overrides
/// the default `warn` filter.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// Packed BGR image where pixel `(x, y)` is `(x, y, 100 + x + y)`.
pub fn coords_image(w: u32, h: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((w * h * 3) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[x as u8, y as u8, (100 + x + y) as u8]);
        }
    }
    data
}

/// Copy packed rows into a buffer with `pad` extra bytes per row, filled
/// with `fill`. Returns the buffer and its stride.
pub fn with_padding(packed: &[u8], w: u32, h: u32, pad: u32, fill: u8) -> (Vec<u8>, u32) {
    let row = (w * 3) as usize;
    let stride = w * 3 + pad;
    let mut out = vec![fill; (stride * h) as usize];
    for y in 0..h as usize {
        out[y * stride as usize..][..row].copy_from_slice(&packed[y * row..][..row]);
    }
    (out, stride)
}
