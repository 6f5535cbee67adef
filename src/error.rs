use core::fmt;

/// Width, height and channel count of a pixel buffer.
///
/// Row stride is not part of the shape: two buffers with different padding
/// hold the same image geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

/// Buffer layout and precondition failures.
///
/// Every transform checks its preconditions before touching a single byte,
/// so an `Err` always means the buffers are exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// `stride < channels × width`, or the row length overflows.
    #[error("row stride {stride} is shorter than {width} pixels of {channels} channels")]
    InvalidStride { width: u32, channels: u8, stride: u32 },

    /// The slice cannot hold `stride × height` bytes.
    #[error("buffer holds {len} bytes but the layout needs {needed}")]
    BufferTooSmall { len: usize, needed: usize },

    #[error("a pixel needs at least one channel")]
    InvalidChannelCount,

    /// Source and destination of a geometric transform differ.
    #[error("source is {src} but destination is {dst}")]
    ShapeMismatch { src: Shape, dst: Shape },

    /// Only 3-channel, 8-bit pixels are transformed. The call was a no-op.
    #[error("{channels}-channel pixels are not supported, expected 3")]
    UnsupportedChannelLayout { channels: u8 },
}

/// Rejected transform parameter.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParamError {
    #[error("contrast must be finite and non-negative, got {0}")]
    InvalidContrast(f64),

    #[error("rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),
}
