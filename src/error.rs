use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// Truncated input, bad magic bytes, a file-size field that disagrees
    /// with the actual input length, an unknown DIB header size, or a pixel
    /// data offset pointing outside the file.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("planes field is {0}, expected 1")]
    InvalidPlanes(u16),

    #[error("unsupported compression scheme: {0}")]
    UnsupportedCompression(u32),

    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("palette color count {0} out of range (expected 1..=256)")]
    InvalidPaletteSize(u32),

    #[error("pixel data offset {offset} overlaps the header or palette region")]
    InvalidDataOffset { offset: u32 },

    #[error("declared pixel data size {declared} does not match computed size {expected}")]
    DataSizeMismatch { declared: u32, expected: u32 },

    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannelCount(u8),

    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("channel count mismatch: buffer has {actual}, requested view has {requested}")]
    ChannelMismatch { requested: u8, actual: u8 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
