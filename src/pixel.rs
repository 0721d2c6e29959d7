/// Shape of a flat, channel-interleaved pixel buffer.
///
/// The buffer holds `height` rows of `width` pixels, top row first, with
/// `channels` bytes per pixel in R,G,B[,A] order. This is the caller
/// contract in both directions: decoding produces a descriptor, encoding
/// consumes one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpDescriptor {
    pub width: i32,
    pub height: i32,
    /// 3 for RGB, 4 for RGBA.
    pub channels: u8,
}

impl BmpDescriptor {
    pub fn new(width: i32, height: i32, channels: u8) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Whether pixels carry an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Byte length of a buffer matching this descriptor, or `None` on
    /// overflow or non-positive dimensions.
    pub fn buffer_len(&self) -> Option<usize> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(usize::from(self.channels))
    }
}

/// Typed pixel that decoded output can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    /// Channel count this pixel type occupies in the flat buffer.
    fn channels() -> u8;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn channels() -> u8 {
        3
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn channels() -> u8 {
        4
    }
}
