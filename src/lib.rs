//! # zenbmp
//!
//! Windows BMP (DIB) image format decoder and encoder.
//!
//! A pure binary transcoder: bytes in, flat top-down R,G,B[,A] pixel buffer
//! out, and back. No I/O. Callers hand in the full file contents and get a
//! pixel buffer plus a [`BmpDescriptor`], or vice versa.
//!
//! ## Supported Input
//!
//! - All six DIB header variants (12/40/52/56/108/124 bytes), normalized
//!   onto one canonical record
//! - Palette formats at 1/2/4/8 bpp (decoded to RGB)
//! - Direct formats at 16/24/32 bpp, including BITFIELDS and
//!   ALPHABITFIELDS with arbitrary channel masks (channels wider than
//!   8 bits are downsampled to their top 8 bits)
//! - Icon payloads whose declared data size covers only the XOR plane
//!   (the single image is extracted; the AND mask is ignored)
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 and JPEG/PNG-in-BMP payloads
//! - CMYK color spaces
//! - ICC profile interpretation (V4/V5 colorimetry fields pass through)
//! - Top-down (negative-height) storage
//!
//! Encoding always produces the canonical layout: 24 bpp uncompressed for
//! 3-channel input, 32 bpp BITFIELDS with full 8-bit masks for 4-channel
//! input. `decode(encode(pixels, desc))` is lossless.
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe the output shape without decoding
//! let desc = zenbmp::probe_bmp(data)?;
//! println!("{}x{} {} channels", desc.width, desc.height, desc.channels);
//!
//! // Decode
//! let decoded = zenbmp::decode_bmp(data, Unstoppable)?;
//!
//! // Encode back
//! let bytes = zenbmp::encode_bmp(decoded.pixels(), decoded.descriptor(), Unstoppable)?;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod header;
mod limits;
mod masks;
mod pixel;
mod reader;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, decode_bmp, probe_bmp};
pub use encode::encode_bmp;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use pixel::BmpDescriptor;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
