//! BMP encoder: canonical uncompressed 24-bit and 32-bit BITFIELDS output.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::header::{Compression, DIB_HEADER_V3, FILE_HEADER_SIZE, padded_row_width};
use crate::masks::ChannelMasks;
use crate::pixel::BmpDescriptor;
use crate::reader::ByteWriter;

/// Encode a flat top-down R,G,B[,A] buffer to BMP.
///
/// 3-channel input becomes 24 bpp uncompressed; 4-channel input becomes
/// 32 bpp BITFIELDS with full 8-bit masks. Output is deterministic.
pub fn encode_bmp(
    pixels: &[u8],
    desc: BmpDescriptor,
    stop: impl Stop,
) -> Result<Vec<u8>, BmpError> {
    encode_impl(pixels, desc, &stop)
}

fn encode_impl(
    pixels: &[u8],
    desc: BmpDescriptor,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    if desc.channels != 3 && desc.channels != 4 {
        return Err(BmpError::UnsupportedChannelCount(desc.channels));
    }
    if desc.width <= 0 || desc.height <= 0 {
        return Err(BmpError::InvalidDimensions {
            width: desc.width,
            height: desc.height,
        });
    }
    let w = desc.width as usize;
    let h = desc.height as usize;
    let channels = usize::from(desc.channels);
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(channels))
        .ok_or(BmpError::DimensionsTooLarge {
            width: desc.width as u32,
            height: desc.height as u32,
        })?;
    if pixels.len() != expected {
        return Err(BmpError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let (bits_per_pixel, compression, masks) = if desc.channels == 4 {
        (
            32u16,
            Compression::Bitfields,
            ChannelMasks {
                red: 0x00FF_0000,
                green: 0x0000_FF00,
                blue: 0x0000_00FF,
                alpha: 0xFF00_0000,
            },
        )
    } else {
        (24u16, Compression::Rgb, ChannelMasks::default())
    };

    let row_stride = padded_row_width(w as u64, u64::from(bits_per_pixel));
    let data_size = row_stride * h as u64;
    let file_size = u64::from(FILE_HEADER_SIZE + DIB_HEADER_V3) + data_size;
    if file_size > u64::from(u32::MAX) {
        return Err(BmpError::DimensionsTooLarge {
            width: desc.width as u32,
            height: desc.height as u32,
        });
    }
    let row_stride = row_stride as usize;
    let pad = row_stride - w * usize::from(bits_per_pixel / 8);

    let mut out = ByteWriter::with_capacity(file_size as usize);
    // File header (14 bytes)
    out.put_bytes(b"BM");
    out.put_u32_le(file_size as u32);
    out.put_u16_le(0); // reserved
    out.put_u16_le(0); // reserved
    out.put_u32_le(FILE_HEADER_SIZE + DIB_HEADER_V3);
    // DIB header (56 bytes: BITMAPINFOHEADER + RGBA masks)
    out.put_u32_le(DIB_HEADER_V3);
    out.put_i32_le(desc.width);
    out.put_i32_le(desc.height); // positive: bottom-up row order
    out.put_u16_le(1); // planes
    out.put_u16_le(bits_per_pixel);
    out.put_u32_le(compression.to_u32());
    out.put_u32_le(data_size as u32);
    out.put_u32_le(96); // horizontal resolution
    out.put_u32_le(96); // vertical resolution
    out.put_u32_le(0); // colors used
    out.put_u32_le(0); // important colors
    out.put_u32_le(masks.red);
    out.put_u32_le(masks.green);
    out.put_u32_le(masks.blue);
    out.put_u32_le(masks.alpha);

    // Bottom row first; R,G,B[,A] reordered to file order B,G,R[,A].
    let in_row = w * channels;
    for (row_idx, src) in pixels.rchunks_exact(in_row).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in src.chunks_exact(channels) {
            out.put_u8(px[2]);
            out.put_u8(px[1]);
            out.put_u8(px[0]);
            if channels == 4 {
                out.put_u8(px[3]);
            }
        }
        out.pad(pad);
    }

    Ok(out.into_inner())
}
