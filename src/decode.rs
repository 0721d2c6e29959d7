//! BMP decoding: header cascade, palette expansion, bitfield extraction.
//!
//! Pixel rows are stored bottom-up in the file; output buffers are written
//! back to front so the result is top-down.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::header::{self, FILE_HEADER_SIZE, ParsedHeader};
use crate::limits::Limits;
use crate::masks::ResolvedMasks;
use crate::pixel::BmpDescriptor;
use crate::reader::ByteReader;

/// Decode BMP data into a flat top-down R,G,B[,A] buffer.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BmpError> {
    decode_impl(data, None, &stop)
}

/// Probe the header for the output shape without decoding pixels.
pub fn probe_bmp(data: &[u8]) -> Result<BmpDescriptor, BmpError> {
    let parsed = header::parse_headers(data)?;
    Ok(descriptor_for(&parsed))
}

/// Builder for decode calls that need resource limits.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, BmpError> {
        decode_impl(self.data, self.limits, &stop)
    }
}

/// Decoded image: owned pixel buffer plus its shape.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    descriptor: BmpDescriptor,
}

impl DecodeOutput {
    /// Access the pixel data (top row first, R,G,B[,A] interleaved).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn descriptor(&self) -> BmpDescriptor {
        self.descriptor
    }

    pub fn width(&self) -> i32 {
        self.descriptor.width
    }

    pub fn height(&self) -> i32 {
        self.descriptor.height
    }

    pub fn channels(&self) -> u8 {
        self.descriptor.channels
    }

    /// Reinterpret the pixel data as a typed pixel slice.
    ///
    /// Returns [`BmpError::ChannelMismatch`] if the decoded channel count
    /// doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        use rgb::AsPixels as _;
        if self.descriptor.channels != P::channels() {
            return Err(BmpError::ChannelMismatch {
                requested: P::channels(),
                actual: self.descriptor.channels,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.descriptor.width as usize,
            self.descriptor.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.descriptor.width as usize,
            self.descriptor.height as usize,
        ))
    }
}

fn descriptor_for(parsed: &ParsedHeader) -> BmpDescriptor {
    // Palette output is always 3-channel; direct output grows an alpha
    // channel only when the alpha mask survives normalization.
    let channels = match parsed.dib.bits_per_pixel {
        16 | 24 | 32 if parsed.meta.has_alpha_channel => 4,
        _ => 3,
    };
    BmpDescriptor {
        width: parsed.dib.width,
        height: parsed.meta.rows as i32,
        channels,
    }
}

fn decode_impl(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, BmpError> {
    let parsed = header::parse_headers(data)?;
    let descriptor = descriptor_for(&parsed);
    let width = parsed.dib.width as u32;
    let rows = parsed.meta.rows;

    if let Some(limits) = limits {
        limits.check(width, rows)?;
    }
    let out_bytes = (width as usize)
        .checked_mul(rows as usize)
        .and_then(|wh| wh.checked_mul(usize::from(descriptor.channels)))
        .ok_or(BmpError::DimensionsTooLarge {
            width,
            height: rows,
        })?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }

    // The whole declared pixel region must be present in the input.
    let data_end = u64::from(parsed.file.pixel_data_offset)
        + u64::from(parsed.meta.expected_data_size);
    if data_end > u64::from(parsed.file.file_size) {
        return Err(BmpError::MalformedHeader(
            "pixel data extends past the end of the input".into(),
        ));
    }

    stop.check()?;

    let mut buf = vec![0u8; out_bytes];
    match parsed.dib.bits_per_pixel {
        1 | 2 | 4 | 8 => decode_palette(data, &parsed, &mut buf, stop)?,
        16 | 24 | 32 => decode_direct(data, &parsed, descriptor.channels, &mut buf, stop)?,
        other => return Err(BmpError::UnsupportedBitDepth(other)),
    }

    Ok(DecodeOutput {
        pixels: buf,
        descriptor,
    })
}

/// Palette path: 1/2/4/8 bpp indices into a BGRA color table.
fn decode_palette(
    data: &[u8],
    parsed: &ParsedHeader,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let dib = &parsed.dib;
    let colors = dib.colors_used;
    if colors == 0 || colors > 256 {
        return Err(BmpError::InvalidPaletteSize(colors));
    }
    let palette_end = FILE_HEADER_SIZE + dib.header_size + colors * 4;
    if parsed.file.pixel_data_offset < palette_end {
        return Err(BmpError::InvalidDataOffset {
            offset: parsed.file.pixel_data_offset,
        });
    }

    // Unused entries stay zero so every index a sub-byte pixel can express
    // resolves in bounds.
    let mut palette = [[0u8; 4]; 256];
    let mut r = ByteReader::new(data);
    r.set_position((FILE_HEADER_SIZE + dib.header_size) as usize)?;
    for entry in palette.iter_mut().take(colors as usize) {
        *entry = r.read_fixed_bytes::<4>()?;
    }

    let w = dib.width as usize;
    let bpp = usize::from(dib.bits_per_pixel);
    let pixels_per_byte = 8 / bpp;
    let index_mask = ((1u16 << bpp) - 1) as u8;
    let row_bytes = parsed.meta.padded_row_width as usize;

    r.set_position(parsed.file.pixel_data_offset as usize)?;
    for (row_idx, out_row) in buf.rchunks_exact_mut(w * 3).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let row = r.read_slice(row_bytes)?;
        for (x, px) in out_row.chunks_exact_mut(3).enumerate() {
            // Leftmost pixel sits in the most-significant bits.
            let shift = 8 - (x % pixels_per_byte + 1) * bpp;
            let index = (row[x / pixels_per_byte] >> shift) & index_mask;
            let [b, g, red, _a] = palette[usize::from(index)];
            px[0] = red;
            px[1] = g;
            px[2] = b;
        }
    }
    Ok(())
}

/// Direct path: 16/24/32 bpp samples extracted through resolved masks.
fn decode_direct(
    data: &[u8],
    parsed: &ParsedHeader,
    channels: u8,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let dib = &parsed.dib;
    let resolved = ResolvedMasks::resolve(dib.masks);
    let w = dib.width as usize;
    let bytes_per_pixel = usize::from(dib.bits_per_pixel / 8);
    let row_bytes = parsed.meta.padded_row_width as usize;
    let channels = usize::from(channels);

    let mut r = ByteReader::new(data);
    r.set_position(parsed.file.pixel_data_offset as usize)?;
    for (row_idx, out_row) in buf.rchunks_exact_mut(w * channels).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let row = r.read_slice(row_bytes)?;
        for (x, px) in out_row.chunks_exact_mut(channels).enumerate() {
            let raw = &row[x * bytes_per_pixel..];
            let v = match bytes_per_pixel {
                2 => u32::from(u16::from_le_bytes([raw[0], raw[1]])),
                3 => u32::from(raw[0]) | u32::from(raw[1]) << 8 | u32::from(raw[2]) << 16,
                _ => u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
            };
            // A channel with no mask is left at zero, not divided by it.
            if !resolved.red.is_empty() {
                px[0] = resolved.red.extract(v);
            }
            if !resolved.green.is_empty() {
                px[1] = resolved.green.extract(v);
            }
            if !resolved.blue.is_empty() {
                px[2] = resolved.blue.extract(v);
            }
            if channels == 4 {
                px[3] = resolved.alpha.extract(v);
            }
        }
    }
    Ok(())
}
