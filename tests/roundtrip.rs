//! Encode→decode roundtrips and encode-side contract checks.

use enough::Unstoppable;
use zenbmp::*;

fn checkerboard(w: usize, h: usize, channels: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * channels];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * channels;
            if (x + y) % 2 == 0 {
                for c in 0..channels {
                    pixels[off + c] = 200u8.saturating_add(c as u8 * 20);
                }
            } else {
                for c in 0..channels {
                    pixels[off + c] = 10u8.saturating_add(c as u8 * 30);
                }
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize, channels: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * channels];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

#[test]
fn bmp_roundtrip_rgb() {
    let w = 3;
    let h = 2;
    let pixels = vec![
        255, 0, 0, 0, 255, 0, 0, 0, 255, // row 0: R G B
        128, 128, 128, 64, 64, 64, 0, 0, 0, // row 1: gray dark black
    ];
    let desc = BmpDescriptor::new(w, h, 3);

    let encoded = encode_bmp(&pixels, desc, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.descriptor(), desc);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn bmp_roundtrip_rgba() {
    let w = 2;
    let h = 2;
    let pixels = vec![
        255, 0, 0, 255, 0, 255, 0, 128, // row 0
        0, 0, 255, 64, 128, 128, 128, 255, // row 1
    ];
    let desc = BmpDescriptor::new(w, h, 4);

    let encoded = encode_bmp(&pixels, desc, Unstoppable).unwrap();
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.descriptor(), desc);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn roundtrip_odd_width_exercises_row_padding() {
    // 5*3 = 15 bytes per row, padded to 16 in the file.
    let pixels = checkerboard(5, 3, 3);
    let desc = BmpDescriptor::new(5, 3, 3);

    let encoded = encode_bmp(&pixels, desc, Unstoppable).unwrap();
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.descriptor(), desc);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn roundtrip_arbitrary_bytes() {
    for &(w, h, channels) in &[(1, 1, 3), (1, 1, 4), (3, 2, 3), (5, 7, 4), (16, 16, 3)] {
        let pixels = noise_pattern(w, h, channels);
        let desc = BmpDescriptor::new(w as i32, h as i32, channels as u8);

        let encoded = encode_bmp(&pixels, desc, Unstoppable).unwrap();
        let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
        assert_eq!(decoded.descriptor(), desc, "{w}x{h}x{channels}");
        assert_eq!(decoded.pixels(), &pixels[..], "{w}x{h}x{channels}");
    }
}

#[test]
fn encode_is_deterministic() {
    let pixels = noise_pattern(7, 5, 4);
    let desc = BmpDescriptor::new(7, 5, 4);
    let a = encode_bmp(&pixels, desc, Unstoppable).unwrap();
    let b = encode_bmp(&pixels, desc, Unstoppable).unwrap();
    assert_eq!(a, b);
}

#[test]
fn encoded_layout_is_canonical() {
    let pixels = checkerboard(4, 2, 4);
    let encoded = encode_bmp(&pixels, BmpDescriptor::new(4, 2, 4), Unstoppable).unwrap();

    assert_eq!(&encoded[0..2], b"BM");
    // File size field matches output length
    let file_size = u32::from_le_bytes(encoded[2..6].try_into().unwrap());
    assert_eq!(file_size as usize, encoded.len());
    // Pixel data starts right after the 14+56 byte headers
    let offset = u32::from_le_bytes(encoded[10..14].try_into().unwrap());
    assert_eq!(offset, 70);
    let dib_size = u32::from_le_bytes(encoded[14..18].try_into().unwrap());
    assert_eq!(dib_size, 56);
    let bpp = u16::from_le_bytes(encoded[28..30].try_into().unwrap());
    assert_eq!(bpp, 32);
    let compression = u32::from_le_bytes(encoded[30..34].try_into().unwrap());
    assert_eq!(compression, 3);
    // Fixed masks, R,G,B,A
    assert_eq!(
        u32::from_le_bytes(encoded[54..58].try_into().unwrap()),
        0x00FF_0000
    );
    assert_eq!(
        u32::from_le_bytes(encoded[58..62].try_into().unwrap()),
        0x0000_FF00
    );
    assert_eq!(
        u32::from_le_bytes(encoded[62..66].try_into().unwrap()),
        0x0000_00FF
    );
    assert_eq!(
        u32::from_le_bytes(encoded[66..70].try_into().unwrap()),
        0xFF00_0000
    );
}

#[test]
fn encoded_rgb_uses_24bpp_uncompressed() {
    let pixels = checkerboard(4, 2, 3);
    let encoded = encode_bmp(&pixels, BmpDescriptor::new(4, 2, 3), Unstoppable).unwrap();

    let bpp = u16::from_le_bytes(encoded[28..30].try_into().unwrap());
    assert_eq!(bpp, 24);
    let compression = u32::from_le_bytes(encoded[30..34].try_into().unwrap());
    assert_eq!(compression, 0);
}

#[test]
fn encode_rejects_bad_channel_count() {
    let result = encode_bmp(&[0u8; 4], BmpDescriptor::new(2, 2, 1), Unstoppable);
    match result {
        Err(BmpError::UnsupportedChannelCount(1)) => {}
        other => panic!("expected UnsupportedChannelCount, got {other:?}"),
    }
}

#[test]
fn encode_rejects_wrong_buffer_size() {
    let result = encode_bmp(&[0u8; 11], BmpDescriptor::new(2, 2, 3), Unstoppable);
    match result {
        Err(BmpError::SizeMismatch {
            expected: 12,
            actual: 11,
        }) => {}
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

#[test]
fn encode_rejects_non_positive_dimensions() {
    let result = encode_bmp(&[], BmpDescriptor::new(0, 2, 3), Unstoppable);
    assert!(matches!(result, Err(BmpError::InvalidDimensions { .. })));

    let result = encode_bmp(&[], BmpDescriptor::new(2, -1, 3), Unstoppable);
    assert!(matches!(result, Err(BmpError::InvalidDimensions { .. })));
}

#[test]
fn probe_agrees_with_decode() {
    let pixels = noise_pattern(6, 4, 4);
    let desc = BmpDescriptor::new(6, 4, 4);
    let encoded = encode_bmp(&pixels, desc, Unstoppable).unwrap();

    let probed = probe_bmp(&encoded).unwrap();
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(probed, decoded.descriptor());
}

#[test]
fn limits_reject_large() {
    let pixels = noise_pattern(2, 1, 3);
    let encoded = encode_bmp(&pixels, BmpDescriptor::new(2, 1, 3), Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result {
        Err(BmpError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}
