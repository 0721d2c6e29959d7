#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 1x1 24-bit
    let mut bmp = vec![0u8; 58]; // 54 header + 3 pixel + 1 padding
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[54] = 0xff; // blue
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), &bmp).unwrap();

    // 1x1 16-bit with trailing RGB565 masks after a 40-byte header
    let mut bmp = vec![0u8; 70]; // 54 header + 12 masks + 2 pixel + 2 padding
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&70u32.to_le_bytes());
    bmp[10..14].copy_from_slice(&66u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes());
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&16u16.to_le_bytes());
    bmp[30..34].copy_from_slice(&3u32.to_le_bytes()); // BI_BITFIELDS
    bmp[54..58].copy_from_slice(&0xF800u32.to_le_bytes());
    bmp[58..62].copy_from_slice(&0x07E0u32.to_le_bytes());
    bmp[62..66].copy_from_slice(&0x001Fu32.to_le_bytes());
    bmp[66..68].copy_from_slice(&0xF800u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_1x1_16_bitfields.bmp"), &bmp).unwrap();

    // 1x1 8-bit palette, one color
    let mut bmp = vec![0u8; 62]; // 54 header + 4 palette + 1 index + 3 padding
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&62u32.to_le_bytes());
    bmp[10..14].copy_from_slice(&58u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes());
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&8u16.to_le_bytes());
    bmp[46..50].copy_from_slice(&1u32.to_le_bytes()); // colors used
    bmp[54..58].copy_from_slice(&[10, 20, 30, 0]); // palette entry
    fs::write(format!("{dir}/bmp_1x1_pal8.bmp"), &bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/truncated.bmp"), &b"BM\x00\x00"[..]).unwrap();
    fs::write(format!("{dir}/bad_magic.bmp"), &b"XX\x00\x00\x00\x00"[..]).unwrap();

    println!("seeds written to {dir}");
}
