#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode and probe must never panic, whatever the bytes
    let _ = zenbmp::decode_bmp(data, enough::Unstoppable);
    let _ = zenbmp::probe_bmp(data);
});
