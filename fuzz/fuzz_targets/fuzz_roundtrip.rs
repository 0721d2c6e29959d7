#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding must decode back to identical pixels
    let Ok(decoded) = zenbmp::decode_bmp(data, enough::Unstoppable) else {
        return;
    };

    let Ok(reencoded) =
        zenbmp::encode_bmp(decoded.pixels(), decoded.descriptor(), enough::Unstoppable)
    else {
        return;
    };

    let decoded2 = zenbmp::decode_bmp(&reencoded, enough::Unstoppable)
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded.descriptor(), decoded2.descriptor());
    assert_eq!(
        decoded.pixels(),
        decoded2.pixels(),
        "roundtrip pixel mismatch"
    );
});
