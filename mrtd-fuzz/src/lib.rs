//! Fuzzing placeholder for mrtd-core decoder and verifier
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

/// Split fuzz input into a line pair on the first `;`
fn split_lines(data: &[u8]) -> (String, String) {
    let text = String::from_utf8_lossy(data);
    match text.split_once(';') {
        Some((line1, line2)) => (line1.to_string(), line2.to_string()),
        None => (text.to_string(), String::new()),
    }
}

pub fn fuzz_decode(data: &[u8]) {
    use mrtd_core::decoder::decode;

    // Try to decode - should never panic
    let (line1, line2) = split_lines(data);
    let _ = decode(&line1, &line2);
}

pub fn fuzz_verify(data: &[u8]) {
    use mrtd_core::verifier::verify_lines;

    // Try to verify - should never panic
    let (line1, line2) = split_lines(data);
    let _ = verify_lines(&line1, &line2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_verify_empty() {
        fuzz_verify(&[]);
    }

    #[test]
    fn test_fuzz_verify_random() {
        fuzz_verify(&[0xFF; 1024]);
    }
}
