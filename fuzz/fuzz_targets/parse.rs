#![no_main]

use digitcast::utils::parsing::parse_digits;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let digits = parse_digits(text);
        assert!(digits.iter().all(|d| *d < 10));
    }
});
