#![no_main]

use digitcast::utils::distribution::is_distribution;
use digitcast::utils::thresholds::MIN_ENSEMBLE_LEN;
use digitcast::{predict, Context};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|b| b % 10).collect();
    let result = predict(&digits, Context::default());

    if digits.len() < MIN_ENSEMBLE_LEN {
        assert!(result.is_none());
        return;
    }

    let result = result.unwrap();
    assert!(is_distribution(&result.percentages, 100.0, 1e-6));
    for m in result.methods.iter() {
        assert!(is_distribution(&m.probabilities, 1.0, 1e-6));
    }
});
