//! Measures how predictable the recent digits are. Low entropy favors the
//! pattern models and high entropy favors the frequency models.

use crate::utils::distribution::{entropy_bits, max_entropy};
use crate::{Context, NUM_DIGITS};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntropyWeights {
    /// The entropy of the recent window, normalized to [0, 1].
    pub entropy: f64,
    pub pattern_weight: f64,
    pub frequency_weight: f64,
}

impl Default for EntropyWeights {
    fn default() -> Self {
        Self {
            entropy: 0.5,
            pattern_weight: 0.5,
            frequency_weight: 0.5,
        }
    }
}

pub fn weigh(data: &[u8], ctx: &Context) -> EntropyWeights {
    let window = ctx.entropy_window;
    if window == 0 || data.len() < window {
        return EntropyWeights::default();
    }

    let mut freq = [0.0; NUM_DIGITS];
    for d in &data[data.len() - window..] {
        freq[*d as usize] += 1.0;
    }
    for f in freq.iter_mut() {
        *f /= window as f64;
    }

    let entropy = entropy_bits(&freq) / max_entropy();
    EntropyWeights {
        entropy,
        pattern_weight: 1.0 - entropy,
        frequency_weight: entropy,
    }
}

#[test]
fn test_constant_window() {
    let data = [7; 30];
    let w = weigh(&data, &Context::default());
    assert_eq!(w.entropy, 0.0);
    assert_eq!(w.pattern_weight, 1.0);
    assert_eq!(w.frequency_weight, 0.0);
}
