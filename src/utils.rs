//! A collection of utilities for handling distributions, input text and
//! sample sequences.

/// The minimal sequence lengths that the different models need.
pub mod thresholds {
    /// The order tables need six points (order five plus the next digit).
    pub const MIN_TABLE_LEN: usize = 6;
    /// Most single-model estimators.
    pub const MIN_MODEL_LEN: usize = 10;
    /// The entropy weighting and the ensemble.
    pub const MIN_ENSEMBLE_LEN: usize = 20;
    /// Change-point detection and Bayesian averaging.
    pub const MIN_REGIME_LEN: usize = 50;
}

/// Operations on probability vectors.
pub mod distribution {
    use crate::{Probabilities, NUM_DIGITS, UNIFORM};

    /// Divide every entry in 'weights' by the sum of the entries. Return the
    /// uniform distribution if the weights sum to zero.
    pub fn normalize(weights: &Probabilities) -> Probabilities {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return UNIFORM;
        }
        let mut result = [0.0; NUM_DIGITS];
        for (out, w) in result.iter_mut().zip(weights.iter()) {
            *out = w / total;
        }
        result
    }

    /// Normalize a vector of counts into a distribution.
    pub fn from_counts(counts: &[u32; NUM_DIGITS]) -> Probabilities {
        let mut weights = [0.0; NUM_DIGITS];
        for (w, c) in weights.iter_mut().zip(counts.iter()) {
            *w = *c as f64;
        }
        normalize(&weights)
    }

    /// Returns the Shannon entropy of 'probs' in bits. Zero entries are
    /// skipped.
    pub fn entropy_bits(probs: &[f64]) -> f64 {
        probs
            .iter()
            .filter(|p| **p > 0.0)
            .fold(0.0, |ent, p| ent - p * p.log2())
    }

    /// The entropy of the uniform distribution over the digits.
    pub fn max_entropy() -> f64 {
        (NUM_DIGITS as f64).log2()
    }

    /// Returns the index and value of the highest entry.
    pub fn argmax(probs: &Probabilities) -> (usize, f64) {
        let mut best = 0;
        for i in 1..NUM_DIGITS {
            if probs[i] > probs[best] {
                best = i;
            }
        }
        (best, probs[best])
    }

    /// Return True if 'probs' is non-negative and sums to 'total'.
    pub fn is_distribution(probs: &[f64], total: f64, tolerance: f64) -> bool {
        let sum: f64 = probs.iter().sum();
        probs.len() == NUM_DIGITS
            && probs.iter().all(|p| *p >= 0.0 && p.is_finite())
            && (sum - total).abs() <= tolerance
    }
}

/// Turns free text into a digit sequence. Tokens are split on whitespace and
/// commas. Tokens that are not integers, or that are outside of the range
/// 0..=9, are dropped.
pub mod parsing {
    /// Returns True if 'ch' separates tokens.
    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || ch == ','
    }

    pub fn parse_digits(text: &str) -> Vec<u8> {
        let mut digits = Vec::new();
        for token in text.split(is_separator) {
            if token.is_empty() {
                continue;
            }
            if let Ok(val) = token.parse::<i64>() {
                if (0..=9).contains(&val) {
                    digits.push(val as u8);
                }
            }
        }
        log::debug!("Parsed {} digits from {} bytes", digits.len(), text.len());
        digits
    }

    /// Render the sequence in the format that 'parse_digits' accepts.
    pub fn format_digits(digits: &[u8]) -> String {
        let parts: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
        parts.join(", ")
    }
}

/// Generates synthetic sequences.
pub mod sample {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Returns 'len' uniformly distributed digits. The same seed always
    /// generates the same sequence.
    pub fn random_digits(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(0..10u8)).collect()
    }

    /// Returns the sequence 'd[i] = (i % period) % 10'.
    pub fn periodic_digits(len: usize, period: usize) -> Vec<u8> {
        (0..len).map(|i| ((i % period) % 10) as u8).collect()
    }
}

#[test]
fn test_parse_digits() {
    let digits = parsing::parse_digits("1, 2 3,,4\n5\t10 -1 x 9");
    assert_eq!(digits, vec![1, 2, 3, 4, 5, 9]);
    assert!(parsing::parse_digits("").is_empty());
}

#[test]
fn test_normalize() {
    let probs = distribution::normalize(&[0.0; 10]);
    assert_eq!(probs, crate::UNIFORM);
    let probs = distribution::normalize(&[2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(probs[0], 0.5);
    assert_eq!(probs[1], 0.5);
}
