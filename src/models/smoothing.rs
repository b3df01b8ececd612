//! A discounted back-off estimator. A fixed discount is subtracted from every
//! observed count of the last digit's row, and the reserved mass is spread
//! according to the continuation counts of the whole sequence.

use super::model::{Family, History, Model};
use crate::utils::distribution;
use crate::utils::thresholds::MIN_MODEL_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

/// Returns, for each digit, the number of distinct digits that preceded it.
/// Every (previous, next) pair is counted once, no matter how often it occurs.
pub fn continuation_counts(data: &[u8]) -> [u32; NUM_DIGITS] {
    let mut seen = [[false; NUM_DIGITS]; NUM_DIGITS];
    let mut counts = [0; NUM_DIGITS];
    for pair in data.windows(2) {
        let (prev, next) = (pair[0] as usize, pair[1] as usize);
        if !seen[prev][next] {
            seen[prev][next] = true;
            counts[next] += 1;
        }
    }
    counts
}

pub struct SmoothingModel<'a> {
    history: &'a History<'a>,
}

impl<'a> Model<'a> for SmoothingModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Kneser-Ney Smoothing"
    }

    fn family(&self) -> Family {
        Family::Frequency
    }

    fn predict(&self) -> Probabilities {
        let data = self.history.data();
        if data.len() < MIN_MODEL_LEN {
            return UNIFORM;
        }

        let continuation = continuation_counts(data);
        let total_continuations: u32 = continuation.iter().sum();
        if total_continuations == 0 {
            return UNIFORM;
        }

        let row = self
            .history
            .tables()
            .order(1)
            .and_then(|table| table.tail_counts(data));

        let counts = match row {
            Some(counts) => counts,
            None => return distribution::from_counts(&continuation),
        };

        let discount = self.history.ctx().discount;
        let total: u32 = counts.iter().sum();
        let total = total as f64;
        let non_zero = counts.iter().filter(|c| **c > 0).count() as f64;
        let reserved = discount * non_zero / total;

        let mut result = [0.0; NUM_DIGITS];
        for i in 0..NUM_DIGITS {
            let discounted = (counts[i] as f64 - discount).max(0.0);
            let backoff =
                continuation[i] as f64 / total_continuations as f64;
            result[i] = discounted / total + reserved * backoff;
        }
        result
    }
}

#[test]
fn test_continuation_counts() {
    // Pairs: (1,2) (2,1) (1,2) (2,2) (2,3).
    let counts = continuation_counts(&[1, 2, 1, 2, 2, 3]);
    assert_eq!(counts[1], 1);
    assert_eq!(counts[2], 2);
    assert_eq!(counts[3], 1);
    assert_eq!(counts.iter().sum::<u32>(), 4);
}
