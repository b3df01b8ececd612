//! Finds historical windows that look like the most recent digits and votes
//! for the digits that followed them.

use super::model::{Family, History, Model};
use crate::utils::distribution;
use crate::utils::thresholds::MIN_MODEL_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

/// Compare two windows position by position. An exact match scores 1, and
/// digits that are one apart score 0.5.
pub fn similarity(window: &[u8], target: &[u8]) -> f64 {
    debug_assert_eq!(window.len(), target.len());
    let mut score = 0.0;
    for (a, b) in window.iter().zip(target.iter()) {
        if a == b {
            score += 1.0;
        } else if a.abs_diff(*b) <= 1 {
            score += 0.5;
        }
    }
    score
}

pub struct PatternModel<'a> {
    history: &'a History<'a>,
}

impl<'a> PatternModel<'a> {
    /// Returns the accumulated similarity for each next digit.
    pub fn scores(&self) -> Probabilities {
        let data = self.history.data();
        let ctx = self.history.ctx();
        let len = ctx.pattern_len;
        let mut scores = [0.0; NUM_DIGITS];
        if len == 0 || data.len() <= len {
            return scores;
        }

        let target = &data[data.len() - len..];
        // The last windows are skipped, they overlap the target.
        for i in 0..data.len().saturating_sub(len + 1) {
            let score = similarity(&data[i..i + len], target);
            if score >= ctx.pattern_min_similarity {
                scores[data[i + len] as usize] += score;
            }
        }
        scores
    }
}

impl<'a> Model<'a> for PatternModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Pattern Completion"
    }

    fn family(&self) -> Family {
        Family::Pattern
    }

    fn predict(&self) -> Probabilities {
        if self.history.len() < MIN_MODEL_LEN {
            return UNIFORM;
        }
        distribution::normalize(&self.scores())
    }
}

#[test]
fn test_similarity() {
    assert_eq!(similarity(&[1, 2, 3, 4], &[1, 2, 3, 4]), 4.0);
    assert_eq!(similarity(&[1, 2, 3, 4], &[2, 2, 9, 4]), 2.5);
    assert_eq!(similarity(&[0, 0, 0, 0], &[9, 9, 9, 9]), 0.0);
}
