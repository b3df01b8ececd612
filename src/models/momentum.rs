//! Extrapolates the recent trend of the sequence by one step.

use super::model::{Family, History, Model};
use crate::utils::distribution;
use crate::utils::thresholds::MIN_MODEL_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

/// The number of recent digits that the trend is computed from.
const TREND_LEN: usize = 5;

/// Returns the last digit plus the average first difference of the last few
/// digits, rounded half up. The result may fall outside of 0..=9.
pub fn extrapolate(data: &[u8]) -> Option<i64> {
    if data.len() < TREND_LEN {
        return None;
    }
    let recent = &data[data.len() - TREND_LEN..];
    let diffs: i64 = recent
        .windows(2)
        .map(|w| w[1] as i64 - w[0] as i64)
        .sum();
    let avg = diffs as f64 / (TREND_LEN - 1) as f64;
    let last = recent[TREND_LEN - 1] as f64;
    Some((last + avg + 0.5).floor() as i64)
}

pub struct MomentumModel<'a> {
    history: &'a History<'a>,
}

impl<'a> Model<'a> for MomentumModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Sequence Momentum"
    }

    fn family(&self) -> Family {
        Family::Frequency
    }

    fn predict(&self) -> Probabilities {
        let data = self.history.data();
        if data.len() < MIN_MODEL_LEN {
            return UNIFORM;
        }
        let predicted = match extrapolate(data) {
            Some(p) => p,
            None => return UNIFORM,
        };

        let spread = self.history.ctx().momentum_spread;
        let mut weights = [0.0; NUM_DIGITS];
        for (i, w) in weights.iter_mut().enumerate() {
            let distance = (i as i64 - predicted).abs() as f64;
            *w = (-distance * spread).exp();
        }
        distribution::normalize(&weights)
    }
}

#[test]
fn test_extrapolate() {
    assert_eq!(extrapolate(&[1, 2, 3, 4, 5]), Some(6));
    assert_eq!(extrapolate(&[9, 7, 5, 3, 1]), Some(-1));
    assert_eq!(extrapolate(&[4, 4, 4, 4, 4]), Some(4));
    // 5 + 0.5 rounds up.
    assert_eq!(extrapolate(&[3, 3, 3, 3, 5]), Some(6));
    assert_eq!(extrapolate(&[1, 2]), None);
}
