//! Detects shifts in the mean of the sequence by comparing the windows before
//! and after every index.

use crate::utils::thresholds::MIN_REGIME_LEN;
use crate::Context;

/// An index where the mean of the following window differs from the mean of
/// the preceding window by more than the threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChangePoint {
    pub index: usize,
    /// The absolute difference between the two window means.
    pub magnitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegimeInfo {
    pub change_points: Vec<ChangePoint>,
    /// The number of steps since the last change point, or the length of the
    /// sequence if there is none. Zero if there was not enough data.
    pub current_regime: usize,
}

impl RegimeInfo {
    pub fn last_change(&self) -> Option<&ChangePoint> {
        self.change_points.last()
    }
}

pub fn detect(data: &[u8], ctx: &Context) -> RegimeInfo {
    if data.len() < MIN_REGIME_LEN {
        return RegimeInfo::default();
    }

    let window = ctx.regime_window;
    let mut change_points = Vec::new();

    if data.len() > 2 * window {
        // prefix[i] is the sum of the first 'i' digits.
        let mut prefix = Vec::with_capacity(data.len() + 1);
        prefix.push(0u64);
        for d in data {
            prefix.push(prefix[prefix.len() - 1] + *d as u64);
        }

        for i in window..data.len() - window {
            let before = (prefix[i] - prefix[i - window]) as f64 / window as f64;
            let after = (prefix[i + window] - prefix[i]) as f64 / window as f64;
            let magnitude = (after - before).abs();
            if magnitude > ctx.regime_threshold {
                log::trace!("Change point at {} ({:.2})", i, magnitude);
                change_points.push(ChangePoint { index: i, magnitude });
            }
        }
    }

    let current_regime = match change_points.last() {
        Some(cp) => data.len() - cp.index,
        None => data.len(),
    };

    RegimeInfo {
        change_points,
        current_regime,
    }
}
