//! Averages a few of the models with additive smoothing. This consensus is
//! reported next to the ensemble and does not take part in the mixing.

use super::model::{Family, History, Model};
use super::recency::RecencyModel;
use super::smoothing::SmoothingModel;
use crate::utils::distribution;
use crate::utils::thresholds::MIN_REGIME_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

/// The pseudo-count that is added to every entry of every model.
const ALPHA: f64 = 0.1;

pub struct BayesianAverage<'a> {
    history: &'a History<'a>,
}

impl<'a> BayesianAverage<'a> {
    /// The row of the last 'order' digits, or zeros if it was never seen.
    fn row(&self, order: usize) -> Probabilities {
        self.history
            .tables()
            .order(order)
            .and_then(|table| table.tail_probabilities(self.history.data()))
            .copied()
            .unwrap_or([0.0; NUM_DIGITS])
    }
}

impl<'a> Model<'a> for BayesianAverage<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Bayesian Averaging"
    }

    fn family(&self) -> Family {
        Family::Frequency
    }

    fn predict(&self) -> Probabilities {
        if self.history.len() < MIN_REGIME_LEN {
            return UNIFORM;
        }

        let members = [
            self.row(1),
            self.row(2),
            SmoothingModel::new(self.history).predict(),
            RecencyModel::new(self.history).predict(),
        ];

        let mut sum = [0.0; NUM_DIGITS];
        for probs in members.iter() {
            for i in 0..NUM_DIGITS {
                sum[i] += probs[i] + ALPHA;
            }
        }
        distribution::normalize(&sum)
    }
}
