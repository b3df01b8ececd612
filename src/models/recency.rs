//! Weights the transitions out of the last digit by how recently they
//! occurred.

use super::model::{Family, History, Model};
use crate::utils::thresholds::MIN_MODEL_LEN;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

pub struct RecencyModel<'a> {
    history: &'a History<'a>,
}

impl<'a> RecencyModel<'a> {
    /// Returns the decayed weight of every digit that followed an earlier
    /// occurrence of the last digit, and the sum of the weights.
    pub fn weights(&self) -> (Probabilities, f64) {
        let data = self.history.data();
        let mut weights = [0.0; NUM_DIGITS];
        let mut total = 0.0;
        if data.len() < 2 {
            return (weights, total);
        }

        let decay = self.history.ctx().decay;
        let last = data[data.len() - 1];
        let newest = data.len() - 2;
        for i in (0..=newest).rev() {
            if data[i] == last {
                let weight = decay.powi((newest - i) as i32);
                weights[data[i + 1] as usize] += weight;
                total += weight;
            }
        }
        (weights, total)
    }
}

impl<'a> Model<'a> for RecencyModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Recency-Weighted"
    }

    fn family(&self) -> Family {
        Family::Frequency
    }

    fn predict(&self) -> Probabilities {
        if self.history.len() < MIN_MODEL_LEN {
            return UNIFORM;
        }
        let (mut weights, total) = self.weights();
        if total <= 0.0 {
            return UNIFORM;
        }
        for w in weights.iter_mut() {
            *w /= total;
        }
        weights
    }
}
