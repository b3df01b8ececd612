//! Conditions the prediction on the position of the next digit within a fixed
//! cycle.

use super::model::{Family, History, Model};
use crate::utils::distribution;
use crate::{Probabilities, NUM_DIGITS, UNIFORM};

pub struct PositionalModel<'a> {
    history: &'a History<'a>,
}

impl<'a> PositionalModel<'a> {
    /// Count the digits that follow each index that has the same position in
    /// the cycle as the end of the sequence.
    pub fn counts(&self) -> [u32; NUM_DIGITS] {
        let data = self.history.data();
        let cycle = self.history.ctx().cycle_length;
        let mut counts = [0; NUM_DIGITS];
        if data.len() < 2 {
            return counts;
        }
        let position = data.len() % cycle;
        for i in (position..data.len() - 1).step_by(cycle) {
            counts[data[i + 1] as usize] += 1;
        }
        counts
    }
}

impl<'a> Model<'a> for PositionalModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Positional Cycles"
    }

    fn family(&self) -> Family {
        Family::Frequency
    }

    fn predict(&self) -> Probabilities {
        if self.history.len() < self.history.ctx().cycle_length {
            return UNIFORM;
        }
        distribution::from_counts(&self.counts())
    }
}
