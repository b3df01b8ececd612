//! Selects the longest context that has a confident prediction.

use super::markov::{ContextKey, MAX_ORDER};
use super::model::{Family, History, Model};
use crate::utils::distribution::argmax;
use crate::utils::thresholds::MIN_MODEL_LEN;
use crate::{Probabilities, UNIFORM};

/// The context that was selected, and its prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub order: usize,
    pub context: ContextKey,
    pub probabilities: Probabilities,
    /// The highest probability in the row.
    pub confidence: f64,
}

pub struct VariableOrderModel<'a> {
    history: &'a History<'a>,
}

impl<'a> VariableOrderModel<'a> {
    /// Scan from the highest order down and return the first context whose
    /// confidence exceeds the floor. Order one is accepted unconditionally.
    /// Returns None if there is not enough data, or if the last digit was
    /// never followed by anything.
    pub fn select(&self) -> Option<Selection> {
        let data = self.history.data();
        if data.len() < MIN_MODEL_LEN {
            return None;
        }
        let floor = self.history.ctx().confidence_floor;

        for order in (1..=MAX_ORDER).rev() {
            let table = match self.history.tables().order(order) {
                Some(table) => table,
                None => continue,
            };
            let context = ContextKey::suffix(data, order)?;
            if let Some(probs) = table.probabilities(&context) {
                let (_, confidence) = argmax(probs);
                if confidence > floor || order == 1 {
                    return Some(Selection {
                        order,
                        context,
                        probabilities: *probs,
                        confidence,
                    });
                }
            }
        }
        None
    }
}

impl<'a> Model<'a> for VariableOrderModel<'a> {
    fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    fn name(&self) -> &'static str {
        "Variable Order Markov"
    }

    fn family(&self) -> Family {
        Family::Pattern
    }

    fn predict(&self) -> Probabilities {
        self.select().map(|s| s.probabilities).unwrap_or(UNIFORM)
    }
}
