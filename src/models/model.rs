use super::markov::ContextTables;
use crate::{Context, Probabilities};

/// The mixer boosts each family of models according to the entropy of the
/// recent digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    /// Context and pattern matching models.
    Pattern,
    /// Frequency, recency and trend models.
    Frequency,
}

/// The sequence snapshot that all of the models read from, together with
/// the context tables that are shared between them. The digits must be in
/// the range 0..=9.
pub struct History<'a> {
    data: &'a [u8],
    tables: ContextTables,
    ctx: Context,
}

impl<'a> History<'a> {
    pub fn new(data: &'a [u8], ctx: Context) -> Self {
        debug_assert!(data.iter().all(|d| *d < 10), "Invalid digit");
        let tables = ContextTables::build(data);
        Self { data, tables, ctx }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn tables(&self) -> &ContextTables {
        &self.tables
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn last(&self) -> Option<u8> {
        self.data.last().copied()
    }
}

/// A trait that defines the interface for making predictions.
pub trait Model<'a> {
    /// Construct a new model that reads from 'history'.
    fn new(history: &'a History<'a>) -> Self;

    /// The name that the model is reported under.
    fn name(&self) -> &'static str;

    fn family(&self) -> Family;

    /// Return a distribution over the next digit. Models that don't have
    /// enough data return the uniform distribution.
    #[must_use]
    fn predict(&self) -> Probabilities;
}

/// The prediction of a single model, and its weight in the mixture.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelOutput {
    pub name: &'static str,
    pub family: Family,
    pub probabilities: Probabilities,
    /// The fixed weight of the model.
    pub base_weight: f64,
    /// The weight after the entropy adjustment and normalization.
    pub weight: f64,
}

impl ModelOutput {
    /// Run 'model' and record its prediction.
    pub fn evaluate<'a, M: Model<'a>>(model: &M, base_weight: f64) -> Self {
        let probabilities = model.predict();
        log::debug!("{}: {:.3?}", model.name(), probabilities);
        Self {
            name: model.name(),
            family: model.family(),
            probabilities,
            base_weight,
            weight: base_weight,
        }
    }

    /// The highest probability in the prediction.
    pub fn confidence(&self) -> f64 {
        self.probabilities.iter().cloned().fold(0.0, f64::max)
    }
}
