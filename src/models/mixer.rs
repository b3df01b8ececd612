//! This module contains the implementation of the model mixer. Every model
//! has a fixed base weight. The weights are boosted by the entropy of the
//! recent digits, the predictions are averaged, and the mixture is flattened
//! by a temperature before it is ranked.

use super::bayesian::BayesianAverage;
use super::markov::MarkovModel;
use super::model::{Family, History, Model, ModelOutput};
use super::momentum::MomentumModel;
use super::pattern::PatternModel;
use super::positional::PositionalModel;
use super::recency::RecencyModel;
use super::smoothing::SmoothingModel;
use super::variable_order::{Selection, VariableOrderModel};
use crate::analysis::changepoint::{self, RegimeInfo};
use crate::analysis::entropy::{self, EntropyWeights};
use crate::analysis::stats::SequenceStats;
use crate::utils::distribution::{entropy_bits, max_entropy};
use crate::utils::thresholds::MIN_ENSEMBLE_LEN;
use crate::{Context, Probabilities, NUM_DIGITS};

/// A digit and its probability in percent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankedDigit {
    pub digit: u8,
    pub percentage: f64,
}

/// The combined prediction. The ensemble percentages sum to 100, while the
/// per-model probabilities in 'methods' sum to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleResult {
    /// The most likely digits, in descending order.
    pub top: Vec<RankedDigit>,
    /// The percentage of every digit.
    pub percentages: [f64; NUM_DIGITS],
    /// All of the models, sorted by their final weight.
    pub methods: Vec<ModelOutput>,
    /// 0 to 100, where 100 means a single certain digit.
    pub confidence: f64,
    /// The entropy of the final distribution in bits.
    pub entropy: f64,
    pub regime: RegimeInfo,
    pub entropy_info: EntropyWeights,
    /// The context that the variable-order model selected.
    pub selection: Option<Selection>,
    /// A smoothed consensus of a few models, for comparison.
    pub consensus: Probabilities,
    pub stats: SequenceStats,
}

impl EnsembleResult {
    /// Returns the most likely digit.
    pub fn best(&self) -> Option<RankedDigit> {
        self.top.first().copied()
    }
}

/// Scale the base weights by the entropy boost of their family and normalize
/// them to sum to one.
pub fn adjust_weights(methods: &mut [ModelOutput], info: &EntropyWeights, boost: f64) {
    for m in methods.iter_mut() {
        let factor = match m.family {
            Family::Pattern => 1.0 + info.pattern_weight * boost,
            Family::Frequency => 1.0 + info.frequency_weight * boost,
        };
        m.weight = m.base_weight * factor;
    }
    let total: f64 = methods.iter().map(|m| m.weight).sum();
    if total > 0.0 {
        for m in methods.iter_mut() {
            m.weight /= total;
        }
    }
}

/// Raise every entry to the power 1/T and rescale the result to sum to 100.
pub fn apply_temperature(probs: &Probabilities, temperature: f64) -> [f64; NUM_DIGITS] {
    let mut scaled = [0.0; NUM_DIGITS];
    for (s, p) in scaled.iter_mut().zip(probs.iter()) {
        *s = p.powf(1.0 / temperature);
    }
    let total: f64 = scaled.iter().sum();
    if total <= 0.0 {
        return [100.0 / NUM_DIGITS as f64; NUM_DIGITS];
    }
    for s in scaled.iter_mut() {
        *s = *s / total * 100.0;
    }
    scaled
}

/// Sort the digits by descending percentage and keep the first 'k'. Equal
/// percentages keep the lower digit first.
pub fn rank(percentages: &[f64; NUM_DIGITS], k: usize) -> Vec<RankedDigit> {
    let mut ranked: Vec<RankedDigit> = percentages
        .iter()
        .enumerate()
        .map(|(digit, p)| RankedDigit {
            digit: digit as u8,
            percentage: *p,
        })
        .collect();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    ranked.truncate(k);
    ranked
}

/// Combines all of the models that read from a single history.
pub struct Mixer<'a> {
    history: &'a History<'a>,
}

impl<'a> Mixer<'a> {
    pub fn new(history: &'a History<'a>) -> Self {
        Self { history }
    }

    /// Evaluate every model with its base weight.
    pub fn evaluate(&self) -> Vec<ModelOutput> {
        let h = self.history;
        vec![
            ModelOutput::evaluate(&MarkovModel::<1>::new(h), 0.15),
            ModelOutput::evaluate(&MarkovModel::<2>::new(h), 0.14),
            ModelOutput::evaluate(&MarkovModel::<3>::new(h), 0.12),
            ModelOutput::evaluate(&VariableOrderModel::new(h), 0.15),
            ModelOutput::evaluate(&SmoothingModel::new(h), 0.11),
            ModelOutput::evaluate(&RecencyModel::new(h), 0.10),
            ModelOutput::evaluate(&PatternModel::new(h), 0.10),
            ModelOutput::evaluate(&PositionalModel::new(h), 0.06),
            ModelOutput::evaluate(&MomentumModel::new(h), 0.07),
        ]
    }

    /// Mix the models. Returns None if there is not enough data.
    pub fn mix(&self) -> Option<EnsembleResult> {
        let data = self.history.data();
        let ctx = self.history.ctx();
        if data.len() < MIN_ENSEMBLE_LEN {
            log::debug!("Only {} digits, not mixing", data.len());
            return None;
        }

        let entropy_info = entropy::weigh(data, ctx);
        let regime = changepoint::detect(data, ctx);

        let mut methods = self.evaluate();
        adjust_weights(&mut methods, &entropy_info, ctx.entropy_boost);

        let mut combined = [0.0; NUM_DIGITS];
        for m in methods.iter() {
            for i in 0..NUM_DIGITS {
                combined[i] += m.probabilities[i] * m.weight;
            }
        }

        let percentages = apply_temperature(&combined, ctx.temperature);
        let top = rank(&percentages, ctx.top_k);

        let fractions: Vec<f64> = percentages.iter().map(|p| p / 100.0).collect();
        let entropy = entropy_bits(&fractions);
        let confidence = (1.0 - entropy / max_entropy()) * 100.0;

        methods.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        for m in methods.iter() {
            log::debug!("{:<24} weight {:.4}", m.name, m.weight);
        }

        let result = EnsembleResult {
            top,
            percentages,
            methods,
            confidence,
            entropy,
            regime,
            entropy_info,
            selection: VariableOrderModel::new(self.history).select(),
            consensus: BayesianAverage::new(self.history).predict(),
            stats: SequenceStats::from_data(data),
        };

        if let Some(best) = result.best() {
            log::info!(
                "Predicted {} ({:.1}%) with confidence {:.1}",
                best.digit,
                best.percentage,
                result.confidence
            );
        }
        Some(result)
    }
}

/// Predict the next digit of 'data'. Returns None if there are fewer digits
/// than the ensemble needs.
pub fn predict(data: &[u8], ctx: Context) -> Option<EnsembleResult> {
    let history = History::new(data, ctx);
    Mixer::new(&history).mix()
}

#[test]
fn test_base_weights_sum_to_one() {
    let data = [0u8; 30];
    let history = History::new(&data, Context::default());
    let methods = Mixer::new(&history).evaluate();
    let total: f64 = methods.iter().map(|m| m.base_weight).sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert_eq!(methods.len(), 9);
}
