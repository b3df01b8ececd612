pub mod analysis;
pub mod cache;
pub mod models;
pub mod report;
pub mod utils;

pub use cache::Predictor;
pub use models::mixer::{predict, EnsembleResult, RankedDigit};

/// The number of distinct symbols (the digits 0 to 9).
pub const NUM_DIGITS: usize = 10;

/// A probability for each of the ten digits.
pub type Probabilities = [f64; NUM_DIGITS];

/// The fallback distribution that is used when there is not enough data.
pub const UNIFORM: Probabilities = [0.1; NUM_DIGITS];

/// Stores the tunable parameters of the models and of the mixer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Context {
    /// The discount that is subtracted from every observed count.
    pub discount: f64,
    /// The per-step decay of the recency weighted model.
    pub decay: f64,
    /// The length of the cycle that the positional model conditions on.
    pub cycle_length: usize,
    /// The spread of the distribution around the extrapolated digit.
    pub momentum_spread: f64,
    /// The size of each side of the change-point window.
    pub regime_window: usize,
    /// The minimal mean shift that is reported as a change point.
    pub regime_threshold: f64,
    /// The number of recent digits used for the entropy weighting.
    pub entropy_window: usize,
    /// The amount by which the entropy weighting can boost a family.
    pub entropy_boost: f64,
    /// The temperature of the final distribution.
    pub temperature: f64,
    /// The confidence that a variable-order context must exceed.
    pub confidence_floor: f64,
    /// The length of the pattern that is matched against the history.
    pub pattern_len: usize,
    /// The minimal similarity of a window that votes for the next digit.
    pub pattern_min_similarity: f64,
    /// The number of ranked digits to report.
    pub top_k: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            discount: 0.75,
            decay: 0.95,
            cycle_length: 60,
            momentum_spread: 0.5,
            regime_window: 20,
            regime_threshold: 1.5,
            entropy_window: 20,
            entropy_boost: 0.3,
            temperature: 1.2,
            confidence_floor: 0.1,
            pattern_len: 4,
            pattern_min_similarity: 2.0,
            top_k: 5,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        assert!(temperature > 0.0, "The temperature must be positive");
        self.temperature = temperature;
        self
    }

    pub fn with_cycle_length(mut self, cycle_length: usize) -> Self {
        assert!(cycle_length > 0, "The cycle must not be empty");
        self.cycle_length = cycle_length;
        self
    }

    pub fn with_regime(mut self, window: usize, threshold: f64) -> Self {
        assert!(window > 0, "The regime window must not be empty");
        self.regime_window = window;
        self.regime_threshold = threshold;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.min(NUM_DIGITS);
        self
    }
}
