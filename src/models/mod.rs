//! This module contains models that predict the next digit in a sequence of
//! digits, and the mixer that combines them.

pub mod bayesian;
pub mod markov;
pub mod mixer;
pub mod model;
pub mod momentum;
pub mod pattern;
pub mod positional;
pub mod recency;
pub mod smoothing;
pub mod variable_order;

pub use model::{Family, History, Model, ModelOutput};
