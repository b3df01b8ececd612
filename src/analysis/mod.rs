//! Diagnostics that describe the sequence rather than predict the next digit.

pub mod changepoint;
pub mod entropy;
pub mod stats;
