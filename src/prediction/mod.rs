//! Prediction module: replays a trained tree against test records.

pub mod predictor;

pub use predictor::{classify, Prediction, Predictor};
