//! Samples and residuals
//!
//! A dataset is a plain slice of [`Point`]s supplied by the caller. While an error is evaluated,
//! every point is paired with the value a candidate line predicts for it, giving a [`Residual`].

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::Float;

/// A single observed sample
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point<F> {
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Point::new(x, y)
    }
}

/// Observed value next to the value predicted for it
///
/// Residuals only live for the duration of one error evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual<F> {
    pub true_y: F,
    pub predicted_y: F,
}

impl<F: Float> Residual<F> {
    pub fn new(true_y: F, predicted_y: F) -> Self {
        Residual {
            true_y,
            predicted_y,
        }
    }

    /// Signed difference `true_y - predicted_y`
    pub fn diff(&self) -> F {
        self.true_y - self.predicted_y
    }
}
