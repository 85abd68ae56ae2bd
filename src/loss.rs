//! Error functions scoring a candidate line
//!
//! An error function reduces the residuals of one candidate line to a single scalar which the
//! optimizer tries to push down. Any closure or function with the signature
//! `Fn(&[Residual<F>]) -> F` can be used.

use crate::{Float, Residual};

/// Reduce a sequence of residuals to a scalar error
pub trait ErrorFunction<F: Float> {
    fn error(&self, residuals: &[Residual<F>]) -> F;
}

impl<F: Float, T> ErrorFunction<F> for T
where
    T: Fn(&[Residual<F>]) -> F,
{
    fn error(&self, residuals: &[Residual<F>]) -> F {
        self(residuals)
    }
}

/// Sum of squared differences `Σ (true_y - predicted_y)^2`
///
/// This is the default error of [`fit`](crate::fit). It is zero for an empty sequence.
pub fn square_error<F: Float>(residuals: &[Residual<F>]) -> F {
    residuals.iter().map(|r| r.diff() * r.diff()).sum()
}

/// Sum of absolute differences `Σ |true_y - predicted_y|`
pub fn absolute_error<F: Float>(residuals: &[Residual<F>]) -> F {
    residuals
        .iter()
        .map(|r| num_traits::Float::abs(r.diff()))
        .sum()
}
