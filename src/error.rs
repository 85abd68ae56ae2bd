//! Error types in linefit
//!
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// An error when configuring the line search
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("step size should be positive and finite, but is {0}")]
    InvalidStepSize(f32),
    #[error("initial slope should be finite, but is {0}")]
    InvalidInitialSlope(f32),
    #[error("initial intercept should be finite, but is {0}")]
    InvalidInitialIntercept(f32),
}
