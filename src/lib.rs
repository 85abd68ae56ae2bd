//!
//! `linefit` fits a straight line `y = b + m * x` to a set of 2-D points.
//!
//! ## The Big Picture
//!
//! The fit is a finite-difference coordinate descent: starting from a fixed line, each iteration
//! probes whether growing the slope or the intercept by a small step lowers the error, and moves
//! both parameters by exactly that step. The error is a pluggable function of the residuals, the
//! sum of squared differences being the default.
//!
//! There is no closed-form solution, adaptive step or convergence check. The search always runs
//! its full iteration budget and ends up oscillating one step around the optimum.
//!
//! ## Example
//!
//! ```rust
//! use linefit::{fit, square_error, Point};
//!
//! let points: Vec<Point<f64>> = vec![(0., 1.).into(), (1., 3.).into(), (2., 5.).into()];
//! let (line, err) = fit(&points, square_error);
//!
//! println!("{} with error {}", line, err);
//!
//! // predicted next to actual values, one row per point
//! let table = line.compare(&points);
//! assert_eq!(table.dim(), (3, 2));
//! ```

mod algorithm;
mod dataset;
pub mod error;
mod float;
mod hyperparams;
mod line;
pub mod loss;
mod param_guard;

pub use algorithm::{fit, LinearRegression};
pub use dataset::{Point, Residual};
pub use error::{Error, Result};
pub use float::Float;
pub use hyperparams::{DescentParams, DescentValidParams};
pub use line::Line;
pub use loss::{absolute_error, square_error, ErrorFunction};
pub use param_guard::ParamGuard;
