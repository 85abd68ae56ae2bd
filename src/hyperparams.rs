#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Float, ParamGuard};

/// A verified hyper-parameter set ready for training a [`LinearRegression`](crate::LinearRegression)
///
/// See [`DescentParams`](crate::DescentParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct DescentValidParams<F> {
    initial_m: F,
    initial_b: F,
    step_size: F,
    iterations: usize,
}

impl<F: Float> DescentValidParams<F> {
    pub fn initial_m(&self) -> F {
        self.initial_m
    }

    pub fn initial_b(&self) -> F {
        self.initial_b
    }

    pub fn step_size(&self) -> F {
        self.step_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// A hyper-parameter set for the finite-difference line search
///
/// Each iteration probes the error at `(m + step_size, b)` and `(m, b + step_size)` and moves
/// every parameter by exactly `step_size`, upwards if its probe lowered the error and downwards
/// otherwise. There is no stopping criterion, so the parameters keep oscillating around the
/// optimum until the iteration budget is spent.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [initial_m](Self::initial_m) | `-3.0` | Slope the search starts from | finite |
/// | [initial_b](Self::initial_b) | `0.0` | Intercept the search starts from | finite |
/// | [step_size](Self::step_size) | `0.01` | Probe offset and update step | `(0, inf)` |
/// | [iterations](Self::iterations) | `10000` | Number of update steps | `[0, inf)` |
///
/// # Errors
///
/// Returns [`InvalidStepSize`](Error::InvalidStepSize) if the step size is not positive and
/// finite.
///
/// Returns [`InvalidInitialSlope`](Error::InvalidInitialSlope) or
/// [`InvalidInitialIntercept`](Error::InvalidInitialIntercept) if a starting value is not finite.
///
/// # Example
///
/// ```rust
/// use linefit::{square_error, DescentParams, LinearRegression, ParamGuard, Point};
///
/// let points: Vec<Point<f64>> = vec![Point::new(0., 1.), Point::new(1., 3.), Point::new(2., 5.)];
///
/// let params = DescentParams::new().step_size(0.005).iterations(20_000);
///
/// // verify the parameter set up front
/// let checked = params.check_ref()?;
/// assert_eq!(checked.iterations(), 20_000);
///
/// // or let the regression verify it on construction
/// let regression = LinearRegression::with_params(&points, square_error, params)?;
/// let (line, _err) = regression.train();
/// assert!((line.m() - 2.).abs() < 0.05);
/// # Ok::<(), linefit::Error>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct DescentParams<F>(pub(crate) DescentValidParams<F>);

impl<F: Float> Default for DescentParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> DescentParams<F> {
    /// Create default hyperparameters
    pub fn new() -> Self {
        Self(DescentValidParams {
            initial_m: F::cast(-3.0),
            initial_b: F::zero(),
            step_size: F::cast(0.01),
            iterations: 10_000,
        })
    }

    /// Set the slope the search starts from.
    ///
    /// Defaults to `-3.0` if not set
    pub fn initial_m(mut self, initial_m: F) -> Self {
        self.0.initial_m = initial_m;
        self
    }

    /// Set the intercept the search starts from.
    ///
    /// Defaults to `0.0` if not set
    pub fn initial_b(mut self, initial_b: F) -> Self {
        self.0.initial_b = initial_b;
        self
    }

    /// Set the probe offset, which is also the size of every update.
    ///
    /// Defaults to `0.01` if not set
    ///
    /// `step_size` must be positive and finite
    pub fn step_size(mut self, step_size: F) -> Self {
        self.0.step_size = step_size;
        self
    }

    /// Set the number of update steps.
    ///
    /// Defaults to `10000` if not set. With `0` the starting line is returned as is.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.0.iterations = iterations;
        self
    }
}

impl<F: Float> ParamGuard for DescentParams<F> {
    type Checked = DescentValidParams<F>;
    type Error = Error;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let step_size = self.0.step_size;
        if !step_size.is_finite() || step_size <= F::zero() {
            Err(Error::InvalidStepSize(step_size.to_f32().unwrap_or(f32::NAN)))
        } else if !self.0.initial_m.is_finite() {
            Err(Error::InvalidInitialSlope(
                self.0.initial_m.to_f32().unwrap_or(f32::NAN),
            ))
        } else if !self.0.initial_b.is_finite() {
            Err(Error::InvalidInitialIntercept(
                self.0.initial_b.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = DescentParams::<f64>::default().check().unwrap();
        assert_eq!(params.initial_m(), -3.0);
        assert_eq!(params.initial_b(), 0.0);
        assert_eq!(params.step_size(), 0.01);
        assert_eq!(params.iterations(), 10_000);
    }

    #[test]
    fn setters() {
        let params = DescentParams::new()
            .initial_m(1.0f32)
            .initial_b(2.0)
            .step_size(0.5)
            .iterations(3)
            .check()
            .unwrap();
        assert_eq!(params.initial_m(), 1.0);
        assert_eq!(params.initial_b(), 2.0);
        assert_eq!(params.step_size(), 0.5);
        assert_eq!(params.iterations(), 3);
    }

    #[test]
    fn zero_iterations_are_valid() {
        assert!(DescentParams::<f64>::new().iterations(0).check().is_ok());
    }

    #[test]
    fn invalid_step_size() {
        let res = DescentParams::new().step_size(0.0f64).check();
        assert_eq!(res, Err(Error::InvalidStepSize(0.0)));

        let res = DescentParams::new().step_size(-0.1f64).check_ref().cloned();
        assert!(matches!(res, Err(Error::InvalidStepSize(_))));

        let res = DescentParams::new().step_size(f64::INFINITY).check();
        assert!(matches!(res, Err(Error::InvalidStepSize(_))));
    }

    #[test]
    fn invalid_starting_point() {
        let res = DescentParams::new().initial_m(f64::NAN).check();
        assert!(matches!(res, Err(Error::InvalidInitialSlope(_))));

        let res = DescentParams::new().initial_b(f32::NEG_INFINITY).check();
        assert_eq!(
            res,
            Err(Error::InvalidInitialIntercept(f32::NEG_INFINITY))
        );
    }
}
