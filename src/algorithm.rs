use log::{debug, trace};

use crate::error::Result;
use crate::hyperparams::{DescentParams, DescentValidParams};
use crate::loss::ErrorFunction;
use crate::{Float, Line, ParamGuard, Point, Residual};

/// Iterations between two progress records on the `trace` level
const TRACE_INTERVAL: usize = 1000;

/// Fit a line through `points` with the default hyper-parameters
///
/// Shorthand for `LinearRegression::new(points, error_fn).train()`.
pub fn fit<F: Float, E: ErrorFunction<F>>(points: &[Point<F>], error_fn: E) -> (Line<F>, F) {
    LinearRegression::new(points, error_fn).train()
}

/// Line fitting by finite-difference coordinate descent
///
/// The regression borrows a dataset and owns an error function, both fixed for its lifetime.
/// [`train`](Self::train) starts from the configured line and, for a fixed number of iterations,
/// probes how the error changes when the slope or the intercept grows by the step size. Every
/// parameter then moves by exactly one step: upwards if its probe lowered the error, downwards
/// otherwise. Both probes are taken from the same line, so the intercept probe never sees the
/// updated slope.
///
/// This is a plain hill climb with a fixed step, not a gradient descent. It always spends the
/// whole iteration budget and ends up oscillating by one step around the optimum.
///
/// ## Example
///
/// ```rust
/// use linefit::{square_error, LinearRegression, Point};
///
/// let points: Vec<Point<f64>> = vec![Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.)];
/// let (line, err) = LinearRegression::new(&points, square_error).train();
///
/// assert!((line.m() - 1.).abs() < 0.05);
/// assert!(err < 0.01);
/// ```
pub struct LinearRegression<'a, F, E> {
    data: &'a [Point<F>],
    error_fn: E,
    params: DescentValidParams<F>,
}

impl<'a, F: Float, E: ErrorFunction<F>> LinearRegression<'a, F, E> {
    /// Create a regression over `data` with the default hyper-parameters
    pub fn new(data: &'a [Point<F>], error_fn: E) -> Self {
        LinearRegression {
            data,
            error_fn,
            params: DescentParams::default().0,
        }
    }

    /// Create a regression over `data` after verifying `params`
    pub fn with_params(data: &'a [Point<F>], error_fn: E, params: DescentParams<F>) -> Result<Self> {
        Ok(LinearRegression {
            data,
            error_fn,
            params: params.check()?,
        })
    }

    /// The dataset this regression is trained on
    pub fn data(&self) -> &[Point<F>] {
        self.data
    }

    /// Verified hyper-parameters of this regression
    pub fn params(&self) -> &DescentValidParams<F> {
        &self.params
    }

    /// Error of the line with slope `m` and intercept `b` over the dataset
    pub fn line_error(&self, m: F, b: F) -> F {
        let line = Line::new(m, b);
        let residuals = self
            .data
            .iter()
            .map(|point| Residual::new(point.y, line.evaluate(point.x)))
            .collect::<Vec<_>>();

        self.error_fn.error(&residuals)
    }

    /// Run the full iteration budget and return the final line with its error
    ///
    /// Training is deterministic: calling it again yields the same line and error.
    pub fn train(&self) -> (Line<F>, F) {
        let eps = self.params.step_size();
        let mut m = self.params.initial_m();
        let mut b = self.params.initial_b();

        debug!(
            "fitting line to {} points, start m={} b={}, step {}, {} iterations",
            self.data.len(),
            m,
            b,
            eps,
            self.params.iterations()
        );

        for iteration in 1..=self.params.iterations() {
            let err = self.line_error(m, b);
            let m_probe = self.line_error(m + eps, b);
            let b_probe = self.line_error(m, b + eps);

            m = step(err, m_probe, m, eps);
            b = step(err, b_probe, b, eps);

            if iteration % TRACE_INTERVAL == 0 {
                trace!("iteration {}: m={} b={} error={}", iteration, m, b, err);
            }
        }

        let line = Line::new(m, b);
        let err = self.line_error(m, b);
        debug!("fitted {} with error {}", line, err);

        (line, err)
    }
}

/// Move `value` by one step, upwards if the probe lowered the error
///
/// Ties and NaN comparisons move downwards.
fn step<F: Float>(current_err: F, probe_err: F, value: F, step_size: F) -> F {
    if current_err - probe_err > F::zero() {
        value + step_size
    } else {
        value - step_size
    }
}
