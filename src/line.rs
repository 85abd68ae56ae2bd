use std::fmt;

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::{Float, Point};

/// A straight line `y = b + m * x`
///
/// Lines are immutable. Every candidate parameter pair visited during training is evaluated
/// through a fresh `Line`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<F> {
    m: F,
    b: F,
}

impl<F: Float> Line<F> {
    /// Create a line from its slope `m` and intercept `b`
    pub fn new(m: F, b: F) -> Self {
        Line { m, b }
    }

    /// Slope
    pub fn m(&self) -> F {
        self.m
    }

    /// Intercept
    pub fn b(&self) -> F {
        self.b
    }

    /// Value of the line at `x`
    pub fn evaluate(&self, x: F) -> F {
        self.b + self.m * x
    }

    /// Evaluate the line at every entry of `x`
    pub fn predict<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        x.mapv(|x| self.evaluate(x))
    }

    /// Table with one row per point and the columns `[predicted, actual]`
    ///
    /// Rows keep the order of `points`.
    pub fn compare(&self, points: &[Point<F>]) -> Array2<F> {
        let mut table = Array2::zeros((points.len(), 2));
        for (mut row, point) in table.outer_iter_mut().zip(points) {
            row[0] = self.evaluate(point.x);
            row[1] = point.y;
        }
        table
    }
}

impl<F: Float> fmt::Display for Line<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line(m={}, b={})", self.m, self.b)
    }
}
