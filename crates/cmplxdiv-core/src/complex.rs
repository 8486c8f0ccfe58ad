use std::fmt;
use std::ops::Div;

use crate::oracle::{DivisionOracle, Libgcc};

/// A double-precision complex value `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Neither part infinite and at least one part NaN.
    pub fn is_cnan(&self) -> bool {
        !self.re.is_infinite() && !self.im.is_infinite() && (self.re.is_nan() || self.im.is_nan())
    }

    /// At least one part infinite, regardless of the other.
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Equal to `0+0i` under IEEE comparison, so signed zeros count.
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        Libgcc.divide(self, rhs)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}
