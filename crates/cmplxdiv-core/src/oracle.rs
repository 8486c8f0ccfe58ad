//! Reference complex division and the complex-NaN override.

use std::hint::black_box;

use tracing::debug;

use crate::complex::Complex;

/// A complex-division routine trusted as ground truth.
pub trait DivisionOracle {
    fn divide(&self, n: Complex, d: Complex) -> Complex;
}

/// The runtime division routine GCC links for `double complex` (`__divdc3`).
///
/// Smith's algorithm followed by the Annex G recovery of infinities and zeros
/// that the scaled formula computes as NaN+NaN·i.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libgcc;

impl DivisionOracle for Libgcc {
    fn divide(&self, num: Complex, den: Complex) -> Complex {
        let (mut a, mut b) = (num.re, num.im);
        let (mut c, mut d) = (den.re, den.im);

        let (mut x, mut y) = if c.abs() < d.abs() {
            let ratio = c / d;
            let denom = c * ratio + d;
            ((a * ratio + b) / denom, (b * ratio - a) / denom)
        } else {
            let ratio = d / c;
            let denom = d * ratio + c;
            ((b * ratio + a) / denom, (b - a * ratio) / denom)
        };

        // Only nonzero/zero, infinite/finite and finite/infinite land here.
        if x.is_nan() && y.is_nan() {
            if c == 0.0 && d == 0.0 && (!a.is_nan() || !b.is_nan()) {
                x = f64::INFINITY.copysign(c) * a;
                y = f64::INFINITY.copysign(c) * b;
            } else if (a.is_infinite() || b.is_infinite()) && c.is_finite() && d.is_finite() {
                a = unit_if_infinite(a);
                b = unit_if_infinite(b);
                x = f64::INFINITY * (a * c + b * d);
                y = f64::INFINITY * (b * c - a * d);
            } else if (c.is_infinite() || d.is_infinite()) && a.is_finite() && b.is_finite() {
                c = unit_if_infinite(c);
                d = unit_if_infinite(d);
                x = 0.0 * (a * c + b * d);
                y = 0.0 * (b * c - a * d);
            }
        }

        Complex::new(x, y)
    }
}

/// `copysign(isinf(v) ? 1 : 0, v)`
fn unit_if_infinite(v: f64) -> f64 {
    let unit = if v.is_infinite() { 1.0 } else { 0.0 };
    f64::copysign(unit, v)
}

/// Divide `n` by `d` with `oracle`, forcing any complex-NaN numerator over an
/// exact zero to the oracle's own `(NaN+NaN·i)/0` result.
///
/// The oracle folds `(1+NaN·i)/0` into a complex infinity while it keeps
/// `(NaN+NaN·i)/0` a complex NaN; both numerators are complex NaNs, so the
/// table records the NaN result for all of them.
pub fn reference_quotient<O: DivisionOracle + ?Sized>(oracle: &O, n: Complex, d: Complex) -> Complex {
    let q = oracle.divide(n, d);
    if n.is_cnan() && d.is_zero() {
        let overridden = oracle.divide(Complex::new(f64::NAN, f64::NAN), runtime_zero());
        debug!(numerator = %n, raw = %q, quotient = %overridden, "complex NaN over zero overridden");
        return overridden;
    }
    q
}

/// `0+0i` the optimizer cannot see through.
fn runtime_zero() -> Complex {
    black_box(Complex::new(0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn div(n: Complex, d: Complex) -> Complex {
        Libgcc.divide(n, d)
    }

    /// Returns a fixed sentinel so tests can tell oracle output from override output.
    struct Sentinel;

    impl DivisionOracle for Sentinel {
        fn divide(&self, n: Complex, _d: Complex) -> Complex {
            if n.re.is_nan() && n.im.is_nan() {
                c(-7.0, -7.0)
            } else {
                c(42.0, 42.0)
            }
        }
    }

    #[test]
    fn test_finite_division() {
        let q = div(c(1.0, 0.0), c(2.0, 0.0));
        assert_eq!(q, c(0.5, 0.0));

        let q = div(c(0.0, 1.0), c(0.0, 1.0));
        assert_eq!(q, c(1.0, 0.0));

        let q = div(c(2.0, 2.0), c(1.0, 1.0));
        assert_eq!(q, c(2.0, 0.0));
    }

    #[test]
    fn test_negative_divisor_yields_negative_zero() {
        let q = div(c(1.0, 0.0), c(-1.0, 0.0));
        assert_eq!(q.re, -1.0);
        assert_eq!(q.im, 0.0);
        assert!(q.im.is_sign_negative());
    }

    #[test]
    fn test_nonzero_over_zero_is_complex_infinity() {
        let q = div(c(1.0, 0.0), c(0.0, 0.0));
        assert_eq!(q.re, INF);
        assert!(q.im.is_nan());

        let q = div(c(-1.0, 2.0), c(0.0, 0.0));
        assert_eq!(q.re, -INF);
        assert_eq!(q.im, INF);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let q = div(c(0.0, 0.0), c(0.0, 0.0));
        assert!(q.re.is_nan() && q.im.is_nan());
    }

    #[test]
    fn test_partial_nan_over_zero_quirk() {
        // The raw routine turns (1+NaN·i)/0 into Inf+NaN·i.
        let q = div(c(1.0, NAN), c(0.0, 0.0));
        assert_eq!(q.re, INF);
        assert!(q.im.is_nan());

        let q = div(c(NAN, NAN), c(0.0, 0.0));
        assert!(q.re.is_nan() && q.im.is_nan());
    }

    #[test]
    fn test_infinite_over_finite() {
        let q = div(c(INF, INF), c(1.0, 1.0));
        assert_eq!(q.re, INF);
        assert!(q.im.is_nan() || q.im == 0.0);

        let q = div(c(INF, 0.0), c(1.0, 0.0));
        assert_eq!(q.re, INF);
    }

    #[test]
    fn test_finite_over_infinite_is_zero() {
        let q = div(c(1.0, 1.0), c(INF, INF));
        assert_eq!(q, c(0.0, 0.0));

        let q = div(c(1.0, 0.0), c(INF, 0.0));
        assert_eq!(q, c(0.0, 0.0));
    }

    #[test]
    fn test_override_applies_to_cnan_over_zero() {
        assert_eq!(reference_quotient(&Sentinel, c(1.0, NAN), c(0.0, 0.0)), c(-7.0, -7.0));
        assert_eq!(reference_quotient(&Sentinel, c(NAN, 2.0), c(-0.0, 0.0)), c(-7.0, -7.0));
    }

    #[test]
    fn test_override_skips_other_cases() {
        // complex infinity numerator
        assert_eq!(reference_quotient(&Sentinel, c(INF, NAN), c(0.0, 0.0)), c(42.0, 42.0));
        // nonzero denominator
        assert_eq!(reference_quotient(&Sentinel, c(1.0, NAN), c(1.0, 0.0)), c(42.0, 42.0));
        // denominator with a NaN part is not zero
        assert_eq!(reference_quotient(&Sentinel, c(1.0, NAN), c(0.0, NAN)), c(42.0, 42.0));
    }

    #[test]
    fn test_override_with_default_oracle() {
        let q = reference_quotient(&Libgcc, c(1.0, NAN), c(0.0, 0.0));
        assert!(q.re.is_nan() && q.im.is_nan());

        let q = reference_quotient(&Libgcc, c(1.0, 0.0), c(0.0, 0.0));
        assert_eq!(q.re, INF);
        assert!(q.im.is_nan());
    }
}
