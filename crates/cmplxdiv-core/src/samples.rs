//! The sample grid and its enumeration order.

use crate::complex::Complex;

/// Values used for every real and imaginary component.
pub const SAMPLES: [f64; 7] = [
    0.0,
    1.0,
    -1.0,
    2.0,
    f64::NAN,
    f64::INFINITY,
    f64::NEG_INFINITY,
];

/// Iterates every `[i, j, k, l]` index tuple into [`SAMPLES`] in row-major
/// order: `l` varies fastest, `i` slowest.
///
/// Consumers of the generated table depend on this order.
#[derive(Debug, Clone, Default)]
pub struct SampleGrid {
    next: usize,
}

impl SampleGrid {
    pub const LEN: usize = SAMPLES.len().pow(4);

    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for SampleGrid {
    type Item = [usize; 4];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= Self::LEN {
            return None;
        }
        let n = SAMPLES.len();
        let pos = self.next;
        self.next += 1;
        Some([pos / (n * n * n), pos / (n * n) % n, pos / n % n, pos % n])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Self::LEN - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SampleGrid {}

/// Build the numerator `f[i] + f[j]·i` and denominator `f[k] + f[l]·i`.
pub fn operands(idx: [usize; 4]) -> (Complex, Complex) {
    let [i, j, k, l] = idx;
    (
        Complex::new(SAMPLES[i], SAMPLES[j]),
        Complex::new(SAMPLES[k], SAMPLES[l]),
    )
}
