//! Reference table generator for complex division.
//!
//! Enumerates a fixed grid of sample values, divides every numerator by every
//! denominator with a trusted oracle, and writes the results as Go test data.

pub mod complex;
pub mod emit;
pub mod error;
pub mod format;
pub mod oracle;
pub mod samples;

pub use complex::Complex;
pub use emit::{Emitter, OutputSettings, TestCase};
pub use error::{GenError, GenResult};
pub use format::{format_g, token};
pub use oracle::{reference_quotient, DivisionOracle, Libgcc};
pub use samples::{operands, SampleGrid, SAMPLES};
