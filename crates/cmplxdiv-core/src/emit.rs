//! Go source emission for the reference table.

use std::io::Write;

use serde::Deserialize;
use tracing::info;

use crate::complex::Complex;
use crate::error::{GenError, GenResult};
use crate::format::token;
use crate::oracle::{reference_quotient, DivisionOracle, Libgcc};
use crate::samples::{operands, SampleGrid};

/// Header fields of the generated file. None of them change the test data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Name written in the provenance comment.
    pub tool_name: String,
    /// Go package the table is declared in.
    pub package: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            tool_name: "cmplxdivide".into(),
            package: "main".into(),
        }
    }
}

impl OutputSettings {
    /// Reject values that would break the generated file.
    pub fn validate(&self) -> GenResult<()> {
        if self.tool_name.contains(['\n', '\r']) {
            return Err(GenError::Config(format!(
                "tool_name must be a single line: {:?}",
                self.tool_name
            )));
        }
        let mut chars = self.package.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c == '_' || c.is_alphabetic());
        if !valid_start || !chars.all(|c| c == '_' || c.is_alphanumeric()) {
            return Err(GenError::Config(format!(
                "package is not a Go identifier: {:?}",
                self.package
            )));
        }
        Ok(())
    }
}

/// One row of the table.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub index: [usize; 4],
    pub numerator: Complex,
    pub denominator: Complex,
    pub quotient: Complex,
    /// The complex-NaN over zero override replaced the oracle's result.
    pub overridden: bool,
}

pub struct Emitter<O = Libgcc> {
    settings: OutputSettings,
    oracle: O,
}

impl Emitter<Libgcc> {
    pub fn new(settings: OutputSettings) -> Self {
        Self::with_oracle(settings, Libgcc)
    }
}

impl<O: DivisionOracle> Emitter<O> {
    pub fn with_oracle(settings: OutputSettings, oracle: O) -> Self {
        Self { settings, oracle }
    }

    pub fn settings(&self) -> &OutputSettings {
        &self.settings
    }

    /// Compute every test case in table order.
    pub fn cases(&self) -> impl Iterator<Item = TestCase> + '_ {
        SampleGrid::new().map(move |index| {
            let (numerator, denominator) = operands(index);
            TestCase {
                index,
                numerator,
                denominator,
                quotient: reference_quotient(&self.oracle, numerator, denominator),
                overridden: numerator.is_cnan() && denominator.is_zero(),
            }
        })
    }

    /// Write the complete Go file. Returns the number of cases written.
    pub fn write_table<W: Write>(&self, out: &mut W) -> GenResult<usize> {
        self.write_header(out)?;

        let mut written = 0;
        let mut overridden = 0;
        for case in self.cases() {
            self.write_case(out, &case)?;
            written += 1;
            if case.overridden {
                overridden += 1;
            }
        }

        writeln!(out, "}}")?;
        out.flush()?;

        info!(cases = written, overridden, "table written");
        Ok(written)
    }

    fn write_header<W: Write>(&self, out: &mut W) -> GenResult<()> {
        writeln!(out, "// skip")?;
        writeln!(out, "// # generated by {}", self.settings.tool_name)?;
        writeln!(out)?;
        writeln!(out, "package {}", self.settings.package)?;
        writeln!(out, "var tests = []Test{{")?;
        Ok(())
    }

    pub fn write_case<W: Write>(&self, out: &mut W, case: &TestCase) -> GenResult<()> {
        writeln!(out, "\t{},", render_case(case))?;
        Ok(())
    }
}

/// `Test{complex(n), complex(d), complex(q)}` for one case.
pub fn render_case(case: &TestCase) -> String {
    format!(
        "Test{{{}, {}, {}}}",
        render_complex(case.numerator),
        render_complex(case.denominator),
        render_complex(case.quotient)
    )
}

fn render_complex(c: Complex) -> String {
    format!("complex({}, {})", token(c.re), token(c.im))
}
