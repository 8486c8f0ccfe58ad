//! C `%g` rendering of doubles for the generated Go source.

/// Significant digits `%g` uses when no precision is given.
const PRECISION: i32 = 6;

/// Token written in place of `-0`, which Go would read as plain zero.
pub const NEGZERO: &str = "negzero";

/// Render `v` the way C `printf("%g", v)` does.
///
/// NaN always renders as `nan`; its sign bit is not meaningful to the consumer.
pub fn format_g(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let sign = if v.is_sign_negative() { "-" } else { "" };
    let mag = v.abs();

    // The exponent is the one %e would print after rounding to PRECISION digits.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, mag);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..PRECISION).contains(&exp) {
        let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, mag);
        format!("{sign}{}", strip_zeros(&fixed))
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{}e{exp_sign}{:02}", strip_zeros(mantissa), exp.abs())
    }
}

/// Format one table component: `%g`, with `-0` spelled `negzero`.
pub fn token(v: f64) -> String {
    let s = format_g(v);
    if s == "-0" {
        return NEGZERO.into();
    }
    s
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
