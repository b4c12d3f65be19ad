//! General-format float rendering.
//!
//! Mirrors the C `%g` conversion at a fixed precision: round to
//! [`PRECISION`] significant digits, drop trailing zeros, and switch to
//! exponent notation when the decimal exponent is below -4 or at least
//! [`PRECISION`].

use std::fmt::{self, Write};

/// Significant digits kept when rendering.
pub(crate) const PRECISION: usize = 6;

/// Writes `NaN`, `+Inf` or `-Inf` and returns true if `v` is not finite.
fn write_non_finite<W: Write>(out: &mut W, v: f32) -> Result<bool, fmt::Error> {
    if v.is_nan() {
        out.write_str("NaN")?;
    } else if v.is_infinite() {
        out.write_str(if v > 0.0 { "+Inf" } else { "-Inf" })?;
    } else {
        return Ok(false);
    }
    Ok(true)
}

/// Writes `v` in fixed notation with `precision` fractional digits.
pub(crate) fn write_fixed<W: Write>(out: &mut W, v: f32, precision: usize) -> fmt::Result {
    if write_non_finite(out, v)? {
        return Ok(());
    }
    write!(out, "{:.*}", precision, v)
}

/// Writes `v` in general format.
pub(crate) fn write_general<W: Write>(out: &mut W, v: f32) -> fmt::Result {
    if write_non_finite(out, v)? {
        return Ok(());
    }
    if v.is_sign_negative() {
        out.write_char('-')?;
    }
    let magnitude = v.abs();
    if magnitude == 0.0 {
        return out.write_char('0');
    }

    // `{:.5e}` yields `d.ddddde<exp>` already rounded to six significant digits.
    let sci = format!("{:.*e}", PRECISION - 1, magnitude);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return out.write_str(&sci);
    };
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');

    if exp < -4 || exp >= PRECISION as i32 {
        let (lead, rest) = digits.split_at(1);
        out.write_str(lead)?;
        if !rest.is_empty() {
            out.write_char('.')?;
            out.write_str(rest)?;
        }
        let sign = if exp < 0 { '-' } else { '+' };
        write!(out, "e{}{:02}", sign, exp.abs())
    } else if exp >= 0 {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.write_str(digits)?;
            for _ in digits.len()..int_len {
                out.write_char('0')?;
            }
            Ok(())
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            write!(out, "{}.{}", int_part, frac_part)
        }
    } else {
        out.write_str("0.")?;
        for _ in 0..(-exp - 1) {
            out.write_char('0')?;
        }
        out.write_str(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general(v: f32) -> String {
        let mut s = String::new();
        write_general(&mut s, v).unwrap();
        s
    }

    #[test]
    fn test_integers() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(1.0), "1");
        assert_eq!(general(-3.0), "-3");
        assert_eq!(general(100000.0), "100000");
        assert_eq!(general(123456.0), "123456");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(general(0.5), "0.5");
        assert_eq!(general(-0.25), "-0.25");
        assert_eq!(general(1.5), "1.5");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(std::f32::consts::FRAC_1_SQRT_2), "0.707107");
        assert_eq!(general(std::f32::consts::PI), "3.14159");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(general(1e6), "1e+06");
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(1e-5), "1e-05");
        assert_eq!(general(-2.5e-7), "-2.5e-07");
        assert_eq!(general(3.0e38), "3e+38");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(general(999999.9), "1e+06");
    }

    #[test]
    fn test_fixed() {
        let fixed = |v: f32| {
            let mut s = String::new();
            write_fixed(&mut s, v, 6).unwrap();
            s
        };
        assert_eq!(fixed(1.5), "1.500000");
        assert_eq!(fixed(-0.0), "-0.000000");
        assert_eq!(fixed(f32::INFINITY), "+Inf");
        assert_eq!(fixed(f32::NEG_INFINITY), "-Inf");
        assert_eq!(fixed(f32::NAN), "NaN");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(f32::NAN), "NaN");
        assert_eq!(general(f32::INFINITY), "+Inf");
        assert_eq!(general(f32::NEG_INFINITY), "-Inf");
    }
}
