// ============================================================================
// Output Formatting
// C-style decimal exponential (%24.16e) and hexadecimal float (%A) text
// ============================================================================

use crate::domain::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Textual representation used when printing result vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputFormat {
    /// `%24.16e`: 17 significant decimal digits, right-aligned in 24 columns
    Decimal,
    /// `%A`: exact hexadecimal significand and binary exponent
    Hex,
}

impl OutputFormat {
    /// Render one vector as `(a, b, c)`.
    pub fn render(self, v: Vector3<f64>) -> String {
        match self {
            OutputFormat::Decimal => format!(
                "({}, {}, {})",
                DecimalExp(v.x),
                DecimalExp(v.y),
                DecimalExp(v.z)
            ),
            OutputFormat::Hex => {
                format!("({}, {}, {})", HexFloat(v.x), HexFloat(v.y), HexFloat(v.z))
            },
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Decimal => write!(f, "decimal"),
            OutputFormat::Hex => write!(f, "hex"),
        }
    }
}

/// Displays an f64 like C's `%24.16e`.
///
/// The exponent always carries a sign and at least two digits.
#[derive(Debug, Clone, Copy)]
pub struct DecimalExp(pub f64);

impl fmt::Display for DecimalExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        let body = if x.is_nan() {
            "nan".to_string()
        } else if x.is_infinite() {
            (if x > 0.0 { "inf" } else { "-inf" }).to_string()
        } else {
            let raw = format!("{:.16e}", x);
            match raw.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
                Some((mantissa, Ok(exp))) => {
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
                },
                _ => raw,
            }
        };
        write!(f, "{:>24}", body)
    }
}

/// Displays an f64 like C's `%A`.
///
/// Normal values print as `0X1.<hex>P<exp>` with trailing zero digits
/// removed; subnormals keep a leading `0` and the minimum exponent.
#[derive(Debug, Clone, Copy)]
pub struct HexFloat(pub f64);

impl fmt::Display for HexFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FRACTION_BITS: u32 = 52;
        const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;

        let x = self.0;
        let sign = if x.is_sign_negative() { "-" } else { "" };
        if x.is_nan() {
            return write!(f, "{}NAN", sign);
        }
        if x.is_infinite() {
            return write!(f, "{}INF", sign);
        }

        let bits = x.to_bits();
        let biased = ((bits >> FRACTION_BITS) & 0x7ff) as i32;
        let fraction = bits & FRACTION_MASK;

        if biased == 0 && fraction == 0 {
            return write!(f, "{}0X0P+0", sign);
        }

        let (lead, exp) = if biased == 0 {
            (0, -1022)
        } else {
            (1, biased - 1023)
        };

        let digits = format!("{:013X}", fraction);
        let digits = digits.trim_end_matches('0');
        if digits.is_empty() {
            write!(f, "{}0X{}P{:+}", sign, lead, exp)
        } else {
            write!(f, "{}0X{}.{}P{:+}", sign, lead, digits, exp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_matches_printf() {
        assert_eq!(DecimalExp(0.6).to_string(), "  5.9999999999999998e-01");
        assert_eq!(
            DecimalExp(-1.5999999991578303e-09).to_string(),
            " -1.5999999991578303e-09"
        );
        assert_eq!(DecimalExp(0.0).to_string(), "  0.0000000000000000e+00");
        assert_eq!(DecimalExp(1e300).to_string(), " 1.0000000000000001e+300");
        assert_eq!(DecimalExp(12.5).to_string(), "  1.2500000000000000e+01");
    }

    #[test]
    fn test_decimal_non_finite() {
        assert_eq!(DecimalExp(f64::INFINITY).to_string(), format!("{:>24}", "inf"));
        assert_eq!(DecimalExp(f64::NAN).to_string(), format!("{:>24}", "nan"));
    }

    #[test]
    fn test_hex_matches_printf() {
        assert_eq!(HexFloat(1.0).to_string(), "0X1P+0");
        assert_eq!(HexFloat(0.5).to_string(), "0X1P-1");
        assert_eq!(HexFloat(0.6).to_string(), "0X1.3333333333333P-1");
        assert_eq!(HexFloat(-2.5).to_string(), "-0X1.4P+1");
        assert_eq!(HexFloat(0.0).to_string(), "0X0P+0");
        assert_eq!(HexFloat(-0.0).to_string(), "-0X0P+0");
    }

    #[test]
    fn test_hex_widened_single() {
        // 0.6f32 widened exactly to f64
        assert_eq!(HexFloat(0.6_f32 as f64).to_string(), "0X1.333334P-1");
    }

    #[test]
    fn test_hex_subnormal_and_special() {
        assert_eq!(HexFloat(5e-324).to_string(), "0X0.0000000000001P-1022");
        assert_eq!(HexFloat(f64::INFINITY).to_string(), "INF");
        assert_eq!(HexFloat(f64::NEG_INFINITY).to_string(), "-INF");
    }

    #[test]
    fn test_render_vector() {
        let v = Vector3::new(1.0, 0.5, -2.5);
        assert_eq!(OutputFormat::Hex.render(v), "(0X1P+0, 0X1P-1, -0X1.4P+1)");
        assert_eq!(
            OutputFormat::Decimal.render(v),
            "(  1.0000000000000000e+00,   5.0000000000000000e-01,  -2.5000000000000000e+00)"
        );
    }
}
