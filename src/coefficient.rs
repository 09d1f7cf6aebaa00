use std::fmt;

/// A correlation coefficient, always inside `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct CorrelationCoefficient(f64);

impl CorrelationCoefficient {
    pub const ZERO: Self = Self(0.0);

    /// Clamps `value` into `[-1, 1]`, NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value == 0.0 {
            // also turns -0.0 into 0.0
            return Self::ZERO;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Interprets the text of the input field.
    ///
    /// The longest numeric prefix is used (`"0.5abc"` reads as 0.5), text
    /// without one reads as 0. The value is clamped and then rounded to two
    /// decimal places, halves rounding up.
    pub fn parse_input(text: &str) -> Self {
        let value = leading_number(text.trim()).unwrap_or(0.0);
        let clamped = Self::new(value).0;
        Self::new((clamped * 100.0 + 0.5).floor() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn describe(self) -> Correlation {
        let c = self.0;
        if c == 0.0 {
            Correlation::NoCorrelation
        } else if c > 0.7 {
            Correlation::Positive(Strength::Strong)
        } else if c > 0.3 {
            Correlation::Positive(Strength::Moderate)
        } else if c > 0.0 {
            Correlation::Positive(Strength::Weak)
        } else if c < -0.7 {
            Correlation::Negative(Strength::Strong)
        } else if c < -0.3 {
            Correlation::Negative(Strength::Moderate)
        } else {
            Correlation::Negative(Strength::Weak)
        }
    }
}

fn leading_number(text: &str) -> Option<f64> {
    text.char_indices()
        .rev()
        .map(|(i, ch)| i + ch.len_utf8())
        .find_map(|end| text[..end].parse::<f64>().ok())
}

impl Default for CorrelationCoefficient {
    fn default() -> Self {
        Self(crate::DEFAULT_COEFFICIENT)
    }
}

impl From<f64> for CorrelationCoefficient {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<CorrelationCoefficient> for f64 {
    fn from(coefficient: CorrelationCoefficient) -> Self {
        coefficient.0
    }
}

impl fmt::Display for CorrelationCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

/// Qualitative reading of a coefficient, shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    NoCorrelation,
    Positive(Strength),
    Negative(Strength),
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (strength, direction) = match self {
            Correlation::NoCorrelation => return f.write_str("No correlation"),
            Correlation::Positive(strength) => (strength, "positive"),
            Correlation::Negative(strength) => (strength, "negative"),
        };
        let strength = match strength {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        write!(f, "{} {} correlation", strength, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> f64 {
        CorrelationCoefficient::parse_input(text).value()
    }

    #[test]
    fn test_parse_clamps_out_of_range() {
        assert_eq!(parse("2"), 1.0);
        assert_eq!(parse("-5"), -1.0);
        assert_eq!(parse("inf"), 1.0);
    }

    #[test]
    fn test_parse_non_numeric_is_zero() {
        assert_eq!(parse("abc"), 0.0);
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("NaN"), 0.0);
        assert_eq!(parse("-"), 0.0);
    }

    #[test]
    fn test_parse_rounds_to_two_decimals() {
        assert_eq!(parse("0.333"), 0.33);
        assert_eq!(parse("-0.666"), -0.67);
        assert_eq!(parse("0.125"), 0.13);
    }

    #[test]
    fn test_parse_uses_numeric_prefix() {
        assert_eq!(parse("0.5abc"), 0.5);
        assert_eq!(parse("  -0.25  "), -0.25);
        assert_eq!(parse("1e"), 1.0);
        assert_eq!(parse(".7"), 0.7);
    }

    #[test]
    fn test_new_coerces() {
        assert_eq!(CorrelationCoefficient::new(f64::NAN).value(), 0.0);
        assert_eq!(CorrelationCoefficient::new(3.0).value(), 1.0);
        assert!(CorrelationCoefficient::new(-0.0).value().is_sign_positive());
    }

    #[test]
    fn test_display_like_plain_number() {
        assert_eq!(CorrelationCoefficient::new(0.5).to_string(), "0.5");
        assert_eq!(CorrelationCoefficient::new(1.0).to_string(), "1");
        assert_eq!(CorrelationCoefficient::parse_input("-0.001").to_string(), "0");
    }

    #[test]
    fn test_describe() {
        let label = |c: f64| CorrelationCoefficient::new(c).describe().to_string();
        assert_eq!(label(0.0), "No correlation");
        assert_eq!(label(0.8), "Strong positive correlation");
        assert_eq!(label(0.5), "Moderate positive correlation");
        assert_eq!(label(0.1), "Weak positive correlation");
        assert_eq!(label(-0.9), "Strong negative correlation");
        assert_eq!(label(-0.5), "Moderate negative correlation");
        assert_eq!(label(-0.1), "Weak negative correlation");
    }

    #[test]
    fn test_describe_thresholds_are_exclusive() {
        let describe = |c: f64| CorrelationCoefficient::new(c).describe();
        assert_eq!(describe(0.7), Correlation::Positive(Strength::Moderate));
        assert_eq!(describe(0.3), Correlation::Positive(Strength::Weak));
        assert_eq!(describe(-0.7), Correlation::Negative(Strength::Moderate));
        assert_eq!(describe(-0.3), Correlation::Negative(Strength::Weak));
    }

    #[test]
    fn test_default_is_half() {
        assert_eq!(CorrelationCoefficient::default().value(), 0.5);
    }
}
