use crate::util::num::i64_to_f64;

/// A numeric value with an observable integer-or-float tag.
///
/// Literals, intermediate results and the final result of an evaluation are
/// all represented by this type. The tag is never changed implicitly: mixed
/// operands go through [`NumberValue::promote`] before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
}

/// A pair of operands after promotion to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float; both are now floats.
    Floats(f64, f64),
}

impl NumberValue {
    /// Promotes two values to a common representation.
    ///
    /// Two integers stay integers. If either side is a float, both sides are
    /// converted to `f64`.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::value::core::{NumberValue, Operands};
    ///
    /// let promoted = NumberValue::Integer(2).promote(NumberValue::Float(0.5));
    /// assert_eq!(promoted, Operands::Floats(2.0, 0.5));
    ///
    /// let kept = NumberValue::Integer(2).promote(NumberValue::Integer(3));
    /// assert_eq!(kept, Operands::Integers(2, 3));
    /// ```
    #[must_use]
    pub fn promote(self, other: Self) -> Operands {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Operands::Integers(a, b),
            _ => Operands::Floats(self.as_f64(), other.as_f64()),
        }
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers beyond `2^53` are rounded to the nearest representable float.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(r) => r,
        }
    }

    /// Returns `true` if the value is [`NumberValue::Integer`].
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`NumberValue::Float`].
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value is numerically zero, regardless of its tag.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Float(r) => r == 0.0,
        }
    }
}

impl From<i64> for NumberValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for NumberValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Integers render without a decimal point. Floats always render with one
/// (or with an exponent for very large and very small magnitudes), so the tag
/// stays visible: `Float(2.0)` prints as `2.0`.
impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_the_tag_visible() {
        assert_eq!(NumberValue::Integer(5).to_string(), "5");
        assert_eq!(NumberValue::Integer(-12).to_string(), "-12");
        assert_eq!(NumberValue::Float(2.0).to_string(), "2.0");
        assert_eq!(NumberValue::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn promotion_converts_both_sides_when_one_is_float() {
        assert_eq!(NumberValue::Float(1.5).promote(NumberValue::Integer(4)),
                   Operands::Floats(1.5, 4.0));
        assert_eq!(NumberValue::Float(1.5).promote(NumberValue::Float(4.0)),
                   Operands::Floats(1.5, 4.0));
    }

    #[test]
    fn zero_check_ignores_tag_and_sign() {
        assert!(NumberValue::Integer(0).is_zero());
        assert!(NumberValue::Float(0.0).is_zero());
        assert!(NumberValue::Float(-0.0).is_zero());
        assert!(!NumberValue::Float(1e-300).is_zero());
    }
}
