//! Numbers with a unit suffix.

use std::fmt;
use std::fmt::Write;

use super::ToCss;

/// An integer or floating-point quantity.
///
/// Integers render without a fractional part and floats always keep one,
/// so `5` renders `5` while `5.0` renders `5.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

/// Lossless widening of every primitive integer up to 64 bits.
macro_rules! number_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(value as i128)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing `.0` on whole floats.
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// A quantity such as `5px` or `30%`. The unit is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValue {
    pub value: Number,
    pub unit: String,
}

impl NumericValue {
    pub fn new(value: impl Into<Number>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    pub fn px(value: impl Into<Number>) -> Self {
        Self::new(value, "px")
    }

    pub fn em(value: impl Into<Number>) -> Self {
        Self::new(value, "em")
    }

    pub fn percent(value: impl Into<Number>) -> Self {
        Self::new(value, "%")
    }
}

impl ToCss for NumericValue {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "{}{}", self.value, self.unit);
    }
}

super::impl_concat!(NumericValue);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::render;

    #[test]
    fn test_numeric_render() {
        assert_eq!(render(&NumericValue::new(5, "px")), "5px");
        assert_eq!(render(&NumericValue::new(30, "%")), "30%");
    }

    #[test]
    fn test_fractional_value() {
        assert_eq!(render(&NumericValue::em(1.25)), "1.25em");
        assert_eq!(render(&NumericValue::px(-2)), "-2px");
    }

    #[test]
    fn test_int_and_float_stay_distinct() {
        assert_eq!(render(&NumericValue::px(5)), "5px");
        assert_eq!(render(&NumericValue::px(5.0)), "5.0px");
        assert_eq!(render(&NumericValue::em(0.5f32)), "0.5em");
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(render(&NumericValue::px(usize::MAX)), format!("{}px", usize::MAX));
        assert_eq!(render(&NumericValue::px(u64::MAX)), "18446744073709551615px");
        assert_eq!(render(&NumericValue::px(i64::MIN)), "-9223372036854775808px");
    }

    #[test]
    fn test_unit_is_not_validated() {
        assert_eq!(render(&NumericValue::new(3, " parsecs")), "3 parsecs");
        assert_eq!(render(&NumericValue::new(0, "")), "0");
    }
}
