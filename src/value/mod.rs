//! The value rendering protocol and the typed CSS values built on it.
//!
//! Anything implementing [`ToCss`] can be used as a declaration value.
//! Strings and numbers write their literal text (whole floats keep `.0`), `None` writes the `none`
//! keyword, and typed values such as [`ColorValue`] and [`NumericValue`]
//! format themselves. New value kinds take part by implementing the trait;
//! nothing else needs to change.
//!
//! Renderable values can be chained with `+`, which joins the rendered
//! operands with a single space:
//!
//! ```
//! use darwcss::{ColorValue, NumericValue, render};
//!
//! let border = NumericValue::new(5, "px") + "solid" + ColorValue::rgb(255, 0, 0);
//! assert_eq!(render(&border), "5px solid rgb(255, 0, 0)");
//! ```

mod color;
mod numeric;

use std::fmt::Write;

pub use color::{ColorKind, ColorValue, Component, Hls};
pub use numeric::{Number, NumericValue};

/// Serialization of a value into CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// Render any value to its CSS token string.
#[inline]
pub fn render<T: ToCss + ?Sized>(value: &T) -> String {
    value.to_css_string()
}

/// Join two rendered values with a single space.
pub fn concat<A: ToCss + ?Sized, B: ToCss + ?Sized>(a: &A, b: &B) -> Joined {
    let mut buf = a.to_css_string();
    buf.push(' ');
    b.to_css(&mut buf);
    Joined(buf)
}

/// Space-separated list of already rendered values, produced by `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Joined(String);

impl Joined {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToCss for Joined {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.0);
    }
}

/// Implement `+` for a typed value, in both operand positions with text.
macro_rules! impl_concat {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: $crate::value::ToCss> std::ops::Add<R> for $ty {
                type Output = $crate::value::Joined;

                fn add(self, rhs: R) -> $crate::value::Joined {
                    $crate::value::concat(&self, &rhs)
                }
            }

            impl std::ops::Add<$ty> for &str {
                type Output = $crate::value::Joined;

                fn add(self, rhs: $ty) -> $crate::value::Joined {
                    $crate::value::concat(self, &rhs)
                }
            }

            impl std::ops::Add<$ty> for String {
                type Output = $crate::value::Joined;

                fn add(self, rhs: $ty) -> $crate::value::Joined {
                    $crate::value::concat(&self, &rhs)
                }
            }

            $crate::value::impl_concat_lhs!(
                $ty; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
            );
        )*
    };
}

/// Implement `+` with a primitive number as the left operand.
macro_rules! impl_concat_lhs {
    ($ty:ty; $($prim:ty),* $(,)?) => {
        $(
            impl std::ops::Add<$ty> for $prim {
                type Output = $crate::value::Joined;

                fn add(self, rhs: $ty) -> $crate::value::Joined {
                    $crate::value::concat(&self, &rhs)
                }
            }
        )*
    };
}

pub(crate) use impl_concat;
pub(crate) use impl_concat_lhs;

impl_concat!(Joined);

impl ToCss for str {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl ToCss for String {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl<T: ToCss + ?Sized> ToCss for &T {
    fn to_css(&self, buf: &mut String) {
        (**self).to_css(buf);
    }
}

impl<T: ToCss> ToCss for Option<T> {
    fn to_css(&self, buf: &mut String) {
        match self {
            Some(value) => value.to_css(buf),
            None => buf.push_str("none"),
        }
    }
}

/// Primitives render through their `Display` form.
macro_rules! display_to_css {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToCss for $ty {
                fn to_css(&self, buf: &mut String) {
                    let _ = write!(buf, "{}", self);
                }
            }
        )*
    };
}

display_to_css!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char);

impl ToCss for f32 {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "{self:?}");
    }
}

impl ToCss for f64 {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "{self:?}");
    }
}
