use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything that can be counted and printed in front of a noun.
///
/// Only the magnitude decides between singular and plural; the value itself is printed as is.
pub trait Count: fmt::Display {
    /// Whether the absolute value is exactly one.
    fn is_one_in_magnitude(&self) -> bool;
}

impl<T: Count + ?Sized> Count for &T {
    fn is_one_in_magnitude(&self) -> bool {
        (**self).is_one_in_magnitude()
    }
}

macro_rules! impl_count_signed {
    ($($ty:ty),*) => {
        $(
            impl Count for $ty {
                fn is_one_in_magnitude(&self) -> bool {
                    // unsigned_abs so that MIN does not overflow
                    self.unsigned_abs() == 1
                }
            }
        )*
    };
}

macro_rules! impl_count_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Count for $ty {
                fn is_one_in_magnitude(&self) -> bool {
                    *self == 1
                }
            }
        )*
    };
}

macro_rules! impl_count_float {
    ($($ty:ty),*) => {
        $(
            impl Count for $ty {
                fn is_one_in_magnitude(&self) -> bool {
                    // NaN compares unequal to everything
                    self.abs() == 1.0
                }
            }
        )*
    };
}

impl_count_signed!(i8, i16, i32, i64, i128, isize);
impl_count_unsigned!(u8, u16, u32, u64, u128, usize);
impl_count_float!(f32, f64);

/// A count whose numeric kind is only known at runtime (command line, JSON input).
///
/// Integers are tried first (signed, then unsigned), so `1` stays `Int(1)`, `u64::MAX` stays
/// exact as `UInt` and `1.0` becomes `Float(1.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Quantity {
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::Int(_) | Self::UInt(_) => true,
            Self::Float(x) => x.is_finite(),
        }
    }
}

impl Count for Quantity {
    fn is_one_in_magnitude(&self) -> bool {
        match self {
            Self::Int(n) => n.is_one_in_magnitude(),
            Self::UInt(n) => n.is_one_in_magnitude(),
            Self::Float(x) => x.is_one_in_magnitude(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuantityError {
    input: String,
}

impl fmt::Display for ParseQuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a number", self.input)
    }
}

impl std::error::Error for ParseQuantityError {}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::Int(n));
        }
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self::UInt(n));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseQuantityError {
                input: s.to_string(),
            })
    }
}
