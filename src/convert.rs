//! Value conversion: raw entry text (or a group) into typed field values.
//!
//! Every bindable type implements [`FromEntry`] and declares its [`Shape`].
//! [`convert`] checks the raw value against that shape and dispatches:
//!
//! | Shape         | Raw input | Rule                                            |
//! |---------------|-----------|-------------------------------------------------|
//! | `Boolean`     | scalar    | `"0"` is false, anything else is true           |
//! | `Integer`     | scalar    | `0x` prefix is base 16, else base 10; wraps     |
//! | `Enumeration` | scalar    | member name, or a discriminant (decimal or hex) |
//! | `String`      | scalar    | unchanged                                       |
//! | `Composite`   | group     | sub-keys matched against field names            |
//!
//! Integers parse through a 64-bit intermediate (signed or unsigned to match
//! the target) and are then narrowed with `as`, so `"256"` into a `u8` is `0`
//! and `"0xFF"` into an `i8` is `-1`.
//!
//! Enumerations and composites get their impls from the
//! [`config_enum!`](crate::config_enum) and [`config_group!`](crate::config_group)
//! macros.

use std::num::ParseIntError;

use thiserror::Error;

use crate::table::{EntryValue, Group};

/// The static shape of a bindable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Boolean,
    Integer,
    Enumeration,
    String,
    Composite,
}

impl Shape {
    /// Whether this shape is filled from a group rather than a scalar.
    pub fn expects_group(self) -> bool {
        match self {
            Shape::Composite => true,
            Shape::Boolean | Shape::Integer | Shape::Enumeration | Shape::String => false,
        }
    }
}

/// Why a raw value could not be converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("'{text}' is not a valid number: {source}")]
    InvalidNumber {
        text: String,
        source: ParseIntError,
    },

    #[error("'{text}' is not a member of {type_name}")]
    UnknownVariant {
        text: String,
        type_name: &'static str,
    },

    #[error("expected a single value, found a [ ... ] group")]
    ExpectedScalar,

    #[error("expected a [ ... ] group, found a single value")]
    ExpectedGroup,

    #[error("field '{field}': {source}")]
    InField {
        field: &'static str,
        source: Box<ConvertError>,
    },
}

/// A type that can be produced from a raw config entry.
pub trait FromEntry: Sized {
    const SHAPE: Shape;

    /// Convert scalar text. Only called when `SHAPE` is not `Composite`.
    fn from_scalar(_text: &str) -> Result<Self, ConvertError> {
        Err(ConvertError::ExpectedGroup)
    }

    /// Convert a group. Only called when `SHAPE` is `Composite`.
    fn from_group(_group: &Group) -> Result<Self, ConvertError> {
        Err(ConvertError::ExpectedScalar)
    }
}

/// Convert a raw entry value into `T`.
pub fn convert<T: FromEntry>(raw: &EntryValue) -> Result<T, ConvertError> {
    match (T::SHAPE.expects_group(), raw) {
        (true, EntryValue::Group(group)) => T::from_group(group),
        (true, EntryValue::Scalar(_)) => Err(ConvertError::ExpectedGroup),
        (false, EntryValue::Scalar(text)) => T::from_scalar(text),
        (false, EntryValue::Group(_)) => Err(ConvertError::ExpectedScalar),
    }
}

/// Convert the sub-value for `field` inside a composite, tagging errors with
/// the field name. Sub-values are always text.
pub fn convert_field<T: FromEntry>(field: &'static str, text: &str) -> Result<T, ConvertError> {
    let result = if T::SHAPE.expects_group() {
        Err(ConvertError::ExpectedGroup)
    } else {
        T::from_scalar(text)
    };
    result.map_err(|e| ConvertError::InField {
        field,
        source: Box::new(e),
    })
}

/// Split off a `0x` prefix, returning the digits and their radix.
pub fn radix_of(text: &str) -> (&str, u32) {
    match text.strip_prefix("0x") {
        Some(digits) => (digits, 16),
        None => (text, 10),
    }
}

/// Whether `text` is written in hexadecimal.
pub fn is_hex(text: &str) -> bool {
    text.starts_with("0x")
}

/// Parse through a signed 64-bit intermediate.
///
/// Hex text is read as a 64-bit pattern, so `0xFFFFFFFFFFFFFFFF` is `-1`.
pub fn parse_signed(text: &str) -> Result<i64, ConvertError> {
    let (digits, radix) = radix_of(text);
    let parsed = if radix == 16 {
        u64::from_str_radix(digits, radix).map(|v| v as i64)
    } else {
        i64::from_str_radix(digits, radix)
    };
    parsed.map_err(|source| ConvertError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

/// Parse through an unsigned 64-bit intermediate.
pub fn parse_unsigned(text: &str) -> Result<u64, ConvertError> {
    let (digits, radix) = radix_of(text);
    u64::from_str_radix(digits, radix).map_err(|source| ConvertError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

/// Integer types, narrowed from a 64-bit parse.
pub trait ConfigInteger: Copy + PartialEq {
    fn parse_entry(text: &str) -> Result<Self, ConvertError>;
}

macro_rules! signed_integers {
    ($($ty:ty),*) => {$(
        impl ConfigInteger for $ty {
            fn parse_entry(text: &str) -> Result<Self, ConvertError> {
                parse_signed(text).map(|v| v as $ty)
            }
        }

        impl FromEntry for $ty {
            const SHAPE: Shape = Shape::Integer;

            fn from_scalar(text: &str) -> Result<Self, ConvertError> {
                <$ty as ConfigInteger>::parse_entry(text)
            }
        }
    )*};
}

macro_rules! unsigned_integers {
    ($($ty:ty),*) => {$(
        impl ConfigInteger for $ty {
            fn parse_entry(text: &str) -> Result<Self, ConvertError> {
                parse_unsigned(text).map(|v| v as $ty)
            }
        }

        impl FromEntry for $ty {
            const SHAPE: Shape = Shape::Integer;

            fn from_scalar(text: &str) -> Result<Self, ConvertError> {
                <$ty as ConfigInteger>::parse_entry(text)
            }
        }
    )*};
}

signed_integers!(i8, i16, i32, i64, isize);
unsigned_integers!(u8, u16, u32, u64, usize);

impl FromEntry for bool {
    const SHAPE: Shape = Shape::Boolean;

    fn from_scalar(text: &str) -> Result<Self, ConvertError> {
        Ok(text != "0")
    }
}

impl FromEntry for String {
    const SHAPE: Shape = Shape::String;

    fn from_scalar(text: &str) -> Result<Self, ConvertError> {
        Ok(text.to_string())
    }
}
