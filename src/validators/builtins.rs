//! Built-in value types
//!
//! The API declares property types by name. A fixed set of numeric types is
//! checked against the attribute text; every other declared type is accepted
//! as-is.

use crate::api::TypeRef;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Numeric types whose values are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    /// Signed 8-bit integer
    SByte,
    /// Unsigned 8-bit integer
    Byte,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 16-bit integer
    UInt16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    UInt32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 64-bit integer
    UInt64,
    /// Single-precision float
    Single,
    /// Double-precision float
    Double,
    /// 128-bit decimal
    Decimal,
}

static NUMERIC_TYPES: Lazy<HashMap<&'static str, NumericType>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for ty in NumericType::ALL {
        m.insert(ty.type_name(), ty);
        m.insert(ty.keyword(), ty);
    }
    m
});

// Sign, digits and at most one decimal point; no exponent, no separators
static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap());

/// A parsed numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Any signed integer type
    Signed(i64),
    /// Any unsigned integer type
    Unsigned(u64),
    /// Single or double
    Float(f64),
    /// Decimal
    Decimal(Decimal),
}

impl NumericType {
    /// All checked types
    pub const ALL: [NumericType; 11] = [
        NumericType::SByte,
        NumericType::Byte,
        NumericType::Int16,
        NumericType::UInt16,
        NumericType::Int32,
        NumericType::UInt32,
        NumericType::Int64,
        NumericType::UInt64,
        NumericType::Single,
        NumericType::Double,
        NumericType::Decimal,
    ];

    /// Look up a declared type name, either `System.Int32` or `int` style
    pub fn from_type_name(name: &str) -> Option<Self> {
        NUMERIC_TYPES.get(name).copied()
    }

    /// Fully qualified type name
    pub fn type_name(&self) -> &'static str {
        match self {
            NumericType::SByte => "System.SByte",
            NumericType::Byte => "System.Byte",
            NumericType::Int16 => "System.Int16",
            NumericType::UInt16 => "System.UInt16",
            NumericType::Int32 => "System.Int32",
            NumericType::UInt32 => "System.UInt32",
            NumericType::Int64 => "System.Int64",
            NumericType::UInt64 => "System.UInt64",
            NumericType::Single => "System.Single",
            NumericType::Double => "System.Double",
            NumericType::Decimal => "System.Decimal",
        }
    }

    /// Keyword alias
    pub fn keyword(&self) -> &'static str {
        match self {
            NumericType::SByte => "sbyte",
            NumericType::Byte => "byte",
            NumericType::Int16 => "short",
            NumericType::UInt16 => "ushort",
            NumericType::Int32 => "int",
            NumericType::UInt32 => "uint",
            NumericType::Int64 => "long",
            NumericType::UInt64 => "ulong",
            NumericType::Single => "float",
            NumericType::Double => "double",
            NumericType::Decimal => "decimal",
        }
    }

    /// Parse value text as this type
    pub fn parse(&self, value: &str) -> Result<NumericValue> {
        let text = value.trim();
        match self {
            NumericType::SByte => parse_text::<i8>(text, self).map(|v| NumericValue::Signed(v.into())),
            NumericType::Byte => parse_unsigned::<u8>(text, self).map(|v| NumericValue::Unsigned(v.into())),
            NumericType::Int16 => parse_text::<i16>(text, self).map(|v| NumericValue::Signed(v.into())),
            NumericType::UInt16 => parse_unsigned::<u16>(text, self).map(|v| NumericValue::Unsigned(v.into())),
            NumericType::Int32 => parse_text::<i32>(text, self).map(|v| NumericValue::Signed(v.into())),
            NumericType::UInt32 => parse_unsigned::<u32>(text, self).map(|v| NumericValue::Unsigned(v.into())),
            NumericType::Int64 => parse_text::<i64>(text, self).map(NumericValue::Signed),
            NumericType::UInt64 => parse_unsigned::<u64>(text, self).map(NumericValue::Unsigned),
            NumericType::Single => {
                let v = parse_text::<f32>(text, self)?;
                check_finite(f64::from(v), text, self).map(NumericValue::Float)
            }
            NumericType::Double => {
                let v = parse_text::<f64>(text, self)?;
                check_finite(v, text, self).map(NumericValue::Float)
            }
            NumericType::Decimal => {
                if !DECIMAL_PATTERN.is_match(text) {
                    return Err(invalid(value, self));
                }
                Decimal::from_str(text)
                    .map(NumericValue::Decimal)
                    .map_err(|_| invalid(value, self))
            }
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn invalid(value: &str, ty: &NumericType) -> Error {
    Error::Value(format!("'{}' is not a valid {} value", value, ty))
}

fn parse_text<T: FromStr>(text: &str, ty: &NumericType) -> Result<T> {
    text.parse::<T>().map_err(|_| invalid(text, ty))
}

// Negative zero is a valid unsigned value
fn parse_unsigned<T: FromStr>(text: &str, ty: &NumericType) -> Result<T> {
    match text.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b == b'0') => {
            parse_text(digits, ty)
        }
        _ => parse_text(text, ty),
    }
}

// A finite literal that overflows to infinity is out of range; only an
// explicit infinity literal may produce one.
fn check_finite(v: f64, text: &str, ty: &NumericType) -> Result<f64> {
    if v.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return Err(Error::Value(format!(
            "'{}' is out of range for {}",
            text, ty
        )));
    }
    Ok(v)
}

/// Check if value text is representable in the declared type.
///
/// Types outside the numeric set are always compatible.
pub fn is_value_compatible(type_ref: &TypeRef, value: &str) -> bool {
    match NumericType::from_type_name(&type_ref.name) {
        Some(ty) => ty.parse(value).is_ok(),
        None => true,
    }
}
