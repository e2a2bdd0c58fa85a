//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! Values are decoded once from the byte stream and own their storage.
//! The shape of a value follows the class of its value representation
//! (see [`VrClass`](crate::VrClass)).

use crate::object::{DataSet, Sequence};
use smallvec::SmallVec;
use snafu::{ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The raw byte payload of one image frame,
/// prior to any pixel format interpretation.
pub type FrameBuffer = Vec<u8>;

/// A decoded DICOM value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No data. Used for any value of length 0,
    /// and for values which were skipped during decoding.
    Empty,
    /// Character string content, as read from the stream
    /// (padding and `\` separators included).
    Text(String),
    /// One or more integers, widened to 64 bits.
    Int(C<i64>),
    /// One or more floating point numbers, widened to 64 bits.
    Float(C<f64>),
    /// An opaque byte blob.
    Binary(Vec<u8>),
    /// A sequence of nested data sets.
    Sequence(Sequence),
}

/// An enum representing an abstraction of a value's type,
/// the equivalent of [`Value`] without the content.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data.
    Empty,
    /// Character string content.
    Text,
    /// A sequence of integers.
    Int,
    /// A sequence of floating point numbers.
    Float,
    /// A byte blob.
    Binary,
    /// A sequence of items.
    Sequence,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueType::Empty => "empty",
            ValueType::Text => "text",
            ValueType::Int => "integer",
            ValueType::Float => "float",
            ValueType::Binary => "binary",
            ValueType::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
///
/// This error is raised whenever it is not possible to retrieve the requested
/// value, either because the inner representation is not compatible with the
/// requested value type, or a conversion would be required.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// A failure in reading a textual value as a number.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// The text could not be parsed as an integer.
    #[snafu(display("could not parse integer text"))]
    ParseInteger { source: ParseIntError },
    /// The text could not be parsed as a floating point number.
    #[snafu(display("could not parse float text"))]
    ParseFloat { source: ParseFloatError },
}

/// An error type for a failed attempt at converting a value
/// into another representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's original representation
    pub original: ValueType,
    /// The reason why the conversion was unsuccessful,
    /// or none if a conversion from the given original representation
    /// is not possible
    pub cause: Option<InvalidValueReadError>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not convert {} to a {}",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as _)
    }
}

fn trim_padding(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

impl Value {
    /// Obtain the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Empty => ValueType::Empty,
            Value::Text(_) => ValueType::Text,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Binary(_) => ValueType::Binary,
            Value::Sequence(_) => ValueType::Sequence,
        }
    }

    /// Obtain the number of individual values.
    ///
    /// Text values count the `\` separated parts,
    /// a byte blob counts as a single value,
    /// and a sequence counts its items.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Empty => 0,
            Value::Text(s) if trim_padding(s).is_empty() => 0,
            Value::Text(s) => s.split('\\').count() as u32,
            Value::Int(c) => c.len() as u32,
            Value::Float(c) => c.len() as u32,
            Value::Binary(_) => 1,
            Value::Sequence(items) => items.len() as u32,
        }
    }

    /// Check whether the value holds no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            Value::Int(c) => c.is_empty(),
            Value::Float(c) => c.is_empty(),
            Value::Binary(b) => b.is_empty(),
            Value::Sequence(items) => items.is_empty(),
        }
    }

    /// Convert the full value into a single raw string,
    /// with trailing whitespace kept.
    ///
    /// Numeric values are printed and joined with the standard
    /// DICOM value delimiter `'\\'`.
    ///
    /// Returns an error if the value is binary or a sequence.
    pub fn to_raw_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        match self {
            Value::Empty => Ok(Cow::Borrowed("")),
            Value::Text(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Int(c) => Ok(Cow::Owned(join_values(c))),
            Value::Float(c) => Ok(Cow::Owned(join_values(c))),
            _ => Err(ConvertValueError {
                requested: "string",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Convert the full value into a single string,
    /// with trailing space and null padding removed.
    ///
    /// Returns an error if the value is binary or a sequence.
    pub fn to_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        match self.to_raw_str()? {
            Cow::Borrowed(s) => Ok(Cow::Borrowed(trim_padding(s))),
            Cow::Owned(s) => Ok(Cow::Owned(trim_padding(&s).to_string())),
        }
    }

    /// Convert the value into a sequence of strings,
    /// one per `\` separated part, each with its padding removed.
    ///
    /// Returns an error if the value is binary or a sequence.
    pub fn to_multi_str(&self) -> Result<Vec<String>, ConvertValueError> {
        let text = self.to_raw_str()?;
        if trim_padding(&text).is_empty() {
            return Ok(Vec::new());
        }
        Ok(text
            .split('\\')
            .map(|part| trim_padding(part).trim_start().to_string())
            .collect())
    }

    /// Retrieve the first integer of the value.
    ///
    /// Integer string content (such as `IS`) is parsed on request.
    pub fn to_int(&self) -> Result<i64, ConvertValueError> {
        match self {
            Value::Int(c) => c.first().copied().ok_or(ConvertValueError {
                requested: "integer",
                original: ValueType::Empty,
                cause: None,
            }),
            Value::Text(_) => {
                let values = self.to_multi_int()?;
                values.first().copied().ok_or(ConvertValueError {
                    requested: "integer",
                    original: ValueType::Empty,
                    cause: None,
                })
            }
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve all integers of the value.
    ///
    /// Integer string content (such as `IS`) is parsed on request.
    pub fn to_multi_int(&self) -> Result<Vec<i64>, ConvertValueError> {
        match self {
            Value::Empty => Ok(Vec::new()),
            Value::Int(c) => Ok(c.to_vec()),
            Value::Text(_) => self
                .to_multi_str()?
                .iter()
                .map(|part| {
                    part.parse::<i64>()
                        .context(ParseIntegerSnafu)
                        .map_err(|e| ConvertValueError {
                            requested: "integer",
                            original: ValueType::Text,
                            cause: Some(e),
                        })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve the first number of the value as a double.
    ///
    /// Integers are widened and decimal string content (such as `DS`)
    /// is parsed on request.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        let empty = || ConvertValueError {
            requested: "float",
            original: ValueType::Empty,
            cause: None,
        };
        match self {
            Value::Float(c) => c.first().copied().ok_or_else(empty),
            Value::Int(c) => c.first().map(|v| *v as f64).ok_or_else(empty),
            Value::Text(_) => {
                let parts = self.to_multi_str()?;
                let first = parts.first().ok_or_else(empty)?;
                first
                    .parse::<f64>()
                    .context(ParseFloatSnafu)
                    .map_err(|e| ConvertValueError {
                        requested: "float",
                        original: ValueType::Text,
                        cause: Some(e),
                    })
            }
            _ => Err(ConvertValueError {
                requested: "float",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Get the integers of the value without conversion.
    pub fn ints(&self) -> Result<&[i64], CastValueError> {
        match self {
            Value::Int(c) => Ok(c),
            _ => Err(CastValueError {
                requested: "integer",
                got: self.value_type(),
            }),
        }
    }

    /// Get the floating point numbers of the value without conversion.
    pub fn floats(&self) -> Result<&[f64], CastValueError> {
        match self {
            Value::Float(c) => Ok(c),
            _ => Err(CastValueError {
                requested: "float",
                got: self.value_type(),
            }),
        }
    }

    /// Get the bytes of a binary value.
    pub fn binary(&self) -> Result<&[u8], CastValueError> {
        match self {
            Value::Binary(b) => Ok(b),
            _ => Err(CastValueError {
                requested: "binary",
                got: self.value_type(),
            }),
        }
    }

    /// Take the bytes of a binary value.
    pub fn into_binary(self) -> Result<Vec<u8>, CastValueError> {
        match self {
            Value::Binary(b) => Ok(b),
            value => Err(CastValueError {
                requested: "binary",
                got: value.value_type(),
            }),
        }
    }

    /// Get the items of a sequence value,
    /// or `None` if the value is not a sequence.
    pub fn items(&self) -> Option<&[DataSet]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

fn join_values<T: fmt::Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push('\\');
        }
        out.push_str(&v.to_string());
    }
    out
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Binary(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(smallvec::smallvec![value])
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(smallvec::smallvec![value])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn text_padding_is_trimmed() {
        let value = Value::from("DOE^JOHN ");
        assert_eq!(value.to_raw_str().unwrap(), "DOE^JOHN ");
        assert_eq!(value.to_str().unwrap(), "DOE^JOHN");

        let uid = Value::from("1.2.840.10008.1.2\0");
        assert_eq!(uid.to_str().unwrap(), "1.2.840.10008.1.2");
    }

    #[test]
    fn multi_valued_text() {
        let value = Value::from("ORIGINAL\\PRIMARY\\AXIAL ");
        assert_eq!(value.multiplicity(), 3);
        assert_eq!(
            value.to_multi_str().unwrap(),
            vec!["ORIGINAL", "PRIMARY", "AXIAL"]
        );
        assert_eq!(Value::from("  ").multiplicity(), 0);
    }

    #[test]
    fn integer_strings_convert() {
        let value = Value::from(" 512\\-3 ");
        assert_eq!(value.to_int().unwrap(), 512);
        assert_eq!(value.to_multi_int().unwrap(), vec![512, -3]);

        let bad = Value::from("12a");
        let err = bad.to_int().unwrap_err();
        assert_eq!(err.original, ValueType::Text);
        assert!(matches!(
            err.cause,
            Some(InvalidValueReadError::ParseInteger { .. })
        ));
    }

    #[test]
    fn numbers_convert() {
        let value = Value::Int(smallvec![16, 32]);
        assert_eq!(value.to_int().unwrap(), 16);
        assert_eq!(value.to_float64().unwrap(), 16.0);
        assert_eq!(value.to_str().unwrap(), "16\\32");
        assert_eq!(value.ints().unwrap(), &[16, 32]);

        let ds = Value::from("0.5\\0.25");
        assert_eq!(ds.to_float64().unwrap(), 0.5);

        let float = Value::Float(smallvec![1.5]);
        assert_eq!(float.floats().unwrap(), &[1.5]);
    }

    #[test]
    fn bad_casts_are_reported() {
        let blob = Value::Binary(vec![1, 2, 3]);
        assert_eq!(blob.binary().unwrap(), &[1, 2, 3]);
        assert_eq!(blob.multiplicity(), 1);
        assert_eq!(
            blob.ints(),
            Err(CastValueError {
                requested: "integer",
                got: ValueType::Binary,
            })
        );
        assert!(blob.to_str().is_err());
        assert_eq!(
            blob.to_str().unwrap_err().to_string(),
            "could not convert binary to a string"
        );
        assert!(Value::Empty.items().is_none());
    }

    #[test]
    fn sequences_have_items() {
        let value = Value::Sequence(vec![DataSet::new(), DataSet::new()]);
        assert_eq!(value.items().map(|items| items.len()), Some(2));
        assert_eq!(value.multiplicity(), 2);
        assert_eq!(value.value_type(), ValueType::Sequence);
    }
}
