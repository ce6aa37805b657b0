//! Core tuple data types for the cogroup join engine.
//!
//! This module contains the data types flowing through the join:
//! - [`FieldValue`] - the value type system carried in tuple fields
//! - [`Tuple`] - the positional, fixed-arity record joined across streams

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value in a tuple field.
///
/// Supports the scalar types produced by the surrounding pipeline plus the
/// NULL marker used both for genuinely absent data and for outer-join
/// padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value (true/false)
    Boolean(bool),
    /// NULL / absent value
    Null,
    /// Date type (YYYY-MM-DD)
    Date(NaiveDate),
    /// Timestamp type (YYYY-MM-DD HH:MM:SS[.nnn])
    Timestamp(NaiveDateTime),
    /// Decimal type for precise arithmetic
    Decimal(Decimal),
}

impl FieldValue {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the type name for error messages and logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "INTEGER",
            FieldValue::Float(_) => "FLOAT",
            FieldValue::String(_) => "STRING",
            FieldValue::Boolean(_) => "BOOLEAN",
            FieldValue::Null => "NULL",
            FieldValue::Date(_) => "DATE",
            FieldValue::Timestamp(_) => "TIMESTAMP",
            FieldValue::Decimal(_) => "DECIMAL",
        }
    }
}

/// Display implementation for FieldValue for clean string formatting
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "NULL"),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.3f")),
            FieldValue::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// An ordered, fixed-arity sequence of typed values.
///
/// Tuples are immutable once constructed and carry no identity beyond
/// structural equality. A joined output row is the concatenation of one
/// tuple (real or null-padded) per input stream, in stream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    values: Vec<FieldValue>,
}

impl Tuple {
    /// Creates a tuple from its field values.
    pub fn new(values: Vec<FieldValue>) -> Self {
        Tuple { values }
    }

    /// Creates a tuple of the given arity with every field set to NULL.
    ///
    /// This is the padding value an outer-eligible empty stream contributes
    /// to a joined row.
    pub fn null_of(arity: usize) -> Self {
        Tuple {
            values: vec![FieldValue::Null; arity],
        }
    }

    /// Number of fields in this tuple.
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Returns the field at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    /// All field values in order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Consumes the tuple, returning its field values.
    pub fn into_values(self) -> Vec<FieldValue> {
        self.values
    }

    /// Concatenates the given tuples into one, preserving order.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Tuple>) -> Tuple {
        let mut values = Vec::new();
        for part in parts {
            values.extend(part.values.iter().cloned());
        }
        Tuple { values }
    }
}

impl From<Vec<FieldValue>> for Tuple {
    fn from(values: Vec<FieldValue>) -> Self {
        Tuple::new(values)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
