use std::fmt::{Debug, Display};
use std::ops::{Add, Mul};

use num_traits::{FromPrimitive, One, Zero};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Result, VectorError};

/// Wire-level column type codes. This is the fixed primitive-to-schema lookup
/// the columnar serializer consults when framing a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    I32,
    I64,
    F32,
    F64,
    Decimal,
}

impl ColumnType {
    pub fn code(self) -> u8 {
        match self {
            ColumnType::I32 => 1,
            ColumnType::I64 => 2,
            ColumnType::F32 => 3,
            ColumnType::F64 => 4,
            ColumnType::Decimal => 5,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(ColumnType::I32),
            2 => Ok(ColumnType::I64),
            3 => Ok(ColumnType::F32),
            4 => Ok(ColumnType::F64),
            5 => Ok(ColumnType::Decimal),
            other => Err(VectorError::SerializationError(format!(
                "Unknown column type code: {}",
                other
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColumnType::I32 => "i32",
            ColumnType::I64 => "i64",
            ColumnType::F32 => "f32",
            ColumnType::F64 => "f64",
            ColumnType::Decimal => "decimal",
        }
    }
}

/// A decoded column, still in its stored element type. The reader converts it
/// into the caller's declared type, widening where the kinds allow it.
#[derive(Debug, Clone)]
pub enum ColumnData {
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Decimal(Vec<Decimal>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::I32(v) => v.len(),
            ColumnData::I64(v) => v.len(),
            ColumnData::F32(v) => v.len(),
            ColumnData::F64(v) => v.len(),
            ColumnData::Decimal(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::I32(_) => ColumnType::I32,
            ColumnData::I64(_) => ColumnType::I64,
            ColumnData::F32(_) => ColumnType::F32,
            ColumnData::F64(_) => ColumnType::F64,
            ColumnData::Decimal(_) => ColumnType::Decimal,
        }
    }
}

fn widening_error(from: ColumnType, to: ColumnType) -> VectorError {
    VectorError::SerializationError(format!(
        "Cannot decode a {} column as {}",
        from.name(),
        to.name()
    ))
}

/// A scalar produced by the multiply engine, tagged with its concrete type so
/// it survives a JSON trip intact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ScalarValue {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
}

/// Closed numeric element model: the types a vector may carry. Everything the
/// arithmetic engines and the columnar codec need from an element type.
pub trait Numeric:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Mul<Output = Self>
    + Zero
    + One
    + Debug
    + Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + 'static
{
    const COLUMN_TYPE: ColumnType;

    /// Convert a decoded column into this element type. Widening conversions
    /// (i32 -> i64, f32 -> f64, numeric -> decimal) are accepted; anything else
    /// is a serialization error.
    fn from_column(column: ColumnData) -> Result<Vec<Self>>;

    fn into_scalar(self) -> ScalarValue;
}

impl Numeric for i32 {
    const COLUMN_TYPE: ColumnType = ColumnType::I32;

    fn from_column(column: ColumnData) -> Result<Vec<Self>> {
        match column {
            ColumnData::I32(v) => Ok(v),
            other => Err(widening_error(other.column_type(), Self::COLUMN_TYPE)),
        }
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Int32(self)
    }
}

impl Numeric for i64 {
    const COLUMN_TYPE: ColumnType = ColumnType::I64;

    fn from_column(column: ColumnData) -> Result<Vec<Self>> {
        match column {
            ColumnData::I32(v) => Ok(v.into_iter().map(i64::from).collect()),
            ColumnData::I64(v) => Ok(v),
            other => Err(widening_error(other.column_type(), Self::COLUMN_TYPE)),
        }
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Int64(self)
    }
}

impl Numeric for f32 {
    const COLUMN_TYPE: ColumnType = ColumnType::F32;

    fn from_column(column: ColumnData) -> Result<Vec<Self>> {
        match column {
            ColumnData::F32(v) => Ok(v),
            other => Err(widening_error(other.column_type(), Self::COLUMN_TYPE)),
        }
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Float32(self)
    }
}

impl Numeric for f64 {
    const COLUMN_TYPE: ColumnType = ColumnType::F64;

    fn from_column(column: ColumnData) -> Result<Vec<Self>> {
        match column {
            ColumnData::F32(v) => Ok(v.into_iter().map(f64::from).collect()),
            ColumnData::F64(v) => Ok(v),
            other => Err(widening_error(other.column_type(), Self::COLUMN_TYPE)),
        }
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Float64(self)
    }
}

impl Numeric for Decimal {
    const COLUMN_TYPE: ColumnType = ColumnType::Decimal;

    fn from_column(column: ColumnData) -> Result<Vec<Self>> {
        let from = column.column_type();
        let lossy = || widening_error(from, Self::COLUMN_TYPE);
        match column {
            ColumnData::I32(v) => Ok(v.into_iter().map(Decimal::from).collect()),
            ColumnData::I64(v) => Ok(v.into_iter().map(Decimal::from).collect()),
            ColumnData::F32(v) => v
                .into_iter()
                .map(|x| Decimal::from_f32(x).ok_or_else(lossy))
                .collect(),
            ColumnData::F64(v) => v
                .into_iter()
                .map(|x| Decimal::from_f64(x).ok_or_else(lossy))
                .collect(),
            ColumnData::Decimal(v) => Ok(v),
        }
    }

    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Decimal(self)
    }
}
