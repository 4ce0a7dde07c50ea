use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::columnar::SerializerOptions;
use crate::multiply::multiply;
use crate::numeric::{Numeric, ScalarValue};
use crate::serialization::SerializedVector;
use crate::sum::{sum, SumOptions};
use crate::{Result, VectorError};

/// Declared numeric kind of a task operand. Promotion picks the kind with the
/// larger ordinal, which is exactly the declaration order here; this ordinal
/// rule is the observable contract, not a precision-based one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataKind {
    Unknown,
    Float32,
    Float64,
    Decimal,
}

impl DataKind {
    pub fn promote(l: DataKind, r: DataKind) -> DataKind {
        l.max(r)
    }
}

/// Options threaded through task execution; no process-wide defaults.
#[derive(Debug, Clone, Default)]
pub struct TaskOptions {
    pub serializer: SerializerOptions,
    pub sum: SumOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumTask {
    pub left_vector: SerializedVector,
    pub right_vector: SerializedVector,
    pub left_data_kind: DataKind,
    pub right_data_kind: DataKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumTaskResult {
    pub vector: SerializedVector,
    pub data_kind: DataKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplicationTask {
    pub left_vector: SerializedVector,
    pub right_vector: SerializedVector,
    pub left_data_kind: DataKind,
    pub right_data_kind: DataKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplicationTaskResult {
    pub value: ScalarValue,
    pub data_kind: DataKind,
}

fn run_sum<T: Numeric>(
    task: &SumTask,
    data_kind: DataKind,
    options: &TaskOptions,
) -> Result<SumTaskResult> {
    let l = task.left_vector.deserialize::<T>()?;
    let r = task.right_vector.deserialize::<T>()?;
    let result = sum(&l, &r, &options.sum)?;
    Ok(SumTaskResult {
        vector: result.serialize(&options.serializer)?,
        data_kind,
    })
}

/// Deserialize both operands as the promoted kind, sum, and re-serialize.
/// The result envelope's type name reflects the concrete output
/// representation chosen by the summing algorithm.
pub fn execute_sum(task: &SumTask, options: &TaskOptions) -> Result<SumTaskResult> {
    let data_kind = DataKind::promote(task.left_data_kind, task.right_data_kind);
    tracing::debug!(?data_kind, "executing sum task");
    match data_kind {
        DataKind::Unknown => Err(VectorError::UnsupportedDataKind("Unknown".to_string())),
        DataKind::Float32 => run_sum::<f32>(task, data_kind, options),
        DataKind::Float64 => run_sum::<f64>(task, data_kind, options),
        DataKind::Decimal => run_sum::<Decimal>(task, data_kind, options),
    }
}

fn run_multiplication<T: Numeric>(
    task: &MultiplicationTask,
    data_kind: DataKind,
) -> Result<MultiplicationTaskResult> {
    let l = task.left_vector.deserialize::<T>()?;
    let r = task.right_vector.deserialize::<T>()?;
    let value = multiply(&l, &r)?;
    Ok(MultiplicationTaskResult {
        value: value.into_scalar(),
        data_kind,
    })
}

/// Deserialize both operands as the promoted kind and compute the dot product.
pub fn execute_multiplication(
    task: &MultiplicationTask,
    _options: &TaskOptions,
) -> Result<MultiplicationTaskResult> {
    let data_kind = DataKind::promote(task.left_data_kind, task.right_data_kind);
    tracing::debug!(?data_kind, "executing multiplication task");
    match data_kind {
        DataKind::Unknown => Err(VectorError::UnsupportedDataKind("Unknown".to_string())),
        DataKind::Float32 => run_multiplication::<f32>(task, data_kind),
        DataKind::Float64 => run_multiplication::<f64>(task, data_kind),
        DataKind::Decimal => run_multiplication::<Decimal>(task, data_kind),
    }
}
