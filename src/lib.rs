pub mod element;
pub mod numeric;
pub mod dense;
pub mod sparse;
pub mod vector;
pub mod sum;
pub mod multiply;
pub mod columnar;
pub mod serialization;
pub mod tasks;
pub mod utils;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Shape Mismatch: left count {left} != right count {right}")]
    ShapeMismatch { left: usize, right: usize },
    #[error("Index Out Of Range: index {index}, count {count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Invalid Element: {0}")]
    InvalidElement(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Unsupported Data Kind: {0}")]
    UnsupportedDataKind(String),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use element::{Element, IndexedElement, RepeatedElement};
pub use numeric::{ColumnData, ColumnType, Numeric, ScalarValue};
pub use dense::DenseVector;
pub use sparse::SparseVector;
pub use vector::Vector;
pub use sum::{sum, SumOptions};
pub use multiply::multiply;
pub use columnar::SerializerOptions;
pub use serialization::{SerializedElements, SerializedVector, DENSE_VECTOR, SPARSE_VECTOR};
pub use tasks::{
    execute_multiplication, execute_sum, DataKind, MultiplicationTask, MultiplicationTaskResult,
    SumTask, SumTaskResult, TaskOptions,
};
