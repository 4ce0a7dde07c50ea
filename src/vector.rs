use crate::dense::DenseVector;
use crate::numeric::Numeric;
use crate::sparse::SparseVector;
use crate::Result;

/// Closed set of vector representations. The arithmetic engines dispatch by
/// matching on both operands, so adding a representation is a compile error
/// until every combination is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Vector<T: Numeric> {
    Dense(DenseVector<T>),
    Sparse(SparseVector<T>),
}

impl<T: Numeric> Vector<T> {
    /// Logical length.
    pub fn len(&self) -> usize {
        match self {
            Vector::Dense(v) => v.len(),
            Vector::Sparse(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn non_zero_count(&self) -> usize {
        match self {
            Vector::Dense(v) => v.non_zero_count(),
            Vector::Sparse(v) => v.non_zero_count(),
        }
    }

    pub fn sparsity(&self) -> f64 {
        match self {
            Vector::Dense(v) => v.sparsity(),
            Vector::Sparse(v) => v.sparsity(),
        }
    }

    pub fn get(&self, index: usize) -> Result<T> {
        match self {
            Vector::Dense(v) => v.get(index),
            Vector::Sparse(v) => v.get(index),
        }
    }

    pub fn to_dense(&self) -> DenseVector<T> {
        match self {
            Vector::Dense(v) => v.clone(),
            Vector::Sparse(v) => v.to_dense(),
        }
    }

    pub fn to_sparse(&self) -> SparseVector<T> {
        match self {
            Vector::Dense(v) => v.to_sparse(),
            Vector::Sparse(v) => v.clone(),
        }
    }
}

impl<T: Numeric> From<DenseVector<T>> for Vector<T> {
    fn from(v: DenseVector<T>) -> Self {
        Vector::Dense(v)
    }
}

impl<T: Numeric> From<SparseVector<T>> for Vector<T> {
    fn from(v: SparseVector<T>) -> Self {
        Vector::Sparse(v)
    }
}
