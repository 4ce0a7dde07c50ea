use ndarray::Array1;
use num_traits::Zero;

use crate::element::IndexedElement;
use crate::numeric::Numeric;
use crate::sparse::SparseVector;
use crate::{Result, VectorError};

/// Dense representation: every position 0..len holds a value, explicit zeros
/// included. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T: Numeric> {
    values: Array1<T>,
}

impl<T: Numeric> DenseVector<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values: Array1::from_vec(values),
        }
    }

    pub fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Logical length, which for a dense vector is also the stored length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(VectorError::IndexOutOfRange {
                index,
                count: self.len(),
            });
        }
        Ok(self.values[index])
    }

    pub fn non_zero_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }

    /// Share of stored positions that are non-zero. Derived, not stored.
    pub fn sparsity(&self) -> f64 {
        if self.is_empty() {
            1.0
        } else {
            self.non_zero_count() as f64 / self.len() as f64
        }
    }

    /// Values in index order. With `include_zeros` false, zero entries are
    /// filtered out; order is preserved either way.
    pub fn values_only(&self, include_zeros: bool) -> Box<dyn Iterator<Item = T> + '_> {
        if include_zeros {
            Box::new(self.values.iter().copied())
        } else {
            Box::new(self.values.iter().copied().filter(|v| !v.is_zero()))
        }
    }

    /// Each surviving value paired with its original index.
    pub fn indexed_elements(
        &self,
        include_zeros: bool,
    ) -> Box<dyn Iterator<Item = IndexedElement<T>> + '_> {
        let elements = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| IndexedElement::new(i as i64, *v));
        if include_zeros {
            Box::new(elements)
        } else {
            Box::new(elements.filter(|e| !e.value.is_zero()))
        }
    }

    /// One scan over the values, dropping zeros from storage while keeping the
    /// logical length.
    pub fn to_sparse(&self) -> SparseVector<T> {
        SparseVector::from_dense_values(self.values.iter().copied())
    }

    pub(crate) fn values(&self) -> &Array1<T> {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.values.to_vec()
    }
}

impl<T: Numeric> From<Vec<T>> for DenseVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
