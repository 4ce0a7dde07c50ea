use num_traits::Zero;

use crate::dense::DenseVector;
use crate::element::IndexedElement;
use crate::numeric::Numeric;
use crate::{Result, VectorError};

/// Sparse representation: stored elements sorted by strictly increasing index,
/// implicit zero everywhere else. Canonical form never stores a zero value.
/// `len` is the logical length, independent of how many elements are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T: Numeric> {
    len: usize,
    elements: Vec<IndexedElement<T>>,
}

impl<T: Numeric> SparseVector<T> {
    /// Build from an explicit `(len, elements)` pair. Callers may pass
    /// unsorted or zero-contaminated input; zeros are filtered and elements
    /// re-sorted so the invariants hold regardless. Negative, out-of-range or
    /// duplicate indices are rejected.
    pub fn new<I: IntoIterator<Item = IndexedElement<T>>>(len: usize, elements: I) -> Result<Self> {
        let mut elements: Vec<IndexedElement<T>> = elements
            .into_iter()
            .filter(|e| !e.value.is_zero())
            .collect();
        elements.sort_by_key(|e| e.index);

        for pair in elements.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(VectorError::InvalidElement(format!(
                    "Duplicate index {}",
                    pair[0].index
                )));
            }
        }
        if let Some(first) = elements.first() {
            if first.index < 0 {
                return Err(VectorError::InvalidElement(format!(
                    "Negative index {}",
                    first.index
                )));
            }
        }
        if let Some(last) = elements.last() {
            if last.index as usize >= len {
                return Err(VectorError::IndexOutOfRange {
                    index: last.index as usize,
                    count: len,
                });
            }
        }

        Ok(Self { len, elements })
    }

    /// Build from a full dense value stream: one pass, tracking a running
    /// index counter and keeping only non-zero entries.
    pub fn from_dense_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut len = 0;
        let mut elements = Vec::new();
        for value in values {
            if !value.is_zero() {
                elements.push(IndexedElement::new(len as i64, value));
            }
            len += 1;
        }
        Self { len, elements }
    }

    /// Internal trusted constructor: `elements` must already be sorted by
    /// strictly increasing in-range index with no zero values.
    pub(crate) fn from_parts(len: usize, elements: Vec<IndexedElement<T>>) -> Self {
        Self { len, elements }
    }

    /// Logical length, including implicit zeros.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn non_zero_count(&self) -> usize {
        self.elements.len()
    }

    pub fn sparsity(&self) -> f64 {
        if self.len == 0 {
            1.0
        } else {
            self.elements.len() as f64 / self.len as f64
        }
    }

    /// Binary search over the sorted storage. Zero for any in-range index
    /// without a stored element.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index,
                count: self.len,
            });
        }
        match self
            .elements
            .binary_search_by_key(&(index as i64), |e| e.index)
        {
            Ok(pos) => Ok(self.elements[pos].value),
            Err(_) => Ok(T::zero()),
        }
    }

    pub fn elements(&self) -> &[IndexedElement<T>] {
        &self.elements
    }

    /// Values in index order. With `include_zeros` true this is the expensive
    /// densification path: stored elements interleaved with zero runs for the
    /// gaps, exactly `len` items.
    pub fn values_only(&self, include_zeros: bool) -> Box<dyn Iterator<Item = T> + '_> {
        if include_zeros {
            Box::new(DensifyingIter {
                elements: &self.elements,
                next_element: 0,
                position: 0,
                len: self.len,
            })
        } else {
            Box::new(self.elements.iter().map(|e| e.value))
        }
    }

    /// Stored elements only (already sorted by index), or the full
    /// `(index, value)` stream with explicit zeros when `include_zeros` is set.
    pub fn indexed_elements(
        &self,
        include_zeros: bool,
    ) -> Box<dyn Iterator<Item = IndexedElement<T>> + '_> {
        if include_zeros {
            let densify = DensifyingIter {
                elements: &self.elements,
                next_element: 0,
                position: 0,
                len: self.len,
            };
            Box::new(
                densify
                    .enumerate()
                    .map(|(i, v)| IndexedElement::new(i as i64, v)),
            )
        } else {
            Box::new(self.elements.iter().copied())
        }
    }

    pub fn to_dense(&self) -> DenseVector<T> {
        DenseVector::from_iter(self.values_only(true))
    }
}

/// Lazy zero-elided reconstruction: walks positions 0..len, emitting the
/// stored value when the next element's index matches and zero otherwise.
struct DensifyingIter<'a, T> {
    elements: &'a [IndexedElement<T>],
    next_element: usize,
    position: usize,
    len: usize,
}

impl<T: Numeric> Iterator for DensifyingIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.position >= self.len {
            return None;
        }
        let value = match self.elements.get(self.next_element) {
            Some(e) if e.index == self.position as i64 => {
                self.next_element += 1;
                e.value
            }
            _ => T::zero(),
        };
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}
