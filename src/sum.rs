use num_traits::Zero;
use rayon::prelude::*;

use crate::dense::DenseVector;
use crate::element::IndexedElement;
use crate::numeric::Numeric;
use crate::sparse::SparseVector;
use crate::vector::Vector;
use crate::{Result, VectorError};

/// Strategy thresholds for the sum engine. Purely a performance policy: every
/// strategy produces the same observable output.
#[derive(Debug, Clone)]
pub struct SumOptions {
    /// Logical length at which dense+dense switches to the partitioned scan.
    pub dense_parallel_threshold: usize,
    /// Logical length at which sparse+sparse switches to the grouped variant.
    pub sparse_parallel_threshold: usize,
}

impl Default for SumOptions {
    fn default() -> Self {
        Self {
            dense_parallel_threshold: 1_000_000,
            sparse_parallel_threshold: 1_000_000,
        }
    }
}

fn check_shapes(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(VectorError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Element-wise addition over any representation pair. Dense + anything yields
/// a dense result; sparse + sparse stays sparse.
pub fn sum<T: Numeric>(l: &Vector<T>, r: &Vector<T>, options: &SumOptions) -> Result<Vector<T>> {
    match (l, r) {
        (Vector::Dense(a), Vector::Dense(b)) => sum_dense(a, b, options).map(Vector::Dense),
        (Vector::Dense(a), Vector::Sparse(b)) => sum_dense_sparse(a, b).map(Vector::Dense),
        (Vector::Sparse(a), Vector::Dense(b)) => sum_dense_sparse(b, a).map(Vector::Dense),
        (Vector::Sparse(a), Vector::Sparse(b)) => sum_sparse(a, b, options).map(Vector::Sparse),
    }
}

pub fn sum_dense<T: Numeric>(
    l: &DenseVector<T>,
    r: &DenseVector<T>,
    options: &SumOptions,
) -> Result<DenseVector<T>> {
    if l.len() >= options.dense_parallel_threshold {
        tracing::debug!(len = l.len(), "dense sum: partitioned scan");
        sum_dense_par(l, r)
    } else {
        sum_dense_seq(l, r)
    }
}

/// Sequential elementwise scan.
pub fn sum_dense_seq<T: Numeric>(l: &DenseVector<T>, r: &DenseVector<T>) -> Result<DenseVector<T>> {
    check_shapes(l.len(), r.len())?;
    let values: Vec<T> = l
        .values()
        .iter()
        .zip(r.values().iter())
        .map(|(a, b)| *a + *b)
        .collect();
    Ok(DenseVector::new(values))
}

/// Partitioned scan across worker threads; joins before returning.
pub fn sum_dense_par<T: Numeric>(l: &DenseVector<T>, r: &DenseVector<T>) -> Result<DenseVector<T>> {
    check_shapes(l.len(), r.len())?;
    let lv = l.values();
    let rv = r.values();
    let values: Vec<T> = (0..l.len()).into_par_iter().map(|i| lv[i] + rv[i]).collect();
    Ok(DenseVector::new(values))
}

/// Dense + sparse without densifying the sparse side: copy the dense values,
/// then fold the stored elements in at their indices.
pub fn sum_dense_sparse<T: Numeric>(
    l: &DenseVector<T>,
    r: &SparseVector<T>,
) -> Result<DenseVector<T>> {
    check_shapes(l.len(), r.len())?;
    let mut values = l.to_vec();
    for element in r.elements() {
        let index = element.index as usize;
        values[index] = values[index] + element.value;
    }
    Ok(DenseVector::new(values))
}

pub fn sum_sparse<T: Numeric>(
    l: &SparseVector<T>,
    r: &SparseVector<T>,
    options: &SumOptions,
) -> Result<SparseVector<T>> {
    if l.len() >= options.sparse_parallel_threshold {
        tracing::debug!(len = l.len(), "sparse sum: grouped variant");
        sum_sparse_grouped(l, r)
    } else {
        sum_sparse_sorted(l, r)
    }
}

/// Sorted merge-union over both operands' stored elements: O(nnz_l + nnz_r).
/// Sums landing exactly on zero are dropped so the result stays canonical.
pub fn sum_sparse_sorted<T: Numeric>(
    l: &SparseVector<T>,
    r: &SparseVector<T>,
) -> Result<SparseVector<T>> {
    check_shapes(l.len(), r.len())?;

    // Identity short-circuit: an all-zero operand contributes nothing.
    if l.non_zero_count() == 0 {
        return Ok(r.clone());
    }
    if r.non_zero_count() == 0 {
        return Ok(l.clone());
    }

    let le = l.elements();
    let re = r.elements();
    let mut elements =
        Vec::with_capacity(l.len().min(l.non_zero_count() + r.non_zero_count()));

    let mut i = 0;
    let mut j = 0;
    while i < le.len() && j < re.len() {
        match le[i].index.cmp(&re[j].index) {
            std::cmp::Ordering::Equal => {
                let value = le[i].value + re[j].value;
                if !value.is_zero() {
                    elements.push(IndexedElement::new(le[i].index, value));
                }
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                elements.push(le[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                elements.push(re[j]);
                j += 1;
            }
        }
    }
    // One side is exhausted; drain the other unchanged.
    elements.extend_from_slice(&le[i..]);
    elements.extend_from_slice(&re[j..]);

    Ok(SparseVector::from_parts(l.len(), elements))
}

/// Group-by-index alternative: concatenate both element streams, sort in
/// parallel, then fold adjacent equal-index runs. Slower than the merge in the
/// worst case but parallelizable; output is identical.
pub fn sum_sparse_grouped<T: Numeric>(
    l: &SparseVector<T>,
    r: &SparseVector<T>,
) -> Result<SparseVector<T>> {
    check_shapes(l.len(), r.len())?;

    let mut combined =
        Vec::with_capacity(l.non_zero_count() + r.non_zero_count());
    combined.extend_from_slice(l.elements());
    combined.extend_from_slice(r.elements());
    combined.par_sort_unstable_by_key(|e: &IndexedElement<T>| e.index);

    let mut elements = Vec::with_capacity(combined.len());
    let mut pending: Option<IndexedElement<T>> = None;
    for element in combined {
        match pending {
            Some(current) if current.index == element.index => {
                pending = Some(IndexedElement::new(
                    current.index,
                    current.value + element.value,
                ));
            }
            Some(current) => {
                if !current.value.is_zero() {
                    elements.push(current);
                }
                pending = Some(element);
            }
            None => pending = Some(element),
        }
    }
    if let Some(current) = pending {
        if !current.value.is_zero() {
            elements.push(current);
        }
    }

    Ok(SparseVector::from_parts(l.len(), elements))
}
