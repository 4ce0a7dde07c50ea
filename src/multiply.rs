use num_traits::Zero;

use crate::dense::DenseVector;
use crate::numeric::Numeric;
use crate::sparse::SparseVector;
use crate::vector::Vector;
use crate::{Result, VectorError};

fn check_shapes(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(VectorError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Dot product over any representation pair. Returns a scalar of the element
/// type; shape mismatch is the only failure.
pub fn multiply<T: Numeric>(l: &Vector<T>, r: &Vector<T>) -> Result<T> {
    match (l, r) {
        (Vector::Dense(a), Vector::Dense(b)) => multiply_dense(a, b),
        (Vector::Dense(a), Vector::Sparse(b)) => multiply_dense_sparse(a, b),
        (Vector::Sparse(a), Vector::Dense(b)) => multiply_dense_sparse(b, a),
        (Vector::Sparse(a), Vector::Sparse(b)) => multiply_sparse(a, b),
    }
}

/// Full positional multiply-accumulate.
pub fn multiply_dense<T: Numeric>(l: &DenseVector<T>, r: &DenseVector<T>) -> Result<T> {
    check_shapes(l.len(), r.len())?;
    let product = l
        .values()
        .iter()
        .zip(r.values().iter())
        .fold(T::zero(), |acc, (a, b)| acc + *a * *b);
    Ok(product)
}

/// Only the sparse side's stored elements can contribute; every other
/// position multiplies by zero.
pub fn multiply_dense_sparse<T: Numeric>(l: &DenseVector<T>, r: &SparseVector<T>) -> Result<T> {
    check_shapes(l.len(), r.len())?;
    let mut acc = T::zero();
    for element in r.elements() {
        acc = acc + l.values()[element.index as usize] * element.value;
    }
    Ok(acc)
}

/// Merge-intersect keyed by index: only indices stored on both sides
/// contribute to the product.
pub fn multiply_sparse<T: Numeric>(l: &SparseVector<T>, r: &SparseVector<T>) -> Result<T> {
    check_shapes(l.len(), r.len())?;
    let le = l.elements();
    let re = r.elements();

    let mut acc = T::zero();
    let mut i = 0;
    let mut j = 0;
    while i < le.len() && j < re.len() {
        match le[i].index.cmp(&re[j].index) {
            std::cmp::Ordering::Equal => {
                acc = acc + le[i].value * re[j].value;
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    Ok(acc)
}
