use columnvec::{DenseVector, Element, IndexedElement, RepeatedElement, SparseVector, Vector, VectorError};
use rand::SeedableRng;

#[test]
fn test_element_family() {
    let element = Element::new(2.5f64);
    assert_eq!(element.value, 2.5);

    let indexed = IndexedElement::new(3, 2.5f64);
    assert_eq!((indexed.index, indexed.value), (3, 2.5));

    // The sentinel signals "not found"
    let sentinel = IndexedElement::<f64>::default_sentinel();
    assert_eq!(sentinel.index, -1);
    assert_eq!(sentinel.value, 0.0);

    let repeated = RepeatedElement::new(4, 3, 1.0f64);
    assert_eq!((repeated.index, repeated.count, repeated.value), (4, 3, 1.0));
}

#[test]
fn test_dense_vector_basics() {
    let v = DenseVector::new(vec![1.0, 0.0, 0.0, 2.0, 0.0]);

    assert_eq!(v.len(), 5);
    assert_eq!(v.non_zero_count(), 2);
    assert_eq!(v.get(0).unwrap(), 1.0);
    assert_eq!(v.get(3).unwrap(), 2.0);
    assert_eq!(v.get(4).unwrap(), 0.0);
    assert!((v.sparsity() - 0.4).abs() < 1e-12);

    // Out-of-range access fails
    let err = v.get(5).unwrap_err();
    assert!(matches!(err, VectorError::IndexOutOfRange { index: 5, count: 5 }));
}

#[test]
fn test_dense_vector_iteration() {
    let v = DenseVector::new(vec![1.0, 0.0, 3.0]);

    let all: Vec<f64> = v.values_only(true).collect();
    assert_eq!(all, vec![1.0, 0.0, 3.0]);

    let non_zero: Vec<f64> = v.values_only(false).collect();
    assert_eq!(non_zero, vec![1.0, 3.0]);

    let indexed: Vec<_> = v.indexed_elements(false).collect();
    assert_eq!(indexed, vec![
        IndexedElement::new(0, 1.0),
        IndexedElement::new(2, 3.0),
    ]);

    // Iterators are restartable
    let again: Vec<f64> = v.values_only(true).collect();
    assert_eq!(again, all);
}

#[test]
fn test_dense_to_sparse_conversion() {
    let v = DenseVector::new(vec![1.0, 0.0, 0.0, 2.0, 0.0]);
    let sparse = v.to_sparse();

    assert_eq!(sparse.len(), 5);
    assert_eq!(sparse.non_zero_count(), 2);
    assert_eq!(sparse.elements(), &[
        IndexedElement::new(0, 1.0),
        IndexedElement::new(3, 2.0),
    ]);
}

#[test]
fn test_sparse_vector_from_dense_values() {
    let sparse = SparseVector::from_dense_values(vec![0.0, 3.0, 0.0, 0.0, 4.0]);

    assert_eq!(sparse.len(), 5);
    assert_eq!(sparse.non_zero_count(), 2);
    assert_eq!(sparse.get(1).unwrap(), 3.0);
    assert_eq!(sparse.get(4).unwrap(), 4.0);
    assert_eq!(sparse.get(0).unwrap(), 0.0);
    assert_eq!(sparse.get(2).unwrap(), 0.0);

    let err = sparse.get(5).unwrap_err();
    assert!(matches!(err, VectorError::IndexOutOfRange { index: 5, count: 5 }));
}

#[test]
fn test_sparse_constructor_restores_invariants() {
    // Unsorted, zero-contaminated input must come out sorted and zero-elided
    let sparse = SparseVector::new(
        10,
        vec![
            IndexedElement::new(7, 2.0),
            IndexedElement::new(3, 0.0),
            IndexedElement::new(1, 5.0),
            IndexedElement::new(4, 0.0),
        ],
    )
    .unwrap();

    assert_eq!(sparse.len(), 10);
    assert_eq!(sparse.elements(), &[
        IndexedElement::new(1, 5.0),
        IndexedElement::new(7, 2.0),
    ]);
}

#[test]
fn test_sparse_constructor_rejects_bad_elements() {
    let duplicate = SparseVector::new(
        5,
        vec![IndexedElement::new(2, 1.0), IndexedElement::new(2, 3.0)],
    );
    assert!(matches!(duplicate, Err(VectorError::InvalidElement(_))));

    let negative = SparseVector::new(5, vec![IndexedElement::new(-2, 1.0)]);
    assert!(matches!(negative, Err(VectorError::InvalidElement(_))));

    let out_of_range = SparseVector::new(5, vec![IndexedElement::new(5, 1.0)]);
    assert!(matches!(
        out_of_range,
        Err(VectorError::IndexOutOfRange { index: 5, count: 5 })
    ));
}

#[test]
fn test_sparse_densification() {
    let sparse = SparseVector::new(
        6,
        vec![IndexedElement::new(1, 3.0), IndexedElement::new(4, 4.0)],
    )
    .unwrap();

    let dense_values: Vec<f64> = sparse.values_only(true).collect();
    assert_eq!(dense_values, vec![0.0, 3.0, 0.0, 0.0, 4.0, 0.0]);

    let stored: Vec<f64> = sparse.values_only(false).collect();
    assert_eq!(stored, vec![3.0, 4.0]);

    let indexed_all: Vec<_> = sparse.indexed_elements(true).collect();
    assert_eq!(indexed_all.len(), 6);
    assert_eq!(indexed_all[0], IndexedElement::new(0, 0.0));
    assert_eq!(indexed_all[1], IndexedElement::new(1, 3.0));
    assert_eq!(indexed_all[5], IndexedElement::new(5, 0.0));
}

#[test]
fn test_sparse_dense_round_trip() {
    // Sparse(Dense(v)) densified reproduces v exactly
    let original = vec![0.0, 1.5, 0.0, 0.0, -2.5, 0.0, 7.0];
    let dense = DenseVector::new(original.clone());
    let round_tripped: Vec<f64> = dense.to_sparse().values_only(true).collect();
    assert_eq!(round_tripped, original);

    // Trailing and leading zeros survive through the logical length
    let zeros_at_edges = vec![0.0, 0.0, 3.0, 0.0, 0.0];
    let sparse = SparseVector::from_dense_values(zeros_at_edges.clone());
    assert_eq!(sparse.len(), 5);
    let back: Vec<f64> = sparse.values_only(true).collect();
    assert_eq!(back, zeros_at_edges);
}

#[test]
fn test_vector_enum_dispatch() {
    let dense: Vector<f64> = DenseVector::new(vec![1.0, 0.0, 2.0]).into();
    let sparse: Vector<f64> = SparseVector::from_dense_values(vec![1.0, 0.0, 2.0]).into();

    assert_eq!(dense.len(), sparse.len());
    assert_eq!(dense.non_zero_count(), sparse.non_zero_count());
    assert_eq!(dense.get(2).unwrap(), sparse.get(2).unwrap());

    assert_eq!(dense.to_sparse(), sparse.to_sparse());
    assert_eq!(dense.to_dense(), sparse.to_dense());
}

#[test]
fn test_empty_vectors() {
    let dense: DenseVector<f64> = DenseVector::new(vec![]);
    assert!(dense.is_empty());
    assert_eq!(dense.sparsity(), 1.0);

    let sparse = dense.to_sparse();
    assert!(sparse.is_empty());
    assert_eq!(sparse.non_zero_count(), 0);
    assert_eq!(sparse.values_only(true).count(), 0);
}

#[test]
fn test_generated_sparse_data_round_trips() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let values: Vec<f64> = columnvec::utils::generate_sparse_values(500, 3, &mut rng);

    let sparse = SparseVector::from_dense_values(values.clone());
    assert_eq!(sparse.len(), 500);
    let back: Vec<f64> = sparse.values_only(true).collect();
    assert_eq!(back, values);
}
