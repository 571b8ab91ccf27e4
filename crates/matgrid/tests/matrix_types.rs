//! Integration tests for Matrix construction, reshape, transpose, equality
//! and addition.

use std::num::Wrapping;

use matgrid::{Dimensions, Matrix, MatrixError};

fn m(rows: usize, cols: usize, data: Vec<u32>) -> Matrix<u32> {
    Matrix::from_shape_vec((rows, cols), data).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_matrix_has_declared_shape() {
    let a: Matrix<u32> = Matrix::new(2, 3);
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.dimensions(), Dimensions::new(2, 3));
    assert_eq!(a.size(), 6);
}

#[test]
fn zeros_matches_default() {
    let a: Matrix<f64> = Matrix::zeros(3, 2);
    assert_eq!(a, Matrix::new(3, 2));
}

#[test]
fn from_shape_vec_mismatch_errors() {
    let result = Matrix::<f32>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        MatrixError::ShapeError {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
}

#[test]
fn from_shape_vec_overflowing_shape_errors() {
    let rows = usize::MAX / 2 + 1;
    let err = Matrix::<u32>::from_shape_vec((rows, 2), Vec::new()).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ShapeError {
            rows,
            cols: 2,
            len: 0
        }
    );
}

#[test]
fn with_store_rejects_overflowing_shape() {
    let store: Vec<Vec<u32>> = vec![Vec::new(), Vec::new(), Vec::new()];
    let err = Matrix::with_store(store, Dimensions::new(3, usize::MAX)).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ShapeError {
            rows: 3,
            cols: usize::MAX,
            len: 0
        }
    );
}

#[test]
fn from_rows_infers_shape() {
    let a = Matrix::from_rows(vec![vec![3, 6, 5], vec![7, 9, 2]]).unwrap();
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.row(1), &[7, 9, 2]);
}

#[test]
fn from_rows_rejects_ragged_store() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InconsistentStore {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn with_store_rejects_wrong_row_count() {
    let err = Matrix::with_store(vec![vec![1u32, 2]], Dimensions::new(2, 2)).unwrap_err();
    assert!(matches!(err, MatrixError::ShapeError { rows: 2, cols: 2, .. }));
}

#[test]
fn from_rows_of_nothing_is_degenerate() {
    let a = Matrix::<u32>::from_rows(Vec::new()).unwrap();
    assert_eq!(a.shape(), (0, 0));
    assert!(a.is_empty());
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn indexing_is_row_major() {
    let a = m(2, 2, vec![1, 2, 3, 4]);
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(a[(0, 1)], 2);
    assert_eq!(a[(1, 0)], 3);
    assert_eq!(a[(1, 1)], 4);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_past_last_column_panics() {
    let a = m(2, 2, vec![1, 2, 3, 4]);
    let _ = a[(0, 2)];
}

#[test]
fn get_is_checked() {
    let mut a = m(2, 2, vec![1, 2, 3, 4]);
    assert_eq!(a.get(1, 1), Some(&4));
    assert_eq!(a.get(0, 2), None);
    *a.get_mut(0, 1).unwrap() = 20;
    assert_eq!(a[(0, 1)], 20);
}

#[test]
fn try_row_reports_bounds() {
    let a = m(1, 2, vec![1, 2]);
    assert_eq!(a.try_row(0).unwrap(), &[1, 2]);
    assert_eq!(
        a.try_row(1).unwrap_err(),
        MatrixError::RowOutOfBounds { row: 1, rows: 1 }
    );
}

#[test]
fn rows_iterate_top_to_bottom() {
    let a = m(3, 2, vec![1, 2, 3, 4, 5, 6]);
    let rows: Vec<&[u32]> = a.rows().collect();
    assert_eq!(rows, vec![&[1u32, 2][..], &[3, 4][..], &[5, 6][..]]);
    assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn rows_of_zero_width_matrix_are_empty() {
    let a: Matrix<u32> = Matrix::new(3, 0);
    assert_eq!(a.rows().count(), 3);
    assert!(a.rows().all(|r| r.is_empty()));
}

#[test]
fn mapv_keeps_shape() {
    let a = m(2, 2, vec![1, 2, 3, 4]);
    let doubled = a.mapv(|x| f64::from(*x) * 2.0);
    assert_eq!(doubled.shape(), (2, 2));
    assert_eq!(doubled[(1, 1)], 8.0);
}

#[test]
fn fill_with_visits_every_cell_in_order() {
    let mut a: Matrix<u32> = Matrix::new(2, 3);
    let mut next = 0;
    a.fill_with(|| {
        next += 1;
        next
    });
    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);
}

// ---------------------------------------------------------------------------
// Clear / reshape
// ---------------------------------------------------------------------------

#[test]
fn clear_resets_every_cell() {
    let mut a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
    a.clear();
    assert_eq!(a.size(), 6);
    assert!(a.iter().all(|v| *v == 0));
    a.clear();
    assert_eq!(a, Matrix::new(2, 3));
}

#[test]
fn set_dimensions_grow_keeps_overlap() {
    let mut a = m(2, 2, vec![1, 2, 3, 4]);
    a.set_dimensions(3, 3);
    assert_eq!(a.size(), 9);
    assert_eq!(a.to_rows(), vec![vec![1, 2, 0], vec![3, 4, 0], vec![0, 0, 0]]);
}

#[test]
fn set_dimensions_shrink_discards() {
    let mut a = m(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    a.set_dimensions(2, 2);
    assert_eq!(a.size(), 4);
    assert_eq!(a.to_rows(), vec![vec![1, 2], vec![4, 5]]);
}

#[test]
fn set_dimensions_mixed_grow_and_shrink() {
    let mut a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
    a.set_dimensions(3, 2);
    assert_eq!(a.to_rows(), vec![vec![1, 2], vec![4, 5], vec![0, 0]]);
}

#[test]
fn set_dimensions_to_degenerate_and_back() {
    let mut a = m(2, 2, vec![1, 2, 3, 4]);
    a.set_dimensions(0, 2);
    assert_eq!(a.size(), 0);
    a.set_dimensions(2, 2);
    assert_eq!(a, Matrix::new(2, 2));
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_shape_and_cells() {
    let a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let t = a.transposed();
    assert_eq!(t.shape(), (3, 2));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(t[(j, i)], a[(i, j)]);
        }
    }
}

#[test]
fn transpose_twice_restores_matrix() {
    let a = m(3, 5, (1..=15).collect());
    let mut b = a.clone();
    b.transpose();
    assert_ne!(a, b);
    b.transpose();
    assert_eq!(a, b);
}

#[test]
fn transpose_degenerate_swaps_shape() {
    let mut a: Matrix<u32> = Matrix::new(0, 4);
    a.transpose();
    assert_eq!(a.shape(), (4, 0));
    assert_eq!(a.size(), 0);
}

#[test]
fn transpose_square_in_place() {
    let mut a = m(2, 2, vec![1, 2, 3, 4]);
    a.transpose();
    assert_eq!(a.as_slice(), &[1, 3, 2, 4]);
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn equality_is_reflexive() {
    let a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(a, a.clone());
}

#[test]
fn equality_requires_same_shape() {
    let a = m(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let b = m(3, 2, vec![1, 2, 3, 4, 5, 6]);
    assert_ne!(a, b);
    assert_ne!(Matrix::<u32>::new(0, 3), Matrix::<u32>::new(3, 0));
}

#[test]
fn equality_compares_cells() {
    let a = m(1, 2, vec![1, 2]);
    let b = m(1, 2, vec![1, 3]);
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Addition
// ---------------------------------------------------------------------------

#[test]
fn addition_is_elementwise() {
    let a = m(2, 2, vec![1, 2, 3, 4]);
    let b = m(2, 2, vec![10, 20, 30, 40]);
    let sum = (&a + &b).unwrap();
    assert_eq!(sum, m(2, 2, vec![11, 22, 33, 44]));
}

#[test]
fn addition_is_commutative_and_shape_preserving() {
    let a = m(2, 3, vec![5, 1, 9, 2, 8, 3]);
    let b = m(2, 3, vec![4, 4, 0, 7, 1, 6]);
    let ab = a.try_add(&b).unwrap();
    let ba = b.try_add(&a).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.shape(), a.shape());
}

#[test]
fn addition_rejects_mismatched_shapes() {
    let a: Matrix<u32> = Matrix::new(2, 3);
    let b: Matrix<u32> = Matrix::new(3, 2);
    let err = (&a + &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            lhs: Dimensions::new(2, 3),
            rhs: Dimensions::new(3, 2)
        }
    );
}

#[test]
fn addition_wraps_for_wrapping_elements() {
    let a = Matrix::from_shape_vec((1, 2), vec![Wrapping(u32::MAX), Wrapping(1)]).unwrap();
    let sum = a.try_add(&a).unwrap();
    assert_eq!(sum.as_slice(), &[Wrapping(u32::MAX - 1), Wrapping(2)]);
}

#[test]
fn addition_of_degenerate_matrices() {
    let a: Matrix<i64> = Matrix::new(0, 5);
    let sum = a.try_add(&a).unwrap();
    assert_eq!(sum.shape(), (0, 5));
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn copy_then_add_twice() {
    let mut a: Matrix<u32> = Matrix::new(2, 3);
    a.distribute_mono(vec![1, 2, 3, 4, 5, 6]);
    let b = a.clone();
    let c = b.clone();

    let sum = (&b + &c).unwrap();
    assert_eq!(sum.to_rows(), vec![vec![2, 4, 6], vec![8, 10, 12]]);

    let doubled = (&sum + &sum).unwrap();
    assert_eq!(doubled.to_rows(), vec![vec![4, 8, 12], vec![16, 20, 24]]);
    assert_eq!(doubled.size(), 6);

    // copies are independent
    assert_eq!(a, b);
    assert_eq!(a[(0, 0)], 1);
}
