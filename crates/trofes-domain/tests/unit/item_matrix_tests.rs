//! Tests for the dense item matrix

use trofes_domain::Error;
use trofes_domain::entities::ItemMatrix;

#[test]
fn test_from_rows() {
    let matrix = ItemMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("valid matrix");
    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.dimensions(), 2);
    assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
    assert_eq!(matrix.row(3), None);
}

#[test]
fn test_ragged_rows_rejected() {
    let result = ItemMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_flat_data_must_fill_rows() {
    assert!(ItemMatrix::new(3, vec![1.0; 7]).is_err());
    let matrix = ItemMatrix::new(3, vec![1.0; 9]).unwrap();
    assert_eq!(matrix.rows(), 3);
}

#[test]
fn test_empty_matrix() {
    let matrix = ItemMatrix::from_rows(Vec::new()).unwrap();
    assert!(matrix.is_empty());
    assert_eq!(matrix.iter_rows().count(), 0);
}

#[test]
fn test_select_rows_keeps_order() {
    let matrix = ItemMatrix::from_rows(vec![vec![0.0], vec![1.0], vec![2.0]]).unwrap();
    let rows = matrix.select_rows(&[2, 0]).unwrap();
    assert_eq!(rows, vec![&[2.0][..], &[0.0][..]]);
    assert!(matrix.select_rows(&[5]).is_err());
}

#[test]
fn test_deserialize_from_nested_lists() {
    let matrix: ItemMatrix = serde_json::from_str("[[1, 0], [0, 1]]").unwrap();
    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.row(1), Some(&[0.0, 1.0][..]));

    let ragged = serde_json::from_str::<ItemMatrix>("[[1, 0], [0]]");
    assert!(ragged.is_err());
}
