//! Tests for vector similarity utilities

use trofes_application::domain_services::{
    cosine_similarity, euclidean_distance, rank_ascending, rank_descending,
};
use trofes_domain::Error;

const EPSILON: f64 = 1e-9;

#[test]
fn test_cosine_of_vector_with_itself_is_one() {
    let v = [0.3, -1.2, 4.0, 0.5];
    let scores = cosine_similarity(&v, &[&v]).unwrap();
    assert!((scores[0] - 1.0).abs() < EPSILON);
}

#[test]
fn test_cosine_orthogonal_and_opposite() {
    let q = [1.0, 0.0];
    let scores = cosine_similarity(&q, &[&[0.0, 2.0], &[-3.0, 0.0]]).unwrap();
    assert!(scores[0].abs() < EPSILON);
    assert!((scores[1] + 1.0).abs() < EPSILON);
}

#[test]
fn test_cosine_zero_norm_scores_zero() {
    let scores = cosine_similarity(&[0.0, 0.0], &[&[1.0, 1.0]]).unwrap();
    assert_eq!(scores, vec![0.0]);
    let scores = cosine_similarity(&[1.0, 1.0], &[&[0.0, 0.0]]).unwrap();
    assert_eq!(scores, vec![0.0]);
}

#[test]
fn test_euclidean_of_vector_with_itself_is_zero() {
    let v = [2.0, 7.5, -1.0];
    let distances = euclidean_distance(&v, &[&v]).unwrap();
    assert!(distances[0].abs() < EPSILON);
}

#[test]
fn test_euclidean_known_distance() {
    let distances = euclidean_distance(&[0.0, 0.0], &[&[3.0, 4.0], &[1.0, 0.0]]).unwrap();
    assert!((distances[0] - 5.0).abs() < EPSILON);
    assert!((distances[1] - 1.0).abs() < EPSILON);
}

#[test]
fn test_empty_candidate_set() {
    assert!(cosine_similarity(&[1.0], &[]).unwrap().is_empty());
    assert!(euclidean_distance(&[1.0], &[]).unwrap().is_empty());
}

#[test]
fn test_dimension_mismatch_is_rejected() {
    let result = cosine_similarity(&[1.0, 0.0], &[&[1.0, 0.0, 0.0]]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    let result = euclidean_distance(&[1.0], &[&[1.0, 2.0]]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_scores_keep_candidate_order() {
    let rows: Vec<Vec<f64>> = (0..500).map(|i| vec![f64::from(i), 0.0]).collect();
    let refs: Vec<&[f64]> = rows.iter().map(Vec::as_slice).collect();
    let distances = euclidean_distance(&[0.0, 0.0], &refs).unwrap();
    for (i, d) in distances.iter().enumerate() {
        assert!((d - i as f64).abs() < EPSILON);
    }
}

#[test]
fn test_ranking_is_stable_for_ties() {
    let scores = [0.5, 0.9, 0.5, 0.1];
    assert_eq!(rank_descending(&scores), vec![1, 0, 2, 3]);
    assert_eq!(rank_ascending(&scores), vec![3, 0, 2, 1]);
}
