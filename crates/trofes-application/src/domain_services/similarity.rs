//! Vector similarity over dense rows
//!
//! Scores are computed in parallel with rayon; output order always matches
//! candidate order.

use rayon::prelude::*;
use trofes_domain::error::{Error, Result};

/// Cosine similarity of `query` against every candidate row
///
/// Scores lie in `[-1, 1]`. A zero-norm query or row scores `0.0`.
pub fn cosine_similarity(query: &[f64], candidates: &[&[f64]]) -> Result<Vec<f64>> {
    ensure_dimensions(query, candidates)?;
    let query_norm = l2_norm(query);
    Ok(candidates
        .par_iter()
        .map(|row| cosine_similarity_with_norm(query, row, query_norm))
        .collect())
}

/// Euclidean (L2) distance of `query` to every candidate row
pub fn euclidean_distance(query: &[f64], candidates: &[&[f64]]) -> Result<Vec<f64>> {
    ensure_dimensions(query, candidates)?;
    Ok(candidates
        .par_iter()
        .map(|row| {
            query
                .iter()
                .zip(row.iter())
                .map(|(q, r)| (q - r) * (q - r))
                .sum::<f64>()
                .sqrt()
        })
        .collect())
}

/// Positions of `scores` ordered from highest to lowest
///
/// Equal scores keep their input order.
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Positions of `scores` ordered from lowest to highest
///
/// Equal scores keep their input order.
pub fn rank_ascending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    order
}

fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn cosine_similarity_with_norm(a: &[f64], b: &[f64], norm_a: f64) -> f64 {
    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = l2_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

fn ensure_dimensions(query: &[f64], candidates: &[&[f64]]) -> Result<()> {
    match candidates.iter().find(|row| row.len() != query.len()) {
        Some(row) => Err(Error::shape_mismatch(
            format!("{} features", query.len()),
            format!("{} features", row.len()),
        )),
        None => Ok(()),
    }
}
