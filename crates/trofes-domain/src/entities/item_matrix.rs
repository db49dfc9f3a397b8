//! Dense item-feature matrix

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Entity: Item Matrix
///
/// Row-major table of feature vectors, one row per recipe. Every row has the
/// same dimensionality. Serialized as a list of rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ItemMatrix {
    dimensions: usize,
    rows: usize,
    data: Vec<f64>,
}

impl ItemMatrix {
    /// Build a matrix from flat row-major data
    pub fn new(dimensions: usize, data: Vec<f64>) -> Result<Self> {
        if dimensions == 0 {
            if !data.is_empty() {
                return Err(Error::shape_mismatch(
                    "at least one column",
                    "0 columns with non-empty data",
                ));
            }
            return Ok(Self::default());
        }
        if data.len() % dimensions != 0 {
            return Err(Error::shape_mismatch(
                format!("a multiple of {dimensions} values"),
                data.len(),
            ));
        }
        Ok(Self {
            dimensions,
            rows: data.len() / dimensions,
            data,
        })
    }

    /// Build a matrix from individual rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(dimensions) = rows.first().map(Vec::len) else {
            return Ok(Self::default());
        };
        let mut data = Vec::with_capacity(dimensions * rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimensions {
                return Err(Error::shape_mismatch(
                    format!("{dimensions} columns"),
                    format!("{} columns in row {i}", row.len()),
                ));
            }
            data.extend(row);
        }
        Self::new(dimensions, data)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Length of every row
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Whether the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row at `position`
    pub fn row(&self, position: usize) -> Option<&[f64]> {
        if position >= self.rows {
            return None;
        }
        let start = position * self.dimensions;
        Some(&self.data[start..start + self.dimensions])
    }

    /// Rows at the given positions, in the given order
    pub fn select_rows(&self, positions: &[usize]) -> Result<Vec<&[f64]>> {
        positions
            .iter()
            .map(|&p| {
                self.row(p).ok_or_else(|| {
                    Error::shape_mismatch(format!("row < {}", self.rows), format!("row {p}"))
                })
            })
            .collect()
    }

    /// Iterate all rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).filter_map(move |i| self.row(i))
    }
}

impl TryFrom<Vec<Vec<f64>>> for ItemMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<ItemMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ItemMatrix) -> Self {
        matrix.iter_rows().map(<[f64]>::to_vec).collect()
    }
}
