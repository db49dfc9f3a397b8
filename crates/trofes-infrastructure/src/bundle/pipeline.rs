//! Fitted column pipeline
//!
//! Applies one fitted encoder per input column and concatenates the encoded
//! outputs, each scaled by its column weight. Parameters are learned offline;
//! nothing here refits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trofes_domain::error::{Error, Result};
use trofes_domain::ports::FeatureTransform;
use trofes_domain::value_objects::{FieldValue, QueryRecord};
use unicode_segmentation::UnicodeSegmentation;

/// Fitted encoder of a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnEncoder {
    /// `(x - mean) / scale`
    Standard {
        /// Fitted mean
        mean: f64,
        /// Fitted standard deviation
        scale: f64,
    },
    /// `x * scale + min`
    MinMax {
        /// Fitted offset
        min: f64,
        /// Fitted multiplier
        scale: f64,
    },
    /// `x` unchanged
    Passthrough,
    /// L2-normalised term counts weighted by inverse document frequency
    Tfidf {
        /// Terms in output order
        vocabulary: Vec<String>,
        /// Inverse document frequency of each term
        idf: Vec<f64>,
    },
    /// Column is accepted but contributes nothing
    Drop,
}

impl ColumnEncoder {
    /// Number of output features
    pub fn width(&self) -> usize {
        match self {
            Self::Standard { .. } | Self::MinMax { .. } | Self::Passthrough => 1,
            Self::Tfidf { vocabulary, .. } => vocabulary.len(),
            Self::Drop => 0,
        }
    }
}

/// One column of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStep {
    /// Input column name
    pub column: String,
    /// Fitted encoder
    pub encoder: ColumnEncoder,
    /// Multiplier applied to the encoded output
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl ColumnStep {
    /// Step with unit weight
    pub fn new<S: Into<String>>(column: S, encoder: ColumnEncoder) -> Self {
        Self {
            column: column.into(),
            encoder,
            weight: 1.0,
        }
    }

    /// Set the column weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PipelineDocument {
    steps: Vec<ColumnStep>,
}

/// Fitted column pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PipelineDocument", into = "PipelineDocument")]
pub struct FittedPipeline {
    steps: Vec<ColumnStep>,
    columns: Vec<String>,
    dimensions: usize,
    term_indices: Vec<HashMap<String, usize>>,
}

impl FittedPipeline {
    /// Validate steps and build the pipeline
    pub fn new(steps: Vec<ColumnStep>) -> Result<Self> {
        let mut columns: Vec<String> = Vec::with_capacity(steps.len());
        let mut term_indices = Vec::with_capacity(steps.len());

        for step in &steps {
            if columns.contains(&step.column) {
                return Err(Error::bundle(format!(
                    "pipeline column {} appears twice",
                    step.column
                )));
            }
            if !step.weight.is_finite() {
                return Err(Error::bundle(format!(
                    "pipeline column {} has a non-finite weight",
                    step.column
                )));
            }
            term_indices.push(validate_encoder(&step.column, &step.encoder)?);
            columns.push(step.column.clone());
        }

        let dimensions = steps.iter().map(|s| s.encoder.width()).sum();
        Ok(Self {
            steps,
            columns,
            dimensions,
            term_indices,
        })
    }

    /// Steps in column order
    pub fn steps(&self) -> &[ColumnStep] {
        &self.steps
    }
}

fn validate_encoder(column: &str, encoder: &ColumnEncoder) -> Result<HashMap<String, usize>> {
    match encoder {
        ColumnEncoder::Standard { mean, scale } | ColumnEncoder::MinMax { min: mean, scale } => {
            if !mean.is_finite() || !scale.is_finite() {
                return Err(Error::bundle(format!(
                    "pipeline column {column} has non-finite parameters"
                )));
            }
            if matches!(encoder, ColumnEncoder::Standard { .. }) && *scale == 0.0 {
                return Err(Error::bundle(format!(
                    "pipeline column {column} has zero scale"
                )));
            }
            Ok(HashMap::new())
        }
        ColumnEncoder::Tfidf { vocabulary, idf } => {
            if vocabulary.len() != idf.len() {
                return Err(Error::bundle(format!(
                    "pipeline column {column}: {} terms but {} idf weights",
                    vocabulary.len(),
                    idf.len()
                )));
            }
            let mut index = HashMap::with_capacity(vocabulary.len());
            for (i, term) in vocabulary.iter().enumerate() {
                if index.insert(term.clone(), i).is_some() {
                    return Err(Error::bundle(format!(
                        "pipeline column {column}: duplicate term {term}"
                    )));
                }
            }
            Ok(index)
        }
        ColumnEncoder::Passthrough | ColumnEncoder::Drop => Ok(HashMap::new()),
    }
}

impl TryFrom<PipelineDocument> for FittedPipeline {
    type Error = Error;

    fn try_from(document: PipelineDocument) -> Result<Self> {
        Self::new(document.steps)
    }
}

impl From<FittedPipeline> for PipelineDocument {
    fn from(pipeline: FittedPipeline) -> Self {
        Self {
            steps: pipeline.steps,
        }
    }
}

impl FeatureTransform for FittedPipeline {
    fn input_columns(&self) -> &[String] {
        &self.columns
    }

    fn output_dimensions(&self) -> usize {
        self.dimensions
    }

    fn transform(&self, record: &QueryRecord) -> Result<Vec<f64>> {
        if !record.names().eq(self.columns.iter().map(String::as_str)) {
            return Err(Error::shape_mismatch(
                format!("columns [{}]", self.columns.join(", ")),
                format!("columns [{}]", record.names().collect::<Vec<_>>().join(", ")),
            ));
        }

        let mut output = Vec::with_capacity(self.dimensions);
        for ((step, terms), (_, value)) in self
            .steps
            .iter()
            .zip(&self.term_indices)
            .zip(record.fields())
        {
            let start = output.len();
            encode(step, terms, value, &mut output)?;
            for x in &mut output[start..] {
                *x *= step.weight;
            }
        }
        Ok(output)
    }
}

fn encode(
    step: &ColumnStep,
    terms: &HashMap<String, usize>,
    value: &FieldValue,
    output: &mut Vec<f64>,
) -> Result<()> {
    match &step.encoder {
        ColumnEncoder::Standard { mean, scale } => {
            output.push((number(step, value)? - mean) / scale);
        }
        ColumnEncoder::MinMax { min, scale } => {
            output.push(number(step, value)?.mul_add(*scale, *min));
        }
        ColumnEncoder::Passthrough => output.push(number(step, value)?),
        ColumnEncoder::Tfidf { idf, .. } => {
            let text = value.as_text().ok_or_else(|| {
                Error::transform(format!("column {} expects text", step.column))
            })?;
            output.extend(tfidf(text, terms, idf));
        }
        ColumnEncoder::Drop => {}
    }
    Ok(())
}

fn number(step: &ColumnStep, value: &FieldValue) -> Result<f64> {
    match value.as_number() {
        Some(x) if x.is_finite() => Ok(x),
        Some(x) => Err(Error::transform(format!(
            "column {} has non-finite value {x}",
            step.column
        ))),
        None => Err(Error::transform(format!(
            "column {} expects a number",
            step.column
        ))),
    }
}

/// Lowercased words of two or more characters
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words()
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_lowercase)
}

fn tfidf(text: &str, terms: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut weights = vec![0.0; idf.len()];
    for token in tokenize(text) {
        if let Some(&i) = terms.get(&token) {
            weights[i] += 1.0;
        }
    }
    for (w, factor) in weights.iter_mut().zip(idf) {
        *w *= factor;
    }
    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in &mut weights {
            *w /= norm;
        }
    }
    weights
}
