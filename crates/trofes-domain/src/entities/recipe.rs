//! Recipe metadata

use crate::value_objects::{ClusterId, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A metadata attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Missing value
    Null,
    /// Boolean flag
    Bool(bool),
    /// Numeric value (0/1 flags are stored this way by most exports)
    Number(f64),
    /// Text value
    Text(String),
}

impl AttributeValue {
    /// Flag interpretation: `true`, non-zero, or non-empty text
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

/// Entity: Recipe metadata row
///
/// ## Example
///
/// ```rust
/// use trofes_domain::entities::RecipeRecord;
///
/// let record: RecipeRecord = serde_json::from_str(
///     r#"{"recipe_id": 3, "cluster": 1, "has_egg": 1, "halal": true}"#,
/// ).unwrap();
/// assert!(record.flag("has_egg"));
/// assert!(record.flag("halal"));
/// assert!(!record.flag("has_fish"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Internal recipe id
    pub recipe_id: RecipeId,
    /// Cluster label
    pub cluster: ClusterId,
    /// Remaining columns (nutrients, allergen and diet flags, ...)
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl RecipeRecord {
    /// Create a record without attributes
    pub fn new(recipe_id: RecipeId, cluster: ClusterId) -> Self {
        Self {
            recipe_id,
            cluster,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute (builder form)
    pub fn with_attribute<S: Into<String>>(mut self, name: S, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Whether the named flag is set; missing attributes count as unset
    pub fn flag(&self, name: &str) -> bool {
        self.attributes
            .get(name)
            .is_some_and(AttributeValue::is_truthy)
    }
}

/// Entity: Metadata Table
///
/// Rows in matrix order. `columns` is the union of attribute names across
/// all rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RecipeRecord>", into = "Vec<RecipeRecord>")]
pub struct MetadataTable {
    records: Vec<RecipeRecord>,
    columns: BTreeSet<String>,
}

impl MetadataTable {
    /// Build a table from rows in matrix order
    pub fn new(records: Vec<RecipeRecord>) -> Self {
        let columns = records
            .iter()
            .flat_map(|r| r.attributes.keys().cloned())
            .collect();
        Self { records, columns }
    }

    /// All rows
    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    /// Row at `position`
    pub fn record(&self, position: usize) -> Option<&RecipeRecord> {
        self.records.get(position)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any row carries the named attribute
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Attribute column names
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl From<Vec<RecipeRecord>> for MetadataTable {
    fn from(records: Vec<RecipeRecord>) -> Self {
        Self::new(records)
    }
}

impl From<MetadataTable> for Vec<RecipeRecord> {
    fn from(table: MetadataTable) -> Self {
        table.records
    }
}
