//! Model bundle storage
//!
//! Bundles are JSON documents produced offline by the training notebooks:
//!
//! ```json
//! {
//!   "matrix": [[0.1, 0.2], [0.3, 0.4]],
//!   "metadata": [
//!     {"recipe_id": 0, "cluster": 2, "has_egg": 1},
//!     {"recipe_id": 1, "cluster": 0, "has_egg": 0}
//!   ]
//! }
//! ```
//!
//! The calculator bundle adds a `pipeline` object describing the fitted
//! column transform (see [`FittedPipeline`]).

mod format;
mod loader;
mod pipeline;

pub use format::{BundleFile, CalculatorBundleFile};
pub use loader::FileBundleLoader;
pub use pipeline::{ColumnEncoder, ColumnStep, FittedPipeline};
