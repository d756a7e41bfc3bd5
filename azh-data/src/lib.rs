//! Region records, dataset validation, and series derivation for the
//! Arizona housing construction dashboard.
//!
//! This crate provides:
//! - `record`: `RegionRecord` and `YearKey`, plus the reserved field names
//! - `dataset`: JSON/CSV loading with load-time validation
//! - `derive`: year-key extraction, aggregate partitioning, table ordering
//! - `series`: projection of the selected region into a chart series
//! - `selection`: the single piece of mutable UI state
//!
//! Nothing here depends on Dioxus, so every transformation is tested on the host.

pub mod dataset;
pub mod derive;
pub mod error;
pub mod record;
pub mod selection;
pub mod series;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::{RegionRecord, YearKey, AGGREGATE_REGION};
pub use selection::Selection;
pub use series::Series;
