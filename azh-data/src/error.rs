/// Error types for loading and projecting the housing dataset
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to parse the JSON dataset
    #[error("Failed to parse JSON dataset: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to parse the CSV dataset
    #[error("Failed to parse CSV dataset: {0}")]
    CsvParse(#[from] csv::Error),

    /// A CSV header is missing one of the reserved columns
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A cell could not be read as a number
    #[error("Invalid number {value:?} in column {column} for {region}")]
    InvalidNumber {
        region: String,
        column: String,
        value: String,
    },

    /// The dataset contains no records
    #[error("Dataset contains no region records")]
    Empty,

    /// Two records share a name
    #[error("Duplicate region: {0}")]
    DuplicateRegion(String),

    /// A non-reserved column is not a four-digit fiscal year
    #[error("Region {region} has column {label:?} which is not a fiscal year")]
    InvalidYearLabel { region: String, label: String },

    /// A record's year columns differ from the first record's
    #[error("Region {region} has mismatched years (missing: {missing:?}, unexpected: {unexpected:?})")]
    MismatchedYears {
        region: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// The statewide aggregate record is absent
    #[error("Aggregate region {0} not found in dataset")]
    MissingAggregate(&'static str),

    /// A resolved record has no value for a year in the key list
    #[error("Region {region} has no value for year {year}")]
    MissingYearValue { region: String, year: String },
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
