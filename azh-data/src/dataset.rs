//! Dataset loading with load-time validation.
//!
//! The dashboard ships a static `housing.json` export, an array of objects:
//!
//! ```text
//! [{ "Name": "Arizona", "Total": 300, "2011": 100, "2012": 200 }, ...]
//! ```
//!
//! The same table exported from a spreadsheet as CSV (`Name,Total,2011,...`)
//! is accepted by [`Dataset::from_csv`]. Both paths funnel into
//! [`Dataset::from_records`], which rejects datasets whose records would
//! otherwise misalign silently when projected into a chart series.

use crate::derive::{build_display_order, derive_year_keys, partition_dataset, Partition};
use crate::error::{DatasetError, Result};
use crate::record::{RegionRecord, YearKey, AGGREGATE_REGION, NAME_FIELD, TOTAL_FIELD};
use crate::selection::Selection;
use crate::series::{project_series, Series};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Wire shape of one JSON record; year columns are collected by `flatten`.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(flatten)]
    years: BTreeMap<String, f64>,
}

impl From<RawRecord> for RegionRecord {
    fn from(raw: RawRecord) -> Self {
        let values = raw
            .years
            .into_iter()
            .map(|(k, v)| (YearKey::new(k), v))
            .collect();
        RegionRecord::new(raw.name, raw.total, values)
    }
}

/// The immutable, validated set of region records.
///
/// Guarantees: non-empty, unique names, identical year keys on every
/// record, and exactly one aggregate record.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<RegionRecord>,
    year_keys: Vec<YearKey>,
}

impl Dataset {
    /// Parse and validate a JSON array of region objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        Self::from_records(raw.into_iter().map(RegionRecord::from).collect())
    }

    /// Parse and validate a CSV table with a `Name,Total,<year>...` header.
    ///
    /// Column order is free. Thousands separators inside quoted cells are ignored.
    pub fn from_csv(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let name_idx = headers
            .iter()
            .position(|h| h == NAME_FIELD)
            .ok_or(DatasetError::MissingColumn(NAME_FIELD))?;
        let total_idx = headers
            .iter()
            .position(|h| h == TOTAL_FIELD)
            .ok_or(DatasetError::MissingColumn(TOTAL_FIELD))?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let name = row.get(name_idx).unwrap_or("").to_string();
            let total = parse_cell(&name, TOTAL_FIELD, row.get(total_idx).unwrap_or(""))?;

            let mut values = BTreeMap::new();
            for (idx, header) in headers.iter().enumerate() {
                if idx == name_idx || idx == total_idx {
                    continue;
                }
                let value = parse_cell(&name, header, row.get(idx).unwrap_or(""))?;
                values.insert(YearKey::new(header), value);
            }
            records.push(RegionRecord::new(name, total, values));
        }

        Self::from_records(records)
    }

    /// Validate records and derive the year keys once.
    pub fn from_records(records: Vec<RegionRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name()) {
                return Err(DatasetError::DuplicateRegion(record.name().to_string()));
            }
        }

        let year_keys = derive_year_keys(&records);
        if let Some(label) = year_keys.iter().find(|k| k.fiscal_year().is_none()) {
            return Err(DatasetError::InvalidYearLabel {
                region: records[0].name().to_string(),
                label: label.to_string(),
            });
        }
        let expected: BTreeSet<&YearKey> = year_keys.iter().collect();
        for record in records.iter().skip(1) {
            let actual: BTreeSet<&YearKey> = record.year_keys().collect();
            if actual != expected {
                return Err(DatasetError::MismatchedYears {
                    region: record.name().to_string(),
                    missing: expected.difference(&actual).map(|k| k.to_string()).collect(),
                    unexpected: actual.difference(&expected).map(|k| k.to_string()).collect(),
                });
            }
        }

        if !records.iter().any(RegionRecord::is_aggregate) {
            return Err(DatasetError::MissingAggregate(AGGREGATE_REGION));
        }

        for record in &records {
            if let Some(diff) = record.total_mismatch() {
                log::warn!(
                    "{} total {} differs from yearly sum by {}",
                    record.name(),
                    record.total(),
                    diff
                );
            }
        }

        log::info!(
            "Loaded {} regions across {} fiscal years",
            records.len(),
            year_keys.len()
        );

        Ok(Self { records, year_keys })
    }

    /// Records in source order.
    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn year_keys(&self) -> &[YearKey] {
        &self.year_keys
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&RegionRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn aggregate(&self) -> Option<&RegionRecord> {
        self.find(AGGREGATE_REGION)
    }

    pub fn partition(&self) -> Partition<'_> {
        partition_dataset(&self.records)
    }

    /// Table rows: aggregate first, then counties in source order.
    pub fn display_order(&self) -> Vec<&RegionRecord> {
        let partition = self.partition();
        build_display_order(partition.aggregate, &partition.others)
    }

    /// Dropdown options, in table order.
    pub fn region_names(&self) -> Vec<&str> {
        self.display_order().into_iter().map(RegionRecord::name).collect()
    }

    /// Chart series for the current selection.
    pub fn series_for(&self, selection: &Selection) -> Result<Series> {
        let partition = self.partition();
        project_series(
            selection.current(),
            partition.aggregate,
            &partition.others,
            &self.year_keys,
        )
    }
}

fn parse_cell(region: &str, column: &str, raw: &str) -> Result<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| DatasetError::InvalidNumber {
            region: region.to_string(),
            column: column.to_string(),
            value: raw.to_string(),
        })
}
