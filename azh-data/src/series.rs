//! Projection of the current selection into the single chart series.

use crate::error::{DatasetError, Result};
use crate::record::{RegionRecord, YearKey, AGGREGATE_REGION};

/// One chart line: values aligned 1:1 with the year keys it was projected against.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    /// Placeholder used when neither the selection nor the aggregate resolves.
    pub fn empty() -> Self {
        Self {
            label: AGGREGATE_REGION.to_string(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pair each value with its year key.
    pub fn points<'a>(&'a self, year_keys: &'a [YearKey]) -> impl Iterator<Item = (&'a YearKey, f64)> {
        year_keys.iter().zip(self.values.iter().copied())
    }
}

/// Resolve `selection` to a record and read its values in `year_keys` order.
///
/// Unknown names fall back to the aggregate record and label without error;
/// `selection` itself is left for the caller to keep as is. A resolved record
/// that lacks one of `year_keys` is a data-integrity fault and is returned as
/// [`DatasetError::MissingYearValue`] rather than filled with zero.
pub fn project_series(
    selection: &str,
    aggregate: Option<&RegionRecord>,
    others: &[&RegionRecord],
    year_keys: &[YearKey],
) -> Result<Series> {
    let resolved = if selection == AGGREGATE_REGION {
        aggregate
    } else {
        others
            .iter()
            .copied()
            .find(|r| r.name() == selection)
            .or(aggregate)
    };

    let Some(record) = resolved else {
        log::warn!("No record for {:?} and no aggregate to fall back to", selection);
        return Ok(Series::empty());
    };

    let values = year_keys
        .iter()
        .map(|year| {
            record
                .value(year.as_str())
                .ok_or_else(|| DatasetError::MissingYearValue {
                    region: record.name().to_string(),
                    year: year.to_string(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Series {
        label: record.name().to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{derive_year_keys, partition_dataset};
    use crate::record::record;

    fn sample() -> Vec<RegionRecord> {
        vec![
            record("Arizona", 300.0, &[("2011", 100.0), ("2012", 200.0)]),
            record("Pima", 150.0, &[("2011", 50.0), ("2012", 100.0)]),
        ]
    }

    fn project(records: &[RegionRecord], selection: &str) -> Series {
        let years = derive_year_keys(records);
        let partition = partition_dataset(records);
        project_series(selection, partition.aggregate, &partition.others, &years).unwrap()
    }

    #[test]
    fn test_project_aggregate() {
        let series = project(&sample(), "Arizona");
        assert_eq!(series.label, "Arizona");
        assert_eq!(series.values, vec![100.0, 200.0]);
    }

    #[test]
    fn test_project_county() {
        let series = project(&sample(), "Pima");
        assert_eq!(series.label, "Pima");
        assert_eq!(series.values, vec![50.0, 100.0]);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_aggregate() {
        let records = sample();
        assert_eq!(project(&records, "__nonexistent__"), project(&records, "Arizona"));
    }

    #[test]
    fn test_values_align_with_year_keys() {
        let records = vec![
            record("Arizona", 6.0, &[("2013", 3.0), ("2011", 1.0), ("2012", 2.0)]),
            record("Gila", 60.0, &[("2012", 20.0), ("2013", 30.0), ("2011", 10.0)]),
        ];
        let years = derive_year_keys(&records);
        let series = project(&records, "Gila");
        assert_eq!(series.values.len(), years.len());
        for (i, year) in years.iter().enumerate() {
            assert_eq!(series.values[i], records[1].value(year.as_str()).unwrap());
        }
    }

    #[test]
    fn test_missing_year_value_is_an_error() {
        let records = vec![
            record("Arizona", 300.0, &[("2011", 100.0), ("2012", 200.0)]),
            record("Pima", 50.0, &[("2011", 50.0)]),
        ];
        let years = derive_year_keys(&records);
        let partition = partition_dataset(&records);
        let err = project_series("Pima", partition.aggregate, &partition.others, &years).unwrap_err();
        assert!(matches!(err, DatasetError::MissingYearValue { ref year, .. } if year == "2012"));
    }

    #[test]
    fn test_no_aggregate_yields_empty_placeholder() {
        let records = vec![record("Pima", 150.0, &[("2011", 50.0), ("2012", 100.0)])];
        let series = project(&records, "Nonexistent");
        assert_eq!(series, Series::empty());
        assert!(series.is_empty());
    }

    #[test]
    fn test_points_pair_years_and_values() {
        let records = sample();
        let years = derive_year_keys(&records);
        let series = project(&records, "Pima");
        let points: Vec<(String, f64)> = series
            .points(&years)
            .map(|(y, v)| (y.to_string(), v))
            .collect();
        assert_eq!(
            points,
            vec![("2011".to_string(), 50.0), ("2012".to_string(), 100.0)]
        );
    }
}
