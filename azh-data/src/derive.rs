//! Pure reshaping of the flat record list into chart and table inputs.
//!
//! These functions accept any record slice, validated or not. A validated
//! [`Dataset`](crate::Dataset) calls them once at load and caches the results.

use crate::record::{RegionRecord, YearKey, AGGREGATE_REGION};

/// The aggregate record split from every other region.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    pub aggregate: Option<&'a RegionRecord>,
    /// All non-aggregate records in dataset order.
    pub others: Vec<&'a RegionRecord>,
}

/// Year keys of the first record, ascending. Empty input yields no keys.
///
/// The key set of the first record is assumed to hold for every record;
/// [`Dataset::from_records`](crate::Dataset::from_records) enforces that.
pub fn derive_year_keys(records: &[RegionRecord]) -> Vec<YearKey> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let mut keys: Vec<YearKey> = first.year_keys().cloned().collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Split out the aggregate region in a single pass.
pub fn partition_dataset(records: &[RegionRecord]) -> Partition<'_> {
    let mut aggregate = None;
    let mut others = Vec::with_capacity(records.len().saturating_sub(1));
    for record in records {
        if aggregate.is_none() && record.name() == AGGREGATE_REGION {
            aggregate = Some(record);
        } else {
            others.push(record);
        }
    }
    Partition { aggregate, others }
}

/// Table ordering: aggregate first (when present), then `others` unchanged.
pub fn build_display_order<'a>(
    aggregate: Option<&'a RegionRecord>,
    others: &[&'a RegionRecord],
) -> Vec<&'a RegionRecord> {
    aggregate.into_iter().chain(others.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::record;

    fn sample() -> Vec<RegionRecord> {
        vec![
            record("Apache", 30.0, &[("2012", 20.0), ("2011", 10.0)]),
            record("Arizona", 300.0, &[("2011", 100.0), ("2012", 200.0)]),
            record("Pima", 150.0, &[("2011", 50.0), ("2012", 100.0)]),
            record("Yuma", 60.0, &[("2011", 25.0), ("2012", 35.0)]),
        ]
    }

    fn names(records: &[&RegionRecord]) -> Vec<String> {
        records.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_derive_year_keys_sorted() {
        let records = vec![record(
            "Arizona",
            0.0,
            &[("2025", 0.0), ("2011", 0.0), ("2018", 0.0), ("2012", 0.0)],
        )];
        let keys: Vec<String> = derive_year_keys(&records)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, vec!["2011", "2012", "2018", "2025"]);
    }

    #[test]
    fn test_derive_year_keys_empty_dataset() {
        assert!(derive_year_keys(&[]).is_empty());
    }

    #[test]
    fn test_partition_extracts_aggregate() {
        let records = sample();
        let partition = partition_dataset(&records);
        assert_eq!(partition.aggregate.map(RegionRecord::name), Some("Arizona"));
        assert_eq!(names(&partition.others), vec!["Apache", "Pima", "Yuma"]);
    }

    #[test]
    fn test_partition_without_aggregate() {
        let records: Vec<RegionRecord> = sample()
            .into_iter()
            .filter(|r| !r.is_aggregate())
            .collect();
        let partition = partition_dataset(&records);
        assert!(partition.aggregate.is_none());
        assert_eq!(partition.others.len(), 3);
    }

    #[test]
    fn test_display_order_puts_aggregate_first() {
        let records = sample();
        let partition = partition_dataset(&records);
        let order = build_display_order(partition.aggregate, &partition.others);
        assert_eq!(names(&order), vec!["Arizona", "Apache", "Pima", "Yuma"]);
        assert_eq!(order.len(), records.len());
    }

    #[test]
    fn test_display_order_without_aggregate_is_unchanged() {
        let records = sample();
        let partition = partition_dataset(&records);
        let order = build_display_order(None, &partition.others);
        assert_eq!(names(&order), vec!["Apache", "Pima", "Yuma"]);
    }
}
