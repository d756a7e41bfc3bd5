use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the statewide record. Default selection, partition key and
/// fallback target all refer to this constant.
pub const AGGREGATE_REGION: &str = "Arizona";

/// Reserved field holding the region name.
pub const NAME_FIELD: &str = "Name";

/// Reserved field holding the region total.
pub const TOTAL_FIELD: &str = "Total";

/// Largest difference between `Total` and the yearly sum that still counts as agreement.
const TOTAL_TOLERANCE: f64 = 0.5;

/// A fiscal year column label such as `"2011"`.
///
/// Ordering is lexicographic on the label, which matches chronological
/// order for four-digit years.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearKey(String);

impl YearKey {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fiscal year as a number, when the label is a four-digit year.
    pub fn fiscal_year(&self) -> Option<i32> {
        if self.0.len() == 4 && self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for YearKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for YearKey {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One region's annual net housing construction counts.
///
/// `total` is carried as supplied; see [`RegionRecord::total_mismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    name: String,
    total: f64,
    values: BTreeMap<YearKey, f64>,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>, total: f64, values: BTreeMap<YearKey, f64>) -> Self {
        Self {
            name: name.into(),
            total,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_aggregate(&self) -> bool {
        self.name == AGGREGATE_REGION
    }

    /// Value for a single fiscal year.
    pub fn value(&self, year: &str) -> Option<f64> {
        self.values.get(year).copied()
    }

    /// Year keys of this record, ascending.
    pub fn year_keys(&self) -> impl Iterator<Item = &YearKey> {
        self.values.keys()
    }

    /// (year, value) pairs, ascending by year.
    pub fn values(&self) -> impl Iterator<Item = (&YearKey, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    pub fn year_sum(&self) -> f64 {
        self.values.values().sum()
    }

    /// `Total - sum(years)` when the two disagree, `None` when they match.
    pub fn total_mismatch(&self) -> Option<f64> {
        let diff = self.total - self.year_sum();
        if diff.abs() > TOTAL_TOLERANCE {
            Some(diff)
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn record(name: &str, total: f64, values: &[(&str, f64)]) -> RegionRecord {
    RegionRecord::new(
        name,
        total,
        values.iter().map(|(k, v)| (YearKey::from(*k), *v)).collect(),
    )
}
