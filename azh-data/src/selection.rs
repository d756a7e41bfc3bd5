use crate::record::AGGREGATE_REGION;

/// The currently selected region name.
///
/// Writes are never validated; an unknown name is resolved by
/// [`project_series`](crate::series::project_series) at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    region: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            region: AGGREGATE_REGION.to_string(),
        }
    }
}

impl Selection {
    pub fn select(&mut self, name: impl Into<String>) {
        self.region = name.into();
    }

    pub fn current(&self) -> &str {
        &self.region
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.region == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_aggregate() {
        assert_eq!(Selection::default().current(), "Arizona");
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = Selection::default();
        selection.select("Pima");
        selection.select("Pima");
        assert_eq!(selection.current(), "Pima");
        assert!(selection.is_selected("Pima"));
        assert!(!selection.is_selected("Arizona"));
    }

    #[test]
    fn test_select_accepts_unknown_names() {
        let mut selection = Selection::default();
        selection.select("Nonexistent");
        assert_eq!(selection.current(), "Nonexistent");
    }
}
