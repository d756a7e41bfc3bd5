//! Shared utility functions for the Arizona housing dashboard crates.

/// Number formatting for display
pub mod format {
    /// Format an integer with a thousands separator, keeping the sign.
    pub fn format_with_separator(n: i64, separator: char) -> String {
        let digits = n.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if n < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }

    /// Format a housing unit count as shown in the table and chart labels:
    /// rounded to a whole number, comma-grouped.
    pub fn format_count(value: f64) -> String {
        format_with_separator(value.round() as i64, ',')
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_small_numbers() {
            assert_eq!(format_with_separator(0, ','), "0");
            assert_eq!(format_with_separator(999, ','), "999");
        }

        #[test]
        fn test_format_thousands() {
            assert_eq!(format_with_separator(1_000, ','), "1,000");
            assert_eq!(format_with_separator(545_380, ','), "545,380");
            assert_eq!(format_with_separator(1_234_567, '.'), "1.234.567");
        }

        #[test]
        fn test_format_negative() {
            assert_eq!(format_with_separator(-1_250, ','), "-1,250");
            assert_eq!(format_with_separator(-20, ','), "-20");
        }

        #[test]
        fn test_format_count_rounds() {
            assert_eq!(format_count(14_909.6), "14,910");
            assert_eq!(format_count(-0.4), "0");
        }
    }
}

/// Fiscal year utility functions
pub mod fiscal {
    use chrono::NaiveDate;

    /// Month in which a fiscal year begins (July).
    pub const FISCAL_YEAR_START_MONTH: u32 = 7;

    /// First and last day of a fiscal year.
    pub fn fiscal_year_span(fiscal_year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(fiscal_year - 1, FISCAL_YEAR_START_MONTH, 1)?;
        let end = NaiveDate::from_ymd_opt(fiscal_year, FISCAL_YEAR_START_MONTH - 1, 30)?;
        Some((start, end))
    }

    /// Human-readable span, e.g. "July 1, 2010 - June 30, 2011".
    pub fn describe_fiscal_year(fiscal_year: i32) -> Option<String> {
        describe_fiscal_range(fiscal_year, fiscal_year)
    }

    /// From the first day of `first` to the last day of `last`.
    pub fn describe_fiscal_range(first: i32, last: i32) -> Option<String> {
        if last < first {
            return None;
        }
        let (start, _) = fiscal_year_span(first)?;
        let (_, end) = fiscal_year_span(last)?;
        Some(format!(
            "{} - {}",
            start.format("%B %-d, %Y"),
            end.format("%B %-d, %Y")
        ))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fiscal_year_span() {
            let (start, end) = fiscal_year_span(2011).unwrap();
            assert_eq!(start, NaiveDate::from_ymd_opt(2010, 7, 1).unwrap());
            assert_eq!(end, NaiveDate::from_ymd_opt(2011, 6, 30).unwrap());
        }

        #[test]
        fn test_describe_fiscal_year() {
            assert_eq!(
                describe_fiscal_year(2011).as_deref(),
                Some("July 1, 2010 - June 30, 2011")
            );
        }

        #[test]
        fn test_describe_fiscal_range() {
            assert_eq!(
                describe_fiscal_range(2011, 2025).as_deref(),
                Some("July 1, 2010 - June 30, 2025")
            );
            assert_eq!(describe_fiscal_range(2025, 2011), None);
        }
    }
}
