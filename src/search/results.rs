// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reports from a sequential sweep over several lengths.

use super::{search_with, SearchConfig, SearchReport};
use crate::error::SearchError;
use std::fmt::Write;

/// Header line of [`SearchResults::to_csv`].
pub const CSV_HEADER: &str = "size;max_steps;n_max;total;search_time";

/// Reports in the order the lengths were searched.
#[derive(Debug, Default, Clone)]
pub struct SearchResults {
    reports: Vec<SearchReport>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: SearchReport) {
        self.reports.push(report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchReport> {
        self.reports.iter()
    }

    /// Semicolon-separated table, one line per report, search time in seconds.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');
        for report in &self.reports {
            // Writing to a String cannot fail.
            let _ = writeln!(
                csv,
                "{};{:.6}",
                report,
                report.elapsed.as_secs_f64()
            );
        }
        csv
    }
}

/// Search each length in turn, one after the other.
///
/// Stops at the first invalid length.
pub fn search_range<I>(sizes: I, config: &SearchConfig) -> Result<SearchResults, SearchError>
where
    I: IntoIterator<Item = usize>,
{
    let mut results = SearchResults::new();
    for size in sizes {
        results.push(search_with(size, config)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_range_in_order() {
        let results = search_range(1..=3, &SearchConfig::default()).unwrap();
        let lines: Vec<String> = results.iter().map(|r| r.to_string()).collect();
        assert_eq!(lines, ["1;2;7;7", "2;4;1;25", "3;5;2;59"]);
    }

    #[test]
    fn test_search_range_stops_on_invalid_length() {
        let result = search_range([1, 0, 2], &SearchConfig::default());
        assert!(matches!(result, Err(SearchError::InvalidLength { length: 0, .. })));
    }

    #[test]
    fn test_csv_layout() {
        let results = search_range([1, 2], &SearchConfig::default()).unwrap();
        let csv = results.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("1;2;7;7;"));
        assert!(lines[2].starts_with("2;4;1;25;"));
        assert_eq!(lines[2].split(';').count(), 5);
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::new();
        assert!(results.is_empty());
        assert_eq!(results.to_csv(), format!("{}\n", CSV_HEADER));
    }
}
