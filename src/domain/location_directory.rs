//! In-memory table of per-country location metadata.

use std::collections::HashMap;

use crate::domain::entities::LocationEntry;

/// Immutable snapshot of location rows keyed by country code.
///
/// Built once at startup and shared read-only for the process lifetime.
/// When the source lists a country more than once, the first row wins.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    entries: Vec<LocationEntry>,
    by_country: HashMap<String, usize>,
}

impl LocationDirectory {
    /// Builds the directory, keeping source order.
    pub fn from_entries(entries: Vec<LocationEntry>) -> Self {
        let mut by_country = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if by_country.contains_key(&entry.country_code) {
                tracing::debug!(
                    "Duplicate location for {} ({}), keeping first",
                    entry.country_code,
                    entry.colo
                );
                continue;
            }
            by_country.insert(entry.country_code.clone(), idx);
        }

        Self {
            entries,
            by_country,
        }
    }

    /// Returns the first entry whose country code equals `code` exactly.
    ///
    /// Matching is case-sensitive.
    pub fn find_by_country_code(&self, code: &str) -> Option<&LocationEntry> {
        self.by_country.get(code).map(|&idx| &self.entries[idx])
    }

    /// All rows in source order, duplicates included.
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct country codes.
    pub fn country_count(&self) -> usize {
        self.by_country.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, colo: &str) -> LocationEntry {
        LocationEntry {
            country_code: code.to_string(),
            colo: colo.to_string(),
            latitude: 1.0,
            longitude: 2.0,
            region: "Region".to_string(),
            city: "City".to_string(),
        }
    }

    #[test]
    fn test_find_existing_code() {
        let directory = LocationDirectory::from_entries(vec![entry("US", "SJC"), entry("DE", "FRA")]);

        let found = directory.find_by_country_code("DE").unwrap();
        assert_eq!(found.colo, "FRA");
    }

    #[test]
    fn test_find_missing_code() {
        let directory = LocationDirectory::from_entries(vec![entry("US", "SJC")]);
        assert!(directory.find_by_country_code("JP").is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let directory = LocationDirectory::from_entries(vec![entry("US", "SJC")]);
        assert!(directory.find_by_country_code("us").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let directory = LocationDirectory::from_entries(vec![
            entry("US", "SJC"),
            entry("US", "IAD"),
            entry("GB", "LHR"),
        ]);

        assert_eq!(directory.find_by_country_code("US").unwrap().colo, "SJC");
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.country_count(), 2);
    }

    #[test]
    fn test_find_is_idempotent() {
        let directory = LocationDirectory::from_entries(vec![entry("US", "SJC")]);

        let first = directory.find_by_country_code("US").cloned();
        let second = directory.find_by_country_code("US").cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory() {
        let directory = LocationDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.find_by_country_code("US").is_none());
    }
}
