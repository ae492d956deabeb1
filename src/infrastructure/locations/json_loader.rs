//! Loads the location directory from a JSON file.
//!
//! The file is a JSON array of colocation rows (see
//! [`crate::domain::entities::LocationEntry`]). It is read exactly once at
//! startup; requests only ever see the resulting snapshot.

use std::fs;
use std::path::Path;

use crate::domain::LocationDirectory;
use crate::domain::entities::LocationEntry;
use crate::error::LoadError;

/// Reads and parses the location file.
///
/// # Errors
///
/// Returns [`LoadError::DirectoryUnavailable`] if the file cannot be read or
/// is not a JSON array of location rows.
pub fn load_locations(path: impl AsRef<Path>) -> Result<LocationDirectory, LoadError> {
    let path = path.as_ref();
    let unavailable = |reason: String| LoadError::DirectoryUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
    let entries: Vec<LocationEntry> =
        serde_json::from_str(&contents).map_err(|e| unavailable(e.to_string()))?;

    let directory = LocationDirectory::from_entries(entries);
    tracing::debug!(
        "Loaded {} locations ({} countries) from {}",
        directory.len(),
        directory.country_count(),
        path.display()
    );

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_temp(
            r#"[
                {"iata":"SJC","lat":37.3,"lon":-121.9,"cca2":"US","region":"California","city":"San Jose"},
                {"iata":"FRA","lat":50.1,"lon":8.7,"cca2":"DE","region":"Europe","city":"Frankfurt"}
            ]"#,
        );

        let directory = load_locations(file.path()).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.find_by_country_code("DE").unwrap().city, "Frankfurt");
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_temp("[]");
        let directory = load_locations(file.path()).unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_locations("/nonexistent/locations.json");
        assert!(matches!(
            result,
            Err(LoadError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_temp("{not json");
        let result = load_locations(file.path());
        assert!(matches!(
            result,
            Err(LoadError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_wrong_shape() {
        let file = write_temp(r#"{"cca2":"US"}"#);
        let result = load_locations(file.path());
        assert!(matches!(
            result,
            Err(LoadError::DirectoryUnavailable { .. })
        ));
    }
}
