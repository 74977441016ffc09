use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::model::{Override, Schedule};

/// Load a schedule document from a JSON file.
pub fn load_schedule(path: &Path) -> anyhow::Result<Schedule> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read schedule file: {}", path.display()))?;
    let schedule: Schedule = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in schedule file: {}", path.display()))?;
    debug!(users = schedule.users.len(), "loaded schedule");
    Ok(schedule)
}

/// Load the override list from a JSON file. The document must be an
/// array (possibly empty); anything else is a parse failure.
pub fn load_overrides(path: &Path) -> anyhow::Result<Vec<Override>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read overrides file: {}", path.display()))?;
    let overrides: Vec<Override> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in overrides file: {}", path.display()))?;
    debug!(count = overrides.len(), "loaded overrides");
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_schedule_document() {
        let file = file_with(
            r#"{
                "users": ["alice", "bob", "charlie"],
                "handover_start_at": "2025-11-07T17:00:00Z",
                "handover_interval_days": 7
            }"#,
        );
        let schedule = load_schedule(file.path()).unwrap();
        assert_eq!(schedule.users.len(), 3);
        assert_eq!(schedule.handover_interval_days, 7);
    }

    #[test]
    fn loads_empty_override_list() {
        let file = file_with("[]");
        assert!(load_overrides(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_schedule(Path::new("/nonexistent/schedule.json")).unwrap_err();
        assert!(format!("{err:#}").contains("could not read schedule file"));
    }

    #[test]
    fn malformed_json_names_the_path() {
        let file = file_with("{ not json");
        let err = load_schedule(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid JSON in schedule file"));
    }

    #[test]
    fn overrides_must_be_an_array() {
        let file = file_with(r#"{"user": "alice"}"#);
        let err = load_overrides(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid JSON in overrides file"));
    }

    #[test]
    fn override_missing_field_fails() {
        let file = file_with(r#"[{"user": "alice", "start_at": "2025-11-10T17:00:00Z"}]"#);
        assert!(load_overrides(file.path()).is_err());
    }
}
