// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading a roster snapshot from disk.
//!
//! The file holds a JSON array of drivers in the shape `GET /roster` returns.

use fleet_desk_domain::{DomainError, Driver, Roster};
use std::path::Path;
use thiserror::Error;

/// Roster file errors.
#[derive(Debug, Error)]
pub enum RosterLoadError {
    /// The file could not be read.
    #[error("Failed to read roster file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file is not a JSON array of drivers.
    #[error("Failed to parse roster file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// The drivers do not form a valid roster.
    #[error("Invalid roster in '{path}': {source}")]
    Invalid { path: String, source: DomainError },
}

/// Reads and validates a roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains an empty or repeated driver identifier.
pub fn load_roster(path: &Path) -> Result<Roster, RosterLoadError> {
    let display: String = path.display().to_string();
    let contents: String = std::fs::read_to_string(path).map_err(|source| RosterLoadError::Io {
        path: display.clone(),
        source,
    })?;
    parse_roster(&contents, &display)
}

/// Parses roster JSON. `origin` names the source in error messages.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of drivers or the
/// drivers fail roster validation.
pub fn parse_roster(contents: &str, origin: &str) -> Result<Roster, RosterLoadError> {
    let drivers: Vec<Driver> =
        serde_json::from_str(contents).map_err(|source| RosterLoadError::Parse {
            path: origin.to_string(),
            source,
        })?;
    Roster::new(drivers).map_err(|source| RosterLoadError::Invalid {
        path: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DRIVERS: &str = r#"[
        {"id": "100001", "name_cn": "陳大文", "name_en": "Chan Tai Man", "gender": "Male", "phone": "91234567"},
        {"id": "100002", "name_cn": "李小紅", "name_en": "Lee Siu Hung", "gender": "Female"}
    ]"#;

    #[test]
    fn test_parse_roster_fills_defaults() {
        let roster: Roster = parse_roster(TWO_DRIVERS, "inline").unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.drivers()[0].phone, "91234567");
        assert_eq!(roster.drivers()[1].phone, "");
        assert_eq!(roster.drivers()[1].risk_score, 0);
    }

    #[test]
    fn test_parse_roster_rejects_duplicate_ids() {
        let json: &str = r#"[
            {"id": "7", "name_cn": "甲", "name_en": "A", "gender": "Male"},
            {"id": "7", "name_cn": "乙", "name_en": "B", "gender": "Male"}
        ]"#;

        let err: RosterLoadError = parse_roster(json, "dup.json").unwrap_err();

        assert!(matches!(
            err,
            RosterLoadError::Invalid {
                source: DomainError::DuplicateDriverId(_),
                ..
            }
        ));
        assert!(err.to_string().starts_with("Invalid roster in 'dup.json'"));
    }

    #[test]
    fn test_parse_roster_rejects_bad_json() {
        let err: RosterLoadError = parse_roster(r#"{"id": "1"}"#, "obj.json").unwrap_err();

        assert!(matches!(err, RosterLoadError::Parse { .. }));
    }

    #[test]
    fn test_load_roster_reports_missing_file() {
        let err: RosterLoadError =
            load_roster(Path::new("/nonexistent/fleet-desk/roster.json")).unwrap_err();

        assert!(matches!(err, RosterLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/fleet-desk/roster.json"));
    }
}
