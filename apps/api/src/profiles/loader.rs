//! Profile directory scanning. Never fails: a missing directory yields no profiles and
//! a bad file is skipped, each outcome recorded per file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::profile::{CandidateProfile, RawProfile};
use crate::profiles::normalize::normalize;

#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-file result of a scan.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(CandidateProfile),
    Skipped {
        path: PathBuf,
        reason: ProfileLoadError,
    },
}

/// Reads, parses and normalizes a single profile file.
pub fn load_profile_file(path: &Path) -> LoadOutcome {
    let parsed = fs::read_to_string(path)
        .map_err(ProfileLoadError::from)
        .and_then(|content| {
            serde_json::from_str::<RawProfile>(&content).map_err(ProfileLoadError::from)
        });

    match parsed {
        Ok(raw) => LoadOutcome::Loaded(normalize(raw)),
        Err(reason) => LoadOutcome::Skipped {
            path: path.to_path_buf(),
            reason,
        },
    }
}

/// One outcome per `.json` file in `dir`, sorted by file name.
/// Empty when the directory is missing or unreadable.
pub fn scan_profiles(dir: &Path) -> Vec<LoadOutcome> {
    if !dir.is_dir() {
        warn!("Profile directory {} not found", dir.display());
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list profile directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".json"))
        })
        .collect();
    files.sort();

    files.iter().map(|path| load_profile_file(path)).collect()
}

/// Normalized profiles from every loadable `.json` file in `dir`. Skipped files are logged.
pub fn load_profiles(dir: &Path) -> Vec<CandidateProfile> {
    let mut profiles = Vec::new();
    for outcome in scan_profiles(dir) {
        match outcome {
            LoadOutcome::Loaded(profile) => profiles.push(profile),
            LoadOutcome::Skipped { path, reason } => {
                error!("Skipping profile {}: {reason}", path.display());
            }
        }
    }
    info!("Loaded {} profile(s) from {}", profiles.len(), dir.display());
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "nom": "Karim Benali",
        "titre": "Consultant Data",
        "profil": {"description": "BI et data engineering"},
        "competences": {"langages": ["SQL", "Python"], "outils": ["Power BI"]},
        "experiences_professionnelles": [
            {"titre": "Finance – Analyst", "description": "Reporting"},
            {"titre": "Finance, Consultant", "description": "Modélisation"},
            {"titre": "Retail - Data engineer", "description": "Pipelines"}
        ]
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_returns_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(load_profiles(&missing).is_empty());
        assert!(scan_profiles(&missing).is_empty());
    }

    #[test]
    fn test_path_to_a_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", VALID);
        assert!(load_profiles(&dir.path().join("a.json")).is_empty());
    }

    #[test]
    fn test_malformed_file_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "karim.json", VALID);
        write(&dir, "broken.json", "{ \"nom\": ");

        let profiles = load_profiles(dir.path());
        assert_eq!(profiles.len(), 1);
        let profile = &profiles[0];
        assert_eq!(profile.name, "Karim Benali");
        assert_eq!(profile.years_experience, 5);
        assert_eq!(profile.sectors, vec!["Finance", "Retail"]);
        assert_eq!(profile.skills, vec!["SQL", "Python", "Power BI"]);
    }

    #[test]
    fn test_scan_reports_skip_with_path_and_reason() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a_valid.json", VALID);
        write(&dir, "b_wrong_schema.json", r#"{"nom": "Sans profil", "titre": "x"}"#);

        let outcomes = scan_profiles(dir.path());
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], LoadOutcome::Loaded(_)));
        match &outcomes[1] {
            LoadOutcome::Skipped { path, reason } => {
                assert!(path.ends_with("b_wrong_schema.json"));
                assert!(matches!(reason, ProfileLoadError::Parse(_)));
            }
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn test_only_json_files_are_read() {
        let dir = TempDir::new().unwrap();
        write(&dir, "karim.json", VALID);
        write(&dir, "notes.txt", "pas un profil");
        write(&dir, "karim.json.bak", VALID);
        fs::create_dir(dir.path().join("archive")).unwrap();
        write(&dir, "archive/old.json", VALID);

        assert_eq!(scan_profiles(dir.path()).len(), 1);
    }

    #[test]
    fn test_unreadable_entry_is_an_io_skip() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.json")).unwrap();

        match load_profile_file(&dir.path().join("folder.json")) {
            LoadOutcome::Skipped { reason, .. } => {
                assert!(matches!(reason, ProfileLoadError::Io(_)))
            }
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory_returns_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_profiles(dir.path()).is_empty());
    }
}
