//! Form assembly from command-line flags and JSON form files.
//!
//! # Responsibility
//! - Play the host role: collect raw form values, never interpret them.
//!
//! # Invariants
//! - Flags override file values field by field; `--event` rows are appended
//!   after file rows, preserving order.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use timeline_core::{EventEntry, TimelineForm};

/// Raw form values taken from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOverrides {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub minor: Option<String>,
    pub major: Option<String>,
    /// `DATE=LABEL` pairs.
    pub events: Vec<String>,
}

/// Failure reading a `--form` file.
#[derive(Debug)]
pub enum FormLoadError {
    Io { path: PathBuf, source: std::io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl Display for FormLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read form `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid form JSON in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for FormLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Reads a JSON-encoded [`TimelineForm`]; missing fields default to empty.
pub fn load_form(path: &Path) -> Result<TimelineForm, FormLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FormLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FormLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies flag values on top of `base`.
pub fn apply_overrides(mut base: TimelineForm, overrides: FormOverrides) -> TimelineForm {
    if let Some(title) = overrides.title {
        base.title = title;
    }
    if let Some(start) = overrides.start {
        base.start = start;
    }
    if let Some(end) = overrides.end {
        base.end = end;
    }
    if let Some(minor) = overrides.minor {
        base.minor_increment = minor;
    }
    if let Some(major) = overrides.major {
        base.major_increment = major;
    }
    base.events
        .extend(overrides.events.iter().map(|pair| parse_event_flag(pair)));
    base
}

/// Splits `DATE=LABEL` at the first `=`; a missing label stays empty so the
/// engine drops the row like an unlabeled form entry.
pub fn parse_event_flag(pair: &str) -> EventEntry {
    match pair.split_once('=') {
        Some((date, label)) => EventEntry::new(date, label),
        None => EventEntry::new(pair, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_overrides, load_form, parse_event_flag, FormLoadError, FormOverrides};
    use std::io::Write;
    use timeline_core::TimelineForm;

    #[test]
    fn event_flag_splits_on_first_equals() {
        let entry = parse_event_flag("1066=Battle = Hastings");
        assert_eq!(entry.raw_date, "1066");
        assert_eq!(entry.label, "Battle = Hastings");

        let unlabeled = parse_event_flag("1066");
        assert_eq!(unlabeled.raw_date, "1066");
        assert!(unlabeled.label.is_empty());
    }

    #[test]
    fn flags_override_file_values_and_append_events() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"From file","start":"0","end":"10","events":[{{"date":"2","label":"first"}}]}}"#
        )
        .unwrap();

        let base = load_form(file.path()).unwrap();
        let form = apply_overrides(
            base,
            FormOverrides {
                end: Some("20".to_string()),
                events: vec!["15=second".to_string()],
                ..FormOverrides::default()
            },
        );

        assert_eq!(form.title, "From file");
        assert_eq!(form.start, "0");
        assert_eq!(form.end, "20");
        assert!(form.minor_increment.is_empty());
        let labels: Vec<_> = form.events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_form(file.path()).unwrap_err();
        assert!(matches!(err, FormLoadError::Json { .. }));
        assert!(err.to_string().contains("invalid form JSON"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_form(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FormLoadError::Io { .. }));
    }

    #[test]
    fn overrides_on_empty_form_build_everything_from_flags() {
        let form = apply_overrides(
            TimelineForm::default(),
            FormOverrides {
                title: Some("t".to_string()),
                start: Some("-1".to_string()),
                end: Some("1".to_string()),
                minor: Some("0.5".to_string()),
                major: Some("1".to_string()),
                events: Vec::new(),
            },
        );
        assert_eq!(form.minor_increment, "0.5");
        assert_eq!(form.major_increment, "1");
    }
}
