//! Wiki template markup encoder.
//!
//! # Responsibility
//! - Encode a `TimelineDocument` as `{{<template>|data=<payload>}}`.
//!
//! # Invariants
//! - Payload is 2-space pretty JSON with every `"` replaced by `'`.
//! - Pre-existing `'` in titles/labels is not escaped; the consuming template
//!   cannot tell them apart from structural quotes.

use crate::model::document::TimelineDocument;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Template name used when neither host nor environment overrides it.
pub const DEFAULT_TEMPLATE_NAME: &str = "Timeline";
/// Environment variable hosts may set to target a differently named template.
pub const TEMPLATE_NAME_ENV: &str = "TIMELINE_TEMPLATE_NAME";

/// Export settings owned by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub template_name: String,
}

impl ExportConfig {
    /// Creates a config targeting `template_name`.
    ///
    /// Blank names fall back to [`DEFAULT_TEMPLATE_NAME`].
    pub fn new(template_name: impl Into<String>) -> Self {
        let template_name = template_name.into();
        let trimmed = template_name.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            template_name: trimmed.to_string(),
        }
    }

    /// Reads [`TEMPLATE_NAME_ENV`], falling back to the default template.
    pub fn from_env() -> Self {
        match std::env::var(TEMPLATE_NAME_ENV) {
            Ok(raw) => Self::new(raw),
            Err(_) => Self::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }
}

/// Serialization failure while encoding the payload.
#[derive(Debug)]
pub enum ExportError {
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "failed to encode timeline payload: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl TimelineDocument {
    /// Encodes this document as wiki template markup.
    pub fn to_wikitext(&self, config: &ExportConfig) -> Result<String, ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        let payload = json.replace('"', "'");
        Ok(format!(
            "{{{{{}|data={}}}}}",
            config.template_name, payload
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportConfig, DEFAULT_TEMPLATE_NAME};
    use crate::model::document::TimelineDocument;
    use crate::model::event::TimelineEvent;

    fn sample_document() -> TimelineDocument {
        TimelineDocument::new(
            "Rome",
            -100.0,
            100.0,
            10.0,
            0.0,
            vec![TimelineEvent {
                date: -44.0,
                date_label: "-44".to_string(),
                label: "Ides of March".to_string(),
            }],
        )
    }

    #[test]
    fn wraps_payload_in_template_braces() {
        let text = sample_document()
            .to_wikitext(&ExportConfig::default())
            .unwrap();
        assert!(text.starts_with("{{Timeline|data={\n"));
        assert!(text.ends_with("}}}"));
    }

    #[test]
    fn payload_uses_single_quotes_only() {
        let text = sample_document()
            .to_wikitext(&ExportConfig::default())
            .unwrap();
        assert!(!text.contains('"'));
        assert!(text.contains("'title': 'Rome'"));
        assert!(text.contains("'start_date': -100,"));
        assert!(text.contains("'date_label': '-44'"));
    }

    #[test]
    fn blank_template_name_falls_back_to_default() {
        assert_eq!(ExportConfig::new("  ").template_name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(ExportConfig::new(" Chronology ").template_name, "Chronology");
    }

    #[test]
    fn custom_template_name_is_used() {
        let text = sample_document()
            .to_wikitext(&ExportConfig::new("Chronology"))
            .unwrap();
        assert!(text.starts_with("{{Chronology|data="));
    }
}
