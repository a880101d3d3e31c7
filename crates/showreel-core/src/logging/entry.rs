//! Log entry type produced by [`ConsoleLayer`](super::ConsoleLayer).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How entries are rendered before they reach a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `LEVEL target: message key=value`
    #[default]
    Text,
    /// One JSON object per entry
    Json,
}

/// A single captured event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "showreel::components::video_gallery")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Optional structured fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Span scope, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    /// Add structured fields to the entry.
    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Add span scope to the entry.
    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Render as a single human-readable line.
    pub fn to_text_line(&self) -> String {
        let mut line = format!("{} {}", self.level.to_uppercase(), self.target);
        if let Some(span) = &self.span {
            line.push_str(&format!(" [{}]", span));
        }
        line.push_str(": ");
        line.push_str(&self.msg);
        if let Some(Value::Object(map)) = &self.fields {
            for (key, value) in map {
                match value {
                    Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                    other => line.push_str(&format!(" {}={}", key, other)),
                }
            }
        }
        line
    }

    /// Render in the requested format. JSON failures fall back to text.
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Text => self.to_text_line(),
            LogFormat::Json => self
                .to_json_line()
                .unwrap_or_else(|_| self.to_text_line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry::new("info", "showreel::app", "controllers mounted");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"msg\":\"controllers mounted\""));
        assert!(!json.contains("fields"));
    }

    #[test]
    fn test_text_line_with_fields_and_span() {
        let entry = LogEntry::new("warn", "showreel::gallery", "skipping card")
            .with_fields(serde_json::json!({ "index": 2, "reason": "empty" }))
            .with_span("mount");

        assert_eq!(
            entry.to_text_line(),
            "WARN showreel::gallery [mount]: skipping card index=2 reason=empty"
        );
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
