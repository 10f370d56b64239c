//! Journal entry format.
//!
//! One JSON object per line. Entries are self-contained so a journal can be
//! appended to, tailed and grepped without a parser that understands framing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One event in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Which front end wrote it (`desktop`, `cli`, ...)
    pub instance: String,

    /// Module path of the event
    pub target: String,

    pub msg: String,

    /// Structured event fields (`amount`, `method`, `step`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, outermost first, joined with ` > `
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JournalEntry {
    /// Entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        instance: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            instance: instance.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// A string field, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.as_ref()?.get(name)
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line_shape() {
        let entry = JournalEntry::new("info", "cli", "raggaeirre_core::donation", "Donation submitted")
            .with_fields(serde_json::json!({ "amount": 1000, "method": "mpesa" }));

        let line = entry.to_json_line().unwrap();
        assert!(line.contains("\"level\":\"info\""));
        assert!(line.contains("\"instance\":\"cli\""));
        assert!(line.contains("\"amount\":1000"));
        assert!(!line.contains("\"span\""));

        let parsed = JournalEntry::from_json_line(&line).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.field("method"), Some(&serde_json::json!("mpesa")));
    }

    #[test]
    fn test_missing_field() {
        let entry = JournalEntry::new("debug", "desktop", "t", "m");
        assert!(entry.field("anything").is_none());
    }
}
