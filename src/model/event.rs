//! Event: one parsed log document in canonical shape.

use serde::{Deserialize, Serialize};

use super::value::{Mapping, Value};

/// Transition value that marks an event as carrying readable content.
pub const EXPOSITION: &str = "description/exposition";

/// Key under which log producers nest the event body.
const EVENT_KEY: &str = "event";

/// Which body keys hold the fields the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FieldNames {
    /// Lifecycle transition; only [`EXPOSITION`] events become steps.
    pub transition: String,

    /// Correlation key grouping the events of one edit.
    pub correlation: String,

    pub timestamp: String,

    /// Free-text content sniffed into a slot.
    pub payload: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            transition: "lifecycle:transition".to_string(),
            correlation: "change_uuid".to_string(),
            timestamp: "timestamp".to_string(),
            payload: "exposition".to_string(),
        }
    }
}

/// One log document, normalized.
///
/// Producers write the body either nested under `event` or directly at the
/// document root. Normalization picks the body once so nothing downstream
/// has to care.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub body: Mapping,
    pub transition: Option<String>,
    pub change_uuid: Option<String>,
    pub timestamp: Option<String>,
    pub payload: Option<String>,
}

impl Event {
    /// Normalize a parsed document into an event.
    pub fn from_document(mut document: Mapping, fields: &FieldNames) -> Self {
        let body = match document.remove(EVENT_KEY) {
            Some(Value::Map(body)) => body,
            Some(other) => {
                document.insert(EVENT_KEY.to_string(), other);
                document
            }
            None => document,
        };

        let text = |key: &str| body.get(key).and_then(Value::as_text);
        Self {
            transition: text(&fields.transition),
            change_uuid: text(&fields.correlation),
            timestamp: text(&fields.timestamp),
            payload: text(&fields.payload),
            body,
        }
    }

    /// Look up a `.`-separated key path in the body.
    ///
    /// Keys may themselves contain `:` (`lifecycle:transition`).
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut current = self.body.get(keys.next()?)?;
        for key in keys {
            current = current.as_map()?.get(key)?;
        }
        Some(current)
    }

    pub fn is_exposition(&self) -> bool {
        self.transition.as_deref() == Some(EXPOSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, Value)]) -> Mapping {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn nested_event_body_is_lifted() {
        let body = mapping(&[
            ("lifecycle:transition", Value::from(EXPOSITION)),
            ("change_uuid", Value::from("u1")),
            ("timestamp", Value::from("2024-01-01T00:00:00Z")),
            ("exposition", Value::from("text")),
        ]);
        let doc = mapping(&[("event", Value::Map(body))]);

        let event = Event::from_document(doc, &FieldNames::default());
        assert!(event.is_exposition());
        assert_eq!(event.change_uuid.as_deref(), Some("u1"));
        assert_eq!(event.timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(event.payload.as_deref(), Some("text"));
    }

    #[test]
    fn flat_document_is_its_own_body() {
        let doc = mapping(&[
            ("lifecycle:transition", Value::from(EXPOSITION)),
            ("change_uuid", Value::Number(7.0)),
        ]);

        let event = Event::from_document(doc, &FieldNames::default());
        assert!(event.is_exposition());
        assert_eq!(event.change_uuid.as_deref(), Some("7"));
        assert!(event.payload.is_none());
    }

    #[test]
    fn scalar_event_key_stays_in_root() {
        let doc = mapping(&[("event", Value::from("oops")), ("change_uuid", "u".into())]);

        let event = Event::from_document(doc, &FieldNames::default());
        assert_eq!(event.body.get("event"), Some(&Value::from("oops")));
        assert_eq!(event.change_uuid.as_deref(), Some("u"));
    }

    #[test]
    fn custom_field_names() {
        let fields = FieldNames {
            transition: "cpee:lifecycle:transition".into(),
            correlation: "cpee:change_uuid".into(),
            timestamp: "time:timestamp".into(),
            payload: "cpee:exposition".into(),
        };
        let body = mapping(&[
            ("cpee:lifecycle:transition", Value::from(EXPOSITION)),
            ("cpee:change_uuid", Value::from("c")),
            ("time:timestamp", Value::from("t")),
        ]);
        let doc = mapping(&[("event", Value::Map(body))]);

        let event = Event::from_document(doc, &fields);
        assert!(event.is_exposition());
        assert_eq!(event.change_uuid.as_deref(), Some("c"));
        assert_eq!(event.timestamp.as_deref(), Some("t"));
    }

    #[test]
    fn get_path_walks_nested_maps() {
        let inner = mapping(&[("id:id", Value::from("x"))]);
        let doc = mapping(&[("data", Value::Map(inner))]);
        let event = Event::from_document(doc, &FieldNames::default());

        assert_eq!(event.get_path("data.id:id"), Some(&Value::from("x")));
        assert!(event.get_path("data.missing").is_none());
        assert!(event.get_path("data.id:id.deeper").is_none());
    }
}
