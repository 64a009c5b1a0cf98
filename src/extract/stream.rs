//! Event stream: parsed documents in canonical shape, in log order.

use crate::model::{Event, FieldNames, Mapping, Value};

/// The ordered events of one log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStream {
    events: Vec<Event>,
}

impl EventStream {
    /// Normalize parsed documents into events, keeping their order.
    pub fn from_documents(
        documents: impl IntoIterator<Item = Mapping>,
        fields: &FieldNames,
    ) -> Self {
        let events = documents
            .into_iter()
            .map(|doc| Event::from_document(doc, fields))
            .collect();
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events whose body value at `path` equals `expected`.
    ///
    /// `path` is a `.`-separated key path into the event body.
    pub fn filter_by_field(&self, path: &str, expected: &Value) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.get_path(path) == Some(expected))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::extract::reader::read_document;
    use crate::model::EXPOSITION;

    fn stream(docs: &[&str]) -> EventStream {
        EventStream::from_documents(
            docs.iter().map(|d| read_document(d)),
            &FieldNames::default(),
        )
    }

    #[test]
    fn filters_on_namespaced_field() {
        let stream = stream(&[
            "event:\n  lifecycle:transition: description/exposition\n  change_uuid: a",
            "event:\n  lifecycle:transition: activity/calling\n  change_uuid: b",
            "event:\n  lifecycle:transition: description/exposition\n  change_uuid: c",
        ]);

        let matched = stream.filter_by_field("lifecycle:transition", &Value::from(EXPOSITION));
        let ids: Vec<_> = matched
            .iter()
            .map(|e| e.change_uuid.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filter_compares_typed_values() {
        let stream = stream(&["count: 3", "count: '3'"]);

        assert_eq!(stream.filter_by_field("count", &Value::Number(3.0)).len(), 1);
        assert_eq!(stream.filter_by_field("count", &Value::from("3")).len(), 1);
    }

    #[test]
    fn filter_on_missing_field_matches_nothing() {
        let stream = stream(&["a: 1", "b: 2"]);
        assert!(stream.filter_by_field("c", &Value::Null).is_empty());
    }

    #[test]
    fn keeps_document_order() {
        let stream = stream(&["n: 1", "n: 2", "n: 3"]);
        let ns: Vec<_> = stream
            .events()
            .iter()
            .map(|e| e.body.get("n").cloned())
            .collect();
        assert_eq!(
            ns,
            vec![
                Some(Value::Number(1.0)),
                Some(Value::Number(2.0)),
                Some(Value::Number(3.0))
            ]
        );
        assert_eq!(stream.len(), 3);
    }
}
