//! Content classification: which slot a payload belongs in.
//!
//! The producer writes each artifact from a fixed template, so a marker
//! string is enough to tell them apart. Markers are checked in slot order;
//! the first match wins.

use serde::{Deserialize, Serialize};

use crate::model::SlotKind;

/// Marker strings identifying each kind of payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Markers {
    /// Comment heading the input process tree.
    pub input_cpee_tree: String,
    pub input_intermediate: String,
    /// Heading the user prompt starts with.
    pub user_input: String,
    pub output_intermediate: String,
    /// Comment heading the output process tree.
    pub output_cpee_tree: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            input_cpee_tree: "<!-- Input CPEE-Tree -->".to_string(),
            input_intermediate: "Input Intermediate".to_string(),
            user_input: "User Input:".to_string(),
            output_intermediate: "Output Intermediate".to_string(),
            output_cpee_tree: "<!-- Output CPEE-Tree -->".to_string(),
        }
    }
}

/// Sniffs payload text into content slots.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    markers: Markers,
}

impl Classifier {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }

    /// The slot a payload belongs in, or `None` if no marker matches.
    pub fn classify(&self, payload: &str) -> Option<SlotKind> {
        let m = &self.markers;
        if payload.contains(&m.input_cpee_tree) {
            Some(SlotKind::InputCpeeTree)
        } else if payload.contains(&m.input_intermediate) {
            Some(SlotKind::InputIntermediate)
        } else if heading(payload).starts_with(&m.user_input) {
            Some(SlotKind::UserInput)
        } else if payload.contains(&m.output_intermediate) {
            Some(SlotKind::OutputIntermediate)
        } else if payload.contains(&m.output_cpee_tree) {
            Some(SlotKind::OutputCpeeTree)
        } else {
            None
        }
    }
}

/// Payload text with leading whitespace and Markdown heading hashes removed.
fn heading(payload: &str) -> &str {
    payload.trim_start().trim_start_matches('#').trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(payload: &str) -> Option<SlotKind> {
        Classifier::default().classify(payload)
    }

    #[test]
    fn recognizes_each_template() {
        assert_eq!(
            classify("<!-- Input CPEE-Tree -->\n<description/>"),
            Some(SlotKind::InputCpeeTree)
        );
        assert_eq!(
            classify("%% Input Intermediate\ngraph TD"),
            Some(SlotKind::InputIntermediate)
        );
        assert_eq!(
            classify("# User Input:\nadd a task"),
            Some(SlotKind::UserInput)
        );
        assert_eq!(
            classify("%% Output Intermediate\ngraph TD"),
            Some(SlotKind::OutputIntermediate)
        );
        assert_eq!(
            classify("<!-- Output CPEE-Tree -->\n<description/>"),
            Some(SlotKind::OutputCpeeTree)
        );
    }

    #[test]
    fn user_input_must_lead() {
        assert_eq!(classify("User Input: do it"), Some(SlotKind::UserInput));
        assert_eq!(classify("  ## User Input: do it"), Some(SlotKind::UserInput));
        assert_eq!(classify("note\nUser Input: do it"), None);
    }

    #[test]
    fn first_marker_in_order_wins() {
        let both = "<!-- Output CPEE-Tree -->\n<!-- Input CPEE-Tree -->";
        assert_eq!(classify(both), Some(SlotKind::InputCpeeTree));
    }

    #[test]
    fn unrecognized_payload() {
        assert_eq!(classify("just some notes"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn custom_markers() {
        let classifier = Classifier::new(Markers {
            user_input: "Prompt:".into(),
            ..Markers::default()
        });
        assert_eq!(classifier.classify("Prompt: hi"), Some(SlotKind::UserInput));
        assert_eq!(classifier.classify("User Input: hi"), None);
    }
}
