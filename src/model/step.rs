//! Step types: one reconstructed LLM-driven edit and its five artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical edit of a process definition, reconstructed from a
/// correlated group of exposition events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position in the step sequence.
    pub step_number: usize,

    /// Correlation key shared by every event of this step.
    pub change_uuid: String,

    /// Earliest timestamp among the step's events.
    /// Empty on an error step.
    pub timestamp: String,

    pub content: StepContent,
}

/// The five content slots of a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepContent {
    pub input_cpee_tree: Slot,
    pub input_intermediate: Slot,
    pub user_input: Slot,
    pub output_intermediate: Slot,
    pub output_cpee_tree: Slot,
}

impl StepContent {
    /// Content of a step whose group could not be assembled.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            user_input: Slot::Error(message.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: SlotKind) -> &Slot {
        match kind {
            SlotKind::InputCpeeTree => &self.input_cpee_tree,
            SlotKind::InputIntermediate => &self.input_intermediate,
            SlotKind::UserInput => &self.user_input,
            SlotKind::OutputIntermediate => &self.output_intermediate,
            SlotKind::OutputCpeeTree => &self.output_cpee_tree,
        }
    }

    /// Replace a slot, returning what was there before.
    pub fn set(&mut self, kind: SlotKind, slot: Slot) -> Slot {
        let target = match kind {
            SlotKind::InputCpeeTree => &mut self.input_cpee_tree,
            SlotKind::InputIntermediate => &mut self.input_intermediate,
            SlotKind::UserInput => &mut self.user_input,
            SlotKind::OutputIntermediate => &mut self.output_intermediate,
            SlotKind::OutputCpeeTree => &mut self.output_cpee_tree,
        };
        std::mem::replace(target, slot)
    }

    /// Whether any slot carries an error marker.
    pub fn is_error(&self) -> bool {
        SlotKind::ALL
            .iter()
            .any(|kind| matches!(self.get(*kind), Slot::Error(_)))
    }
}

/// What a content slot holds.
///
/// `NotFound` is a placeholder state for renderers, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "camelCase")]
pub enum Slot {
    /// Raw payload text, opaque to this crate.
    Found(String),

    #[default]
    NotFound,

    /// Why the step could not be assembled.
    Error(String),
}

impl Slot {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            Self::NotFound | Self::Error(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Names of the five content slots, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    InputCpeeTree,
    InputIntermediate,
    UserInput,
    OutputIntermediate,
    OutputCpeeTree,
}

impl SlotKind {
    pub const ALL: [Self; 5] = [
        Self::InputCpeeTree,
        Self::InputIntermediate,
        Self::UserInput,
        Self::OutputIntermediate,
        Self::OutputCpeeTree,
    ];

    /// The slot's name as it appears in serialized step content.
    pub fn name(self) -> &'static str {
        match self {
            Self::InputCpeeTree => "inputCpeeTree",
            Self::InputIntermediate => "inputIntermediate",
            Self::UserInput => "userInput",
            Self::OutputIntermediate => "outputIntermediate",
            Self::OutputCpeeTree => "outputCpeeTree",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
