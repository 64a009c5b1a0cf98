//! Extraction report: what the pipeline dropped or papered over.

use serde::{Deserialize, Serialize};

use super::step::{SlotKind, Step};

/// Steps extracted from one log, plus the report describing how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub steps: Vec<Step>,
    pub report: ExtractReport,
}

/// Counts of every degradation performed while extracting steps.
///
/// None of these are failures; they describe how much of the log
/// contributed to the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractReport {
    /// Non-empty document blocks found in the log.
    pub documents: usize,

    /// Documents that parsed to nothing.
    pub skipped_documents: usize,

    /// Documents that became events.
    pub events: usize,

    /// Events whose transition marks them as exposition.
    pub expositions: usize,

    /// Exposition events without a correlation key.
    pub ungrouped_events: usize,

    /// Exposition events whose payload matched no content marker.
    pub unrecognized_payloads: usize,

    /// Slots assigned more than once within a step.
    pub overwrites: Vec<SlotOverwrite>,

    /// Correlation keys of steps built without any timestamp.
    pub untimed_groups: Vec<String>,

    /// Correlation keys of groups replaced by an error step.
    pub failed_groups: Vec<String>,
}

/// A slot that was filled twice in one step; the later payload won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotOverwrite {
    pub step_number: usize,
    pub change_uuid: String,
    pub slot: SlotKind,
}
