//! Step assembly: one step per group, slots filled from classified payloads.

use crate::model::{Slot, SlotOverwrite, Step, StepContent};

use super::classify::Classifier;
use super::group::StepGroup;

/// Why a group could not become a step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("step {change_uuid} has no events")]
    NoEvents { change_uuid: String },
}

/// What assembly dropped or overwrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    pub unrecognized: usize,
    pub overwrites: Vec<SlotOverwrite>,
    /// Groups built with an empty timestamp because no event carried one.
    pub untimed_groups: Vec<String>,
    pub failed_groups: Vec<String>,
}

/// Build one step per group, in group order.
///
/// A group that cannot be assembled becomes an error step instead, so one
/// bad group never hides the rest.
pub fn assemble(groups: &[StepGroup], classifier: &Classifier) -> (Vec<Step>, AssemblyReport) {
    let mut report = AssemblyReport::default();
    let steps = groups
        .iter()
        .map(|group| match build_step(group, classifier, &mut report) {
            Ok(step) => step,
            Err(e) => {
                tracing::warn!(
                    change_uuid = %group.change_uuid,
                    error = %e,
                    "replacing step with error step"
                );
                report.failed_groups.push(group.change_uuid.clone());
                Step {
                    step_number: group.step_number,
                    change_uuid: group.change_uuid.clone(),
                    timestamp: String::new(),
                    content: StepContent::error(e.to_string()),
                }
            }
        })
        .collect();
    (steps, report)
}

fn build_step(
    group: &StepGroup,
    classifier: &Classifier,
    report: &mut AssemblyReport,
) -> Result<Step, AssemblyError> {
    if group.events.is_empty() {
        return Err(AssemblyError::NoEvents {
            change_uuid: group.change_uuid.clone(),
        });
    }
    let timestamp = group.min_timestamp.clone().unwrap_or_else(|| {
        tracing::warn!(change_uuid = %group.change_uuid, "step has no timestamped events");
        report.untimed_groups.push(group.change_uuid.clone());
        String::new()
    });

    let mut content = StepContent::default();
    let mut overwrites = Vec::new();
    let mut unrecognized = 0;

    for event in &group.events {
        let Some(payload) = event.payload.as_deref() else {
            unrecognized += 1;
            continue;
        };
        let Some(kind) = classifier.classify(payload) else {
            tracing::debug!(change_uuid = %group.change_uuid, "payload matches no content marker");
            unrecognized += 1;
            continue;
        };
        let previous = content.set(kind, Slot::Found(payload.to_string()));
        if previous.is_found() {
            tracing::warn!(
                step = group.step_number,
                change_uuid = %group.change_uuid,
                slot = %kind,
                "slot assigned twice, keeping the later payload"
            );
            overwrites.push(SlotOverwrite {
                step_number: group.step_number,
                change_uuid: group.change_uuid.clone(),
                slot: kind,
            });
        }
    }

    report.unrecognized += unrecognized;
    report.overwrites.extend(overwrites);

    Ok(Step {
        step_number: group.step_number,
        change_uuid: group.change_uuid.clone(),
        timestamp,
        content,
    })
}
