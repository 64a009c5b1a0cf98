//! Output formatting for CLI display.

use jiff::Timestamp;

use crate::model::{Extraction, Slot, SlotKind, Step};

use super::select::short_id;

/// One listing line: number, short id, time, elapsed since the first step,
/// and a mark per slot.
pub(super) fn format_step_line(step: &Step, first_timestamp: Option<&str>) -> String {
    let short = short_id(&step.change_uuid);
    if let Slot::Error(message) = &step.content.user_input {
        return format!("{:>3}  {short:<8}  error: {message}", step.step_number);
    }

    let elapsed = first_timestamp
        .and_then(|first| format_elapsed(first, &step.timestamp))
        .unwrap_or_default();
    let marks: Vec<&str> = SlotKind::ALL
        .iter()
        .map(|kind| {
            if step.content.get(*kind).is_found() {
                slot_label(*kind)
            } else {
                "-"
            }
        })
        .collect();

    format!(
        "{:>3}  {short:<8}  {}  {elapsed:>9}  {}",
        step.step_number,
        step.timestamp,
        marks.join(" ")
    )
}

/// Elapsed time from `first` to `later` as `+1h 02m 03s`.
///
/// `None` when either timestamp is not RFC 3339.
pub(super) fn format_elapsed(first: &str, later: &str) -> Option<String> {
    let first: Timestamp = first.parse().ok()?;
    let later: Timestamp = later.parse().ok()?;
    let secs = later.as_second() - first.as_second();

    let sign = if secs < 0 { "-" } else { "+" };
    let secs = secs.unsigned_abs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    Some(if h > 0 {
        format!("{sign}{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{sign}{m}m {s:02}s")
    } else {
        format!("{sign}{s}s")
    })
}

fn slot_label(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::InputCpeeTree => "tree-in",
        SlotKind::InputIntermediate => "diagram-in",
        SlotKind::UserInput => "prompt",
        SlotKind::OutputIntermediate => "diagram-out",
        SlotKind::OutputCpeeTree => "tree-out",
    }
}

/// A slot's text, or a placeholder.
pub(super) fn format_slot(slot: &Slot) -> String {
    match slot {
        Slot::Found(text) => text.clone(),
        Slot::NotFound => "(not found)".to_string(),
        Slot::Error(message) => format!("error: {message}"),
    }
}

/// Human-readable extraction report.
pub(super) fn format_report(extraction: &Extraction) -> Vec<String> {
    let r = &extraction.report;
    let mut lines = vec![
        format!("Steps: {}", extraction.steps.len()),
        format!(
            "Documents: {} ({} skipped)",
            r.documents, r.skipped_documents
        ),
        format!("Events: {} ({} exposition)", r.events, r.expositions),
        format!("Ungrouped exposition events: {}", r.ungrouped_events),
        format!("Unrecognized payloads: {}", r.unrecognized_payloads),
        format!("Overwritten slots: {}", r.overwrites.len()),
    ];
    for o in &r.overwrites {
        lines.push(format!(
            "  step {} ({}): {}",
            o.step_number,
            short_id(&o.change_uuid),
            o.slot
        ));
    }
    lines.push(format!("Untimed steps: {}", r.untimed_groups.len()));
    for change_uuid in &r.untimed_groups {
        lines.push(format!("  {change_uuid}"));
    }
    lines.push(format!("Failed steps: {}", r.failed_groups.len()));
    for change_uuid in &r.failed_groups {
        lines.push(format!("  {change_uuid}"));
    }
    lines
}
