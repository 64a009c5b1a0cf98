//! Step grouping: exposition events into one group per `change_uuid`.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::Event;

/// The events of one logical edit.
#[derive(Debug, Clone, PartialEq)]
pub struct StepGroup {
    /// 1-based position after ordering by minimum timestamp.
    pub step_number: usize,
    pub change_uuid: String,
    /// Earliest timestamp in the group, if any event has one.
    pub min_timestamp: Option<String>,
    /// Ascending by timestamp; events without one come last.
    pub events: Vec<Event>,
}

/// Groups plus the number of events that could not be attributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupOutcome {
    pub groups: Vec<StepGroup>,
    pub ungrouped: usize,
}

/// Group events by correlation key and order the groups.
///
/// Events without a `change_uuid` are dropped and counted. Groups are
/// ordered by their earliest timestamp; ties and groups without timestamps
/// keep first-seen order, with untimed groups last.
pub fn group_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> GroupOutcome {
    let mut groups: Vec<StepGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ungrouped = 0;

    for event in events {
        let Some(change_uuid) = event.change_uuid.as_deref() else {
            ungrouped += 1;
            continue;
        };
        let slot = *index.entry(change_uuid.to_string()).or_insert_with(|| {
            groups.push(StepGroup {
                step_number: 0,
                change_uuid: change_uuid.to_string(),
                min_timestamp: None,
                events: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        if let Some(ts) = &event.timestamp
            && group.min_timestamp.as_ref().is_none_or(|min| ts < min)
        {
            group.min_timestamp = Some(ts.clone());
        }
        group.events.push(event.clone());
    }

    for group in &mut groups {
        group
            .events
            .sort_by(|a, b| timed_first(a.timestamp.as_deref(), b.timestamp.as_deref()));
    }
    groups.sort_by(|a, b| timed_first(a.min_timestamp.as_deref(), b.min_timestamp.as_deref()));
    for (i, group) in groups.iter_mut().enumerate() {
        group.step_number = i + 1;
    }

    GroupOutcome { groups, ungrouped }
}

/// Lexical order on timestamps, with absent timestamps after present ones.
fn timed_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
