//! Log-to-step extraction.
//!
//! A log is split into documents, each document is read into a mapping and
//! normalized into an event, exposition events are grouped by `change_uuid`,
//! and every group becomes a step whose five content slots are filled by
//! sniffing payload markers.
//!
//! Extraction is pure and total: it never fails on malformed input. Every
//! degradation (skipped documents, ungrouped events, unrecognized payloads,
//! overwritten slots, untimed or failed groups) is counted in the
//! [`ExtractReport`].

mod assemble;
mod classify;
mod group;
mod reader;
mod split;
mod stream;

pub use assemble::{AssemblyError, AssemblyReport, assemble};
pub use classify::{Classifier, Markers};
pub use group::{GroupOutcome, StepGroup, group_events};
pub use reader::{coerce, read_document};
pub use split::split_documents;
pub use stream::EventStream;

use crate::model::{Event, ExtractReport, Extraction, FieldNames, Mapping, Step};

/// Extract steps from log text with the default field names and markers.
pub fn extract_steps(text: &str) -> Vec<Step> {
    Extractor::default().extract(text).steps
}

/// The extraction pipeline, configured with field names and markers.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    fields: FieldNames,
    classifier: Classifier,
}

impl Extractor {
    pub fn new(fields: FieldNames, markers: Markers) -> Self {
        Self {
            fields,
            classifier: Classifier::new(markers),
        }
    }

    /// Run the whole pipeline over one log.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut report = ExtractReport::default();

        let bodies = split_documents(text);
        report.documents = bodies.len();

        let documents: Vec<Mapping> = bodies
            .into_iter()
            .enumerate()
            .filter_map(|(i, body)| {
                let document = read_document(body);
                if document.is_empty() {
                    tracing::debug!(document = i, "skipping document with no readable entries");
                    report.skipped_documents += 1;
                    return None;
                }
                Some(document)
            })
            .collect();

        let stream = EventStream::from_documents(documents, &self.fields);
        report.events = stream.len();

        let expositions: Vec<&Event> = stream
            .events()
            .iter()
            .filter(|event| event.is_exposition())
            .collect();
        report.expositions = expositions.len();

        let GroupOutcome { groups, ungrouped } = group_events(expositions);
        report.ungrouped_events = ungrouped;

        let (steps, assembly) = assemble(&groups, &self.classifier);
        report.unrecognized_payloads = assembly.unrecognized;
        report.overwrites = assembly.overwrites;
        report.untimed_groups = assembly.untimed_groups;
        report.failed_groups = assembly.failed_groups;

        tracing::info!(
            documents = report.documents,
            events = report.events,
            steps = steps.len(),
            "extracted steps"
        );

        Extraction { steps, report }
    }
}
