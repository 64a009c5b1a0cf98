//! Core data model for cpee-steps.
//!
//! These types carry a log from parsed documents to reconstructed steps:
//! values, events, steps and their content slots, and the extraction report.

mod event;
mod report;
mod step;
mod value;

pub use event::{EXPOSITION, Event, FieldNames};
pub use report::{ExtractReport, Extraction, SlotOverwrite};
pub use step::{Slot, SlotKind, Step, StepContent};
pub use value::{Mapping, Value};
