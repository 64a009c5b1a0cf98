//! Reconstruct the LLM-driven edit steps of a CPEE process-execution log.
//!
//! [`extract_steps`] takes the full text of a multi-document YAML log and
//! returns the ordered steps, each with its five content slots. It is pure,
//! synchronous, and never fails on malformed input, so callers can run it on
//! freshly fetched text and simply discard stale results.

pub mod cli;
pub mod config;
pub mod extract;
pub mod model;
pub mod source;

pub use extract::{Extractor, extract_steps};
pub use model::{Extraction, Slot, SlotKind, Step, StepContent};
