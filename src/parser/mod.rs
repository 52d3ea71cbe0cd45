//! Raw log line classification.
//!
//! This module turns lines of client log text into typed events,
//! annotations, or skips. It is stateless; windowing and accumulation
//! live in the reducer.

pub mod event;

pub use event::{classify_line, Annotation, Classified, RawEvent, Status};
