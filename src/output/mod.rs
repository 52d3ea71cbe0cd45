//! Output file writers.

pub mod text;

pub use text::{write_lines, write_text};
