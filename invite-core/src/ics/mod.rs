//! Content-line helpers for iCalendar output.
//!
//! Folding and DESCRIPTION chunking are deliberately separate: folded lines
//! carry a leading-space continuation, chunked description lines do not.

mod escape;
mod fold;
pub mod time;

pub use escape::{escape_param_value, escape_text};
pub use fold::{chunk_text, fold_line, MAX_LINE_OCTETS};

/// Line terminator for every content line.
pub const CRLF: &str = "\r\n";
