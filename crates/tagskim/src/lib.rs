//! A streaming, bounded-memory extractor for tag-delimited record lists.
//!
//! The input is a loosely structured text file: an outer list container
//! holding zero or more record containers, each record carrying an
//! identifier field and a display-name field, all delimited by literal
//! marker substrings (see [`TagSet`]). Files larger than memory are
//! handled by scanning through a fixed-capacity sliding window, refilled
//! in chunks while preserving any unconsumed tail, so record boundaries
//! may straddle refills freely. After the scan, records are sorted by
//! identifier and their names emitted one per line.
//!
//! The scanner trusts the input: markers are matched as exact
//! case-sensitive substrings with no escaping and no nesting of same-named
//! tags. Malformed markup never raises an error; it yields empty fields or
//! an early stop instead. The one structural limit is that a single record
//! must fit entirely within one window (see [`MAX_WINDOW_BYTES`]).

mod error;
mod extract;
mod pipeline;
mod record;
mod scanner;
mod tags;
mod window;

#[cfg(test)]
mod tests;

pub use error::{PipelineError, ScanError};
pub use pipeline::{
    MAX_WINDOW_BYTES, emit_names, run, scan_records, sort_records, window_capacity,
};
pub use record::{FieldBuf, ID_MAX_LEN, NAME_MAX_LEN, Record};
pub use tags::TagSet;
