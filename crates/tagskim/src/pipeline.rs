//! The scan → sort → emit pipeline driver.

use std::cmp;
use std::io::{Read, Write};

use crate::error::{PipelineError, ScanError};
use crate::record::Record;
use crate::scanner::Scanner;
use crate::tags::TagSet;

/// Upper cap on the scan window, independent of file size. Files larger
/// than this are processed by repeated refills; a single record spanning
/// more than one window's worth of bytes cannot be recognized.
pub const MAX_WINDOW_BYTES: usize = 1024 * 1024;

/// Window size for a source of `source_len` bytes: the whole source when
/// it fits under the cap, the cap otherwise, plus one byte of slack.
#[must_use]
pub fn window_capacity(source_len: u64) -> usize {
    let clamped = cmp::min(source_len, MAX_WINDOW_BYTES as u64);
    usize::try_from(clamped).unwrap_or(MAX_WINDOW_BYTES) + 1
}

/// Scans `reader` to end of input and returns the extracted records in
/// document order. The source is read sequentially, exactly once, through
/// a window of `window_capacity` bytes.
///
/// # Errors
///
/// Returns [`ScanError::Read`] on a mid-stream I/O failure. Malformed
/// markup is never an error; see the crate docs.
pub fn scan_records<R: Read>(
    reader: R,
    tags: &TagSet,
    window_capacity: usize,
) -> Result<Vec<Record>, ScanError> {
    Scanner::new(reader, tags, window_capacity).scan()
}

/// Sorts records ascending by identifier, comparing raw bytes. The sort is
/// unstable: records sharing an identifier keep no particular relative
/// order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_unstable_by(|a, b| a.id.as_bytes().cmp(b.id.as_bytes()));
}

/// Writes one line per record, the display-name verbatim, in the order
/// given.
///
/// # Errors
///
/// Returns [`PipelineError::Emit`] if the output stream fails.
pub fn emit_names<W: Write>(records: &[Record], out: &mut W) -> Result<(), PipelineError> {
    for record in records {
        out.write_all(record.name.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .map_err(PipelineError::Emit)?;
    }
    Ok(())
}

/// Runs the whole pipeline: scan `reader`, sort by identifier, and emit
/// sorted display-names to `out`.
///
/// # Errors
///
/// Propagates scan and emit failures; see [`scan_records`] and
/// [`emit_names`].
pub fn run<R: Read, W: Write>(
    reader: R,
    source_len: u64,
    tags: &TagSet,
    out: &mut W,
) -> Result<(), PipelineError> {
    let mut records = scan_records(reader, tags, window_capacity(source_len))?;
    sort_records(&mut records);
    emit_names(&records, out)
}
