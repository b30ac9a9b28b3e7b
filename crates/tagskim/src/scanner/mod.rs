//! Boundary scanner: the state machine at the core of the pipeline.
//!
//! The scanner walks the sliding [`Window`] looking for literal marker
//! substrings and tracks which structural context it is in. Three states:
//!
//! - `SeekingList`: outside any list, hunting for the list-start marker.
//!   When the marker is not in the buffered window, the window slides
//!   forward keeping only the longest possible split-marker prefix, so a
//!   marker straddling a refill boundary is still found.
//! - `InList`: inside a list. The list-end marker is located once and
//!   cached; a record-start marker found strictly before it opens a record.
//!   The cache is cleared only when the list closes, never re-searched, and
//!   is rebased by the shift distance whenever a refill moves the buffer.
//!   When neither marker is buffered, no record is open and the cache is
//!   necessarily empty, so the window slides the same way `SeekingList`
//!   does; an inter-record junk run longer than the window is skipped, not
//!   fatal.
//! - `InRecord`: inside a record, hunting for the record-end marker. The
//!   whole record is assumed to fit in one window; a record that overflows
//!   the window stalls the refill (zero fresh bytes) and ends the scan.
//!
//! A refill that produces zero fresh bytes terminates the scan in any
//! state. An unterminated list or record at end of input is not an error:
//! the open record, if any, is discarded and everything extracted so far is
//! returned.

use std::io::Read;

use bstr::ByteSlice;

use crate::error::ScanError;
use crate::extract::extract_record;
use crate::record::Record;
use crate::tags::TagSet;
use crate::window::{Refill, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingList,
    InList,
    InRecord,
}

/// Streaming scanner over one source; single use.
pub(crate) struct Scanner<'t, R> {
    reader: R,
    window: Window,
    tags: &'t TagSet,
    state: ScanState,
    /// Cached window offset of the current list's end marker, if located.
    list_end: Option<usize>,
    records: Vec<Record>,
}

impl<'t, R: Read> Scanner<'t, R> {
    pub(crate) fn new(reader: R, tags: &'t TagSet, window_capacity: usize) -> Self {
        Self {
            reader,
            window: Window::with_capacity(window_capacity),
            tags,
            state: ScanState::SeekingList,
            list_end: None,
            records: Vec::new(),
        }
    }

    /// Runs the state machine to end of input and returns the records in
    /// document order.
    pub(crate) fn scan(mut self) -> Result<Vec<Record>, ScanError> {
        if self.refill()?.fresh == 0 {
            return Ok(self.records);
        }
        loop {
            let more = match self.state {
                ScanState::SeekingList => self.seek_list()?,
                ScanState::InList => self.step_list()?,
                ScanState::InRecord => self.step_record()?,
            };
            if !more {
                return Ok(self.records);
            }
        }
    }

    /// Finds `marker` in the unconsumed region, as an absolute window
    /// offset.
    fn find(&self, marker: &str) -> Option<usize> {
        self.window
            .unconsumed()
            .find(marker)
            .map(|at| self.window.cursor() + at)
    }

    /// Refills the window and rebases the cached list-end offset by the
    /// shift distance. A cache that would rebase below the origin belonged
    /// to already-consumed bytes and is dropped.
    fn refill(&mut self) -> Result<Refill, ScanError> {
        let refill = self.window.refill(&mut self.reader).map_err(ScanError::Read)?;
        if refill.shift > 0 {
            self.list_end = self
                .list_end
                .and_then(|off| off.checked_sub(refill.shift));
        }
        Ok(refill)
    }

    /// Consumes everything buffered except the last `keep` bytes, so the
    /// next refill has room to read. `keep` is the longest possible prefix
    /// of a marker split at the window edge; only call this when the bytes
    /// being consumed can never be needed again.
    fn slide(&mut self, keep: usize) {
        let slide_to = self
            .window
            .filled()
            .saturating_sub(keep)
            .max(self.window.cursor());
        self.window.consume_to(slide_to);
    }

    /// `SeekingList`: hunt for the list-start marker, sliding the window
    /// forward as needed. Returns `false` at end of stream.
    fn seek_list(&mut self) -> Result<bool, ScanError> {
        loop {
            if let Some(at) = self.find(&self.tags.list_start) {
                self.window.consume_to(at + self.tags.list_start.len());
                self.state = ScanState::InList;
                return Ok(true);
            }
            // Everything buffered except a potential marker prefix at the
            // very end is dead weight; consume it so the refill can slide.
            self.slide(self.tags.list_start.len().saturating_sub(1));
            if self.refill()?.fresh == 0 {
                return Ok(false);
            }
        }
    }

    /// `InList`: decide between opening the next record and closing the
    /// list. A record-start strictly before the cached list-end wins.
    fn step_list(&mut self) -> Result<bool, ScanError> {
        loop {
            // A cached list-end the cursor has already passed can only come
            // from contract-violating input (a list-end nested inside a
            // record body); it is unusable, so drop it and search again.
            if self.list_end.is_some_and(|end| end < self.window.cursor()) {
                self.list_end = None;
            }
            if self.list_end.is_none() {
                self.list_end = self.find(&self.tags.list_end);
            }
            let record_start = self.find(&self.tags.record_start);

            if let Some(at) = record_start {
                if self.list_end.is_none_or(|end| at < end) {
                    self.window.consume_to(at + self.tags.record_start.len());
                    self.state = ScanState::InRecord;
                    return Ok(true);
                }
            }
            if let Some(end) = self.list_end {
                self.window.consume_to(end + self.tags.list_end.len());
                self.list_end = None;
                self.state = ScanState::SeekingList;
                return Ok(true);
            }
            // Neither marker is buffered and no record is open, so the
            // bytes between the cursor and a possible split-marker prefix
            // at the window edge are dead weight; slide past them so a run
            // of junk longer than the window cannot stall the refill.
            let keep = self
                .tags
                .record_start
                .len()
                .max(self.tags.list_end.len())
                .saturating_sub(1);
            self.slide(keep);
            if self.refill()?.fresh == 0 {
                return Ok(false);
            }
        }
    }

    /// `InRecord`: hunt for the record-end marker, extract the body, and
    /// fall back to `InList`. An open record at end of stream is discarded.
    fn step_record(&mut self) -> Result<bool, ScanError> {
        loop {
            if let Some(end) = self.find(&self.tags.record_end) {
                let body = &self.window.data()[self.window.cursor()..end];
                let record = extract_record(body, self.tags);
                self.records.push(record);
                self.window.consume_to(end + self.tags.record_end.len());
                self.state = ScanState::InList;
                return Ok(true);
            }
            if self.refill()?.fresh == 0 {
                return Ok(false);
            }
        }
    }
}
