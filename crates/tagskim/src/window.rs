//! Sliding read window over a byte source.
//!
//! The window is a fixed-capacity buffer with a cursor splitting it into a
//! consumed prefix and an unconsumed tail. A refill shifts the tail to the
//! buffer origin, preserving it verbatim, and reads fresh bytes into the
//! space freed up. The scanner never needs consumed bytes again; unconsumed
//! bytes of an in-progress record survive any number of refills.
//!
//! Because the whole tail is always preserved, a refill with the cursor
//! still at the origin frees no space and reads zero fresh bytes. That
//! degenerate case is what bounds a record to one window: the scanner
//! treats zero fresh bytes as end of stream.

use std::io::{self, ErrorKind, Read};

/// Outcome of one [`Window::refill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Refill {
    /// Bytes newly read from the source; 0 means end of stream (or a full
    /// window with no room to read).
    pub fresh: usize,
    /// Distance the unconsumed tail moved toward the origin. Any offset
    /// into the previous window contents must be rebased by this amount.
    pub shift: usize,
}

/// Fixed-capacity sliding buffer over the source stream.
#[derive(Debug)]
pub(crate) struct Window {
    buf: Vec<u8>,
    filled: usize,
    cursor: usize,
}

impl Window {
    /// Allocates a window of exactly `capacity` bytes (minimum 1).
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)],
            filled: 0,
            cursor: 0,
        }
    }

    /// All currently buffered bytes, consumed and not.
    pub(crate) fn data(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Offset of the first unconsumed byte.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Offset one past the last buffered byte.
    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    /// The not-yet-scanned tail of the window.
    pub(crate) fn unconsumed(&self) -> &[u8] {
        &self.buf[self.cursor..self.filled]
    }

    /// Marks everything before `offset` as consumed. The cursor never moves
    /// backward.
    pub(crate) fn consume_to(&mut self, offset: usize) {
        debug_assert!(offset >= self.cursor, "cursor moved backward");
        debug_assert!(offset <= self.filled, "cursor past buffered data");
        self.cursor = offset.clamp(self.cursor, self.filled);
    }

    /// Shifts the unconsumed tail to the origin, resets the cursor, and
    /// reads from `reader` until the window is full or the source is
    /// exhausted. Interrupted reads are retried; any other I/O error is
    /// returned unchanged, distinct from a clean end of stream.
    pub(crate) fn refill<R: Read>(&mut self, reader: &mut R) -> io::Result<Refill> {
        let shift = self.cursor;
        let tail = self.filled - self.cursor;
        if shift > 0 {
            self.buf.copy_within(self.cursor..self.filled, 0);
        }
        self.cursor = 0;
        self.filled = tail;

        let mut fresh = 0;
        while self.filled < self.buf.len() {
            match reader.read(&mut self.buf[self.filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    self.filled += n;
                    fresh += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(Refill { fresh, shift })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields the source one byte at a time, to exercise short reads.
    struct TrickleReader {
        data: Vec<u8>,
        pos: usize,
    }

    impl Read for TrickleReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    fn trickle(data: &[u8]) -> TrickleReader {
        TrickleReader {
            data: data.to_vec(),
            pos: 0,
        }
    }

    #[test]
    fn initial_refill_fills_the_window() {
        let mut w = Window::with_capacity(4);
        let r = w.refill(&mut trickle(b"abcdef")).unwrap();
        assert_eq!(r, Refill { fresh: 4, shift: 0 });
        assert_eq!(w.data(), b"abcd");
        assert_eq!(w.cursor(), 0);
    }

    #[test]
    fn refill_preserves_unconsumed_tail_verbatim() {
        let mut src = trickle(b"abcdefgh");
        let mut w = Window::with_capacity(4);
        w.refill(&mut src).unwrap();
        w.consume_to(3);
        assert_eq!(w.unconsumed(), b"d");

        let r = w.refill(&mut src).unwrap();
        assert_eq!(r, Refill { fresh: 3, shift: 3 });
        assert_eq!(w.data(), b"defg");
        assert_eq!(w.cursor(), 0);
    }

    #[test]
    fn refill_at_end_of_stream_reads_zero() {
        let mut src = trickle(b"ab");
        let mut w = Window::with_capacity(4);
        assert_eq!(w.refill(&mut src).unwrap().fresh, 2);
        w.consume_to(2);
        let r = w.refill(&mut src).unwrap();
        assert_eq!(r.fresh, 0);
        assert_eq!(w.data(), b"");
    }

    #[test]
    fn full_window_with_origin_cursor_cannot_make_progress() {
        let mut src = trickle(b"abcdefgh");
        let mut w = Window::with_capacity(4);
        w.refill(&mut src).unwrap();
        // Nothing consumed: the tail occupies the whole window.
        let r = w.refill(&mut src).unwrap();
        assert_eq!(r, Refill { fresh: 0, shift: 0 });
        assert_eq!(w.data(), b"abcd");
    }

    #[test]
    fn interrupted_reads_are_retried() {
        struct Interrupting {
            fired: bool,
            inner: TrickleReader,
        }
        impl Read for Interrupting {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.fired {
                    self.fired = true;
                    return Err(io::Error::from(ErrorKind::Interrupted));
                }
                self.inner.read(buf)
            }
        }

        let mut src = Interrupting {
            fired: false,
            inner: trickle(b"xy"),
        };
        let mut w = Window::with_capacity(4);
        assert_eq!(w.refill(&mut src).unwrap().fresh, 2);
        assert_eq!(w.data(), b"xy");
    }

    #[test]
    fn genuine_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let mut w = Window::with_capacity(4);
        assert!(w.refill(&mut Broken).is_err());
    }
}
