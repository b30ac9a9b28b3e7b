use core::fmt;

use bstr::{BStr, BString};

/// Maximum identifier length in bytes; longer identifiers are truncated.
pub const ID_MAX_LEN: usize = 100;

/// Maximum display-name length in bytes; longer names are truncated.
pub const NAME_MAX_LEN: usize = 1000;

/// A bounded-length byte-string field.
///
/// Content past `MAX` bytes is dropped at construction time; the buffer
/// never grows past its declared maximum. Fields are raw bytes, not UTF-8:
/// the scanner copies source bytes verbatim and makes no encoding claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldBuf<const MAX: usize>(BString);

impl<const MAX: usize> FieldBuf<MAX> {
    /// Trims leading and trailing ASCII whitespace from `raw`, then stores
    /// at most `MAX` bytes of what remains.
    #[must_use]
    pub fn from_untrimmed(raw: &[u8]) -> Self {
        let trimmed = raw.trim_ascii();
        let take = trimmed.len().min(MAX);
        Self(BString::from(&trimmed[..take]))
    }

    /// The stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Number of stored bytes; always `<= MAX`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the field is empty (absent or all-whitespace in the source).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const MAX: usize> fmt::Display for FieldBuf<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        BStr::new(&self.0).fmt(f)
    }
}

/// One extracted entity: an identifier and a display name.
///
/// A field whose markers were absent or malformed in the source is left
/// empty; that is a contract outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Sort key for the final output, compared byte-lexicographically.
    pub id: FieldBuf<ID_MAX_LEN>,
    /// The line printed for this record.
    pub name: FieldBuf<NAME_MAX_LEN>,
}
