//! Field extraction from a complete record body.

use bstr::ByteSlice;

use crate::record::{FieldBuf, Record};
use crate::tags::TagSet;

/// Builds a [`Record`] from a region known to span exactly one record body
/// (the bytes between the record-start and record-end markers).
///
/// Each field is located independently by its own marker pair. A field
/// whose start marker is absent, or whose end marker does not follow it
/// within the body, is left empty. The search never leaves `body`, so a
/// field marker belonging to a neighboring record can never bleed in.
pub(crate) fn extract_record(body: &[u8], tags: &TagSet) -> Record {
    Record {
        id: extract_field(body, &tags.id_start, &tags.id_end),
        name: extract_field(body, &tags.name_start, &tags.name_end),
    }
}

fn extract_field<const MAX: usize>(body: &[u8], start: &str, end: &str) -> FieldBuf<MAX> {
    let Some(open) = body.find(start) else {
        return FieldBuf::default();
    };
    let content_start = open + start.len();
    let Some(close) = body[content_start..].find(end) else {
        return FieldBuf::default();
    };
    FieldBuf::from_untrimmed(&body[content_start..content_start + close])
}
