//! Property: window placement must not change the result.
//!
//! For any set of records and any window capacity at least as large as the
//! biggest encoded record, the refill boundaries fall wherever they fall
//! and the output must be identical to a whole-file scan.

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{TagSet, scan_records, sort_records};

/// Printable, non-whitespace, marker-free field content.
#[derive(Debug, Clone)]
struct FieldText(String);

impl Arbitrary for FieldText {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-.";
        let len = 1 + usize::arbitrary(g) % 24;
        let text: String = (0..len)
            .map(|_| *g.choose(ALPHABET).unwrap() as char)
            .collect();
        Self(text)
    }
}

fn encode(records: &[(String, String)], junk: usize) -> Vec<u8> {
    let mut doc = Vec::new();
    doc.extend(std::iter::repeat_n(b'~', junk));
    doc.extend_from_slice(b"<widgetList>");
    for (id, name) in records {
        doc.extend_from_slice(b"<widget><widgetID>");
        doc.extend_from_slice(id.as_bytes());
        doc.extend_from_slice(b"</widgetID><widgetName>");
        doc.extend_from_slice(name.as_bytes());
        doc.extend_from_slice(b"</widgetName></widget>");
    }
    doc.extend_from_slice(b"</widgetList>");
    doc
}

// Marker overhead of one encoded record, excluding field content.
const RECORD_OVERHEAD: usize = "<widget><widgetID></widgetID><widgetName></widgetName></widget>".len();

#[test]
fn window_placement_does_not_change_output() {
    fn prop(names: Vec<FieldText>, junk_seed: usize, cap_seed: usize) -> bool {
        // Zero-padded positional ids, assigned in reverse so the sort has
        // real work to do; byte order then equals assignment order.
        let records: Vec<(String, String)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (format!("{:05}", names.len() - 1 - i), name.0.clone()))
            .collect();

        let junk = junk_seed % 200;
        let doc = encode(&records, junk);

        let longest = records
            .iter()
            .map(|(id, name)| RECORD_OVERHEAD + id.len() + name.len())
            .max()
            .unwrap_or(0);
        // Any capacity from "one record barely fits" upward must work.
        let capacity = "<widgetList>".len().max(longest) + cap_seed % 97;

        let tags = TagSet::widget();
        let mut scanned =
            scan_records(std::io::Cursor::new(doc), &tags, capacity).expect("scan failed");
        sort_records(&mut scanned);

        let mut expected: Vec<&str> = names.iter().map(|n| n.0.as_str()).collect();
        expected.reverse();

        scanned.len() == names.len()
            && scanned
                .iter()
                .zip(&expected)
                .all(|(record, name)| record.name.as_bytes() == name.as_bytes())
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<FieldText>, usize, usize) -> bool);
}
