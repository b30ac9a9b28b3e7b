//! Crate-level tests that exercise the pipeline end to end.

mod property_windows;
