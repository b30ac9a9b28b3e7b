use std::io;

use thiserror::Error;

/// Error raised while scanning the source stream.
///
/// A clean end-of-stream is not an error: the scan simply stops, whatever
/// state it was in. Only a genuine mid-stream read failure is reported.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading the next chunk from the source stream failed.
    #[error("read from source stream failed")]
    Read(#[source] io::Error),
}

/// Error raised by the full scan-sort-emit pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The scanning phase failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Writing sorted names to the output stream failed.
    #[error("write to output stream failed")]
    Emit(#[source] io::Error),
}
