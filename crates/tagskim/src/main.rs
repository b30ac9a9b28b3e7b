//! Command-line front end: scan a tag-delimited file and print the
//! display-names of its records, sorted by identifier.

use std::fs::File;
use std::io::{self, BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tagskim::{TagSet, run};

/// Extract named records from a tag-delimited list file and print their
/// names sorted by identifier.
#[derive(Debug, Parser)]
#[command(name = "tagskim", version)]
struct Cli {
    /// Path to the source file.
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The file size decides the window allocation, so probe it up front;
    // a missing or unreadable file is reported here, before any scanning.
    let source_len = std::fs::metadata(&cli.file)
        .with_context(|| format!("cannot stat '{}'", cli.file.display()))?
        .len();
    let source = File::open(&cli.file)
        .with_context(|| format!("cannot open '{}'", cli.file.display()))?;

    let tags = TagSet::widget();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(source, source_len, &tags, &mut out)
        .with_context(|| format!("scan of '{}' failed", cli.file.display()))?;
    out.flush().context("flush of standard output failed")?;
    Ok(())
}
