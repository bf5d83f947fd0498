use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use linepad_editor::Document;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// File to display
    pub file: PathBuf,
}

pub fn show(args: ShowArgs) -> Result<()> {
    let doc = Document::load(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    write_numbered(&doc, &mut io::stdout().lock())?;
    Ok(())
}

/// Each line prefixed with its 1-based number, right-aligned
fn write_numbered<W: Write>(doc: &Document, out: &mut W) -> io::Result<()> {
    let width = doc.line_count().to_string().len();
    for (index, line) in doc.lines().iter().enumerate() {
        let number = format!("{:>width$}", index + 1, width = width);
        writeln!(out, "{} {}", number.dimmed(), line)?;
    }
    out.flush()
}
