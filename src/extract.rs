//! CSV column extraction.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Copy the second column of `input` into `output`, one trimmed value per
/// line, in input order. The output file is created fresh on every run.
///
/// Rows with fewer than two fields are skipped, not an error.
pub fn extract_column<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(input)?);
    let mut out = BufWriter::new(File::create(output)?);

    let mut written = 0usize;
    for row in rdr.records() {
        let row = row?;
        if row.len() < 2 {
            continue;
        }
        writeln!(out, "{}", row[1].trim())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
