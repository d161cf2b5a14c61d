//! CSV output for the full coverage list and the factsheet-only list.
//!
//! Fields are quoted only when they contain the delimiter, a quote, or a line
//! break. Lines end in CRLF, matching the files already published.

use std::path::Path;

use tracing::info;

use ratescoverage_shared::{COVERAGE_HEADERS, CoverageError, MergedRecord, Result};

/// Write the header row followed by `rows`. Returns the number of data rows.
pub fn write_rows<'a, I>(path: &Path, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a MergedRecord>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(|e| CoverageError::csv(path, e))?;

    writer
        .write_record(COVERAGE_HEADERS)
        .map_err(|e| CoverageError::csv(path, e))?;

    let mut written = 0;
    for row in rows {
        writer
            .write_record(row.as_row())
            .map_err(|e| CoverageError::csv(path, e))?;
        written += 1;
    }

    writer.flush().map_err(|e| CoverageError::io(path, e))?;
    Ok(written)
}

/// Write every row to the coverage file.
pub fn write_coverage(path: &Path, rows: &[MergedRecord]) -> Result<usize> {
    let written = write_rows(path, rows)?;
    info!(?path, rows = written, "wrote coverage file");
    Ok(written)
}

/// Write only rows with a published factsheet.
pub fn write_factsheets(path: &Path, rows: &[MergedRecord]) -> Result<usize> {
    let written = write_rows(path, rows.iter().filter(|r| r.has_factsheet()))?;
    info!(?path, rows = written, "wrote factsheet file");
    Ok(written)
}
