//! Recovery of factsheet links from a previously generated coverage file.
//!
//! Links are often corrected by hand in the published CSV. Reading them back
//! before regenerating keeps those corrections from being overwritten by the
//! built-in catalogue values.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use ratescoverage_shared::{CoverageError, IndexRecord, Result};

/// Accepted labels for the factsheet column, preferred first.
const FACTSHEET_COLUMNS: [&str; 2] = ["Factsheet", "Fact Sheet"];

const TICKER_COLUMN: &str = "Ticker";

/// Key used when a row has no ticker column.
const UNKNOWN_TICKER: &str = "Unknown";

/// Ticker → factsheet markup recovered from a prior run.
pub type PriorFactsheets = HashMap<String, String>;

/// Read factsheet values keyed by ticker from an existing coverage CSV.
///
/// A missing file yields an empty map. Empty values are skipped; later rows
/// win over earlier rows with the same ticker.
pub fn read_prior_factsheets(path: &Path) -> Result<PriorFactsheets> {
    let mut factsheets = PriorFactsheets::new();

    if !path.exists() {
        debug!(?path, "no prior coverage file");
        return Ok(factsheets);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| CoverageError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| CoverageError::csv(path, e))?
        .clone();

    let Some(factsheet_idx) = FACTSHEET_COLUMNS
        .iter()
        .find_map(|label| headers.iter().position(|h| h == *label))
    else {
        debug!(?path, "prior coverage file has no factsheet column");
        return Ok(factsheets);
    };
    let ticker_idx = headers.iter().position(|h| h == TICKER_COLUMN);

    for (row_num, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CoverageError::csv(path, e))?;
        let Some(raw) = row.get(factsheet_idx) else {
            continue;
        };

        let value = clean_factsheet(raw);
        if value.is_empty() {
            continue;
        }

        let ticker = ticker_idx
            .and_then(|i| row.get(i))
            .unwrap_or(UNKNOWN_TICKER);
        debug!(ticker, row = row_num + 1, "found prior factsheet");

        factsheets.insert(ticker.to_string(), value);
    }

    info!(?path, count = factsheets.len(), "read prior factsheets");
    Ok(factsheets)
}

/// Trim, drop one trailing comma, and repair a doubled anchor opening.
pub fn clean_factsheet(raw: &str) -> String {
    static DOUBLE_ANCHOR_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"(?:<a href="){2,}"#).expect("valid regex"));

    let value = raw.trim();
    let value = value.strip_suffix(',').unwrap_or(value);
    DOUBLE_ANCHOR_RE
        .replace_all(value, r#"<a href=""#)
        .into_owned()
}

/// Overwrite catalogue factsheets with non-empty prior values, by exact ticker.
///
/// Returns the number of records that took a prior value.
pub fn reconcile(records: &mut [IndexRecord], prior: &PriorFactsheets) -> usize {
    let mut applied = 0;
    for record in records.iter_mut() {
        if let Some(value) = prior.get(&record.ticker).filter(|v| !v.is_empty()) {
            let value = value.strip_suffix(',').unwrap_or(value.as_str());
            record.factsheet = value.to_string();
            applied += 1;
        }
    }
    applied
}
