//! Field normalization for records entering the catalogue.

use chrono::NaiveDateTime;
use ratescoverage_shared::{CoverageError, ExtraIndex, IndexRecord, Result};

/// Family label shared by sector and thematic benchmarks.
pub const SECTOR_AND_THEMATIC: &str = "Sector & Thematic";

/// Timestamp layouts accepted from the index API, most precise first.
const API_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

/// Layout used for every date shown on the coverage page.
const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Fold `Thematic` and `Sector` into one family; other labels pass through.
pub fn normalize_family(raw: &str) -> String {
    match raw {
        "Thematic" | "Sector" => SECTOR_AND_THEMATIC.to_string(),
        other => other.to_string(),
    }
}

/// Render an API timestamp as a display date (`February 11, 2025`).
///
/// Values that do not look like a timestamp are taken to be display dates
/// already and returned unchanged. Something that looks like a timestamp but
/// fails to parse is an error.
pub fn display_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if !looks_like_timestamp(raw) {
        return Ok(raw.to_string());
    }

    API_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
        .ok_or_else(|| CoverageError::parse(format!("unrecognized timestamp '{raw}'")))
}

fn looks_like_timestamp(raw: &str) -> bool {
    raw.len() >= 11 && raw.as_bytes()[4] == b'-' && raw.as_bytes()[10] == b'T'
}

/// Normalize a record in place: family folding and display dates.
pub fn normalize_record(record: &mut IndexRecord) -> Result<()> {
    record.family = normalize_family(&record.family);
    record.launch_date = display_date(&record.launch_date)?;
    record.inception_date = display_date(&record.inception_date)?;
    Ok(())
}

/// Turn a configured extra index into a normalized catalogue record.
pub fn extra_to_record(extra: &ExtraIndex) -> Result<IndexRecord> {
    if extra.ticker.trim().is_empty() {
        return Err(CoverageError::validation(format!(
            "extra index '{}' has an empty ticker",
            extra.name
        )));
    }

    let mut record = IndexRecord {
        brand: extra.brand.clone(),
        family: extra.family.clone(),
        name: extra.name.clone(),
        ticker: extra.ticker.trim().to_string(),
        dissemination: extra.dissemination.clone(),
        launch_date: extra.launch_date.clone(),
        inception_date: extra.inception_date.clone(),
        factsheet: extra.factsheet.clone(),
    };
    normalize_record(&mut record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_folding() {
        assert_eq!(normalize_family("Thematic"), SECTOR_AND_THEMATIC);
        assert_eq!(normalize_family("Sector"), SECTOR_AND_THEMATIC);
        assert_eq!(normalize_family("Sector & Thematic"), SECTOR_AND_THEMATIC);
        assert_eq!(normalize_family("Blue-Chip"), "Blue-Chip");
    }

    #[test]
    fn api_timestamps_become_display_dates() {
        assert_eq!(
            display_date("2025-02-11T00:00:00.000Z").unwrap(),
            "February 11, 2025"
        );
        assert_eq!(
            display_date("2022-07-02T16:00:00Z").unwrap(),
            "July 02, 2022"
        );
    }

    #[test]
    fn display_dates_pass_through() {
        assert_eq!(display_date("January 3, 2022").unwrap(), "January 3, 2022");
        assert_eq!(display_date("").unwrap(), "");
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let err = display_date("2025-13-45T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("unrecognized timestamp"));
    }

    #[test]
    fn extra_index_is_normalized() {
        let extra = ExtraIndex {
            brand: "Kaiko".into(),
            family: "Thematic".into(),
            name: "Example Index".into(),
            ticker: " EXMPL ".into(),
            dissemination: "Real-time (5 sec)".into(),
            launch_date: "2025-02-11T00:00:00Z".into(),
            inception_date: "February 11, 2025".into(),
            factsheet: String::new(),
        };
        let record = extra_to_record(&extra).unwrap();
        assert_eq!(record.ticker, "EXMPL");
        assert_eq!(record.family, SECTOR_AND_THEMATIC);
        assert_eq!(record.launch_date, "February 11, 2025");
    }

    #[test]
    fn extra_index_needs_a_ticker() {
        let extra = ExtraIndex {
            brand: "Kaiko".into(),
            family: "Market".into(),
            name: "Nameless".into(),
            ticker: "  ".into(),
            dissemination: "LDN Fixing".into(),
            launch_date: String::new(),
            inception_date: String::new(),
            factsheet: String::new(),
        };
        assert!(extra_to_record(&extra).is_err());
    }
}
