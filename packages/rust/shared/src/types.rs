//! Core domain types for the reference-rates coverage catalogue.

use serde::Serialize;

/// Header row shared by both output files.
pub const COVERAGE_HEADERS: [&str; 8] = [
    "Brand",
    "Benchmark Family",
    "Name",
    "Ticker",
    "Disseminations",
    "Launch Date",
    "Inception Date",
    "Factsheet",
];

/// Factsheet value that counts as "nothing published".
pub const NO_DATA_PLACEHOLDER: &str = "-";

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A city fixing that may be appended to a base ticker as a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    NewYork,
    London,
    Singapore,
}

impl Location {
    /// All locations in suffix-matching and dissemination order.
    pub const ALL: [Location; 3] = [Location::NewYork, Location::London, Location::Singapore];

    /// The ticker suffix, e.g. `NYC`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::NewYork => "NYC",
            Self::London => "LDN",
            Self::Singapore => "SGP",
        }
    }

    /// Dissemination label of the daily fixing, e.g. `NYC Fixing`.
    pub fn label(self) -> &'static str {
        match self {
            Self::NewYork => "NYC Fixing",
            Self::London => "LDN Fixing",
            Self::Singapore => "SGP Fixing",
        }
    }
}

// ---------------------------------------------------------------------------
// IndexRecord
// ---------------------------------------------------------------------------

/// One index as listed in the catalogue, one record per dissemination variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub brand: String,
    /// Raw benchmark family, before normalization.
    pub family: String,
    pub name: String,
    /// Unique per dissemination variant, e.g. `KT5` and `KT5NYC`.
    pub ticker: String,
    /// Schedule label such as `NYC Fixing` or `Real-time (5 sec)`.
    pub dissemination: String,
    pub launch_date: String,
    pub inception_date: String,
    /// Anchor markup, a `Coming Soon` placeholder, or empty.
    pub factsheet: String,
}

// ---------------------------------------------------------------------------
// MergedRecord
// ---------------------------------------------------------------------------

/// One output row: an index with all of its location variants folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    pub brand: String,
    pub family: String,
    pub name: String,
    /// Always the base ticker.
    pub ticker: String,
    /// Base dissemination followed by the locations found, joined with `", "`.
    pub disseminations: String,
    pub launch_date: String,
    pub inception_date: String,
    pub factsheet: String,
}

impl MergedRecord {
    /// Fields in [`COVERAGE_HEADERS`] order.
    pub fn as_row(&self) -> [&str; 8] {
        [
            &self.brand,
            &self.family,
            &self.name,
            &self.ticker,
            &self.disseminations,
            &self.launch_date,
            &self.inception_date,
            &self.factsheet,
        ]
    }

    /// Whether this row carries a published factsheet.
    pub fn has_factsheet(&self) -> bool {
        let value = self.factsheet.trim();
        !value.is_empty() && value != NO_DATA_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(factsheet: &str) -> MergedRecord {
        MergedRecord {
            brand: "Kaiko".into(),
            family: "Market".into(),
            name: "Vinter Diffuse Digital 30 Index".into(),
            ticker: "DDV".into(),
            disseminations: "LDN Fixing".into(),
            launch_date: "July 02, 2022".into(),
            inception_date: "January 01, 2021".into(),
            factsheet: factsheet.into(),
        }
    }

    #[test]
    fn location_order_is_nyc_ldn_sgp() {
        let suffixes: Vec<_> = Location::ALL.iter().map(|l| l.suffix()).collect();
        assert_eq!(suffixes, ["NYC", "LDN", "SGP"]);
        assert_eq!(Location::London.label(), "LDN Fixing");
    }

    #[test]
    fn row_follows_header_order() {
        let r = row("x");
        let fields = r.as_row();
        assert_eq!(fields.len(), COVERAGE_HEADERS.len());
        assert_eq!(fields[3], "DDV");
        assert_eq!(fields[7], "x");
    }

    #[test]
    fn placeholder_and_empty_have_no_factsheet() {
        assert!(!row("").has_factsheet());
        assert!(!row("-").has_factsheet());
        assert!(!row("  ").has_factsheet());
        assert!(row("<a target=\"_blank\">Coming Soon</a>").has_factsheet());
    }
}
