//! End-to-end `generate` pipeline: catalogue → prior factsheets → merge →
//! sort → write both files.

use std::path::PathBuf;

use tracing::{info, instrument};

use ratescoverage_shared::{AppConfig, CoverageError, IndexRecord, MergedRecord, Result};

use crate::catalogue;
use crate::merge::{merge_location_variants, sort_by_ticker};
use crate::normalize::{extra_to_record, normalize_record};
use crate::prior::{read_prior_factsheets, reconcile};
use crate::writer::{write_coverage, write_factsheets};

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateReport {
    /// Catalogue records before merging (static plus configured).
    pub records_in: usize,
    /// Records whose factsheet came from the prior file.
    pub factsheets_recovered: usize,
    /// Rows in the coverage file.
    pub rows_written: usize,
    /// Rows in the factsheet-only file.
    pub factsheet_rows: usize,
    pub coverage_path: PathBuf,
    pub factsheets_path: PathBuf,
}

/// Built-in catalogue followed by configured extras, all normalized.
pub fn load_records(config: &AppConfig) -> Result<Vec<IndexRecord>> {
    let mut records = catalogue::records();
    for record in &mut records {
        normalize_record(record)?;
    }
    for extra in &config.extra_indices {
        records.push(extra_to_record(extra)?);
    }
    Ok(records)
}

/// Rows as they would be written, with the count of recovered factsheets.
fn build(config: &AppConfig) -> Result<(usize, usize, Vec<MergedRecord>)> {
    let prior = read_prior_factsheets(&config.output.coverage_path())?;
    let mut records = load_records(config)?;
    let records_in = records.len();

    let recovered = reconcile(&mut records, &prior);
    info!(records = records_in, recovered, "reconciled factsheets");

    let mut rows = merge_location_variants(&records);
    sort_by_ticker(&mut rows);
    Ok((records_in, recovered, rows))
}

/// Merged, sorted rows without writing anything.
pub fn build_rows(config: &AppConfig) -> Result<Vec<MergedRecord>> {
    build(config).map(|(_, _, rows)| rows)
}

/// Run the full pipeline and write both CSV files.
///
/// The whole prior file is read before either output is opened, so the
/// coverage file can be regenerated in place.
#[instrument(skip_all, fields(dir = %config.output.dir.display()))]
pub fn generate(config: &AppConfig) -> Result<GenerateReport> {
    let (records_in, factsheets_recovered, rows) = build(config)?;

    let dir = &config.output.dir;
    std::fs::create_dir_all(dir).map_err(|e| CoverageError::io(dir, e))?;

    let coverage_path = config.output.coverage_path();
    let factsheets_path = config.output.factsheets_path();
    let rows_written = write_coverage(&coverage_path, &rows)?;
    let factsheet_rows = write_factsheets(&factsheets_path, &rows)?;

    info!(rows_written, factsheet_rows, "generation complete");
    Ok(GenerateReport {
        records_in,
        factsheets_recovered,
        rows_written,
        factsheet_rows,
        coverage_path,
        factsheets_path,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::Path;

    use ratescoverage_shared::{ExtraIndex, OutputConfig};

    use super::*;

    const PREFIX: &str = "rc-pipeline-test";

    /// Scratch directory removed on drop, pass or fail.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("{PREFIX}-{}", uuid::Uuid::now_v7()));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            output: OutputConfig {
                dir: dir.into(),
                ..OutputConfig::default()
            },
            extra_indices: Vec::new(),
        }
    }

    fn tickers_in(path: &Path) -> Vec<String> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader
            .records()
            .map(|r| r.unwrap().get(3).unwrap().to_string())
            .collect()
    }

    #[test]
    fn generate_writes_sorted_full_and_filtered_files() {
        let tmp = TempDir::new();
        let dir = &tmp.0;
        let config = config_in(dir);
        let report = generate(&config).unwrap();

        let full = tickers_in(&report.coverage_path);
        let filtered = tickers_in(&report.factsheets_path);
        assert_eq!(full.len(), report.rows_written);
        assert_eq!(filtered.len(), report.factsheet_rows);

        let mut sorted = full.clone();
        sorted.sort();
        assert_eq!(full, sorted);
        assert!(full.iter().all(|t| crate::ticker::location_of(t).is_none()));

        let full_set: HashSet<_> = full.iter().collect();
        assert!(filtered.iter().all(|t| full_set.contains(t)));
    }

    #[test]
    fn kt5_row_lists_all_fixings() {
        let tmp = TempDir::new();
        let rows = build_rows(&config_in(&tmp.0)).unwrap();
        let kt5 = rows.iter().find(|r| r.ticker == "KT5").unwrap();
        assert_eq!(
            kt5.disseminations,
            "Real-time (5 sec), NYC Fixing, LDN Fixing, SGP Fixing"
        );
    }

    #[test]
    fn prior_factsheet_overrides_static_value() {
        let tmp = TempDir::new();
        let dir = &tmp.0;
        std::fs::write(
            dir.join("Reference_Rates_Coverage.csv"),
            "Ticker,Factsheet\nEGLX,\"X,\"\n",
        )
        .unwrap();

        let rows = build_rows(&config_in(dir)).unwrap();
        let eglx = rows.iter().find(|r| r.ticker == "EGLX").unwrap();
        assert_eq!(eglx.factsheet, "X");
        let eglxrt = rows.iter().find(|r| r.ticker == "EGLXRT").unwrap();
        assert!(eglxrt.factsheet.contains("Blue-Chip"));
    }

    #[test]
    fn regeneration_round_trips_factsheets() {
        let tmp = TempDir::new();
        let dir = &tmp.0;
        let config = config_in(dir);
        let first = generate(&config).unwrap();
        let rows = build_rows(&config).unwrap();

        let recovered = read_prior_factsheets(&first.coverage_path).unwrap();
        for row in rows.iter().filter(|r| !r.factsheet.is_empty()) {
            assert_eq!(recovered.get(&row.ticker), Some(&row.factsheet));
        }

        let second = generate(&config).unwrap();
        assert_eq!(
            std::fs::read(&first.coverage_path).unwrap(),
            std::fs::read(&second.coverage_path).unwrap()
        );
    }

    #[test]
    fn extra_indices_join_the_catalogue() {
        let tmp = TempDir::new();
        let dir = &tmp.0;
        let mut config = config_in(dir);
        for (ticker, dissemination) in [("ZZTOP", "Real-time (5 sec)"), ("ZZTOPLDN", "LDN Fixing")]
        {
            config.extra_indices.push(ExtraIndex {
                brand: "Kaiko".into(),
                family: "Sector".into(),
                name: "Example Index".into(),
                ticker: ticker.into(),
                dissemination: dissemination.into(),
                launch_date: "2025-02-11T00:00:00Z".into(),
                inception_date: "2024-01-02T00:00:00.000Z".into(),
                factsheet: String::new(),
            });
        }

        let report = generate(&config).unwrap();
        assert_eq!(report.records_in, catalogue::CATALOGUE.len() + 2);

        let rows = build_rows(&config).unwrap();
        let row = rows.last().unwrap();
        assert_eq!(row.ticker, "ZZTOP");
        assert_eq!(row.family, "Sector & Thematic");
        assert_eq!(row.disseminations, "Real-time (5 sec), LDN Fixing");
        assert_eq!(row.launch_date, "February 11, 2025");
        assert_eq!(row.inception_date, "January 02, 2024");
        assert!(!tickers_in(&report.factsheets_path).contains(&"ZZTOP".to_string()));
    }
}
