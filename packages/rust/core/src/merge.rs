//! Folding location variants into one row per base ticker.

use std::collections::HashMap;

use tracing::{debug, info};

use ratescoverage_shared::{IndexRecord, Location, MergedRecord};

use crate::ticker::base_ticker;

/// Separator between dissemination labels in a merged row.
const DISSEMINATION_SEPARATOR: &str = ", ";

/// Group records by base ticker, keeping first-seen group order and input
/// order within each group.
fn group_by_base(records: &[IndexRecord]) -> Vec<(&str, Vec<&IndexRecord>)> {
    let mut groups: Vec<(&str, Vec<&IndexRecord>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let base = base_ticker(&record.ticker);
        match index.get(base) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(base, groups.len());
                groups.push((base, vec![record]));
            }
        }
    }

    groups
}

/// Merge one non-empty group into a single row.
///
/// The record whose ticker equals `base` is canonical. When no record matches
/// exactly, the first record is used and the rest are treated as variants.
fn merge_group(base: &str, group: &[&IndexRecord]) -> MergedRecord {
    let (canonical, variants): (&IndexRecord, Vec<&IndexRecord>) =
        match group.iter().position(|r| r.ticker == base) {
            Some(i) => (
                group[i],
                group
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, r)| *r)
                    .collect(),
            ),
            None => (group[0], group[1..].to_vec()),
        };

    let mut disseminations = vec![canonical.dissemination.as_str()];
    disseminations.extend(
        Location::ALL
            .into_iter()
            .filter(|loc| variants.iter().any(|v| v.ticker.ends_with(loc.suffix())))
            .map(|loc| -> &str { loc.label() }),
    );

    MergedRecord {
        brand: canonical.brand.clone(),
        family: canonical.family.clone(),
        name: canonical.name.clone(),
        ticker: base.to_string(),
        disseminations: disseminations.join(DISSEMINATION_SEPARATOR),
        launch_date: canonical.launch_date.clone(),
        inception_date: canonical.inception_date.clone(),
        factsheet: canonical.factsheet.clone(),
    }
}

/// Collapse location variants into one row per distinct base ticker.
pub fn merge_location_variants(records: &[IndexRecord]) -> Vec<MergedRecord> {
    let merged: Vec<MergedRecord> = group_by_base(records)
        .into_iter()
        .map(|(base, group)| {
            let row = merge_group(base, &group);
            debug!(
                ticker = base,
                variants = group.len(),
                disseminations = %row.disseminations,
                "merged"
            );
            row
        })
        .collect();

    info!(
        records = records.len(),
        rows = merged.len(),
        "merged location variants"
    );
    merged
}

/// Sort rows by ticker, byte-wise.
pub fn sort_by_ticker(rows: &mut [MergedRecord]) {
    rows.sort_by(|a, b| a.ticker.as_bytes().cmp(b.ticker.as_bytes()));
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalogue;

    fn record(ticker: &str, dissemination: &str) -> IndexRecord {
        IndexRecord {
            brand: "Kaiko".into(),
            family: "Blue-Chip".into(),
            name: format!("{ticker} name"),
            ticker: ticker.into(),
            dissemination: dissemination.into(),
            launch_date: "October 17, 2023".into(),
            inception_date: "March 19, 2018".into(),
            factsheet: format!("{ticker} sheet"),
        }
    }

    fn as_index(row: &MergedRecord) -> IndexRecord {
        IndexRecord {
            brand: row.brand.clone(),
            family: row.family.clone(),
            name: row.name.clone(),
            ticker: row.ticker.clone(),
            dissemination: row.disseminations.clone(),
            launch_date: row.launch_date.clone(),
            inception_date: row.inception_date.clone(),
            factsheet: row.factsheet.clone(),
        }
    }

    #[test]
    fn dissemination_order_ignores_input_order() {
        let records = vec![
            record("KT5LDN", "LDN Fixing"),
            record("KT5SGP", "SGP Fixing"),
            record("KT5NYC", "NYC Fixing"),
            record("KT5", "Real-time (5 sec)"),
        ];
        let merged = merge_location_variants(&records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].ticker, "KT5");
        assert_eq!(
            merged[0].disseminations,
            "Real-time (5 sec), NYC Fixing, LDN Fixing, SGP Fixing"
        );
        assert_eq!(merged[0].name, "KT5 name");
        assert_eq!(merged[0].factsheet, "KT5 sheet");
    }

    #[test]
    fn partial_variant_sets() {
        let records = vec![
            record("KSAI", "Real-time (5 sec)"),
            record("KSAISGP", "SGP Fixing"),
        ];
        let merged = merge_location_variants(&records);
        assert_eq!(merged[0].disseminations, "Real-time (5 sec), SGP Fixing");
    }

    #[test]
    fn lone_records_keep_their_dissemination() {
        let merged = merge_location_variants(&[record("DDV", "LDN Fixing")]);
        assert_eq!(merged[0].disseminations, "LDN Fixing");
        assert_eq!(merged[0].ticker, "DDV");
    }

    #[test]
    fn first_record_wins_without_exact_base() {
        let records = vec![
            record("ABCLDN", "LDN Fixing"),
            record("ABCNYC", "NYC Fixing"),
        ];
        let merged = merge_location_variants(&records);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].ticker, "ABC");
        assert_eq!(merged[0].name, "ABCLDN name");
        assert_eq!(merged[0].disseminations, "LDN Fixing, NYC Fixing");
    }

    #[test]
    fn one_row_per_distinct_base_ticker() {
        let records = catalogue::records();
        let bases: HashSet<_> = records.iter().map(|r| base_ticker(&r.ticker)).collect();
        let merged = merge_location_variants(&records);
        assert_eq!(merged.len(), bases.len());
        assert!(merged.len() <= records.len());
    }

    #[test]
    fn merging_is_idempotent() {
        let first = merge_location_variants(&catalogue::records());
        let again: Vec<IndexRecord> = first.iter().map(as_index).collect();
        let second = merge_location_variants(&again);
        assert_eq!(first, second);
    }

    #[test]
    fn sort_is_bytewise() {
        let mut rows = merge_location_variants(&catalogue::records());
        sort_by_ticker(&mut rows);
        let tickers: Vec<&str> = rows.iter().map(|r| r.ticker.as_str()).collect();
        let pos = |t: &str| tickers.iter().position(|x| *x == t).unwrap();
        assert!(pos("BOLD1") < pos("CASL"));
        assert!(pos("CASL") < pos("DDV"));
        assert!(tickers.windows(2).all(|w| w[0] < w[1]));
    }
}
