//! The built-in index catalogue.
//!
//! One entry per dissemination variant. Location variants (`KT5NYC`,
//! `KT5LDN`, ...) sit next to their real-time base (`KT5`) and are folded
//! together by [`crate::merge`].

use ratescoverage_shared::IndexRecord;

const FACTSHEET_BLUE_CHIP: &str = r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/New%20Benchmark%20Factsheets/Kaiko%20Benchmarks%20-%20Blue-Chip%20family%20factsheet.pdf" target="_blank">View Factsheet</a>"#;
const FACTSHEET_SECTOR_THEMATIC: &str = r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/New%20Benchmark%20Factsheets/Kaiko%20Benchmarks%20-%20Sector%20&%20Thematic%20family%20factsheet.pdf" target="_blank">View Factsheet</a>"#;
const FACTSHEET_MARKET: &str = r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/New%20Benchmark%20Factsheets/Kaiko%20Benchmarks%20-%20Market%20family%20factsheet.pdf" target="_blank">View Factsheet</a>"#;

/// A catalogue row as compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct StaticIndex {
    pub brand: &'static str,
    pub family: &'static str,
    pub name: &'static str,
    pub ticker: &'static str,
    pub dissemination: &'static str,
    pub launch_date: &'static str,
    pub inception_date: &'static str,
    pub factsheet: &'static str,
}

impl From<&StaticIndex> for IndexRecord {
    fn from(entry: &StaticIndex) -> Self {
        Self {
            brand: entry.brand.into(),
            family: entry.family.into(),
            name: entry.name.into(),
            ticker: entry.ticker.into(),
            dissemination: entry.dissemination.into(),
            launch_date: entry.launch_date.into(),
            inception_date: entry.inception_date.into(),
            factsheet: entry.factsheet.into(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn index(
    brand: &'static str,
    family: &'static str,
    name: &'static str,
    ticker: &'static str,
    dissemination: &'static str,
    launch_date: &'static str,
    inception_date: &'static str,
    factsheet: &'static str,
) -> StaticIndex {
    StaticIndex {
        brand,
        family,
        name,
        ticker,
        dissemination,
        launch_date,
        inception_date,
        factsheet,
    }
}

/// Every index the coverage page lists, in source order.
pub static CATALOGUE: &[StaticIndex] = &[
    // Blue-Chip Indices
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko Eagle Index",
        "EGLX",
        "NYC Fixing",
        "February 11, 2025",
        "February 11, 2025",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko Eagle Index",
        "EGLXRT",
        "Real-time (5 sec)",
        "February 11, 2025",
        "February 11, 2025",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 5 Index",
        "KT5",
        "Real-time (5 sec)",
        "October 17, 2023",
        "March 19, 2018",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 5 Index NYC",
        "KT5NYC",
        "NYC Fixing",
        "October 17, 2023",
        "March 19, 2018",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 5 Index LDN",
        "KT5LDN",
        "LDN Fixing",
        "October 17, 2023",
        "March 19, 2018",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 5 Index SGP",
        "KT5SGP",
        "SGP Fixing",
        "October 17, 2023",
        "March 19, 2018",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 10 Index",
        "KT10",
        "Real-time (5 sec)",
        "October 17, 2023",
        "March 18, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 10 Index NYC",
        "KT10NYC",
        "NYC Fixing",
        "October 17, 2023",
        "March 18, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 10 Index LDN",
        "KT10LDN",
        "LDN Fixing",
        "October 17, 2023",
        "March 18, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 10 Index SGP",
        "KT10SGP",
        "SGP Fixing",
        "October 17, 2023",
        "March 18, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 15 Index",
        "KT15",
        "Real-time (5 sec)",
        "October 17, 2023",
        "December 23, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 15 Index NYC",
        "KT15NYC",
        "NYC Fixing",
        "October 17, 2023",
        "December 23, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 15 Index LDN",
        "KT15LDN",
        "LDN Fixing",
        "October 17, 2023",
        "December 23, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Kaiko 15 Index SGP",
        "KT15SGP",
        "SGP Fixing",
        "October 17, 2023",
        "December 23, 2019",
        FACTSHEET_BLUE_CHIP,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Vinter 21Shares Crypto Basket Equal Weight Index ",
        "HODLV",
        "LDN Fixing",
        "September 29, 2021",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/multi-asset_hodlv_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Vinter 21Shares Crypto Basket 10 Index",
        "HODLX",
        "LDN Fixing",
        "September 29, 2021",
        "January 01, 2021",
        r#"<a target="_blank">Coming Soon</a>"#,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Vinter Valour Digital Asset Basket 10 Index",
        "VDAB10",
        "LDN Fixing",
        "July 21, 2022",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/VDAB10%20-%20Fact%20Sheet%20-%20multi-asset_vdab10_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Vinter Pando Crypto Basket 6 Index ",
        "PANDO6",
        "17:00 CET Fixing",
        "July 21, 2022",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/PANDO6%20-%20Fact%20Sheet%20-%20multi-asset_pando6_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Blue-Chip",
        "Virtune Vinter Crypto Top 10 Index",
        "VVT10",
        "17:00 CET Fixing",
        "March 31, 2023",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/VVT10%20-%20Fact%20Sheet%20-%20multi-asset_vvt10_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),

    // Sector & Thematic Indices
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Tokenization Index",
        "KSTKNZ",
        "Real-time (5 sec)",
        "January 23, 2025",
        "January 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Tokenization Index NYC",
        "KSTKNZNYC",
        "NYC Fixing",
        "January 23, 2025",
        "January 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Tokenization Index LDN",
        "KSTKNZLDN",
        "LDN Fixing",
        "January 23, 2025",
        "January 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Tokenization Index SGP",
        "KSTKNZSGP",
        "SGP Fixing",
        "January 23, 2025",
        "January 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko AI Index",
        "KSAI",
        "Real-time (5 sec)",
        "January 23, 2025",
        "October 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko AI Index NYC",
        "KSAINYC",
        "NYC Fixing",
        "January 23, 2025",
        "October 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko AI Index LDN",
        "KSAILDN",
        "LDN Fixing",
        "January 23, 2025",
        "October 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko AI Index SGP",
        "KSAISGP",
        "SGP Fixing",
        "January 23, 2025",
        "October 3, 2022",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Meme Index",
        "KSMEME",
        "Real-time (5 sec)",
        "January 22, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Meme Index NYC",
        "KSMEMENYC",
        "NYC Fixing",
        "January 22, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Meme Index LDN",
        "KSMEMELDN",
        "LDN Fixing",
        "January 22, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko Meme Index SGP",
        "KSMEMESGP",
        "SGP Fixing",
        "January 22, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko DeFi Index",
        "KSDEFI",
        "Real-time (5 sec)",
        "January 17, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko DeFi Index NYC",
        "KSDEFINYC",
        "NYC Fixing",
        "January 17, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko DeFi Index LDN",
        "KSDEFILDN",
        "LDN Fixing",
        "January 17, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko DeFi Index SGP",
        "KSDEFISGP",
        "SGP Fixing",
        "January 17, 2025",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko L2 Index",
        "KSL2",
        "Real-time (5 sec)",
        "July 2, 2024",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko L2 Index NYC",
        "KSL2NYC",
        "NYC Fixing",
        "July 2, 2024",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko L2 Index LDN",
        "KSL2LDN",
        "LDN Fixing",
        "July 2, 2024",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Kaiko L2 Index SGP",
        "KSL2SGP",
        "SGP Fixing",
        "July 2, 2024",
        "April 3, 2023",
        FACTSHEET_SECTOR_THEMATIC,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Vinter Cardano Yield Index ",
        "CASL",
        "LDN Fixing",
        "November 10, 2022",
        "March 06, 2024",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/CASL%20-%20Fact%20Sheet%20-%20multi-asset_casl_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Sygnum Platform Winners Index ",
        "MOON",
        "17:00 CET Fixing",
        "July 21, 2022",
        "November 01, 2019",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/MOON%20-%20Fact%20Sheet%20-%20multi-asset_moon_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Sector & Thematic",
        "Vinter CF Crypto Web3 Index",
        "VCFWB3",
        "LDN Fixing",
        "May 15, 2023",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/VCFWB3%20-%20Fact%20Sheet%20-multi-asset_vcfwb3_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),

    // Market Indices
    index(
        "Kaiko",
        "Market",
        "Kaiko Standard Index",
        "KMSTA",
        "Real-time (5 sec)",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Standard Index NYC",
        "KMSTANYC",
        "NYC Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Standard Index LDN",
        "KMSTALDN",
        "LDN Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Standard Index SGP",
        "KMSTASGP",
        "SGP Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Small Cap Index",
        "KMSMA",
        "Real-time (5 sec)",
        "January 23, 2025",
        "January 2, 2015",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Small Cap Index NYC",
        "KMSMANYC",
        "NYC Fixing",
        "January 23, 2025",
        "January 2, 2015",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Small Cap Index LDN",
        "KMSMALDN",
        "LDN Fixing",
        "January 23, 2025",
        "January 2, 2015",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Small Cap Index SGP",
        "KMSMASGP",
        "SGP Fixing",
        "January 23, 2025",
        "January 2, 2015",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Mid Cap Index",
        "KMMID",
        "Real-time (5 sec)",
        "January 23, 2025",
        "April 2, 2018",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Mid Cap Index NYC",
        "KMMIDNYC",
        "NYC Fixing",
        "January 23, 2025",
        "April 2, 2018",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Mid Cap Index LDN",
        "KMMIDLDN",
        "LDN Fixing",
        "January 23, 2025",
        "April 2, 2018",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Mid Cap Index SGP",
        "KMMIDSGP",
        "SGP Fixing",
        "January 23, 2025",
        "April 2, 2018",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Large Cap Index",
        "KMLAR",
        "Real-time (5 sec)",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Large Cap Index NYC",
        "KMLARNYC",
        "NYC Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Large Cap Index LDN",
        "KMLARLDN",
        "LDN Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Large Cap Index SGP",
        "KMLARSGP",
        "SGP Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Investable Index",
        "KMINV",
        "Real-time (5 sec)",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Investable Index NYC",
        "KMINVNYC",
        "NYC Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Investable Index LDN",
        "KMINVLDN",
        "LDN Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Kaiko Investable Index SGP",
        "KMINVSGP",
        "SGP Fixing",
        "January 23, 2025",
        "April 1, 2014",
        FACTSHEET_MARKET,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter 21Shares Crypto Mid-Cap Index ",
        "ALTS",
        "LDN Fixing",
        "December 14, 2021",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/ALTS%20-%20Fact%20Sheet%20-%20multi-asset_alts_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter 21Shares Crypto Staking Index ",
        "STAKE",
        "LDN Fixing",
        "January 18, 2023",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/multi-asset_stake_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter BOLD Index",
        "VBNGD",
        "LDN Fixing",
        "November 10, 2023",
        "January 01, 2020",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/VBNGD%20-%20Fact%20Sheet%20-%20multi-asset_vbngd_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter CF Crypto Momentum Index",
        "VCFMOM",
        "LDN Fixing",
        "May 15, 2023",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/VCFMOM%20-%20Fact%20Sheet%20-multi-asset_vcfmom_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter Diffuse Digital 30 Index",
        "DDV",
        "LDN Fixing",
        "July 02, 2022",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/Factsheets%20and%20Methodologies/DDV%20-%20Fact%20Sheet%20-%20multi-asset_ddv_end=2025-03-12&start=2020-12-31.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter Hashdex Risk Parity Momentum Crypto Index",
        "VHASHMOM",
        "17:00 CET Fixing",
        "September 05, 2022",
        "January 01, 2021",
        r#"<a href="https://marketing.kaiko.com/hubfs/VHASHMOM%20Kaiko%20Factsheet.pdf" target="_blank">View Factsheet</a>"#,
    ),
    index(
        "Kaiko",
        "Market",
        "Vinter Bytetree BOLD1 Inverse Volatility Index",
        "BOLD1",
        "LDN Fixing",
        "November 10, 2023",
        "January 01, 2020",
        r#"<a target="_blank">Coming Soon</a>"#,
    ),

];

/// The catalogue as owned records, ready for factsheet reconciliation.
pub fn records() -> Vec<IndexRecord> {
    CATALOGUE.iter().map(IndexRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::ticker::base_ticker;

    #[test]
    fn tickers_are_unique() {
        let mut seen = HashSet::new();
        for entry in CATALOGUE {
            assert!(seen.insert(entry.ticker), "duplicate ticker {}", entry.ticker);
        }
    }

    #[test]
    fn every_variant_group_has_an_exact_base() {
        for entry in CATALOGUE {
            let base = base_ticker(entry.ticker);
            assert!(
                CATALOGUE.iter().any(|e| e.ticker == base),
                "{} has no base record {base}",
                entry.ticker
            );
        }
    }

    #[test]
    fn no_field_is_blank_except_factsheet() {
        for entry in CATALOGUE {
            for field in [
                entry.brand,
                entry.family,
                entry.name,
                entry.ticker,
                entry.dissemination,
                entry.launch_date,
                entry.inception_date,
            ] {
                assert!(!field.trim().is_empty(), "blank field in {}", entry.ticker);
            }
        }
    }

    #[test]
    fn records_preserve_source_order() {
        let records = records();
        assert_eq!(records.len(), CATALOGUE.len());
        assert_eq!(records[0].ticker, "EGLX");
        assert_eq!(records.last().map(|r| r.ticker.as_str()), Some("BOLD1"));
    }
}
