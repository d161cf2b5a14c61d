//! Catalogue, merge, and CSV output logic for the reference-rates coverage
//! page.
//!
//! [`pipeline::generate`] ties the stages together: the built-in catalogue is
//! reconciled against factsheets recovered from the previous output, location
//! variants are merged per base ticker, and both CSV files are written.

pub mod catalogue;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod prior;
pub mod ticker;
pub mod writer;

pub use pipeline::{GenerateReport, build_rows, generate, load_records};
