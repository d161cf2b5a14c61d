//! Base-ticker and location resolution.
//!
//! Suffixes are checked in [`Location::ALL`] order and the first match wins,
//! so a ticker ending in `LDN` is never also tested against `NYC`.

use ratescoverage_shared::Location;

/// The location fixing encoded in a ticker's suffix, if any.
pub fn location_of(ticker: &str) -> Option<Location> {
    Location::ALL
        .into_iter()
        .find(|loc| ticker.ends_with(loc.suffix()))
}

/// Strip a trailing location suffix. Tickers without one are returned as is.
pub fn base_ticker(ticker: &str) -> &str {
    match location_of(ticker) {
        Some(loc) => &ticker[..ticker.len() - loc.suffix().len()],
        None => ticker,
    }
}
