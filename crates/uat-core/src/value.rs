//! The common currency type for bids and asks.

/// A monetary value.  Bids and asks use the same type, so an agent's resale
/// price and purchase price compare directly.
///
/// Plain `f64` rather than a fixed-point wrapper: the market only ever
/// compares values with strict `>` (a bid must strictly improve on both the
/// minimum and the running highest), so accumulated rounding cannot flip an
/// auction — at worst a bid that ties to the last ulp is rejected.
pub type Value = f64;
