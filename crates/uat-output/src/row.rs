//! Plain data row types written by output backends.

/// One resolved sale, flattened for output.
///
/// `region` is the region's `Display` rendering — backends don't know the
/// concrete geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRow {
    pub tick: u64,
    /// `None` for first issuances (the market itself was the seller).
    pub seller: Option<u32>,
    pub buyer: u32,
    pub region: String,
    pub permit_time: u64,
    pub price: f64,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick: u64,
    /// Sales resolved this tick.
    pub trades: u64,
    /// Agents still active at the end of the tick.
    pub active_agents: u64,
}
