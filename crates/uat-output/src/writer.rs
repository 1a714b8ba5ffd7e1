//! The `TradeWriter` trait implemented by all backend writers.

use crate::{OutputResult, TickSummaryRow, TradeRow};

/// Trait implemented by trade-log backends.
///
/// All methods return `OutputResult` so backends can surface I/O failures;
/// [`TradeLogObserver`][crate::TradeLogObserver] turns those into stored
/// errors because observer callbacks cannot propagate them.
pub trait TradeWriter {
    /// Write one resolved sale.
    fn write_trade(&mut self, row: &TradeRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
