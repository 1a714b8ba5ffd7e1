//! `TradeLogObserver<W>` — bridges `SimObserver` to a `TradeWriter`.

use std::fmt;

use uat_core::Tick;
use uat_sim::{SimObserver, TradeRecord};
use uat_space::Region;

use crate::row::{TickSummaryRow, TradeRow};
use crate::writer::TradeWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams every trade and a per-tick summary to any
/// [`TradeWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
///
/// The region type must be `Display` so it can be flattened into a row.
pub struct TradeLogObserver<W: TradeWriter> {
    writer: W,
    trades_this_tick: u64,
    last_error: Option<OutputError>,
}

impl<W: TradeWriter> TradeLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trades_this_tick: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<R, W> SimObserver<R> for TradeLogObserver<W>
where
    R: Region + fmt::Display,
    W: TradeWriter,
{
    fn on_trade(&mut self, trade: &TradeRecord<R>) {
        self.trades_this_tick += 1;
        let row = TradeRow {
            tick: trade.t.0,
            seller: trade.seller.map(|id| id.0),
            buyer: trade.buyer.0,
            region: trade.region.to_string(),
            permit_time: trade.permit_time.0,
            price: trade.price,
        };
        let result = self.writer.write_trade(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, t: Tick, active: usize) {
        let row = TickSummaryRow {
            tick: t.0,
            trades: self.trades_this_tick,
            active_agents: active as u64,
        };
        self.trades_this_tick = 0;
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
