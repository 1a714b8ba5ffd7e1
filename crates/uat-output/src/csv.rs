//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trades.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TradeWriter;
use crate::{OutputResult, TickSummaryRow, TradeRow};

/// Writes the trade log to two CSV files.
pub struct CsvTradeWriter {
    trades: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvTradeWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trades = Writer::from_path(dir.join("trades.csv"))?;
        trades.write_record(["tick", "seller", "buyer", "region", "permit_time", "price"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "trades", "active_agents"])?;

        Ok(Self {
            trades,
            summaries,
            finished: false,
        })
    }
}

impl TradeWriter for CsvTradeWriter {
    fn write_trade(&mut self, row: &TradeRow) -> OutputResult<()> {
        self.trades.write_record(&[
            row.tick.to_string(),
            // First issuances have no seller; the column stays empty.
            row.seller.map(|id| id.to_string()).unwrap_or_default(),
            row.buyer.to_string(),
            row.region.clone(),
            row.permit_time.to_string(),
            row.price.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.trades.to_string(),
            row.active_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trades.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
