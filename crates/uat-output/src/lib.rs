//! `uat-output` — persistence for trade and tick data.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | Flat row types written by backends                     |
//! | [`writer`]   | The `TradeWriter` trait implemented by all backends    |
//! | [`csv`]      | `CsvTradeWriter` — two-file CSV backend                |
//! | [`observer`] | `TradeLogObserver<W>` — bridges `SimObserver` → writer |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! Observer callbacks have no return channel, so write errors are stored
//! inside [`TradeLogObserver`] and retrieved after the run with
//! [`take_error`][observer::TradeLogObserver::take_error].

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTradeWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TradeLogObserver;
pub use row::{TickSummaryRow, TradeRow};
pub use writer::TradeWriter;
