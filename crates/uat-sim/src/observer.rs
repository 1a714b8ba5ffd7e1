//! Simulation observer trait for progress reporting and data collection.

use uat_book::BookView;
use uat_core::Tick;
use uat_space::{Airspace, Region};

use crate::TradeRecord;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are pure spectators: the
/// arguments give them no way to mutate engine state.
///
/// # Example — trade printer
///
/// ```rust,ignore
/// struct TradePrinter;
///
/// impl<R: Region + std::fmt::Display> SimObserver<R> for TradePrinter {
///     fn on_trade(&mut self, trade: &TradeRecord<R>) {
///         println!("{}: {} sold for {:.2}", trade.t, trade.region, trade.price);
///     }
/// }
/// ```
pub trait SimObserver<R: Region> {
    /// Called at the very start of each tick, before onboarding.
    ///
    /// `book` exposes the **private** permit states, read-only — this is the
    /// one place the full market depth is visible from outside the engine.
    fn on_status(&mut self, _t: Tick, _airspace: &Airspace<R>, _book: &BookView<'_, R>) {}

    /// Called once per resolved sale, before the buyer's `on_bought`.
    fn on_trade(&mut self, _trade: &TradeRecord<R>) {}

    /// Called at the end of each tick, after retirement but before the
    /// clock advances.  `active` is the number of agents still active.
    fn on_tick_end(&mut self, _t: Tick, _active: usize) {}

    /// Called once after the stop criteria fires.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl<R: Region> SimObserver<R> for NoopObserver {}
