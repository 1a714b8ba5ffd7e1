//! `uat-sim` — the per-tick auction driver.
//!
//! # The tick state machine
//!
//! ```text
//! loop:
//!   ① Status    — observer sees (tick, airspace, read-only book).
//!   ② Onboard   — factory spawns agents; dense ids; appended to active set.
//!   ③ Bid       — each active agent's bid_phase, in onboarding order.
//!   ④ Resolve   — each first-contested permit: trade emitted, on_bought /
//!                 on_sold delivered, entry becomes Used{buyer}.
//!   ⑤ Ask       — each active agent's ask_phase; accepted asks deferred.
//!   ⑥ Apply     — deferred asks re-list permits in acceptance order.
//!   ⑦ Retire    — stop() per agent; finished agents get on_finished.
//!   ⑧ Advance   — head bucket dropped, clock += 1.
//!   stop criteria evaluated; if not met, loop.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uat_sim::{simulate, NoopObserver, SimulationOpts};
//! use uat_space::GridBounds;
//!
//! let space = GridBounds::new(8, 8, 2)?.airspace();
//! simulate(my_factory, space, 42, SimulationOpts::default(), &mut NoopObserver);
//! ```

pub mod observer;
pub mod opts;
pub mod sim;
pub mod trade;

#[cfg(test)]
mod tests;

pub use observer::{NoopObserver, SimObserver};
pub use opts::{SimulationOpts, StopCriteria};
pub use sim::{simulate, Simulation};
pub use trade::TradeRecord;
