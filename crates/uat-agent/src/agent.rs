//! The `Agent` trait — the main extension point for market participants.

use uat_book::{AskContext, BidContext};
use uat_core::{AgentId, Tick, Value};
use uat_space::Region;

/// A market participant.
///
/// The driver calls each active agent once per tick per phase, in onboarding
/// order, and delivers trade callbacks between the phases.  Only
/// [`bid_phase`][Self::bid_phase], [`ask_phase`][Self::ask_phase], and
/// [`stop`][Self::stop] shape behaviour; the notification hooks default to
/// no-ops so passive strategies don't need to implement them.
///
/// # Determinism
///
/// Each invocation receives a fresh `seed` drawn from the driver's seeded
/// generator.  An agent that sources all its randomness from that seed (via
/// [`AgentRng`][uat_core::AgentRng]) is exactly reproducible across runs.
///
/// # Tick-consistent views
///
/// During the bid phase no sale from the current tick has been applied yet;
/// during the ask phase all of them have.  An ask accepted this tick becomes
/// visible only next tick.
pub trait Agent<R: Region> {
    /// Place bids for this tick.
    ///
    /// `market` accepts bids for any permit at `t' >= t` via
    /// [`BidContext::bid`] and answers status queries via
    /// [`BidContext::status`].  Bids on permits the agent cannot buy, or
    /// that fail to strictly improve on the floor and the running highest,
    /// return `false` and have no effect.
    fn bid_phase(&mut self, t: Tick, market: &mut BidContext<'_, R>, seed: u64);

    /// List held permits for resale.
    ///
    /// Runs after this tick's bids have resolved, so permits won this tick
    /// may legally be re-listed.  Accepted asks apply at phase end.
    fn ask_phase(&mut self, t: Tick, market: &mut AskContext<'_, R>, seed: u64);

    /// The agent won the auction for `(region, t)` at `price`.
    ///
    /// Delivered during bid resolution, before any agent's ask phase
    /// observes the sale.
    fn on_bought(&mut self, _region: &R, _t: Tick, _price: Value) {}

    /// The agent's listing of `(region, t)` sold at `price` and ownership
    /// moved to the buyer.
    fn on_sold(&mut self, _region: &R, _t: Tick, _price: Value) {}

    /// Terminal notification: the agent retired at tick `t`.
    ///
    /// `id` is the agent's own id — handy for strategies that log or index
    /// external state by id.
    fn on_finished(&mut self, _id: AgentId, _t: Tick) {}

    /// Polled once per tick after the ask phase; `true` retires the agent.
    ///
    /// Retirement is the only way out of the active set — there is no
    /// mid-phase cancellation.
    fn stop(&mut self, t: Tick, seed: u64) -> bool;
}
