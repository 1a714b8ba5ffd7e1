//! Phase capability handles — the only mutation path agents get.
//!
//! The driver builds one handle per agent per phase.  Each bundles the
//! agent's identity, the book, and the per-tick side lists the driver
//! resolves after the phase, so an agent can only do what its phase allows:
//! place bids during the bid phase, list holdings during the ask phase, and
//! query its own public projection in either.

use uat_core::{AgentId, Tick, Value};
use uat_space::Region;

use crate::{BookEntry, Permit, PermitBook, PermitState, PublicStatus};

// ── BidContext ────────────────────────────────────────────────────────────────

/// Bid-phase capability for one agent.
pub struct BidContext<'a, R: Region> {
    id: AgentId,
    book: &'a mut PermitBook<R>,
    /// Permits that became contested this tick, in first-touch order.  The
    /// driver resolves exactly these after the phase.
    contested: &'a mut Vec<Permit<R>>,
}

impl<'a, R: Region> BidContext<'a, R> {
    pub fn new(
        id: AgentId,
        book: &'a mut PermitBook<R>,
        contested: &'a mut Vec<Permit<R>>,
    ) -> Self {
        Self { id, book, contested }
    }

    /// The calling agent's id.
    pub fn agent(&self) -> AgentId {
        self.id
    }

    /// Offer `amount` for the permit `(region, t)`.
    ///
    /// Accepted iff the permit is on sale and `amount` strictly exceeds both
    /// the listing minimum and the running highest bid; the caller then
    /// becomes the new highest bidder.  Everything else — a held permit, a
    /// past or out-of-window tick, a non-improving amount — is rejected with
    /// `false` and leaves the book untouched.
    pub fn bid(&mut self, region: &R, t: Tick, amount: Value) -> bool {
        if t < self.book.front_tick() {
            return false;
        }
        match self.book.entry(region, t) {
            BookEntry::OutOfWindow => false,
            BookEntry::Live(state) => match state {
                PermitState::OnSale { min_value, highest_bidder, highest_bid, .. } => {
                    if amount > *min_value && amount > *highest_bid {
                        if highest_bidder.is_none() {
                            self.contested.push(Permit::new(region.clone(), t));
                        }
                        *highest_bidder = Some(self.id);
                        *highest_bid = amount;
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            },
        }
    }

    /// The permit's status as this agent is allowed to see it.
    pub fn status(&self, region: &R, t: Tick) -> PublicStatus {
        if t < self.book.front_tick() {
            return PublicStatus::Unavailable;
        }
        self.book.peek(region, t).public_for(self.id)
    }
}

// ── AskContext ────────────────────────────────────────────────────────────────

/// An accepted resale offer, applied by the driver once the phase ends.
pub struct PendingAsk<R: Region> {
    pub permit: Permit<R>,
    pub owner: AgentId,
    pub min_value: Value,
}

/// Ask-phase capability for one agent.
///
/// Accepted asks are *deferred*: they take effect only after every agent's
/// ask phase has run, so an agent never observes its own listing (or anyone
/// else's from this tick) mid-phase.
pub struct AskContext<'a, R: Region> {
    id: AgentId,
    book: &'a PermitBook<R>,
    pending: &'a mut Vec<PendingAsk<R>>,
}

impl<'a, R: Region> AskContext<'a, R> {
    pub fn new(
        id: AgentId,
        book: &'a PermitBook<R>,
        pending: &'a mut Vec<PendingAsk<R>>,
    ) -> Self {
        Self { id, book, pending }
    }

    /// The calling agent's id.
    pub fn agent(&self) -> AgentId {
        self.id
    }

    /// List the held permit `(region, t)` for resale at floor `min_value`.
    ///
    /// Accepted iff the caller currently owns the permit.  Acceptance is
    /// recorded, not applied: the permit stays `Used` until the phase ends,
    /// then re-lists with no bids and the caller as seller.
    pub fn ask(&mut self, region: &R, t: Tick, min_value: Value) -> bool {
        if t < self.book.front_tick() {
            return false;
        }
        match self.book.peek(region, t) {
            PermitState::Used { owner } if owner == self.id => {
                self.pending.push(PendingAsk {
                    permit: Permit::new(region.clone(), t),
                    owner: self.id,
                    min_value,
                });
                true
            }
            _ => false,
        }
    }

    /// The permit's status as this agent is allowed to see it.
    ///
    /// Sales resolved earlier this tick are visible; asks accepted this
    /// phase are not (they apply at phase end).
    pub fn status(&self, region: &R, t: Tick) -> PublicStatus {
        if t < self.book.front_tick() {
            return PublicStatus::Unavailable;
        }
        self.book.peek(region, t).public_for(self.id)
    }
}
