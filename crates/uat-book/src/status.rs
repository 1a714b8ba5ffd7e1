//! Permit status, private and public.

use uat_core::{AgentId, Value};

// ── PermitState ───────────────────────────────────────────────────────────────

/// The engine-private state of one permit.
///
/// Exactly one of these holds for any permit at any instant.  Agents never
/// see it directly; they see the per-agent [`PublicStatus`] projection.
/// Observers registered with the driver get the real thing, read-only.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermitState {
    /// The permit lies beyond the configured time window.  Writes aimed at
    /// such a permit are discarded.
    OutOfLimits,

    /// Listed for auction.  `owner == None` means first issuance — the
    /// permit has never been sold and the market itself is the seller.
    ///
    /// Invariant: `highest_bid > min_value` whenever `highest_bidder` is set.
    OnSale {
        owner: Option<AgentId>,
        min_value: Value,
        highest_bidder: Option<AgentId>,
        highest_bid: Value,
    },

    /// Held by `owner` and not listed.
    Used { owner: AgentId },
}

impl Default for PermitState {
    /// The first-issuance listing: unowned, free to claim above zero.
    fn default() -> Self {
        PermitState::OnSale {
            owner: None,
            min_value: 0.0,
            highest_bidder: None,
            highest_bid: 0.0,
        }
    }
}

impl PermitState {
    /// Project the private state into what agent `id` is allowed to see.
    ///
    /// Owners of a live listing see `Unavailable` — an agent cannot bid on
    /// its own listing.  Everyone else sees the listing floor, but never the
    /// running highest bid or who placed it.
    pub fn public_for(&self, id: AgentId) -> PublicStatus {
        match *self {
            PermitState::OutOfLimits => PublicStatus::Unavailable,
            PermitState::Used { owner } => {
                if owner == id {
                    PublicStatus::Owned
                } else {
                    PublicStatus::Unavailable
                }
            }
            PermitState::OnSale { owner, min_value, .. } => {
                if owner == Some(id) {
                    PublicStatus::Unavailable
                } else {
                    PublicStatus::Available { min_value }
                }
            }
        }
    }
}

// ── PublicStatus ──────────────────────────────────────────────────────────────

/// What a querying agent sees for a permit.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PublicStatus {
    /// Not purchasable by the querying agent right now.
    Unavailable,

    /// Biddable.  A bid must be strictly greater than `min_value` (and than
    /// the running highest bid, which is not disclosed).
    Available { min_value: Value },

    /// The querying agent holds this permit.
    Owned,
}

impl PublicStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, PublicStatus::Available { .. })
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, PublicStatus::Owned)
    }
}
