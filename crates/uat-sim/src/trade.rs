//! The record emitted for every resolved sale.

use uat_core::{AgentId, Tick, Value};
use uat_space::Region;

/// One resolved sale.
///
/// `seller == None` marks a first issuance: nobody owned the permit before,
/// the market itself sold it.  `permit_time` is the tick the permit grants
/// occupancy for, which is `>= t` (the tick the auction ran).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeRecord<R: Region> {
    /// Tick at which the sale resolved.
    pub t: Tick,
    /// Previous owner, if any.
    pub seller: Option<AgentId>,
    /// Winning bidder — the new owner.
    pub buyer: AgentId,
    /// Region of the traded permit.
    pub region: R,
    /// Occupancy tick of the traded permit.
    pub permit_time: Tick,
    /// The winning bid.
    pub price: Value,
}
