//! Strongly typed agent identifier.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into the driver's agent vector via `id.0 as usize`, but
//! callers should prefer the `.index()` helper for clarity.
//!
//! There is no "invalid" sentinel: the absence of an owner is always spelled
//! `Option<AgentId>` so the type system tracks it.

use std::fmt;

/// Index of an agent in the driver's agent vector.
///
/// Ids are dense: the driver assigns them sequentially from 0 in onboarding
/// order, and an id is never reused — a retired agent keeps its slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
