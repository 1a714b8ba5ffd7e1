//! The `(region, tick)` pair that is the atomic unit of trade.

use uat_core::Tick;
use uat_space::Region;

/// A time-stamped right to occupy one region for one tick.
///
/// Pure value type: equality and hashing combine the region and the tick,
/// nothing else.  The market state attached to a permit lives in the
/// [`PermitBook`][crate::PermitBook], not here.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permit<R: Region> {
    region: R,
    time: Tick,
}

impl<R: Region> Permit<R> {
    pub fn new(region: R, time: Tick) -> Self {
        Self { region, time }
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn time(&self) -> Tick {
        self.time
    }

    /// Decompose into the underlying pair.
    pub fn into_parts(self) -> (R, Tick) {
        (self.region, self.time)
    }
}
