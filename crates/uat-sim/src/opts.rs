//! Driver configuration.

use uat_core::Tick;

/// When the outer loop terminates.  Evaluated after each tick's advance.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCriteria {
    /// Stop once the active set is empty at the end of a tick.  A run whose
    /// factory never spawns anyone therefore executes exactly one tick.
    #[default]
    NoAgents,

    /// Stop once the clock has moved past `t_max`; ticks `0..=t_max` all
    /// execute, whether or not agents remain.
    TimeThreshold { t_max: Tick },
}

/// Simulation options.
///
/// `Default` is an unbounded book window and [`StopCriteria::NoAgents`].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationOpts {
    /// Maximum lookahead from the current tick for which the book accepts
    /// writes.  Beyond it, reads report out-of-limits and writes are
    /// silently dropped.  `None` = unbounded.
    pub time_window: Option<u64>,

    /// Termination rule for [`Simulation::run`][crate::Simulation::run].
    pub stop: StopCriteria,
}
