//! The onboarding seam: one factory call per tick.

use uat_core::Tick;
use uat_space::{Airspace, Region};

use crate::Agent;

/// Produces the agents that join the market at a given tick.
///
/// Called exactly once per tick, before the bid phase.  Returned agents are
/// onboarded in order and assigned the next dense ids.  Returning an empty
/// vector is the common case for most ticks.
///
/// Closures of the matching shape implement this trait, so a simulation can
/// be driven by
///
/// ```rust,ignore
/// simulate(
///     |t, space, seed| if t == Tick::ZERO { spawn_fleet(space, seed) } else { vec![] },
///     airspace, 42, SimulationOpts::default(), &mut NoopObserver,
/// );
/// ```
pub trait AgentFactory<R: Region> {
    fn spawn(&mut self, t: Tick, airspace: &Airspace<R>, seed: u64) -> Vec<Box<dyn Agent<R>>>;
}

impl<R, F> AgentFactory<R> for F
where
    R: Region,
    F: FnMut(Tick, &Airspace<R>, u64) -> Vec<Box<dyn Agent<R>>>,
{
    fn spawn(&mut self, t: Tick, airspace: &Airspace<R>, seed: u64) -> Vec<Box<dyn Agent<R>>> {
        self(t, airspace, seed)
    }
}
