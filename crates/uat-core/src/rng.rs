//! Deterministic RNG plumbing.
//!
//! # Determinism strategy
//!
//! A single [`SimRng`], seeded from the run's global seed, is owned by the
//! simulation driver.  Every external call-out — the agent factory, each
//! agent's bid phase, ask phase, and stop check — consumes one fresh `u64`
//! from it.  Agents that want randomness rebuild an [`AgentRng`] from the
//! seed they were handed, so per-agent behaviour is independently
//! reproducible: replaying a run with the same global seed and the same
//! single-threaded driver reproduces every per-call seed exactly.
//!
//! The derivation constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive draws uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The driver-owned seed source.
///
/// Only the simulation driver holds one; everything downstream receives plain
/// `u64` seeds.  Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw the next per-call seed.
    ///
    /// Mixed with the golden-ratio constant so that seeds handed to adjacent
    /// calls land far apart even when the underlying stream is correlated.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.next_u64().wrapping_mul(MIXING_CONSTANT)
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-call deterministic RNG for agent and factory implementations.
///
/// Rebuild one from the seed passed into each phase:
///
/// ```
/// use uat_core::AgentRng;
///
/// let mut rng = AgentRng::from_seed(42);
/// let jitter = rng.gen_range(0.0..1.0);
/// assert!((0.0..1.0).contains(&jitter));
/// ```
///
/// The type is a thin wrapper over `SmallRng`; [`inner`][Self::inner] exposes
/// it for use with `rand` distribution types.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Build from a per-call seed (as handed to `bid_phase` etc.).
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
