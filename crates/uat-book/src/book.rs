//! The sliding-window permit ledger.

use std::collections::{HashMap, VecDeque};

use uat_core::Tick;
use uat_space::Region;

use crate::PermitState;

// ── PermitBook ────────────────────────────────────────────────────────────────

/// The authoritative mapping from live permits to their private status.
///
/// Storage is a deque of per-tick buckets: bucket `i` holds the permits for
/// tick `front + i`, keyed by region.  Buckets and entries are created on
/// demand — a permit first exists the moment anything touches it, in the
/// default first-issuance [`OnSale`][PermitState] state — and the head
/// bucket is dropped whole by [`advance`][Self::advance].
///
/// # Time window
///
/// With a window `W` configured, permits further than `W` ticks past the
/// front are out of limits: [`entry`][Self::entry] reports
/// [`BookEntry::OutOfWindow`] (so the write is discarded at the call site)
/// and [`peek`][Self::peek] reports [`PermitState::OutOfLimits`].  A permit
/// rejected this way re-enters the market in its default state once the
/// front catches up — earlier discarded writes leave no trace.
///
/// # Preconditions
///
/// Lookups behind the front are programming errors and panic: the driver
/// drops the head bucket before anyone can observe the next tick, so no
/// well-behaved caller can name a past permit.
pub struct PermitBook<R: Region> {
    front: Tick,
    window: Option<u64>,
    buckets: VecDeque<HashMap<R, PermitState>>,
}

/// Result of a mutable lookup: a live entry, or nothing — the permit is out
/// of the window and the write should be dropped.
pub enum BookEntry<'a> {
    Live(&'a mut PermitState),
    OutOfWindow,
}

impl<R: Region> PermitBook<R> {
    /// An empty book with its front at tick 0.
    ///
    /// `window` is the maximum lookahead: permits at `t > front + window`
    /// are out of limits.  `None` means unbounded.
    pub fn new(window: Option<u64>) -> Self {
        Self {
            front: Tick::ZERO,
            window,
            buckets: VecDeque::new(),
        }
    }

    /// The current tick — the oldest tick still in the book.
    pub fn front_tick(&self) -> Tick {
        self.front
    }

    pub fn window(&self) -> Option<u64> {
        self.window
    }

    fn in_window(&self, t: Tick) -> bool {
        match self.window {
            Some(w) => t.since(self.front) <= w,
            None => true,
        }
    }

    /// Mutable access to the entry for `(region, t)`, materialising bucket
    /// and entry on demand.
    ///
    /// # Panics
    /// Panics if `t` is behind the front.
    pub fn entry(&mut self, region: &R, t: Tick) -> BookEntry<'_> {
        assert!(
            t >= self.front,
            "permit lookup at {t} behind the book front {}",
            self.front
        );
        if !self.in_window(t) {
            return BookEntry::OutOfWindow;
        }

        let idx = t.since(self.front) as usize;
        while self.buckets.len() <= idx {
            self.buckets.push_back(HashMap::new());
        }
        BookEntry::Live(self.buckets[idx].entry(region.clone()).or_default())
    }

    /// Read the state of `(region, t)` without materialising anything.
    ///
    /// Untouched in-window permits report the default first-issuance state;
    /// beyond the window the answer is [`PermitState::OutOfLimits`].
    ///
    /// # Panics
    /// Panics if `t` is behind the front.
    pub fn peek(&self, region: &R, t: Tick) -> PermitState {
        assert!(
            t >= self.front,
            "permit lookup at {t} behind the book front {}",
            self.front
        );
        if !self.in_window(t) {
            return PermitState::OutOfLimits;
        }

        let idx = t.since(self.front) as usize;
        self.buckets
            .get(idx)
            .and_then(|bucket| bucket.get(region))
            .copied()
            .unwrap_or_default()
    }

    /// Whether `(region, t)` has a materialised entry.  Unlike
    /// [`peek`][Self::peek] this is total: past and out-of-window permits
    /// simply report `false`.
    pub fn has_entry(&self, region: &R, t: Tick) -> bool {
        if t < self.front {
            return false;
        }
        let idx = t.since(self.front) as usize;
        self.buckets
            .get(idx)
            .is_some_and(|bucket| bucket.contains_key(region))
    }

    /// Drop the head bucket and move the front one tick forward.
    ///
    /// Every permit for the old front tick is destroyed, history included.
    pub fn advance(&mut self) {
        self.buckets.pop_front();
        self.front = self.front + 1;
    }

    /// A read-only view for observers.
    pub fn view(&self) -> BookView<'_, R> {
        BookView { book: self }
    }
}

// ── BookView ──────────────────────────────────────────────────────────────────

/// Read-only window onto the book, handed to status observers.
///
/// Unlike the per-agent query capability this exposes the **private** state —
/// owners, running bids and all.  Observers must treat it as a snapshot;
/// there is no way to mutate through it.
pub struct BookView<'a, R: Region> {
    book: &'a PermitBook<R>,
}

impl<R: Region> BookView<'_, R> {
    /// The private state of `(region, t)`.
    ///
    /// # Panics
    /// Panics if `t` is behind the book front.
    pub fn status(&self, region: &R, t: Tick) -> PermitState {
        self.book.peek(region, t)
    }

    /// Whether the permit has been touched this run.
    pub fn has_entry(&self, region: &R, t: Tick) -> bool {
        self.book.has_entry(region, t)
    }

    pub fn front_tick(&self) -> Tick {
        self.book.front_tick()
    }
}
