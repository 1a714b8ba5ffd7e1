//! The `Simulation` driver and its tick loop.

use uat_agent::{Agent, AgentFactory};
use uat_book::{AskContext, BidContext, BookEntry, BookView, PendingAsk, Permit, PermitBook, PermitState};
use uat_core::{AgentId, SimRng, Tick};
use uat_space::{Airspace, Region};

use crate::{SimObserver, SimulationOpts, StopCriteria, TradeRecord};

// ── Simulation ────────────────────────────────────────────────────────────────

/// The auction driver.
///
/// Owns the permit book, every agent ever onboarded (retired agents keep
/// their slot so ids stay stable), the active set, and the seed source.
/// One [`step`][Self::step] is one complete auction round;
/// [`run`][Self::run] loops rounds until the configured stop criteria
/// fires.
///
/// # Determinism
///
/// All state is driver-owned and every phase runs synchronously, so a run
/// is a pure function of `(factory, airspace, seed, opts)` as long as the
/// factory and the agents derive their randomness from the seeds they are
/// handed.
pub struct Simulation<R: Region, F: AgentFactory<R>> {
    factory: F,
    airspace: Airspace<R>,
    opts: SimulationOpts,
    rng: SimRng,
    book: PermitBook<R>,
    /// Every agent ever onboarded, indexed by `AgentId`.
    agents: Vec<Box<dyn Agent<R>>>,
    /// Ids of agents still participating, in onboarding order.
    active: Vec<AgentId>,
}

impl<R: Region, F: AgentFactory<R>> Simulation<R, F> {
    // ── Construction & accessors ──────────────────────────────────────────

    pub fn new(factory: F, airspace: Airspace<R>, seed: u64, opts: SimulationOpts) -> Self {
        Self {
            factory,
            airspace,
            rng: SimRng::new(seed),
            book: PermitBook::new(opts.time_window),
            opts,
            agents: Vec::new(),
            active: Vec::new(),
        }
    }

    /// The tick the next [`step`][Self::step] will run.
    pub fn current_tick(&self) -> Tick {
        self.book.front_tick()
    }

    /// Number of agents still active.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of agents ever onboarded (active and retired).
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn airspace(&self) -> &Airspace<R> {
        &self.airspace
    }

    /// Read-only view of the book (e.g. for inspection between steps).
    pub fn view(&self) -> BookView<'_, R> {
        self.book.view()
    }

    /// Whether the stop criteria holds right now.
    ///
    /// [`run`][Self::run] checks this after every step — a simulation always
    /// executes at least one tick.
    pub fn should_stop(&self) -> bool {
        match self.opts.stop {
            StopCriteria::NoAgents => self.active.is_empty(),
            StopCriteria::TimeThreshold { t_max } => self.book.front_tick() > t_max,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run rounds until the stop criteria fires, then emit `on_sim_end`.
    pub fn run<O: SimObserver<R>>(&mut self, observer: &mut O) {
        loop {
            self.step(observer);
            if self.should_stop() {
                break;
            }
        }
        observer.on_sim_end(self.book.front_tick());
    }

    /// Execute one complete auction round and advance the clock.
    ///
    /// Ignores the stop criteria; callers stepping manually decide when to
    /// stop (and whether to emit `on_sim_end`).
    pub fn step<O: SimObserver<R>>(&mut self, observer: &mut O) {
        let t0 = self.book.front_tick();

        // ── ① Status ──────────────────────────────────────────────────────
        observer.on_status(t0, &self.airspace, &self.book.view());

        // ── ② Onboard ─────────────────────────────────────────────────────
        let seed = self.rng.next_seed();
        for agent in self.factory.spawn(t0, &self.airspace, seed) {
            let id = AgentId(self.agents.len() as u32);
            self.agents.push(agent);
            self.active.push(id);
        }

        // ── ③ Bid ─────────────────────────────────────────────────────────
        //
        // `contested` collects each permit once, the first time any bid
        // raises it from unbid to bid-on.  Resolution walks exactly this
        // list, so a permit auctioned this tick settles exactly once.
        let mut contested: Vec<Permit<R>> = Vec::new();
        for &id in &self.active {
            let seed = self.rng.next_seed();
            let mut market = BidContext::new(id, &mut self.book, &mut contested);
            self.agents[id.index()].bid_phase(t0, &mut market, seed);
        }

        // ── ④ Resolve ─────────────────────────────────────────────────────
        for permit in contested {
            let state = self.book.peek(permit.region(), permit.time());
            let PermitState::OnSale {
                owner: seller,
                highest_bidder: Some(buyer),
                highest_bid: price,
                ..
            } = state
            else {
                unreachable!("contested permit {permit:?} lost its sale state mid-tick");
            };

            observer.on_trade(&TradeRecord {
                t: t0,
                seller,
                buyer,
                region: permit.region().clone(),
                permit_time: permit.time(),
                price,
            });

            self.agents[buyer.index()].on_bought(permit.region(), permit.time(), price);
            if let Some(seller) = seller {
                self.agents[seller.index()].on_sold(permit.region(), permit.time(), price);
            }

            if let BookEntry::Live(entry) = self.book.entry(permit.region(), permit.time()) {
                *entry = PermitState::Used { owner: buyer };
            }
        }

        // ── ⑤ Ask ─────────────────────────────────────────────────────────
        //
        // Accepted asks are deferred so no agent observes a listing made
        // during this phase — its own included.
        let mut pending: Vec<PendingAsk<R>> = Vec::new();
        for &id in &self.active {
            let seed = self.rng.next_seed();
            let mut market = AskContext::new(id, &self.book, &mut pending);
            self.agents[id.index()].ask_phase(t0, &mut market, seed);
        }

        // ── ⑥ Apply asks ──────────────────────────────────────────────────
        for ask in pending {
            // Accepted asks always name in-window permits; the guard just
            // mirrors the book's discard rule.
            if let BookEntry::Live(entry) = self.book.entry(ask.permit.region(), ask.permit.time()) {
                *entry = PermitState::OnSale {
                    owner: Some(ask.owner),
                    min_value: ask.min_value,
                    highest_bidder: None,
                    highest_bid: 0.0,
                };
            }
        }

        // ── ⑦ Retire ──────────────────────────────────────────────────────
        let mut keep = Vec::with_capacity(self.active.len());
        for &id in &self.active {
            let seed = self.rng.next_seed();
            let agent = &mut self.agents[id.index()];
            if agent.stop(t0, seed) {
                agent.on_finished(id, t0);
            } else {
                keep.push(id);
            }
        }
        self.active = keep;

        observer.on_tick_end(t0, self.active.len());

        // ── ⑧ Advance ─────────────────────────────────────────────────────
        self.book.advance();
    }
}

// ── simulate ──────────────────────────────────────────────────────────────────

/// Build a [`Simulation`] and run it to completion.
pub fn simulate<R, F, O>(
    factory: F,
    airspace: Airspace<R>,
    seed: u64,
    opts: SimulationOpts,
    observer: &mut O,
) where
    R: Region,
    F: AgentFactory<R>,
    O: SimObserver<R>,
{
    Simulation::new(factory, airspace, seed, opts).run(observer);
}
