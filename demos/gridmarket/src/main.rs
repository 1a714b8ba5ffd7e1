//! gridmarket — smallest end-to-end run of the uat permit market.
//!
//! Waves of pilots onboard onto an 8×8×2 grid airspace.  Each pilot picks a
//! random origin/destination, computes a shortest corridor, and tries to buy
//! the permit for every corridor cell at consecutive ticks.  Pilots that get
//! locked out of a cell abandon the mission and re-list what they already
//! bought, so later waves trade on the resale market, not just the primary
//! one.  All trades land in `output/gridmarket/trades.csv`.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

use uat_agent::Agent;
use uat_book::{AskContext, BidContext, BookView};
use uat_core::{AgentRng, Tick, Value};
use uat_output::{CsvTradeWriter, TradeLogObserver};
use uat_sim::{SimObserver, Simulation, SimulationOpts, StopCriteria, TradeRecord};
use uat_space::{Airspace, GridBounds, GridCell, Region};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const COLS: u32 = 8;
const ROWS: u32 = 8;
const LEVELS: u32 = 2;
const WAVES: u64 = 3; // pilot waves at ticks 0, 1, 2
const PILOTS_PER_WAVE: usize = 4;
const DEPARTURE_LEAD: u64 = 2; // ticks between onboarding and first corridor permit
const TIME_WINDOW: u64 = 20; // generous enough that no corridor outruns it

// ── Pilot reports ─────────────────────────────────────────────────────────────

#[derive(Debug)]
struct PilotReport {
    label: usize,
    completed: bool,
    legs: usize,
    spent: Value,
    earned: Value,
}

type Reports = Rc<RefCell<Vec<PilotReport>>>;

// ── Pilot agent ───────────────────────────────────────────────────────────────

/// Buys the permits of one shortest corridor, cell by cell, tick by tick.
///
/// A pilot keeps raising its own bids until it owns the whole corridor or a
/// rival takes one of its cells; in the latter case it abandons the mission
/// and re-lists its holdings at a 20 % markup.
struct Pilot {
    label: usize,
    origin: GridCell,
    dest: GridCell,
    depart: Tick,
    /// Corridor cells, computed in the first bid phase (seeded tie-break).
    path: Option<Vec<GridCell>>,
    /// Corridor permits not yet won: `(cell, occupancy tick)`.
    needed: Vec<(GridCell, Tick)>,
    /// Permits currently held, with the price paid.
    held: Vec<(GridCell, Tick, Value)>,
    abandoned: bool,
    spent: Value,
    earned: Value,
    reports: Reports,
}

impl Pilot {
    fn new(label: usize, origin: GridCell, dest: GridCell, depart: Tick, reports: Reports) -> Self {
        Self {
            label,
            origin,
            dest,
            depart,
            path: None,
            needed: Vec::new(),
            held: Vec::new(),
            abandoned: false,
            spent: 0.0,
            earned: 0.0,
            reports,
        }
    }

    /// Tick of the last corridor permit, once the path is known.
    fn mission_end(&self) -> Option<Tick> {
        self.path
            .as_ref()
            .map(|p| self.depart + (p.len() as u64 - 1))
    }
}

impl Agent<GridCell> for Pilot {
    fn bid_phase(&mut self, t: Tick, market: &mut BidContext<'_, GridCell>, seed: u64) {
        if self.abandoned {
            return;
        }

        // Plan the corridor on first wake.
        if self.path.is_none() {
            let path = self.origin.shortest_path(&self.dest, seed);
            if path.is_empty() {
                self.abandoned = true;
                return;
            }
            self.needed = path
                .iter()
                .enumerate()
                .map(|(i, cell)| (*cell, self.depart + i as u64))
                .collect();
            self.path = Some(path);
        }

        // Departure reached with holes in the corridor: give up.
        if t >= self.depart && !self.needed.is_empty() {
            self.abandoned = true;
            return;
        }

        let mut rng = AgentRng::from_seed(seed);
        for &(cell, pt) in &self.needed {
            match market.status(&cell, pt) {
                uat_book::PublicStatus::Available { min_value } => {
                    // Overshoot the floor a little so two pilots rarely tie.
                    let offer = min_value + 1.0 + rng.gen_range(0.0..0.5);
                    market.bid(&cell, pt, offer);
                }
                uat_book::PublicStatus::Unavailable => {
                    // A rival holds this cell; the corridor is lost.
                    self.abandoned = true;
                    return;
                }
                uat_book::PublicStatus::Owned => {}
            }
        }
    }

    fn ask_phase(&mut self, t: Tick, market: &mut AskContext<'_, GridCell>, _seed: u64) {
        if !self.abandoned {
            return;
        }
        // Cost recovery: re-list everything still held at a 20 % markup.
        for &(cell, pt, paid) in &self.held {
            if pt > t {
                market.ask(&cell, pt, paid * 1.2);
            }
        }
    }

    fn on_bought(&mut self, region: &GridCell, t: Tick, price: Value) {
        self.spent += price;
        self.held.push((*region, t, price));
        self.needed.retain(|&(cell, pt)| !(cell == *region && pt == t));
    }

    fn on_sold(&mut self, region: &GridCell, t: Tick, price: Value) {
        self.earned += price;
        self.held.retain(|&(cell, pt, _)| !(cell == *region && pt == t));
    }

    fn on_finished(&mut self, _id: uat_core::AgentId, _t: Tick) {
        self.reports.borrow_mut().push(PilotReport {
            label: self.label,
            completed: !self.abandoned,
            legs: self.path.as_ref().map_or(0, Vec::len),
            spent: self.spent,
            earned: self.earned,
        });
    }

    fn stop(&mut self, t: Tick, _seed: u64) -> bool {
        if self.abandoned {
            // Linger while held permits are still sellable.
            return self.held.iter().all(|&(_, pt, _)| pt <= t);
        }
        match self.mission_end() {
            Some(end) => self.needed.is_empty() && t >= end,
            None => false,
        }
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Forwards to the CSV trade log while keeping console-worthy counters.
struct ConsoleObserver<O> {
    inner: O,
    trades: usize,
    ticks: usize,
}

impl<O: SimObserver<GridCell>> ConsoleObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, trades: 0, ticks: 0 }
    }
}

impl<O: SimObserver<GridCell>> SimObserver<GridCell> for ConsoleObserver<O> {
    fn on_status(&mut self, t: Tick, airspace: &Airspace<GridCell>, book: &BookView<'_, GridCell>) {
        self.inner.on_status(t, airspace, book);
    }

    fn on_trade(&mut self, trade: &TradeRecord<GridCell>) {
        self.trades += 1;
        self.inner.on_trade(trade);
    }

    fn on_tick_end(&mut self, t: Tick, active: usize) {
        self.ticks += 1;
        self.inner.on_tick_end(t, active);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== gridmarket — uat permit market ===");
    println!(
        "Airspace: {COLS}x{ROWS}x{LEVELS}  |  Waves: {WAVES} x {PILOTS_PER_WAVE} pilots  |  Seed: {SEED}"
    );
    println!();

    // 1. Build the airspace.
    let bounds = GridBounds::new(COLS, ROWS, LEVELS)?;
    let airspace = bounds.airspace();
    println!("Regions: {}", airspace.len());

    // 2. Factory: a wave of pilots per early tick, random endpoints.
    let reports: Reports = Rc::new(RefCell::new(Vec::new()));
    let factory_reports = reports.clone();
    let factory = move |t: Tick, space: &Airspace<GridCell>, seed: u64| {
        if t.0 >= WAVES {
            return vec![];
        }
        let mut rng = AgentRng::from_seed(seed);
        (0..PILOTS_PER_WAVE)
            .map(|i| {
                let label = (t.0 as usize) * PILOTS_PER_WAVE + i;
                let origin = *rng.choose(space.regions()).expect("airspace is non-empty");
                let mut dest = *rng.choose(space.regions()).expect("airspace is non-empty");
                while dest == origin {
                    dest = *rng.choose(space.regions()).expect("airspace is non-empty");
                }
                Box::new(Pilot::new(
                    label,
                    origin,
                    dest,
                    t + DEPARTURE_LEAD,
                    factory_reports.clone(),
                )) as Box<dyn Agent<GridCell>>
            })
            .collect()
    };

    // 3. Output: CSV trade log under output/gridmarket.
    std::fs::create_dir_all("output/gridmarket")?;
    let writer = CsvTradeWriter::new(Path::new("output/gridmarket"))?;
    let mut observer = ConsoleObserver::new(TradeLogObserver::new(writer));

    // 4. Run until every pilot has retired.
    let opts = SimulationOpts {
        time_window: Some(TIME_WINDOW),
        stop: StopCriteria::NoAgents,
    };
    let mut sim = Simulation::new(factory, airspace, SEED, opts);

    let t0 = Instant::now();
    sim.run(&mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks   : {}", observer.ticks);
    println!("  pilots  : {}", sim.agent_count());
    println!("  trades  : {} (see output/gridmarket/trades.csv)", observer.trades);
    println!();

    // 6. Per-pilot outcome table.
    println!("{:<8} {:<10} {:<6} {:>8} {:>8}", "Pilot", "Outcome", "Legs", "Spent", "Earned");
    println!("{}", "-".repeat(44));
    let mut reports = reports.borrow_mut();
    reports.sort_by_key(|r| r.label);
    for r in reports.iter() {
        println!(
            "{:<8} {:<10} {:<6} {:>8.2} {:>8.2}",
            r.label,
            if r.completed { "flown" } else { "scrubbed" },
            r.legs,
            r.spent,
            r.earned,
        );
    }

    Ok(())
}
