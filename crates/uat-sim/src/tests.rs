//! Integration tests for uat-sim.

#[cfg(test)]
mod helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use uat_agent::Agent;
    use uat_book::{AskContext, BidContext, BookView};
    use uat_core::{AgentId, Tick, Value};
    use uat_space::{Airspace, Region};

    use crate::{SimObserver, TradeRecord};

    /// A featureless region — auction tests don't need geometry.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub struct Zone(pub u8);

    impl Region for Zone {
        fn adjacent(&self) -> Vec<Zone> {
            vec![]
        }
    }

    /// A three-zone airspace; most tests only touch `Zone(0)`.
    pub fn small_airspace() -> Airspace<Zone> {
        Airspace::from_regions(vec![Zone(0), Zone(1), Zone(2)])
    }

    /// Everything an agent or the driver did to a [`Script`] agent.
    #[derive(Clone, PartialEq, Debug)]
    pub enum Event {
        Bid { zone: Zone, t: Tick, amount: Value, accepted: bool },
        Ask { zone: Zone, t: Tick, floor: Value, accepted: bool },
        Bought { zone: Zone, t: Tick, price: Value },
        Sold { zone: Zone, t: Tick, price: Value },
        Finished { id: AgentId, t: Tick },
    }

    pub type Log = Rc<RefCell<Vec<(usize, Event)>>>;

    /// A fully scripted agent: place these bids/asks at these ticks, retire
    /// at `retire_at`.  Every action and callback is logged under `label`.
    pub struct Script {
        pub label: usize,
        /// `(tick to act, zone, permit tick, amount)`
        pub bids: Vec<(Tick, Zone, Tick, Value)>,
        pub asks: Vec<(Tick, Zone, Tick, Value)>,
        /// `stop(t)` returns `t >= retire_at`.
        pub retire_at: Tick,
        pub log: Log,
    }

    impl Script {
        fn record(&self, event: Event) {
            self.log.borrow_mut().push((self.label, event));
        }
    }

    impl Agent<Zone> for Script {
        fn bid_phase(&mut self, t: Tick, market: &mut BidContext<'_, Zone>, _seed: u64) {
            for &(when, zone, pt, amount) in &self.bids {
                if when == t {
                    let accepted = market.bid(&zone, pt, amount);
                    self.record(Event::Bid { zone, t: pt, amount, accepted });
                }
            }
        }

        fn ask_phase(&mut self, t: Tick, market: &mut AskContext<'_, Zone>, _seed: u64) {
            for &(when, zone, pt, floor) in &self.asks {
                if when == t {
                    let accepted = market.ask(&zone, pt, floor);
                    self.record(Event::Ask { zone, t: pt, floor, accepted });
                }
            }
        }

        fn on_bought(&mut self, region: &Zone, t: Tick, price: Value) {
            self.record(Event::Bought { zone: *region, t, price });
        }

        fn on_sold(&mut self, region: &Zone, t: Tick, price: Value) {
            self.record(Event::Sold { zone: *region, t, price });
        }

        fn on_finished(&mut self, id: AgentId, t: Tick) {
            self.record(Event::Finished { id, t });
        }

        fn stop(&mut self, t: Tick, _seed: u64) -> bool {
            t >= self.retire_at
        }
    }

    /// Records every observer callback for later assertions.
    #[derive(Default)]
    pub struct Recorder {
        pub trades: Vec<TradeRecord<Zone>>,
        pub statuses: Vec<Tick>,
        pub tick_actives: Vec<(Tick, usize)>,
        pub ended: Option<Tick>,
    }

    impl SimObserver<Zone> for Recorder {
        fn on_status(&mut self, t: Tick, _airspace: &Airspace<Zone>, _book: &BookView<'_, Zone>) {
            self.statuses.push(t);
        }

        fn on_trade(&mut self, trade: &TradeRecord<Zone>) {
            self.trades.push(trade.clone());
        }

        fn on_tick_end(&mut self, t: Tick, active: usize) {
            self.tick_actives.push((t, active));
        }

        fn on_sim_end(&mut self, final_tick: Tick) {
            self.ended = Some(final_tick);
        }
    }

    pub fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    /// Events logged for `label`, in order.
    pub fn events_for(log: &Log, label: usize) -> Vec<Event> {
        log.borrow()
            .iter()
            .filter(|(l, _)| *l == label)
            .map(|(_, e)| e.clone())
            .collect()
    }
}

// ── Stop criteria ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_tests {
    use uat_agent::Agent;
    use uat_core::Tick;

    use super::helpers::{small_airspace, Recorder, Zone};
    use crate::{simulate, SimulationOpts, StopCriteria};

    fn no_agents(_t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64) -> Vec<Box<dyn Agent<Zone>>> {
        vec![]
    }

    #[test]
    fn empty_run_executes_exactly_one_tick() {
        let mut recorder = Recorder::default();
        simulate(
            no_agents,
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );
        assert_eq!(recorder.statuses, vec![Tick(0)]);
        assert_eq!(recorder.tick_actives, vec![(Tick(0), 0)]);
        assert!(recorder.trades.is_empty());
        assert_eq!(recorder.ended, Some(Tick(1)));
    }

    #[test]
    fn time_threshold_runs_inclusive_range() {
        let mut recorder = Recorder::default();
        let opts = SimulationOpts {
            stop: StopCriteria::TimeThreshold { t_max: Tick(3) },
            ..Default::default()
        };
        simulate(no_agents, small_airspace(), 42, opts, &mut recorder);
        // Ticks 0, 1, 2, 3 all execute; the clock then reads 4.
        assert_eq!(recorder.statuses, vec![Tick(0), Tick(1), Tick(2), Tick(3)]);
        assert_eq!(recorder.ended, Some(Tick(4)));
    }
}

// ── Auction mechanics ─────────────────────────────────────────────────────────

#[cfg(test)]
mod auction_tests {
    use uat_agent::Agent;
    use uat_core::{AgentId, Tick};

    use super::helpers::{events_for, new_log, small_airspace, Event, Recorder, Script, Zone};
    use crate::{simulate, SimulationOpts};

    #[test]
    fn single_bidder_monopoly() {
        let log = new_log();
        let mut recorder = Recorder::default();

        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t == Tick(0) {
                    vec![Box::new(Script {
                        label: 0,
                        bids: vec![(Tick(0), Zone(0), Tick(0), 1.0)],
                        asks: vec![],
                        retire_at: Tick(1),
                        log: agent_log.clone(),
                    }) as Box<dyn Agent<Zone>>]
                } else {
                    vec![]
                }
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        assert_eq!(recorder.trades.len(), 1);
        let trade = &recorder.trades[0];
        assert_eq!(trade.t, Tick(0));
        assert_eq!(trade.seller, None);
        assert_eq!(trade.buyer, AgentId(0));
        assert_eq!(trade.region, Zone(0));
        assert_eq!(trade.permit_time, Tick(0));
        assert_eq!(trade.price, 1.0);

        let events = events_for(&log, 0);
        assert!(events.contains(&Event::Bid {
            zone: Zone(0),
            t: Tick(0),
            amount: 1.0,
            accepted: true
        }));
        assert!(events.contains(&Event::Bought { zone: Zone(0), t: Tick(0), price: 1.0 }));
        assert!(events.contains(&Event::Finished { id: AgentId(0), t: Tick(1) }));
        // Active through tick 0, retired during tick 1.
        assert_eq!(recorder.tick_actives, vec![(Tick(0), 1), (Tick(1), 0)]);
    }

    #[test]
    fn contest_goes_to_last_improving_bid() {
        let log = new_log();
        let mut recorder = Recorder::default();

        // A raises its own bid to 5 within its phase; B's 4 then fails to
        // improve.  One trade: A wins at 5, B hears nothing.
        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t != Tick(0) {
                    return vec![];
                }
                vec![
                    Box::new(Script {
                        label: 0,
                        bids: vec![
                            (Tick(0), Zone(0), Tick(5), 3.0),
                            (Tick(0), Zone(0), Tick(5), 5.0),
                        ],
                        asks: vec![],
                        retire_at: Tick(0),
                        log: agent_log.clone(),
                    }) as Box<dyn Agent<Zone>>,
                    Box::new(Script {
                        label: 1,
                        bids: vec![(Tick(0), Zone(0), Tick(5), 4.0)],
                        asks: vec![],
                        retire_at: Tick(0),
                        log: agent_log.clone(),
                    }),
                ]
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        assert_eq!(recorder.trades.len(), 1);
        assert_eq!(recorder.trades[0].buyer, AgentId(0));
        assert_eq!(recorder.trades[0].price, 5.0);
        assert_eq!(recorder.trades[0].seller, None);

        let a_events = events_for(&log, 0);
        assert!(a_events.contains(&Event::Bought { zone: Zone(0), t: Tick(5), price: 5.0 }));

        let b_events = events_for(&log, 1);
        assert_eq!(
            b_events,
            vec![
                Event::Bid { zone: Zone(0), t: Tick(5), amount: 4.0, accepted: false },
                Event::Finished { id: AgentId(1), t: Tick(0) },
            ],
            "the losing bidder gets no trade callback"
        );
    }

    #[test]
    fn resolution_follows_first_touch_order() {
        let log = new_log();
        let mut recorder = Recorder::default();

        // A touches Zone(2) then Zone(1); B re-bids Zone(1) (already
        // contested) and then touches Zone(0).  Resolution order must be
        // first-touch: Zone(2), Zone(1), Zone(0).
        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t != Tick(0) {
                    return vec![];
                }
                vec![
                    Box::new(Script {
                        label: 0,
                        bids: vec![
                            (Tick(0), Zone(2), Tick(0), 1.0),
                            (Tick(0), Zone(1), Tick(0), 1.0),
                        ],
                        asks: vec![],
                        retire_at: Tick(0),
                        log: agent_log.clone(),
                    }) as Box<dyn Agent<Zone>>,
                    Box::new(Script {
                        label: 1,
                        bids: vec![
                            (Tick(0), Zone(1), Tick(0), 5.0),
                            (Tick(0), Zone(0), Tick(0), 2.0),
                        ],
                        asks: vec![],
                        retire_at: Tick(0),
                        log: agent_log.clone(),
                    }),
                ]
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        let order: Vec<Zone> = recorder.trades.iter().map(|tr| tr.region).collect();
        assert_eq!(order, vec![Zone(2), Zone(1), Zone(0)]);
        let buyers: Vec<_> = recorder.trades.iter().map(|tr| tr.buyer).collect();
        assert_eq!(buyers, vec![AgentId(0), AgentId(1), AgentId(1)]);
        let prices: Vec<_> = recorder.trades.iter().map(|tr| tr.price).collect();
        assert_eq!(prices, vec![1.0, 5.0, 2.0]);
    }

    #[test]
    fn won_permit_is_listable_in_the_same_tick() {
        let log = new_log();
        let mut recorder = Recorder::default();

        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t == Tick(0) {
                    vec![Box::new(Script {
                        label: 0,
                        bids: vec![(Tick(0), Zone(0), Tick(1), 1.0)],
                        asks: vec![(Tick(0), Zone(0), Tick(1), 2.0)],
                        retire_at: Tick(0),
                        log: agent_log.clone(),
                    }) as Box<dyn Agent<Zone>>]
                } else {
                    vec![]
                }
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        let events = events_for(&log, 0);
        assert!(
            events.contains(&Event::Ask { zone: Zone(0), t: Tick(1), floor: 2.0, accepted: true }),
            "the permit is Used by the time the ask phase begins: {events:?}"
        );
    }
}

// ── Resale ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resale_tests {
    use uat_agent::Agent;
    use uat_core::{AgentId, Tick};

    use super::helpers::{events_for, new_log, small_airspace, Event, Recorder, Script, Zone};
    use crate::{simulate, SimulationOpts};

    fn run_resale(second_bid: f64) -> (Recorder, super::helpers::Log) {
        let log = new_log();
        let mut recorder = Recorder::default();

        // Tick 0: A buys (Zone 0, t=1) for 1 and immediately re-lists at 2.
        // Tick 1: B onboards and bids `second_bid` on the listing.
        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| match t {
                Tick(0) => vec![Box::new(Script {
                    label: 0,
                    bids: vec![(Tick(0), Zone(0), Tick(1), 1.0)],
                    asks: vec![(Tick(0), Zone(0), Tick(1), 2.0)],
                    retire_at: Tick(2),
                    log: agent_log.clone(),
                }) as Box<dyn Agent<Zone>>],
                Tick(1) => vec![Box::new(Script {
                    label: 1,
                    bids: vec![(Tick(1), Zone(0), Tick(1), second_bid)],
                    asks: vec![],
                    retire_at: Tick(1),
                    log: agent_log.clone(),
                }) as Box<dyn Agent<Zone>>],
                _ => vec![],
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );
        (recorder, log)
    }

    #[test]
    fn resale_transfers_ownership_and_notifies_both_sides() {
        let (recorder, log) = run_resale(3.0);

        assert_eq!(recorder.trades.len(), 2);
        let resale = &recorder.trades[1];
        assert_eq!(resale.t, Tick(1));
        assert_eq!(resale.seller, Some(AgentId(0)));
        assert_eq!(resale.buyer, AgentId(1));
        assert_eq!(resale.price, 3.0);
        assert_eq!(resale.permit_time, Tick(1));

        let a_events = events_for(&log, 0);
        assert!(a_events.contains(&Event::Sold { zone: Zone(0), t: Tick(1), price: 3.0 }));
        let b_events = events_for(&log, 1);
        assert!(b_events.contains(&Event::Bought { zone: Zone(0), t: Tick(1), price: 3.0 }));
    }

    #[test]
    fn bid_at_the_listing_floor_is_rejected() {
        let (recorder, log) = run_resale(2.0);
        // Only the first-issuance trade happened.
        assert_eq!(recorder.trades.len(), 1);
        let b_events = events_for(&log, 1);
        assert!(b_events.contains(&Event::Bid {
            zone: Zone(0),
            t: Tick(1),
            amount: 2.0,
            accepted: false
        }));
    }
}

// ── Time window ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod window_tests {
    use uat_agent::Agent;
    use uat_book::PermitState;
    use uat_core::Tick;

    use super::helpers::{events_for, new_log, small_airspace, Event, Recorder, Script, Zone};
    use crate::{NoopObserver, Simulation, SimulationOpts, StopCriteria};

    #[test]
    fn writes_beyond_the_window_are_discarded() {
        let log = new_log();

        // Window of 2: at tick 0 only ticks 0..=2 are live.  The bid at
        // t=5 must fail; the bid at t=2 must succeed.
        let agent_log = log.clone();
        let factory = move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| match t {
            Tick(0) => vec![Box::new(Script {
                label: 0,
                bids: vec![
                    (Tick(0), Zone(0), Tick(5), 7.0),
                    (Tick(0), Zone(0), Tick(2), 1.0),
                ],
                asks: vec![],
                retire_at: Tick(0),
                log: agent_log.clone(),
            }) as Box<dyn Agent<Zone>>],
            Tick(3) => vec![Box::new(Script {
                label: 1,
                bids: vec![(Tick(3), Zone(0), Tick(5), 1.0)],
                asks: vec![],
                retire_at: Tick(3),
                log: agent_log.clone(),
            }) as Box<dyn Agent<Zone>>],
            _ => vec![],
        };

        let opts = SimulationOpts {
            time_window: Some(2),
            stop: StopCriteria::TimeThreshold { t_max: Tick(3) },
        };
        let mut sim = Simulation::new(factory, small_airspace(), 42, opts);
        let mut recorder = Recorder::default();

        // Run ticks 0–2 and stop at the tick-3 boundary.
        for _ in 0..3 {
            sim.step(&mut recorder);
        }
        assert_eq!(sim.current_tick(), Tick(3));

        let events = events_for(&log, 0);
        assert_eq!(
            events[0],
            Event::Bid { zone: Zone(0), t: Tick(5), amount: 7.0, accepted: false },
            "bid beyond the window must be rejected"
        );
        assert_eq!(
            events[1],
            Event::Bid { zone: Zone(0), t: Tick(2), amount: 1.0, accepted: true }
        );

        // The discarded write left no trace: now that t=5 slid into the
        // window it reads as a fresh first-issuance listing.
        assert!(!sim.view().has_entry(&Zone(0), Tick(5)));
        assert_eq!(sim.view().status(&Zone(0), Tick(5)), PermitState::default());

        // ...so a floor bid of 1 now succeeds.
        sim.step(&mut recorder);
        let late_events = events_for(&log, 1);
        assert_eq!(
            late_events[0],
            Event::Bid { zone: Zone(0), t: Tick(5), amount: 1.0, accepted: true }
        );
        let last_trade = recorder.trades.last().expect("the late bid resolves");
        assert_eq!(last_trade.t, Tick(3));
        assert_eq!(last_trade.permit_time, Tick(5));
        assert_eq!(last_trade.seller, None);
        assert_eq!(last_trade.price, 1.0);
    }

    #[test]
    fn expired_permits_leave_the_book() {
        let log = new_log();
        let agent_log = log.clone();
        let factory = move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
            if t == Tick(0) {
                vec![Box::new(Script {
                    label: 0,
                    bids: vec![(Tick(0), Zone(0), Tick(0), 1.0)],
                    asks: vec![],
                    retire_at: Tick(0),
                    log: agent_log.clone(),
                }) as Box<dyn Agent<Zone>>]
            } else {
                vec![]
            }
        };

        let mut sim = Simulation::new(factory, small_airspace(), 42, SimulationOpts::default());
        sim.step(&mut NoopObserver);

        // The tick-0 permit was bought, then its bucket was dropped.
        assert_eq!(sim.current_tick(), Tick(1));
        assert!(!sim.view().has_entry(&Zone(0), Tick(0)));
    }
}

// ── Agent lifecycle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use uat_agent::Agent;
    use uat_book::{AskContext, BidContext};
    use uat_core::{AgentId, Tick};

    use super::helpers::{events_for, new_log, small_airspace, Event, Recorder, Script, Zone};
    use crate::{simulate, SimulationOpts};

    #[test]
    fn ids_are_dense_and_monotone_in_onboarding_order() {
        // Agents report the id their bid capability carries.
        struct IdReporter {
            seen: Rc<RefCell<Vec<(Tick, AgentId)>>>,
            reported: bool,
        }
        impl Agent<Zone> for IdReporter {
            fn bid_phase(&mut self, t: Tick, market: &mut BidContext<'_, Zone>, _seed: u64) {
                if !self.reported {
                    self.seen.borrow_mut().push((t, market.agent()));
                    self.reported = true;
                }
            }
            fn ask_phase(&mut self, _: Tick, _: &mut AskContext<'_, Zone>, _: u64) {}
            fn stop(&mut self, _: Tick, _: u64) -> bool {
                true
            }
        }

        let seen: Rc<RefCell<Vec<(Tick, AgentId)>>> = Rc::new(RefCell::new(Vec::new()));
        let mut recorder = Recorder::default();

        let seen_factory = seen.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                let spawn = |n: usize| {
                    (0..n)
                        .map(|_| {
                            Box::new(IdReporter { seen: seen_factory.clone(), reported: false })
                                as Box<dyn Agent<Zone>>
                        })
                        .collect::<Vec<_>>()
                };
                match t {
                    Tick(0) => spawn(2),
                    Tick(1) => spawn(1),
                    _ => vec![],
                }
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        assert_eq!(
            *seen.borrow(),
            vec![
                (Tick(0), AgentId(0)),
                (Tick(0), AgentId(1)),
                (Tick(1), AgentId(2)),
            ]
        );
    }

    #[test]
    fn on_finished_fires_once_at_the_retirement_tick() {
        let log = new_log();
        let mut recorder = Recorder::default();

        let agent_log = log.clone();
        simulate(
            move |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t == Tick(0) {
                    vec![Box::new(Script {
                        label: 0,
                        bids: vec![],
                        asks: vec![],
                        retire_at: Tick(2),
                        log: agent_log.clone(),
                    }) as Box<dyn Agent<Zone>>]
                } else {
                    vec![]
                }
            },
            small_airspace(),
            42,
            SimulationOpts::default(),
            &mut recorder,
        );

        let finishes: Vec<_> = events_for(&log, 0)
            .into_iter()
            .filter(|e| matches!(e, Event::Finished { .. }))
            .collect();
        assert_eq!(finishes, vec![Event::Finished { id: AgentId(0), t: Tick(2) }]);
        // Active through ticks 0 and 1, gone at the end of tick 2.
        assert_eq!(
            recorder.tick_actives,
            vec![(Tick(0), 1), (Tick(1), 1), (Tick(2), 0)]
        );
        assert_eq!(recorder.ended, Some(Tick(3)));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use uat_agent::Agent;
    use uat_book::{AskContext, BidContext};
    use uat_core::{AgentRng, Tick};

    use super::helpers::{small_airspace, Recorder, Zone};
    use crate::{simulate, SimulationOpts, StopCriteria, TradeRecord};

    /// Bids a random amount on a random zone each tick, driven entirely by
    /// the per-call seed.
    struct Gambler;

    impl Agent<Zone> for Gambler {
        fn bid_phase(&mut self, t: Tick, market: &mut BidContext<'_, Zone>, seed: u64) {
            let mut rng = AgentRng::from_seed(seed);
            let zone = Zone(rng.gen_range(0..2u8));
            let amount = rng.gen_range(1.0..10.0);
            let lookahead = rng.gen_range(0..3u64);
            market.bid(&zone, t + lookahead, amount);
        }

        fn ask_phase(&mut self, t: Tick, market: &mut AskContext<'_, Zone>, seed: u64) {
            let mut rng = AgentRng::from_seed(seed);
            if rng.gen_bool(0.5) {
                market.ask(&Zone(rng.gen_range(0..2u8)), t, rng.gen_range(1.0..5.0));
            }
        }

        fn stop(&mut self, _t: Tick, _seed: u64) -> bool {
            false
        }
    }

    fn run_once(seed: u64) -> Vec<TradeRecord<Zone>> {
        let mut recorder = Recorder::default();
        simulate(
            |t: Tick, _space: &uat_space::Airspace<Zone>, _seed: u64| {
                if t == Tick(0) {
                    (0..4)
                        .map(|_| Box::new(Gambler) as Box<dyn Agent<Zone>>)
                        .collect()
                } else {
                    vec![]
                }
            },
            small_airspace(),
            seed,
            SimulationOpts {
                time_window: Some(4),
                stop: StopCriteria::TimeThreshold { t_max: Tick(9) },
            },
            &mut recorder,
        );
        recorder.trades
    }

    #[test]
    fn identical_seeds_produce_identical_trade_sequences() {
        let first = run_once(1234);
        let second = run_once(1234);
        assert!(!first.is_empty(), "the gamblers should trade at least once");
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        // Not guaranteed in principle, but overwhelmingly likely with
        // float-valued random bids; a collision here means the seed is
        // being ignored somewhere.
        assert_ne!(run_once(1), run_once(2));
    }
}
