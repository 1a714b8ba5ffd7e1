//! Default breadth-first metric and seeded shortest-path search.
//!
//! These back the default methods of [`Region`]; both are driven purely by
//! `Region::adjacent` and terminate only for finite reachable components.
//!
//! # Tie-breaking
//!
//! Minimum-hop paths are rarely unique on regular geometries.  The search
//! records *every* minimal-distance predecessor of each frontier region, then
//! reconstructs backwards choosing uniformly among them with an RNG rebuilt
//! from the caller's seed.  The same seed always yields the same path; two
//! seeds spread competing agents across the equal-cost alternatives instead
//! of funnelling them onto one congested corridor.

use std::collections::{HashMap, VecDeque};

use uat_core::AgentRng;

use crate::Region;

/// Minimum number of hops from `from` to `to`; `None` when unreachable.
pub fn hop_distance<R: Region>(from: &R, to: &R) -> Option<u64> {
    if from == to {
        return Some(0);
    }

    let mut dist: HashMap<R, u64> = HashMap::new();
    let mut queue: VecDeque<R> = VecDeque::new();
    dist.insert(from.clone(), 0);
    queue.push_back(from.clone());

    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        for next in cur.adjacent() {
            if next == *to {
                return Some(d + 1);
            }
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// A minimum-hop path from `from` to `to`, inclusive of both endpoints.
///
/// Ties between equal-length paths are broken by `seed`.  Returns an empty
/// vector when `to` is unreachable, and `[from]` when `from == to`.
pub fn shortest_path<R: Region>(from: &R, to: &R, seed: u64) -> Vec<R> {
    if from == to {
        return vec![from.clone()];
    }

    // Forward BFS recording all minimal-distance predecessors.  Queue order
    // is nondecreasing in distance, so once a dequeued region can no longer
    // contribute a predecessor at the target's depth the search is done.
    let mut dist: HashMap<R, u64> = HashMap::new();
    let mut parents: HashMap<R, Vec<R>> = HashMap::new();
    let mut queue: VecDeque<R> = VecDeque::new();
    dist.insert(from.clone(), 0);
    queue.push_back(from.clone());

    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        if let Some(&target_d) = dist.get(to) {
            if d + 1 > target_d {
                break;
            }
        }
        for next in cur.adjacent() {
            match dist.get(&next) {
                None => {
                    dist.insert(next.clone(), d + 1);
                    parents.entry(next.clone()).or_default().push(cur.clone());
                    queue.push_back(next);
                }
                Some(&nd) if nd == d + 1 => {
                    parents.entry(next).or_default().push(cur.clone());
                }
                Some(_) => {}
            }
        }
    }

    if !dist.contains_key(to) {
        return vec![];
    }

    // Backward reconstruction, one uniform choice per step.
    let mut rng = AgentRng::from_seed(seed);
    let mut path = vec![to.clone()];
    let mut cur = to.clone();
    while cur != *from {
        let candidates = &parents[&cur];
        cur = candidates[rng.gen_range(0..candidates.len())].clone();
        path.push(cur.clone());
    }
    path.reverse();
    path
}
