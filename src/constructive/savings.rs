//! Clarke-Wright savings construction for simultaneous pickup and delivery.
//!
//! # Algorithm
//!
//! Every customer starts on its own route (depot → customer → depot).
//! Merging the route ending at `i` with the route starting at `j` saves
//!
//! ```text
//! s(i, j) = c(0, i) + c(0, j) - c(i, j)
//! ```
//!
//! Pairs are processed in decreasing order of savings. A pair is merged only
//! when both customers sit at an endpoint of their (distinct) routes; the
//! four concatenation orientations are tried in a fixed precedence and the
//! first whose load profile fits the vehicle wins. Pickup amounts make the
//! orientation matter: a concatenation that overflows the hold forward can
//! be fine the other way around.
//!
//! By default the savings list is computed once and never re-scored after a
//! merge (a one-pass approximation: later merges may act on pairs whose
//! routes have since grown). [`SavingsConfig::rescore_after_merge`] instead
//! rebuilds the candidate list against the current route endpoints after
//! every accepted merge.
//!
//! # Complexity
//!
//! O(n² log n) for the one-pass variant (dominated by sorting savings);
//! the re-scoring variant pays that per merge.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::time::Instant;

use crate::evaluation::check_route;
use crate::models::{ProblemInstance, Solution};

/// Tuning knobs for the savings construction.
#[derive(Debug, Clone, Default)]
pub struct SavingsConfig {
    /// Rebuild the savings candidate list after every accepted merge
    /// instead of the default one-pass scan.
    pub rescore_after_merge: bool,
}

/// A savings value for merging two customers' routes.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Builds an initial solution with the default one-pass savings scan.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::constructive::solve_by_construction;
/// use vrpspd_solver::models::ProblemInstance;
///
/// let instance = ProblemInstance::from_rows(
///     vec![
///         vec![0.0, 9.0, 14.0, 23.0],
///         vec![9.0, 0.0, 21.0, 22.0],
///         vec![14.0, 21.0, 0.0, 25.0],
///         vec![23.0, 22.0, 25.0, 0.0],
///     ],
///     vec![0, 1200, 1700, 1500],
///     vec![0, 0, 1200, 1700],
///     6000,
///     1,
/// ).expect("valid instance");
///
/// let solution = solve_by_construction(&instance);
/// assert_eq!(solution.num_routes, 1);
/// assert_eq!(solution.total_cost, 70.0);
/// ```
pub fn solve_by_construction(instance: &ProblemInstance) -> Solution {
    solve_by_construction_with(instance, &SavingsConfig::default())
}

/// Builds an initial solution with explicit configuration.
pub fn solve_by_construction_with(instance: &ProblemInstance, config: &SavingsConfig) -> Solution {
    let started = Instant::now();
    let n = instance.cost().size();

    // Arena of routes keyed by stable slots: slot c initially holds the
    // singleton route of customer c, and `route_of` maps every customer to
    // its current slot. Merges write into one slot and tombstone the other,
    // so no index-ordered deletion is ever needed and customer lookup stays
    // O(1) throughout.
    let mut route_of = vec![0usize; n];
    let mut route_members: Vec<Vec<usize>> = vec![Vec::new(); n];
    for c in 1..n {
        route_of[c] = c;
        route_members[c].push(c);
    }

    let mut merges = 0usize;
    if config.rescore_after_merge {
        loop {
            let mut savings = endpoint_savings(instance, &route_of, &route_members);
            sort_descending(&mut savings);
            let merged = savings
                .iter()
                .any(|s| try_merge(instance, &mut route_of, &mut route_members, s.i, s.j));
            if !merged {
                break;
            }
            merges += 1;
        }
    } else {
        let mut savings = all_savings(instance);
        log::debug!(
            "savings construction: {} candidate pairs for {} customers",
            savings.len(),
            n - 1
        );
        sort_descending(&mut savings);
        for s in &savings {
            if try_merge(instance, &mut route_of, &mut route_members, s.i, s.j) {
                merges += 1;
            }
        }
    }

    let routes: Vec<Vec<usize>> = route_members.into_iter().filter(|r| !r.is_empty()).collect();
    let mut solution = Solution::from_routes(routes, instance);
    solution.computation_secs = started.elapsed().as_secs_f64();
    log::info!(
        "savings construction: {} routes, cost {:.2}, {} merges in {:.4}s",
        solution.num_routes,
        solution.total_cost,
        merges,
        solution.computation_secs
    );
    solution
}

/// Savings for every unordered customer pair i < j.
fn all_savings(instance: &ProblemInstance) -> Vec<Saving> {
    let cost = instance.cost();
    let n = cost.size();
    let mut savings = Vec::with_capacity((n.saturating_sub(1)) * (n.saturating_sub(2)) / 2);
    for i in 1..n {
        for j in (i + 1)..n {
            savings.push(Saving {
                i,
                j,
                value: cost.get(0, i) + cost.get(0, j) - cost.get(i, j),
            });
        }
    }
    savings
}

/// Savings restricted to pairs that are currently mergeable: both customers
/// at an endpoint of distinct routes. Used by the re-scoring variant.
fn endpoint_savings(
    instance: &ProblemInstance,
    route_of: &[usize],
    route_members: &[Vec<usize>],
) -> Vec<Saving> {
    let cost = instance.cost();
    let n = cost.size();
    let is_endpoint = |c: usize| {
        let members = &route_members[route_of[c]];
        members.first() == Some(&c) || members.last() == Some(&c)
    };
    let mut savings = Vec::new();
    for i in 1..n {
        if !is_endpoint(i) {
            continue;
        }
        for j in (i + 1)..n {
            if route_of[i] == route_of[j] || !is_endpoint(j) {
                continue;
            }
            savings.push(Saving {
                i,
                j,
                value: cost.get(0, i) + cost.get(0, j) - cost.get(i, j),
            });
        }
    }
    savings
}

fn sort_descending(savings: &mut [Saving]) {
    // Stable sort keeps generation order (lexicographic pairs) on ties.
    savings.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .expect("savings should not be NaN")
    });
}

/// Attempts to merge the routes of customers `i` and `j`.
///
/// Both customers must be endpoints of distinct routes. The four
/// concatenation orientations are tried in fixed precedence — tail(i)+head(j),
/// head(i)+tail(j), reversed(i)+j, i+reversed(j) — and the first orientation
/// with a feasible load profile is committed. Returns whether a merge
/// happened.
fn try_merge(
    instance: &ProblemInstance,
    route_of: &mut [usize],
    route_members: &mut [Vec<usize>],
    i: usize,
    j: usize,
) -> bool {
    let ri = route_of[i];
    let rj = route_of[j];
    if ri == rj {
        return false;
    }

    let a = &route_members[ri];
    let b = &route_members[rj];
    let i_head = a.first() == Some(&i);
    let i_tail = a.last() == Some(&i);
    let j_head = b.first() == Some(&j);
    let j_tail = b.last() == Some(&j);
    if !(i_head || i_tail) || !(j_head || j_tail) {
        return false;
    }

    let forward = |r: &[usize]| r.to_vec();
    let reversed = |r: &[usize]| r.iter().rev().copied().collect::<Vec<usize>>();

    let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(4);
    if i_tail && j_head {
        candidates.push([forward(a), forward(b)].concat());
    }
    if i_head && j_tail {
        candidates.push([forward(b), forward(a)].concat());
    }
    if i_head && j_head {
        candidates.push([reversed(a), forward(b)].concat());
    }
    if i_tail && j_tail {
        candidates.push([forward(a), reversed(b)].concat());
    }

    for merged in candidates {
        let profile = check_route(
            &merged,
            instance.capacity(),
            instance.delivery(),
            instance.pickup(),
        );
        if !profile.feasible {
            continue;
        }
        for &c in &merged {
            route_of[c] = ri;
        }
        route_members[ri] = merged;
        route_members[rj].clear();
        return true;
    }
    false
}
