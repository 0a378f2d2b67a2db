//! Two-level variable neighborhood descent.
//!
//! # Algorithm
//!
//! The descent runs two nested loops over ordered neighborhood lists,
//! restarting at the first neighborhood whenever a move is accepted and
//! terminating when none improves.
//!
//! **Intra level** (per route): `[swap, relocate, block insertion, 2-opt]`,
//! first-improvement — the first strictly cheaper, strictly feasible
//! candidate in enumeration order is adopted and the neighborhood index
//! resets.
//!
//! **Inter level** (whole solution): `[swap(1,1), shift(1,0), shift(2,0),
//! swap(2,1), swap(2,2)]`, best-improvement — every candidate in the
//! current neighborhood is decoded, repaired by reversal where needed,
//! re-optimized by the configured [`Intensifier`], and costed; the cheapest
//! strict improvement commits.
//!
//! A wall-clock budget bounds the whole search. The deadline is checked at
//! the top of every outer iteration and on every candidate, so enumeration
//! aborts promptly; running out of time returns the best solution found so
//! far, never an error.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

mod intensify;

pub use intensify::{Intensifier, IntraVnd, NoIntensification};

use std::time::Instant;

use crate::encoding::{routes_to_vector, vector_to_routes};
use crate::evaluation::{check_route_strict, repair_routes, route_distance, vector_cost};
use crate::local_search::{
    block_insertion, relocate, shift_one_zero, shift_two_zero, swap, swap_one_one, swap_two_one,
    swap_two_two, two_opt,
};
use crate::models::{ImprovedSolution, ProblemInstance, Solution};

const NUM_INTRA_NEIGHBORHOODS: usize = 4;
const NUM_INTER_NEIGHBORHOODS: usize = 5;

/// Improves a solution within a wall-clock budget, using full intra-route
/// re-optimization on every candidate.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::constructive::solve_by_construction;
/// use vrpspd_solver::descent::solve_by_descent;
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
/// let initial = solve_by_construction(&instance);
/// let improved = solve_by_descent(&initial, &instance, 5.0);
/// assert!(improved.solution.total_cost <= improved.initial_cost);
/// ```
pub fn solve_by_descent(
    initial: &Solution,
    instance: &ProblemInstance,
    time_budget_secs: f64,
) -> ImprovedSolution {
    solve_by_descent_vector_with(&initial.flat_vector, instance, time_budget_secs, &IntraVnd)
}

/// Improves a flat-encoded solution within a wall-clock budget.
pub fn solve_by_descent_vector(
    initial_vector: &[usize],
    instance: &ProblemInstance,
    time_budget_secs: f64,
) -> ImprovedSolution {
    solve_by_descent_vector_with(initial_vector, instance, time_budget_secs, &IntraVnd)
}

/// Improves a solution with an explicit intensification strategy.
pub fn solve_by_descent_with(
    initial: &Solution,
    instance: &ProblemInstance,
    time_budget_secs: f64,
    intensifier: &dyn Intensifier,
) -> ImprovedSolution {
    solve_by_descent_vector_with(&initial.flat_vector, instance, time_budget_secs, intensifier)
}

/// Improves a flat-encoded solution with an explicit intensification
/// strategy. All other descent entrypoints funnel here.
pub fn solve_by_descent_vector_with(
    initial_vector: &[usize],
    instance: &ProblemInstance,
    time_budget_secs: f64,
    intensifier: &dyn Intensifier,
) -> ImprovedSolution {
    let started = Instant::now();
    let initial_cost = vector_cost(initial_vector, instance.cost());

    let mut current = initial_vector.to_vec();
    let mut current_cost = initial_cost;
    let mut best = current.clone();
    let mut best_cost = current_cost;

    if started.elapsed().as_secs_f64() < time_budget_secs {
        // Intra pass on the starting point, then the inter-route loop.
        let intensified = intensifier.intensify(&current, instance);
        let intensified_cost = vector_cost(&intensified, instance.cost());
        if intensified_cost < current_cost {
            current = intensified;
            current_cost = intensified_cost;
            best = current.clone();
            best_cost = current_cost;
        }

        let mut k = 0;
        while k < NUM_INTER_NEIGHBORHOODS && started.elapsed().as_secs_f64() < time_budget_secs {
            match best_in_neighborhood(
                &current,
                current_cost,
                k,
                instance,
                intensifier,
                &started,
                time_budget_secs,
            ) {
                Some((candidate, cost)) => {
                    log::debug!("neighborhood {k} improved cost {current_cost:.2} -> {cost:.2}");
                    current = candidate;
                    current_cost = cost;
                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                    k = 0;
                }
                None => k += 1,
            }
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    let mut solution = Solution::from_routes(vector_to_routes(&best), instance);
    solution.computation_secs = elapsed;
    let improvement_percent = if initial_cost > 0.0 {
        (initial_cost - solution.total_cost) / initial_cost * 100.0
    } else {
        0.0
    };
    log::info!(
        "descent: cost {:.2} -> {:.2} ({:.2}% in {:.4}s)",
        initial_cost,
        solution.total_cost,
        improvement_percent,
        elapsed
    );
    ImprovedSolution {
        solution,
        initial_cost,
        improvement_percent,
    }
}

/// Runs the intra-route descent on every route of a flat-encoded solution.
///
/// Each route is treated independently: neighborhoods `[swap, relocate,
/// block insertion, 2-opt]` in first-improvement order, candidates gated by
/// the strict load validator and a strict cost decrease. Idempotent on
/// locally optimal routes.
pub fn intra_route_descent(vector: &[usize], instance: &ProblemInstance) -> Vec<usize> {
    let improved: Vec<Vec<usize>> = vector_to_routes(vector)
        .into_iter()
        .map(|route| descend_route(route, instance))
        .collect();
    routes_to_vector(&improved)
}

fn descend_route(route: Vec<usize>, instance: &ProblemInstance) -> Vec<usize> {
    if route.len() <= 1 {
        return route;
    }
    let mut best = route;
    let mut best_cost = route_distance(&best, instance.cost());
    let mut k = 0;
    while k < NUM_INTRA_NEIGHBORHOODS {
        match first_improvement(&best, best_cost, k, instance) {
            Some((candidate, cost)) => {
                best = candidate;
                best_cost = cost;
                k = 0;
            }
            None => k += 1,
        }
    }
    best
}

/// First strictly cheaper, strictly feasible candidate of intra
/// neighborhood `k`, in fixed enumeration order.
fn first_improvement(
    route: &[usize],
    route_cost: f64,
    k: usize,
    instance: &ProblemInstance,
) -> Option<(Vec<usize>, f64)> {
    let len = route.len();
    match k {
        0 => {
            for i in 0..len {
                for j in (i + 1)..len {
                    if let Some(hit) = accept_intra(swap(route, i, j), route_cost, instance) {
                        return Some(hit);
                    }
                }
            }
        }
        1 => {
            for i in 0..len {
                for j in 0..=len {
                    if let Some(hit) = accept_intra(relocate(route, i, j), route_cost, instance) {
                        return Some(hit);
                    }
                }
            }
        }
        2 if len >= 3 => {
            for i in 0..len - 1 {
                for j in 0..len - 1 {
                    if let Some(hit) =
                        accept_intra(block_insertion(route, i, j), route_cost, instance)
                    {
                        return Some(hit);
                    }
                }
            }
        }
        3 if len >= 3 => {
            for i in 0..len - 1 {
                for j in (i + 2)..len {
                    if let Some(hit) = accept_intra(two_opt(route, i, j), route_cost, instance) {
                        return Some(hit);
                    }
                }
            }
        }
        _ => {}
    }
    None
}

fn accept_intra(
    candidate: Option<Vec<usize>>,
    current_cost: f64,
    instance: &ProblemInstance,
) -> Option<(Vec<usize>, f64)> {
    let candidate = candidate?;
    if !check_route_strict(
        &candidate,
        instance.capacity(),
        instance.delivery(),
        instance.pickup(),
    ) {
        return None;
    }
    let cost = route_distance(&candidate, instance.cost());
    if cost < current_cost {
        Some((candidate, cost))
    } else {
        None
    }
}

/// Tracks the cheapest repaired-and-intensified candidate of one inter
/// neighborhood, watching the deadline as it goes.
struct CandidateScan<'a> {
    instance: &'a ProblemInstance,
    intensifier: &'a dyn Intensifier,
    started: &'a Instant,
    time_budget_secs: f64,
    threshold: f64,
    best: Option<(Vec<usize>, f64)>,
}

impl CandidateScan<'_> {
    /// Evaluates one candidate. Returns `false` once the deadline has
    /// passed, telling the enumeration to stop where it stands; the best
    /// candidate found so far is still committed.
    fn offer(&mut self, candidate: Option<Vec<usize>>) -> bool {
        if self.started.elapsed().as_secs_f64() > self.time_budget_secs {
            return false;
        }
        let Some(candidate) = candidate else {
            return true;
        };
        let routes = vector_to_routes(&candidate);
        let Some(repaired) = repair_routes(
            &routes,
            self.instance.capacity(),
            self.instance.delivery(),
            self.instance.pickup(),
        ) else {
            return true;
        };
        let intensified = self
            .intensifier
            .intensify(&routes_to_vector(&repaired), self.instance);
        let cost = vector_cost(&intensified, self.instance.cost());
        if cost < self.threshold {
            self.threshold = cost;
            self.best = Some((intensified, cost));
        }
        true
    }
}

/// Exhaustively enumerates inter neighborhood `k` around `current` and
/// returns its best strict improvement, if any.
#[allow(clippy::too_many_arguments)]
fn best_in_neighborhood(
    current: &[usize],
    current_cost: f64,
    k: usize,
    instance: &ProblemInstance,
    intensifier: &dyn Intensifier,
    started: &Instant,
    time_budget_secs: f64,
) -> Option<(Vec<usize>, f64)> {
    let routes = vector_to_routes(current);
    let num = routes.len();
    let mut scan = CandidateScan {
        instance,
        intensifier,
        started,
        time_budget_secs,
        threshold: current_cost,
        best: None,
    };

    match k {
        0 => {
            'k0: for ra in 0..num {
                for rb in (ra + 1)..num {
                    for i in 0..routes[ra].len() {
                        for j in 0..routes[rb].len() {
                            if !scan.offer(swap_one_one(current, ra, rb, i, j)) {
                                break 'k0;
                            }
                        }
                    }
                }
            }
        }
        1 => {
            'k1: for from in 0..num {
                for to in 0..num {
                    if from == to {
                        continue;
                    }
                    for i in 0..routes[from].len() {
                        for j in 0..=routes[to].len() {
                            if !scan.offer(shift_one_zero(current, from, to, i, j)) {
                                break 'k1;
                            }
                        }
                    }
                }
            }
        }
        2 => {
            'k2: for from in 0..num {
                if routes[from].len() < 2 {
                    continue;
                }
                for to in 0..num {
                    if from == to {
                        continue;
                    }
                    for i in 0..routes[from].len() - 1 {
                        for j in 0..=routes[to].len() {
                            if !scan.offer(shift_two_zero(current, from, to, i, j)) {
                                break 'k2;
                            }
                        }
                    }
                }
            }
        }
        3 => {
            'k3: for ra in 0..num {
                if routes[ra].len() < 2 {
                    continue;
                }
                for rb in 0..num {
                    if ra == rb {
                        continue;
                    }
                    for i in 0..routes[ra].len() - 1 {
                        for j in 0..routes[rb].len() {
                            if !scan.offer(swap_two_one(current, ra, rb, i, j)) {
                                break 'k3;
                            }
                        }
                    }
                }
            }
        }
        4 => {
            'k4: for ra in 0..num {
                if routes[ra].len() < 2 {
                    continue;
                }
                for rb in (ra + 1)..num {
                    if routes[rb].len() < 2 {
                        continue;
                    }
                    for i in 0..routes[ra].len() - 1 {
                        for j in 0..routes[rb].len() - 1 {
                            if !scan.offer(swap_two_two(current, ra, rb, i, j)) {
                                break 'k4;
                            }
                        }
                    }
                }
            }
        }
        _ => {}
    }
    scan.best
}
