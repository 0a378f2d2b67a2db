//! Solution records returned to callers.

use serde::{Deserialize, Serialize};

use crate::encoding::routes_to_vector;
use crate::evaluation::{check_route, route_distance, total_delivery, total_pickup};
use crate::models::ProblemInstance;

/// Per-route diagnostics attached to a [`Solution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDiagnostics {
    /// Customer sequence (depot excluded).
    pub route: Vec<usize>,
    /// The same sequence with the depot at both ends.
    pub route_with_depot: Vec<usize>,
    /// Travel cost of this route.
    pub distance: f64,
    /// Whether the load profile stays within capacity.
    pub feasible: bool,
    /// Peak load along the route.
    pub max_load: i32,
    /// Load carried back to the depot.
    pub final_load: i32,
    /// Total amount delivered on this route.
    pub total_delivery: i32,
    /// Total amount picked up on this route.
    pub total_pickup: i32,
}

/// A complete solution: a partition of the customers into vehicle routes.
///
/// Produced by the construction and descent entrypoints and consumed by the
/// external report/request layers, which is why every field is plain data
/// and serializable. The final solution is an immutable snapshot; the
/// search never hands out intermediate states.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::models::{ProblemInstance, Solution};
///
/// let instance = ProblemInstance::from_rows(
///     vec![
///         vec![0.0, 9.0, 14.0],
///         vec![9.0, 0.0, 21.0],
///         vec![14.0, 21.0, 0.0],
///     ],
///     vec![0, 10, 20],
///     vec![0, 5, 0],
///     100,
///     1,
/// ).expect("valid instance");
///
/// let solution = Solution::from_routes(vec![vec![1, 2]], &instance);
/// assert_eq!(solution.flat_vector, vec![0, 1, 2, 0]);
/// assert_eq!(solution.total_cost, 9.0 + 21.0 + 14.0);
/// assert!(!solution.exceeds_vehicle_count);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Routes, each an ordered customer sequence (depot implicit).
    pub routes: Vec<Vec<usize>>,
    /// Flat depot-delimited encoding of `routes`.
    pub flat_vector: Vec<usize>,
    /// Sum of all route travel costs.
    pub total_cost: f64,
    /// Number of routes (vehicles used).
    pub num_routes: usize,
    /// Whether more routes were produced than vehicles are available.
    /// Informational: the caller decides policy.
    pub exceeds_vehicle_count: bool,
    /// Per-route load and cost diagnostics.
    pub route_diagnostics: Vec<RouteDiagnostics>,
    /// Wall-clock seconds spent producing this solution.
    pub computation_secs: f64,
}

impl Solution {
    /// Assembles a solution record from a route partition.
    ///
    /// Empty routes are dropped. Cost, encoding, diagnostics, and the
    /// fleet-overflow flag are computed from the instance;
    /// `computation_secs` starts at zero and is stamped by the entrypoints.
    pub fn from_routes(routes: Vec<Vec<usize>>, instance: &ProblemInstance) -> Self {
        let routes: Vec<Vec<usize>> = routes.into_iter().filter(|r| !r.is_empty()).collect();
        let flat_vector = routes_to_vector(&routes);

        let mut total_cost = 0.0;
        let mut route_diagnostics = Vec::with_capacity(routes.len());
        for route in &routes {
            let distance = route_distance(route, instance.cost());
            total_cost += distance;

            let profile = check_route(
                route,
                instance.capacity(),
                instance.delivery(),
                instance.pickup(),
            );
            let mut route_with_depot = Vec::with_capacity(route.len() + 2);
            route_with_depot.push(0);
            route_with_depot.extend_from_slice(route);
            route_with_depot.push(0);

            route_diagnostics.push(RouteDiagnostics {
                route: route.clone(),
                route_with_depot,
                distance,
                feasible: profile.feasible,
                max_load: profile.max_load,
                final_load: profile.final_load,
                total_delivery: total_delivery(route, instance.delivery()),
                total_pickup: total_pickup(route, instance.pickup()),
            });
        }

        let num_routes = routes.len();
        Solution {
            routes,
            flat_vector,
            total_cost,
            num_routes,
            exceeds_vehicle_count: num_routes > instance.num_vehicles(),
            route_diagnostics,
            computation_secs: 0.0,
        }
    }
}

/// A descent result: a [`Solution`] plus improvement bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovedSolution {
    /// The best solution found within the time budget.
    pub solution: Solution,
    /// Cost of the solution the descent started from.
    pub initial_cost: f64,
    /// `(initial - final) / initial × 100`, or 0 when the initial cost is 0.
    pub improvement_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProblemInstance {
        ProblemInstance::from_rows(
            vec![
                vec![0.0, 9.0, 14.0, 23.0],
                vec![9.0, 0.0, 21.0, 22.0],
                vec![14.0, 21.0, 0.0, 25.0],
                vec![23.0, 22.0, 25.0, 0.0],
            ],
            vec![0, 1200, 1700, 1500],
            vec![0, 0, 1200, 1700],
            6000,
            1,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_from_routes_cost_and_encoding() {
        let solution = Solution::from_routes(vec![vec![1], vec![2, 3]], &instance());
        assert_eq!(solution.num_routes, 2);
        assert_eq!(solution.flat_vector, vec![0, 1, 0, 2, 3, 0]);
        // 0→1→0 = 18; 0→2→3→0 = 14 + 25 + 23 = 62.
        assert_eq!(solution.total_cost, 80.0);
    }

    #[test]
    fn test_from_routes_drops_empty_routes() {
        let solution = Solution::from_routes(vec![vec![], vec![1, 2, 3]], &instance());
        assert_eq!(solution.num_routes, 1);
        assert_eq!(solution.routes, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_exceeds_vehicle_count_flag() {
        let solution = Solution::from_routes(vec![vec![1], vec![2], vec![3]], &instance());
        assert!(solution.exceeds_vehicle_count);

        let solution = Solution::from_routes(vec![vec![1, 2, 3]], &instance());
        assert!(!solution.exceeds_vehicle_count);
    }

    #[test]
    fn test_diagnostics_fields() {
        let solution = Solution::from_routes(vec![vec![2, 3]], &instance());
        let diag = &solution.route_diagnostics[0];
        assert_eq!(diag.route_with_depot, vec![0, 2, 3, 0]);
        assert_eq!(diag.distance, 62.0);
        assert!(diag.feasible);
        assert_eq!(diag.total_delivery, 3200);
        assert_eq!(diag.total_pickup, 2900);
        // Departs with 3200; after 2: 2700; after 3: 2900.
        assert_eq!(diag.max_load, 3200);
        assert_eq!(diag.final_load, 2900);
    }

    #[test]
    fn test_diagnostics_flag_infeasible_route() {
        let tight = ProblemInstance::from_rows(
            vec![
                vec![0.0, 9.0, 14.0],
                vec![9.0, 0.0, 21.0],
                vec![14.0, 21.0, 0.0],
            ],
            vec![0, 60, 60],
            vec![0, 0, 0],
            100,
            2,
        )
        .expect("valid instance");
        let solution = Solution::from_routes(vec![vec![1, 2]], &tight);
        assert!(!solution.route_diagnostics[0].feasible);
    }

    #[test]
    fn test_serializes() {
        let solution = Solution::from_routes(vec![vec![1, 2, 3]], &instance());
        let improved = ImprovedSolution {
            initial_cost: solution.total_cost,
            improvement_percent: 0.0,
            solution,
        };
        // The record must round-trip through serde for the report layer.
        let json = serde_json::to_string(&improved).expect("serializable");
        let back: ImprovedSolution = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, improved);
    }
}
