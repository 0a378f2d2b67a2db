//! Travel-cost objective.

use crate::cost::CostMatrix;
use crate::encoding::vector_to_routes;

/// Total travel cost of a route: `depot → r[0] → … → r[n-1] → depot`.
///
/// The depot is implicit at both ends; an empty route costs nothing.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::cost::CostMatrix;
/// use vrpspd_solver::evaluation::route_distance;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 9.0, 14.0],
///     vec![9.0, 0.0, 21.0],
///     vec![14.0, 21.0, 0.0],
/// ]).expect("square");
/// assert_eq!(route_distance(&[1, 2], &cm), 9.0 + 21.0 + 14.0);
/// ```
pub fn route_distance(route: &[usize], cost: &CostMatrix) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut distance = cost.get(0, route[0]);
    for w in route.windows(2) {
        distance += cost.get(w[0], w[1]);
    }
    distance += cost.get(route[route.len() - 1], 0);
    distance
}

/// Total travel cost of a flat-encoded solution.
///
/// Decodes the vector and sums the per-route distances.
pub fn vector_cost(vector: &[usize], cost: &CostMatrix) -> f64 {
    vector_to_routes(vector)
        .iter()
        .map(|route| route_distance(route, cost))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 9.0, 14.0, 23.0],
            vec![9.0, 0.0, 21.0, 22.0],
            vec![14.0, 21.0, 0.0, 25.0],
            vec![23.0, 22.0, 25.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_route_distance_empty() {
        assert_eq!(route_distance(&[], &matrix()), 0.0);
    }

    #[test]
    fn test_route_distance_single() {
        // 0→3→0 = 23 + 23
        assert_eq!(route_distance(&[3], &matrix()), 46.0);
    }

    #[test]
    fn test_route_distance_chain() {
        // 0→2→3→1→0 = 14 + 25 + 22 + 9
        assert_eq!(route_distance(&[2, 3, 1], &matrix()), 70.0);
    }

    #[test]
    fn test_route_distance_asymmetric() {
        let mut cm = CostMatrix::new(2);
        cm.set(0, 1, 10.0);
        cm.set(1, 0, 3.0);
        assert_eq!(route_distance(&[1], &cm), 13.0);
    }

    #[test]
    fn test_vector_cost_matches_route_sum() {
        let cm = matrix();
        let vector = [0, 1, 0, 2, 3, 0];
        let expected = route_distance(&[1], &cm) + route_distance(&[2, 3], &cm);
        assert_eq!(vector_cost(&vector, &cm), expected);
    }

    #[test]
    fn test_vector_cost_depot_only() {
        assert_eq!(vector_cost(&[0], &matrix()), 0.0);
    }
}
