//! Inter-route move operators on the flat solution encoding.
//!
//! Each operator decodes the depot-delimited vector, moves customers
//! between two distinct routes, and re-encodes. `None` signals an
//! out-of-range index, identical source and target routes, or a route too
//! short for the requested block — never an error. A source route emptied
//! by a shift is dropped from the solution (the encoder skips it).

use crate::encoding::{routes_to_vector, vector_to_routes};

/// Swap(1,1): exchanges single customers across two distinct routes.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::local_search::swap_one_one;
///
/// let v = swap_one_one(&[0, 1, 2, 0, 3, 4, 0], 0, 1, 0, 1);
/// assert_eq!(v, Some(vec![0, 4, 2, 0, 3, 1, 0]));
/// ```
pub fn swap_one_one(
    vector: &[usize],
    route_a: usize,
    route_b: usize,
    pos_a: usize,
    pos_b: usize,
) -> Option<Vec<usize>> {
    let mut routes = vector_to_routes(vector);
    if route_a == route_b || route_a >= routes.len() || route_b >= routes.len() {
        return None;
    }
    if pos_a >= routes[route_a].len() || pos_b >= routes[route_b].len() {
        return None;
    }
    let held = routes[route_a][pos_a];
    routes[route_a][pos_a] = routes[route_b][pos_b];
    routes[route_b][pos_b] = held;
    Some(routes_to_vector(&routes))
}

/// Shift(1,0): moves one customer from `from` into `to` at `insert_at`.
///
/// A source route left empty is dropped from the solution.
pub fn shift_one_zero(
    vector: &[usize],
    from: usize,
    to: usize,
    pos: usize,
    insert_at: usize,
) -> Option<Vec<usize>> {
    let mut routes = vector_to_routes(vector);
    if from == to || from >= routes.len() || to >= routes.len() {
        return None;
    }
    if pos >= routes[from].len() || insert_at > routes[to].len() {
        return None;
    }
    let customer = routes[from].remove(pos);
    routes[to].insert(insert_at, customer);
    Some(routes_to_vector(&routes))
}

/// Shift(2,0): moves the two-customer block starting at `block_start` from
/// `from` into `to` at `insert_at`.
///
/// A source route left empty is dropped from the solution.
pub fn shift_two_zero(
    vector: &[usize],
    from: usize,
    to: usize,
    block_start: usize,
    insert_at: usize,
) -> Option<Vec<usize>> {
    let mut routes = vector_to_routes(vector);
    if from == to || from >= routes.len() || to >= routes.len() {
        return None;
    }
    if routes[from].len() < 2 || block_start + 1 >= routes[from].len() {
        return None;
    }
    if insert_at > routes[to].len() {
        return None;
    }
    let block: Vec<usize> = routes[from].drain(block_start..block_start + 2).collect();
    for (k, &customer) in block.iter().enumerate() {
        routes[to].insert(insert_at + k, customer);
    }
    Some(routes_to_vector(&routes))
}

/// Swap(2,1): exchanges the two-customer block at `block_start` in route
/// `route_a` with the single customer at `pos_b` in route `route_b`.
pub fn swap_two_one(
    vector: &[usize],
    route_a: usize,
    route_b: usize,
    block_start: usize,
    pos_b: usize,
) -> Option<Vec<usize>> {
    let mut routes = vector_to_routes(vector);
    if route_a == route_b || route_a >= routes.len() || route_b >= routes.len() {
        return None;
    }
    if routes[route_a].len() < 2 || block_start + 1 >= routes[route_a].len() {
        return None;
    }
    if pos_b >= routes[route_b].len() {
        return None;
    }
    let single = routes[route_b][pos_b];
    let block: Vec<usize> = routes[route_a].drain(block_start..block_start + 2).collect();
    routes[route_a].insert(block_start, single);
    routes[route_b].remove(pos_b);
    for (k, &customer) in block.iter().enumerate() {
        routes[route_b].insert(pos_b + k, customer);
    }
    Some(routes_to_vector(&routes))
}

/// Swap(2,2): exchanges the two-customer blocks starting at `start_a` in
/// `route_a` and `start_b` in `route_b`.
///
/// The exchange is symmetric: both routes give up exactly two customers and
/// receive exactly two back, so route lengths are preserved.
pub fn swap_two_two(
    vector: &[usize],
    route_a: usize,
    route_b: usize,
    start_a: usize,
    start_b: usize,
) -> Option<Vec<usize>> {
    let mut routes = vector_to_routes(vector);
    if route_a == route_b || route_a >= routes.len() || route_b >= routes.len() {
        return None;
    }
    if routes[route_a].len() < 2 || start_a + 1 >= routes[route_a].len() {
        return None;
    }
    if routes[route_b].len() < 2 || start_b + 1 >= routes[route_b].len() {
        return None;
    }
    for k in 0..2 {
        let held = routes[route_a][start_a + k];
        routes[route_a][start_a + k] = routes[route_b][start_b + k];
        routes[route_b][start_b + k] = held;
    }
    Some(routes_to_vector(&routes))
}
