//! Flat depot-delimited solution encoding.
//!
//! During search a solution is carried as a single flat vector
//! `0, r1…, 0, r2…, 0` where `0` marks route boundaries. Applying moves and
//! re-costing are cheaper on this shape than on a set of variable-length
//! routes; decoding splits on the depot sentinel and re-encoding joins the
//! routes back.
//!
//! Empty routes never survive either direction: decoding drops them, and
//! encoding skips them, so `routes_to_vector(vector_to_routes(v)) == v`
//! holds for any well-formed vector (one with no adjacent zeros).

/// Encodes a route partition as a flat depot-delimited vector.
///
/// Empty routes are skipped. An empty partition encodes to `[0]`.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::encoding::routes_to_vector;
///
/// let v = routes_to_vector(&[vec![1, 2], vec![3]]);
/// assert_eq!(v, vec![0, 1, 2, 0, 3, 0]);
/// ```
pub fn routes_to_vector(routes: &[Vec<usize>]) -> Vec<usize> {
    let mut vector = vec![0];
    for route in routes {
        if route.is_empty() {
            continue;
        }
        vector.extend_from_slice(route);
        vector.push(0);
    }
    vector
}

/// Decodes a flat depot-delimited vector into its route partition.
///
/// Zeros delimit routes; empty segments (adjacent zeros, leading or
/// trailing zeros) produce no route.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::encoding::vector_to_routes;
///
/// let routes = vector_to_routes(&[0, 1, 2, 0, 3, 0]);
/// assert_eq!(routes, vec![vec![1, 2], vec![3]]);
/// ```
pub fn vector_to_routes(vector: &[usize]) -> Vec<Vec<usize>> {
    let mut routes = Vec::new();
    let mut current = Vec::new();
    for &node in vector {
        if node != 0 {
            current.push(node);
        } else if !current.is_empty() {
            routes.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        routes.push(current);
    }
    routes
}
