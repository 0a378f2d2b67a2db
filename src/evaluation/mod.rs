//! Feasibility checking and cost evaluation.
//!
//! - [`feasibility`] — load-profile validation and reversal repair
//! - [`objective`] — route and solution travel cost

mod feasibility;
mod objective;

pub use feasibility::{
    check_route, check_route_strict, repair_routes, total_delivery, total_pickup, LoadProfile,
};
pub use objective::{route_distance, vector_cost};
