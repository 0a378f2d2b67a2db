//! # vrpspd-solver
//!
//! Solver for the Vehicle Routing Problem with Simultaneous Pickup and
//! Delivery (VRPSPD): customers are partitioned into depot-anchored routes
//! whose in-vehicle load fluctuates as deliveries are dropped and pickups
//! collected, minimizing total travel cost. Construction uses a
//! Clarke-Wright savings merge; improvement runs a two-level variable
//! neighborhood descent under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Validated problem instance and solution records
//! - [`cost`] — Dense travel-cost matrix (asymmetric entries allowed)
//! - [`encoding`] — Flat depot-delimited solution encoding
//! - [`evaluation`] — Load-profile feasibility, reversal repair, travel cost
//! - [`constructive`] — Clarke-Wright savings construction
//! - [`local_search`] — Intra- and inter-route move operators
//! - [`descent`] — Two-level VND orchestrator and intensification strategies

pub mod constructive;
pub mod cost;
pub mod descent;
pub mod encoding;
pub mod evaluation;
pub mod local_search;
pub mod models;
