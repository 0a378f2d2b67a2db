//! Domain model types for the pickup-and-delivery routing problem.
//!
//! Provides the validated immutable [`ProblemInstance`] and the result
//! records ([`Solution`], [`ImprovedSolution`]) handed back to callers.

mod instance;
mod solution;

pub use instance::{InstanceError, ProblemInstance};
pub use solution::{ImprovedSolution, RouteDiagnostics, Solution};
