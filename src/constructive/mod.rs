//! Constructive heuristic for building the initial solution.
//!
//! - [`solve_by_construction`] — Clarke-Wright savings merge (1964), O(n² log n)

mod savings;

pub use savings::{solve_by_construction, solve_by_construction_with, SavingsConfig};
