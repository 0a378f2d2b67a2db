//! Travel-cost matrix for routing problems.

mod matrix;

pub use matrix::CostMatrix;
