//! Neighborhood move operators for the descent search.
//!
//! - [`intra`] — moves within a single route (swap, relocate, block
//!   insertion, 2-opt)
//! - [`inter`] — moves between two distinct routes on the flat encoding
//!   (swap(1,1), shift(1,0), shift(2,0), swap(2,1), swap(2,2))
//!
//! Every operator returns `Option`: `None` means the move is not applicable
//! to the given indices, which the descent filters out like any other
//! non-improving candidate.

mod inter;
mod intra;

pub use inter::{shift_one_zero, shift_two_zero, swap_one_one, swap_two_one, swap_two_two};
pub use intra::{block_insertion, relocate, swap, two_opt};
