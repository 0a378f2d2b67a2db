//! Intra-route move operators.
//!
//! Each operator rearranges one route, addressed by position indices, and
//! returns the transformed customer sequence — or `None` when the indices
//! are out of range or describe a no-op, so the descent can treat
//! inapplicable candidates uniformly. Operators never check loads or costs;
//! feasibility and acceptance are the caller's concern.

/// Exchanges the customers at positions `i` and `j` (`i < j`).
///
/// # Examples
///
/// ```
/// use vrpspd_solver::local_search::swap;
///
/// assert_eq!(swap(&[1, 2, 3], 0, 2), Some(vec![3, 2, 1]));
/// assert_eq!(swap(&[1, 2, 3], 2, 2), None);
/// ```
pub fn swap(route: &[usize], i: usize, j: usize) -> Option<Vec<usize>> {
    if i >= j || j >= route.len() {
        return None;
    }
    let mut out = route.to_vec();
    out.swap(i, j);
    Some(out)
}

/// Removes the customer at position `i` and reinserts it so it precedes the
/// element originally at position `j` (`j == route.len()` appends).
///
/// Intervening customers shift to fill the gap. `None` when the move would
/// leave the route unchanged (`j == i` or `j == i + 1`).
pub fn relocate(route: &[usize], i: usize, j: usize) -> Option<Vec<usize>> {
    if i >= route.len() || j > route.len() || j == i || j == i + 1 {
        return None;
    }
    let mut out = route.to_vec();
    let customer = out.remove(i);
    let pos = if j > i { j - 1 } else { j };
    out.insert(pos, customer);
    Some(out)
}

/// Moves the two-customer block starting at `i` so it precedes the element
/// originally at position `j`.
///
/// `None` when the block would overlap its own target (`j` within
/// `i..=i+2`) or either index is out of range.
pub fn block_insertion(route: &[usize], i: usize, j: usize) -> Option<Vec<usize>> {
    if i + 1 >= route.len() || j > route.len() {
        return None;
    }
    if j >= i && j <= i + 2 {
        return None;
    }
    let mut out = route.to_vec();
    let second = out.remove(i + 1);
    let first = out.remove(i);
    let pos = if j > i { j - 2 } else { j };
    out.insert(pos, second);
    out.insert(pos, first);
    Some(out)
}

/// Reverses the segment at positions `i+1..=j` (`j ≥ i + 2`).
///
/// The customer at `i` keeps its place and the edge beyond `j` reconnects
/// to the segment's former start, the classic 2-opt edge exchange.
pub fn two_opt(route: &[usize], i: usize, j: usize) -> Option<Vec<usize>> {
    if j >= route.len() || i + 2 > j {
        return None;
    }
    let mut out = route.to_vec();
    out[i + 1..=j].reverse();
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_positions() {
        assert_eq!(swap(&[1, 2, 3, 4], 1, 3), Some(vec![1, 4, 3, 2]));
    }

    #[test]
    fn test_swap_rejects_bad_indices() {
        assert_eq!(swap(&[1, 2, 3], 1, 1), None);
        assert_eq!(swap(&[1, 2, 3], 2, 1), None);
        assert_eq!(swap(&[1, 2, 3], 0, 3), None);
        assert_eq!(swap(&[], 0, 1), None);
    }

    #[test]
    fn test_relocate_forward() {
        // Customer at 0 reinserted before the element originally at 2.
        assert_eq!(relocate(&[1, 2, 3, 4], 0, 2), Some(vec![2, 1, 3, 4]));
        // j == len appends.
        assert_eq!(relocate(&[1, 2, 3, 4], 0, 4), Some(vec![2, 3, 4, 1]));
    }

    #[test]
    fn test_relocate_backward() {
        assert_eq!(relocate(&[1, 2, 3, 4], 3, 0), Some(vec![4, 1, 2, 3]));
        assert_eq!(relocate(&[1, 2, 3, 4], 2, 1), Some(vec![1, 3, 2, 4]));
    }

    #[test]
    fn test_relocate_rejects_identity_and_bounds() {
        assert_eq!(relocate(&[1, 2, 3], 1, 1), None);
        assert_eq!(relocate(&[1, 2, 3], 1, 2), None);
        assert_eq!(relocate(&[1, 2, 3], 3, 0), None);
        assert_eq!(relocate(&[1, 2, 3], 0, 4), None);
    }

    #[test]
    fn test_block_insertion_forward() {
        // Block [1, 2] moved before the element originally at 4 (the end).
        assert_eq!(block_insertion(&[1, 2, 3, 4], 0, 4), Some(vec![3, 4, 1, 2]));
        assert_eq!(block_insertion(&[1, 2, 3, 4], 0, 3), Some(vec![3, 1, 2, 4]));
    }

    #[test]
    fn test_block_insertion_backward() {
        assert_eq!(block_insertion(&[1, 2, 3, 4], 2, 0), Some(vec![3, 4, 1, 2]));
        assert_eq!(block_insertion(&[1, 2, 3, 4], 2, 1), Some(vec![1, 3, 4, 2]));
    }

    #[test]
    fn test_block_insertion_rejects_overlap_and_bounds() {
        assert_eq!(block_insertion(&[1, 2, 3, 4], 0, 0), None);
        assert_eq!(block_insertion(&[1, 2, 3, 4], 0, 1), None);
        assert_eq!(block_insertion(&[1, 2, 3, 4], 0, 2), None);
        assert_eq!(block_insertion(&[1, 2, 3, 4], 3, 0), None);
        assert_eq!(block_insertion(&[1, 2], 0, 2), None);
    }

    #[test]
    fn test_two_opt_reverses_inner_segment() {
        assert_eq!(two_opt(&[1, 2, 3, 4], 0, 2), Some(vec![1, 3, 2, 4]));
        assert_eq!(two_opt(&[1, 2, 3, 4], 0, 3), Some(vec![1, 4, 3, 2]));
        assert_eq!(two_opt(&[1, 2, 3, 4], 1, 3), Some(vec![1, 2, 4, 3]));
    }

    #[test]
    fn test_two_opt_rejects_short_segments() {
        assert_eq!(two_opt(&[1, 2, 3], 0, 1), None);
        assert_eq!(two_opt(&[1, 2, 3], 1, 3), None);
        assert_eq!(two_opt(&[1, 2], 0, 2), None);
    }
}
