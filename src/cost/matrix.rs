//! Dense travel-cost matrix.

/// A dense (n+1)×(n+1) travel-cost matrix stored in row-major order.
///
/// Index 0 is the depot, indices 1..=n are customers. Entries may be
/// asymmetric: `get(i, j)` and `get(j, i)` are independent values.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::cost::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 9.0],
///     vec![9.0, 0.0],
/// ]).expect("square");
/// assert_eq!(cm.size(), 2);
/// assert_eq!(cm.get(0, 1), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Returns `None` if any row's length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in &rows {
            if row.len() != size {
                return None;
            }
            data.extend_from_slice(row);
        }
        Some(Self { data, size })
    }

    /// Creates a cost matrix from an explicit row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_flat(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix (depot included).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over all entries as `(from, to, cost)`.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &c)| (idx / self.size, idx % self.size, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let cm = CostMatrix::from_rows(vec![
            vec![0.0, 9.0, 14.0],
            vec![9.0, 0.0, 21.0],
            vec![14.0, 21.0, 0.0],
        ])
        .expect("square");
        assert_eq!(cm.size(), 3);
        assert_eq!(cm.get(0, 2), 14.0);
        assert_eq!(cm.get(2, 1), 21.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).is_none());
        assert!(CostMatrix::from_rows(vec![vec![0.0]]).is_some());
    }

    #[test]
    fn test_from_flat() {
        let cm = CostMatrix::from_flat(2, vec![0.0, 5.0, 7.0, 0.0]).expect("valid");
        assert_eq!(cm.get(0, 1), 5.0);
        assert_eq!(cm.get(1, 0), 7.0);
    }

    #[test]
    fn test_from_flat_invalid_size() {
        assert!(CostMatrix::from_flat(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 42.0);
        assert_eq!(cm.get(0, 1), 42.0);
        assert_eq!(cm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_entries() {
        let mut cm = CostMatrix::new(2);
        cm.set(0, 1, 10.0);
        cm.set(1, 0, 15.0);
        assert_eq!(cm.get(0, 1), 10.0);
        assert_eq!(cm.get(1, 0), 15.0);
    }

    #[test]
    fn test_entries_iterator() {
        let cm = CostMatrix::from_flat(2, vec![0.0, 5.0, 7.0, 0.0]).expect("valid");
        let entries: Vec<_> = cm.entries().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], (0, 1, 5.0));
        assert_eq!(entries[2], (1, 0, 7.0));
    }
}
