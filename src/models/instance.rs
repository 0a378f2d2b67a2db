//! Problem instance and input validation.

use std::error::Error;
use std::fmt;

use crate::cost::CostMatrix;

/// A malformed-instance error.
///
/// This is the only hard failure the solver surfaces: instances are
/// validated once, up front, and everything downstream treats the data as
/// trusted and read-only.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    /// The cost matrix has no rows, so there is no depot.
    EmptyMatrix,
    /// A matrix row's length differs from the row count.
    NonSquareMatrix {
        /// Offending row index.
        row: usize,
        /// Expected row length (the row count).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
    /// The delivery vector's length differs from the matrix size.
    DeliveryLength {
        /// Expected length (matrix size).
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// The pickup vector's length differs from the matrix size.
    PickupLength {
        /// Expected length (matrix size).
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// Vehicle capacity is zero or negative.
    NonPositiveCapacity {
        /// Declared capacity.
        capacity: i32,
    },
    /// A cost entry is negative or non-finite.
    InvalidCost {
        /// Source location index.
        from: usize,
        /// Target location index.
        to: usize,
        /// Offending value.
        cost: f64,
    },
    /// A delivery amount is negative.
    NegativeDelivery {
        /// Customer index.
        customer: usize,
        /// Offending value.
        amount: i32,
    },
    /// A pickup amount is negative.
    NegativePickup {
        /// Customer index.
        customer: usize,
        /// Offending value.
        amount: i32,
    },
    /// The depot (index 0) declares a nonzero delivery or pickup.
    NonzeroDepotDemand,
    /// A fleet with no vehicles was supplied.
    EmptyFleet,
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => write!(f, "cost matrix is empty"),
            Self::NonSquareMatrix { row, expected, actual } => write!(
                f,
                "cost matrix is not square: row {row} has {actual} entries, expected {expected}"
            ),
            Self::DeliveryLength { expected, actual } => write!(
                f,
                "delivery vector has length {actual}, expected {expected}"
            ),
            Self::PickupLength { expected, actual } => {
                write!(f, "pickup vector has length {actual}, expected {expected}")
            }
            Self::NonPositiveCapacity { capacity } => {
                write!(f, "vehicle capacity must be positive, got {capacity}")
            }
            Self::InvalidCost { from, to, cost } => {
                write!(f, "cost({from}, {to}) = {cost} is not a finite non-negative value")
            }
            Self::NegativeDelivery { customer, amount } => {
                write!(f, "delivery[{customer}] = {amount} is negative")
            }
            Self::NegativePickup { customer, amount } => {
                write!(f, "pickup[{customer}] = {amount} is negative")
            }
            Self::NonzeroDepotDemand => {
                write!(f, "depot (index 0) must have zero delivery and pickup")
            }
            Self::EmptyFleet => write!(f, "fleet must contain at least one vehicle"),
        }
    }
}

impl Error for InstanceError {}

/// An immutable VRPSPD instance.
///
/// Holds the travel-cost matrix, the per-customer delivery and pickup
/// amounts (index 0 = depot, always zero), the vehicle capacity, and the
/// number of available vehicles. Validated on construction; read-only for
/// the remainder of the computation.
///
/// # Examples
///
/// ```
/// use vrpspd_solver::models::ProblemInstance;
///
/// let instance = ProblemInstance::from_rows(
///     vec![
///         vec![0.0, 9.0, 14.0],
///         vec![9.0, 0.0, 21.0],
///         vec![14.0, 21.0, 0.0],
///     ],
///     vec![0, 1200, 1700],
///     vec![0, 0, 1200],
///     6000,
///     2,
/// ).expect("valid instance");
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.capacity(), 6000);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    cost: CostMatrix,
    delivery: Vec<i32>,
    pickup: Vec<i32>,
    capacity: i32,
    num_vehicles: usize,
}

impl ProblemInstance {
    /// Creates a validated instance from an already-built cost matrix.
    pub fn new(
        cost: CostMatrix,
        delivery: Vec<i32>,
        pickup: Vec<i32>,
        capacity: i32,
        num_vehicles: usize,
    ) -> Result<Self, InstanceError> {
        let size = cost.size();
        if size == 0 {
            return Err(InstanceError::EmptyMatrix);
        }
        if delivery.len() != size {
            return Err(InstanceError::DeliveryLength {
                expected: size,
                actual: delivery.len(),
            });
        }
        if pickup.len() != size {
            return Err(InstanceError::PickupLength {
                expected: size,
                actual: pickup.len(),
            });
        }
        if capacity <= 0 {
            return Err(InstanceError::NonPositiveCapacity { capacity });
        }
        for (from, to, c) in cost.entries() {
            if !c.is_finite() || c < 0.0 {
                return Err(InstanceError::InvalidCost { from, to, cost: c });
            }
        }
        for (customer, &amount) in delivery.iter().enumerate() {
            if amount < 0 {
                return Err(InstanceError::NegativeDelivery { customer, amount });
            }
        }
        for (customer, &amount) in pickup.iter().enumerate() {
            if amount < 0 {
                return Err(InstanceError::NegativePickup { customer, amount });
            }
        }
        if delivery[0] != 0 || pickup[0] != 0 {
            return Err(InstanceError::NonzeroDepotDemand);
        }
        Ok(Self {
            cost,
            delivery,
            pickup,
            capacity,
            num_vehicles,
        })
    }

    /// Creates a validated instance from nested cost rows.
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        delivery: Vec<i32>,
        pickup: Vec<i32>,
        capacity: i32,
        num_vehicles: usize,
    ) -> Result<Self, InstanceError> {
        let expected = rows.len();
        for (row, r) in rows.iter().enumerate() {
            if r.len() != expected {
                return Err(InstanceError::NonSquareMatrix {
                    row,
                    expected,
                    actual: r.len(),
                });
            }
        }
        let cost = match CostMatrix::from_rows(rows) {
            Some(cm) => cm,
            None => return Err(InstanceError::EmptyMatrix),
        };
        Self::new(cost, delivery, pickup, capacity, num_vehicles)
    }

    /// Creates an instance from a heterogeneous fleet.
    ///
    /// The per-vehicle capacities collapse to a single scalar by taking the
    /// maximum, and the vehicle count is the fleet size.
    pub fn with_fleet(
        cost: CostMatrix,
        delivery: Vec<i32>,
        pickup: Vec<i32>,
        capacities: &[i32],
    ) -> Result<Self, InstanceError> {
        let capacity = match capacities.iter().max() {
            Some(&max) => max,
            None => return Err(InstanceError::EmptyFleet),
        };
        Self::new(cost, delivery, pickup, capacity, capacities.len())
    }

    /// The travel-cost matrix.
    pub fn cost(&self) -> &CostMatrix {
        &self.cost
    }

    /// Delivery amounts, indexed by location (0 = depot).
    pub fn delivery(&self) -> &[i32] {
        &self.delivery
    }

    /// Pickup amounts, indexed by location (0 = depot).
    pub fn pickup(&self) -> &[i32] {
        &self.pickup
    }

    /// Vehicle load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Number of available vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.cost.size() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 9.0, 14.0],
            vec![9.0, 0.0, 21.0],
            vec![14.0, 21.0, 0.0],
        ]
    }

    #[test]
    fn test_valid_instance() {
        let instance = ProblemInstance::from_rows(
            square_rows(),
            vec![0, 10, 20],
            vec![0, 5, 0],
            100,
            2,
        )
        .expect("valid");
        assert_eq!(instance.num_customers(), 2);
        assert_eq!(instance.num_vehicles(), 2);
        assert_eq!(instance.delivery()[2], 20);
        assert_eq!(instance.pickup()[1], 5);
    }

    #[test]
    fn test_non_square_matrix() {
        let err = ProblemInstance::from_rows(
            vec![vec![0.0, 1.0], vec![1.0]],
            vec![0, 10],
            vec![0, 0],
            100,
            1,
        )
        .expect_err("ragged");
        assert_eq!(
            err,
            InstanceError::NonSquareMatrix {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_vector_length_mismatch() {
        let err = ProblemInstance::from_rows(square_rows(), vec![0, 10], vec![0, 5, 0], 100, 1)
            .expect_err("short delivery");
        assert!(matches!(err, InstanceError::DeliveryLength { .. }));

        let err = ProblemInstance::from_rows(square_rows(), vec![0, 10, 20], vec![0, 5], 100, 1)
            .expect_err("short pickup");
        assert!(matches!(err, InstanceError::PickupLength { .. }));
    }

    #[test]
    fn test_non_positive_capacity() {
        let err =
            ProblemInstance::from_rows(square_rows(), vec![0, 10, 20], vec![0, 5, 0], 0, 1)
                .expect_err("zero capacity");
        assert_eq!(err, InstanceError::NonPositiveCapacity { capacity: 0 });
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut rows = square_rows();
        rows[1][2] = -3.0;
        let err = ProblemInstance::from_rows(rows, vec![0, 10, 20], vec![0, 5, 0], 100, 1)
            .expect_err("negative cost");
        assert!(matches!(err, InstanceError::InvalidCost { from: 1, to: 2, .. }));
    }

    #[test]
    fn test_nan_cost_rejected() {
        let mut rows = square_rows();
        rows[0][1] = f64::NAN;
        let err = ProblemInstance::from_rows(rows, vec![0, 10, 20], vec![0, 5, 0], 100, 1)
            .expect_err("nan cost");
        assert!(matches!(err, InstanceError::InvalidCost { .. }));
    }

    #[test]
    fn test_negative_demand_rejected() {
        let err = ProblemInstance::from_rows(square_rows(), vec![0, -1, 20], vec![0, 5, 0], 100, 1)
            .expect_err("negative delivery");
        assert!(matches!(err, InstanceError::NegativeDelivery { customer: 1, .. }));

        let err = ProblemInstance::from_rows(square_rows(), vec![0, 10, 20], vec![0, 5, -2], 100, 1)
            .expect_err("negative pickup");
        assert!(matches!(err, InstanceError::NegativePickup { customer: 2, .. }));
    }

    #[test]
    fn test_nonzero_depot_demand_rejected() {
        let err = ProblemInstance::from_rows(square_rows(), vec![1, 10, 20], vec![0, 5, 0], 100, 1)
            .expect_err("depot delivery");
        assert_eq!(err, InstanceError::NonzeroDepotDemand);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let err = ProblemInstance::from_rows(vec![], vec![], vec![], 100, 1)
            .expect_err("no depot");
        assert_eq!(err, InstanceError::EmptyMatrix);
    }

    #[test]
    fn test_with_fleet_takes_max_capacity() {
        let cm = CostMatrix::from_rows(square_rows()).expect("square");
        let instance =
            ProblemInstance::with_fleet(cm, vec![0, 10, 20], vec![0, 5, 0], &[40, 100, 60])
                .expect("valid fleet");
        assert_eq!(instance.capacity(), 100);
        assert_eq!(instance.num_vehicles(), 3);
    }

    #[test]
    fn test_with_empty_fleet_rejected() {
        let cm = CostMatrix::from_rows(square_rows()).expect("square");
        let err = ProblemInstance::with_fleet(cm, vec![0, 10, 20], vec![0, 5, 0], &[])
            .expect_err("no vehicles");
        assert_eq!(err, InstanceError::EmptyFleet);
    }

    #[test]
    fn test_error_display() {
        let err = InstanceError::NonPositiveCapacity { capacity: -5 };
        assert!(err.to_string().contains("-5"));
    }
}
