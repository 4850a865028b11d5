//! Pluggable MILP backend interface.
//!
//! The dispatch model is solver-agnostic; anything that can take the
//! assembled model and hand back per-unit schedules implements
//! [`MilpBackend`]. The default backend is CBC via `good_lp` (see
//! [`cbc::CbcBackend`]).

pub mod cbc;

pub use cbc::*;

use itertools::izip;
use thiserror::Error;

use crate::model::DispatchModel;

/// How far the solver got. `Feasible` means a solution exists but was
/// not proven optimal (e.g. a MIP solve stopped at a time limit); it
/// must never be silently treated as `Optimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
}

/// Solved values for one unit, aligned with the scenario horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSchedule {
    pub id: String,
    pub on: Vec<bool>,
    pub gas: Vec<f64>,
    pub power: Vec<f64>,
    pub heat: Vec<f64>,
}

/// Outcome of a successful solve. No variant of this type exists for
/// infeasible or unbounded models; those surface as [`SolveError`].
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchSolution {
    pub status: SolveStatus,
    /// Net cost recomputed from the returned variable values:
    /// `sum(gas * gas_price) - sum(power * power_price)`.
    pub objective_value: f64,
    pub units: Vec<UnitSchedule>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("model is infeasible")]
    Infeasible,

    #[error("model is unbounded")]
    Unbounded,

    #[error("solver backend error: {0}")]
    Backend(String),
}

pub trait MilpBackend {
    /// Submits the fully assembled model to the solver. Consumes the
    /// model: nothing may touch it while the (potentially long-running,
    /// blocking) solve is in flight.
    fn solve(&self, model: DispatchModel) -> Result<DispatchSolution, SolveError>;
}

/// Net cost of a set of unit schedules under the given price series.
pub fn net_cost(units: &[UnitSchedule], gas_price: &[f64], power_price: &[f64]) -> f64 {
    units
        .iter()
        .map(|unit| {
            izip!(&unit.gas, &unit.power, gas_price, power_price)
                .map(|(gas, power, gp, pp)| gas * gp - power * pp)
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn net_cost_sums_fuel_minus_revenue_across_units() {
        let units = vec![
            UnitSchedule {
                id: "cgu1".to_string(),
                on: vec![true, true],
                gas: vec![80.0, 80.0],
                power: vec![50.0, 50.0],
                heat: vec![30.0, 30.0],
            },
            UnitSchedule {
                id: "cgu2".to_string(),
                on: vec![true, false],
                gas: vec![20.0, 0.0],
                power: vec![10.0, 0.0],
                heat: vec![5.0, 0.0],
            },
        ];
        let gas_price = [1.0, 2.0];
        let power_price = [2.0, 3.0];

        // cgu1: (80 - 100) + (160 - 150) = -10; cgu2: (20 - 20) + 0 = 0
        assert_relative_eq!(net_cost(&units, &gas_price, &power_price), -10.0);
    }

    #[test]
    fn net_cost_of_idle_units_is_zero() {
        let units = vec![UnitSchedule {
            id: "cgu1".to_string(),
            on: vec![false; 3],
            gas: vec![0.0; 3],
            power: vec![0.0; 3],
            heat: vec![0.0; 3],
        }];
        assert_relative_eq!(net_cost(&units, &[1.0; 3], &[2.0; 3]), 0.0);
    }
}
