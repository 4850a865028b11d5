use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::OperatingLimits;

/// Identifier of one discrete time step, as found in the price table's
/// `t` column. Row order in the table defines the horizon order.
pub type TimeStep = u32;

/// One row of the price table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub t: TimeStep,
    pub gas_price: f64,
    pub power_price: f64,
}

/// One generating unit to schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    pub id: String,
    pub limits: OperatingLimits,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("time horizon is empty")]
    EmptyHorizon,

    #[error("no generating units configured")]
    NoUnits,

    #[error("duplicate time step {0} in price table")]
    DuplicateStep(TimeStep),

    #[error("{column} at time step {step} is not a finite number")]
    NonFinitePrice { step: TimeStep, column: &'static str },
}

/// Fully validated input of one dispatch run: the shared time horizon,
/// both price series aligned with it, and the units to schedule.
///
/// Each run owns an independent `Scenario`; nothing is shared across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    steps: Vec<TimeStep>,
    gas_price: Vec<f64>,
    power_price: Vec<f64>,
    units: Vec<UnitSpec>,
}

impl Scenario {
    /// Builds a scenario from price rows and unit specs. Rejects an empty
    /// horizon, duplicate time steps and non-finite prices; unit limits are
    /// checked later by the model assembler, but both failures abort the
    /// run before any solver call.
    pub fn new(points: Vec<PricePoint>, units: Vec<UnitSpec>) -> Result<Self, ScenarioError> {
        if points.is_empty() {
            return Err(ScenarioError::EmptyHorizon);
        }
        if units.is_empty() {
            return Err(ScenarioError::NoUnits);
        }

        let mut seen = std::collections::HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.t) {
                return Err(ScenarioError::DuplicateStep(point.t));
            }
            if !point.gas_price.is_finite() {
                return Err(ScenarioError::NonFinitePrice { step: point.t, column: "gas_price" });
            }
            if !point.power_price.is_finite() {
                return Err(ScenarioError::NonFinitePrice { step: point.t, column: "power_price" });
            }
        }

        Ok(Self {
            steps: points.iter().map(|p| p.t).collect(),
            gas_price: points.iter().map(|p| p.gas_price).collect(),
            power_price: points.iter().map(|p| p.power_price).collect(),
            units,
        })
    }

    /// Number of time steps in the horizon.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[TimeStep] {
        &self.steps
    }

    pub fn gas_price(&self) -> &[f64] {
        &self.gas_price
    }

    pub fn power_price(&self) -> &[f64] {
        &self.power_price
    }

    pub fn units(&self) -> &[UnitSpec] {
        &self.units
    }
}
