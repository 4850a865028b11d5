//! Assembly of the system-wide dispatch model: one CGU block per unit
//! over the shared horizon, plus the net-cost objective.

use good_lp::{Constraint, Expression, ProblemVariables};
use thiserror::Error;
use tracing::debug;

use super::CguBlock;
use crate::domain::{LimitsError, Scenario};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unit {unit}: invalid operating limits")]
    InvalidLimits {
        unit: String,
        #[source]
        source: LimitsError,
    },
}

/// A fully assembled MILP, structurally immutable. Solving consumes it;
/// only the solver assigns variable values.
pub struct DispatchModel {
    pub(crate) vars: ProblemVariables,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Expression,
    pub(crate) units: Vec<CguBlock>,
    pub(crate) gas_price: Vec<f64>,
    pub(crate) power_price: Vec<f64>,
}

// `ProblemVariables` and `Constraint` are not `Debug`, so derive is not
// available; summarize those fields by count instead.
impl std::fmt::Debug for DispatchModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchModel")
            .field("constraints", &self.constraints.len())
            .field("units", &self.units)
            .field("gas_price", &self.gas_price)
            .field("power_price", &self.power_price)
            .finish_non_exhaustive()
    }
}

impl DispatchModel {
    /// Validates every unit's operating limits, then attaches one CGU
    /// block per unit and composes the minimize objective
    /// `sum(gas * gas_price) - sum(power * power_price)`.
    ///
    /// Invalid limits abort here, before any variable is created and
    /// before any solver is invoked.
    pub fn build(scenario: &Scenario) -> Result<Self, ModelError> {
        for unit in scenario.units() {
            unit.limits.validate().map_err(|source| ModelError::InvalidLimits {
                unit: unit.id.clone(),
                source,
            })?;
        }

        let steps = scenario.len();
        let mut vars = ProblemVariables::new();
        let mut constraints = Vec::with_capacity(4 * steps * scenario.units().len());

        let units: Vec<CguBlock> = scenario
            .units()
            .iter()
            .map(|unit| CguBlock::attach(&mut vars, &mut constraints, &unit.id, &unit.limits, steps))
            .collect();

        // Net cost: fuel purchases minus electricity revenue. Heat carries
        // no price term.
        let objective: Expression = (0..steps)
            .map(|t| {
                let gas_total: Expression =
                    units.iter().map(|u| Expression::from(u.gas[t])).sum();
                let power_total: Expression =
                    units.iter().map(|u| Expression::from(u.power[t])).sum();
                gas_total * scenario.gas_price()[t] - power_total * scenario.power_price()[t]
            })
            .sum();

        debug!(
            units = units.len(),
            steps,
            constraints = constraints.len(),
            "dispatch model assembled"
        );

        Ok(Self {
            vars,
            constraints,
            objective,
            units,
            gas_price: scenario.gas_price().to_vec(),
            power_price: scenario.power_price().to_vec(),
        })
    }

    pub fn units(&self) -> &[CguBlock] {
        &self.units
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }
}
