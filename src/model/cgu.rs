//! Operating model of a single combined heat-and-power generating unit.
//!
//! For every time step the unit gets a binary commitment variable and
//! three nonnegative flows (gas, power, heat), tied together by four
//! linear constraints:
//!
//! 1. `power[t] <= power_max * on[t]`
//! 2. `power_min * on[t] <= power[t]`
//! 3. `gas[t] == a_gas * power[t] + b_gas * on[t]`
//! 4. `heat[t] == a_heat * power[t] + b_heat * on[t]`
//!
//! The coupling intercepts are gated by the binary, so an uncommitted
//! unit has exactly zero gas and heat throughput rather than its idle
//! value.

use good_lp::{constraint, variable, Constraint, ProblemVariables, Solution, Variable};

use crate::domain::OperatingLimits;
use crate::solver::UnitSchedule;

/// Variable block of one unit, kept as an explicit registry entry so
/// result extraction never has to introspect the solver model.
#[derive(Debug)]
pub struct CguBlock {
    pub id: String,
    pub on: Vec<Variable>,
    pub gas: Vec<Variable>,
    pub power: Vec<Variable>,
    pub heat: Vec<Variable>,
}

impl CguBlock {
    /// Adds the unit's variables to `vars` and its envelope constraints to
    /// `constraints`, one block of four per time step.
    ///
    /// `limits` must have passed [`OperatingLimits::validate`]; the
    /// coupling slopes divide by the power range.
    pub fn attach(
        vars: &mut ProblemVariables,
        constraints: &mut Vec<Constraint>,
        id: &str,
        limits: &OperatingLimits,
        steps: usize,
    ) -> Self {
        let on = vars.add_vector(variable().binary(), steps);
        let gas = vars.add_vector(variable().min(0.0), steps);
        let power = vars.add_vector(variable().min(0.0), steps);
        let heat = vars.add_vector(variable().min(0.0), steps);

        let gas_coupling = limits.gas_coupling();
        let heat_coupling = limits.heat_coupling();

        for t in 0..steps {
            constraints.push(constraint!(power[t] <= limits.power_max * on[t]));
            constraints.push(constraint!(limits.power_min * on[t] <= power[t]));
            constraints.push(constraint!(
                gas[t] == gas_coupling.slope * power[t] + gas_coupling.intercept * on[t]
            ));
            constraints.push(constraint!(
                heat[t] == heat_coupling.slope * power[t] + heat_coupling.intercept * on[t]
            ));
        }

        Self {
            id: id.to_string(),
            on,
            gas,
            power,
            heat,
        }
    }

    /// Pulls this unit's solved values out of a solver solution.
    pub fn read<S: Solution>(&self, solution: &S) -> UnitSchedule {
        UnitSchedule {
            id: self.id.clone(),
            on: self.on.iter().map(|&v| solution.value(v) > 0.5).collect(),
            gas: self.gas.iter().map(|&v| solution.value(v)).collect(),
            power: self.power.iter().map(|&v| solution.value(v)).collect(),
            heat: self.heat.iter().map(|&v| solution.value(v)).collect(),
        }
    }
}
