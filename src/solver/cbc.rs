//! CBC backend via `good_lp`.

use good_lp::{coin_cbc, ResolutionError, SolverModel};
use tracing::{debug, info};

use super::{net_cost, DispatchSolution, MilpBackend, SolveError, SolveStatus, UnitSchedule};
use crate::config::SolverConfig;
use crate::model::DispatchModel;

/// The default MILP backend. The commitment variables are binary, so a
/// MIP-capable solver is required; CBC is the open-source default, as
/// in `good_lp`'s own feature set.
#[derive(Debug, Clone)]
pub struct CbcBackend {
    time_limit_seconds: Option<u64>,
    log_level: u8,
}

impl Default for CbcBackend {
    fn default() -> Self {
        Self { time_limit_seconds: None, log_level: 0 }
    }
}

impl CbcBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &SolverConfig) -> Self {
        Self {
            time_limit_seconds: cfg.time_limit_seconds,
            log_level: cfg.log_level,
        }
    }
}

impl MilpBackend for CbcBackend {
    fn solve(&self, model: DispatchModel) -> Result<DispatchSolution, SolveError> {
        let DispatchModel {
            vars,
            constraints,
            objective,
            units,
            gas_price,
            power_price,
        } = model;

        let mut problem = vars.minimise(objective).using(coin_cbc);
        problem.set_parameter("logLevel", &self.log_level.to_string());
        if let Some(seconds) = self.time_limit_seconds {
            problem.set_parameter("sec", &seconds.to_string());
        }

        let n_constraints = constraints.len();
        for constraint in constraints {
            problem = problem.with(constraint);
        }

        debug!(constraints = n_constraints, "submitting model to CBC");
        let solution = problem.solve().map_err(|err| match err {
            ResolutionError::Infeasible => SolveError::Infeasible,
            ResolutionError::Unbounded => SolveError::Unbounded,
            other => SolveError::Backend(other.to_string()),
        })?;

        let schedules: Vec<UnitSchedule> = units.iter().map(|u| u.read(&solution)).collect();
        let objective_value = net_cost(&schedules, &gas_price, &power_price);
        info!(objective_value, "CBC solve finished");

        // good_lp's CBC driver only returns Ok for solves that ran to
        // completion, so the solution is proven optimal. Backends that
        // expose a MIP gap report `Feasible` instead.
        Ok(DispatchSolution {
            status: SolveStatus::Optimal,
            objective_value,
            units: schedules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OperatingLimits, PricePoint, Scenario, UnitSpec};
    use approx::assert_relative_eq;
    use good_lp::constraint;

    fn limits() -> OperatingLimits {
        OperatingLimits {
            power_min: 10.0,
            power_max: 50.0,
            gas_min: 20.0,
            gas_max: 80.0,
            heat_min: 5.0,
            heat_max: 30.0,
        }
    }

    fn scenario(power_price: f64) -> Scenario {
        let points = (1..=2)
            .map(|t| PricePoint { t, gas_price: 1.0, power_price })
            .collect();
        Scenario::new(points, vec![UnitSpec { id: "cgu1".to_string(), limits: limits() }])
            .unwrap()
    }

    #[test]
    fn commits_unit_at_full_load_when_profitable() {
        // Marginal fuel cost is a_gas = 1.5 per unit of power; selling at
        // 2.0 makes full load profitable at every step.
        let model = DispatchModel::build(&scenario(2.0)).unwrap();
        let solved = CbcBackend::new().solve(model).unwrap();

        assert_eq!(solved.status, SolveStatus::Optimal);
        let unit = &solved.units[0];
        assert_eq!(unit.on, vec![true, true]);
        for t in 0..2 {
            assert_relative_eq!(unit.power[t], 50.0, epsilon = 1e-6);
            assert_relative_eq!(unit.gas[t], 80.0, epsilon = 1e-6);
            assert_relative_eq!(unit.heat[t], 30.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn keeps_unit_off_when_unprofitable() {
        // At power_price 0.5 every committed operating point loses money,
        // and the gated intercept makes the off state exactly zero.
        let model = DispatchModel::build(&scenario(0.5)).unwrap();
        let solved = CbcBackend::new().solve(model).unwrap();

        let unit = &solved.units[0];
        assert_eq!(unit.on, vec![false, false]);
        for t in 0..2 {
            assert_relative_eq!(unit.power[t], 0.0, epsilon = 1e-6);
            assert_relative_eq!(unit.gas[t], 0.0, epsilon = 1e-6);
            assert_relative_eq!(unit.heat[t], 0.0, epsilon = 1e-6);
        }
        assert_relative_eq!(solved.objective_value, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn surfaces_infeasibility_as_a_distinct_error() {
        let mut model = DispatchModel::build(&scenario(2.0)).unwrap();
        // Contradicts the nonnegativity bound on power.
        let power = model.units[0].power[0];
        model.constraints.push(constraint!(power <= -1.0));

        let err = CbcBackend::new().solve(model).unwrap_err();
        assert_eq!(err, SolveError::Infeasible);
    }
}
