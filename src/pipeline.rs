//! Top-level batch pipeline: load inputs, assemble the model, solve,
//! write the result table. One independent model per invocation; every
//! failure propagates up and terminates the run.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::domain::{DispatchTable, Scenario, UnitSpec};
use crate::io;
use crate::model::DispatchModel;
use crate::solver::{CbcBackend, DispatchSolution, MilpBackend};

pub fn run(cfg: &Config) -> Result<DispatchSolution> {
    let scenario = load_scenario(cfg)?;
    info!(
        steps = scenario.len(),
        units = scenario.units().len(),
        "scenario loaded"
    );

    let model = DispatchModel::build(&scenario).context("assembling dispatch model")?;

    let backend = CbcBackend::from_config(&cfg.solver);
    let solved = backend.solve(model).context("solving dispatch model")?;
    info!(
        objective = solved.objective_value,
        status = ?solved.status,
        "dispatch solved"
    );

    let table = DispatchTable::from_solution(&scenario, &solved);
    io::write_table(&table, &cfg.output.table)?;
    info!(path = %cfg.output.table.display(), "result table written");

    Ok(solved)
}

fn load_scenario(cfg: &Config) -> Result<Scenario> {
    let points = io::load_prices(&cfg.input.prices)?;

    let units = cfg
        .units
        .iter()
        .map(|unit| {
            let limits = io::load_limits(&unit.limits)
                .with_context(|| format!("loading limits for unit {}", unit.id))?;
            Ok(UnitSpec { id: unit.id.clone(), limits })
        })
        .collect::<Result<Vec<_>>>()?;

    Scenario::new(points, units).context("assembling dispatch scenario")
}
