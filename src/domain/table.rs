use super::{Scenario, TimeStep};
use crate::solver::DispatchSolution;

/// One named series of the output table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Flat result table keyed by time step: the price parameters first,
/// then one column per (unit, variable) pair in declaration order.
///
/// Derived from a solved model; recomputable, never authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchTable {
    index: Vec<TimeStep>,
    columns: Vec<Column>,
}

impl DispatchTable {
    pub fn from_solution(scenario: &Scenario, solution: &DispatchSolution) -> Self {
        let mut columns = Vec::with_capacity(2 + 4 * solution.units.len());
        columns.push(Column {
            name: "gas_price".to_string(),
            values: scenario.gas_price().to_vec(),
        });
        columns.push(Column {
            name: "power_price".to_string(),
            values: scenario.power_price().to_vec(),
        });

        for unit in &solution.units {
            columns.push(Column {
                name: format!("{}.on", unit.id),
                values: unit.on.iter().map(|&on| if on { 1.0 } else { 0.0 }).collect(),
            });
            columns.push(Column {
                name: format!("{}.gas", unit.id),
                values: unit.gas.clone(),
            });
            columns.push(Column {
                name: format!("{}.power", unit.id),
                values: unit.power.clone(),
            });
            columns.push(Column {
                name: format!("{}.heat", unit.id),
                values: unit.heat.clone(),
            });
        }

        Self { index: scenario.steps().to_vec(), columns }
    }

    /// Assembles a table directly from an index and columns. Callers are
    /// responsible for keeping the column lengths equal to the index length.
    pub fn from_parts(index: Vec<TimeStep>, columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == index.len()));
        Self { index, columns }
    }

    pub fn index(&self) -> &[TimeStep] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OperatingLimits, PricePoint, UnitSpec};
    use crate::solver::{SolveStatus, UnitSchedule};

    fn scenario() -> Scenario {
        let limits = OperatingLimits {
            power_min: 10.0,
            power_max: 50.0,
            gas_min: 20.0,
            gas_max: 80.0,
            heat_min: 5.0,
            heat_max: 30.0,
        };
        Scenario::new(
            vec![
                PricePoint { t: 1, gas_price: 1.0, power_price: 2.0 },
                PricePoint { t: 2, gas_price: 1.5, power_price: 2.5 },
            ],
            vec![UnitSpec { id: "cgu1".to_string(), limits }],
        )
        .unwrap()
    }

    fn solution() -> DispatchSolution {
        DispatchSolution {
            status: SolveStatus::Optimal,
            objective_value: -40.0,
            units: vec![UnitSchedule {
                id: "cgu1".to_string(),
                on: vec![true, false],
                gas: vec![80.0, 0.0],
                power: vec![50.0, 0.0],
                heat: vec![30.0, 0.0],
            }],
        }
    }

    #[test]
    fn one_row_per_step_one_column_per_series() {
        let table = DispatchTable::from_solution(&scenario(), &solution());
        assert_eq!(table.n_rows(), 2);
        // 2 parameters + 4 variables for the single unit
        assert_eq!(table.n_columns(), 6);
        assert_eq!(table.index(), &[1, 2]);
    }

    #[test]
    fn parameters_come_before_unit_columns() {
        let table = DispatchTable::from_solution(&scenario(), &solution());
        let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["gas_price", "power_price", "cgu1.on", "cgu1.gas", "cgu1.power", "cgu1.heat"]
        );
    }

    #[test]
    fn commitment_is_written_as_zero_or_one() {
        let table = DispatchTable::from_solution(&scenario(), &solution());
        assert_eq!(table.column("cgu1.on").unwrap().values, vec![1.0, 0.0]);
    }
}
