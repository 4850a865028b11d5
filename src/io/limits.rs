use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::domain::OperatingLimits;

/// One row of the limits table: `bound,power,gas,heat` with exactly one
/// `Min` and one `Max` row (case-insensitive).
#[derive(Debug, Deserialize)]
struct LimitsRow {
    #[serde(alias = "Bound")]
    bound: String,
    #[serde(alias = "Power")]
    power: f64,
    #[serde(alias = "Gas")]
    gas: f64,
    #[serde(alias = "Heat")]
    heat: f64,
}

/// Loads a unit's operating limits. Pure I/O: the invariant check
/// (`power_max > power_min` etc.) happens when the model is assembled.
pub fn load_limits(path: &Path) -> Result<OperatingLimits> {
    let file = File::open(path)
        .with_context(|| format!("opening limits table {}", path.display()))?;
    read_limits(file).with_context(|| format!("reading limits table {}", path.display()))
}

pub fn read_limits<R: Read>(reader: R) -> Result<OperatingLimits> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut min: Option<LimitsRow> = None;
    let mut max: Option<LimitsRow> = None;

    for result in reader.deserialize::<LimitsRow>() {
        let row = result.context("expected columns bound,power,gas,heat")?;
        match row.bound.to_ascii_lowercase().as_str() {
            "min" => {
                if min.replace(row).is_some() {
                    bail!("duplicate Min row");
                }
            }
            "max" => {
                if max.replace(row).is_some() {
                    bail!("duplicate Max row");
                }
            }
            other => bail!("unknown bound {other:?}, expected Min or Max"),
        }
    }

    let min = min.context("missing Min row")?;
    let max = max.context("missing Max row")?;

    Ok(OperatingLimits {
        power_min: min.power,
        power_max: max.power,
        gas_min: min.gas,
        gas_max: max.gas,
        heat_min: min.heat,
        heat_max: max.heat,
    })
}
