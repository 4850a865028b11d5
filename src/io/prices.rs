use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::PricePoint;

/// Loads the price table: header `t,gas_price,power_price`, one row per
/// time step. Row order defines the horizon order.
pub fn load_prices(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path)
        .with_context(|| format!("opening price table {}", path.display()))?;
    read_prices(file).with_context(|| format!("reading price table {}", path.display()))
}

pub fn read_prices<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for (i, result) in reader.deserialize::<PricePoint>().enumerate() {
        let point = result
            .with_context(|| format!("row {}: expected columns t,gas_price,power_price", i + 1))?;
        points.push(point);
    }
    Ok(points)
}
