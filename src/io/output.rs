use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::DispatchTable;

/// Persists the result table: a `t` index column followed by every
/// table column, one row per time step in horizon order.
pub fn write_table(table: &DispatchTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("creating result table {}", path.display()))?;
    write_table_to(table, file).with_context(|| format!("writing result table {}", path.display()))
}

pub fn write_table_to<W: Write>(table: &DispatchTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["t".to_string()];
    header.extend(table.columns().iter().map(|c| c.name.clone()));
    wtr.write_record(&header).context("writing CSV header")?;

    for (row, t) in table.index().iter().enumerate() {
        let mut record = vec![t.to_string()];
        record.extend(table.columns().iter().map(|c| c.values[row].to_string()));
        wtr.write_record(&record)
            .with_context(|| format!("writing CSV record for t={t}"))?;
    }

    wtr.flush().context("flushing CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;

    #[test]
    fn writes_index_then_columns() {
        let table = DispatchTable::from_parts(
            vec![1, 2],
            vec![
                Column { name: "gas_price".to_string(), values: vec![1.0, 1.5] },
                Column { name: "cgu1.power".to_string(), values: vec![50.0, 0.0] },
            ],
        );

        let mut buf = Vec::new();
        write_table_to(&table, &mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();

        assert_eq!(
            written,
            "t,gas_price,cgu1.power\n1,1,50\n2,1.5,0\n"
        );
    }
}
