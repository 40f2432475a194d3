use crate::{analysis::BillOfMaterials, error::MediaError};
use csv::Writer;
use mediaforge_schemas::formula::ChemicalUnit;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct BillRow<'a> {
    name: &'a str,
    chemical_formula: &'a str,
    amount: f64,
    unit: ChemicalUnit,
    volume_l: f64,
}

/// Writes the bill as CSV: a header row, then one row per nutrient.
pub fn write_bill_csv<P: AsRef<Path>>(path: P, bom: &BillOfMaterials) -> Result<(), MediaError> {
    let display = path.as_ref().display().to_string();
    let mut writer =
        Writer::from_path(path.as_ref()).map_err(|e| MediaError::CsvError(display.clone(), e))?;

    for line in &bom.lines {
        let row = BillRow {
            name: &line.name,
            chemical_formula: &line.chemical_formula,
            amount: line.amount,
            unit: line.unit,
            volume_l: bom.volume_l,
        };
        writer
            .serialize(row)
            .map_err(|e| MediaError::CsvError(display.clone(), e))?;
    }
    writer
        .flush()
        .map_err(|e| MediaError::FileIO(display, e))?;
    Ok(())
}
