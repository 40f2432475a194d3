use crate::error::MediaError;
use mediaforge_schemas::formula::{ChemicalUnit, Formula};
use serde::{Deserialize, Serialize};

/// Absolute quantity of one nutrient for a given batch volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub name: String,
    pub chemical_formula: String,
    pub amount: f64,
    pub unit: ChemicalUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub formula_name: String,
    pub volume_l: f64,
    pub lines: Vec<MaterialLine>,
}

impl BillOfMaterials {
    pub fn total_for(&self, unit: ChemicalUnit) -> f64 {
        self.lines
            .iter()
            .filter(|line| line.unit == unit)
            .map(|line| line.amount)
            .sum()
    }

    pub fn to_json_pretty(&self) -> Result<String, MediaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scales every per-liter concentration in `formula` by `volume_l`.
/// The volume is not validated here; callers reject non-positive volumes.
pub fn bill_of_materials(formula: &Formula, volume_l: f64) -> BillOfMaterials {
    let lines = formula
        .nutrients
        .iter()
        .map(|nutrient| MaterialLine {
            name: nutrient.name.clone(),
            chemical_formula: nutrient.chemical_formula.clone(),
            amount: nutrient.value * volume_l,
            unit: nutrient.unit,
        })
        .collect();

    BillOfMaterials {
        formula_name: formula.name.clone(),
        volume_l,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::zarrouk;

    #[test]
    fn one_line_per_nutrient_in_catalog_order() {
        let formula = zarrouk();
        let bom = bill_of_materials(&formula, 2.5);
        assert_eq!(bom.lines.len(), formula.nutrients.len());
        for (line, nutrient) in bom.lines.iter().zip(&formula.nutrients) {
            assert_eq!(line.name, nutrient.name);
            assert_eq!(line.amount, nutrient.value * 2.5);
            assert_eq!(line.unit, nutrient.unit);
        }
    }

    #[test]
    fn unit_volume_keeps_raw_values() {
        let formula = zarrouk();
        let bom = bill_of_materials(&formula, 1.0);
        let amounts: Vec<f64> = bom.lines.iter().map(|l| l.amount).collect();
        let values: Vec<f64> = formula.nutrients.iter().map(|n| n.value).collect();
        assert_eq!(amounts, values);
    }

    #[test]
    fn totals_are_split_by_unit() {
        let bom = bill_of_materials(&zarrouk(), 10.0);
        assert_eq!(bom.total_for(ChemicalUnit::Milliliters), 10.0);
        let grams = bom.total_for(ChemicalUnit::Grams);
        assert!((grams - 221.3).abs() < 1e-9, "grams = {}", grams);
    }

    #[test]
    fn serializes_to_json() {
        let bom = bill_of_materials(&zarrouk(), 1.0);
        let value = serde_json::to_value(&bom).unwrap();
        assert_eq!(value["formula_name"], "Zarrouk's medium");
        assert_eq!(value["lines"][0]["name"], "Sodium Chloride");
        assert_eq!(value["lines"][10]["unit"], "Milliliters");

        let pretty = bom.to_json_pretty().unwrap();
        let back: BillOfMaterials = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, bom);
    }
}
