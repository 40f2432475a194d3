use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement unit a nutrient concentration is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChemicalUnit {
    Grams,
    Milliliters,
}

impl fmt::Display for ChemicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChemicalUnit::Grams => f.write_str("Grams"),
            ChemicalUnit::Milliliters => f.write_str("Milliliters"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SafetyStatus {
    #[default]
    SafeForConsumption,
    NotSafeForConsumption,
    MoreInformationRequired,
}

impl SafetyStatus {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyStatus::SafeForConsumption)
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyStatus::SafeForConsumption => f.write_str("Yes"),
            SafetyStatus::NotSafeForConsumption => f.write_str("No"),
            SafetyStatus::MoreInformationRequired => f.write_str("More Information Required"),
        }
    }
}

/// One line item of a media formula. `value` is the amount per liter of final medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub chemical_formula: String,
    pub value: f64,
    pub description: String,
    #[serde(default)]
    pub safety_status: SafetyStatus,
    /// Only displayed when `safety_status` is not `SafeForConsumption`.
    #[serde(default)]
    pub safety_notes: String,
    pub unit: ChemicalUnit,
}

/// A named recipe. Nutrient order is the catalog definition order and is
/// preserved by every report. Concentrations are checked (finite, `>= 0`)
/// when the formula is inserted into a `FormulaCatalog`, not on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub name: String,
    pub nutrients: Vec<Nutrient>,
}

impl Formula {
    pub fn new(name: impl Into<String>, nutrients: Vec<Nutrient>) -> Self {
        Self {
            name: name.into(),
            nutrients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_labels_are_spelled_out() {
        assert_eq!(ChemicalUnit::Grams.to_string(), "Grams");
        assert_eq!(ChemicalUnit::Milliliters.to_string(), "Milliliters");
    }

    #[test]
    fn safety_labels() {
        assert_eq!(SafetyStatus::SafeForConsumption.to_string(), "Yes");
        assert_eq!(SafetyStatus::NotSafeForConsumption.to_string(), "No");
        assert_eq!(
            SafetyStatus::MoreInformationRequired.to_string(),
            "More Information Required"
        );
        assert!(SafetyStatus::default().is_safe());
    }

    #[test]
    fn safety_fields_default_when_omitted() {
        let json = r#"{
            "name": "Sodium Chloride",
            "chemical_formula": "NaCl",
            "value": 1.0,
            "description": "Table Salt",
            "unit": "Grams"
        }"#;
        let nutrient: Nutrient = serde_json::from_str(json).unwrap();
        assert_eq!(nutrient.safety_status, SafetyStatus::SafeForConsumption);
        assert!(nutrient.safety_notes.is_empty());
        assert_eq!(nutrient.unit, ChemicalUnit::Grams);
    }
}
