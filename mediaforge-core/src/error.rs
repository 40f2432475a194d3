use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Formula '{0}' not found in catalog")]
    FormulaNotFound(String),

    #[error("Formula name must not be empty")]
    EmptyFormulaName,

    #[error("Nutrient '{nutrient}' in formula '{formula}' has invalid concentration {value}")]
    InvalidNutrient {
        formula: String,
        nutrient: String,
        value: f64,
    },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
