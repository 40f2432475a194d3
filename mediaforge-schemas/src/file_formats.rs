use crate::formula::Formula;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FormulaFile {
    pub schema_version: String,
    pub formulas: Vec<Formula>,
}
