//! Text reports for a formula.
//!
//! Two views are produced: a descriptive listing of every nutrient with its
//! per-liter concentration and safety notes, and the dosing list for a batch
//! volume. Both are pure and preserve catalog order.

use crate::analysis::bill_of_materials;
use mediaforge_schemas::formula::Formula;
use std::fmt::{self, Write};

/// Code points per description line.
pub const WRAP_INTERVAL: usize = 90;
/// Tabs written after each inserted line break.
pub const WRAP_TAB_DEPTH: usize = 2;

/// Fixed-width wrap: a newline plus `tab_depth` tabs goes before every
/// `interval`-th code point. Words may be split. Never ends with a break.
pub fn insert_newlines(text: &str, interval: usize, tab_depth: usize) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / interval.max(1) * (tab_depth + 1));
    for (i, c) in text.chars().enumerate() {
        if i > 0 && interval > 0 && i % interval == 0 {
            result.push('\n');
            result.extend(std::iter::repeat('\t').take(tab_depth));
        }
        result.push(c);
    }
    result
}

pub fn describe_formula(formula: &Formula) -> String {
    Description(formula).to_string()
}

fn write_description<W: Write>(out: &mut W, formula: &Formula) -> fmt::Result {
    out.write_str("Formula:\n")?;
    for nutrient in &formula.nutrients {
        out.write_str("\tNutrient:\n")?;
        write!(out, "\t\tName: {}", nutrient.name)?;
        writeln!(out, "\tChemicalFormula: {}", nutrient.chemical_formula)?;
        writeln!(out, "\t\tAmount: {} {}/Liter", nutrient.value, nutrient.unit)?;
        writeln!(
            out,
            "\t\tDescription: {}",
            insert_newlines(&nutrient.description, WRAP_INTERVAL, WRAP_TAB_DEPTH)
        )?;
        if !nutrient.safety_status.is_safe() {
            writeln!(
                out,
                "\t\tSafe: {} {}",
                nutrient.safety_status, nutrient.safety_notes
            )?;
        }
    }
    Ok(())
}

/// Dosing list for `volume_l` liters of medium. The volume is used as given.
pub fn scale_to_volume(formula: &Formula, volume_l: f64) -> String {
    DosingList { formula, volume_l }.to_string()
}

fn write_amounts<W: Write>(out: &mut W, formula: &Formula, volume_l: f64) -> fmt::Result {
    let bom = bill_of_materials(formula, volume_l);
    out.write_str("Media Amounts:\n")?;
    for line in &bom.lines {
        out.write_str("\tNutrient:\n")?;
        write!(out, "\t\tName: {}", line.name)?;
        writeln!(out, "\t\tAmount: {} {}", line.amount, line.unit)?;
    }
    Ok(())
}

/// Wrapper so a formula can be printed with `{}`.
pub struct Description<'a>(pub &'a Formula);

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, self.0)
    }
}

/// Display form of [`scale_to_volume`].
pub struct DosingList<'a> {
    pub formula: &'a Formula,
    pub volume_l: f64,
}

impl fmt::Display for DosingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_amounts(f, self.formula, self.volume_l)
    }
}
