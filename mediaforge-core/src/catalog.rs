use crate::error::MediaError;
use mediaforge_schemas::{
    file_formats::FormulaFile,
    formula::{ChemicalUnit, Formula, Nutrient, SafetyStatus},
};
use std::{fs, path::Path};

pub const ZARROUK: &str = "Zarrouk's medium";

/// An ordered set of named formulas. Built-in recipes come first, formulas
/// loaded later are appended in load order.
#[derive(Debug, Clone, Default)]
pub struct FormulaCatalog {
    formulas: Vec<Formula>,
}

impl FormulaCatalog {
    pub fn builtin() -> Self {
        Self {
            formulas: vec![zarrouk()],
        }
    }

    /// Adds a formula, replacing any existing formula with the same name.
    pub fn insert(&mut self, formula: Formula) -> Result<(), MediaError> {
        validate(&formula)?;
        match self.formulas.iter_mut().find(|f| f.name == formula.name) {
            Some(existing) => *existing = formula,
            None => self.formulas.push(formula),
        }
        Ok(())
    }

    /// Exact name match first, then ASCII case-insensitive.
    pub fn get(&self, name: &str) -> Result<&Formula, MediaError> {
        self.formulas
            .iter()
            .find(|f| f.name == name)
            .or_else(|| self.formulas.iter().find(|f| f.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| MediaError::FormulaNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formulas.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Loads a YAML formula file and inserts every formula in it.
    /// Returns the number of formulas read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, MediaError> {
        let display = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| MediaError::FileIO(display.clone(), e))?;
        let file: FormulaFile = serde_yaml::from_str(&content)
            .map_err(|e| MediaError::YamlParsing(display, e))?;

        let count = file.formulas.len();
        for formula in file.formulas {
            self.insert(formula)?;
        }
        Ok(count)
    }
}

fn validate(formula: &Formula) -> Result<(), MediaError> {
    if formula.name.trim().is_empty() {
        return Err(MediaError::EmptyFormulaName);
    }
    for nutrient in &formula.nutrients {
        if !nutrient.value.is_finite() || nutrient.value < 0.0 {
            return Err(MediaError::InvalidNutrient {
                formula: formula.name.clone(),
                nutrient: nutrient.name.clone(),
                value: nutrient.value,
            });
        }
    }
    Ok(())
}

/// Looks up a built-in recipe by name.
pub fn build_named_formula(name: &str) -> Result<Formula, MediaError> {
    FormulaCatalog::builtin().get(name).cloned()
}

fn nutrient(
    name: &str,
    chemical_formula: &str,
    value: f64,
    description: &str,
    safety_status: SafetyStatus,
    safety_notes: &str,
    unit: ChemicalUnit,
) -> Nutrient {
    Nutrient {
        name: name.to_string(),
        chemical_formula: chemical_formula.to_string(),
        value,
        description: description.to_string(),
        safety_status,
        safety_notes: safety_notes.to_string(),
        unit,
    }
}

/// Zarrouk's medium for Spirulina (Arthrospira) cultivation, per liter.
pub fn zarrouk() -> Formula {
    use ChemicalUnit::*;
    use SafetyStatus::*;

    Formula::new(
        ZARROUK,
        vec![
            nutrient(
                "Sodium Chloride",
                "NaCl",
                1.0,
                "Table Salt",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Calcium chloride dihydrate",
                "CaCl₂.2H₂O",
                0.04,
                "Calcium chloride dihydrate is a hydrate that is the dihydrate form of calcium chloride. It is a hydrate, a calcium salt and an inorganic chloride. It contains a calcium dichloride.",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Potassium nitrate",
                "KNO₃",
                0.0,
                "Potassium nitrate (KNO3) is a soluble source of two major essential plant nutrients. It is commonly used as a fertilizer for high-value crops that benefit from nitrate (NO3-) nutrition and a source of potassium (K+) free of chloride (Cl-). Not used in Zarrouk's media",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Sodium Nitrate",
                "NaNO₃",
                2.5,
                "Sodium nitrate is a white deliquescent solid very soluble in water. It is a readily available source of the nitrate anion (NO3−), which is useful in several reactions carried out on industrial scales for the production of fertilizers, pyrotechnics, smoke bombs and other explosives, glass and pottery enamels, food preservatives (esp. meats), and solid rocket propellant.",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Ferrous sulfate heptahydrate",
                "FeSO₄.7H₂O",
                0.01,
                "Iron(2+) sulfate heptahydrate is a hydrate that is the heptahydrate form of iron(2+) sulfate. It is used as a source of iron in the treatment of iron-deficiency anaemia (generally in liquid-dosage treatments; for solid-dosage treatments, the monohydrate is normally used). It has a role as a nutraceutical, an anti-anaemic agent and a reducing agent. It is a hydrate and an iron molecular entity. It contains an iron(2+) sulfate (anhydrous).",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Ethylenediaminetetraacetic acid",
                "EDTA(Na)",
                0.08,
                "EDTA is widely used in industry. It also has applications in food preservation, medicine, cosmetics, water softening, in laboratories, and other fields.",
                MoreInformationRequired,
                "Safe dose is 700 - 3500 mg intravenous every 12 hours  https://web.archive.org/web/20070504081119/http://www.umm.edu/altmed/articles/ethylenediaminetetraacetic-acid-000302.htm",
                Grams,
            ),
            nutrient(
                "Potassium sulfate",
                "K₂SO₄",
                1.0,
                "Potassium sulfate (US) or potassium sulphate (UK), also called sulphate of potash (SOP), arcanite, or archaically potash of sulfur, is the inorganic compound with formula K2SO4, a white water-soluble solid. It is commonly used in fertilizers, providing both potassium and sulfur.",
                SafeForConsumption,
                "Although ingestion is not thought to produce harmful effects, the material may still be damaging to the health of the individual following ingestion, especially where pre-existing organ (e.g. liver, kidney) damage is evident. Present definitions of harmful or toxic substances are generally based on doses producing mortality (death) rather than those producing morbidity (disease, ill-health). Gastrointestinal tract discomfort may produce nausea and vomiting. In an occupational setting however, ingestion of insignificant quantities is not thought to be cause for concern.",
                Grams,
            ),
            nutrient(
                "Magnesium sulfate heptahydrate (Epsom Salt)",
                "MgSO₄.7H₂O",
                0.2,
                "Magnesium sulfate heptahydrate is a hydrate that is the heptahydrate form of magnesium sulfate. It has a role as a laxative and a cathartic. It is a magnesium salt and a hydrate. It contains a magnesium sulfate.",
                SafeForConsumption,
                "Mild laxitive and pain reliever",
                Grams,
            ),
            nutrient(
                "Sodium Bicarbonate",
                "NaHCO₃",
                16.8,
                "Sodium bicarbonate appears as odorless white crystalline powder or lumps. Slightly alkaline (bitter) taste. pH (of freshly prepared 0.1 molar aqueous solution): 8.3 at 77 °F. pH (of saturated solution): 8-9. Non-toxic.",
                SafeForConsumption,
                "",
                Grams,
            ),
            nutrient(
                "Potassium Phosphate, Dibasic",
                "K₂HPO₄",
                0.5,
                "Dipotassium hydrogen phosphate is a potassium salt that is the dipotassium salt of phosphoric acid. It has a role as a buffer. It is a potassium salt and an inorganic phosphate. Dipotassium phosphate (K2HPO4) is a highly water-soluble salt often used as a fertilizer and food additive as a source of phosphorus and potassium as well as a buffering agent. Potassium Phosphate, Dibasic is the dipotassium form of phosphoric acid, that can be used as an electrolyte replenisher and with radio-protective activity. Upon oral administration, potassium phosphate is able to block the uptake of the radioactive isotope phosphorus P 32 (P-32).",
                SafeForConsumption,
                "Used as an electorlyte replenisher",
                Grams,
            ),
            nutrient(
                "Vitamin A₅",
                "H₃BO₃,MnCl₂.4H₂O,ZnSO₄.4H2ONa₂MoO₄,CuSO₄.5H₂O",
                1.0,
                "A new vitamin concept, termed vitamin A5, an umbrella term for vitamin A derivatives being direct nutritional precursors for 9-cis-13,14-dihydroretinoic acid and further induction of RXR-signaling, was recently identified with global importance for mental health and healthy brain and nerve functions. Dietary recommendations in the range of 1.1 (0.5–1.8) mg vitamin A5 / day were suggested by an international expert consortium.",
                SafeForConsumption,
                "",
                Milliliters,
            ),
        ],
    )
}
