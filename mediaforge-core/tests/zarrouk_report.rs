use mediaforge_core::{
    analysis::bill_of_materials,
    catalog::{build_named_formula, FormulaCatalog, ZARROUK},
    render::{describe_formula, scale_to_volume},
};
use mediaforge_schemas::formula::{ChemicalUnit, Formula, Nutrient, SafetyStatus};

#[test]
fn five_liter_batch_of_zarrouk() {
    let formula = build_named_formula(ZARROUK).unwrap();
    let report = scale_to_volume(&formula, 5.0);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Media Amounts:");
    // Header plus two lines per nutrient.
    assert_eq!(lines.len(), 1 + 2 * 11);
    assert_eq!(lines[2], "\t\tName: Sodium Chloride\t\tAmount: 5 Grams");
    assert_eq!(lines[6], "\t\tName: Potassium nitrate\t\tAmount: 0 Grams");
    assert_eq!(lines[8], "\t\tName: Sodium Nitrate\t\tAmount: 12.5 Grams");
    assert_eq!(lines[18], "\t\tName: Sodium Bicarbonate\t\tAmount: 84 Grams");
    assert_eq!(lines[22], "\t\tName: Vitamin A₅\t\tAmount: 5 Milliliters");
}

#[test]
fn description_wraps_long_text_with_two_tabs() {
    let formula = build_named_formula(ZARROUK).unwrap();
    let text = describe_formula(&formula);

    let ferrous = &formula.nutrients[4];
    let len = ferrous.description.chars().count();
    assert!(len > 180);

    let start = text.find("\t\tDescription: Iron(2+)").unwrap();
    let block = &text[start..];
    let end = block.find("\n\tNutrient:").unwrap();
    let block = &block[..end];
    assert_eq!(block.matches("\n\t\t").count(), (len - 1) / 90);

    assert!(text.contains("\t\tSafe: More Information Required Safe dose is 700 - 3500 mg"));
}

#[test]
fn library_formulas_render_without_renderer_changes() {
    let mut catalog = FormulaCatalog::builtin();
    catalog
        .insert(Formula::new(
            "Sea water stock",
            vec![Nutrient {
                name: "Sodium Chloride".to_string(),
                chemical_formula: "NaCl".to_string(),
                value: 35.0,
                description: "Sea salt".to_string(),
                safety_status: SafetyStatus::NotSafeForConsumption,
                safety_notes: "Do not drink".to_string(),
                unit: ChemicalUnit::Grams,
            }],
        ))
        .unwrap();

    let formula = catalog.get("sea water stock").unwrap();
    assert!(describe_formula(formula).contains("\t\tSafe: No Do not drink\n"));
    assert!(scale_to_volume(formula, 0.5).contains("Amount: 17.5 Grams"));
    assert_eq!(bill_of_materials(formula, 0.5).total_for(ChemicalUnit::Grams), 17.5);
}
