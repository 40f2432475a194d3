use anyhow::{Context, Result};
use mediaforge_core::catalog::FormulaCatalog;
use std::{fs, path::Path};

/// Builds the formula catalog: built-in recipes first, then every
/// YAML formula file found in `library_dir`, in file name order.
pub fn load_catalog<P: AsRef<Path>>(library_dir: Option<P>) -> Result<FormulaCatalog> {
    let mut catalog = FormulaCatalog::builtin();
    let Some(dir) = library_dir else {
        return Ok(catalog);
    };

    eprintln!("Loading formula library from {:?}...", dir.as_ref());
    for path in yaml_files(dir.as_ref())? {
        let count = catalog
            .load_file(&path)
            .with_context(|| format!("Failed to load formulas from {:?}", path))?;
        eprintln!("  {} formula(s) from {:?}", count, path.file_name().unwrap_or_default());
    }
    eprintln!("Formula library loaded: {} formula(s) available.", catalog.len());
    Ok(catalog)
}

fn yaml_files(dir_path: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
