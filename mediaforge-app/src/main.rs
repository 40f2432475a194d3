use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use mediaforge_core::{
    analysis::bill_of_materials,
    catalog::ZARROUK,
    export,
    render::{describe_formula, scale_to_volume},
};
use std::{
    io::{self, Write},
    path::PathBuf,
};

mod config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Scales a growth-media formula to a batch volume.
#[derive(Debug, Parser)]
#[command(name = "mediaforge", version, about)]
struct Cli {
    /// The volume of liquid in liters that will be used to create the media.
    /// Note: the volume will increase with the nutrients, so choose a value
    /// smaller than the size of your bioreactor.
    #[arg(
        short = 'o',
        long,
        value_name = "LITERS",
        value_parser = parse_volume,
        required_unless_present = "list"
    )]
    volume: Option<f64>,

    /// Name of the formula to scale.
    #[arg(short, long, default_value = ZARROUK)]
    formula: String,

    /// Directory of YAML formula files added to the built-in catalog.
    #[arg(long, value_name = "DIR")]
    library: Option<PathBuf>,

    /// Print the full formula description before the amounts (text format only).
    #[arg(long)]
    describe: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the scaled amounts to a CSV file.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// List available formulas and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    /// Combinations clap cannot express on its own.
    fn validate(&self) -> Result<(), clap::Error> {
        if self.describe && self.format == OutputFormat::Json {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--describe cannot be used with --format json",
            ));
        }
        Ok(())
    }
}

fn parse_volume(raw: &str) -> Result<f64, String> {
    let volume: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !volume.is_finite() || volume <= 0.0 {
        return Err(format!("volume must be a positive number of liters, got {}", raw));
    }
    Ok(volume)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    cli.validate()?;
    let catalog = config::load_catalog(cli.library.as_ref())?;

    if cli.list {
        for name in catalog.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    let volume = cli
        .volume
        .context("A volume is required unless --list is given")?;
    let formula = catalog.get(&cli.formula)?;

    eprintln!("\n--- [Media] Scaling '{}' to {} L ---", formula.name, volume);

    match cli.format {
        OutputFormat::Text => {
            if cli.describe {
                writeln!(out, "{}", describe_formula(formula))?;
            }
            writeln!(out, "{}", scale_to_volume(formula, volume))?;
        }
        OutputFormat::Json => {
            let bom = bill_of_materials(formula, volume);
            writeln!(out, "{}", bom.to_json_pretty()?)?;
        }
    }

    if let Some(path) = &cli.csv {
        let bom = bill_of_materials(formula, volume);
        export::write_bill_csv(path, &bom)
            .with_context(|| format!("Failed to export bill of materials to {:?}", path))?;
        eprintln!("Bill of materials written to {:?}", path);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.validate() {
        err.exit();
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}
