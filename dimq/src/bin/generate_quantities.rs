/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::{env, process};

use clap::Parser;
use log::{debug, info};
use thiserror::Error;

use dimq::{generate_source, QuantitySpec, UnitError};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Quantity system generator
///
/// Reads a JSON quantity spec and emits a Rust module defining the
/// system's base dimensions and quantity factories.
struct Args {
    /// The JSON quantity spec.
    #[clap(long, required_unless_present = "schema")]
    spec: Option<PathBuf>,
    /// Output file (default: stdout).
    #[clap(long, short)]
    out: Option<PathBuf>,
    /// Compare the output file with the generated source instead of
    /// writing it. Fails if the file is out of date.
    #[clap(long, requires = "out")]
    check: bool,
    /// Regeneration hint for the header, overriding the spec's.
    #[clap(long)]
    regen_hint: Option<String>,
    /// Print the JSON schema of the spec format and exit.
    #[clap(long)]
    schema: bool,
    /// Increase log verbosity (repeatable).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Error, Debug)]
enum Error {
    #[error("failed to read {0}: {1}")]
    Read(PathBuf, io::Error),
    #[error("failed to write {0}: {1}")]
    Write(PathBuf, io::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Unit(#[from] UnitError),
    #[cfg(feature = "schemars")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} is out of date")]
    Stale(PathBuf),
    #[error("missing --spec argument")]
    NoSpec,
    #[cfg(not(feature = "schemars"))]
    #[error("schema output requires the \"schemars\" feature")]
    NoSchema,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Info,
                2 => simplelog::LevelFilter::Debug,
                3.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if args.schema {
        return print_schema();
    }

    let path = args.spec.as_ref().ok_or(Error::NoSpec)?;
    info!("Reading quantity spec from {}", path.display());
    let input =
        fs::read_to_string(path).map_err(|e| Error::Read(path.clone(), e))?;

    let mut spec = QuantitySpec::from_json(&input)?;
    if let Some(hint) = &args.regen_hint {
        debug!("Overriding regeneration hint: {}", hint);
        spec.regen_hint = Some(hint.clone());
    }

    let source = generate_source(&spec)?;

    match (&args.out, args.check) {
        (Some(out), true) => {
            let current = fs::read_to_string(out)
                .map_err(|e| Error::Read(out.clone(), e))?;
            if current != source {
                return Err(Error::Stale(out.clone()));
            }
            info!("{} is up to date", out.display());
        }
        (Some(out), false) => {
            fs::write(out, &source)
                .map_err(|e| Error::Write(out.clone(), e))?;
            info!("Wrote {} to {}", spec.name, out.display());
        }
        (None, _) => {
            io::stdout().write_all(source.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(feature = "schemars")]
fn print_schema() -> Result<(), Error> {
    let schema = schemars::schema_for!(QuantitySpec);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(not(feature = "schemars"))]
fn print_schema() -> Result<(), Error> {
    Err(Error::NoSchema)
}
