//! Command-line front end for the generator.

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use glgen_core::{GenerateConfig, generate};

#[derive(Parser, Debug)]
#[command(
    name = "glgen",
    version,
    about = "Generate the Gl.java pass-through class from JOGL javadoc pages"
)]
struct Cli {
    /// Javadoc pages to scan, in emission order
    #[arg(value_name = "PAGE", conflicts_with = "config")]
    inputs: Vec<PathBuf>,

    /// Output Java file
    #[arg(short, long, default_value = "Gl.java", value_name = "FILE")]
    output: PathBuf,

    /// JSON config file supplying inputs and output
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    ExitCode::from(run(Cli::parse()))
}

fn run(cli: Cli) -> u8 {
    let (inputs, output) = match cli.config {
        Some(path) => match GenerateConfig::load(&path) {
            Ok(config) => (config.inputs, config.output),
            Err(err) => {
                eprintln!("{} {err}", style("error:").red().bold());
                return 1;
            }
        },
        None => {
            if cli.inputs.is_empty() {
                eprintln!(
                    "{} no input pages given (pass PAGE arguments or --config)",
                    style("error:").red().bold()
                );
                return 2;
            }
            (cli.inputs, cli.output)
        }
    };

    match generate(&inputs, &output) {
        Ok(report) => {
            println!(
                "{} {} ({} pages, {} constants, {} functions, {} duplicates skipped)",
                style("generated").green().bold(),
                output.display(),
                report.documents,
                report.constants,
                report.functions,
                report.duplicates,
            );
            0
        }
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            1
        }
    }
}

// GLGEN_LOG controls verbosity: a plain level ("debug") or a full tracing
// filter spec ("glgen_core=debug,glgen=info").
fn init_tracing() {
    let filter = match std::env::var("GLGEN_LOG") {
        Ok(level) if is_plain_level(&level) => format!("glgen={level},glgen_core={level}"),
        Ok(spec) => spec,
        Err(_) => "glgen=info,glgen_core=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
