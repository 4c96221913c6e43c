use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rxrun::logging::init_tracing;
use rxrun::{build_execution_plan, LocalProbe, StepConfig};

/// Assemble the command line of a Ranorex test run from a build-step
/// configuration. The test executable is never launched.
#[derive(Parser)]
#[command(name = "rxrun", version)]
struct Cli {
    /// Step configuration file (default: <config dir>/rxrun/step.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Job workspace that relative executable paths are resolved against
    #[arg(long, value_name = "DIR")]
    job_root: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a run summary before the invocation
    #[arg(long)]
    summarize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.config.unwrap_or_else(StepConfig::default_path);
    let mut config = StepConfig::load(&path)?;
    config.summarize |= cli.summarize;
    tracing::debug!(path = %path.display(), "Loaded step configuration");

    let plan = build_execution_plan(&config, &cli.job_root, &LocalProbe)
        .context("Cannot assemble test invocation")?;

    match cli.format {
        OutputFormat::Text => {
            if let Some(summary) = &plan.summary {
                println!("*************Start of Ranorex Summary*************");
                print!("{}", summary);
                println!("*************End of Ranorex Summary*************");
            }
            for warning in &plan.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("{}", plan.invocation);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("Cannot serialize plan")?;
            println!("{}", json);
        }
    }
    Ok(())
}
