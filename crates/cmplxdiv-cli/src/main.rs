mod config;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cmplxdiv_core::{Emitter, SampleGrid};

#[derive(Parser)]
#[command(
    name = "cmplxdivide",
    version,
    about = "Generate Go complex-division test data from a reference oracle",
    long_about = "Writes cmplxdivide1.go to stdout. Regenerate with:\n\n    cmplxdivide > cmplxdivide1.go"
)]
struct Cli {
    /// TOML file overriding the generated header (tool name, package)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the number of test cases instead of the table
    #[arg(long)]
    count: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the generated file.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.count {
        println!("{}", SampleGrid::LEN);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cmd_generate(cli.config.as_deref(), &mut out)
}

fn cmd_generate<W: Write>(config_path: Option<&Path>, out: &mut W) -> Result<()> {
    let config = config::load_config(config_path)?;
    config.output.validate().context("invalid [output] settings")?;
    tracing::debug!(
        tool_name = %config.output.tool_name,
        package = %config.output.package,
        "generating table"
    );

    let emitter = Emitter::new(config.output);
    emitter
        .write_table(out)
        .context("failed to write generated table")?;
    Ok(())
}
