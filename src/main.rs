/*!
# bom-fix CLI

Strips UTF-8 byte-order-marks from a list of text files.
*/

use anyhow::Result;
use bom_fix::cli_common::{self, CommonArgs, OutputWriter};
use bom_fix::configuration::{TargetList, WriteMode};
use bom_fix::normalizer::{self, NormalizeOptions};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bom-fix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strips UTF-8 byte-order-marks from text files",
    long_about = "Rewrites each file as UTF-8 without a BOM. Without PATHS or --targets \
                  the built-in list of front-end sources is processed."
)]
struct Cli {
    /// Files to normalize
    paths: Vec<PathBuf>,

    /// TOML or YAML file listing the files to normalize
    #[arg(short, long)]
    targets: Option<PathBuf>,

    /// Write through a temp file and rename, so a failed write never truncates
    #[arg(long)]
    atomic: bool,

    #[clap(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let colors = cli.common.use_colors();

    if let Err(e) = cli_common::init_logging(cli.common.log_level()) {
        cli_common::print_warning(&e.to_string(), colors);
    }

    match execute(&cli, colors) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli_common::print_error(&format!("{:#}", e), colors);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, colors: bool) -> Result<()> {
    let (targets, write_mode) = resolve_targets(cli.targets.as_deref(), &cli.paths, cli.atomic)?;
    let options = NormalizeOptions::default().with_write_mode(write_mode);

    let mut writer = OutputWriter::stdout(cli.common.format)
        .with_colors(colors)
        .with_pretty(true);

    let report = normalizer::run_with(&targets, &options, |outcome| writer.write_outcome(outcome))?;
    writer.write_summary(&report)?;

    // Per-file failures are reported above and do not change the exit code.
    Ok(())
}

/// Targets file entries first, then positional paths, else the built-in list.
fn resolve_targets(
    targets_file: Option<&Path>,
    paths: &[PathBuf],
    atomic: bool,
) -> Result<(TargetList, WriteMode)> {
    let (mut targets, file_mode) = match targets_file {
        Some(file) => TargetList::load_from_file(file)?,
        None => (TargetList::default(), None),
    };
    targets.extend(paths.iter().cloned());

    if targets.is_empty() {
        tracing::debug!("No targets supplied, using built-in list");
        targets = TargetList::default_targets();
    }

    let write_mode = if atomic {
        WriteMode::Atomic
    } else {
        file_mode.unwrap_or_default()
    };
    Ok((targets, write_mode))
}
