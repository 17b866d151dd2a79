use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use flavorfix::{NormalizeOptions, NormalizeResult};

/// Normalize scalar-or-list JSON fields into lists, rewriting files in place.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON documents to normalize, processed in order.
    #[arg(default_values = ["data/vince.json", "data/nikki.json"])]
    files: Vec<PathBuf>,

    /// Top-level array holding the records.
    #[arg(long, value_name = "NAME", default_value = "favorite_foods")]
    collection: String,

    /// Per-record field to coerce into a list.
    #[arg(long, value_name = "NAME", default_value = "flavors")]
    field: String,

    /// Pretty-print the rewritten JSON.
    #[arg(long)]
    pretty: bool,

    /// Report files that need normalizing without writing them.
    #[arg(long)]
    check: bool,

    /// Continue with the remaining files after a failure.
    #[arg(long)]
    keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn build_options(cli: &Cli) -> NormalizeOptions {
    NormalizeOptions {
        collection: cli.collection.clone(),
        field: cli.field.clone(),
        pretty: cli.pretty,
        dry_run: cli.check,
    }
}

fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the per-file summary. Returns true when a change is pending in check mode.
fn report(path: &Path, result: &NormalizeResult, check: bool) -> bool {
    if !result.changed() {
        eprintln!("unchanged: {} ({} records)", path.display(), result.records);
        return false;
    }
    if check {
        eprintln!(
            "would normalize: {} (records: {})",
            path.display(),
            format_indices(&result.wrapped)
        );
        return true;
    }
    eprintln!(
        "normalized: {} ({} of {} records wrapped)",
        path.display(),
        result.wrapped.len(),
        result.records
    );
    false
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = build_options(&cli);

    let mut had_error = false;
    let mut pending = false;

    for (i, path) in cli.files.iter().enumerate() {
        let _span = tracing::info_span!("file", path = %path.display()).entered();

        match flavorfix::normalize_file(path, &options) {
            Ok(result) => pending |= report(path, &result, cli.check),
            Err(e) => {
                eprintln!("error: {}: {e}", path.display());
                if !cli.keep_going {
                    let skipped = cli.files.len() - i - 1;
                    if skipped > 0 {
                        eprintln!(
                            "info: stopping after first failure; {skipped} file(s) not processed"
                        );
                    }
                    return Err(ExitCode::from(1));
                }
                had_error = true;
            }
        }
    }

    if had_error || pending {
        Err(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
