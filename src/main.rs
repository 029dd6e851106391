use std::{path::PathBuf, process::ExitCode};

use calc::{
    batch::{self, InputSource},
    config::{BatchOptions, DEFAULT_MAX_DEPTH, DEFAULT_TAG, EvalOptions, current_user},
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// calc evaluates one arithmetic expression per text file and writes the
/// result, or `ERROR:<position>`, to a matching output file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Process every `*.txt` file in this directory (non-recursive).
    #[arg(short, long, value_name = "DIR", conflicts_with = "input")]
    dir: Option<PathBuf>,

    /// Directory for result files. Defaults to `<input>_<user>_<tag>`.
    #[arg(short, long, value_name = "OUTDIR", env = "CALC_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Tag used in derived output names.
    #[arg(long, env = "CALC_TAG", default_value = DEFAULT_TAG)]
    tag: String,

    /// Maximum nesting of parentheses, signs and `**` chains.
    #[arg(long, env = "CALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log every evaluated file.
    #[arg(short, long, env = "CALC_VERBOSE")]
    verbose: bool,

    /// A single expression file.
    #[arg(required_unless_present = "dir")]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match (args.dir, args.input) {
        (Some(dir), _) => InputSource::Dir(dir),
        (None, Some(file)) => InputSource::File(file),
        (None, None) => {
            error!("{}", calc::error::BatchError::NoInputs);
            return ExitCode::from(2);
        },
    };

    let options = BatchOptions { output_dir: args.output_dir,
                                 tag:        args.tag,
                                 user:       current_user(),
                                 eval:       EvalOptions { max_depth: args.max_depth }, };

    let inputs = match batch::resolve_inputs(&source) {
        Ok(inputs) => inputs,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        },
    };
    let output_dir = batch::output_dir_for(&source, &options);

    let reports = match batch::run(&inputs, &output_dir, &options) {
        Ok(reports) => reports,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for report in reports {
        if let Err(e) = report {
            error!("{e}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `error`,
/// or `debug` when verbose.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
