//! RISK-XVII virtual machine CLI.
//!
//! This binary runs one memory image to completion. It performs:
//! 1. **Argument parsing:** Image path plus optional config file, tracing, and statistics flags.
//! 2. **Logging setup:** A stderr `tracing` subscriber filtered by `RUST_LOG`.
//! 3. **Execution:** Loads the image, runs the simulator on stdin/stdout, and maps the
//!    outcome to the process exit status (0 on a clean finish, 1 otherwise).

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use riskxvii_core::common::SimError;
use riskxvii_core::config::Config;
use riskxvii_core::sim::simulator::TRAP_EXIT_CODE;
use riskxvii_core::sim::{Simulator, load_image};
use riskxvii_core::soc::StdConsole;

/// Exit status for usage, configuration, and image errors.
const FAILURE_EXIT_CODE: i32 = 1;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Log filter applied by `--trace`.
const TRACE_FILTER: &str = "warn,riskxvii_core=trace";

#[derive(Parser, Debug)]
#[command(
    name = "vm_riskxvii",
    version,
    about = "RISK-XVII instruction-set simulator",
    long_about = "Run a 2048-byte RISK-XVII memory image.\n\nThe first 1024 bytes are the instruction store and the remaining 1024 bytes the data region. Program output goes to stdout; logs and statistics go to stderr.\n\nExamples:\n  vm_riskxvii program.mi\n  vm_riskxvii --trace --stats program.mi\n  vm_riskxvii --config vm.json program.mi"
)]
struct Cli {
    /// Memory image to execute (exactly 2048 bytes).
    image: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print run statistics to stderr at exit.
    #[arg(long)]
    stats: bool,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return FAILURE_EXIT_CODE;
        }
    };

    init_logging(cli.trace);

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return FAILURE_EXIT_CODE;
            }
        },
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    config.general.print_stats |= cli.stats;
    debug!(?config, "configuration resolved");

    let image = match load_image(&cli.image) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("{e}");
            return FAILURE_EXIT_CODE;
        }
    };

    let mut sim = Simulator::new(image, StdConsole::new(), &config);
    match sim.run() {
        Ok(outcome) => outcome.exit_code(),
        Err(SimError::Trap(trap)) => {
            if let Err(e) = sim.report_trap(&trap) {
                eprintln!("failed to write trap report: {e}");
            }
            TRAP_EXIT_CODE
        }
        Err(e) => {
            eprintln!("{e}");
            FAILURE_EXIT_CODE
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--trace` selects instruction
/// tracing for the core crate and everything else logs warnings only.
fn init_logging(trace: bool) {
    let fallback = if trace { TRACE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
