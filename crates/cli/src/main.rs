//! # q16 CLI
//!
//! Command-line front end for the q16-math kernels: the `e^x` demo, one-off
//! evaluation, accuracy reports, a timing sweep and table regeneration.
//!
//! Results go to stdout; diagnostics go to stderr through `log`.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use q16_math::{Kernel, NegExpLookup};

use commands::{Function, Preset, ReportFunction};

/// Fixed-point (Q16.16) exponential and logarithm kernels
#[derive(Parser)]
#[command(name = "q16")]
#[command(about = "Evaluate and measure Q16.16 fixed-point exp/log kernels")]
#[command(version)]
struct Cli {
    /// Kernel configuration preset
    #[arg(long, value_enum, global = true, default_value = "standard")]
    config: Preset,

    /// Use the nearest table entry for negative exponents instead of
    /// interpolating
    #[arg(long, global = true)]
    nearest: bool,

    /// Log filter, e.g. `info` or `q16=debug` (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute e^x for one decimal input (argument or standard input)
    Exp {
        /// Input value; read from standard input when omitted
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Evaluate one function and compare it with the f64 result
    Eval {
        /// Function to evaluate
        #[arg(value_enum)]
        function: Function,

        /// Input value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print an accuracy table over the reference input vectors
    Report {
        /// Function to report on
        #[arg(short, long, value_enum, default_value = "ln")]
        function: ReportFunction,
    },

    /// Time the logarithm and exponential sweeps
    Bench {
        /// Number of passes over each sweep
        #[arg(short, long, default_value = "1000")]
        iterations: u32,
    },

    /// Regenerate the exponential lookup tables as Rust source
    Tables,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level)?;

    let mut config = cli.config.kernel_config();
    if cli.nearest {
        config = config.with_neg_exp(NegExpLookup::Nearest);
    }
    log::debug!("kernel configuration: {:?}", config);
    let kernel = Kernel::new(config);

    match cli.command {
        Commands::Exp { value } => commands::demo::execute(&kernel, value.as_deref()),
        Commands::Eval { function, value } => commands::eval::execute(&kernel, function, &value),
        Commands::Report { function } => commands::report::execute(&kernel, function),
        Commands::Bench { iterations } => commands::bench::execute(&kernel, iterations),
        Commands::Tables => commands::tables::execute(),
    }
}

fn init_logging(spec: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(spec)
        .with_context(|| format!("Invalid log specification: {}", spec))?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")
}
