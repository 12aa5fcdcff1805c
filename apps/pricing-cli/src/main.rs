//! # pricing-cli
//!
//! Prices one item from the command line.
//!
//! ```bash
//! pricing-cli --price 100 --category vip --coupon EXTRA10
//! # $80.00
//!
//! pricing-cli -p 12.345 -c guest
//! # $12.34
//!
//! pricing-cli --price 100 --category regular --json
//! # { "price": "100", "category": "regular", ... "finalPrice": 9500 }
//! ```
//!
//! Results go to stdout, logs and errors to stderr.

mod args;
mod config;
mod error;
mod output;

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use pricing_core::{parse_price, quote, CoreError, Coupon, CustomerCategory};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::output::{render_error, render_quote};

fn main() -> ExitCode {
    init_tracing();

    let mut format = OutputFormat::default();
    match run(&mut format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err, format));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings, plus INFO for this binary
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pricing_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs one invocation. `format` is updated as soon as it is known so that
/// errors are reported in the format the caller asked for.
fn run(format: &mut OutputFormat) -> Result<(), CliError> {
    let config = CliConfig::load()?;
    *format = config.output;
    debug!(?config, "Configuration loaded");

    let args = match Cli::try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    if args.json {
        *format = OutputFormat::Json;
    }

    let rendered = price(&args, *format, config.verbose)?;
    println!("{rendered}");
    Ok(())
}

fn price(args: &Cli, format: OutputFormat, verbose: bool) -> Result<String, CliError> {
    let category: CustomerCategory = args.category.as_str().into();
    let coupon: Coupon = args.coupon.as_deref().into();

    let result = parse_price(&args.price)
        .map_err(CoreError::from)
        .and_then(|price| quote(price, category, coupon));

    let q = match result {
        Ok(q) => q,
        Err(err) => {
            warn!(price = %args.price, category = %args.category, error = %err, "Input rejected");
            return Err(err.into());
        }
    };

    debug!(
        price = %q.price,
        ?category,
        ?coupon,
        discount_bps = q.applied_discount.bps(),
        final_price = %q.final_price,
        "Quote computed"
    );

    render_quote(&q, format, verbose)
}
