//! Command-line arguments.

use clap::Parser;

use crate::error::CliError;

const ENV_HELP: &str = "\
Environment:
  PRICING_OUTPUT   text | json (default: text)
  PRICING_VERBOSE  true | false (default: false)
  RUST_LOG         log filter (default: warn,pricing_cli=info)";

/// Price one item after customer and coupon discounts.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pricing-cli", version, after_help = ENV_HELP)]
pub struct Cli {
    /// Price before discount, e.g. 100, 19.99 or 12.345. Kept as text so
    /// the calculator's own parser reports malformed amounts.
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,

    /// Customer category: regular, vip, employee (others get no discount)
    #[arg(short, long)]
    pub category: String,

    /// Coupon code: EXTRA10, HALFPRICE (others have no effect)
    #[arg(short = 'k', long)]
    pub coupon: Option<String>,

    /// Print the full quote as JSON
    #[arg(long)]
    pub json: bool,
}

/// Converts clap's multi-line report into a one-line usage message.
impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        CliError::usage(first_line.trim_start_matches("error: ").trim())
    }
}
