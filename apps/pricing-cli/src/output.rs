//! Rendering quotes and errors for the terminal.

use pricing_core::{Coupon, PriceQuote};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Renders a successful quote for stdout.
pub fn render_quote(
    quote: &PriceQuote,
    format: OutputFormat,
    verbose: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
        OutputFormat::Text if verbose => Ok(breakdown(quote)),
        OutputFormat::Text => Ok(quote.final_price.to_string()),
    }
}

/// Renders an error for stderr.
pub fn render_error(err: &CliError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(&err.report())
            .unwrap_or_else(|_| format!("error: {err}")),
        OutputFormat::Text => format!("error: {err}"),
    }
}

fn breakdown(quote: &PriceQuote) -> String {
    let category = quote.category.label().unwrap_or("(none)");
    let coupon = match quote.coupon {
        Coupon::Unrecognized => "(not recognized)",
        other => other.code().unwrap_or("(none)"),
    };

    format!(
        "price:     ${}\ncategory:  {} ({}% off)\ncoupon:    {}\ndiscount:  {}%\nsavings:   {}\nfinal:     {}",
        quote.price,
        category,
        quote.base_discount.percentage(),
        coupon,
        quote.applied_discount.percentage(),
        quote.savings,
        quote.final_price,
    )
}
