//! metalon-quote - CLI tool to price quote files and render WhatsApp text.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metalon_core::{
    generate_whatsapp_text, load_quote_file, price_quote, validate_quote_file,
};

/// Price a metalwork quote file and generate its shareable WhatsApp message.
#[derive(Parser, Debug)]
#[command(name = "metalon-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input quote JSON file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output message text file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the quote's markup factor (1-10)
    #[arg(long)]
    markup: Option<f64>,

    /// Override the quote's delivery distance, in km
    #[arg(long)]
    distance: Option<f64>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the priced quote and totals as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Load the quote file
    let mut file = load_quote_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    // Command-line overrides are stamped before validation
    if let Some(markup) = args.markup {
        file.quote.markup = markup;
    }
    if let Some(distance) = args.distance {
        file.quote.distance_km = distance;
    }

    info!(
        "Loaded {} item(s) and {} product(s)",
        file.quote.items.len(),
        file.quote.products.len()
    );

    // Validate
    let validation = validate_quote_file(&file);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Refresh derived fields and compute the totals
    let totals = price_quote(&mut file.quote, &file.config)?;

    info!(
        "Final price: {}",
        metalon_core::format_currency(totals.final_price)
    );

    // Debug output
    if args.debug {
        let dump = serde_json::json!({
            "config": &file.config,
            "quote": &file.quote,
            "totals": &totals,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    // Generate the message
    let message = generate_whatsapp_text(&file.quote, &totals);

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("txt");
        path
    });

    std::fs::write(&output_path, &message)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
