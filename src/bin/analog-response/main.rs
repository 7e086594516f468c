//! analog-response - evaluate a Moog or Roland filter response once
//!
//! Run with: cargo run -- --character Moog --cutoff 440

mod app;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use app::Evaluation;
use analog_response::{FilterCharacter, FilterParams};

#[derive(Parser)]
#[command(name = "analog-response")]
#[command(about = "Evaluate a closed-form analog filter response", long_about = None)]
struct Cli {
    /// Input amplitude (I)
    #[arg(short = 'i', long, default_value_t = 1.0, allow_negative_numbers = true)]
    amplitude: f64,

    /// Cutoff frequency in Hz (fc)
    #[arg(short = 'f', long = "cutoff", default_value_t = 1000.0, allow_negative_numbers = true)]
    cutoff_hz: f64,

    /// Quality factor (Q)
    #[arg(short = 'q', long, default_value_t = 0.7, allow_negative_numbers = true)]
    q: f64,

    /// Filter character: Moog or Roland
    #[arg(short = 'c', long, default_value = "Roland")]
    character: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let character: FilterCharacter = cli
        .character
        .parse()
        .wrap_err("could not select a filter character")?;

    Evaluation::new(character)
        .params(FilterParams::new(cli.amplitude, cli.cutoff_hz, cli.q))
        .run()
}
