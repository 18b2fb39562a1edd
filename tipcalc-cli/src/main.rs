//! # tipcalc CLI
//!
//! Computes a tip and total from the command line, or runs an interactive
//! form that recalculates after every edit.
//!
//! ## Usage
//! ```bash
//! # One-shot
//! tipcalc-cli --amount 10 --tip 21 --round-up
//!
//! # Override `round-up = true` from the config file
//! tipcalc-cli --amount 10 --tip 21 --no-round-up
//!
//! # JSON breakdown
//! tipcalc-cli --amount 10 --tip 20 --json
//!
//! # Interactive form (default when no amount is given)
//! tipcalc-cli interactive
//! ```

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use tipcalc::prelude::*;

mod config_loader;
mod interactive;
mod render;

use config_loader::CliConfig;

/// Tip calculator
#[derive(Parser, Debug)]
#[command(name = "tipcalc-cli")]
#[command(version)]
#[command(about = "Calculate the tip and total for a bill", long_about = None)]
struct Args {
    /// Bill amount. Text that is not a number counts as zero.
    #[arg(long, short = 'a', allow_hyphen_values = true)]
    amount: Option<String>,

    /// Tip percentage (defaults to the configured percentage)
    #[arg(long, short = 't', allow_hyphen_values = true)]
    tip: Option<String>,

    /// Round the tip up to the next whole unit
    #[arg(long, short = 'r', default_value = "false")]
    round_up: bool,

    /// Never round, even if the config file turns rounding on
    #[arg(long, default_value = "false", conflicts_with = "round_up")]
    no_round_up: bool,

    /// Optional label shown in summaries
    #[arg(long)]
    label: Option<String>,

    /// Output the full breakdown as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Show the step-by-step calculation
    #[arg(long, default_value = "false")]
    explain: bool,

    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit the bill, tip and round-up inputs and see the result update
    Interactive,
    /// Write a sample config file to the default location
    InitConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_config = CliConfig::load();

    let _file_guard = init_tracing(args.log || cli_config.enable_logging.unwrap_or(false))?;

    let base = TipConfig::from_env().unwrap_or_else(|e| {
        warn!("Ignoring environment configuration: {}", e);
        TipConfig::default()
    });
    let config = cli_config.apply_to(base);

    match args.command {
        Some(Commands::InitConfig) => {
            let path = CliConfig::create_sample()?;
            println!("Wrote sample configuration to {}", path.display());
            Ok(())
        }
        Some(Commands::Interactive) => interactive::run_interactive(&config),
        None => match args.amount.as_deref() {
            Some(amount) => run_once(&args, amount, &config),
            None => interactive::run_interactive(&config),
        },
    }
}

/// Console logging to stderr, plus a daily rolling file under `logs/` when
/// `to_file` is set. The returned guard must live until exit.
fn init_tracing(
    to_file: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    if to_file {
        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "tipcalc.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tipcalc=debug".parse()?);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .init();

        info!("--- Tip Calculation Session Started [{}] ---", chrono::Utc::now());
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("tipcalc=warn".parse()?),
            )
            .init();
        Ok(None)
    }
}

fn run_once(args: &Args, amount: &str, config: &TipConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", one_shot_output(args, amount, config)?);
    Ok(())
}

/// Everything a one-shot run prints: JSON, or the screen plus an optional
/// step table.
fn one_shot_output(args: &Args, amount: &str, config: &TipConfig) -> Result<String, Box<dyn std::error::Error>> {
    let tip_text = match &args.tip {
        Some(tip) => tip.clone(),
        None => config.default_tip_percent.normalize().to_string(),
    };
    let round_up = !args.no_round_up && (args.round_up || config.round_up_by_default);

    let mut calculator = TipCalculator::from_text(amount, &tip_text).round_up(round_up);
    if let Some(label) = &args.label {
        calculator = calculator.with_label(label.clone());
    }
    let breakdown = calculator.calculate();

    if args.json {
        return Ok(serde_json::to_string_pretty(&breakdown)?);
    }

    let translator = Translator::new()?;
    let currency = DefaultCurrency::new()?;
    let form = TipForm {
        amount_input: amount.to_string(),
        tip_input: tip_text,
        round_up,
    };
    let mut output = render::screen(&form, &form.view(&translator, &currency));

    if args.explain {
        output.push_str("\n\n");
        output.push_str(&render::explanation(&breakdown));
    }
    Ok(output)
}
