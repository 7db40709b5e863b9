use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use payoff_lab::engine::curve::{payoff_curve, DEFAULT_CHART_POINTS};
use payoff_lab::engine::summary::summarize;
use payoff_lab::engine::types::Strategy;
use payoff_lab::engine::validation::validate_strategy;
use payoff_lab::share::csv::{csv_filename, export_csv};
use payoff_lab::share::link::{decode_share_token, share_link};
use payoff_lab::strategies::{all_presets, find_preset};

#[derive(Parser)]
#[command(name = "payoff-lab", about = "Multi-leg options payoff calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the strategy presets
    Presets,
    /// Print net premium, max profit/loss and breakevens for a strategy
    Summary {
        /// Share token (`v1.…`) as produced by `share`
        #[arg(long, conflicts_with = "preset")]
        share: Option<String>,
        /// Preset name, e.g. `bull_call_spread`
        #[arg(long)]
        preset: Option<String>,
        /// Underlying price used to instantiate a preset
        #[arg(long, default_value_t = 100.0)]
        underlying: f64,
        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a shareable link for a preset strategy
    Share {
        #[arg(long)]
        preset: String,
        #[arg(long, default_value_t = 100.0)]
        underlying: f64,
        /// Base URL the token is appended to
        #[arg(long, default_value = "https://example.com/tools/payoff")]
        base_url: String,
    },
    /// Print the profit/loss chart series as `price<TAB>payoff` lines
    Curve {
        /// Share token (`v1.…`) as produced by `share`
        #[arg(long, conflicts_with = "preset")]
        share: Option<String>,
        /// Preset name, e.g. `bull_call_spread`
        #[arg(long)]
        preset: Option<String>,
        /// Underlying price used to instantiate a preset
        #[arg(long, default_value_t = 100.0)]
        underlying: f64,
        /// Number of samples across the chart window
        #[arg(long, default_value_t = DEFAULT_CHART_POINTS)]
        points: usize,
    },
    /// Export a shared strategy as CSV
    ExportCsv {
        #[arg(long)]
        share: String,
        /// Output path; defaults to a name derived from the strategy name
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Presets => {
            for p in all_presets() {
                println!("{:<20} {:<10} {}", p.name, p.category, p.description);
            }
        }
        Command::Summary {
            share,
            preset,
            underlying,
            json,
        } => {
            let strategy = resolve_strategy(share.as_deref(), preset.as_deref(), underlying)?;
            print_summary(&strategy, json)?;
        }
        Command::Share {
            preset,
            underlying,
            base_url,
        } => {
            let Some(def) = find_preset(&preset) else {
                bail!("unknown preset '{preset}'");
            };
            println!("{}", share_link(&base_url, &def.instantiate(underlying)));
        }
        Command::Curve {
            share,
            preset,
            underlying,
            points,
        } => {
            let strategy = resolve_strategy(share.as_deref(), preset.as_deref(), underlying)?;
            for point in payoff_curve(&strategy, points) {
                println!("{}\t{}", point.price, point.payoff);
            }
        }
        Command::ExportCsv { share, out } => {
            let Some(strategy) = decode_share_token(&share) else {
                bail!("share token is not valid");
            };
            let csv = export_csv(&strategy)?;
            let path = out.unwrap_or_else(|| PathBuf::from(csv_filename(&strategy.name)));
            std::fs::write(&path, csv).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn resolve_strategy(share: Option<&str>, preset: Option<&str>, underlying: f64) -> Result<Strategy> {
    match (share, preset) {
        (Some(token), _) => decode_share_token(token).context("share token is not valid"),
        (None, Some(name)) => find_preset(name)
            .map(|def| def.instantiate(underlying))
            .with_context(|| format!("unknown preset '{name}'")),
        (None, None) => bail!("pass --share or --preset"),
    }
}

fn print_summary(strategy: &Strategy, json: bool) -> Result<()> {
    let summary = summarize(strategy);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} @ {}", strategy.name, strategy.underlying_price);
    for leg in &strategy.legs {
        println!(
            "  {:<5} {:<4} strike {:>9.2}  premium {:>7.2}  x{}",
            leg.side, leg.option_type, leg.strike, leg.premium, leg.quantity
        );
    }
    let issues = validate_strategy(strategy);
    if !issues.is_empty() {
        println!("validation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }
    println!("net premium: {:.2} ({})", summary.net_premium, summary.entry);
    println!("max profit:  {}", summary.max_profit);
    println!("max loss:    {}", summary.max_loss);
    let breakevens = summary
        .breakevens
        .iter()
        .map(|b| format!("{b:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "breakevens:  {}",
        if breakevens.is_empty() { "none".to_string() } else { breakevens }
    );
    Ok(())
}
