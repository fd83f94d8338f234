//! odds CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use odds_prob::combinatorics::{coin_head_count_space, dice_sum_space};
use odds_prob::event::event_summary;
use odds_prob::{SampleSpace, binomial, interval_predicate};
use odds_sim::Sampler;
use odds_viz::{DistributionArtifact, FrequencyCurveArtifact};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odds")]
#[command(about = "odds - exact event probabilities over finite sample spaces")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probability that the head count of N fair flips lands in [lo, hi]
    Coin {
        /// Number of coin flips
        #[arg(long, default_value = "10")]
        flips: u32,

        /// Lower bound of the head-count interval (inclusive)
        #[arg(long)]
        lo: u32,

        /// Upper bound of the head-count interval (inclusive)
        #[arg(long)]
        hi: u32,

        /// Ask for the count falling outside [lo, hi] instead.
        #[arg(long)]
        outside: bool,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Probability that the sum of N dice lands in [lo, hi]
    Dice {
        /// Number of dice
        #[arg(long, default_value = "2")]
        dice: u32,

        /// Faces per die (numbered 1..=faces)
        #[arg(long, default_value = "6")]
        faces: u32,

        /// Lower bound of the sum interval (inclusive)
        #[arg(long)]
        lo: u32,

        /// Upper bound of the sum interval (inclusive)
        #[arg(long)]
        hi: u32,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate coin flips and report the observed frequency of heads
    Simulate {
        /// Number of flips
        #[arg(long, default_value = "1000")]
        trials: usize,

        /// Probability of heads
        #[arg(long, default_value = "0.5")]
        p: f64,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Visualization artifacts (plot-friendly JSON)
    Viz {
        #[command(subcommand)]
        command: VizCommands,
    },

    /// Render a visualization artifact to SVG
    Render {
        /// Artifact JSON produced by `odds viz`
        #[arg(short, long)]
        input: PathBuf,

        /// Artifact kind (frequency, distribution)
        #[arg(long)]
        kind: String,

        /// YAML file overriding the render theme
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output SVG file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
enum VizCommands {
    /// Running relative frequency of heads vs. number of flips
    Frequency {
        /// Number of flips
        #[arg(long, default_value = "1000")]
        trials: usize,

        /// Probability of heads
        #[arg(long, default_value = "0.5")]
        p: f64,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Keep at most this many curve points (0 = all)
        #[arg(long, default_value = "500")]
        max_points: usize,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Distribution bars over a collapsed sample space
    Distribution {
        #[command(subcommand)]
        source: DistributionSource,
    },
}

#[derive(Subcommand)]
enum DistributionSource {
    /// Head counts of N fair flips
    Coin {
        /// Number of coin flips
        #[arg(long, default_value = "10")]
        flips: u32,

        /// Highlight interval lower bound
        #[arg(long, requires = "hi")]
        lo: Option<u32>,

        /// Highlight interval upper bound
        #[arg(long, requires = "lo")]
        hi: Option<u32>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sums of N dice
    Dice {
        /// Number of dice
        #[arg(long, default_value = "2")]
        dice: u32,

        /// Faces per die (numbered 1..=faces)
        #[arg(long, default_value = "6")]
        faces: u32,

        /// Highlight interval lower bound
        #[arg(long, requires = "hi")]
        lo: Option<u32>,

        /// Highlight interval upper bound
        #[arg(long, requires = "lo")]
        hi: Option<u32>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Coin { flips, lo, hi, outside, output } => cmd_coin(flips, lo, hi, outside, output.as_ref()),
        Commands::Dice { dice, faces, lo, hi, output } => cmd_dice(dice, faces, lo, hi, output.as_ref()),
        Commands::Simulate { trials, p, seed, output } => cmd_simulate(trials, p, seed, output.as_ref()),
        Commands::Viz { command } => match command {
            VizCommands::Frequency { trials, p, seed, max_points, output } => {
                cmd_viz_frequency(trials, p, seed, max_points, output.as_ref())
            }
            VizCommands::Distribution { source } => match source {
                DistributionSource::Coin { flips, lo, hi, output } => {
                    let space = coin_head_count_space(flips)?;
                    let title = format!("{} coin flips", flips);
                    cmd_viz_distribution(&title, &space, lo.zip(hi), output.as_ref())
                }
                DistributionSource::Dice { dice, faces, lo, hi, output } => {
                    let space = dice_sum_space(dice, faces)?;
                    let title = format!("sum of {} dice with {} faces", dice, faces);
                    cmd_viz_distribution(&title, &space, lo.zip(hi), output.as_ref())
                }
            },
        },
        Commands::Render { input, kind, config, output } => {
            cmd_render(&input, &kind, config.as_ref(), output.as_ref())
        }
        Commands::Version => {
            println!("odds {}", odds_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_coin(flips: u32, lo: u32, hi: u32, outside: bool, output: Option<&PathBuf>) -> Result<()> {
    let interval = interval_predicate(lo, hi)?;
    let space = coin_head_count_space(flips)?;
    tracing::debug!(flips, outcomes = space.len(), total = space.total_weight(), "head-count space built");

    let inside = event_summary(&interval, &space)?;
    let summary = if outside { inside.complement() } else { inside };

    let reference = binomial::interval_mass(u64::from(lo), u64::from(hi), u64::from(flips), 0.5)?;
    let reference = if outside { 1.0 - reference } else { reference };
    tracing::info!(probability = summary.probability, reference, "coin interval evaluated");

    let output_json = serde_json::json!({
        "flips": flips,
        "interval": [lo, hi],
        "outside": outside,
        "matching_weight": summary.matching_weight,
        "total_weight": summary.total_weight,
        "probability": summary.probability,
        "binomial_reference": reference,
    });

    write_json(output, output_json)
}

fn cmd_dice(dice: u32, faces: u32, lo: u32, hi: u32, output: Option<&PathBuf>) -> Result<()> {
    let interval = interval_predicate(lo, hi)?;
    let space = dice_sum_space(dice, faces)?;
    let summary = event_summary(&interval, &space)?;
    tracing::info!(dice, faces, probability = summary.probability, "dice interval evaluated");

    let output_json = serde_json::json!({
        "dice": dice,
        "faces": faces,
        "interval": [lo, hi],
        "matching_weight": summary.matching_weight,
        "total_weight": summary.total_weight,
        "probability": summary.probability,
    });

    write_json(output, output_json)
}

fn cmd_simulate(trials: usize, p: f64, seed: u64, output: Option<&PathBuf>) -> Result<()> {
    if trials == 0 {
        anyhow::bail!("trials must be > 0");
    }
    let trace = Sampler::seeded(seed).flip_frequency(trials, p)?;
    let hits = trace.hits.last().copied().unwrap_or(0);
    let frequency = trace.final_frequency().unwrap_or(0.0);
    tracing::info!(trials, hits, frequency, "simulation complete");

    let output_json = serde_json::json!({
        "trials": trials,
        "p": p,
        "seed": seed,
        "hits": hits,
        "final_frequency": frequency,
        "abs_error": (frequency - p).abs(),
    });

    write_json(output, output_json)
}

fn cmd_viz_frequency(
    trials: usize,
    p: f64,
    seed: u64,
    max_points: usize,
    output: Option<&PathBuf>,
) -> Result<()> {
    if trials == 0 {
        anyhow::bail!("trials must be > 0");
    }
    let trace = Sampler::seeded(seed).flip_frequency(trials, p)?;
    let artifact = FrequencyCurveArtifact::from_trace(&trace, Some(p), Some(seed))?.downsample(max_points);
    tracing::debug!(points = artifact.trials.len(), "frequency artifact built");

    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_viz_distribution(
    title: &str,
    space: &SampleSpace<u32>,
    highlight: Option<(u32, u32)>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let interval = highlight.map(|(lo, hi)| interval_predicate(lo, hi)).transpose()?;
    let artifact = DistributionArtifact::from_space(title, space, interval.as_ref())?;
    tracing::debug!(values = artifact.values.len(), total = artifact.total_weight, "distribution artifact built");

    write_json(output, serde_json::to_value(artifact)?)
}

fn cmd_render(input: &PathBuf, kind: &str, config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    tracing::info!(path = %input.display(), kind, "rendering artifact");
    let json = std::fs::read_to_string(input)?;
    let yaml = config.map(std::fs::read_to_string).transpose()?;
    let viz_config = odds_viz_render::config::resolve_config(yaml.as_deref())?;
    let svg = odds_viz_render::render_svg(&json, kind, &viz_config)?;

    if let Some(path) = output {
        odds_viz_render::output::svg::save_svg(&svg, path)?;
    } else {
        print!("{}", svg);
    }
    Ok(())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
