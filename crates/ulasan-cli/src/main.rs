use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ulasan_classifiers::{StrategySpec, TriageConfig, ZeroShotConfig};
use ulasan_core::{Error, ReviewInput};

#[derive(Parser, Debug)]
#[command(name = "ulasan")]
#[command(
    author,
    version,
    about = "Multi-axis triage classifier for e-learning product reviews"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one review into topic, ICT literacy, emotion, and sentiment
    Classify {
        /// Review text
        text: String,

        /// Star rating (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// Configuration file path
        #[arg(short, long, env = "ULASAN_CONFIG")]
        config: Option<PathBuf>,

        /// Override the configured strategy
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Emit JSON instead of labelled text
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the active lexicon as YAML, for per-locale editing
    Lexicon {
        /// Configuration file path
        #[arg(short, long, env = "ULASAN_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    RuleBased,
    ZeroShot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            text,
            rating,
            config,
            strategy,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let config = apply_strategy_override(load_config(config.as_deref())?, strategy);
            let classifier = config.build_classifier()?;
            tracing::debug!(strategy = classifier.strategy_name(), "classifier ready");

            match classifier.classify(&ReviewInput::new(text, rating)).await {
                Ok(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        println!("Topik:        {}", result.topic);
                        println!("ICT Literacy: {}", result.ict_literacy);
                        println!("Emotion:      {}", result.emotion);
                        println!("Sentiment:    {}", result.sentiment);
                    }
                }
                Err(Error::EmptyInput) => {
                    // user-correctable: ask for text again instead of crashing
                    eprintln!("Masukkan teks ulasan terlebih dahulu.");
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Lexicon { config } => {
            let config = load_config(config.as_deref())?;
            let lexicon = config.load_lexicon()?;
            print!("{}", lexicon.to_yaml()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TriageConfig> {
    match path {
        Some(p) => TriageConfig::from_file(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(TriageConfig::default()),
    }
}

fn apply_strategy_override(
    mut config: TriageConfig,
    strategy: Option<StrategyArg>,
) -> TriageConfig {
    match strategy {
        Some(StrategyArg::RuleBased) => config.strategy = StrategySpec::RuleBased,
        Some(StrategyArg::ZeroShot) => {
            // keep a configured endpoint; only fill in defaults when the
            // config file selected rule-based
            if !matches!(config.strategy, StrategySpec::ZeroShot(_)) {
                config.strategy = StrategySpec::ZeroShot(ZeroShotConfig::default());
            }
        }
        None => {}
    }
    config
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "ulasan=debug,ulasan_classifiers=debug"
    } else {
        "ulasan=info,ulasan_classifiers=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
