use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use titlex_storage::{run_pipeline, MemoryStore, PipelineConfig, TitleCorpus, TitleStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Title catalog normalizer and similarity features
#[derive(Parser, Debug)]
#[command(name = "titlex")]
#[command(about = "Normalize title catalogs and score title similarity", long_about = None)]
struct Args {
    /// Directory with the extracted .tsv files
    #[arg(short, long, default_value = "./data/extracted")]
    data_dir: PathBuf,

    /// JSON pipeline config; overrides --data-dir when given
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the filter pipeline and print the load report and catalog bounds
    Load,
    /// Load, then print per-feature similarity between two titles
    Similar { a: String, b: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting titlex v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::new(&args.data_dir),
    };
    info!("Data directory: {:?}", config.data_dir);

    let store = MemoryStore::new();
    let report = run_pipeline(&config, &store).context("filter pipeline failed")?;

    match args.command {
        Command::Load => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if let Some(stats) = store.stats()? {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Command::Similar { a, b } => {
            let corpus = TitleCorpus::from_store(&store)?;
            let score = corpus.similarity(&a, &b)?;
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
    }

    Ok(())
}
