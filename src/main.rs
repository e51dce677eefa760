use clap::builder::PossibleValuesParser;
use clap::Parser;
use llama_fetch::config::Config;
use llama_fetch::error::Result;
use llama_fetch::models::{DownloadInstructions, InstructionPayload, ModelInfo};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "llama-fetch")]
#[command(about = "Print download instructions for Llama 3.2 checkpoints", long_about = None)]
struct Cli {
    /// Model to build download instructions for
    #[arg(long, value_parser = PossibleValuesParser::new(ModelInfo::all_ids()))]
    model: String,

    /// Directory where the model should be stored
    #[arg(long)]
    target_dir: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load()?;

    let target_root = cli
        .target_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.download.target_dir));
    let target_root = absolutize(&target_root)?;

    tracing::debug!("Ensuring target root exists: {}", target_root.display());
    fs::create_dir_all(&target_root)?;

    let instructions = DownloadInstructions::build(&cli.model, &target_root)?;
    tracing::info!("Built download instructions for {}", cli.model);

    let payload = InstructionPayload::new(instructions);
    println!("{}", payload.to_pretty_json()?);

    Ok(())
}

/// Anchor relative paths at the current directory and drop `.` components
fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(joined.components().collect())
}
