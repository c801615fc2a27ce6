//! tech-post - Publish HPC/AI content to the provider

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use libtechcast::client::default_factory;
use libtechcast::{Config, ContentGenerator, Mode, Publisher, Result, TechcastError};

#[derive(Parser, Debug)]
#[command(name = "tech-post")]
#[command(about = "Publish HPC/AI content (mock or real mode)", long_about = None)]
struct Cli {
    /// Publishing mode (mock or real)
    #[arg(short, long, default_value = "mock")]
    mode: String,

    /// Content file to post (generates new content if not provided)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Image file to attach
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Show posting statistics and exit
    #[arg(short, long)]
    stats: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Config file path (defaults to XDG location)
    #[arg(long, env = "TECHCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    libtechcast::logging::LoggingConfig::new(
        libtechcast::logging::LogFormat::Text,
        level.to_string(),
        cli.verbose,
    )
    .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mode: Mode = cli
        .mode
        .parse()
        .map_err(TechcastError::InvalidInput)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    // The CLI mode decides whether the publisher attempts a real client
    config.publisher.mode = mode;

    let publisher = Publisher::connect(&config, default_factory()).await;

    if cli.stats {
        let stats = publisher.posting_stats()?;
        if cli.format == "json" {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats)
                    .map_err(|e| TechcastError::InvalidInput(e.to_string()))?
            );
        } else {
            println!("Posting statistics:");
            println!("  mode: {}", stats.mode);
            println!("  client ready: {}", stats.client_ready);
            println!("  downgraded: {}", stats.downgraded);
            println!("  total posts: {}", stats.total_posts);
            println!("  mock posts: {}", stats.mock_posts);
            println!("  real posts: {}", stats.real_posts);
        }
        return Ok(());
    }

    let content = match &cli.content {
        Some(path) => {
            if !path.exists() {
                return Err(TechcastError::InvalidInput(format!(
                    "Content file not found: {}",
                    path.display()
                )));
            }
            std::fs::read_to_string(path)?
        }
        None => {
            let mut generator = ContentGenerator::from_config(&config);
            let content = generator.generate_morning()?;
            debug!("generated content for posting");
            content
        }
    };

    let outcome = match &cli.image {
        Some(image) => publisher.publish_with_image(&content, image).await?,
        None => publisher.publish(&content, mode).await?,
    };

    if cli.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome)
                .map_err(|e| TechcastError::InvalidInput(e.to_string()))?
        );
    } else if outcome.success {
        println!("{}", outcome.message);
    } else {
        eprintln!("{}", outcome.message);
    }

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
