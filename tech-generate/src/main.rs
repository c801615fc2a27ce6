//! tech-generate - Generate HPC/AI post content

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

use libtechcast::{Config, ContentGenerator, Result, TechcastError};

#[derive(Parser, Debug)]
#[command(name = "tech-generate")]
#[command(about = "Generate HPC/AI post content", long_about = None)]
struct Cli {
    /// Time of day for content (morning, afternoon, or both)
    #[arg(short, long, default_value = "both")]
    time: String,

    /// Output file path (prints to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Config file path (defaults to XDG location)
    #[arg(short, long, env = "TECHCAST_CONFIG")]
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
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    debug!(language = %config.content.language, "loaded configuration");

    let mut generator = ContentGenerator::from_config(&config);

    match cli.time.as_str() {
        "both" => {
            let daily = generator.generate_daily()?;
            match &cli.output {
                Some(path) => {
                    let morning_path = with_stem_suffix(path, "_morning");
                    let afternoon_path = with_stem_suffix(path, "_afternoon");
                    write_content(&morning_path, &daily.morning)?;
                    write_content(&afternoon_path, &daily.afternoon)?;
                    println!(
                        "{}",
                        saved_message(&[&morning_path, &afternoon_path], cli.format == "json")
                    );
                }
                None => {
                    if cli.format == "json" {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&daily)
                                .map_err(|e| TechcastError::InvalidInput(e.to_string()))?
                        );
                    } else {
                        println!("Morning content:\n{}\n", daily.morning);
                        println!("Afternoon content:\n{}", daily.afternoon);
                    }
                }
            }
        }
        time @ ("morning" | "afternoon") => {
            let content = if time == "morning" {
                generator.generate_morning()?
            } else {
                generator.generate_afternoon()?
            };
            match &cli.output {
                Some(path) => {
                    write_content(path, &content)?;
                    println!("{}", saved_message(&[path], cli.format == "json"));
                }
                None => {
                    if cli.format == "json" {
                        println!(
                            "{}",
                            serde_json::json!({ "content": content })
                        );
                    } else {
                        println!("{}", content);
                    }
                }
            }
        }
        other => {
            return Err(TechcastError::InvalidInput(format!(
                "Invalid time: '{}'. Valid options: morning, afternoon, both",
                other
            )));
        }
    }

    Ok(())
}

/// Confirmation line for saved files, honoring the output format
fn saved_message(paths: &[&PathBuf], json: bool) -> String {
    let saved: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    if json {
        serde_json::json!({ "saved": saved }).to_string()
    } else {
        format!("Content saved to: {}", saved.join(", "))
    }
}

/// Append a suffix to the file stem, keeping the extension
fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    path.with_file_name(name)
}

fn write_content(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_stem_suffix() {
        assert_eq!(
            with_stem_suffix(Path::new("content.txt"), "_morning"),
            PathBuf::from("content_morning.txt")
        );
        assert_eq!(
            with_stem_suffix(Path::new("out/daily"), "_afternoon"),
            PathBuf::from("out/daily_afternoon")
        );
    }

    #[test]
    fn test_saved_message_text() {
        let a = PathBuf::from("content_morning.txt");
        let b = PathBuf::from("content_afternoon.txt");
        assert_eq!(
            saved_message(&[&a, &b], false),
            "Content saved to: content_morning.txt, content_afternoon.txt"
        );
    }

    #[test]
    fn test_saved_message_json() {
        let path = PathBuf::from("content.txt");
        assert_eq!(
            saved_message(&[&path], true),
            r#"{"saved":["content.txt"]}"#
        );
    }

    #[test]
    fn test_write_content_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/deep/content.txt");
        write_content(&path, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
