//! tech-check - Self-test for the generator and publisher
//!
//! Exercises content generation for both focuses and languages, and a
//! mock publish against a temporary directory, then reports pass/fail
//! counts. Exits non-zero when any check fails.

use clap::Parser;

use libtechcast::config::{Config, StorageConfig};
use libtechcast::types::{Focus, Language, Mode};
use libtechcast::{ContentGenerator, Publisher};

#[derive(Parser, Debug)]
#[command(name = "tech-check")]
#[command(about = "Test generator and publisher functionality", long_about = None)]
struct Cli {
    /// Component to test (all, generator, or publisher)
    #[arg(short = 'c', long, default_value = "all")]
    component: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    fn record(&mut self, name: &str, result: Result<(), String>) {
        match result {
            Ok(()) => {
                println!("  ok: {}", name);
                self.passed += 1;
            }
            Err(reason) => {
                println!("  FAILED: {} ({})", name, reason);
                self.failed += 1;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    libtechcast::logging::LoggingConfig::new(
        libtechcast::logging::LogFormat::Text,
        level.to_string(),
        cli.verbose,
    )
    .init();

    let mut report = Report::new();

    if matches!(cli.component.as_str(), "all" | "generator") {
        println!("Testing content generator...");
        check_generator(&mut report);
    }

    if matches!(cli.component.as_str(), "all" | "publisher") {
        println!("Testing publisher (mock mode)...");
        check_publisher(&mut report).await;
    }

    println!();
    println!("Test summary: {} passed, {} failed", report.passed, report.failed);

    if report.failed > 0 {
        std::process::exit(1);
    }
}

fn check_generator(report: &mut Report) {
    for language in [Language::En, Language::Zh] {
        let mut generator = ContentGenerator::new(language, 280);

        for focus in [Focus::Hpc, Focus::Ai] {
            let name = format!("generate {} content ({})", focus, language);
            let result = generator
                .generate(focus)
                .map_err(|e| e.to_string())
                .and_then(|content| {
                    if content.chars().count() > 280 {
                        Err(format!("content too long: {} chars", content.chars().count()))
                    } else if !content.contains('#') {
                        Err("content has no hashtags".to_string())
                    } else {
                        Ok(())
                    }
                });
            report.record(&name, result);
        }
    }
}

async fn check_publisher(report: &mut Report) {
    let dir = match tempfile::TempDir::new() {
        Ok(dir) => dir,
        Err(e) => {
            report.record("create temp directory", Err(e.to_string()));
            return;
        }
    };

    let config = Config {
        storage: StorageConfig {
            log_dir: dir.path().join("logs").display().to_string(),
            output_dir: dir.path().join("output").display().to_string(),
        },
        ..Config::default_config()
    };

    let publisher = Publisher::connect(&config, None).await;

    let result = match publisher
        .publish("Test content from tech-check self-test", Mode::Mock)
        .await
    {
        Ok(outcome) if outcome.success => Ok(()),
        Ok(outcome) => Err(outcome.message),
        Err(e) => Err(e.to_string()),
    };
    report.record("mock publish", result);

    let result = publisher
        .posting_stats()
        .map_err(|e| e.to_string())
        .and_then(|stats| {
            if stats.mock_posts == 1 {
                Ok(())
            } else {
                Err(format!("expected 1 mock post, found {}", stats.mock_posts))
            }
        });
    report.record("post log records the publish", result);

    let result = match publisher.publish("x", Mode::Mock).await {
        Ok(outcome) if !outcome.success => Ok(()),
        Ok(_) => Err("too-short content was accepted".to_string()),
        Err(e) => Err(e.to_string()),
    };
    report.record("validation rejects too-short content", result);
}
