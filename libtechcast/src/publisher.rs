//! Publishing to the provider, with a mock (dry-run) path
//!
//! The publisher decides once at construction whether a real provider
//! client is available. Missing or rejected credentials downgrade the
//! instance to mock mode for its whole lifetime; the downgrade is
//! logged and recorded but never surfaced as a call failure.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::client::{ClientFactory, ProviderClient};
use crate::config::Config;
use crate::error::Result;
use crate::types::{Mode, PostId, PostingStats, PublishOutcome};
use crate::validation::validate_content;

/// Record separator in the post and error logs
const SEPARATOR: &str = "==================================================";

/// Maximum accepted image size for the real path (5 MiB)
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const POST_LOG: &str = "posts.log";
const ERROR_LOG: &str = "post_errors.log";

/// Client availability, decided once at construction
enum ClientState {
    /// No real submission will ever be attempted by this instance
    MockForced,
    /// Authenticated client, ready for real submission
    Ready(Box<dyn ProviderClient>),
}

pub struct Publisher {
    configured_mode: Mode,
    max_length: usize,
    log_dir: PathBuf,
    output_dir: PathBuf,
    state: ClientState,
    downgraded: bool,
}

impl Publisher {
    /// Build a publisher, authenticating the provider client if the
    /// configuration asks for real mode
    ///
    /// Never fails: every credential or connectivity problem downgrades
    /// to mock mode instead.
    pub async fn connect(config: &Config, factory: Option<Box<dyn ClientFactory>>) -> Self {
        let mut downgraded = false;

        let state = if config.publisher.mode == Mode::Mock {
            ClientState::MockForced
        } else {
            match Self::initialize_client(config, factory).await {
                Ok(client) => {
                    info!("provider client initialized, real mode ready");
                    ClientState::Ready(client)
                }
                Err(reason) => {
                    warn!("{}; downgrading to mock mode", reason);
                    downgraded = true;
                    ClientState::MockForced
                }
            }
        };

        Self {
            configured_mode: config.publisher.mode,
            max_length: config.content.max_length,
            log_dir: config.log_dir(),
            output_dir: config.output_dir(),
            state,
            downgraded,
        }
    }

    async fn initialize_client(
        config: &Config,
        factory: Option<Box<dyn ClientFactory>>,
    ) -> std::result::Result<Box<dyn ProviderClient>, String> {
        let factory = factory.ok_or_else(|| "no provider client available".to_string())?;

        let credentials = config
            .publisher
            .credentials
            .as_ref()
            .ok_or_else(|| "provider credentials missing".to_string())?;

        if !credentials.is_complete() {
            return Err("provider credentials incomplete".to_string());
        }

        factory
            .authenticate(credentials)
            .await
            .map_err(|e| format!("provider authentication failed: {}", e))
    }

    /// The mode this publisher will actually use for `Mode::Real` calls
    pub fn effective_mode(&self) -> Mode {
        match self.state {
            ClientState::MockForced => Mode::Mock,
            ClientState::Ready(_) => self.configured_mode,
        }
    }

    /// Whether construction downgraded a real-mode request to mock
    pub fn downgraded(&self) -> bool {
        self.downgraded
    }

    /// Publish text content
    ///
    /// Validation runs first; a rejected post returns a failure outcome
    /// without writing any log record. IO failures while writing logs or
    /// artifacts are fatal and propagate.
    pub async fn publish(&self, content: &str, mode: Mode) -> Result<PublishOutcome> {
        if let Err(reason) = validate_content(content, self.max_length) {
            return Ok(PublishOutcome::failure(reason));
        }

        let use_mock = mode == Mode::Mock || matches!(self.state, ClientState::MockForced);
        if use_mock {
            self.mock_post(content)
        } else {
            self.real_post(content).await
        }
    }

    /// Publish text content with an attached image
    ///
    /// Uses the mode decided at construction. The mock path annotates
    /// the stored content with the image path; the real path uploads the
    /// media first and then posts referencing it.
    pub async fn publish_with_image(
        &self,
        content: &str,
        image_path: &Path,
    ) -> Result<PublishOutcome> {
        if let Err(reason) = validate_content(content, self.max_length) {
            return Ok(PublishOutcome::failure(reason));
        }

        let client = match &self.state {
            ClientState::MockForced => {
                let annotated = format!("{}\n[Image: {}]", content, image_path.display());
                return self.mock_post(&annotated);
            }
            ClientState::Ready(client) => client,
        };

        if !image_path.exists() {
            return Ok(PublishOutcome::failure(format!(
                "Image file not found: {}",
                image_path.display()
            )));
        }

        let size = std::fs::metadata(image_path)?.len();
        if size > MAX_IMAGE_BYTES {
            return Ok(PublishOutcome::failure(
                "Image file too large (max 5MB)".to_string(),
            ));
        }

        let bytes = std::fs::read(image_path)?;
        let media = match client.upload_media(&bytes).await {
            Ok(media) => media,
            Err(e) => {
                self.append_error_record(content, &e.to_string())?;
                return Ok(PublishOutcome::failure(format!(
                    "Failed to post with image: {}",
                    e
                )));
            }
        };

        match client.create_post_with_media(content, &media).await {
            Ok(post_id) => {
                self.append_real_record(content, &post_id)?;
                Ok(PublishOutcome::success(format!(
                    "Posted with image successfully! Post ID: {}",
                    post_id
                )))
            }
            Err(e) => {
                self.append_error_record(content, &e.to_string())?;
                Ok(PublishOutcome::failure(format!(
                    "Failed to post with image: {}",
                    e
                )))
            }
        }
    }

    /// Posting statistics derived from the post log
    pub fn posting_stats(&self) -> Result<PostingStats> {
        let log_file = self.log_dir.join(POST_LOG);
        let (mock_posts, real_posts) = if log_file.exists() {
            let content = std::fs::read_to_string(&log_file)?;
            (
                content.matches("MOCK POST").count(),
                content.matches("REAL POST").count(),
            )
        } else {
            (0, 0)
        };

        Ok(PostingStats {
            mode: self.effective_mode(),
            client_ready: matches!(self.state, ClientState::Ready(_)),
            downgraded: self.downgraded,
            total_posts: mock_posts + real_posts,
            mock_posts,
            real_posts,
        })
    }

    /// Mock submission: log record plus output artifact, no network
    fn mock_post(&self, content: &str) -> Result<PublishOutcome> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let record = format!("[{}] MOCK POST\n{}\n{}\n", timestamp, content, SEPARATOR);
        self.append_log_record(POST_LOG, &record)?;

        info!(preview = %preview(content), "mock post recorded");

        std::fs::create_dir_all(&self.output_dir)?;
        let artifact_name = format!(
            "mock_post_{}.txt",
            Local::now().format("%Y%m%d_%H%M%S_%3f")
        );
        let artifact = self.output_dir.join(artifact_name);
        std::fs::write(&artifact, content)?;

        Ok(PublishOutcome::success(format!(
            "Mock post successful (saved to {})",
            artifact.display()
        )))
    }

    /// Real submission through the authenticated client
    async fn real_post(&self, content: &str) -> Result<PublishOutcome> {
        let client = match &self.state {
            ClientState::Ready(client) => client,
            // publish() already routed MockForced to the mock path
            ClientState::MockForced => return self.mock_post(content),
        };

        info!(preview = %preview(content), "submitting post to provider");

        match client.create_post(content).await {
            Ok(post_id) => {
                self.append_real_record(content, &post_id)?;
                info!(post_id = %post_id, "posted successfully");
                Ok(PublishOutcome::success(format!(
                    "Posted successfully! Post ID: {}",
                    post_id
                )))
            }
            Err(e) => {
                warn!("provider rejected post: {}", e);
                self.append_error_record(content, &e.to_string())?;
                Ok(PublishOutcome::failure(format!("Failed to post: {}", e)))
            }
        }
    }

    fn append_real_record(&self, content: &str, post_id: &PostId) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let url = format!("https://twitter.com/user/status/{}", post_id);
        let record = format!(
            "[{}] REAL POST - ID: {}\n{}\nURL: {}\n{}\n",
            timestamp, post_id, content, url, SEPARATOR
        );
        self.append_log_record(POST_LOG, &record)
    }

    fn append_error_record(&self, content: &str, error: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let record = format!(
            "[{}] ERROR\nContent: {}\nError: {}\n{}\n",
            timestamp, content, error, SEPARATOR
        );
        self.append_log_record(ERROR_LOG, &record)
    }

    /// Append one whole record to a log file in a single write
    fn append_log_record(&self, file_name: &str, record: &str) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir)?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.log_dir.join(file_name))?;
        file.write_all(record.as_bytes())?;
        Ok(())
    }
}

/// First 50 chars of content, for log lines
fn preview(content: &str) -> String {
    content.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentConfig, PublisherConfig, StorageConfig};
    use tempfile::TempDir;

    fn mock_config(dir: &TempDir) -> Config {
        Config {
            content: ContentConfig {
                language: crate::types::Language::En,
                max_length: 280,
            },
            publisher: PublisherConfig {
                mode: Mode::Mock,
                credentials: None,
            },
            storage: StorageConfig {
                log_dir: dir.path().join("logs").display().to_string(),
                output_dir: dir.path().join("output").display().to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_mock_publish_writes_record_and_artifact() {
        let dir = TempDir::new().unwrap();
        let publisher = Publisher::connect(&mock_config(&dir), None).await;

        let outcome = publisher
            .publish("A perfectly valid mock post", Mode::Mock)
            .await
            .unwrap();
        assert!(outcome.success);
        assert!(outcome.message.starts_with("Mock post successful"));

        let log = std::fs::read_to_string(dir.path().join("logs/posts.log")).unwrap();
        assert!(log.contains("MOCK POST"));
        assert!(log.contains("A perfectly valid mock post"));
        assert!(log.contains(SEPARATOR));

        let artifacts: Vec<_> = std::fs::read_dir(dir.path().join("output"))
            .unwrap()
            .collect();
        assert_eq!(artifacts.len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_content_writes_no_record() {
        let dir = TempDir::new().unwrap();
        let publisher = Publisher::connect(&mock_config(&dir), None).await;

        let content = "x".repeat(300);
        let outcome = publisher.publish(&content, Mode::Mock).await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Content too long (300 > 280 characters)");

        assert!(!dir.path().join("logs/posts.log").exists());
        assert!(!dir.path().join("output").exists());
    }

    #[tokio::test]
    async fn test_mock_mode_is_not_a_downgrade() {
        let dir = TempDir::new().unwrap();
        let publisher = Publisher::connect(&mock_config(&dir), None).await;
        assert!(!publisher.downgraded());
        assert_eq!(publisher.effective_mode(), Mode::Mock);
    }

    #[tokio::test]
    async fn test_stats_on_empty_log() {
        let dir = TempDir::new().unwrap();
        let publisher = Publisher::connect(&mock_config(&dir), None).await;

        let stats = publisher.posting_stats().unwrap();
        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.mock_posts, 0);
        assert_eq!(stats.real_posts, 0);
        assert!(!stats.client_ready);
    }
}
