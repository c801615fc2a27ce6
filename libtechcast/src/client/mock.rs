//! Mock provider client for testing
//!
//! A configurable client that can simulate provider successes and
//! failures without network access. Used by the integration tests to
//! exercise the real-path publishing logic.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::config::Credentials;
use crate::error::{ProviderError, Result};
use crate::types::{MediaId, PostId};

use super::{ClientFactory, ProviderClient};

/// Configuration for mock client behavior
#[derive(Debug, Clone)]
pub struct MockClientConfig {
    /// Whether authentication should succeed
    pub auth_succeeds: bool,

    /// Whether posting should succeed
    pub post_succeeds: bool,

    /// Whether media uploads should succeed
    pub upload_succeeds: bool,

    /// Error message returned on posting failure
    pub post_error: Option<String>,

    /// Number of times create_post has been called
    pub post_call_count: Arc<Mutex<usize>>,

    /// Number of times upload_media has been called
    pub upload_call_count: Arc<Mutex<usize>>,

    /// Posts that have been made (for verification)
    pub posted_content: Arc<Mutex<Vec<String>>>,
}

impl Default for MockClientConfig {
    fn default() -> Self {
        Self {
            auth_succeeds: true,
            post_succeeds: true,
            upload_succeeds: true,
            post_error: None,
            post_call_count: Arc::new(Mutex::new(0)),
            upload_call_count: Arc::new(Mutex::new(0)),
            posted_content: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock provider client
pub struct MockClient {
    config: MockClientConfig,
}

impl MockClient {
    pub fn new(config: MockClientConfig) -> Self {
        Self { config }
    }

    /// Create a mock client that always succeeds
    pub fn success() -> Self {
        Self::new(MockClientConfig::default())
    }

    /// Create a mock client that fails posting
    pub fn post_failure(error: &str) -> Self {
        Self::new(MockClientConfig {
            post_succeeds: false,
            post_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock client that rejects media uploads
    pub fn upload_failure() -> Self {
        Self::new(MockClientConfig {
            upload_succeeds: false,
            ..Default::default()
        })
    }

    pub fn post_call_count(&self) -> usize {
        *self.config.post_call_count.lock().unwrap()
    }

    pub fn upload_call_count(&self) -> usize {
        *self.config.upload_call_count.lock().unwrap()
    }

    pub fn posted_content(&self) -> Vec<String> {
        self.config.posted_content.lock().unwrap().clone()
    }

    fn record_post(&self, text: &str) -> PostId {
        self.config
            .posted_content
            .lock()
            .unwrap()
            .push(text.to_string());
        PostId(uuid::Uuid::new_v4().simple().to_string())
    }
}

#[async_trait]
impl ProviderClient for MockClient {
    async fn create_post(&self, text: &str) -> Result<PostId> {
        *self.config.post_call_count.lock().unwrap() += 1;

        if self.config.post_succeeds {
            Ok(self.record_post(text))
        } else {
            let message = self
                .config
                .post_error
                .clone()
                .unwrap_or_else(|| "Mock posting failed".to_string());
            Err(ProviderError::Posting(message).into())
        }
    }

    async fn create_post_with_media(&self, text: &str, media: &MediaId) -> Result<PostId> {
        *self.config.post_call_count.lock().unwrap() += 1;

        if self.config.post_succeeds {
            Ok(self.record_post(&format!("{} [media:{}]", text, media)))
        } else {
            let message = self
                .config
                .post_error
                .clone()
                .unwrap_or_else(|| "Mock posting failed".to_string());
            Err(ProviderError::Posting(message).into())
        }
    }

    async fn upload_media(&self, bytes: &[u8]) -> Result<MediaId> {
        *self.config.upload_call_count.lock().unwrap() += 1;

        if self.config.upload_succeeds {
            Ok(MediaId(format!("media-{}", bytes.len())))
        } else {
            Err(ProviderError::Media("Mock upload rejected".to_string()).into())
        }
    }
}

/// Factory producing mock clients
///
/// Shares the inner `MockClientConfig` with every client it hands out
/// so tests can inspect call counts after the publisher is built.
pub struct MockClientFactory {
    config: MockClientConfig,
    auth_succeeds: bool,
}

impl MockClientFactory {
    pub fn new(config: MockClientConfig) -> Self {
        let auth_succeeds = config.auth_succeeds;
        Self {
            config,
            auth_succeeds,
        }
    }

    /// Factory whose clients always succeed
    pub fn success() -> Self {
        Self::new(MockClientConfig::default())
    }

    /// Factory that rejects authentication
    pub fn auth_failure() -> Self {
        Self::new(MockClientConfig {
            auth_succeeds: false,
            ..Default::default()
        })
    }

    pub fn shared_config(&self) -> MockClientConfig {
        self.config.clone()
    }
}

#[async_trait]
impl ClientFactory for MockClientFactory {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<Box<dyn ProviderClient>> {
        if self.auth_succeeds {
            Ok(Box::new(MockClient::new(self.config.clone())))
        } else {
            Err(ProviderError::Authentication("Mock credentials rejected".to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials {
            api_key: "k".to_string().into(),
            api_secret: "s".to_string().into(),
            access_token: "t".to_string().into(),
            access_token_secret: "ts".to_string().into(),
        }
    }

    #[tokio::test]
    async fn test_mock_post_success() {
        let client = MockClient::success();

        let post_id = client.create_post("Test content").await.unwrap();
        assert!(!post_id.0.is_empty());
        assert_eq!(client.post_call_count(), 1);

        let posted = client.posted_content();
        assert_eq!(posted, vec!["Test content".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_post_failure() {
        let client = MockClient::post_failure("Rate limited");

        let err = client.create_post("Test").await.unwrap_err();
        assert!(err.to_string().contains("Rate limited"));
        assert_eq!(client.post_call_count(), 1);
        assert!(client.posted_content().is_empty());
    }

    #[tokio::test]
    async fn test_mock_upload_and_post_with_media() {
        let client = MockClient::success();

        let media = client.upload_media(&[0u8; 128]).await.unwrap();
        assert_eq!(media.0, "media-128");
        assert_eq!(client.upload_call_count(), 1);

        let post_id = client
            .create_post_with_media("With image", &media)
            .await
            .unwrap();
        assert!(!post_id.0.is_empty());
        assert!(client.posted_content()[0].contains("media-128"));
    }

    #[tokio::test]
    async fn test_mock_upload_failure() {
        let client = MockClient::upload_failure();

        let err = client.upload_media(&[0u8; 8]).await.unwrap_err();
        assert!(err.to_string().contains("Mock upload rejected"));
    }

    #[tokio::test]
    async fn test_factory_auth_success() {
        let factory = MockClientFactory::success();
        let client = factory.authenticate(&test_credentials()).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_factory_auth_failure() {
        let factory = MockClientFactory::auth_failure();
        // The Ok side is a trait object, so bind the error by hand
        let err = match factory.authenticate(&test_credentials()).await {
            Ok(_) => panic!("authentication should be rejected"),
            Err(e) => e,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Mock credentials rejected"));
    }

    #[tokio::test]
    async fn test_factory_shares_config_with_clients() {
        let factory = MockClientFactory::success();
        let shared = factory.shared_config();

        let client = factory.authenticate(&test_credentials()).await.unwrap();
        client.create_post("Shared state").await.unwrap();

        assert_eq!(*shared.post_call_count.lock().unwrap(), 1);
        assert_eq!(
            shared.posted_content.lock().unwrap().as_slice(),
            &["Shared state".to_string()]
        );
    }
}
