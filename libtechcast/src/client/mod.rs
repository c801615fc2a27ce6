//! Provider client abstraction
//!
//! The third-party microblogging API is treated as an opaque network
//! collaborator behind these traits. The publisher receives an optional
//! [`ClientFactory`] at construction; when it is absent or
//! authentication fails, the publisher downgrades to mock mode once and
//! never re-probes.

use async_trait::async_trait;

use crate::config::Credentials;
use crate::error::Result;
use crate::types::{MediaId, PostId};

// Mock client is available for all builds to support integration tests
pub mod mock;

/// An authenticated connection to the provider
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Submit a text post, returning the provider-assigned post id
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Posting` on provider-reported failure and
    /// `ProviderError::Network` on transport failure.
    async fn create_post(&self, text: &str) -> Result<PostId>;

    /// Submit a post referencing previously uploaded media
    async fn create_post_with_media(&self, text: &str, media: &MediaId) -> Result<PostId>;

    /// Upload media bytes, returning the provider-assigned media id
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Media` when the upload is rejected.
    async fn upload_media(&self, bytes: &[u8]) -> Result<MediaId>;
}

/// Factory that authenticates and probes connectivity once
///
/// A successful `authenticate` call implies the credentials were
/// accepted and the provider is reachable.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Authenticate with the provider and return a ready client
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Authentication` when credentials are
    /// rejected or the connectivity probe fails.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Box<dyn ProviderClient>>;
}

/// Resolve the provider client capability for this build
///
/// No provider SDK is linked into the binaries, so real mode always
/// downgrades to mock at publisher construction. Embedders supply their
/// own [`ClientFactory`] to enable real submission.
pub fn default_factory() -> Option<Box<dyn ClientFactory>> {
    None
}
