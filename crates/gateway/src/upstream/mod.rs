//! Upstream services the gateway relays to.

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

mod http;

pub(crate) use http::HttpUpstream;

/// A successful upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

#[derive(Debug, Error)]
pub(crate) enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream answered with status {0}")]
    Status(u16),
}

/// One upstream collection, e.g. `{base}/products`.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait Upstream: Send + Sync {
    /// GET the collection.
    async fn fetch(&self) -> Result<UpstreamReply, UpstreamError>;

    /// POST `body` to the collection as JSON.
    async fn submit(&self, body: Bytes) -> Result<UpstreamReply, UpstreamError>;
}
