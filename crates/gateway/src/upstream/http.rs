//! `reqwest`-backed upstream client.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response, header::CONTENT_TYPE};

use super::{Upstream, UpstreamError, UpstreamReply};

#[derive(Debug, Clone)]
pub(crate) struct HttpUpstream {
    url: String,
    http: Client,
}

impl HttpUpstream {
    /// Bind to `{base_url}/{collection}`.
    #[must_use]
    pub(crate) fn new(http: Client, base_url: &str, collection: &str) -> Self {
        Self {
            url: format!("{}/{collection}", base_url.trim_end_matches('/')),
            http,
        }
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(&self) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        read_reply(response).await
    }

    async fn submit(&self, body: Bytes) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<UpstreamReply, UpstreamError> {
    let status = response.status();

    if !status.is_success() {
        return Err(UpstreamError::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(UpstreamError::Transport)?;

    Ok(UpstreamReply {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        let upstream = HttpUpstream::new(Client::new(), "http://product-service:8000//", "products");

        assert_eq!(upstream.url(), "http://product-service:8000/products");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error() {
        let upstream = HttpUpstream::new(Client::new(), "http://127.0.0.1:9", "orders");

        let result = upstream.fetch().await;

        assert!(
            matches!(result, Err(UpstreamError::Transport(_))),
            "expected Transport, got {result:?}"
        );
    }
}
