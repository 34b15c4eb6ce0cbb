//! Relaying upstream answers back to the client.

use salvo::{
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
    prelude::{Request, Response, Scribe},
};
use tracing::error;

use microshop_runtime::ApiError;

use crate::upstream::{Upstream, UpstreamReply};

/// An upstream body written back verbatim as JSON.
#[derive(Debug)]
pub(crate) struct Relayed {
    status: StatusCode,
    reply: UpstreamReply,
}

impl Scribe for Relayed {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        if let Err(source) = res.write_body(self.reply.body) {
            error!("failed to write relayed body: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

/// GET the upstream collection, relaying its status and body.
///
/// # Errors
///
/// Any upstream failure becomes a 500 carrying `message`.
pub(crate) async fn fetch(
    upstream: &dyn Upstream,
    message: &'static str,
) -> Result<Relayed, ApiError> {
    let reply = upstream.fetch().await.map_err(|source| {
        error!("{}: {source}", message.to_lowercase());

        ApiError::internal(message)
    })?;

    Ok(Relayed {
        status: StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK),
        reply,
    })
}

/// POST the request body to the upstream collection, answering 201.
///
/// # Errors
///
/// An unreadable request body or any upstream failure becomes a 500 carrying
/// `message`.
pub(crate) async fn submit(
    upstream: &dyn Upstream,
    req: &mut Request,
    message: &'static str,
) -> Result<Relayed, ApiError> {
    let body = req.payload().await.cloned().map_err(|source| {
        error!("failed to read request body: {source}");

        ApiError::internal(message)
    })?;

    let reply = upstream.submit(body).await.map_err(|source| {
        error!("{}: {source}", message.to_lowercase());

        ApiError::internal(message)
    })?;

    Ok(Relayed {
        status: StatusCode::CREATED,
        reply,
    })
}
