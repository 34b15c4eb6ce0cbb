//! Test helpers.

use std::sync::Arc;

use bytes::Bytes;
use salvo::{affix_state::inject, prelude::*};

use crate::{
    state::State,
    upstream::{MockUpstream, UpstreamReply},
};

pub(crate) fn reply(status: u16, body: &'static str) -> UpstreamReply {
    UpstreamReply {
        status,
        body: Bytes::from_static(body.as_bytes()),
    }
}

pub(crate) fn strict_upstream() -> MockUpstream {
    let mut upstream = MockUpstream::new();

    upstream.expect_fetch().never();
    upstream.expect_submit().never();

    upstream
}

pub(crate) fn gateway_service(products: MockUpstream, orders: MockUpstream, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::new(Arc::new(products), Arc::new(orders))))
            .push(route),
    )
}
