//! Product routes, relayed to the Product Service.

use std::sync::Arc;

use salvo::prelude::*;

use microshop_runtime::{ApiError, extensions::DepotExt as _};

use crate::{
    relay::{self, Relayed},
    state::State,
};

const FAILED_TO_FETCH_PRODUCTS: &str = "Failed to fetch products";
const FAILED_TO_CREATE_PRODUCT: &str = "Failed to create product";

/// List Products Handler
#[handler]
pub(crate) async fn index(depot: &mut Depot) -> Result<Relayed, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_FETCH_PRODUCTS)?;

    relay::fetch(state.products.as_ref(), FAILED_TO_FETCH_PRODUCTS).await
}

/// Create Product Handler
#[handler]
pub(crate) async fn create(req: &mut Request, depot: &mut Depot) -> Result<Relayed, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>(FAILED_TO_CREATE_PRODUCT)?;

    relay::submit(state.products.as_ref(), req, FAILED_TO_CREATE_PRODUCT).await
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use reqwest::Client;
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::{
        test_helpers::{gateway_service, reply, strict_upstream},
        upstream::{HttpUpstream, MockUpstream, UpstreamError},
    };

    use super::*;

    fn make_service(products: MockUpstream) -> Service {
        gateway_service(
            products,
            strict_upstream(),
            Router::with_path("api/products").get(index).post(create),
        )
    }

    #[tokio::test]
    async fn test_list_products_relays_upstream_body() -> TestResult {
        let mut products = MockUpstream::new();

        products
            .expect_fetch()
            .once()
            .return_once(|| Ok(reply(200, r#"[{"name":"Widget","price":29.99}]"#)));

        products.expect_submit().never();

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!([{ "name": "Widget", "price": 29.99 }]));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_upstream_failure_returns_500() -> TestResult {
        let mut products = MockUpstream::new();

        products
            .expect_fetch()
            .once()
            .return_once(|| Err(UpstreamError::Status(503)));

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body, json!({ "error": "Failed to fetch products" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_forwards_body_and_answers_201() -> TestResult {
        let mut products = MockUpstream::new();

        products
            .expect_submit()
            .once()
            .withf(|body| body == &Bytes::from_static(br#"{"name":"Widget"}"#))
            .return_once(|_| Ok(reply(200, r#"{"_id":"p1","name":"Widget"}"#)));

        products.expect_fetch().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .raw_json(r#"{"name":"Widget"}"#)
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body, json!({ "_id": "p1", "name": "Widget" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_upstream_failure_returns_500() -> TestResult {
        let mut products = MockUpstream::new();

        products
            .expect_submit()
            .once()
            .return_once(|_| Err(UpstreamError::Status(400)));

        let mut res = TestClient::post("http://example.com/api/products")
            .raw_json("{}")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body, json!({ "error": "Failed to create product" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_product_service_returns_500() -> TestResult {
        let unreachable = Arc::new(HttpUpstream::new(
            Client::new(),
            "http://127.0.0.1:9",
            "products",
        ));

        let service = Service::new(
            Router::new()
                .hoop(inject(State::new(unreachable, Arc::new(strict_upstream()))))
                .push(Router::with_path("api/products").get(index)),
        );

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body, json!({ "error": "Failed to fetch products" }));

        Ok(())
    }
}
