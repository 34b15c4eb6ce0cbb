//! Prometheus metrics collection and exposition endpoint.
//!
//! Each service owns one [`HttpMetrics`] created at startup and hands it to
//! its router: the request hoop records into it and the `/metrics` handler
//! renders it. Nothing here is process-global, so tests build their own.

use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
    prelude::{Depot, FlowCtrl},
};
use thiserror::Error;
use tracing::error;

const REQUEST_LABELS: [&str; 3] = ["method", "route", "status"];

/// Errors raised while building or rendering metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A collector could not be created or registered.
    #[error("failed to register metric: {0}")]
    Register(#[source] prometheus::Error),

    /// The registry could not be encoded.
    #[error("failed to encode metrics: {0}")]
    Encode(#[source] prometheus::Error),
}

/// Records one finished request.
pub trait RequestObserver: fmt::Debug + Send + Sync {
    /// Record a request labelled by method, route, and status.
    fn observe(&self, method: &str, route: &str, status: u16, elapsed: Duration);
}

/// Request counter labelled by method, route, and status.
#[derive(Debug, Clone)]
pub struct RequestCounter {
    requests_total: IntCounterVec,
}

impl RequestObserver for RequestCounter {
    fn observe(&self, method: &str, route: &str, status: u16, _elapsed: Duration) {
        let status = status.to_string();

        self.requests_total
            .with_label_values(&[method, route, status.as_str()])
            .inc();
    }
}

/// Request duration histogram (seconds) labelled by method, route, and status.
#[derive(Debug, Clone)]
pub struct RequestDurationHistogram {
    request_duration_seconds: HistogramVec,
}

impl RequestObserver for RequestDurationHistogram {
    fn observe(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();

        self.request_duration_seconds
            .with_label_values(&[method, route, status.as_str()])
            .observe(elapsed.as_secs_f64());
    }
}

/// Metrics registry holding process metrics plus one request series.
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    registry: Registry,
    observer: Arc<dyn RequestObserver>,
}

impl HttpMetrics {
    /// Registry whose request series is a counter named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the counter cannot be created or registered.
    pub fn with_request_counter(name: &str, help: &str) -> Result<Self, MetricsError> {
        let registry = new_registry()?;

        let requests_total = IntCounterVec::new(Opts::new(name, help), &REQUEST_LABELS)
            .map_err(MetricsError::Register)?;

        registry
            .register(Box::new(requests_total.clone()))
            .map_err(MetricsError::Register)?;

        Ok(Self {
            registry,
            observer: Arc::new(RequestCounter { requests_total }),
        })
    }

    /// Registry whose request series is a duration histogram named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the histogram cannot be created or registered.
    pub fn with_request_duration(name: &str, help: &str) -> Result<Self, MetricsError> {
        let registry = new_registry()?;

        let request_duration_seconds =
            HistogramVec::new(HistogramOpts::new(name, help), &REQUEST_LABELS)
                .map_err(MetricsError::Register)?;

        registry
            .register(Box::new(request_duration_seconds.clone()))
            .map_err(MetricsError::Register)?;

        Ok(Self {
            registry,
            observer: Arc::new(RequestDurationHistogram {
                request_duration_seconds,
            }),
        })
    }

    /// Record one finished request.
    pub fn observe(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        self.observer.observe(method, route, status, elapsed);
    }

    /// Render every registered series in the text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding fails.
    pub fn render(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut encoded = Vec::new();

        encoder
            .encode(&metric_families, &mut encoded)
            .map_err(MetricsError::Encode)?;

        Ok(String::from_utf8_lossy(&encoded).into_owned())
    }

    /// Hoop recording every request that passes through it.
    #[must_use]
    pub fn recorder(&self) -> RequestMetrics {
        RequestMetrics {
            observer: Arc::clone(&self.observer),
        }
    }

    /// Handler serving the `/metrics` scrape endpoint.
    #[must_use]
    pub fn endpoint(&self) -> MetricsEndpoint {
        MetricsEndpoint {
            metrics: self.clone(),
        }
    }
}

fn new_registry() -> Result<Registry, MetricsError> {
    let registry = Registry::new();

    #[cfg(target_os = "linux")]
    registry
        .register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))
        .map_err(MetricsError::Register)?;

    Ok(registry)
}

/// Request metrics hoop.
#[derive(Debug, Clone)]
pub struct RequestMetrics {
    observer: Arc<dyn RequestObserver>,
}

#[handler]
impl RequestMetrics {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();
        let method = req.method().to_string();
        let route = req.uri().path().to_owned();

        ctrl.call_next(req, depot, res).await;

        let status = res.status_code.unwrap_or(StatusCode::OK);

        self.observer
            .observe(&method, &route, status.as_u16(), started.elapsed());
    }
}

/// `/metrics` scrape handler.
#[derive(Debug, Clone)]
pub struct MetricsEndpoint {
    metrics: HttpMetrics,
}

#[handler]
impl MetricsEndpoint {
    async fn handle(&self, res: &mut Response) {
        let body = match self.metrics.render() {
            Ok(body) => body,
            Err(source) => {
                error!("failed to render metrics response: {source}");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

                return;
            }
        };

        let content_type = match HeaderValue::from_str(TextEncoder::new().format_type()) {
            Ok(value) => value,
            Err(source) => {
                error!("failed to encode metrics content type header: {source}");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

                return;
            }
        };

        res.headers_mut().insert(CONTENT_TYPE, content_type);
        res.render(body);
    }
}
