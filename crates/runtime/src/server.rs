//! Binding, serving, and draining on shutdown.

use std::io;

use salvo::{
    Service,
    conn::{Listener as _, TcpListener},
    server::{Server, ServerHandle},
};
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};

/// Errors raised before the server accepts its first connection.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listen address could not be resolved or bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address as configured.
        addr: String,

        /// Underlying bind failure.
        #[source]
        source: salvo::Error,
    },
}

/// A signal handler could not be installed.
#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub struct ShutdownSignalError {
    signal: &'static str,

    #[source]
    source: io::Error,
}

/// Signal that asked the process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// Ctrl+C / SIGINT.
    Interrupt,

    /// SIGTERM.
    Terminate,
}

/// Resolve once the process is asked to stop.
///
/// # Errors
///
/// Returns an error when a signal handler cannot be installed.
pub async fn shutdown_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let interrupt = async {
        signal::ctrl_c().await.map_err(|source| ShutdownSignalError {
            signal: "Ctrl+C",
            source,
        })
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|source| ShutdownSignalError {
                signal: "SIGTERM",
                source,
            })?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownSignalError>>();

    tokio::select! {
        result = interrupt => result.map(|()| ShutdownSignal::Interrupt),
        result = terminate => result.map(|()| ShutdownSignal::Terminate),
    }
}

async fn drain_on_shutdown(name: String, handle: ServerHandle) {
    match shutdown_signal().await {
        Ok(signal) => {
            info!(service = %name, ?signal, "shutdown requested, draining in-flight requests");

            handle.stop_graceful(None);
        }
        Err(signal_error) => error!(service = %name, "{signal_error}"),
    }
}

/// Bind `addr`, serve `service` until a shutdown signal, then drain.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] when the address cannot be bound.
pub async fn serve(name: &str, addr: &str, service: Service) -> Result<(), ServeError> {
    let acceptor = TcpListener::new(addr.to_owned())
        .try_bind()
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_owned(),
            source,
        })?;

    info!(service = name, %addr, "listening");

    let server = Server::new(acceptor);

    tokio::spawn(drain_on_shutdown(name.to_owned(), server.handle()));

    server.serve(service).await;

    info!(service = name, "stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::Router;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn serve_reports_address_in_use() -> TestResult {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = occupied.local_addr()?.to_string();

        let result = serve("test", &addr, Service::new(Router::new())).await;

        assert!(
            matches!(&result, Err(ServeError::Bind { addr: failed, .. }) if *failed == addr),
            "expected a bind error for {addr}, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn serve_reports_unresolvable_address() {
        let result = serve("test", "not an address", Service::new(Router::new())).await;

        assert!(
            matches!(result, Err(ServeError::Bind { .. })),
            "expected a bind error, got {result:?}"
        );
    }
}
