//! Shutdown signals.

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use tokio::signal;

/// Signal that stopped the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

/// Wait for SIGINT or SIGTERM, then stop accepting connections and give
/// in-flight basket writes `grace` to commit.
pub(crate) async fn listen(handle: ServerHandle, grace: Duration) -> io::Result<ShutdownSignal> {
    let received = wait_for_signal().await?;

    handle.stop_graceful(Some(grace));

    Ok(received)
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<ShutdownSignal> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = signal::ctrl_c() => result.map(|()| ShutdownSignal::Interrupt),
        _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<ShutdownSignal> {
    signal::ctrl_c().await?;

    Ok(ShutdownSignal::Interrupt)
}
