use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Fatal errors raised before the server starts accepting requests.
/// Request handling itself has no error path.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}
