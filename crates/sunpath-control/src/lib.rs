//! Control surface for sunpath - line-delimited JSON over TCP
//!
//! Start the control server in your app:
//! ```ignore
//! let handler = Arc::new(Mutex::new(MySimulator::new()));
//! let server = ControlServer::bind(handler, DEFAULT_PORT).await?;
//! ```

pub mod client;
pub mod protocol;
pub mod server;

pub use client::ControlClient;
pub use protocol::*;
pub use server::{ControlHandler, ControlServer};

/// Default control server port
pub const DEFAULT_PORT: u16 = 9743;

/// Transport failures. Command failures travel as `ControlResponse::Error`.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Failed to bind control server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Control connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed control message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Control server closed the connection")]
    Closed,
}
