//! TCP control server

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::ControlError;
use crate::protocol::{ControlCommand, ControlResponse};

/// Trait that the application implements to handle control commands
pub trait ControlHandler: Send + 'static {
    fn handle_command(&mut self, cmd: ControlCommand) -> ControlResponse;
}

/// Control server handle - keep this alive to keep the server running
pub struct ControlServer {
    local_addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl ControlServer {
    /// Bind on localhost and start accepting in the background.
    /// Port 0 picks a free port; see [`ControlServer::local_addr`].
    pub async fn bind<H: ControlHandler>(
        handler: Arc<Mutex<H>>,
        port: u16,
    ) -> Result<Self, ControlError> {
        let addr = format!("127.0.0.1:{}", port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ControlError::Bind { addr: addr.clone(), source })?;
        let local_addr = listener.local_addr()?;
        log::info!("Control server listening on {}", local_addr);

        let handle = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, peer)) => {
                        log::info!("Control client connected from {}", peer);
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(stream, handler).await {
                                log::error!("Control connection {} failed: {}", peer, e);
                            }
                            log::info!("Control client disconnected: {}", peer);
                        });
                    }
                    Err(e) => {
                        log::error!("Control server accept error: {}", e);
                    }
                }
            }
        });

        Ok(Self { local_addr, handle })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting new connections.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Parse one request line and run it through the handler.
async fn dispatch<H: ControlHandler>(line: &str, handler: &Mutex<H>) -> ControlResponse {
    match serde_json::from_str::<ControlCommand>(line) {
        Ok(cmd) => {
            log::debug!("Control command: {:?}", cmd);
            let mut h = handler.lock().await;
            h.handle_command(cmd)
        }
        Err(e) => ControlResponse::error(format!("Invalid command JSON: {}", e)),
    }
}

async fn handle_connection<H: ControlHandler>(
    stream: tokio::net::TcpStream,
    handler: Arc<Mutex<H>>,
) -> Result<(), ControlError> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Ok(()); // Connection closed
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = dispatch(trimmed, &handler).await;
        let mut resp_json = serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(
                "{{\"status\":\"error\",\"message\":\"Serialize error: {}\"}}",
                e
            )
        });
        resp_json.push('\n');

        writer.write_all(resp_json.as_bytes()).await?;
        writer.flush().await?;
    }
}
