//! Palindrome Server
//!
//! JSON-RPC server exposing palindrome-core to other processes.
//! Communicates via stdin/stdout for easy subprocess management.

use anyhow::Result;
use palindrome_core::protocol::RpcMessage;
use palindrome_core::{Request, Response};
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod handler;
mod reader;

use config::ServerConfig;
use reader::{Frame, FrameReader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging to stderr (stdout is for JSON-RPC)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    info!("palindrome-server starting...");
    debug!("Config: {:?}", config);

    let mut frames = FrameReader::new(BufReader::new(io::stdin()), config.max_request_bytes);
    let mut stdout = io::stdout();

    let mut handler = handler::Handler::new();

    loop {
        let frame = match frames.next_frame().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read request: {}", e);
                break;
            }
        };

        let mut shutdown = false;
        let response = match frame {
            Frame::Line(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                debug!("Received: {}", line);
                match serde_json::from_str::<RpcMessage<Request>>(&line) {
                    Ok(msg) => {
                        shutdown = matches!(msg.content, Request::Shutdown);
                        let result = handler.handle(&msg.content);
                        RpcMessage::new(msg.id.unwrap_or(0), result)
                    }
                    Err(e) => RpcMessage::new(0, Response::parse_error(e)),
                }
            }
            Frame::Invalid(e) => {
                warn!("Request is not valid UTF-8: {}", e);
                RpcMessage::new(0, Response::parse_error(e))
            }
            Frame::TooLarge => {
                warn!("Request exceeds limit of {} bytes", config.max_request_bytes);
                RpcMessage::new(
                    0,
                    Response::error(
                        format!("Request exceeds {} bytes", config.max_request_bytes),
                        "request_too_large",
                    ),
                )
            }
        };

        // Send response
        let mut response_json = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_json);
        response_json.push('\n');
        stdout.write_all(response_json.as_bytes()).await?;
        stdout.flush().await?;

        if shutdown {
            break;
        }
    }

    info!(
        "palindrome-server shutting down after {} requests",
        handler.handled()
    );
    Ok(())
}
