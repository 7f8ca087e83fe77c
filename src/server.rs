use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::registry::ToolRegistry;
use crate::resources::ResourceRegistry;

/// One request per line of stdin, one JSON response per line of stdout.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Request {
    Tool {
        op: String,
        #[serde(default)]
        args: Value,
    },
    Resource {
        resource: String,
    },
}

/// Line-oriented stdio front end over the registries.
///
/// Stands in for an external dispatcher; the registries work without it.
pub struct Server {
    tools: ToolRegistry,
    resources: ResourceRegistry,
}

impl Server {
    pub fn new(tools: ToolRegistry, resources: ResourceRegistry) -> Self {
        Self { tools, resources }
    }

    async fn handle_request(&self, request: Request) -> Result<Value> {
        match request {
            Request::Tool { op, args } => {
                if op == "list_tools" {
                    return Ok(serde_json::to_value(self.tools.list())?);
                }
                self.tools.dispatch(&op, args).await
            }
            Request::Resource { resource } => {
                Ok(json!(self.resources.read(&resource)?))
            }
        }
    }

    /// Parse one input line and produce the response envelope.
    async fn handle_line(&self, line: &str) -> Value {
        let request: Request = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => return json!({ "error": format!("Invalid request: {}", e) }),
        };

        match self.handle_request(request).await {
            Ok(value) => json!({ "ok": value }),
            Err(e) => {
                log::warn!("Server: request failed: {:#}", e);
                json!({ "error": e.to_string() })
            }
        }
    }

    /// Serve until stdin closes.
    pub async fn run(self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            stdout.write_all(response.to_string().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        log::info!("Server: stdin closed, shutting down");
        Ok(())
    }
}
