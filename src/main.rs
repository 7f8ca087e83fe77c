use anyhow::Result;
use oai_server::config::Config;
use oai_server::registry::ToolRegistry;
use oai_server::resources::{self, ResourceRegistry};
use oai_server::server::Server;
use oai_server::tools::{Adder, NoteAppender, UrlFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    pretty_env_logger::init();
    log::info!("Starting OAI tool server...");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::load("config.toml")?;
    log::info!("Configuration loaded successfully");

    // Ensure output directories exist
    config.ensure_directories()?;
    log::info!("Note file target: {}", config.note_path().display());

    // Register tools
    let mut tools = ToolRegistry::new();
    tools.register(Box::new(NoteAppender::new(&config.notes)));
    tools.register(Box::new(UrlFetcher::new()));
    tools.register(Box::new(Adder));

    // Register resources
    let mut res = ResourceRegistry::new();
    resources::register_defaults(&mut res)?;

    // Print startup info
    println!("🤖 {} server is running on stdio", config.server.name);
    println!("   Press Ctrl+C to stop");

    Server::new(tools, res).run().await?;

    log::info!("Server stopped");
    Ok(())
}
