pub mod math;
pub mod note_appender;
pub mod url_fetcher;

pub use math::Adder;
pub use note_appender::NoteAppender;
pub use url_fetcher::{FetchError, UrlFetcher};

use anyhow::Result;
use serde_json::Value;

/// Tool trait for dispatcher-invoked operations.
///
/// Object-safe on purpose: the registry dispatches by name through
/// `dyn Tool`, with arguments carried as JSON and deserialized into each
/// tool's typed argument struct at the trait boundary.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn args_schema(&self) -> Value;
    async fn call(&self, args: Value) -> Result<Value>;
}
