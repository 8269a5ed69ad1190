//! Text generation seam.

use crate::error::Result;

/// A stateless prompt-in, completion-out service.
///
/// One call is one request. Implementations do not retry and do not stream;
/// failures come back as `Network` or `Parse` errors carrying a message fit
/// for a notification.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
