use async_trait::async_trait;

/// Call contract for the generative model endpoint.
///
/// The pipeline makes discrete, non-streaming calls: one for strategy
/// routing, one for generation, and at most one for editorial review. Every
/// call carries its own `max_tokens` output bound. Responses are plain text;
/// when a structured strategy is requested the text is *expected* to be
/// JSON, but parse failure is a normal outcome the caller handles with a
/// documented fallback, never an exception path.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider identifier (e.g. "openai_compatible").
    fn name(&self) -> &str;

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> anyhow::Result<String>;

    /// Warm up the HTTP connection pool (TLS handshake, DNS, HTTP/2 setup).
    /// Default implementation is a no-op; providers with HTTP clients should
    /// override.
    async fn warmup(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
