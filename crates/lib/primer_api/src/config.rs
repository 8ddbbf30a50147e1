//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Google Gemini API key for the chatbot proxy. `None` disables it.
    pub gemini_api_key: Option<String>,
    /// Gemini model used for chat completions.
    pub gemini_model: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable         | Default                  |
    /// |------------------|--------------------------|
    /// | `BIND_ADDR`      | `127.0.0.1:5000`         |
    /// | `GEMINI_API_KEY` | unset (chat disabled)    |
    /// | `GEMINI_MODEL`   | `gemini-2.5-flash-lite`  |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-lite".into()),
        }
    }
}
