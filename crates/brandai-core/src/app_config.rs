use std::net::SocketAddr;

/// Value shipped in the sample `.env`; treated the same as a missing key.
pub const API_KEY_PLACEHOLDER: &str = "sua_chave_aqui";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `None` when the key is unset, blank, or still the placeholder.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_max_tokens: u32,
    pub openai_timeout_secs: u64,
}

impl AppConfig {
    /// Whether the remote generation backend may be used for this process.
    #[must_use]
    pub fn remote_available(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("openai_temperature", &self.openai_temperature)
            .field("openai_max_tokens", &self.openai_max_tokens)
            .field("openai_timeout_secs", &self.openai_timeout_secs)
            .finish()
    }
}
