use std::net::SocketAddr;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the hosted image CDN, when one is configured.
    pub image_host_url: Option<String>,
    pub http_timeout_secs: u64,
    /// Upper bound for a single image candidate, in bytes.
    pub image_max_bytes: u64,
    /// Concurrent in-flight requests when verifying hosted image URLs.
    pub url_check_concurrency: usize,
}
