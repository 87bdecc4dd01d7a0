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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub search_base_url: String,
    pub reddit_base_url: String,
    pub scrape_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub min_request_interval_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub analysis_ttl_secs: u64,
    pub sweep_interval_secs: u64,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_from_email: String,
    pub product_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("search_base_url", &self.search_base_url)
            .field("reddit_base_url", &self.reddit_base_url)
            .field("scrape_timeout_secs", &self.scrape_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("min_request_interval_ms", &self.min_request_interval_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("analysis_ttl_secs", &self.analysis_ttl_secs)
            .field("sweep_interval_secs", &self.sweep_interval_secs)
            .field(
                "sendgrid_api_key",
                &self.sendgrid_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("sendgrid_from_email", &self.sendgrid_from_email)
            .field("product_url", &self.product_url)
            .finish()
    }
}
