//! Client configuration

/// Connection settings for the hosted backend, consumed when wiring a
/// concrete store gateway
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted store
    pub store_url: String,
    /// Publishable API key sent with every request
    pub anon_key: String,
    /// IANA timezone the business operates in
    pub timezone: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            store_url: std::env::var("TALLY_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            anon_key: std::env::var("TALLY_STORE_ANON_KEY").unwrap_or_default(),
            timezone: std::env::var("TALLY_TIMEZONE").unwrap_or_else(|_| "UTC".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
