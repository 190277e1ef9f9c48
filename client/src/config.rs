use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the PostFlow API
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("POSTFLOW_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}
