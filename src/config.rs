use std::env;
use url::Url;

/// Environment variable holding the absolute API base URL.
pub const BASE_URL_ENV: &str = "TMF_API_BASE_URL";

lazy_static! {
    static ref DEFAULT_BASE_URL: Url = Url::parse("http://localhost:3000/tmf-api").unwrap();
}

/// Deploy-time configuration. The backend base URL is the only knob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the TMF API, usually ending in `/tmf-api`. Resource
    /// paths are appended to it.
    pub base_url: Url,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Config { base_url }
    }

    /// Resolves the base URL from `TMF_API_BASE_URL`, falling back to the
    /// local development proxy (`http://localhost:3000/tmf-api`) when the
    /// variable is unset or not a valid absolute URL.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .and_then(|raw| Url::parse(&raw).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.clone());
        Config { base_url }
    }
}
