use std::time::Duration;

/// Connection settings for the REST backend.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Supplies the Bearer token for each request.
///
/// The front end owns where credentials live (keychain, config file); the
/// transport only asks for the current token, so sessions stay testable
/// without ambient storage.
pub trait TokenProvider: Send + Sync {
    /// The current token, or `None` when the user is signed out.
    fn token(&self) -> Option<String>;
}

/// A fixed token, e.g. read from a config file at startup.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No credentials; authenticated endpoints will answer 401.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}
