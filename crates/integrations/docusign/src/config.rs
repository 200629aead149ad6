use std::time::Duration;

use serde::{Deserialize, Serialize};

/// `DocuSign` platform the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocuSignEnvironment {
    /// Developer sandbox.
    #[default]
    Demo,
    Stage,
    Production,
}

impl DocuSignEnvironment {
    /// Base URL of the OAuth service.
    pub fn oauth_base_url(self) -> &'static str {
        match self {
            Self::Demo => "https://account-d.docusign.com",
            Self::Stage => "https://account-s.docusign.com",
            Self::Production => "https://account.docusign.com",
        }
    }

    /// Base URL of the eSignature REST API.
    pub fn api_base_url(self) -> &'static str {
        match self {
            Self::Demo => "https://demo.docusign.net/restapi",
            Self::Stage => "https://stage.docusign.net/restapi",
            Self::Production => "https://www.docusign.net/restapi",
        }
    }
}

/// Configuration for the `DocuSign` client.
#[derive(Clone)]
pub struct DocuSignConfig {
    /// Integration key (OAuth client id) of the `DocuSign` app.
    pub integrator_key: String,

    /// GUID of the user the app impersonates.
    pub user_id: String,

    /// RSA private key (PEM) registered with the integration key.
    pub private_key_pem: String,

    /// OAuth scopes requested in the JWT grant.
    pub scopes: Vec<String>,

    /// Requested lifetime of the JWT assertion, in seconds.
    pub expires_in: u64,

    /// Base URL of the OAuth service. Override this for testing against a
    /// mock server.
    pub oauth_base_url: String,

    /// Base URL of the eSignature REST API. Override this for testing
    /// against a mock server.
    pub api_base_url: String,

    /// Per-request HTTP timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for DocuSignConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocuSignConfig")
            .field("integrator_key", &self.integrator_key)
            .field("user_id", &self.user_id)
            .field("private_key_pem", &"[REDACTED]")
            .field("scopes", &self.scopes)
            .field("expires_in", &self.expires_in)
            .field("oauth_base_url", &self.oauth_base_url)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl DocuSignConfig {
    /// Create a configuration for the demo environment.
    ///
    /// Requests the `signature` and `impersonation` scopes with a 5000 second
    /// assertion lifetime.
    pub fn new(
        integrator_key: impl Into<String>,
        user_id: impl Into<String>,
        private_key_pem: impl Into<String>,
    ) -> Self {
        let environment = DocuSignEnvironment::default();
        Self {
            integrator_key: integrator_key.into(),
            user_id: user_id.into(),
            private_key_pem: private_key_pem.into(),
            scopes: vec!["signature".to_owned(), "impersonation".to_owned()],
            expires_in: 5000,
            oauth_base_url: environment.oauth_base_url().to_owned(),
            api_base_url: environment.api_base_url().to_owned(),
            timeout: None,
        }
    }

    /// Point both base URLs at the given environment.
    #[must_use]
    pub fn with_environment(mut self, environment: DocuSignEnvironment) -> Self {
        self.oauth_base_url = environment.oauth_base_url().to_owned();
        self.api_base_url = environment.api_base_url().to_owned();
        self
    }

    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_expires_in(mut self, seconds: u64) -> Self {
        self.expires_in = seconds;
        self
    }

    /// Override the OAuth base URL (useful for testing).
    #[must_use]
    pub fn with_oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = url.into();
        self
    }

    /// Override the REST API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Bound every HTTP request to `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// OAuth host used as the JWT audience, e.g. `account-d.docusign.com`.
    pub fn oauth_audience(&self) -> &str {
        let url = self.oauth_base_url.as_str();
        url.strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url)
            .trim_end_matches('/')
    }
}
