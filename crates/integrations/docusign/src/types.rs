use serde::{Deserialize, Serialize};

/// Form body of the JWT bearer token request.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub assertion: &'a str,
}

/// Access token issued by the OAuth service.
#[derive(Clone, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// A `DocuSign` account the user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    /// Base URI of the account's REST API host.
    #[serde(default)]
    pub base_uri: Option<String>,
}

/// Response of the OAuth user-info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl UserInfo {
    /// The account envelopes are created in: the first one listed.
    pub fn first_account(&self) -> Option<&Account> {
        self.accounts.first()
    }
}

/// Response of the create-envelope call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    pub envelope_id: String,
    pub status: String,
    #[serde(default)]
    pub status_date_time: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}
