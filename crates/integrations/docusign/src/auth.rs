use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::config::DocuSignConfig;
use crate::error::DocuSignError;

/// OAuth grant type for exchanging a signed JWT for an access token.
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claims of the JWT assertion sent to the OAuth token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Integration key.
    pub iss: String,
    /// Impersonated user id.
    pub sub: String,
    /// OAuth host.
    pub aud: String,
    /// Issued at (seconds since epoch).
    pub iat: u64,
    /// Expiry (seconds since epoch).
    pub exp: u64,
    /// Space-separated scopes.
    pub scope: String,
}

impl JwtClaims {
    pub fn new(config: &DocuSignConfig, now: u64) -> Self {
        Self {
            iss: config.integrator_key.clone(),
            sub: config.user_id.clone(),
            aud: config.oauth_audience().to_owned(),
            iat: now,
            exp: now.saturating_add(config.expires_in),
            scope: config.scopes.join(" "),
        }
    }
}

/// Parse the RSA private key used to sign assertions.
pub fn load_signing_key(private_key_pem: &str) -> Result<EncodingKey, DocuSignError> {
    EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| DocuSignError::Credential(format!("invalid RSA private key: {e}")))
}

/// Sign the claims with RS256.
pub fn encode_assertion(claims: &JwtClaims, key: &EncodingKey) -> Result<String, DocuSignError> {
    encode(&Header::new(Algorithm::RS256), claims, key)
        .map_err(|e| DocuSignError::Credential(format!("JWT encoding failed: {e}")))
}
