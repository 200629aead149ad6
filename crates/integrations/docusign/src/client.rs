use jsonwebtoken::EncodingKey;
use quill_envelope::EnvelopeDefinition;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::auth::{JWT_BEARER_GRANT, JwtClaims, encode_assertion, load_signing_key};
use crate::config::DocuSignConfig;
use crate::error::DocuSignError;
use crate::types::{EnvelopeSummary, OAuthToken, TokenRequest, UserInfo};

/// Client for the `DocuSign` OAuth service and eSignature REST API.
pub struct DocuSignClient {
    config: DocuSignConfig,
    client: Client,
    signing_key: EncodingKey,
}

impl DocuSignClient {
    /// Create a new client with the given configuration.
    ///
    /// Requests are only bounded in time when [`DocuSignConfig::timeout`] is
    /// set. Fails if the configured private key is not a valid RSA PEM.
    pub fn new(config: DocuSignConfig) -> Result<Self, DocuSignError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Self::with_client(config, client)
    }

    /// Create a new client with a custom HTTP client.
    pub fn with_client(config: DocuSignConfig, client: Client) -> Result<Self, DocuSignError> {
        let signing_key = load_signing_key(&config.private_key_pem)?;
        Ok(Self {
            config,
            client,
            signing_key,
        })
    }

    pub fn config(&self) -> &DocuSignConfig {
        &self.config
    }

    fn token_url(&self) -> String {
        format!("{}/oauth/token", self.config.oauth_base_url)
    }

    fn user_info_url(&self) -> String {
        format!("{}/oauth/userinfo", self.config.oauth_base_url)
    }

    fn envelopes_url(&self, account_id: &str) -> String {
        format!(
            "{}/v2.1/accounts/{account_id}/envelopes",
            self.config.api_base_url
        )
    }

    /// Exchange a signed JWT assertion for an access token.
    #[instrument(skip(self), fields(integrator_key = %self.config.integrator_key))]
    pub async fn request_jwt_user_token(&self) -> Result<OAuthToken, DocuSignError> {
        let claims = JwtClaims::new(&self.config, jsonwebtoken::get_current_timestamp());
        let assertion = encode_assertion(&claims, &self.signing_key)?;

        debug!(scope = %claims.scope, "requesting JWT user token");

        let response = self
            .client
            .post(self.token_url())
            .form(&TokenRequest {
                grant_type: JWT_BEARER_GRANT,
                assertion: &assertion,
            })
            .send()
            .await?;

        let token: OAuthToken = check_status(response).await?.json().await?;
        Ok(token)
    }

    /// Look up the user and the accounts it can act in.
    #[instrument(skip(self, access_token))]
    pub async fn get_user_info(&self, access_token: &str) -> Result<UserInfo, DocuSignError> {
        debug!("fetching user info");

        let response = self
            .client
            .get(self.user_info_url())
            .bearer_auth(access_token)
            .send()
            .await?;

        let user_info: UserInfo = check_status(response).await?.json().await?;
        Ok(user_info)
    }

    /// Create an envelope in the given account.
    #[instrument(skip(self, access_token, envelope), fields(signers = envelope.recipients.signers.len()))]
    pub async fn create_envelope(
        &self,
        access_token: &str,
        account_id: &str,
        envelope: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary, DocuSignError> {
        debug!(subject = %envelope.email_subject, "creating envelope");

        let response = self
            .client
            .post(self.envelopes_url(account_id))
            .bearer_auth(access_token)
            .json(envelope)
            .send()
            .await?;

        let summary: EnvelopeSummary = check_status(response).await?.json().await?;

        info!(envelope_id = %summary.envelope_id, status = %summary.status, "envelope created");

        Ok(summary)
    }

    /// Authenticate, resolve the first account, and create the envelope.
    ///
    /// Any failure aborts the sequence and is returned unchanged.
    pub async fn send_envelope(
        &self,
        envelope: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary, DocuSignError> {
        let token = self.request_jwt_user_token().await?;
        let user_info = self.get_user_info(&token.access_token).await?;
        let account = user_info.first_account().ok_or(DocuSignError::NoAccounts)?;

        debug!(account_id = %account.account_id, "using first account");

        self.create_envelope(&token.access_token, &account.account_id, envelope)
            .await
    }
}

/// Pass successful responses through; turn anything else into an error.
async fn check_status(response: Response) -> Result<Response, DocuSignError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        warn!("DocuSign API rate limit hit");
    }

    let body = response.text().await.unwrap_or_default();
    Err(DocuSignError::from_status(status, &body))
}
