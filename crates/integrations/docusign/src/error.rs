use thiserror::Error;

/// Errors returned by the `DocuSign` client.
///
/// None of these are retried; they surface to the caller as-is.
#[derive(Debug, Error)]
pub enum DocuSignError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// `DocuSign` returned a non-success response.
    #[error("DocuSign API error: {0}")]
    Api(String),

    /// `DocuSign` rejected the credentials or the app lacks consent.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// `DocuSign` returned HTTP 429 (Too Many Requests).
    #[error("rate limited by DocuSign")]
    RateLimited,

    /// The private key could not be loaded or the assertion could not be
    /// signed.
    #[error("credential error: {0}")]
    Credential(String),

    /// The user-info response listed no accounts.
    #[error("user has no DocuSign accounts")]
    NoAccounts,
}

impl DocuSignError {
    /// Build an error from a non-success HTTP status and response body.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Self::RateLimited;
        }

        let detail = describe_body(body);
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            Self::Unauthorized(format!("HTTP {status}: {detail}"))
        } else {
            Self::Api(format!("HTTP {status}: {detail}"))
        }
    }
}

/// Error bodies come in two shapes: OAuth (`error`, `error_description`) and
/// REST (`errorCode`, `message`). Anything else is passed through verbatim.
fn describe_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_owned();
    };

    let field = |name: &str| value.get(name).and_then(serde_json::Value::as_str);
    match (field("errorCode"), field("message"), field("error")) {
        (Some(code), Some(message), _) => format!("{code}: {message}"),
        (Some(code), None, _) => code.to_owned(),
        (None, _, Some(error)) => match field("error_description") {
            Some(description) => format!("{error}: {description}"),
            None => error.to_owned(),
        },
        _ => body.to_owned(),
    }
}
