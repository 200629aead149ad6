//! `DocuSign` eSignature client for Quill.
//!
//! Authenticates with the
//! [OAuth JWT grant](https://developers.docusign.com/platform/auth/jwt/),
//! resolves the account to act in from the user-info endpoint, and submits
//! envelopes built by [`quill_envelope`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use quill_docusign::{DocuSignClient, DocuSignConfig, DocuSignEnvironment};
//! use quill_envelope::{EnvelopeRequest, SignerInput, create_envelope};
//!
//! # async fn run(private_key_pem: String) -> Result<(), quill_docusign::DocuSignError> {
//! let config = DocuSignConfig::new("integration-key", "user-guid", private_key_pem)
//!     .with_environment(DocuSignEnvironment::Demo);
//! let client = DocuSignClient::new(config)?;
//!
//! let envelope = create_envelope(&EnvelopeRequest {
//!     email_subject: "Please sign".into(),
//!     signers: vec![SignerInput::new("Alice", "a@x.com")],
//!     filename: "contract".into(),
//!     document_base64: "JVBERi0xLjQK".into(),
//! });
//! let summary = client.send_envelope(&envelope).await?;
//! println!("created {}", summary.envelope_id);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::DocuSignClient;
pub use config::{DocuSignConfig, DocuSignEnvironment};
pub use error::DocuSignError;
pub use types::{Account, EnvelopeSummary, OAuthToken, UserInfo};
