//! Envelope request builder for Quill.
//!
//! Turns a subject, an ordered list of signers and a base64 PDF into the
//! request body of the `DocuSign` create-envelope call. Every signer gets one
//! anchored tab per entry of [`TAB_CATALOG`], keyed by routing order.
//!
//! ```rust
//! use quill_envelope::{EnvelopeRequest, SignerInput, create_envelope};
//!
//! let envelope = create_envelope(&EnvelopeRequest {
//!     email_subject: "Please sign the contract".into(),
//!     signers: vec![
//!         SignerInput::new("Alice", "a@x.com"),
//!         SignerInput::new("Bob", "b@x.com"),
//!     ],
//!     filename: "contract".into(),
//!     document_base64: "QQ==".into(),
//! });
//!
//! let bob = &envelope.recipients.signers[1];
//! assert_eq!(bob.tabs.sign_here_tabs[0].anchor_string, "dcSignatureTab2");
//! ```

pub mod builder;
pub mod catalog;
pub mod types;

pub use builder::{
    DOCUMENT_EXTENSION, DOCUMENT_ID, create_document, create_envelope, create_signer,
    create_signer_tabs,
};
pub use catalog::{TAB_CATALOG, TabKind, TabSpec, tab_spec};
pub use types::{
    AnchorUnits, Document, EnvelopeDefinition, EnvelopeRequest, Recipients, STATUS_SENT, Signer,
    SignerInput, Tab, Tabs,
};
