use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::TabKind;

/// Envelope status that submits the envelope for signature immediately
/// instead of saving it as a draft.
pub const STATUS_SENT: &str = "Sent";

/// `DocuSign` transmits numeric ids, offsets and flags as strings.
fn as_string<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// A signer as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerInput {
    /// Display name of the signer.
    pub name: String,
    /// Email address the signing request is delivered to.
    pub email: String,
}

impl SignerInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Everything needed to build an [`EnvelopeDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeRequest {
    /// Subject line of the signing email.
    pub email_subject: String,
    /// Signers in the order they are expected to sign.
    pub signers: Vec<SignerInput>,
    /// Display name of the document (without extension).
    pub filename: String,
    /// Base64-encoded PDF content.
    pub document_base64: String,
}

/// A document attached to an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(serialize_with = "as_string")]
    pub document_id: u32,
    pub name: String,
    pub file_extension: String,
    pub document_base64: String,
}

/// Unit in which anchor offsets are expressed. Tabs are always placed in
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorUnits {
    Pixels,
}

/// A field placed on the document relative to an anchor string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Text located in the rendered document that positions this tab.
    pub anchor_string: String,

    /// Label identifying the tab within the envelope.
    pub tab_label: String,

    /// Display name shown to the signer.
    pub name: String,

    #[serde(serialize_with = "as_string")]
    pub recipient_id: u32,

    #[serde(serialize_with = "as_string")]
    pub anchor_x_offset: i32,

    #[serde(serialize_with = "as_string")]
    pub anchor_y_offset: i32,

    pub anchor_units: AnchorUnits,

    #[serde(serialize_with = "as_string")]
    pub scale_value: u32,

    /// Whether the signer may leave this tab empty.
    #[serde(serialize_with = "as_string")]
    pub optional: bool,
}

impl Tab {
    /// Returns `true` if the signer must complete this tab.
    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

/// Tabs assigned to a single signer, grouped by field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    pub sign_here_tabs: Vec<Tab>,
    pub full_name_tabs: Vec<Tab>,
    pub company_tabs: Vec<Tab>,
    pub date_signed_tabs: Vec<Tab>,
    pub title_tabs: Vec<Tab>,
}

impl Tabs {
    /// Tabs of the given kind.
    pub fn of_kind(&self, kind: TabKind) -> &[Tab] {
        match kind {
            TabKind::SignHere => &self.sign_here_tabs,
            TabKind::FullName => &self.full_name_tabs,
            TabKind::Company => &self.company_tabs,
            TabKind::DateSigned => &self.date_signed_tabs,
            TabKind::Title => &self.title_tabs,
        }
    }

    pub(crate) fn of_kind_mut(&mut self, kind: TabKind) -> &mut Vec<Tab> {
        match kind {
            TabKind::SignHere => &mut self.sign_here_tabs,
            TabKind::FullName => &mut self.full_name_tabs,
            TabKind::Company => &mut self.company_tabs,
            TabKind::DateSigned => &mut self.date_signed_tabs,
            TabKind::Title => &mut self.title_tabs,
        }
    }
}

/// A recipient who must sign the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub email: String,
    pub name: String,

    /// 1-based id, unique within the envelope.
    #[serde(serialize_with = "as_string")]
    pub recipient_id: u32,

    /// Position in the signing sequence.
    #[serde(serialize_with = "as_string")]
    pub routing_order: u32,

    pub tabs: Tabs,
}

/// Recipients of an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipients {
    pub signers: Vec<Signer>,
}

/// Request body for the create-envelope call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDefinition {
    pub email_subject: String,
    pub documents: Vec<Document>,
    pub recipients: Recipients,
    /// Always [`STATUS_SENT`].
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tab(optional: bool) -> Tab {
        Tab {
            anchor_string: "dcTitleTab3".into(),
            tab_label: "dcTitleTab3".into(),
            name: "Title".into(),
            recipient_id: 3,
            anchor_x_offset: 0,
            anchor_y_offset: 0,
            anchor_units: AnchorUnits::Pixels,
            scale_value: 1,
            optional,
        }
    }

    #[test]
    fn tab_serializes_numbers_and_flags_as_strings() {
        let json = serde_json::to_value(sample_tab(true)).unwrap();
        assert_eq!(json["anchorString"], "dcTitleTab3");
        assert_eq!(json["tabLabel"], "dcTitleTab3");
        assert_eq!(json["recipientId"], "3");
        assert_eq!(json["anchorXOffset"], "0");
        assert_eq!(json["anchorYOffset"], "0");
        assert_eq!(json["anchorUnits"], "pixels");
        assert_eq!(json["scaleValue"], "1");
        assert_eq!(json["optional"], "true");
    }

    #[test]
    fn required_is_inverse_of_optional() {
        assert!(sample_tab(false).is_required());
        assert!(!sample_tab(true).is_required());
    }

    #[test]
    fn document_serializes_camel_case() {
        let doc = Document {
            document_id: 1,
            name: "contract".into(),
            file_extension: "pdf".into(),
            document_base64: "QQ==".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["documentId"], "1");
        assert_eq!(json["fileExtension"], "pdf");
        assert_eq!(json["documentBase64"], "QQ==");
    }

    #[test]
    fn tabs_serialize_all_kinds() {
        let json = serde_json::to_value(Tabs::default()).unwrap();
        for key in [
            "signHereTabs",
            "fullNameTabs",
            "companyTabs",
            "dateSignedTabs",
            "titleTabs",
        ] {
            assert!(json[key].as_array().unwrap().is_empty(), "{key}");
        }
    }

    #[test]
    fn of_kind_mut_targets_matching_slot() {
        let mut tabs = Tabs::default();
        tabs.of_kind_mut(TabKind::Title).push(sample_tab(true));
        assert_eq!(tabs.title_tabs.len(), 1);
        assert_eq!(tabs.of_kind(TabKind::Title).len(), 1);
        assert!(tabs.of_kind(TabKind::SignHere).is_empty());
    }
}
