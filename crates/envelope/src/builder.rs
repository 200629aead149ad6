use crate::catalog::{TAB_CATALOG, TabSpec};
use crate::types::{
    AnchorUnits, Document, EnvelopeDefinition, EnvelopeRequest, Recipients, STATUS_SENT, Signer,
    SignerInput, Tab, Tabs,
};

/// Id of the single document attached to every envelope.
pub const DOCUMENT_ID: u32 = 1;

/// Extension of the attached document.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Wrap a base64 payload as an envelope document. No validation is done;
/// malformed content is rejected by the service.
pub fn create_document(
    document_id: u32,
    name: impl Into<String>,
    file_extension: impl Into<String>,
    document_base64: impl Into<String>,
) -> Document {
    Document {
        document_id,
        name: name.into(),
        file_extension: file_extension.into(),
        document_base64: document_base64.into(),
    }
}

/// Build the tabs of one catalog kind for a signer.
///
/// Returns a single tab anchored at `anchor_prefix` followed by the routing
/// order, so that repeated per-signer anchors stay distinct.
pub fn create_signer_tabs(spec: &TabSpec, recipient_id: u32, routing_order: u32) -> Vec<Tab> {
    let anchor = format!("{}{routing_order}", spec.anchor_prefix);
    vec![Tab {
        anchor_string: anchor.clone(),
        tab_label: anchor,
        name: spec.name.to_owned(),
        recipient_id,
        anchor_x_offset: 0,
        anchor_y_offset: 0,
        anchor_units: AnchorUnits::Pixels,
        scale_value: 1,
        optional: !spec.required,
    }]
}

/// Build a signer with one tab per catalog kind.
pub fn create_signer(signer: &SignerInput, recipient_id: u32, routing_order: u32) -> Signer {
    let mut tabs = Tabs::default();
    for spec in &TAB_CATALOG {
        tabs.of_kind_mut(spec.kind)
            .extend(create_signer_tabs(spec, recipient_id, routing_order));
    }

    Signer {
        email: signer.email.clone(),
        name: signer.name.clone(),
        recipient_id,
        routing_order,
        tabs,
    }
}

/// Build the create-envelope request body.
///
/// Signers are routed in list order: the first signer gets recipient id and
/// routing order 1, the next 2, and so on. The envelope is marked
/// [`STATUS_SENT`] so it goes out for signature on creation.
pub fn create_envelope(request: &EnvelopeRequest) -> EnvelopeDefinition {
    let document = create_document(
        DOCUMENT_ID,
        request.filename.as_str(),
        DOCUMENT_EXTENSION,
        request.document_base64.as_str(),
    );

    let signers = (1u32..)
        .zip(&request.signers)
        .map(|(position, signer)| create_signer(signer, position, position))
        .collect();

    EnvelopeDefinition {
        email_subject: request.email_subject.clone(),
        documents: vec![document],
        recipients: Recipients { signers },
        status: STATUS_SENT.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TabKind, tab_spec};

    fn request(signers: Vec<SignerInput>) -> EnvelopeRequest {
        EnvelopeRequest {
            email_subject: "Please sign".into(),
            signers,
            filename: "contract".into(),
            document_base64: "QQ==".into(),
        }
    }

    #[test]
    fn document_passes_fields_through() {
        let doc = create_document(7, "nda", "docx", "not-base64");
        assert_eq!(doc.document_id, 7);
        assert_eq!(doc.name, "nda");
        assert_eq!(doc.file_extension, "docx");
        assert_eq!(doc.document_base64, "not-base64");
    }

    #[test]
    fn signer_tabs_append_routing_order() {
        let tabs = create_signer_tabs(tab_spec(TabKind::SignHere), 4, 2);
        assert_eq!(tabs.len(), 1);
        let tab = &tabs[0];
        assert_eq!(tab.anchor_string, "dcSignatureTab2");
        assert_eq!(tab.tab_label, "dcSignatureTab2");
        assert_eq!(tab.name, "Please Sign Here");
        assert_eq!(tab.recipient_id, 4);
        assert!(tab.is_required());
    }

    #[test]
    fn signer_tabs_fixed_placement() {
        let tab = &create_signer_tabs(tab_spec(TabKind::Company), 1, 1)[0];
        assert_eq!(tab.anchor_x_offset, 0);
        assert_eq!(tab.anchor_y_offset, 0);
        assert_eq!(tab.anchor_units, AnchorUnits::Pixels);
        assert_eq!(tab.scale_value, 1);
        assert!(tab.optional);
    }

    #[test]
    fn signer_gets_one_tab_per_kind() {
        let signer = create_signer(&SignerInput::new("Alice", "a@x.com"), 3, 3);
        assert_eq!(signer.email, "a@x.com");
        assert_eq!(signer.name, "Alice");
        for spec in &TAB_CATALOG {
            let tabs = signer.tabs.of_kind(spec.kind);
            assert_eq!(tabs.len(), 1, "{:?}", spec.kind);
            assert_eq!(tabs[0].anchor_string, format!("{}3", spec.anchor_prefix));
            assert_eq!(tabs[0].is_required(), spec.required);
        }
    }

    #[test]
    fn envelope_assigns_positions_in_order() {
        let signers = (0..4)
            .map(|i| SignerInput::new(format!("S{i}"), format!("s{i}@x.com")))
            .collect();
        let envelope = create_envelope(&request(signers));
        let ids: Vec<(u32, u32)> = envelope
            .recipients
            .signers
            .iter()
            .map(|s| (s.recipient_id, s.routing_order))
            .collect();
        assert_eq!(ids, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(envelope.recipients.signers[2].name, "S2");
    }

    #[test]
    fn envelope_has_single_pdf_document_and_sent_status() {
        let envelope = create_envelope(&request(vec![SignerInput::new("A", "a@x.com")]));
        assert_eq!(envelope.status, "Sent");
        assert_eq!(envelope.email_subject, "Please sign");
        assert_eq!(envelope.documents.len(), 1);
        assert_eq!(envelope.documents[0].document_id, 1);
        assert_eq!(envelope.documents[0].file_extension, "pdf");
        assert_eq!(envelope.documents[0].name, "contract");
    }

    #[test]
    fn empty_signer_list_is_not_rejected_locally() {
        let envelope = create_envelope(&request(Vec::new()));
        assert!(envelope.recipients.signers.is_empty());
    }
}
