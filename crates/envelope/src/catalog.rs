/// Kinds of field placed for every signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    SignHere,
    FullName,
    Company,
    DateSigned,
    Title,
}

/// One row of the field catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub kind: TabKind,
    /// Anchor text prefix; the signer's routing order is appended to it.
    pub anchor_prefix: &'static str,
    /// Display name of the field.
    pub name: &'static str,
    pub required: bool,
}

/// Fields placed for every signer, in placement order.
///
/// Documents carry one anchor per signer, e.g. `dcSignatureTab1` and
/// `dcSignatureTab2` for a two-signer envelope.
pub static TAB_CATALOG: [TabSpec; 5] = [
    TabSpec {
        kind: TabKind::SignHere,
        anchor_prefix: "dcSignatureTab",
        name: "Please Sign Here",
        required: true,
    },
    TabSpec {
        kind: TabKind::FullName,
        anchor_prefix: "dFullNameTab",
        name: "Full Name",
        required: false,
    },
    TabSpec {
        kind: TabKind::Company,
        anchor_prefix: "dcCompanyNameTab",
        name: "Company Name",
        required: false,
    },
    TabSpec {
        kind: TabKind::DateSigned,
        anchor_prefix: "dcDateSignedTab",
        name: "Date Signed",
        required: true,
    },
    TabSpec {
        kind: TabKind::Title,
        anchor_prefix: "dcTitleTab",
        name: "Title",
        required: false,
    },
];

/// Look up the catalog row for a kind.
pub fn tab_spec(kind: TabKind) -> &'static TabSpec {
    let index = match kind {
        TabKind::SignHere => 0,
        TabKind::FullName => 1,
        TabKind::Company => 2,
        TabKind::DateSigned => 3,
        TabKind::Title => 4,
    };
    &TAB_CATALOG[index]
}
