use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Args;
use quill_docusign::DocuSignClient;
use quill_envelope::{EnvelopeRequest, SignerInput, create_envelope};
use tracing::info;

use crate::OutputFormat;
use crate::config::QuillConfig;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Subject line of the signing email.
    #[arg(long)]
    pub subject: String,
    /// PDF to send for signature.
    #[arg(long)]
    pub document: PathBuf,
    /// Signer as "Name <email>", in signing order. Repeatable.
    #[arg(long = "signer", value_parser = parse_signer, required = true)]
    pub signers: Vec<SignerInput>,
    /// Document display name. Defaults to the file stem.
    #[arg(long)]
    pub name: Option<String>,
    /// Print the envelope request instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse `Name <email>`.
pub fn parse_signer(s: &str) -> Result<SignerInput, String> {
    let s = s.trim();
    let (name, rest) = s
        .split_once('<')
        .ok_or_else(|| format!("invalid signer `{s}`: expected \"Name <email>\""))?;
    let email = rest
        .strip_suffix('>')
        .ok_or_else(|| format!("invalid signer `{s}`: missing closing `>`"))?;

    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return Err(format!("invalid signer `{s}`: name and email are required"));
    }
    Ok(SignerInput::new(name, email))
}

fn display_name(args: &SendArgs) -> String {
    args.name.clone().unwrap_or_else(|| {
        args.document
            .file_stem()
            .map_or_else(|| "document".to_owned(), |s| s.to_string_lossy().into_owned())
    })
}

fn build_request(args: &SendArgs, document: &[u8]) -> EnvelopeRequest {
    EnvelopeRequest {
        email_subject: args.subject.clone(),
        signers: args.signers.clone(),
        filename: display_name(args),
        document_base64: STANDARD.encode(document),
    }
}

pub async fn run(config_path: &Path, args: &SendArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let document = tokio::fs::read(&args.document)
        .await
        .with_context(|| format!("failed to read document '{}'", args.document.display()))?;

    let envelope = create_envelope(&build_request(args, &document));

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let config = QuillConfig::load(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let client = DocuSignClient::new(config.docusign.to_client_config(base_dir)?)?;

    info!(signers = envelope.recipients.signers.len(), "sending envelope");
    let summary = client.send_envelope(&envelope).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!("Envelope {} created ({}).", summary.envelope_id, summary.status);
        }
    }

    Ok(())
}
