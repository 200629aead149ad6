use std::path::Path;

use quill_docusign::DocuSignClient;

use crate::OutputFormat;
use crate::config::QuillConfig;

pub async fn run(config_path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let config = QuillConfig::load(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let client = DocuSignClient::new(config.docusign.to_client_config(base_dir)?)?;

    let token = client.request_jwt_user_token().await?;
    let user_info = client.get_user_info(&token.access_token).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&user_info.accounts)?);
        }
        OutputFormat::Text => {
            if user_info.accounts.is_empty() {
                println!("No accounts found.");
                return Ok(());
            }
            for (index, account) in user_info.accounts.iter().enumerate() {
                let marker = if index == 0 { "*" } else { " " };
                println!(
                    "{marker} {}  {}{}",
                    account.account_id,
                    account.account_name.as_deref().unwrap_or("-"),
                    if account.is_default { "  (default)" } else { "" },
                );
            }
        }
    }

    Ok(())
}
