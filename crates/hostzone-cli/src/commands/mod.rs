mod find;
mod get;
mod upsert;

pub use find::FindCommand;
pub use get::GetCommand;
pub use upsert::UpsertCommand;

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use hostzone::config::DEFAULT_ENDPOINT;
use hostzone::{HostedZone, Route53Api, Route53Client, Route53Credentials};
use std::sync::Arc;

/// AWS connection options shared by every command
#[derive(Args, Clone)]
pub struct AwsArgs {
    /// AWS access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true, global = true)]
    pub access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(
        long,
        env = "AWS_SECRET_ACCESS_KEY",
        hide_env_values = true,
        global = true
    )]
    pub secret_access_key: Option<String>,

    /// Session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true, global = true)]
    pub session_token: Option<String>,

    /// Signing region
    #[arg(long, env = "AWS_REGION", global = true)]
    pub region: Option<String>,

    /// Route 53 API endpoint
    #[arg(long, env = "HOSTZONE_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,
}

impl AwsArgs {
    pub fn credentials(&self) -> anyhow::Result<Route53Credentials> {
        let access_key_id = self
            .access_key_id
            .clone()
            .context("Missing AWS access key id (--access-key-id or AWS_ACCESS_KEY_ID)")?;
        let secret_access_key = self.secret_access_key.clone().context(
            "Missing AWS secret access key (--secret-access-key or AWS_SECRET_ACCESS_KEY)",
        )?;

        let mut credentials = Route53Credentials::new(access_key_id, secret_access_key);
        credentials.session_token = self.session_token.clone();
        credentials.region = self.region.clone();
        Ok(credentials)
    }

    pub fn api(&self) -> anyhow::Result<Arc<dyn Route53Api>> {
        let client = Route53Client::with_endpoint(self.credentials()?, self.endpoint.as_str())
            .context("Failed to create Route 53 client")?;
        Ok(Arc::new(client))
    }
}

/// Print a zone as pretty JSON on stdout
pub(crate) fn print_zone(zone: &HostedZone) -> anyhow::Result<()> {
    if !zone.is_identified() {
        eprintln!(
            "{} zone {} has no id; record changes will be rejected",
            "warning:".bright_yellow().bold(),
            zone.name().bright_white()
        );
    }
    println!("{}", serde_json::to_string_pretty(zone.info())?);
    Ok(())
}
