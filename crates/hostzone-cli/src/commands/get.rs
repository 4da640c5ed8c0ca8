use super::{print_zone, AwsArgs};
use anyhow::Context;
use clap::Args;
use hostzone::HostedZone;
use std::collections::BTreeMap;
use tracing::debug;

/// Fetch a hosted zone by id
#[derive(Args)]
pub struct GetCommand {
    /// Hosted zone id (e.g., "Z1D633PJN98FT9" or "/hostedzone/Z1D633PJN98FT9")
    pub id: String,

    /// Extra request parameter, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl GetCommand {
    pub fn execute(self, aws: &AwsArgs) -> anyhow::Result<()> {
        let api = aws.api()?;
        let extra_params: BTreeMap<String, String> = self.params.into_iter().collect();
        debug!("Fetching hosted zone {} ({} extra params)", self.id, extra_params.len());

        let rt = tokio::runtime::Runtime::new()?;
        let zone = rt
            .block_on(HostedZone::get(api, &self.id, extra_params))
            .with_context(|| format!("Failed to get hosted zone {}", self.id))?;

        print_zone(&zone)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid KEY=VALUE: no `=` found in `{}`", s)),
    }
}
