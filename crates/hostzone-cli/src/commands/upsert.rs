use super::AwsArgs;
use anyhow::{bail, Context};
use clap::{ArgGroup, Args};
use colored::Colorize;
use hostzone::{ChangeInfo, HostedZone, RecordType, Route53Api};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Upsert a record set in a hosted zone
#[derive(Args)]
#[command(group(ArgGroup::new("zone").required(true).args(["zone_id", "zone_name"])))]
pub struct UpsertCommand {
    /// Hosted zone id
    #[arg(long)]
    pub zone_id: Option<String>,

    /// Hosted zone name, resolved with a by-name lookup
    #[arg(long)]
    pub zone_name: Option<String>,

    /// Record type (A, AAAA, CNAME, TXT, MX, ...)
    #[arg(long = "type", short = 't')]
    pub record_type: RecordType,

    /// Record name relative to the zone (e.g., "www")
    #[arg(long, short = 'n')]
    pub name: String,

    /// Time to live in seconds
    #[arg(long, default_value = "300")]
    pub ttl: u32,

    /// Record values; TXT values are quoted automatically
    pub values: Vec<String>,
}

impl UpsertCommand {
    pub fn execute(self, aws: &AwsArgs) -> anyhow::Result<()> {
        let api = aws.api()?;

        let rt = tokio::runtime::Runtime::new()?;
        let change = rt.block_on(self.run(api))?;

        println!(
            "{} Upserted {} record {} (change {}, {})",
            "✓".bright_green(),
            self.record_type.to_string().bright_white(),
            self.name.bright_white(),
            change.id.bright_cyan(),
            change.status
        );
        Ok(())
    }

    async fn run(&self, api: Arc<dyn Route53Api>) -> anyhow::Result<ChangeInfo> {
        let zone = self.resolve_zone(api).await?;
        let values = self.values.iter().map(String::as_str);

        let change = match self.record_type {
            RecordType::A => zone.a(&self.name, self.ttl, values).await,
            RecordType::AAAA => zone.aaaa(&self.name, self.ttl, values).await,
            RecordType::CNAME => zone.cname(&self.name, self.ttl, values).await,
            RecordType::TXT => zone.txt(&self.name, self.ttl, values).await,
            other => zone.record(other, &self.name, self.ttl, values).await,
        };

        change.with_context(|| {
            format!(
                "Failed to upsert {} record {} in {}",
                self.record_type,
                self.name,
                zone.name()
            )
        })
    }

    async fn resolve_zone(&self, api: Arc<dyn Route53Api>) -> anyhow::Result<HostedZone> {
        match (&self.zone_id, &self.zone_name) {
            (Some(id), _) => HostedZone::get(api, id, BTreeMap::new())
                .await
                .with_context(|| format!("Failed to get hosted zone {}", id)),
            (None, Some(name)) => {
                match HostedZone::find_by_name(api, name)
                    .await
                    .with_context(|| format!("Failed to look up hosted zone {}", name))?
                {
                    Some(zone) => Ok(zone),
                    None => bail!("No hosted zones listed for {}", name),
                }
            }
            (None, None) => bail!("Either --zone-id or --zone-name is required"),
        }
    }
}
