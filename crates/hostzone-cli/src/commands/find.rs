use super::{print_zone, AwsArgs};
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use hostzone::HostedZone;

/// Find a hosted zone by DNS name
#[derive(Args)]
pub struct FindCommand {
    /// Zone name; a trailing dot is added when missing
    pub name: String,
}

impl FindCommand {
    pub fn execute(self, aws: &AwsArgs) -> anyhow::Result<()> {
        let api = aws.api()?;

        let rt = tokio::runtime::Runtime::new()?;
        let found = rt
            .block_on(HostedZone::find_by_name(api, &self.name))
            .with_context(|| format!("Failed to look up hosted zone {}", self.name))?;

        match found {
            Some(zone) => print_zone(&zone),
            None => {
                println!(
                    "{} No hosted zones listed for {}",
                    "ℹ".bright_blue(),
                    self.name.bright_white()
                );
                Ok(())
            }
        }
    }
}
