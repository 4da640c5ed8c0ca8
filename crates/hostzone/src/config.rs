//! Route53 credentials and client settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ZoneError;

pub const DEFAULT_ENDPOINT: &str = "https://route53.amazonaws.com";
/// Route53 is a global service signed against us-east-1
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// AWS credentials for Route53.
///
/// The IAM principal needs `route53:GetHostedZone`,
/// `route53:ListHostedZonesByName` and `route53:ChangeResourceRecordSets`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Route53Credentials {
    pub access_key_id: String,

    pub secret_access_key: String,

    /// Session token for temporary credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Signing region, defaults to us-east-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl std::fmt::Debug for Route53Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .field("region", &self.region)
            .finish()
    }
}

impl Route53Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
            region: None,
        }
    }

    /// Read the standard `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
    /// `AWS_SESSION_TOKEN` and `AWS_REGION` environment variables
    pub fn from_env() -> Result<Self, ZoneError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ZoneError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let access_key_id = non_empty("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| ZoneError::InvalidCredentials("AWS_ACCESS_KEY_ID is not set".into()))?;
        let secret_access_key = non_empty("AWS_SECRET_ACCESS_KEY").ok_or_else(|| {
            ZoneError::InvalidCredentials("AWS_SECRET_ACCESS_KEY is not set".into())
        })?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: non_empty("AWS_SESSION_TOKEN"),
            region: non_empty("AWS_REGION"),
        })
    }

    pub fn validate(&self) -> Result<(), ZoneError> {
        if self.access_key_id.trim().is_empty() {
            return Err(ZoneError::InvalidCredentials(
                "access_key_id must not be empty".to_string(),
            ));
        }
        if self.secret_access_key.trim().is_empty() {
            return Err(ZoneError::InvalidCredentials(
                "secret_access_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }
}
