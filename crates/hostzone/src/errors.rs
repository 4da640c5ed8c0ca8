//! Hosted zone error types

use thiserror::Error;

/// Errors raised by zone lookups, record changes and the Route53 transport
#[derive(Error, Debug)]
pub enum ZoneError {
    /// A mutating call was made on a resource without a provider identifier
    #[error("Unidentified resource: {0} has no Id")]
    UnidentifiedResource(&'static str),

    #[error("Could not find hosted zone named {0}")]
    ZoneNotFound(String),

    /// Error document returned by the Route53 API
    #[error("API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl ZoneError {
    /// True when the provider reported that the zone does not exist
    pub fn is_no_such_zone(&self) -> bool {
        matches!(self, ZoneError::Api { code, .. } if code == "NoSuchHostedZone")
    }
}
