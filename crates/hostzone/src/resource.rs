//! Provider resource identity
//!
//! Every provider-managed resource handle carries a `ResourceIdentity`. A handle
//! built from data that lacks an identifier is *unidentified* and must not be
//! used for mutating calls; `ensure_identified` is the guard called at the top
//! of each of those calls.

use crate::errors::ZoneError;

/// Identity of a provider-managed resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    kind: &'static str,
    id: Option<String>,
}

impl ResourceIdentity {
    /// Empty identifiers are treated the same as missing ones
    pub fn new(kind: &'static str, id: Option<String>) -> Self {
        Self {
            kind,
            id: id.filter(|id| !id.is_empty()),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_identified(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the identifier, or `UnidentifiedResource` when there is none
    pub fn ensure_identified(&self) -> Result<&str, ZoneError> {
        self.id
            .as_deref()
            .ok_or(ZoneError::UnidentifiedResource(self.kind))
    }
}
