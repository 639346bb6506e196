use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use veridex_core::IssuerId;

/// Lifecycle status of an issuer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuerStatus {
    /// Issuer may originate new credential definitions.
    Active,
    /// Issuer exists but may no longer originate credential definitions.
    Deactivated,
}

impl fmt::Display for IssuerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Deactivated => write!(f, "Deactivated"),
        }
    }
}

/// An issuer identity record held by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerRecord {
    /// Issuer identifier.
    pub id: IssuerId,
    /// Current lifecycle status.
    pub status: IssuerStatus,
    /// When the issuer was registered.
    pub registered: DateTime<Utc>,
}

impl IssuerRecord {
    /// Whether the issuer is currently active.
    pub fn is_active(&self) -> bool {
        self.status == IssuerStatus::Active
    }
}
