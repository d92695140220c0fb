//! Public error types for the account-association module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

use crate::models::TenantId;

/// Errors that can be returned by the `AccountAssociationClient`.
///
/// "Not found" is never an error: lookups return `None` or an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountAssociationError {
    /// The association store failed. Callers may retry at will.
    #[error("persistence error: {message}")]
    Persistence { message: String },

    /// A tenant id could not be resolved to a tenant domain.
    #[error("tenant directory error for tenant {tenant_id}: {message}")]
    Directory { tenant_id: TenantId, message: String },
}

impl AccountAssociationError {
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn directory(tenant_id: TenantId, message: impl Into<String>) -> Self {
        Self::Directory {
            tenant_id,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}
