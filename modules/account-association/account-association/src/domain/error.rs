use account_association_sdk::{AccountAssociationError, TenantId};
use thiserror::Error;

use super::directory::DirectoryError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{context}: {message}")]
    Persistence { context: String, message: String },

    #[error("Error while getting tenant domain of tenant {tenant_id}: {message}")]
    Directory { tenant_id: TenantId, message: String },
}

impl DomainError {
    #[must_use]
    pub fn persistence(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Persistence {
            context: context.into(),
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
}

impl From<DirectoryError> for DomainError {
    fn from(e: DirectoryError) -> Self {
        let tenant_id = e.tenant_id();
        Self::directory(tenant_id, e.to_string())
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for AccountAssociationError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            p @ DomainError::Persistence { .. } => AccountAssociationError::persistence(p.to_string()),
            DomainError::Directory { tenant_id, message } => {
                AccountAssociationError::directory(tenant_id, message)
            }
        }
    }
}
