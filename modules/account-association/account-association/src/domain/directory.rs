//! Tenant directory port.
//!
//! Resolves integer tenant ids to tenant domain names. The default
//! implementation lives in `infra::directory`; hosts may plug their own.

use account_association_sdk::TenantId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("tenant not found: {tenant_id}")]
    TenantNotFound { tenant_id: TenantId },

    #[error("tenant directory unavailable while resolving tenant {tenant_id}: {message}")]
    Unavailable { tenant_id: TenantId, message: String },
}

impl DirectoryError {
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        match self {
            Self::TenantNotFound { tenant_id } | Self::Unavailable { tenant_id, .. } => *tenant_id,
        }
    }
}

#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Domain name of the tenant with the given id.
    async fn resolve_domain_name(&self, tenant_id: TenantId) -> Result<String, DirectoryError>;
}
