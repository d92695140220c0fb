//! Tenant directory backed by configuration.

use std::collections::HashMap;

use account_association_sdk::TenantId;
use async_trait::async_trait;

use crate::config::TenantConfig;
use crate::domain::directory::{DirectoryError, TenantDirectory};

/// Static tenant directory.
///
/// Stores tenant domain names in memory, loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticTenantDirectory {
    domains: HashMap<TenantId, String>,
}

impl StaticTenantDirectory {
    /// Creates a directory from configured tenants. Later entries win on
    /// duplicate ids.
    #[must_use]
    pub fn from_config(tenants: &[TenantConfig]) -> Self {
        let domains = tenants
            .iter()
            .map(|t| (t.id, t.domain.clone()))
            .collect();
        Self { domains }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[async_trait]
impl TenantDirectory for StaticTenantDirectory {
    async fn resolve_domain_name(&self, tenant_id: TenantId) -> Result<String, DirectoryError> {
        self.domains
            .get(&tenant_id)
            .cloned()
            .ok_or(DirectoryError::TenantNotFound { tenant_id })
    }
}
