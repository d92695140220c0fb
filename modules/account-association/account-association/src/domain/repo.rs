use account_association_sdk::{AccountIdentity, AssociationKey, TenantId};
use async_trait::async_trait;

use super::error::DomainError;

/// Persistence operations over association records.
///
/// Each method is one statement against the store; writes are committed
/// before returning. Bulk writes report the number of affected rows.
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    async fn insert(
        &self,
        key: &AssociationKey,
        identity: &AccountIdentity,
    ) -> Result<(), DomainError>;

    async fn delete(&self, identity: &AccountIdentity) -> Result<u64, DomainError>;

    async fn find_key(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Option<AssociationKey>, DomainError>;

    /// Every identity keyed `key`, in the store's natural row order.
    async fn list_by_key(&self, key: &AssociationKey) -> Result<Vec<AccountIdentity>, DomainError>;

    async fn rename_key(
        &self,
        old_key: &AssociationKey,
        new_key: &AssociationKey,
    ) -> Result<u64, DomainError>;

    /// Number of rows of `first` that share a key with `second`.
    async fn count_in_same_group(
        &self,
        first: &AccountIdentity,
        second: &AccountIdentity,
    ) -> Result<u64, DomainError>;

    async fn delete_by_tenant(&self, tenant_id: TenantId) -> Result<u64, DomainError>;

    async fn rename_domain(
        &self,
        tenant_id: TenantId,
        old_domain: &str,
        new_domain: &str,
    ) -> Result<u64, DomainError>;

    async fn delete_by_domain(&self, tenant_id: TenantId, domain: &str) -> Result<u64, DomainError>;
}
