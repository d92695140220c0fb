//! `AccountAssociationClient` trait definition.
//!
//! This trait defines the public API for the account-association module.

use async_trait::async_trait;

use crate::error::AccountAssociationError;
use crate::models::{
    AccountIdentity, AssociationKey, CallerIdentity, TenantId, UserAccountAssociation,
};

/// Public API trait for the account-association module.
///
/// Every call is an independent unit of work against the association store:
/// it either fully succeeds or fails without partial effects.
///
/// ```ignore
/// let client: Arc<dyn AccountAssociationClient> = module.client();
/// client.create_user_association(&key, &bob).await?;
/// let linked = client.get_associations_of_user(&alice).await?;
/// ```
#[async_trait]
pub trait AccountAssociationClient: Send + Sync {
    /// Link `identity` into the group identified by `key`.
    ///
    /// The key is expected to already belong to another account; otherwise
    /// the account becomes a group of one.
    async fn create_user_association(
        &self,
        key: &AssociationKey,
        identity: &AccountIdentity,
    ) -> Result<(), AccountAssociationError>;

    /// Remove `identity` from its group. Succeeds if it had none.
    async fn delete_user_association(
        &self,
        identity: &AccountIdentity,
    ) -> Result<(), AccountAssociationError>;

    /// Association key of `identity`, or `None` if it is not linked.
    async fn get_association_key_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Option<AssociationKey>, AccountAssociationError>;

    /// Every other account in the group of `identity`.
    ///
    /// The order of the returned accounts is not guaranteed.
    async fn get_associations_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Vec<UserAccountAssociation>, AccountAssociationError>;

    /// Re-key every account of group `old_key` to `new_key`.
    async fn update_user_association_key(
        &self,
        old_key: &AssociationKey,
        new_key: &AssociationKey,
    ) -> Result<(), AccountAssociationError>;

    /// Whether `first` and `second` belong to the same group.
    async fn is_valid_user_association(
        &self,
        first: &AccountIdentity,
        second: &AccountIdentity,
    ) -> Result<bool, AccountAssociationError>;

    /// Whether the authenticated `caller` and `identity` belong to the same group.
    async fn is_valid_user_association_for_caller(
        &self,
        caller: &CallerIdentity,
        identity: &AccountIdentity,
    ) -> Result<bool, AccountAssociationError>;

    /// Drop every association of a removed tenant.
    async fn delete_user_associations_from_tenant_id(
        &self,
        tenant_id: TenantId,
    ) -> Result<(), AccountAssociationError>;

    /// Follow a user-store domain rename inside a tenant.
    async fn update_domain_name_of_associations(
        &self,
        tenant_id: TenantId,
        old_domain: &str,
        new_domain: &str,
    ) -> Result<(), AccountAssociationError>;

    /// Drop every association of a removed user-store domain.
    async fn delete_associations_from_domain(
        &self,
        tenant_id: TenantId,
        domain: &str,
    ) -> Result<(), AccountAssociationError>;
}
