use std::sync::Arc;

use account_association_sdk::{
    AccountIdentity, AssociationKey, CallerIdentity, PRIMARY_DEFAULT_DOMAIN, TenantId,
    UserAccountAssociation,
};

use super::directory::TenantDirectory;
use super::error::DomainError;
use super::repo::AssociationRepository;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Domain assumed for caller names that carry no domain prefix.
    pub primary_domain: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            primary_domain: PRIMARY_DEFAULT_DOMAIN.to_owned(),
        }
    }
}

/// Association lookups and mutations.
///
/// Holds no state besides its collaborators; construct once and share
/// behind an `Arc`.
pub struct Service {
    repo: Arc<dyn AssociationRepository>,
    directory: Arc<dyn TenantDirectory>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn AssociationRepository>,
        directory: Arc<dyn TenantDirectory>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            directory,
            config,
        }
    }

    pub async fn create_user_association(
        &self,
        key: &AssociationKey,
        identity: &AccountIdentity,
    ) -> Result<(), DomainError> {
        tracing::debug!(
            tenant_id = identity.tenant_id,
            domain = %identity.domain,
            "Creating user account association"
        );
        self.repo.insert(key, identity).await
    }

    pub async fn delete_user_association(
        &self,
        identity: &AccountIdentity,
    ) -> Result<(), DomainError> {
        let deleted = self.repo.delete(identity).await?;
        tracing::debug!(
            tenant_id = identity.tenant_id,
            domain = %identity.domain,
            deleted,
            "Deleted user account association"
        );
        Ok(())
    }

    pub async fn get_association_key_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Option<AssociationKey>, DomainError> {
        self.repo.find_key(identity).await
    }

    pub async fn get_associations_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Vec<UserAccountAssociation>, DomainError> {
        let Some(key) = self.repo.find_key(identity).await? else {
            tracing::debug!(
                tenant_id = identity.tenant_id,
                "User has no account associations"
            );
            return Ok(Vec::new());
        };

        let members = self.repo.list_by_key(&key).await?;
        let mut associations = Vec::with_capacity(members.len().saturating_sub(1));
        for member in members {
            if identity.matches(member.tenant_id, &member.domain, &member.username) {
                continue;
            }
            let tenant_domain = self
                .directory
                .resolve_domain_name(member.tenant_id)
                .await?;
            associations.push(UserAccountAssociation {
                username: member.username,
                domain: member.domain,
                tenant_domain,
            });
        }

        tracing::debug!(
            tenant_id = identity.tenant_id,
            count = associations.len(),
            "Listed account associations"
        );
        Ok(associations)
    }

    pub async fn update_user_association_key(
        &self,
        old_key: &AssociationKey,
        new_key: &AssociationKey,
    ) -> Result<(), DomainError> {
        let updated = self.repo.rename_key(old_key, new_key).await?;
        tracing::debug!(updated, "Updated association key");
        Ok(())
    }

    /// Whether `first` and `second` share an association key.
    pub async fn is_valid_user_association(
        &self,
        first: &AccountIdentity,
        second: &AccountIdentity,
    ) -> Result<bool, DomainError> {
        let count = self.repo.count_in_same_group(first, second).await?;
        Ok(count > 0)
    }

    /// Same check as [`Self::is_valid_user_association`] with the caller's
    /// own account as the second identity.
    pub async fn is_valid_user_association_for_caller(
        &self,
        caller: &CallerIdentity,
        identity: &AccountIdentity,
    ) -> Result<bool, DomainError> {
        let caller_identity = caller.to_account_identity(&self.config.primary_domain);
        self.is_valid_user_association(identity, &caller_identity)
            .await
    }

    pub async fn delete_user_associations_from_tenant_id(
        &self,
        tenant_id: TenantId,
    ) -> Result<(), DomainError> {
        let deleted = self.repo.delete_by_tenant(tenant_id).await?;
        tracing::info!(tenant_id, deleted, "Deleted account associations of tenant");
        Ok(())
    }

    pub async fn update_domain_name_of_associations(
        &self,
        tenant_id: TenantId,
        old_domain: &str,
        new_domain: &str,
    ) -> Result<(), DomainError> {
        let updated = self
            .repo
            .rename_domain(tenant_id, old_domain, new_domain)
            .await?;
        tracing::info!(
            tenant_id,
            old_domain,
            new_domain,
            updated,
            "Renamed user-store domain of account associations"
        );
        Ok(())
    }

    pub async fn delete_associations_from_domain(
        &self,
        tenant_id: TenantId,
        domain: &str,
    ) -> Result<(), DomainError> {
        let deleted = self.repo.delete_by_domain(tenant_id, domain).await?;
        tracing::info!(
            tenant_id,
            domain,
            deleted,
            "Deleted account associations of user-store domain"
        );
        Ok(())
    }
}
