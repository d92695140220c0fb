//! Local (in-process) client for the account-association module.

use std::sync::Arc;

use account_association_sdk::{
    AccountAssociationClient, AccountAssociationError, AccountIdentity, AssociationKey,
    CallerIdentity, TenantId, UserAccountAssociation,
};
use async_trait::async_trait;

use super::error::DomainError;
use super::service::Service;

/// Local client wrapping the association service.
pub struct AccountAssociationLocalClient {
    svc: Arc<Service>,
}

impl AccountAssociationLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AccountAssociationError {
    tracing::error!(operation = op, error = ?e, "account-association call failed");
    e.into()
}

#[async_trait]
impl AccountAssociationClient for AccountAssociationLocalClient {
    async fn create_user_association(
        &self,
        key: &AssociationKey,
        identity: &AccountIdentity,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .create_user_association(key, identity)
            .await
            .map_err(|e| log_and_convert("create_user_association", e))
    }

    async fn delete_user_association(
        &self,
        identity: &AccountIdentity,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .delete_user_association(identity)
            .await
            .map_err(|e| log_and_convert("delete_user_association", e))
    }

    async fn get_association_key_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Option<AssociationKey>, AccountAssociationError> {
        self.svc
            .get_association_key_of_user(identity)
            .await
            .map_err(|e| log_and_convert("get_association_key_of_user", e))
    }

    async fn get_associations_of_user(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Vec<UserAccountAssociation>, AccountAssociationError> {
        self.svc
            .get_associations_of_user(identity)
            .await
            .map_err(|e| log_and_convert("get_associations_of_user", e))
    }

    async fn update_user_association_key(
        &self,
        old_key: &AssociationKey,
        new_key: &AssociationKey,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .update_user_association_key(old_key, new_key)
            .await
            .map_err(|e| log_and_convert("update_user_association_key", e))
    }

    async fn is_valid_user_association(
        &self,
        first: &AccountIdentity,
        second: &AccountIdentity,
    ) -> Result<bool, AccountAssociationError> {
        self.svc
            .is_valid_user_association(first, second)
            .await
            .map_err(|e| log_and_convert("is_valid_user_association", e))
    }

    async fn is_valid_user_association_for_caller(
        &self,
        caller: &CallerIdentity,
        identity: &AccountIdentity,
    ) -> Result<bool, AccountAssociationError> {
        self.svc
            .is_valid_user_association_for_caller(caller, identity)
            .await
            .map_err(|e| log_and_convert("is_valid_user_association_for_caller", e))
    }

    async fn delete_user_associations_from_tenant_id(
        &self,
        tenant_id: TenantId,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .delete_user_associations_from_tenant_id(tenant_id)
            .await
            .map_err(|e| log_and_convert("delete_user_associations_from_tenant_id", e))
    }

    async fn update_domain_name_of_associations(
        &self,
        tenant_id: TenantId,
        old_domain: &str,
        new_domain: &str,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .update_domain_name_of_associations(tenant_id, old_domain, new_domain)
            .await
            .map_err(|e| log_and_convert("update_domain_name_of_associations", e))
    }

    async fn delete_associations_from_domain(
        &self,
        tenant_id: TenantId,
        domain: &str,
    ) -> Result<(), AccountAssociationError> {
        self.svc
            .delete_associations_from_domain(tenant_id, domain)
            .await
            .map_err(|e| log_and_convert("delete_associations_from_domain", e))
    }
}
