//! Account Association Module Implementation
//!
//! Links user accounts that one person controls, across tenants and
//! user-store domains. The public API is defined in `account-association-sdk`
//! and re-exported here.

pub use account_association_sdk::{
    AccountAssociationClient, AccountAssociationError, AccountIdentity, AssociationKey,
    CallerIdentity, PRIMARY_DEFAULT_DOMAIN, TenantId, UserAccountAssociation,
};

pub mod module;
pub use module::AccountAssociationModule;

pub mod config;
pub use config::AccountAssociationConfig;

#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
