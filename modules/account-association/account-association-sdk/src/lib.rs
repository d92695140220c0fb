//! Account Association SDK
//!
//! This crate provides the public API for the `account-association` module:
//!
//! - [`AccountAssociationClient`] - Public API trait for consumers
//! - [`AccountIdentity`], [`AssociationKey`], [`UserAccountAssociation`] - Models
//! - [`CallerIdentity`] - Identity of the authenticated caller
//! - [`AccountAssociationError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use account_association_sdk::{AccountAssociationClient, AccountIdentity};
//!
//! let alice = AccountIdentity::new(1, "PRIMARY", "alice");
//! let linked = client.get_associations_of_user(&alice).await?;
//! for account in linked {
//!     println!("{}/{}@{}", account.domain, account.username, account.tenant_domain);
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::AccountAssociationClient;
pub use error::AccountAssociationError;
pub use models::{
    AccountIdentity, AssociationKey, CallerIdentity, DOMAIN_SEPARATOR, PRIMARY_DEFAULT_DOMAIN,
    TenantId, UserAccountAssociation,
};
