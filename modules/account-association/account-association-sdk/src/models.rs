//! Public models for the account-association module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the account-association module and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer tenant identifier.
pub type TenantId = i32;

/// Separator between a user-store domain prefix and the bare username.
pub const DOMAIN_SEPARATOR: char = '/';

/// Name of the primary user-store domain when no prefix is present.
pub const PRIMARY_DEFAULT_DOMAIN: &str = "PRIMARY";

/// One user account: a username inside a user-store domain of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub tenant_id: TenantId,
    pub domain: String,
    pub username: String,
}

impl AccountIdentity {
    #[must_use]
    pub fn new(tenant_id: TenantId, domain: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            tenant_id,
            domain: domain.into(),
            username: username.into(),
        }
    }

    /// Exact, case-sensitive comparison against a stored triple.
    #[must_use]
    pub fn matches(&self, tenant_id: TenantId, domain: &str, username: &str) -> bool {
        self.tenant_id == tenant_id && self.domain == domain && self.username == username
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}@{}",
            self.domain, DOMAIN_SEPARATOR, self.username, self.tenant_id
        )
    }
}

/// Opaque key shared by every account of one association group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationKey(String);

impl AssociationKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AssociationKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for AssociationKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl fmt::Display for AssociationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Another account linked to the requesting account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccountAssociation {
    pub username: String,
    pub domain: String,
    pub tenant_domain: String,
}

/// The authenticated caller as seen by the request-handling layer.
///
/// `username` is the raw name, which may carry a user-store domain prefix
/// such as `SECONDARY/alice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub tenant_id: TenantId,
    pub username: String,
}

impl CallerIdentity {
    #[must_use]
    pub fn new(tenant_id: TenantId, username: impl Into<String>) -> Self {
        Self {
            tenant_id,
            username: username.into(),
        }
    }

    fn split_domain(&self) -> Option<(&str, &str)> {
        self.username
            .split_once(DOMAIN_SEPARATOR)
            .filter(|(domain, _)| !domain.is_empty())
    }

    /// User-store domain of the caller, upper-cased.
    ///
    /// Falls back to `primary_domain` when the username has no prefix.
    #[must_use]
    pub fn user_store_domain(&self, primary_domain: &str) -> String {
        match self.split_domain() {
            Some((domain, _)) => domain.to_uppercase(),
            None => primary_domain.to_owned(),
        }
    }

    #[must_use]
    pub fn username_without_domain(&self) -> &str {
        match self.split_domain() {
            Some((_, name)) => name,
            None => &self.username,
        }
    }

    #[must_use]
    pub fn to_account_identity(&self, primary_domain: &str) -> AccountIdentity {
        AccountIdentity::new(
            self.tenant_id,
            self.user_store_domain(primary_domain),
            self.username_without_domain(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_without_prefix_uses_primary_domain() {
        let caller = CallerIdentity::new(7, "alice");
        let identity = caller.to_account_identity(PRIMARY_DEFAULT_DOMAIN);

        assert_eq!(identity, AccountIdentity::new(7, "PRIMARY", "alice"));
    }

    #[test]
    fn caller_prefix_is_stripped_and_upper_cased() {
        let caller = CallerIdentity::new(3, "secondary/bob");

        assert_eq!(caller.user_store_domain(PRIMARY_DEFAULT_DOMAIN), "SECONDARY");
        assert_eq!(caller.username_without_domain(), "bob");
    }

    #[test]
    fn only_first_separator_splits() {
        let caller = CallerIdentity::new(1, "LDAP/team/carol");

        assert_eq!(caller.user_store_domain("PRIMARY"), "LDAP");
        assert_eq!(caller.username_without_domain(), "team/carol");
    }

    #[test]
    fn leading_separator_is_not_a_domain() {
        let caller = CallerIdentity::new(1, "/dave");

        assert_eq!(caller.user_store_domain("MAIN"), "MAIN");
        assert_eq!(caller.username_without_domain(), "/dave");
    }

    #[test]
    fn identity_match_is_case_sensitive() {
        let identity = AccountIdentity::new(1, "PRIMARY", "alice");

        assert!(identity.matches(1, "PRIMARY", "alice"));
        assert!(!identity.matches(1, "primary", "alice"));
        assert!(!identity.matches(1, "PRIMARY", "Alice"));
        assert!(!identity.matches(2, "PRIMARY", "alice"));
    }

    #[test]
    fn association_key_serializes_as_plain_string() {
        let key = AssociationKey::new("k-123");
        let json = serde_json::to_string(&key).unwrap();

        assert_eq!(json, "\"k-123\"");
    }
}
