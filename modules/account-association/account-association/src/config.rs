//! Configuration for the account-association module.

use std::path::Path;
use std::time::Duration;

use account_association_sdk::{PRIMARY_DEFAULT_DOMAIN, TenantId};
use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use sea_orm::ConnectOptions;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding file settings,
/// e.g. `ACCOUNT_ASSOCIATION__DATABASE__URL`.
pub const ENV_PREFIX: &str = "ACCOUNT_ASSOCIATION__";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountAssociationConfig {
    pub database: DatabaseConfig,

    /// Create the association table on startup if it is missing.
    pub run_migrations: bool,

    /// Domain assumed for caller names without a domain prefix.
    pub primary_domain: String,

    /// Static tenant definitions for the built-in tenant directory.
    pub tenants: Vec<TenantConfig>,
}

impl Default for AccountAssociationConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            run_migrations: true,
            primary_domain: PRIMARY_DEFAULT_DOMAIN.to_owned(),
            tenants: Vec::new(),
        }
    }
}

impl AccountAssociationConfig {
    /// Load configuration from defaults, an optional YAML file and
    /// `ACCOUNT_ASSOCIATION__*` environment variables, in that order.
    ///
    /// # Errors
    /// Returns an error if a source cannot be read or does not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid account-association configuration")
    }
}

/// Database connection and pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    /// In-memory SQLite always runs on one connection.
    pub max_conns: Option<u32>,
    pub min_conns: Option<u32>,
    #[serde(with = "humantime_serde")]
    pub acquire_timeout: Option<Duration>,
    /// Ignored for in-memory SQLite, whose data lives only as long as its connection.
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Option<Duration>,
    /// Ignored for in-memory SQLite.
    #[serde(with = "humantime_serde")]
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_owned(),
            max_conns: None,
            min_conns: None,
            acquire_timeout: Some(Duration::from_secs(30)),
            idle_timeout: None,
            max_lifetime: None,
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Whether the URL names a SQLite database that exists only in memory.
    #[must_use]
    pub fn is_memory_sqlite(&self) -> bool {
        let url = self.url.as_str();
        url.starts_with("sqlite:")
            && (url.contains(":memory:") || url.contains("mode=memory"))
    }

    #[must_use]
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        if let Some(n) = self.max_conns {
            opts.max_connections(n);
        }
        if let Some(n) = self.min_conns {
            opts.min_connections(n);
        }
        if let Some(t) = self.acquire_timeout {
            opts.acquire_timeout(t);
        }
        if let Some(t) = self.idle_timeout {
            opts.idle_timeout(t);
        }
        if let Some(t) = self.max_lifetime {
            opts.max_lifetime(t);
        }
        opts.sqlx_logging(self.sqlx_logging);
        opts
    }
}

/// Configuration for a single tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    pub id: TenantId,
    /// Tenant domain name, e.g. `carbon.super`.
    pub domain: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::io::Write;

    use super::*;

    const OVERRIDDEN_VARS: [&str; 2] = [
        "ACCOUNT_ASSOCIATION__DATABASE__URL",
        "ACCOUNT_ASSOCIATION__RUN_MIGRATIONS",
    ];

    #[test]
    fn defaults_are_usable_without_a_file() {
        let cfg = AccountAssociationConfig::default();

        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.primary_domain, "PRIMARY");
        assert!(cfg.run_migrations);
        assert!(cfg.tenants.is_empty());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "database:\n  url: \"sqlite://assoc.db?mode=rwc\"\n  max_conns: 4\n  acquire_timeout: 5s\nprimary_domain: MAIN\ntenants:\n  - id: -1234\n    domain: carbon.super\n  - id: 1\n    domain: wso2.com"
        )
        .unwrap();

        let cfg = temp_env::with_vars_unset(OVERRIDDEN_VARS, || {
            AccountAssociationConfig::load(Some(file.path())).unwrap()
        });

        assert_eq!(cfg.database.url, "sqlite://assoc.db?mode=rwc");
        assert_eq!(cfg.database.max_conns, Some(4));
        assert_eq!(cfg.database.acquire_timeout, Some(Duration::from_secs(5)));
        assert_eq!(cfg.primary_domain, "MAIN");
        assert!(cfg.run_migrations);
        assert_eq!(cfg.tenants.len(), 2);
        assert_eq!(cfg.tenants[0].id, -1234);
        assert_eq!(cfg.tenants[1].domain, "wso2.com");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "primary_domian: TYPO").unwrap();

        assert!(AccountAssociationConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "database:\n  url: \"sqlite://from-file.db\"\nprimary_domain: MAIN").unwrap();

        let cfg = temp_env::with_vars(
            [
                (OVERRIDDEN_VARS[0], Some("sqlite://from-env.db")),
                (OVERRIDDEN_VARS[1], Some("false")),
            ],
            || AccountAssociationConfig::load(Some(file.path())).unwrap(),
        );

        assert_eq!(cfg.database.url, "sqlite://from-env.db");
        assert_eq!(cfg.primary_domain, "MAIN");
        assert!(!cfg.run_migrations);
    }

    #[test]
    fn connect_options_carry_pool_settings() {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_conns: Some(8),
            min_conns: Some(1),
            acquire_timeout: Some(Duration::from_secs(3)),
            idle_timeout: None,
            max_lifetime: Some(Duration::from_secs(600)),
            sqlx_logging: true,
        };

        let opts = cfg.connect_options();

        assert_eq!(opts.get_url(), "sqlite::memory:");
        assert_eq!(opts.get_max_connections(), Some(8));
        assert_eq!(opts.get_min_connections(), Some(1));
        assert_eq!(opts.get_acquire_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(opts.get_max_lifetime(), Some(Duration::from_secs(600)));
        assert!(opts.get_sqlx_logging());
    }

    #[test]
    fn recognizes_in_memory_sqlite_urls() {
        let with_url = |url: &str| DatabaseConfig {
            url: url.to_owned(),
            ..DatabaseConfig::default()
        };

        assert!(DatabaseConfig::default().is_memory_sqlite());
        assert!(with_url("sqlite:file:assoc?mode=memory&cache=shared").is_memory_sqlite());
        assert!(!with_url("sqlite://assoc.db?mode=rwc").is_memory_sqlite());
        assert!(!with_url("postgres://localhost/memory").is_memory_sqlite());
    }
}
