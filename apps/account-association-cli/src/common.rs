use std::path::PathBuf;
use std::sync::Arc;

use account_association::{
    AccountAssociationClient, AccountAssociationConfig, AccountAssociationModule, AccountIdentity,
    PRIMARY_DEFAULT_DOMAIN, TenantId,
};
use anyhow::Context;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct CommonArgs {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn load(&self) -> anyhow::Result<AccountAssociationConfig> {
        if let Some(path) = &self.config
            && !path.is_file()
        {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
        AccountAssociationConfig::load(self.config.as_deref())
    }

    /// Client for read-only commands.
    pub async fn client(&self) -> anyhow::Result<Arc<dyn AccountAssociationClient>> {
        let cfg = self.load()?;
        if cfg.database.is_memory_sqlite() {
            tracing::warn!(
                url = %cfg.database.url,
                "database is in memory; results only reflect this run"
            );
        }
        connect(&cfg).await
    }

    /// Client for commands that change stored associations.
    pub async fn durable_client(&self) -> anyhow::Result<Arc<dyn AccountAssociationClient>> {
        let cfg = self.load()?;
        require_durable(&cfg)?;
        connect(&cfg).await
    }
}

async fn connect(
    cfg: &AccountAssociationConfig,
) -> anyhow::Result<Arc<dyn AccountAssociationClient>> {
    let module = AccountAssociationModule::init(cfg).await?;
    Ok(module.client())
}

fn require_durable(cfg: &AccountAssociationConfig) -> anyhow::Result<()> {
    if cfg.database.is_memory_sqlite() {
        anyhow::bail!(
            "database url '{}' is in memory and changes would be lost; \
             set database.url with -c or ACCOUNT_ASSOCIATION__DATABASE__URL",
            cfg.database.url
        );
    }
    Ok(())
}

/// An account given on the command line.
#[derive(Args)]
pub struct IdentityArgs {
    #[arg(short = 't', long, allow_negative_numbers = true)]
    tenant_id: TenantId,
    #[arg(short = 'd', long, default_value = PRIMARY_DEFAULT_DOMAIN)]
    domain: String,
    #[arg(short = 'u', long)]
    username: String,
}

impl IdentityArgs {
    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity::new(self.tenant_id, self.domain.as_str(), self.username.as_str())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{out}");
    Ok(())
}
