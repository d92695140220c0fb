use std::sync::Arc;

use account_association_sdk::AccountAssociationClient;
use anyhow::Context;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::AccountAssociationConfig;
use crate::domain::directory::TenantDirectory;
use crate::domain::local_client::AccountAssociationLocalClient;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::directory::StaticTenantDirectory;
use crate::infra::storage::{self, SeaOrmAssociationRepository};
use crate::infra::storage::migrations::Migrator;

/// Composition root: owns the service and its public client for the
/// lifetime of the host.
#[derive(Clone)]
pub struct AccountAssociationModule {
    service: Arc<Service>,
    client: Arc<dyn AccountAssociationClient>,
}

impl AccountAssociationModule {
    /// Connect, migrate and wire the module with the configured static
    /// tenant directory.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or migrations fail.
    pub async fn init(cfg: &AccountAssociationConfig) -> anyhow::Result<Self> {
        let directory = StaticTenantDirectory::from_config(&cfg.tenants);
        debug!(tenants = directory.len(), "Loaded static tenant directory");
        Self::init_with_directory(cfg, Arc::new(directory)).await
    }

    /// Same as [`Self::init`] with a host-provided tenant directory.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or migrations fail.
    pub async fn init_with_directory(
        cfg: &AccountAssociationConfig,
        directory: Arc<dyn TenantDirectory>,
    ) -> anyhow::Result<Self> {
        info!("Initializing account_association module");

        let db = storage::db::connect(&cfg.database).await?;

        if cfg.run_migrations {
            Migrator::up(&db, None)
                .await
                .context("failed to run account_association migrations")?;
            debug!("account_association migrations applied");
        }

        let service_config = ServiceConfig {
            primary_domain: cfg.primary_domain.clone(),
        };
        Ok(Self::from_parts(db, directory, service_config))
    }

    /// Wire the module over an already connected (and migrated) database.
    #[must_use]
    pub fn from_parts(
        db: DatabaseConnection,
        directory: Arc<dyn TenantDirectory>,
        service_config: ServiceConfig,
    ) -> Self {
        let repo = Arc::new(SeaOrmAssociationRepository::new(db));
        let service = Arc::new(Service::new(repo, directory, service_config));
        let client: Arc<dyn AccountAssociationClient> =
            Arc::new(AccountAssociationLocalClient::new(service.clone()));

        info!("account_association module initialized");
        Self { service, client }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn AccountAssociationClient> {
        self.client.clone()
    }
}
