#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Support module provides utilities that may not all be used

//! Test support utilities for `account_association` integration tests.
//!
//! Provides helpers for creating migrated in-memory databases, seeding
//! association rows and wiring the service.

use std::sync::Arc;

use account_association::config::{DatabaseConfig, TenantConfig};
use account_association::domain::service::{Service, ServiceConfig};
use account_association::infra::directory::StaticTenantDirectory;
use account_association::infra::storage::{SeaOrmAssociationRepository, db};
use account_association::infra::storage::migrations::Migrator;
use account_association::{AccountIdentity, AssociationKey};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub const SUPER_TENANT: i32 = -1234;
pub const OTHER_TENANT: i32 = 1;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = db::connect(&DatabaseConfig::default())
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Seed one association row directly, bypassing the service.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_association(db: &DatabaseConnection, key: &str, identity: &AccountIdentity) {
    use account_association::infra::storage::entity::{ActiveModel, Entity};
    use sea_orm::{EntityTrait, Set};

    let am = ActiveModel {
        association_key: Set(key.to_owned()),
        tenant_id: Set(identity.tenant_id),
        domain_name: Set(identity.domain.clone()),
        user_name: Set(identity.username.clone()),
    };

    Entity::insert(am)
        .exec_without_returning(db)
        .await
        .expect("Failed to seed association");
}

pub fn tenants() -> Vec<TenantConfig> {
    vec![
        TenantConfig {
            id: SUPER_TENANT,
            domain: "carbon.super".to_owned(),
        },
        TenantConfig {
            id: OTHER_TENANT,
            domain: "wso2.com".to_owned(),
        },
    ]
}

pub fn repo(db: &DatabaseConnection) -> SeaOrmAssociationRepository {
    SeaOrmAssociationRepository::new(db.clone())
}

pub fn service(db: &DatabaseConnection) -> Service {
    Service::new(
        Arc::new(repo(db)),
        Arc::new(StaticTenantDirectory::from_config(&tenants())),
        ServiceConfig::default(),
    )
}

pub fn key(value: &str) -> AssociationKey {
    AssociationKey::new(value)
}

pub fn user(tenant_id: i32, domain: &str, username: &str) -> AccountIdentity {
    AccountIdentity::new(tenant_id, domain, username)
}
