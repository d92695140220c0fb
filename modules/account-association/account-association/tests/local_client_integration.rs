#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The SDK client as wired by `AccountAssociationModule`.

mod support;

use std::sync::Arc;
use std::time::Duration;

use account_association::config::TenantConfig;
use account_association::domain::service::ServiceConfig;
use account_association::infra::directory::StaticTenantDirectory;
use account_association::{
    AccountAssociationConfig, AccountAssociationError, AccountAssociationModule, CallerIdentity,
};
use support::{OTHER_TENANT, SUPER_TENANT, inmem_db, key, seed_association, tenants, user};
use tracing_test::traced_test;

async fn module() -> AccountAssociationModule {
    let db = inmem_db().await;
    AccountAssociationModule::from_parts(
        db,
        Arc::new(StaticTenantDirectory::from_config(&tenants())),
        ServiceConfig::default(),
    )
}

#[tokio::test]
async fn client_round_trip_through_module() {
    let module = module().await;
    let client = module.client();
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    let bob = user(OTHER_TENANT, "PRIMARY", "bob");

    client.create_user_association(&key("K"), &alice).await.unwrap();
    client.create_user_association(&key("K"), &bob).await.unwrap();

    let linked = client.get_associations_of_user(&alice).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].username, "bob");
    assert_eq!(linked[0].tenant_domain, "wso2.com");

    assert_eq!(
        client.get_association_key_of_user(&bob).await.unwrap(),
        Some(key("K"))
    );
}

#[tokio::test]
async fn caller_overload_uses_prefixed_username() {
    let module = module().await;
    let client = module.client();
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    let bob = user(OTHER_TENANT, "SECONDARY", "bob");
    client.create_user_association(&key("K"), &alice).await.unwrap();
    client.create_user_association(&key("K"), &bob).await.unwrap();

    let caller = CallerIdentity::new(OTHER_TENANT, "secondary/bob");
    assert!(client
        .is_valid_user_association_for_caller(&caller, &alice)
        .await
        .unwrap());

    let stranger = CallerIdentity::new(OTHER_TENANT, "bob");
    assert!(!client
        .is_valid_user_association_for_caller(&stranger, &alice)
        .await
        .unwrap());
}

#[tokio::test]
#[traced_test]
async fn failures_are_converted_and_logged() {
    let module = module().await;
    let client = module.client();
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    client.create_user_association(&key("K"), &alice).await.unwrap();

    let err = client
        .create_user_association(&key("J"), &alice)
        .await
        .unwrap_err();

    assert!(err.is_persistence());
    assert!(logs_contain("account-association call failed"));
    assert!(logs_contain("create_user_association"));
}

#[tokio::test]
async fn unknown_tenant_maps_to_directory_error() {
    let db = inmem_db().await;
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    seed_association(&db, "K", &alice).await;
    seed_association(&db, "K", &user(OTHER_TENANT, "PRIMARY", "bob")).await;
    let only_super = vec![TenantConfig {
        id: SUPER_TENANT,
        domain: "carbon.super".to_owned(),
    }];
    let module = AccountAssociationModule::from_parts(
        db,
        Arc::new(StaticTenantDirectory::from_config(&only_super)),
        ServiceConfig::default(),
    );

    let err = module
        .client()
        .get_associations_of_user(&alice)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AccountAssociationError::Directory {
            tenant_id: OTHER_TENANT,
            ..
        }
    ));
}

#[tokio::test]
async fn init_connects_and_migrates_from_config() {
    let cfg = AccountAssociationConfig {
        tenants: tenants(),
        ..AccountAssociationConfig::default()
    };

    let module = AccountAssociationModule::init(&cfg).await.unwrap();
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    let bob = user(SUPER_TENANT, "PRIMARY", "bob");

    let svc = module.service();
    svc.create_user_association(&key("K"), &alice).await.unwrap();
    svc.create_user_association(&key("K"), &bob).await.unwrap();

    assert!(module
        .client()
        .is_valid_user_association(&alice, &bob)
        .await
        .unwrap());
}

#[tokio::test]
async fn in_memory_database_survives_idle_reaping() {
    let mut cfg = AccountAssociationConfig {
        tenants: tenants(),
        ..AccountAssociationConfig::default()
    };
    cfg.database.idle_timeout = Some(Duration::from_secs(1));
    cfg.database.max_lifetime = Some(Duration::from_secs(1));

    let module = AccountAssociationModule::init(&cfg).await.unwrap();
    let client = module.client();
    let alice = user(SUPER_TENANT, "PRIMARY", "alice");
    client.create_user_association(&key("K"), &alice).await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(
        client.get_association_key_of_user(&alice).await.unwrap(),
        Some(key("K"))
    );
}
