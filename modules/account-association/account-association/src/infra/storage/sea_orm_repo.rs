use account_association_sdk::{AccountIdentity, AssociationKey, TenantId};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::domain::error::DomainError;
use crate::domain::repo::AssociationRepository;

use super::entity::{self, Column, Entity as AssociationEntity};

fn db_err(context: impl Into<String>) -> impl FnOnce(DbErr) -> DomainError {
    let context = context.into();
    move |e| DomainError::persistence(context, e.to_string())
}

/// SeaORM-backed association store.
///
/// Reads borrow a pooled connection per statement. Writes run in their own
/// transaction; an error drops the transaction, which rolls it back.
pub struct SeaOrmAssociationRepository {
    db: DatabaseConnection,
}

impl SeaOrmAssociationRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn identity_filter(identity: &AccountIdentity) -> sea_orm::Condition {
    sea_orm::Condition::all()
        .add(Column::TenantId.eq(identity.tenant_id))
        .add(Column::DomainName.eq(identity.domain.as_str()))
        .add(Column::UserName.eq(identity.username.as_str()))
}

#[async_trait]
impl AssociationRepository for SeaOrmAssociationRepository {
    async fn insert(
        &self,
        key: &AssociationKey,
        identity: &AccountIdentity,
    ) -> Result<(), DomainError> {
        const CONTEXT: &str = "Error while creating user account association";

        let m = entity::ActiveModel {
            association_key: Set(key.as_str().to_owned()),
            tenant_id: Set(identity.tenant_id),
            domain_name: Set(identity.domain.clone()),
            user_name: Set(identity.username.clone()),
        };

        let txn = self.db.begin().await.map_err(db_err(CONTEXT))?;
        AssociationEntity::insert(m)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err(CONTEXT))?;
        txn.commit().await.map_err(db_err(CONTEXT))
    }

    async fn delete(&self, identity: &AccountIdentity) -> Result<u64, DomainError> {
        const CONTEXT: &str = "Error while deleting user account association";

        let txn = self.db.begin().await.map_err(db_err(CONTEXT))?;
        let result = AssociationEntity::delete_many()
            .filter(identity_filter(identity))
            .exec(&txn)
            .await
            .map_err(db_err(CONTEXT))?;
        txn.commit().await.map_err(db_err(CONTEXT))?;
        Ok(result.rows_affected)
    }

    async fn find_key(
        &self,
        identity: &AccountIdentity,
    ) -> Result<Option<AssociationKey>, DomainError> {
        let found = AssociationEntity::find()
            .filter(identity_filter(identity))
            .one(&self.db)
            .await
            .map_err(db_err("Error while retrieving association key of user"))?;
        Ok(found.as_ref().map(Into::into))
    }

    async fn list_by_key(&self, key: &AssociationKey) -> Result<Vec<AccountIdentity>, DomainError> {
        let rows = AssociationEntity::find()
            .filter(Column::AssociationKey.eq(key.as_str()))
            .all(&self.db)
            .await
            .map_err(db_err("Error while retrieving account associations"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn rename_key(
        &self,
        old_key: &AssociationKey,
        new_key: &AssociationKey,
    ) -> Result<u64, DomainError> {
        const CONTEXT: &str = "Error while updating association key";

        let txn = self.db.begin().await.map_err(db_err(CONTEXT))?;
        let result = AssociationEntity::update_many()
            .col_expr(Column::AssociationKey, Expr::value(new_key.as_str()))
            .filter(Column::AssociationKey.eq(old_key.as_str()))
            .exec(&txn)
            .await
            .map_err(db_err(CONTEXT))?;
        txn.commit().await.map_err(db_err(CONTEXT))?;
        Ok(result.rows_affected)
    }

    async fn count_in_same_group(
        &self,
        first: &AccountIdentity,
        second: &AccountIdentity,
    ) -> Result<u64, DomainError> {
        // Unqualified columns resolve against the subquery's own table
        let key_of_second = Query::select()
            .column(Column::AssociationKey)
            .from(AssociationEntity)
            .and_where(Expr::col(Column::TenantId).eq(second.tenant_id))
            .and_where(Expr::col(Column::DomainName).eq(second.domain.as_str()))
            .and_where(Expr::col(Column::UserName).eq(second.username.as_str()))
            .to_owned();

        AssociationEntity::find()
            .filter(identity_filter(first))
            .filter(Column::AssociationKey.in_subquery(key_of_second))
            .count(&self.db)
            .await
            .map_err(db_err("Error while checking user account association"))
    }

    async fn delete_by_tenant(&self, tenant_id: TenantId) -> Result<u64, DomainError> {
        let context = format!("Error while deleting user account associations of tenant {tenant_id}");

        let txn = self.db.begin().await.map_err(db_err(context.as_str()))?;
        let result = AssociationEntity::delete_many()
            .filter(Column::TenantId.eq(tenant_id))
            .exec(&txn)
            .await
            .map_err(db_err(context.as_str()))?;
        txn.commit().await.map_err(db_err(context))?;
        Ok(result.rows_affected)
    }

    async fn rename_domain(
        &self,
        tenant_id: TenantId,
        old_domain: &str,
        new_domain: &str,
    ) -> Result<u64, DomainError> {
        let context =
            format!("Error while updating domain name {old_domain} of tenant {tenant_id}");

        let txn = self.db.begin().await.map_err(db_err(context.as_str()))?;
        let result = AssociationEntity::update_many()
            .col_expr(Column::DomainName, Expr::value(new_domain))
            .filter(Column::TenantId.eq(tenant_id))
            .filter(Column::DomainName.eq(old_domain))
            .exec(&txn)
            .await
            .map_err(db_err(context.as_str()))?;
        txn.commit().await.map_err(db_err(context))?;
        Ok(result.rows_affected)
    }

    async fn delete_by_domain(&self, tenant_id: TenantId, domain: &str) -> Result<u64, DomainError> {
        let context =
            format!("Error while deleting associations of domain {domain} of tenant {tenant_id}");

        let txn = self.db.begin().await.map_err(db_err(context.as_str()))?;
        let result = AssociationEntity::delete_many()
            .filter(Column::TenantId.eq(tenant_id))
            .filter(Column::DomainName.eq(domain))
            .exec(&txn)
            .await
            .map_err(db_err(context.as_str()))?;
        txn.commit().await.map_err(db_err(context))?;
        Ok(result.rows_affected)
    }
}
