use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const KEY_INDEX: &str = "idx_user_account_association_key";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccountAssociation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAccountAssociation::AssociationKey)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAccountAssociation::TenantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAccountAssociation::DomainName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAccountAssociation::UserName)
                            .string_len(255)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserAccountAssociation::TenantId)
                            .col(UserAccountAssociation::DomainName)
                            .col(UserAccountAssociation::UserName),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(KEY_INDEX)
                    .table(UserAccountAssociation::Table)
                    .col(UserAccountAssociation::AssociationKey)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(KEY_INDEX)
                    .table(UserAccountAssociation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UserAccountAssociation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserAccountAssociation {
    Table,
    AssociationKey,
    TenantId,
    DomainName,
    UserName,
}
