//! Migration: Create the business table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // owner_id is indexed but not unique
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Business::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Business::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Business::Name).string().not_null())
                    .col(ColumnDef::new(Business::Description).text().null())
                    .col(ColumnDef::new(Business::LogoUrl).string().null())
                    .col(
                        ColumnDef::new(Business::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Business::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_owner")
                            .from(Business::Table, Business::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_business_owner_id")
                    .table(Business::Table)
                    .col(Business::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_business_owner_id")
                    .table(Business::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Business {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    LogoUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Owner {
    Table,
    Id,
}
