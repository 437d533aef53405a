//! Migration: Create the staff roster table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staff::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Staff::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(Staff::Name).string().not_null())
                    .col(ColumnDef::new(Staff::Email).string().not_null())
                    .col(ColumnDef::new(Staff::Cargo).string().not_null())
                    .col(ColumnDef::new(Staff::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Staff::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_business")
                            .from(Staff::Table, Staff::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Roster listing filters by business and sorts by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_staff_business_created_at")
                    .table(Staff::Table)
                    .col(Staff::BusinessId)
                    .col(Staff::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_staff_business_created_at")
                    .table(Staff::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staff {
    Table,
    Id,
    BusinessId,
    Name,
    Email,
    Cargo,
    Phone,
    CreatedAt,
}

#[derive(Iden)]
enum Business {
    Table,
    Id,
}
