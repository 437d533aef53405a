//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_owner_table;
mod m20251001_000003_create_client_table;
mod m20251001_000004_create_business_table;
mod m20251001_000005_create_staff_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_owner_table::Migration),
            Box::new(m20251001_000003_create_client_table::Migration),
            Box::new(m20251001_000004_create_business_table::Migration),
            Box::new(m20251001_000005_create_staff_table::Migration),
        ]
    }
}
