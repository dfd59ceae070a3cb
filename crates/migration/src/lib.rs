//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_service_locations;
mod m20250101_000003_create_location_features;
mod m20250101_000004_create_service_catalog;
mod m20250101_000005_create_estimates;
mod m20250101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_service_locations::Migration),
            Box::new(m20250101_000003_create_location_features::Migration),
            Box::new(m20250101_000004_create_service_catalog::Migration),
            Box::new(m20250101_000005_create_estimates::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000006_add_indexes::Migration),
        ]
    }
}
