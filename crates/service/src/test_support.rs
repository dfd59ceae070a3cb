#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use models::enums::UserKind;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Fresh, migrated in-memory database; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_customer(db: &DatabaseConnection, name: &str) -> Result<i32, anyhow::Error> {
    let row = models::user::ActiveModel {
        name: Set(name.to_string()),
        discriminator: Set(UserKind::Customer),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(row.id)
}

pub async fn seed_location(db: &DatabaseConnection, customer_id: i32, name: &str) -> Result<i32, anyhow::Error> {
    let row = models::service_location::ActiveModel {
        customer_id: Set(customer_id),
        name: Set(name.to_string()),
        address: Set("1 Elm St".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(row.id)
}
