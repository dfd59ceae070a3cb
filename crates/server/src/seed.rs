//! Demo rows for a fresh store.
use models::enums::UserKind;
use models::user;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

pub const DEMO_CONTRACTOR: &str = "John's Landscaping";
pub const DEMO_CUSTOMER: &str = "Jane Smith";

/// Insert one contractor and one customer when `users` is empty. Returns whether anything was written.
pub async fn seed_demo_users(db: &DatabaseConnection) -> Result<bool, sea_orm::DbErr> {
    if user::Entity::find().count(db).await? > 0 {
        return Ok(false);
    }
    for (name, kind) in [(DEMO_CONTRACTOR, UserKind::Contractor), (DEMO_CUSTOMER, UserKind::Customer)] {
        user::ActiveModel { name: Set(name.to_string()), discriminator: Set(kind), ..Default::default() }
            .insert(db)
            .await?;
    }
    info!(contractor = DEMO_CONTRACTOR, customer = DEMO_CUSTOMER, "seeded demo users");
    Ok(true)
}
