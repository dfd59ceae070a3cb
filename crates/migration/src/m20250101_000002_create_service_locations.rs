//! Create `service_locations` table with FK to `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceLocations::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceLocations::Id))
                    .col(integer(ServiceLocations::CustomerId).not_null())
                    .col(string_len(ServiceLocations::Name, 255).not_null())
                    .col(string_len(ServiceLocations::Address, 500).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_locations_users_customer_id")
                            .from(ServiceLocations::Table, ServiceLocations::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceLocations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceLocations { Table, Id, CustomerId, Name, Address }

#[derive(DeriveIden)]
enum Users { Table, Id }
