//! Create `estimates` and `line_items`.
//!
//! Estimates reference both a customer and a contractor row in `users`; a
//! referenced user cannot be deleted while estimates point at it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Estimates::Table)
                    .if_not_exists()
                    .col(pk_auto(Estimates::Id))
                    .col(float(Estimates::Total).not_null())
                    .col(integer(Estimates::CustomerId).not_null())
                    .col(integer(Estimates::ContractorId).not_null())
                    .col(timestamp_with_time_zone(Estimates::CreatedDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_estimates_users_customer_id")
                            .from(Estimates::Table, Estimates::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_estimates_users_contractor_id")
                            .from(Estimates::Table, Estimates::ContractorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LineItems::Table)
                    .if_not_exists()
                    .col(pk_auto(LineItems::Id))
                    .col(float(LineItems::Cost).not_null())
                    .col(string_len(LineItems::Name, 255).not_null())
                    .col(integer(LineItems::EstimateId).not_null())
                    .col(integer(LineItems::ServiceTypeId).not_null())
                    .col(integer(LineItems::FrequencyId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_items_estimates")
                            .from(LineItems::Table, LineItems::EstimateId)
                            .to(Estimates::Table, Estimates::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_items_service_types")
                            .from(LineItems::Table, LineItems::ServiceTypeId)
                            .to(ServiceTypes::Table, ServiceTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_items_frequencies")
                            .from(LineItems::Table, LineItems::FrequencyId)
                            .to(Frequencies::Table, Frequencies::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LineItems::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Estimates::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Estimates { Table, Id, Total, CustomerId, ContractorId, CreatedDate }

#[derive(DeriveIden)]
enum LineItems { Table, Id, Cost, Name, EstimateId, ServiceTypeId, FrequencyId }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum ServiceTypes { Table, Id }

#[derive(DeriveIden)]
enum Frequencies { Table, Id }
