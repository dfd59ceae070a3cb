//! Create `service_types`, `frequencies` and `service_feature_factors`.
//!
//! Reference data priced into estimate line items.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceTypes::Id))
                    .col(string_len(ServiceTypes::Name, 255).not_null())
                    .col(string_len(ServiceTypes::Description, 1024).not_null())
                    .col(string_len(ServiceTypes::Category, 50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Frequencies::Table)
                    .if_not_exists()
                    .col(pk_auto(Frequencies::Id))
                    .col(string_len(Frequencies::FrequencyType, 50).not_null())
                    .col(integer(Frequencies::Value).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceFeatureFactors::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceFeatureFactors::Id))
                    .col(integer(ServiceFeatureFactors::ServiceTypeId).not_null())
                    .col(string_len(ServiceFeatureFactors::FeatureType, 50).not_null())
                    .col(float(ServiceFeatureFactors::Multiplier).not_null())
                    .col(string_len_null(ServiceFeatureFactors::CalculationNotes, 1024))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_feature_factors_service_types")
                            .from(ServiceFeatureFactors::Table, ServiceFeatureFactors::ServiceTypeId)
                            .to(ServiceTypes::Table, ServiceTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceFeatureFactors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Frequencies::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ServiceTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceTypes { Table, Id, Name, Description, Category }

#[derive(DeriveIden)]
enum Frequencies { Table, Id, FrequencyType, Value }

#[derive(DeriveIden)]
enum ServiceFeatureFactors { Table, Id, ServiceTypeId, FeatureType, Multiplier, CalculationNotes }
