//! Create `location_features` table with FK to `service_locations`.
//!
//! Feature type and unit are stored by name.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationFeatures::Table)
                    .if_not_exists()
                    .col(pk_auto(LocationFeatures::Id))
                    .col(integer(LocationFeatures::LocationId).not_null())
                    .col(string_len(LocationFeatures::FeatureType, 50).not_null())
                    .col(float(LocationFeatures::Measurement).not_null())
                    .col(string_len(LocationFeatures::Unit, 50).not_null())
                    .col(string_len_null(LocationFeatures::Description, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_features_service_locations_location_id")
                            .from(LocationFeatures::Table, LocationFeatures::LocationId)
                            .to(ServiceLocations::Table, ServiceLocations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LocationFeatures::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LocationFeatures { Table, Id, LocationId, FeatureType, Measurement, Unit, Description }

#[derive(DeriveIden)]
enum ServiceLocations { Table, Id }
