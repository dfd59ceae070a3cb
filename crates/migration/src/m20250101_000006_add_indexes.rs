use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users: every repository query is scoped by subtype
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_discriminator")
                    .table(Users::Table)
                    .col(Users::Discriminator)
                    .to_owned(),
            )
            .await?;

        // ServiceLocations: lookup by owning customer
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_locations_customer_id")
                    .table(ServiceLocations::Table)
                    .col(ServiceLocations::CustomerId)
                    .to_owned(),
            )
            .await?;

        // LocationFeatures: lookup by owning location
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_features_location_id")
                    .table(LocationFeatures::Table)
                    .col(LocationFeatures::LocationId)
                    .to_owned(),
            )
            .await?;

        // LineItems: lookup by parent estimate
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_line_items_estimate_id")
                    .table(LineItems::Table)
                    .col(LineItems::EstimateId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_line_items_estimate_id").table(LineItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_location_features_location_id").table(LocationFeatures::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_locations_customer_id").table(ServiceLocations::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_discriminator").table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Discriminator }

#[derive(DeriveIden)]
enum ServiceLocations { Table, CustomerId }

#[derive(DeriveIden)]
enum LocationFeatures { Table, LocationId }

#[derive(DeriveIden)]
enum LineItems { Table, EstimateId }
