use async_trait::async_trait;
use models::location_feature;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::domain::{LocationFeature, NewLocationFeature};
use crate::errors::ServiceError;
use crate::repository::{updated, Repository};

#[async_trait]
pub trait LocationFeatureRepository: Repository<Entity = LocationFeature, Record = NewLocationFeature> {
    async fn get_by_location_id(&self, location_id: i32) -> Result<Vec<LocationFeature>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmLocationFeatureRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLocationFeatureRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmLocationFeatureRepository {
    type Entity = LocationFeature;
    type Record = NewLocationFeature;

    async fn get_by_id(&self, id: i32) -> Result<Option<LocationFeature>, ServiceError> {
        Ok(location_feature::Entity::find_by_id(id).one(&self.db).await?.map(LocationFeature::from))
    }

    async fn get_all(&self) -> Result<Vec<LocationFeature>, ServiceError> {
        let rows = location_feature::Entity::find()
            .order_by_asc(location_feature::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(LocationFeature::from).collect())
    }

    async fn add(&self, record: NewLocationFeature) -> Result<LocationFeature, ServiceError> {
        let am = location_feature::ActiveModel {
            location_id: Set(record.location_id),
            feature_type: Set(record.feature_type),
            measurement: Set(record.measurement),
            unit: Set(record.unit),
            description: Set(record.description),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn update(&self, id: i32, record: NewLocationFeature) -> Result<Option<LocationFeature>, ServiceError> {
        let am = location_feature::ActiveModel {
            id: Unchanged(id),
            location_id: Set(record.location_id),
            feature_type: Set(record.feature_type),
            measurement: Set(record.measurement),
            unit: Set(record.unit),
            description: Set(record.description),
        };
        updated(am.update(&self.db).await)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = location_feature::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("LocationFeature", id));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = location_feature::Entity::find()
            .filter(location_feature::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }
}

#[async_trait]
impl LocationFeatureRepository for SeaOrmLocationFeatureRepository {
    async fn get_by_location_id(&self, location_id: i32) -> Result<Vec<LocationFeature>, ServiceError> {
        let rows = location_feature::Entity::find()
            .filter(location_feature::Column::LocationId.eq(location_id))
            .order_by_asc(location_feature::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(LocationFeature::from).collect())
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::repository::mock::MemoryTable;

    #[derive(Default)]
    pub struct MockLocationFeatureRepository {
        rows: MemoryTable<LocationFeature>,
    }

    fn build(id: i32, r: NewLocationFeature) -> LocationFeature {
        LocationFeature {
            id,
            location_id: r.location_id,
            feature_type: r.feature_type,
            measurement: r.measurement,
            unit: r.unit,
            description: r.description,
        }
    }

    #[async_trait]
    impl Repository for MockLocationFeatureRepository {
        type Entity = LocationFeature;
        type Record = NewLocationFeature;

        async fn get_by_id(&self, id: i32) -> Result<Option<LocationFeature>, ServiceError> { Ok(self.rows.get(id)) }

        async fn get_all(&self) -> Result<Vec<LocationFeature>, ServiceError> { Ok(self.rows.all()) }

        async fn add(&self, record: NewLocationFeature) -> Result<LocationFeature, ServiceError> {
            Ok(self.rows.insert_with(|id| build(id, record)))
        }

        async fn update(&self, id: i32, record: NewLocationFeature) -> Result<Option<LocationFeature>, ServiceError> {
            Ok(self.rows.replace_with(id, |id| build(id, record)))
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            if self.rows.remove(id) { Ok(()) } else { Err(ServiceError::not_found("LocationFeature", id)) }
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> { Ok(self.rows.contains(id)) }
    }

    #[async_trait]
    impl LocationFeatureRepository for MockLocationFeatureRepository {
        async fn get_by_location_id(&self, location_id: i32) -> Result<Vec<LocationFeature>, ServiceError> {
            Ok(self.rows.filter(|f| f.location_id == location_id))
        }
    }
}
