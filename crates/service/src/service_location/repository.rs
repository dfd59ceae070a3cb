use async_trait::async_trait;
use models::service_location;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::domain::{NewServiceLocation, ServiceLocation};
use crate::errors::ServiceError;
use crate::repository::{updated, Repository};

#[async_trait]
pub trait ServiceLocationRepository: Repository<Entity = ServiceLocation, Record = NewServiceLocation> {
    async fn get_by_customer_id(&self, customer_id: i32) -> Result<Vec<ServiceLocation>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceLocationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmServiceLocationRepository {
    type Entity = ServiceLocation;
    type Record = NewServiceLocation;

    async fn get_by_id(&self, id: i32) -> Result<Option<ServiceLocation>, ServiceError> {
        Ok(service_location::Entity::find_by_id(id).one(&self.db).await?.map(ServiceLocation::from))
    }

    async fn get_all(&self) -> Result<Vec<ServiceLocation>, ServiceError> {
        let rows = service_location::Entity::find()
            .order_by_asc(service_location::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ServiceLocation::from).collect())
    }

    async fn add(&self, record: NewServiceLocation) -> Result<ServiceLocation, ServiceError> {
        let am = service_location::ActiveModel {
            customer_id: Set(record.customer_id),
            name: Set(record.name),
            address: Set(record.address),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn update(&self, id: i32, record: NewServiceLocation) -> Result<Option<ServiceLocation>, ServiceError> {
        let am = service_location::ActiveModel {
            id: Unchanged(id),
            customer_id: Set(record.customer_id),
            name: Set(record.name),
            address: Set(record.address),
        };
        updated(am.update(&self.db).await)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = service_location::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("ServiceLocation", id));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = service_location::Entity::find()
            .filter(service_location::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }
}

#[async_trait]
impl ServiceLocationRepository for SeaOrmServiceLocationRepository {
    async fn get_by_customer_id(&self, customer_id: i32) -> Result<Vec<ServiceLocation>, ServiceError> {
        let rows = service_location::Entity::find()
            .filter(service_location::Column::CustomerId.eq(customer_id))
            .order_by_asc(service_location::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ServiceLocation::from).collect())
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::repository::mock::MemoryTable;

    #[derive(Default)]
    pub struct MockServiceLocationRepository {
        rows: MemoryTable<ServiceLocation>,
    }

    fn build(id: i32, r: NewServiceLocation) -> ServiceLocation {
        ServiceLocation { id, customer_id: r.customer_id, name: r.name, address: r.address }
    }

    #[async_trait]
    impl Repository for MockServiceLocationRepository {
        type Entity = ServiceLocation;
        type Record = NewServiceLocation;

        async fn get_by_id(&self, id: i32) -> Result<Option<ServiceLocation>, ServiceError> { Ok(self.rows.get(id)) }

        async fn get_all(&self) -> Result<Vec<ServiceLocation>, ServiceError> { Ok(self.rows.all()) }

        async fn add(&self, record: NewServiceLocation) -> Result<ServiceLocation, ServiceError> {
            Ok(self.rows.insert_with(|id| build(id, record)))
        }

        async fn update(&self, id: i32, record: NewServiceLocation) -> Result<Option<ServiceLocation>, ServiceError> {
            Ok(self.rows.replace_with(id, |id| build(id, record)))
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            if self.rows.remove(id) { Ok(()) } else { Err(ServiceError::not_found("ServiceLocation", id)) }
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> { Ok(self.rows.contains(id)) }
    }

    #[async_trait]
    impl ServiceLocationRepository for MockServiceLocationRepository {
        async fn get_by_customer_id(&self, customer_id: i32) -> Result<Vec<ServiceLocation>, ServiceError> {
            Ok(self.rows.filter(|l| l.customer_id == customer_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_customer};

    fn location(customer_id: i32, name: &str) -> NewServiceLocation {
        NewServiceLocation { customer_id, name: name.into(), address: "1 Elm St".into() }
    }

    #[tokio::test]
    async fn get_by_customer_id_returns_only_that_customers_locations() -> anyhow::Result<()> {
        let db = get_db().await?;
        let jane = seed_customer(&db, "Jane Smith").await?;
        let bob = seed_customer(&db, "Bob").await?;
        let carol = seed_customer(&db, "Carol").await?;
        let repo = SeaOrmServiceLocationRepository::new(db);

        let home = repo.add(location(jane, "Home")).await?;
        let cabin = repo.add(location(jane, "Cabin")).await?;
        repo.add(location(bob, "Office")).await?;

        let janes = repo.get_by_customer_id(jane).await?;
        assert_eq!(janes, vec![home, cabin]);
        assert!(repo.get_by_customer_id(carol).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_customer_is_invalid_operation() -> anyhow::Result<()> {
        let repo = SeaOrmServiceLocationRepository::new(get_db().await?);
        let err = repo.add(location(4242, "Ghost")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidOperation(_)), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_none_and_delete_missing_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let jane = seed_customer(&db, "Jane Smith").await?;
        let repo = SeaOrmServiceLocationRepository::new(db);
        assert!(repo.update(77, location(jane, "Home")).await?.is_none());
        let err = repo.delete(77).await.unwrap_err();
        assert_eq!(err.to_string(), "ServiceLocation with ID 77 not found.");
        Ok(())
    }
}
