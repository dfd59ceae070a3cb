use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{NewServiceLocation, ServiceLocation};
use super::repository::ServiceLocationRepository;
use crate::errors::ServiceError;

pub struct ServiceLocationService<R: ServiceLocationRepository> {
    repo: Arc<R>,
}

impl<R: ServiceLocationRepository> ServiceLocationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<ServiceLocation>, ServiceError> { self.repo.get_all().await }

    pub async fn get_by_id(&self, id: i32) -> Result<ServiceLocation, ServiceError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("ServiceLocation", id))
    }

    pub async fn get_by_customer_id(&self, customer_id: i32) -> Result<Vec<ServiceLocation>, ServiceError> {
        self.repo.get_by_customer_id(customer_id).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> { self.repo.exists(id).await }

    #[instrument(skip(self, record), fields(customer_id = record.customer_id))]
    pub async fn create(&self, record: NewServiceLocation) -> Result<ServiceLocation, ServiceError> {
        let location = self.repo.add(record).await?;
        info!(location_id = location.id, "service_location_created");
        Ok(location)
    }

    #[instrument(skip(self, record))]
    pub async fn update(&self, id: i32, record: NewServiceLocation) -> Result<ServiceLocation, ServiceError> {
        let location = self
            .repo
            .update(id, record)
            .await?
            .ok_or_else(|| ServiceError::not_found("ServiceLocation", id))?;
        info!(location_id = id, "service_location_updated");
        Ok(location)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(location_id = id, "service_location_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_location::repository::mock::MockServiceLocationRepository;

    fn record(customer_id: i32) -> NewServiceLocation {
        NewServiceLocation { customer_id, name: "Home".into(), address: "1 Elm St".into() }
    }

    #[tokio::test]
    async fn not_found_messages() {
        let svc = ServiceLocationService::new(Arc::new(MockServiceLocationRepository::default()));
        let err = svc.get_by_id(5).await.unwrap_err();
        assert_eq!(err.to_string(), "ServiceLocation with ID 5 not found.");
        assert!(matches!(svc.update(5, record(1)).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(5).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn filters_by_customer() {
        let svc = ServiceLocationService::new(Arc::new(MockServiceLocationRepository::default()));
        let a = svc.create(record(1)).await.unwrap();
        svc.create(record(2)).await.unwrap();
        assert_eq!(svc.get_by_customer_id(1).await.unwrap(), vec![a]);
        assert!(svc.get_by_customer_id(3).await.unwrap().is_empty());
    }
}
