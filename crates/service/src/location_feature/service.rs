use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{LocationFeature, NewLocationFeature};
use super::repository::LocationFeatureRepository;
use crate::errors::ServiceError;

pub struct LocationFeatureService<R: LocationFeatureRepository> {
    repo: Arc<R>,
}

impl<R: LocationFeatureRepository> LocationFeatureService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<LocationFeature>, ServiceError> { self.repo.get_all().await }

    pub async fn get_by_id(&self, id: i32) -> Result<LocationFeature, ServiceError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("LocationFeature", id))
    }

    /// Like `get_by_id`, but a feature of another location is also not found.
    pub async fn get_in_location(&self, location_id: i32, id: i32) -> Result<LocationFeature, ServiceError> {
        match self.repo.get_by_id(id).await? {
            Some(feature) if feature.location_id == location_id => Ok(feature),
            _ => Err(ServiceError::not_found("LocationFeature", id)),
        }
    }

    pub async fn get_by_location_id(&self, location_id: i32) -> Result<Vec<LocationFeature>, ServiceError> {
        self.repo.get_by_location_id(location_id).await
    }

    #[instrument(skip(self, record), fields(location_id = record.location_id))]
    pub async fn create(&self, record: NewLocationFeature) -> Result<LocationFeature, ServiceError> {
        let feature = self.repo.add(record).await?;
        info!(feature_id = feature.id, "location_feature_created");
        Ok(feature)
    }

    #[instrument(skip(self, record), fields(location_id = record.location_id))]
    pub async fn update(&self, id: i32, record: NewLocationFeature) -> Result<LocationFeature, ServiceError> {
        let feature = self
            .repo
            .update(id, record)
            .await?
            .ok_or_else(|| ServiceError::not_found("LocationFeature", id))?;
        info!(feature_id = id, "location_feature_updated");
        Ok(feature)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(feature_id = id, "location_feature_deleted");
        Ok(())
    }
}
