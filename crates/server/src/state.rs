use std::sync::Arc;

use models::enums::UserKind;
use sea_orm::DatabaseConnection;
use service::location_feature::{LocationFeatureService, SeaOrmLocationFeatureRepository};
use service::service_location::{SeaOrmServiceLocationRepository, ServiceLocationService};
use service::user::{SeaOrmUserRepository, UserService};
use service::validation::RuleRegistry;

pub type Users = UserService<SeaOrmUserRepository>;
pub type ServiceLocations = ServiceLocationService<SeaOrmServiceLocationRepository>;
pub type LocationFeatures = LocationFeatureService<SeaOrmLocationFeatureRepository>;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub customers: Arc<Users>,
    pub contractors: Arc<Users>,
    pub service_locations: Arc<ServiceLocations>,
    pub location_features: Arc<LocationFeatures>,
    pub rules: Arc<RuleRegistry>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let users = |kind| Arc::new(UserService::new(Arc::new(SeaOrmUserRepository::new(db.clone(), kind))));
        Self {
            customers: users(UserKind::Customer),
            contractors: users(UserKind::Contractor),
            service_locations: Arc::new(ServiceLocationService::new(Arc::new(SeaOrmServiceLocationRepository::new(
                db.clone(),
            )))),
            location_features: Arc::new(LocationFeatureService::new(Arc::new(SeaOrmLocationFeatureRepository::new(
                db.clone(),
            )))),
            rules: Arc::new(service::business_rules()),
            db,
        }
    }

    pub fn users(&self, kind: UserKind) -> &Users {
        match kind {
            UserKind::Customer => &self.customers,
            UserKind::Contractor => &self.contractors,
        }
    }
}
