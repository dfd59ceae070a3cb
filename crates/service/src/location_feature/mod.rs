pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{LocationFeature, LocationFeatureInput, NewLocationFeature};
pub use repository::{LocationFeatureRepository, SeaOrmLocationFeatureRepository};
pub use service::LocationFeatureService;
