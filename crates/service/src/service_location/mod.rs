pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NewServiceLocation, ServiceLocation, ServiceLocationInput};
pub use repository::{SeaOrmServiceLocationRepository, ServiceLocationRepository};
pub use service::ServiceLocationService;
