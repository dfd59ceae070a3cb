pub mod errors;
pub mod db;
pub mod enums;
pub mod user;
pub mod service_location;
pub mod location_feature;
pub mod service_type;
pub mod frequency;
pub mod service_feature_factor;
pub mod estimate;
pub mod line_item;

#[cfg(test)]
mod tests;
