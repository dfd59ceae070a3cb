//! Service layer providing the repository and service triads over `models`.
//! - Repositories are traits with a SeaORM implementation and an in-memory mock.
//! - Services translate missing rows into not-found failures.
//! - Input documents go through the two-phase validation pipeline before persistence.

pub mod errors;
pub mod repository;
pub mod validation;
pub mod patch;
pub mod user;
pub mod service_location;
pub mod location_feature;
pub mod estimate;
#[cfg(test)]
pub mod test_support;

use validation::RuleRegistry;

/// Registry with every business-rule validator the API applies.
pub fn business_rules() -> RuleRegistry {
    RuleRegistry::default().with::<user::UserInput, _>(user::rules::UserNameRule)
}
