use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    pub id: i32,
    pub customer_id: i32,
    pub name: String,
    pub address: String,
}

impl From<models::service_location::Model> for ServiceLocation {
    fn from(m: models::service_location::Model) -> Self {
        Self { id: m.id, customer_id: m.customer_id, name: m.name, address: m.address }
    }
}

/// Create body and patch target for a service location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceLocationInput {
    #[validate(required(message = "Customer ID is required"))]
    pub customer_id: Option<i32>,
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required"),
        length(max = 255, message = "Name cannot exceed 255 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Address is required"),
        custom(function = "not_blank", message = "Address is required"),
        length(max = 500, message = "Address cannot exceed 500 characters")
    )]
    pub address: Option<String>,
}

impl From<&ServiceLocation> for ServiceLocationInput {
    fn from(l: &ServiceLocation) -> Self {
        Self { customer_id: Some(l.customer_id), name: Some(l.name.clone()), address: Some(l.address.clone()) }
    }
}

impl ServiceLocationInput {
    /// Only call after validation has passed.
    pub fn into_record(self) -> Result<NewServiceLocation, ServiceError> {
        let missing = |what: &str| ServiceError::BadArgument(format!("{} is required", what));
        Ok(NewServiceLocation {
            customer_id: self.customer_id.ok_or_else(|| missing("Customer ID"))?,
            name: self.name.ok_or_else(|| missing("Name"))?,
            address: self.address.ok_or_else(|| missing("Address"))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceLocation {
    pub customer_id: i32,
    pub name: String,
    pub address: String,
}
