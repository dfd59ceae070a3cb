use models::enums::UserKind;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::not_blank;

/// A customer or contractor as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    #[serde(skip)]
    pub kind: UserKind,
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.id, name: m.name, kind: m.discriminator }
    }
}

/// Create body and patch target for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserInput {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required"),
        length(max = 100, message = "Name cannot exceed 100 characters")
    )]
    pub name: Option<String>,
}

impl From<&User> for UserInput {
    fn from(u: &User) -> Self {
        Self { name: Some(u.name.clone()) }
    }
}

impl UserInput {
    /// Only call after validation has passed.
    pub fn into_record(self) -> Result<NewUser, ServiceError> {
        let name = self.name.ok_or_else(|| ServiceError::BadArgument("Name is required".into()))?;
        Ok(NewUser { name })
    }
}

/// Validated payload written on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_oversized_names_fail_structurally() {
        let blank = UserInput { name: Some("   ".into()) };
        assert!(blank.validate().is_err());
        let long = UserInput { name: Some("x".repeat(101)) };
        assert!(long.validate().is_err());
        let ok = UserInput { name: Some("x".repeat(100)) };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn unknown_members_are_rejected() {
        let res: Result<UserInput, _> = serde_json::from_str(r#"{"name":"Jane","role":"x"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn output_omits_subtype_tag() {
        let user = User { id: 3, name: "Jane".into(), kind: UserKind::Customer };
        assert_eq!(serde_json::to_value(&user).unwrap(), serde_json::json!({ "id": 3, "name": "Jane" }));
    }
}
