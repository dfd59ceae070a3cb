use crate::validation::{field_error, FieldErrors, RuleValidator};

use super::domain::UserInput;

/// Reserved word users may not take as part of their name.
const RESERVED: &str = "admin";

/// Names must not contain "admin" in any letter case.
pub struct UserNameRule;

impl RuleValidator<UserInput> for UserNameRule {
    fn validate(&self, value: &UserInput) -> Result<(), FieldErrors> {
        match value.name.as_deref() {
            Some(name) if name.to_lowercase().contains(RESERVED) => {
                Err(field_error("name", "Name cannot contain 'admin'"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_entity, ValidationFailure};

    fn input(name: &str) -> UserInput {
        UserInput { name: Some(name.into()) }
    }

    #[test]
    fn rejects_admin_in_any_case() {
        let rules = crate::business_rules();
        for name in ["admin", "The ADMINistrator", "SysAdmin"] {
            let err = validate_entity(&input(name), &rules).unwrap_err();
            assert!(matches!(err, ValidationFailure::BusinessRule(_)), "{name}");
            assert_eq!(err.errors()["name"], vec!["Name cannot contain 'admin'".to_string()]);
        }
    }

    #[test]
    fn accepts_ordinary_names() {
        assert!(UserNameRule.validate(&input("Jane Smith")).is_ok());
        assert!(UserNameRule.validate(&input("Adam Minton")).is_ok());
    }
}
