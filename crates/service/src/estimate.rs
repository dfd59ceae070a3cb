//! Estimate-side records. No endpoint exposes them yet; their structural
//! invariants are still checked through the same validation pipeline.
use models::enums::{Category, FrequencyType};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EstimateDraft {
    #[validate(range(min = 0.0, message = "Total cannot be negative"))]
    pub total: f32,
    #[validate(required(message = "Customer is required"))]
    pub customer_id: Option<i32>,
    #[validate(required(message = "Contractor is required"))]
    pub contractor_id: Option<i32>,
    #[validate(length(min = 1, message = "An estimate needs at least one line item"), nested)]
    pub line_items: Vec<LineItemDraft>,
}

impl EstimateDraft {
    pub fn line_item_total(&self) -> f32 {
        self.line_items.iter().map(|li| li.cost).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineItemDraft {
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f32,
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 255, message = "Name cannot exceed 255 characters")
    )]
    pub name: String,
    #[validate(required(message = "Service type is required"))]
    pub service_type_id: Option<i32>,
    #[validate(required(message = "Frequency is required"))]
    pub frequency_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceTypeDraft {
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 255, message = "Name cannot exceed 255 characters")
    )]
    pub name: String,
    #[validate(length(max = 1024, message = "Description cannot exceed 1024 characters"))]
    pub description: String,
    #[validate(required(message = "Category is required"))]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrequencyDraft {
    #[serde(rename = "type")]
    #[validate(required(message = "Frequency type is required"))]
    pub frequency_type: Option<FrequencyType>,
    #[validate(range(min = 0, message = "Value cannot be negative"))]
    pub value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceFeatureFactorDraft {
    #[validate(required(message = "Service type is required"))]
    pub service_type_id: Option<i32>,
    #[validate(custom(function = "not_blank", message = "Feature type is required"))]
    pub feature_type: String,
    #[validate(range(min = 0.0, message = "Multiplier cannot be negative"))]
    pub multiplier: f32,
    #[validate(length(max = 1024, message = "Calculation notes cannot exceed 1024 characters"))]
    pub calculation_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_entity, RuleRegistry, ValidationFailure};

    fn mow(cost: f32) -> LineItemDraft {
        LineItemDraft { cost, name: "Weekly mow".into(), service_type_id: Some(1), frequency_id: Some(2) }
    }

    #[test]
    fn estimate_without_line_items_is_rejected() {
        let draft = EstimateDraft { total: 0.0, customer_id: Some(2), contractor_id: Some(1), line_items: vec![] };
        let err = validate_entity(&draft, &RuleRegistry::default()).unwrap_err();
        let ValidationFailure::Structural(errors) = err else { panic!("expected structural failure") };
        assert_eq!(errors["lineItems"], vec!["An estimate needs at least one line item".to_string()]);
    }

    #[test]
    fn nested_line_item_errors_are_indexed() {
        let mut bad = mow(10.0);
        bad.name = " ".into();
        let draft = EstimateDraft {
            total: 10.0,
            customer_id: Some(2),
            contractor_id: Some(1),
            line_items: vec![mow(10.0), bad],
        };
        let err = validate_entity(&draft, &RuleRegistry::default()).unwrap_err();
        assert_eq!(err.errors()["lineItems[1].name"], vec!["Name is required".to_string()]);
    }

    #[test]
    fn complete_estimate_passes_and_sums_costs() {
        let draft = EstimateDraft {
            total: 30.0,
            customer_id: Some(2),
            contractor_id: Some(1),
            line_items: vec![mow(10.0), mow(20.0)],
        };
        assert!(draft.validate().is_ok());
        assert_eq!(draft.line_item_total(), 30.0);
    }

    #[test]
    fn service_type_description_limit() {
        let draft = ServiceTypeDraft { name: "Pruning".into(), description: "d".repeat(1025), category: Some(Category::Tree) };
        let errors = crate::validation::flatten(&draft.validate().unwrap_err());
        assert!(errors.contains_key("description"));
    }

    #[test]
    fn frequency_type_uses_type_member() {
        let draft: FrequencyDraft = serde_json::from_str(r#"{"type":"Seasonal","value":4}"#).unwrap();
        assert_eq!(draft.frequency_type, Some(FrequencyType::Seasonal));
        assert!(draft.validate().is_ok());
        assert!(FrequencyDraft { frequency_type: None, value: 1 }.validate().is_err());
    }

    #[test]
    fn factor_requires_feature_type() {
        let draft = ServiceFeatureFactorDraft {
            service_type_id: Some(1),
            feature_type: "".into(),
            multiplier: 1.5,
            calculation_notes: None,
        };
        let errors = crate::validation::flatten(&draft.validate().unwrap_err());
        assert_eq!(errors["featureType"], vec!["Feature type is required".to_string()]);
    }
}
