//! Two-phase validation of input documents.
//!
//! Phase one is structural: the `validator` derive on the input type (required
//! members, lengths, ranges). Phase two runs only when phase one passes and
//! applies whichever business-rule validator is registered for the type. A type
//! without a registered validator skips phase two.
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field name (camelCase, as it appears in JSON) to its messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("One or more validation errors occurred.")]
    Structural(FieldErrors),
    #[error("One or more business rules were violated.")]
    BusinessRule(FieldErrors),
}

impl ValidationFailure {
    pub fn errors(&self) -> &FieldErrors {
        match self {
            ValidationFailure::Structural(errors) | ValidationFailure::BusinessRule(errors) => errors,
        }
    }
}

/// Business rules for one input type.
pub trait RuleValidator<T>: Send + Sync {
    fn validate(&self, value: &T) -> Result<(), FieldErrors>;
}

/// Business-rule validators keyed by the type they validate.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    validators: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl RuleRegistry {
    pub fn register<T: 'static, V: RuleValidator<T> + 'static>(&mut self, validator: V) {
        let erased: Arc<dyn RuleValidator<T>> = Arc::new(validator);
        self.validators.insert(TypeId::of::<T>(), Arc::new(erased));
    }

    pub fn with<T: 'static, V: RuleValidator<T> + 'static>(mut self, validator: V) -> Self {
        self.register::<T, V>(validator);
        self
    }

    pub fn get<T: 'static>(&self) -> Option<Arc<dyn RuleValidator<T>>> {
        self.validators
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<Arc<dyn RuleValidator<T>>>())
            .cloned()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry").field("validators", &self.validators.len()).finish()
    }
}

/// Run both phases against `value`.
pub fn validate_entity<T: Validate + 'static>(value: &T, rules: &RuleRegistry) -> Result<(), ValidationFailure> {
    value.validate().map_err(|e| ValidationFailure::Structural(flatten(&e)))?;
    if let Some(validator) = rules.get::<T>() {
        validator.validate(value).map_err(ValidationFailure::BusinessRule)?;
    }
    Ok(())
}

/// Flatten `validator`'s nested report into `field -> messages`.
/// Nested members are addressed as `lineItems[0].name`.
pub fn flatten(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let name = format!("{}{}", prefix, camel_case(&field.to_string()));
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(name.clone()).or_default();
                messages.extend(list.iter().map(|e| message_for(&name, e)));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &format!("{}.", name), out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect(inner, &format!("{}[{}].", name, idx), out);
                }
            }
        }
    }
}

fn message_for(field: &str, err: &ValidationError) -> String {
    match &err.message {
        Some(msg) => msg.to_string(),
        None => format!("The {} field is invalid ({}).", field, err.code),
    }
}

pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Text that is present but holds nothing besides whitespace.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool { self.trim().is_empty() }
}

impl Blank for String {
    fn is_blank(&self) -> bool { self.as_str().is_blank() }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool { (**self).is_blank() }
}

/// Rejects empty and whitespace-only text.
pub fn not_blank<T: Blank + ?Sized>(value: &T) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Numbers that survive a round trip through JSON.
pub trait Finite {
    fn is_finite_number(&self) -> bool;
}

impl Finite for f32 {
    fn is_finite_number(&self) -> bool { self.is_finite() }
}

impl Finite for f64 {
    fn is_finite_number(&self) -> bool { self.is_finite() }
}

impl<T: Finite + ?Sized> Finite for &T {
    fn is_finite_number(&self) -> bool { (**self).is_finite_number() }
}

/// Rejects infinities and NaN, e.g. `1e40` read into an `f32`.
pub fn finite<T: Finite>(value: T) -> Result<(), ValidationError> {
    if !value.is_finite_number() {
        return Err(ValidationError::new("finite"));
    }
    Ok(())
}

/// Single-field business-rule failure.
pub fn field_error(field: &str, message: impl Into<String>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.into()]);
    errors
}
