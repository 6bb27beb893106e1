//! Request body validation.
//!
//! Bodies are taken as raw JSON so that every field problem can be reported,
//! including wrong types, instead of failing on the first serde error. All
//! checks run before the player is looked up.

use hp_core::{DamageCategory, ModificationRequest};
use serde::Serialize;
use serde_json::{Map, Value};
use strum::VariantNames;
use utoipa::ToSchema;

/// One invalid field and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The body itself is not a JSON object.
    pub fn body(message: impl Into<String>) -> Self {
        Self::new("body", message)
    }
}

pub type Validated<T> = Result<T, Vec<FieldError>>;

/// `{ playerName, amount, damageType }`
pub fn validate_damage(body: &Value) -> Validated<ModificationRequest> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();

    let name = player_name(fields, &mut errors);
    let amount = amount(fields, &mut errors);
    let category = damage_type(fields, &mut errors);

    match (name, amount, category) {
        (Some(name), Some(amount), Some(category)) if errors.is_empty() => {
            Ok(ModificationRequest::damage(name, amount, category))
        }
        _ => Err(errors),
    }
}

/// `{ playerName, amount }`
pub fn validate_heal(body: &Value) -> Validated<ModificationRequest> {
    let (name, amount) = validate_name_and_amount(body)?;
    Ok(ModificationRequest::heal(name, amount))
}

/// `{ playerName, amount }`
pub fn validate_temp_hp(body: &Value) -> Validated<ModificationRequest> {
    let (name, amount) = validate_name_and_amount(body)?;
    Ok(ModificationRequest::grant_temp_hp(name, amount))
}

fn validate_name_and_amount(body: &Value) -> Validated<(String, u32)> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();

    let name = player_name(fields, &mut errors);
    let amount = amount(fields, &mut errors);

    match (name, amount) {
        (Some(name), Some(amount)) if errors.is_empty() => Ok((name, amount)),
        _ => Err(errors),
    }
}

fn as_object(body: &Value) -> Validated<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| vec![FieldError::body("request body must be a JSON object")])
}

fn player_name(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    const FIELD: &str = "playerName";

    match fields.get(FIELD) {
        None | Some(Value::Null) => errors.push(FieldError::new(FIELD, "playerName is required")),
        Some(Value::String(name)) if name.is_empty() => {
            errors.push(FieldError::new(FIELD, "playerName must not be empty"))
        }
        Some(Value::String(name)) => return Some(name.clone()),
        Some(_) => errors.push(FieldError::new(FIELD, "playerName must be a string")),
    }
    None
}

fn amount(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<u32> {
    const FIELD: &str = "amount";

    let number = match fields.get(FIELD) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(FIELD, "amount is required"));
            return None;
        }
        Some(Value::Number(number)) => number,
        Some(_) => {
            errors.push(FieldError::new(FIELD, "amount must be an integer"));
            return None;
        }
    };

    // 5.0 is accepted as 5; JSON clients do not always distinguish.
    let value = if let Some(value) = number.as_i64() {
        i128::from(value)
    } else if let Some(value) = number.as_u64() {
        i128::from(value)
    } else {
        match number.as_f64() {
            Some(value) if value.fract() == 0.0 && value.abs() < 1e18 => value as i128,
            _ => {
                errors.push(FieldError::new(FIELD, "amount must be an integer"));
                return None;
            }
        }
    };

    if value < 0 {
        errors.push(FieldError::new(FIELD, "amount must not be less than 0"));
        return None;
    }

    match u32::try_from(value) {
        Ok(amount) => Some(amount),
        Err(_) => {
            errors.push(FieldError::new(
                FIELD,
                format!("amount must not be greater than {}", u32::MAX),
            ));
            None
        }
    }
}

fn damage_type(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<DamageCategory> {
    const FIELD: &str = "damageType";

    match fields.get(FIELD) {
        None | Some(Value::Null) => errors.push(FieldError::new(FIELD, "damageType is required")),
        Some(Value::String(raw)) => match raw.parse::<DamageCategory>() {
            Ok(category) => return Some(category),
            Err(_) => errors.push(FieldError::new(
                FIELD,
                format!(
                    "damageType must be one of the following values: {}",
                    DamageCategory::VARIANTS.join(", ")
                ),
            )),
        },
        Some(_) => errors.push(FieldError::new(FIELD, "damageType must be a string")),
    }
    None
}
