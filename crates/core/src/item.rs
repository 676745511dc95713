//! Item field validation.
//!
//! Request bodies arrive as untyped JSON. [`validate_new_item`] and
//! [`validate_item_patch`] turn them into typed values before anything
//! reaches the store, collecting every field problem into a single
//! [`CoreError::Validation`] message:
//!
//! ```text
//! Item validation failed: name: Path `name` is required., quantity: Cast to Number failed for value "ten" (type string) at path "quantity"
//! ```

use std::fmt;

use serde::Serializer;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::ItemId;

/// Entity name used in not-found errors and validation messages.
pub const ITEM_ENTITY: &str = "Item";

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

/// Fields for a new item, checked by [`validate_new_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
}

/// A partial update, checked by [`validate_item_patch`].
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none()
    }

    /// Merge the provided fields into an existing record.
    pub fn apply_to(&self, name: &mut String, quantity: &mut f64) {
        if let Some(new_name) = &self.name {
            name.clone_from(new_name);
        }
        if let Some(new_quantity) = self.quantity {
            *quantity = new_quantity;
        }
    }
}

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum FieldError {
    Required(&'static str),
    Cast {
        field: &'static str,
        expected: &'static str,
        value: Value,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{field}: Path `{field}` is required."),
            FieldError::Cast {
                field,
                expected,
                value,
            } => write!(
                f,
                "{field}: Cast to {expected} failed for value {value} (type {}) at path \"{field}\"",
                json_type_name(value),
            ),
        }
    }
}

/// What a body says about one field.
enum Field<T> {
    /// Key not present.
    Absent,
    /// Present but `null` (or an empty string for text fields).
    Blank,
    Value(T),
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

fn read_name(fields: &Map<String, Value>) -> Result<Field<String>, FieldError> {
    match fields.get("name") {
        None => Ok(Field::Absent),
        Some(Value::Null) => Ok(Field::Blank),
        Some(Value::String(s)) if s.is_empty() => Ok(Field::Blank),
        Some(Value::String(s)) => Ok(Field::Value(s.clone())),
        Some(other) => Err(FieldError::Cast {
            field: "name",
            expected: "string",
            value: other.clone(),
        }),
    }
}

fn read_quantity(fields: &Map<String, Value>) -> Result<Field<f64>, FieldError> {
    let cast_error = |value: &Value| FieldError::Cast {
        field: "quantity",
        expected: "Number",
        value: value.clone(),
    };

    let Some(value) = fields.get("quantity") else {
        return Ok(Field::Absent);
    };

    match value {
        Value::Null => Ok(Field::Blank),
        Value::Number(n) => n
            .as_f64()
            .filter(|q| q.is_finite())
            .map(Field::Value)
            .ok_or_else(|| cast_error(value)),
        other => Err(cast_error(other)),
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object().ok_or_else(|| {
        CoreError::Validation(format!(
            "{ITEM_ENTITY} validation failed: body must be a JSON object"
        ))
    })
}

fn validation_failed(errors: &[FieldError]) -> CoreError {
    let details = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    CoreError::Validation(format!("{ITEM_ENTITY} validation failed: {details}"))
}

// ---------------------------------------------------------------------------
// Public validation entry points
// ---------------------------------------------------------------------------

/// Validate a create body: `name` must be a non-empty string and `quantity`
/// a number. Keys other than these two are ignored.
pub fn validate_new_item(body: &Value) -> Result<NewItem, CoreError> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();

    let name = match read_name(fields) {
        Ok(Field::Value(name)) => Some(name),
        Ok(Field::Absent | Field::Blank) => {
            errors.push(FieldError::Required("name"));
            None
        }
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let quantity = match read_quantity(fields) {
        Ok(Field::Value(quantity)) => Some(quantity),
        Ok(Field::Absent | Field::Blank) => {
            errors.push(FieldError::Required("quantity"));
            None
        }
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (name, quantity) {
        (Some(name), Some(quantity)) => Ok(NewItem { name, quantity }),
        _ => Err(validation_failed(&errors)),
    }
}

/// Validate an update body. Absent fields are left alone; provided fields
/// follow the create rules, so `null` or an empty name is rejected.
pub fn validate_item_patch(body: &Value) -> Result<ItemPatch, CoreError> {
    let fields = as_object(body)?;
    let mut errors = Vec::new();
    let mut patch = ItemPatch::default();

    match read_name(fields) {
        Ok(Field::Absent) => {}
        Ok(Field::Blank) => errors.push(FieldError::Required("name")),
        Ok(Field::Value(name)) => patch.name = Some(name),
        Err(e) => errors.push(e),
    }

    match read_quantity(fields) {
        Ok(Field::Absent) => {}
        Ok(Field::Blank) => errors.push(FieldError::Required("quantity")),
        Ok(Field::Value(quantity)) => patch.quantity = Some(quantity),
        Err(e) => errors.push(e),
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(validation_failed(&errors))
    }
}

/// Parse an item id taken from a request path.
pub fn parse_item_id(raw: &str) -> Result<ItemId, CoreError> {
    ItemId::parse_str(raw).map_err(|_| {
        CoreError::Validation(format!(
            "Cast to ItemId failed for value \"{raw}\" (type string) at path \"id\""
        ))
    })
}

/// Serialize a quantity the way a JSON client expects a number: whole
/// values as integers (`10`), everything else as a float (`2.5`).
pub fn serialize_quantity<S: Serializer>(
    quantity: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    // 2^53: beyond this not every integer is representable as f64.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

    if quantity.fract() == 0.0 && quantity.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*quantity as i64)
    } else {
        serializer.serialize_f64(*quantity)
    }
}
