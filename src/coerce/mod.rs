//! Field coercion between wire payloads and in-memory models
//!
//! The platform API speaks loosely typed JSON: booleans travel as `0`/`1`,
//! integers sometimes arrive as strings, timestamps are fixed-format strings,
//! and a few fields use closed enum vocabularies. Each entity kind declares a
//! static table mapping field names to a [`Coercion`] variant; the table is
//! applied symmetrically when pulling a payload into a model and when pushing
//! a model back out. Fields without an entry pass through unchanged.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::error::CoerceError;

mod enums;

pub use enums::EnumCodec;

/// Wire format for `created_on`/`updated_on` style fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Which side of the wire a coercion is being applied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wire payload into in-memory model.
    Pull,
    /// In-memory model into wire payload.
    Push,
}

/// A single field converter.
///
/// Converters are side-effect-free and tolerate `null` by passing it
/// through unchanged; coercing missing data is never attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coercion {
    /// Identity transform in both directions.
    Passthrough,
    /// Numeric field; tolerates numeric strings on pull.
    Int,
    /// Wire `0`/`1` exposed as a boolean in memory (pull side).
    IntToBool,
    /// In-memory boolean written back as `0`/`1` (push side).
    BoolToInt,
    /// Fixed-format date-time string, validated on pull, untouched on push.
    Timestamp,
    /// Closed symbol set with a default; decodes on pull, encodes on push.
    Enum(EnumCodec),
}

impl Coercion {
    /// Apply the converter to one field value.
    ///
    /// `field` is only used for error reporting. Enum coercion never fails;
    /// the other converters surface out-of-domain input as a [`CoerceError`].
    pub fn apply(
        &self,
        direction: Direction,
        field: &str,
        value: Value,
    ) -> Result<Value, CoerceError> {
        // Null means "absent"; no converter touches it.
        if value.is_null() && !matches!(self, Coercion::Enum(_)) {
            return Ok(value);
        }

        match self {
            Coercion::Passthrough => Ok(value),
            Coercion::Int => coerce_int(field, value),
            Coercion::IntToBool => coerce_int_to_bool(field, value),
            Coercion::BoolToInt => coerce_bool_to_int(field, value),
            Coercion::Timestamp => match direction {
                Direction::Pull => coerce_timestamp(field, value),
                // Timestamps are read-only; leave whatever the caller has.
                Direction::Push => Ok(value),
            },
            Coercion::Enum(codec) => Ok(match direction {
                Direction::Pull => Value::String(codec.decode(Some(&value)).to_string()),
                Direction::Push => {
                    let symbol = value.as_str().unwrap_or_default();
                    Value::String(codec.encode(symbol).to_string())
                }
            }),
        }
    }
}

fn coerce_int(field: &str, value: Value) -> Result<Value, CoerceError> {
    match &value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(value)
            } else {
                // Truncate toward zero, as a numeric cast would.
                let truncated = n.as_f64().unwrap_or_default() as i64;
                Ok(Value::Number(truncated.into()))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| Value::Number(i.into()))
            .map_err(|_| CoerceError::ExpectedInt {
                field: field.to_string(),
                value: value.to_string(),
            }),
        _ => Err(CoerceError::ExpectedInt {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn coerce_int_to_bool(field: &str, value: Value) -> Result<Value, CoerceError> {
    match &value {
        Value::Bool(_) => Ok(value),
        Value::Number(n) => Ok(Value::Bool(n.as_f64().unwrap_or_default() != 0.0)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| Value::Bool(i != 0))
            .map_err(|_| CoerceError::ExpectedBool {
                field: field.to_string(),
                value: value.to_string(),
            }),
        _ => Err(CoerceError::ExpectedBool {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn coerce_bool_to_int(field: &str, value: Value) -> Result<Value, CoerceError> {
    match &value {
        Value::Bool(b) => Ok(Value::Number(i64::from(*b).into())),
        // Already in wire form.
        Value::Number(_) => Ok(value),
        _ => Err(CoerceError::ExpectedBool {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn coerce_timestamp(field: &str, value: Value) -> Result<Value, CoerceError> {
    match &value {
        Value::String(s) if NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).is_ok() => Ok(value),
        _ => Err(CoerceError::ExpectedTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Static per-entity field table: `(field name, converter)` pairs.
pub type FieldTable = &'static [(&'static str, Coercion)];

/// Look up the converter registered for a field, if any.
pub fn lookup(table: FieldTable, field: &str) -> Option<&'static Coercion> {
    table
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, coercion)| coercion)
}

/// Apply the pull side of a field table to a raw wire payload.
///
/// Unregistered fields pass through unchanged; registered fields are
/// converted. Enum-coerced fields missing from the payload are filled with
/// their codec's default so models always see a valid symbol.
pub fn pull_payload(
    table: FieldTable,
    raw: &Map<String, Value>,
) -> Result<Map<String, Value>, CoerceError> {
    let mut out = Map::with_capacity(raw.len());
    for (field, value) in raw {
        let coerced = match lookup(table, field) {
            Some(coercion) => coercion.apply(Direction::Pull, field, value.clone())?,
            None => value.clone(),
        };
        out.insert(field.clone(), coerced);
    }

    for (field, coercion) in table {
        if let Coercion::Enum(codec) = coercion {
            out.entry(field.to_string())
                .or_insert_with(|| Value::String(codec.default_symbol().to_string()));
        }
    }

    Ok(out)
}

/// Apply the push side of a field table to a serialized model.
///
/// The push table is declared as a set of overrides over the pull table:
/// a field's push converter is its override entry when one exists, its pull
/// entry otherwise. Fields absent from the model are simply not emitted.
pub fn push_payload(
    pull: FieldTable,
    push_overrides: FieldTable,
    model: &Map<String, Value>,
) -> Result<Map<String, Value>, CoerceError> {
    let mut out = Map::with_capacity(model.len());
    for (field, value) in model {
        let coercion = lookup(push_overrides, field).or_else(|| lookup(pull, field));
        let coerced = match coercion {
            Some(coercion) => coercion.apply(Direction::Push, field, value.clone())?,
            None => value.clone(),
        };
        out.insert(field.clone(), coerced);
    }
    Ok(out)
}
