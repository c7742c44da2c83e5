//! Building matchers from JSON literals

use matchkit_core::language::add_article;
use matchkit_core::matchers::is;
use matchkit_core::{ExError, MatchError, Result};
use matchkit_core_types::schema::{EVENT_END_ERROR, OP_PARSE_JSON};
use serde::Serialize;
use serde_json::Value;

use crate::array::json_array_from;
use crate::boolean::json_bool;
use crate::node::{value_type, BoxJsonMatcher};
use crate::number::json_number_from;
use crate::object::{json_object, IsJsonObject};
use crate::presence::json_null;
use crate::text::json_text_eq;

/// Matcher that accepts exactly `value`.
///
/// Objects become [`IsJsonObject`] composites, so a mismatch deep inside a
/// literal is reported structurally rather than as one large inequality.
///
/// # Errors
///
/// Propagates errors from [`json_object_from`].
pub fn json_value(value: &Value) -> Result<BoxJsonMatcher> {
    let matcher: BoxJsonMatcher = match value {
        Value::Null => Box::new(json_null()),
        Value::Bool(b) => Box::new(json_bool(*b)),
        Value::Number(n) => Box::new(json_number_from(n)),
        Value::String(s) => Box::new(json_text_eq(s.as_str())),
        Value::Array(elements) => Box::new(json_array_from(elements)?),
        Value::Object(_) => Box::new(json_object_from(value)?),
    };
    Ok(matcher)
}

/// Object matcher with one `is(<literal>)` member per field of `value`.
///
/// Members follow the iteration order of `serde_json::Map`.
///
/// # Errors
///
/// Returns `ExErrorKind::InvalidInput` when `value` is not an object.
pub fn json_object_from(value: &Value) -> Result<IsJsonObject> {
    let Value::Object(fields) = value else {
        return Err(MatchError::InvalidInput {
            reason: format!(
                "expected an object node, but got {} node",
                add_article(value_type(value).name())
            ),
        }
        .into());
    };
    fields
        .iter()
        .try_fold(json_object(), |object, (key, field)| {
            object.with(key.as_str(), is(json_value(field)?))
        })
}

/// Serialize `value` and build the literal matcher for the result.
///
/// # Errors
///
/// Returns `ExErrorKind::Serialization` when `value` cannot be represented
/// as JSON.
pub fn json_value_of<T: Serialize + ?Sized>(value: &T) -> Result<BoxJsonMatcher> {
    let tree = serde_json::to_value(value).map_err(|e| {
        ExError::from(MatchError::Serialization {
            reason: e.to_string(),
        })
        .with_source(e)
    })?;
    json_value(&tree)
}

/// Parse `text` and build the literal matcher for the result.
///
/// # Errors
///
/// Returns `ExErrorKind::InvalidJson` when `text` does not parse.
pub fn json_value_from_str(text: &str) -> Result<BoxJsonMatcher> {
    let tree = parse_json(text).map_err(|e| {
        ExError::from(MatchError::InvalidJson {
            reason: e.to_string(),
        })
        .with_source(e)
    })?;
    json_value(&tree)
}

pub(crate) fn parse_json(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str::<Value>(text).inspect_err(|e| {
        tracing::debug!(
            component = module_path!(),
            op = OP_PARSE_JSON,
            event = EVENT_END_ERROR,
            error = %e,
        );
    })
}
