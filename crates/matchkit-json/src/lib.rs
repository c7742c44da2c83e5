//! matchkit JSON - matchers over `serde_json` trees
//!
//! Every matcher here implements both `Matcher<Value>` and
//! `Matcher<JsonNode>`, checks the node kind first and only then looks at
//! the content. [`json_object`] is the composite: its mismatches are
//! rendered by the core ellipsis renderer, one line per failing member.

#[macro_use]
pub mod node;

pub mod array;
pub mod boolean;
pub mod encoded;
pub mod literal;
pub mod number;
pub mod object;
pub mod presence;
pub mod text;

pub use array::{json_array, json_array_from, json_array_that, IsJsonArray};
pub use boolean::{json_bool, json_boolean, json_boolean_that, IsJsonBoolean};
pub use encoded::{is_json_string_matching, json_serialized, IsJsonStringMatching, JsonSerialized};
pub use literal::{json_object_from, json_value, json_value_from_str, json_value_of};
pub use node::{BoxJsonMatcher, JsonMatcher, JsonNode, JsonNodeType};
pub use number::{
    json_float, json_float_that, json_int, json_int_that, json_number, json_number_from,
    json_uint, json_uint_that, IsJsonNumber,
};
pub use object::{json_key, json_object, IsJsonObject};
pub use presence::{json_missing, json_null, IsJsonMissing, IsJsonNull};
pub use text::{json_text, json_text_eq, json_text_that, IsJsonText};
