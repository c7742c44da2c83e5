//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Composite evaluation
pub const FIELD_MEMBER: &str = "member";
pub const FIELD_MEMBERS: &str = "members";
pub const FIELD_MISMATCHES: &str = "mismatches";

// Assertions
pub const FIELD_MATCHER: &str = "matcher";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical operation names
pub const OP_ADD_MEMBER: &str = "add_member";
pub const OP_COMPOSITE_CHECK: &str = "composite_check";
pub const OP_CHECK_THAT: &str = "check_that";
pub const OP_PARSE_JSON: &str = "parse_json";
pub const OP_ACCESS_MEMBER: &str = "access_member";
pub const OP_AWAIT_FUTURE: &str = "await_future";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
