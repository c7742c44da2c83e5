//! Member access outcomes
//!
//! An accessor either yields the member value (borrowed or computed) or
//! fails. A failure is not an error of the matcher: it becomes that member's
//! mismatch text and the sibling members are still evaluated.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use matchkit_core::language::short_type_name;
use matchkit_core::panic_message;
use matchkit_core_types::schema::{EVENT_END_ERROR, OP_ACCESS_MEMBER};
use thiserror::Error;

/// Result of reading one member from a value.
pub enum Access<'a, V> {
    Borrowed(&'a V),
    Owned(V),
    Failed(AccessError),
}

impl<V: fmt::Debug> fmt::Debug for Access<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Borrowed(value) => f.debug_tuple("Borrowed").field(value).finish(),
            Access::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Access::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

impl<'a, V> From<Option<&'a V>> for Access<'a, V> {
    fn from(value: Option<&'a V>) -> Self {
        value.map_or(Access::Failed(AccessError::Missing), Access::Borrowed)
    }
}

/// Why a member could not be read. The `Display` form is the mismatch text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("did not exist")]
    Missing,

    #[error("was not accessible")]
    Inaccessible,

    #[error("threw an exception: {type_name}: {message}")]
    Errored { type_name: String, message: String },

    #[error("threw an exception: panic: {message}")]
    Panicked { message: String },
}

impl AccessError {
    /// Failure for an accessor that returned `Err(err)`
    pub fn errored<E: fmt::Display>(err: &E) -> Self {
        AccessError::Errored {
            type_name: short_type_name::<E>(),
            message: err.to_string(),
        }
    }
}

/// Run a user-supplied accessor, turning a panic into its message.
pub(crate) fn catch_panic<R>(subject: &str, f: impl FnOnce() -> R) -> Result<R, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::debug!(
            component = module_path!(),
            op = OP_ACCESS_MEMBER,
            event = EVENT_END_ERROR,
            member = subject,
            panic = %message,
        );
        message
    })
}
