//! matchkit Pojo - matchers over plain structs and string-keyed maps
//!
//! [`pojo`] builds a composite from accessor closures, [`map_with`] from map
//! keys. Both report through the core ellipsis renderer. [`mapped`] checks a
//! function of the value instead of the value itself.

pub mod access;
pub mod map;
pub mod mapped;
pub mod pojo;

pub use access::{Access, AccessError};
pub use map::{map_with, IsMap};
pub use mapped::{mapped, Mapped};
pub use pojo::{pojo, IsPojo, PojoMember};
