//! Standard leaf and logical matchers

pub mod any;
pub mod collection;
pub mod logical;
pub mod ordering;
pub mod text;

pub use any::{instance_of, instance_of_that, InstanceOf};
pub use collection::{
    contains, contains_in_any_order, contains_values, empty, every_item, has_item, has_len,
    has_len_that, Contains, ContainsInAnyOrder, EveryItem, HasItem, HasLen, IsEmpty,
};
pub use logical::{
    all_of, any_of, anything, equal_to, is, is_value, not, predicate, AllOf, AnyOf, Anything, Is,
    IsEqual, Not, Predicate,
};
pub use ordering::{
    close_to, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, CloseTo,
    OrderingComparison,
};
pub use text::{contains_string, ends_with, starts_with, SubstringMatcher};
