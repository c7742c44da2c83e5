//! matchkit Option - matchers over `Option` and `Result`

pub mod option;
pub mod result;

pub use option::{
    empty_option, option_with_value, option_with_value_that, EmptyOption, PresentOption,
};
pub use result::{err, err_that, ok, ok_with_value_that, IsErr, IsOk};
