//! Quote validation module.

mod validate;

pub use validate::{
    quick_validate, validate_config, validate_item, validate_product, validate_quote,
    validate_quote_file, ValidationResult,
};
