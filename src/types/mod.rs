mod errors;
mod fields;

pub use errors::FieldError;
pub use fields::{parse_amount, parse_date};
