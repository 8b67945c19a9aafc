use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Field error: value is blank")]
    Blank,
    #[error("Field error: invalid decimal [{raw}]")]
    InvalidDecimal {
        raw: String,
        source: rust_decimal::Error
    },
    #[error("Field error: invalid date [{raw}]")]
    InvalidDate {
        raw: String,
        source: chrono::ParseError
    },
    #[error("Field error: date [{raw}] is not zero-padded YYYY/MM/DD")]
    DateLayout {
        raw: String
    }
}
