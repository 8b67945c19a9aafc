use thiserror::Error;

use crate::types::FieldError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document has no table element")]
    MissingTable,
    #[error("Row [{row}] has no cell at column [{column}]")]
    MissingCell {
        row: usize,
        column: usize
    },
    #[error("Row [{row}] amount cell has no value element at position [{position}]")]
    MissingAmount {
        row: usize,
        position: usize
    },
    #[error("Row [{row}] column [{column}] could not be parsed")]
    Field {
        row: usize,
        column: usize,
        source: FieldError
    }
}

impl ExtractError {
    pub fn missing_cell(row: usize, column: usize) -> Self {
        Self::MissingCell { row, column }
    }

    /// Returns a mapper attaching the row and column to a field parse failure.
    pub fn field(row: usize, column: usize) -> impl FnOnce(FieldError) -> Self {
        move |source| Self::Field { row, column, source }
    }
}
