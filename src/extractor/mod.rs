mod errors;
mod html_extractor;

pub use errors::ExtractError;
pub use html_extractor::extract;

/// Positional layout of a statement table row.
///
/// The export carries no stable class names or ids on its cells, so lookups are
/// by position. These indices are the contract with the known export format;
/// a change here is a change of supported format.
pub mod layout {
    pub const DATE: usize = 0;
    pub const MEMO: usize = 1;
    /// The amount cell holds several `div`s: the first is a display value that
    /// is not the transaction amount, the second is the amount.
    pub const AMOUNT: usize = 2;
    pub const AMOUNT_ELEMENT: usize = 1;
    pub const FEE: usize = 3;
    pub const ATM_FEE: usize = 4;
    pub const CONVERSION_FEE: usize = 5;
    pub const DECISION: usize = 6;
    pub const TX_ID: usize = 7;
    pub const NOTE: usize = 8;
}
