use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TOP_UP_MEMO;

/// A single transaction row from a statement page.
///
/// Entries have no identity beyond their field values: two entries are equal
/// when every field is equal, which is what collapses rows repeated across
/// overlapping exports. `tx_id` is kept as text and is not assumed unique.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub memo: String,
    /// Signed amount. Top-ups are negative, everything else keeps the sign it was exported with.
    pub amount: Decimal,
    pub fee: Decimal,
    pub atm_fee: Decimal,
    pub conversion_fee: Decimal,
    pub decision: String,
    pub tx_id: String,
    pub note: String
}

impl Entry {
    /// Builds an entry from already parsed fields, applying the top-up sign rule to `amount`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        memo: String,
        amount: Decimal,
        fee: Decimal,
        atm_fee: Decimal,
        conversion_fee: Decimal,
        decision: String,
        tx_id: String,
        note: String
    ) -> Self {
        let amount = if Self::is_top_up_memo(&memo) { -amount } else { amount };

        Self {
            date,
            memo,
            amount,
            fee,
            atm_fee,
            conversion_fee,
            decision,
            tx_id,
            note
        }
    }

    pub fn is_top_up(&self) -> bool {
        Self::is_top_up_memo(&self.memo)
    }

    fn is_top_up_memo(memo: &str) -> bool {
        memo == TOP_UP_MEMO
    }
}
