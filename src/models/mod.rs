mod entry;

pub use entry::Entry;

/// Memo label the export uses for a card top-up.
pub const TOP_UP_MEMO: &str = "チャージ";
