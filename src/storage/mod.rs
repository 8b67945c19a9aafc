mod entry_storage;

pub use entry_storage::EntryStorage;
