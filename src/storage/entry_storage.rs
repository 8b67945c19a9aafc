use std::collections::btree_set::Iter;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Entry;

/// Deduplicating, ordered collection of every entry read in a run.
///
/// Membership is full structural equality, so rows repeated across
/// overlapping exports collapse to one. Iteration is sorted by field order.
#[derive(Debug, Default)]
pub struct EntryStorage {
    entries: BTreeSet<Entry>
}

impl EntryStorage {
    pub fn new() -> Self {
        Self {
            entries: BTreeSet::new()
        }
    }

    /// Merges entries into the storage, returning how many were not already present.
    pub fn merge<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Entry>,
    {
        let before = self.entries.len();
        self.entries.extend(entries);
        self.entries.len() - before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Writes a header row followed by one row per entry.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut output = csv::Writer::from_writer(writer);

        for entry in self.iter() {
            output.serialize(entry)?;
        }

        output.flush()?;

        Ok(())
    }

    /// Creates (or truncates) `path` and writes the CSV into it.
    pub fn write_csv_file(&self, path: &Path) -> Result<(), csv::Error> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }
}
