use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, SHIFT_JIS};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::engine::errors::ConvertError;
use crate::extractor::extract;
use crate::models::Entry;
use crate::storage::EntryStorage;

/// Statement pages live at `<root>/YYYY/MM/<name>.html`.
const STATEMENT_DEPTH: usize = 3;
const STATEMENT_EXTENSION: &str = "html";

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files_read: usize,
    pub files_skipped: usize,
    pub entries: usize,
    /// `None` when nothing was read in and no file was written.
    pub output: Option<PathBuf>
}

/// Reads every statement page under an input folder and writes the merged entries as CSV.
pub struct Converter {
    encoding: &'static Encoding,
    skip_invalid: bool
}

impl Converter {
    /// Creates a converter reading pages as Shift_JIS and failing on the first invalid page.
    pub fn new() -> Self {
        Self {
            encoding: SHIFT_JIS,
            skip_invalid: false
        }
    }

    /// Uses the encoding named by a WHATWG label such as `shift_jis` or `euc-jp`.
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self, ConvertError> {
        self.encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }

    /// Logs and skips pages that fail extraction instead of aborting the run.
    pub fn with_skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Converts every page under `input_root` into a single CSV at `output`.
    ///
    /// All pages are read before `output` is opened, so a failing page never
    /// leaves a truncated file behind. When nothing was read in, no file is written.
    pub fn run(&self, input_root: &Path, output: &Path) -> Result<Summary, ConvertError> {
        let mut storage = EntryStorage::new();
        let mut summary = Summary {
            files_read: 0,
            files_skipped: 0,
            entries: 0,
            output: None
        };

        for path in discover(input_root)? {
            info!("Reading in {}", path.display());

            match self.read_file(&path) {
                Ok(entries) => {
                    let read = entries.len();
                    let added = storage.merge(entries);
                    debug!("{read} rows in {}, {added} new", path.display());
                    summary.files_read += 1;
                }
                Err(error @ ConvertError::Extract { .. }) if self.skip_invalid => {
                    warn!("Skipping invalid file: {:#}", anyhow::Error::from(error));
                    summary.files_skipped += 1;
                }
                Err(error) => return Err(error)
            }
        }

        if storage.is_empty() {
            info!("Nothing was read in");
            return Ok(summary);
        }

        summary.entries = storage.len();
        info!("{} rows were read in total", summary.entries);
        info!("Writing to {}", output.display());

        storage.write_csv_file(output).map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source
        })?;

        summary.output = Some(output.to_path_buf());

        Ok(summary)
    }

    /// Reads, decodes and extracts a single page.
    pub fn read_file(&self, path: &Path) -> Result<HashSet<Entry>, ConvertError> {
        let bytes = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source
        })?;

        let (contents, had_errors) = self.encoding.decode_without_bom_handling(&bytes);

        if had_errors {
            warn!("{} is not valid {}, malformed sequences were replaced", path.display(), self.encoding.name());
        }

        extract(&contents).map_err(|source| ConvertError::Extract {
            path: path.to_path_buf(),
            source
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists statement pages matching `<input_root>/*/*/*.html`, sorted by path.
///
/// Hidden entries (names starting with `.`) are ignored at every level, and
/// files at any other depth are not considered.
pub fn discover(input_root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !input_root.is_dir() {
        return Err(ConvertError::InputNotFound(input_root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(input_root)
        .min_depth(1)
        .max_depth(STATEMENT_DEPTH)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = entry?;

        if entry.depth() == STATEMENT_DEPTH && entry.file_type().is_file() && is_statement(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn is_statement(path: &Path) -> bool {
    path.extension().and_then(|extension| extension.to_str()) == Some(STATEMENT_EXTENSION)
}
