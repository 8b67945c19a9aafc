use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::extractor::ExtractError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unknown input encoding [{0}]")]
    UnknownEncoding(String),
    #[error("Input folder [{}] does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("Failed to scan input folder")]
    Discovery(#[from] walkdir::Error),
    #[error("Failed to read [{}]", path.display())]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("Failed to extract [{}]", path.display())]
    Extract {
        path: PathBuf,
        source: ExtractError
    },
    #[error("Failed to write [{}]", path.display())]
    Write {
        path: PathBuf,
        source: csv::Error
    }
}
