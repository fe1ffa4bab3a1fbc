//! Driver-level errors.
//!
//! Core outcomes (duplicate insert, missing name, refused exit) are result
//! values, not errors; what can actually fail here is reading the script,
//! decoding a command, or constructing the table.

use std::io;

use symtab_table::SymtabError;
use thiserror::Error;

use crate::command::CommandError;

#[derive(Debug, Error)]
pub enum DriverError {
    /// The script had no bucket-count header line.
    #[error("script is empty; expected a bucket-count header line")]
    MissingHeader,

    /// The header line did not parse as a bucket count.
    #[error("invalid bucket-count header '{0}'")]
    BadBucketCount(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Table(#[from] SymtabError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
