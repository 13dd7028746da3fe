//! All error types for the handle-charsets crate.
//!
//! Every failure aborts the whole run; `main` is the only place that turns
//! one of these into a process exit.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to infer encoding for file {} in language {language}", path.display())]
    UnresolvedEncoding { path: PathBuf, language: String },

    #[error("{}: invalid {encoding} byte sequence", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("{}: text not representable in {encoding}", path.display())]
    Encode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
