#![forbid(unsafe_code)]
//! Batch converter for WeiDU TRA localization trees.
//!
//! Walks a directory tree of `.tra` translation files, determines per file
//! which legacy code page it is stored in (from its language directory and a
//! few filename rules), and rewrites the tree under a new root in UTF-8, or
//! back into the legacy code pages with the reverse direction flag. Console
//! message files (`setup.tra`, `install.tra`) stay in their native code page
//! and can be fanned out into per-OS variants.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use handle_charsets::{Config, run};
//!
//! let config = Config {
//!     tra_path: "my_mod/tra".into(),
//!     out_path: "my_mod/tra_utf8".into(),
//!     from_utf8: false,
//!     split_console: false,
//! };
//! run(&config)?;
//! # Ok::<(), handle_charsets::Error>(())
//! ```

pub mod charset;
pub mod convert;
pub mod discover;
pub mod error;
pub mod paths;

// Re-export most used items for easy consumption
pub use crate::{
    charset::{destination_encoding, is_console_file, legacy_encoding, source_encoding},
    convert::{Config, GENERATED_FILE_COMMENT, run},
    discover::find_files,
    error::Error,
};
