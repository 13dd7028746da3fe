//! The conversion run: discovery, per-file encoding resolution, rewriting.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};

use crate::{charset, discover, error::Error, paths};

/// Comment block prepended to every file the tool writes.
pub const GENERATED_FILE_COMMENT: &str = "// Do not edit manually. This file is generated automatically by handle-charsets. Your changes will be lost.\n\n";

/// One conversion run's settings, built from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the tree to scan for `.tra` files.
    pub tra_path: PathBuf,
    /// Root the converted tree is written under.
    pub out_path: PathBuf,
    /// Reverse direction: read UTF-8 sources, write legacy code pages.
    pub from_utf8: bool,
    /// Fan console files out into per-OS variants.
    pub split_console: bool,
}

/// Converts every `.tra` file under `config.tra_path`, mirroring the tree
/// under `config.out_path`.
///
/// Stops at the first unresolved language, undecodable source, or
/// unencodable output; files already written stay on disk.
pub fn run(config: &Config) -> Result<(), Error> {
    let tra_files = discover::find_files(&config.tra_path, "tra")?;
    for tra_file in &tra_files {
        convert_file(config, tra_file)?;
    }
    Ok(())
}

fn convert_file(config: &Config, tra_file: &Path) -> Result<(), Error> {
    let relpath = tra_file.strip_prefix(&config.tra_path).unwrap_or(tra_file);
    let language = paths::language(paths::directory_of(relpath));
    let src_encoding = charset::source_encoding(&language, tra_file, config.from_utf8)?;
    let dst_encoding = charset::destination_encoding(&language, tra_file, config.from_utf8)?;
    let out_file = config.out_path.join(relpath);

    if config.split_console && charset::is_console_file(tra_file) {
        // win32 keeps the resolved code page; unix and osx terminals render
        // UTF-8 natively.
        let win32_file = paths::platform_variant(&out_file, "win32");
        rewrite(tra_file, src_encoding, &win32_file, dst_encoding)?;
        for platform in ["unix", "osx"] {
            let os_file = paths::platform_variant(&out_file, platform);
            rewrite(tra_file, src_encoding, &os_file, UTF_8)?;
        }
    } else {
        rewrite(tra_file, src_encoding, &out_file, dst_encoding)?;
    }
    Ok(())
}

/// Reads `src` in `src_enc`, prepends the generated-file comment, and
/// writes the result to `dst` in `dst_enc`, creating the destination
/// directory as needed.
pub fn rewrite(
    src: &Path,
    src_enc: &'static Encoding,
    dst: &Path,
    dst_enc: &'static Encoding,
) -> Result<(), Error> {
    println!(
        "{}, {}\t=>\t{}, {}",
        src.display(),
        src_enc.name(),
        dst.display(),
        dst_enc.name()
    );

    let bytes = fs::read(src)?;
    let text = src_enc
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| Error::Decode {
            path: src.to_path_buf(),
            encoding: src_enc.name(),
        })?;

    if let Some(dst_dir) = dst.parent() {
        prepare_directory(dst_dir)?;
    }

    let data = format!("{GENERATED_FILE_COMMENT}{text}");
    let (encoded, _, had_unmappable) = dst_enc.encode(&data);
    if had_unmappable {
        return Err(Error::Encode {
            path: dst.to_path_buf(),
            encoding: dst_enc.name(),
        });
    }
    fs::write(dst, &encoded)?;
    Ok(())
}

// A same-named non-directory entry in the way of the destination directory
// is removed and replaced.
fn prepare_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        fs::remove_file(dir)?;
    }
    fs::create_dir_all(dir)
}
