//! Encoding policy: which code page a tra file is read and written in.
//!
//! The language directory decides the legacy code page through a fixed map;
//! a handful of filename rules override it. An unknown language is a
//! configuration defect and aborts the whole run.

use std::collections::HashMap;
use std::path::Path;

use encoding_rs::{
    BIG5, Encoding, GBK, IBM866, SHIFT_JIS, UTF_8, WINDOWS_1250, WINDOWS_1251, WINDOWS_1252,
};
use lazy_static::lazy_static;

use crate::{error::Error, paths};

/// Files whose strings are printed on the install console. The runtime
/// emits them in the platform's native code page, so on disk they stay
/// legacy-encoded whatever the conversion direction.
pub const CONSOLE_FILES: [&str; 2] = ["setup.tra", "install.tra"];

lazy_static! {
    static ref CHARSET_MAP: HashMap<&'static str, &'static Encoding> = HashMap::from([
        ("schinese", GBK),
        ("zh_CN", GBK),
        ("tchinese", BIG5),
        ("czech", WINDOWS_1250),
        ("cs_CZ", WINDOWS_1250),
        ("english", WINDOWS_1252),
        ("american", WINDOWS_1252),
        ("en_US", WINDOWS_1252),
        ("french", WINDOWS_1252),
        ("francais", WINDOWS_1252),
        ("fr_FR", WINDOWS_1252),
        ("german", WINDOWS_1252),
        ("deutsch", WINDOWS_1252),
        ("de_DE", WINDOWS_1252),
        ("italian", WINDOWS_1252),
        ("italiano", WINDOWS_1252),
        ("it_IT", WINDOWS_1252),
        ("japanese", SHIFT_JIS),
        ("ja_JP", SHIFT_JIS),
        ("korean", SHIFT_JIS),
        ("ko_KR", SHIFT_JIS),
        ("polish", WINDOWS_1250),
        ("polski", WINDOWS_1250),
        ("pl_PL", WINDOWS_1250),
        ("portuguese", WINDOWS_1252),
        ("pt_BR", WINDOWS_1252),
        ("russian", WINDOWS_1251),
        ("ru_RU", WINDOWS_1251),
        ("spanish", WINDOWS_1252),
        ("castilian", WINDOWS_1252),
        ("espanol", WINDOWS_1252),
        ("castellano", WINDOWS_1252),
        ("es_ES", WINDOWS_1252),
        ("swedish", WINDOWS_1252),
        ("sw_SE", WINDOWS_1252),
        ("ukrainian", WINDOWS_1251),
        ("uk_UA", WINDOWS_1251),
    ]);
}

/// Whether the file's strings end up on the install console.
pub fn is_console_file(path: &Path) -> bool {
    CONSOLE_FILES.contains(&paths::basename_lower(path).as_str())
}

// Locale codes like "ru_RU" keep their case; plain language names are
// lowercased before lookup.
fn normalize_language(language: &str) -> String {
    if language.contains('_') {
        language.to_string()
    } else {
        language.to_lowercase()
    }
}

/// Legacy code page the file is stored in on the distribution side.
///
/// Console files for Cyrillic languages use the DOS code page rather than
/// the Windows one. `ee.tra` and `*_ee.tra` files target the Enhanced
/// Edition engine, which reads UTF-8 natively.
pub fn legacy_encoding(language: &str, path: &Path) -> Result<&'static Encoding, Error> {
    let language = normalize_language(language);
    let filename = paths::basename_lower(path);

    if CONSOLE_FILES.contains(&filename.as_str())
        && matches!(language.as_str(), "russian" | "ukrainian" | "ru_RU" | "uk_UA")
    {
        return Ok(IBM866);
    }

    if filename == "ee.tra" || filename.ends_with("_ee.tra") {
        return Ok(UTF_8);
    }

    CHARSET_MAP
        .get(language.as_str())
        .copied()
        .ok_or_else(|| Error::UnresolvedEncoding {
            path: path.to_path_buf(),
            language,
        })
}

/// Encoding to save the converted file in.
///
/// Console messages always stay in their native encoding.
pub fn destination_encoding(
    language: &str,
    path: &Path,
    from_utf8: bool,
) -> Result<&'static Encoding, Error> {
    if from_utf8 || is_console_file(path) {
        legacy_encoding(language, path)
    } else {
        Ok(UTF_8)
    }
}

/// Encoding to read the source file in.
pub fn source_encoding(
    language: &str,
    path: &Path,
    from_utf8: bool,
) -> Result<&'static Encoding, Error> {
    if from_utf8 && !is_console_file(path) {
        Ok(UTF_8)
    } else {
        legacy_encoding(language, path)
    }
}
