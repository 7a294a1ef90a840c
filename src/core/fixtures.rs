//! Writes provider bodies to disk so they can be replayed as test fixtures.
//!
//! Set `FUNDNAV_RECORD=1` to enable. Files land in `FUNDNAV_FIXDIR`, or in
//! `tests/fixtures` under the crate root when unset.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory fixtures are written to.
pub fn fixture_dir() -> PathBuf {
    match env::var_os("FUNDNAV_FIXDIR") {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
    }
}

/// File name for one recorded body, e.g. `pingzhongdata_000001.js`.
///
/// Fund codes are caller input, so anything outside `[A-Za-z0-9_-]` becomes `_`
/// and the name always stays inside the fixture directory.
pub fn fixture_file_name(endpoint: &str, code: &str, ext: &str) -> String {
    let code: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{endpoint}_{code}.{ext}")
}

/// Writes `body` into `dir`, creating the directory if needed.
pub fn write_fixture(
    dir: &Path,
    endpoint: &str,
    code: &str,
    ext: &str,
    body: &str,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture_file_name(endpoint, code, ext));
    fs::write(&path, body)?;
    Ok(path)
}

/// Records `body` when `FUNDNAV_RECORD=1`. Write failures are logged, never returned.
pub(crate) fn record_if_enabled(endpoint: &str, code: &str, ext: &str, body: &str) {
    if env::var("FUNDNAV_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    match write_fixture(&fixture_dir(), endpoint, code, ext, body) {
        Ok(_path) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %_path.display(), "recorded fixture");
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, endpoint, code, "failed to record fixture");
        }
    }
}
