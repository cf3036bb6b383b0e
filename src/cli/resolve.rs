use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

use crate::CisaVulnError;

/// Turn the user-supplied output string into a path we can write to.
///
/// - a bare filename lands in the current directory;
/// - a path whose parent directory exists is used as given;
/// - anything else falls back to `default_outfile` in the current directory.
pub fn resolve_output_path(raw: &str, default_outfile: &str) -> Utf8PathBuf {
    let fallback = || Utf8PathBuf::from(format!("./{}", default_outfile));

    if raw.trim().is_empty() {
        warn!("Empty output path. Defaulting to './{}'", default_outfile);
        return fallback();
    }

    if !raw.contains(['/', '\\']) {
        return Utf8PathBuf::from(format!("./{}", raw));
    }

    match Utf8Path::new(raw).parent() {
        Some(parent) if parent.is_dir() => Utf8PathBuf::from(raw),
        _ => {
            warn!(
                "Output folder doesn't exist. Defaulting to './{}'",
                default_outfile
            );
            fallback()
        }
    }
}

pub fn parse_verify_flag(text: &str) -> crate::Result<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CisaVulnError::InvalidFlag(format!(
            "SSL verification must be true or false, got '{}'",
            text
        )))
    }
}

/// Like [`parse_verify_flag`], but unrecognized values keep verification on.
pub fn verify_flag_or_default(text: &str) -> bool {
    parse_verify_flag(text).unwrap_or_else(|e| {
        warn!("{}. Defaulting to true", e);
        true
    })
}
