//! Filename normalization.
//!
//! Sanitized names are lowercase ASCII: the stem only ever contains
//! `[a-z0-9_]`, never starts or ends with `_` and is at most
//! [`MAX_STEM_LEN`] characters long. The extension is kept as it was.

/// Longest stem a sanitized filename can have.
pub const MAX_STEM_LEN: usize = 60;

/// Stem used when nothing survives sanitization.
const EMPTY_STEM: &str = "untitled";

/// Split `name` into `(stem, extension)`; the extension keeps its leading dot.
///
/// A leading dot does not start an extension, so `.mp3` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Normalize a filename stem. Characters other than alphanumerics,
/// whitespace, `-` and `_` are dropped; each run of `-` and whitespace
/// becomes one `_`. Existing underscores are kept as they are.
fn sanitize_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut pending_sep = false;

    for c in stem.chars() {
        if c == '-' || c.is_whitespace() {
            pending_sep = true;
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '_') {
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.push(c.to_ascii_lowercase());
    }

    let mut out = out.trim_matches('_').to_string();

    // Output is ASCII, so byte truncation is char-safe.
    if out.len() > MAX_STEM_LEN {
        out.truncate(MAX_STEM_LEN);
        let kept = out.trim_end_matches('_').len();
        out.truncate(kept);
    }

    if out.is_empty() {
        EMPTY_STEM.to_string()
    } else {
        out
    }
}

/// Sanitize a whole filename, reattaching the original extension.
pub fn sanitize_filename(name: &str) -> String {
    let (stem, ext) = split_extension(name);
    format!("{}{}", sanitize_stem(stem), ext)
}
