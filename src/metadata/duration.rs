use std::path::Path;

use lofty::prelude::AudioFile;

/// Read the embedded duration of `path` in whole seconds.
pub fn probe_duration(path: &Path) -> Result<u64, lofty::error::LoftyError> {
    let tagged = lofty::read_from_path(path)?;
    Ok(tagged.properties().duration().as_secs())
}

/// Like [`probe_duration`], substituting `fallback` when the file can't be read.
pub fn duration_or_fallback(path: &Path, fallback: u64) -> u64 {
    match probe_duration(path) {
        Ok(secs) => secs,
        Err(e) => {
            log::warn!(
                "[Duration] Could not read duration for {}: {e}; using {fallback}s",
                path.display()
            );
            fallback
        }
    }
}
