use std::path::PathBuf;

/// One audio file found in the music directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEntry {
    pub path: PathBuf,
    pub file_name: String,
}

impl AudioEntry {
    /// Filename without its extension; this is the track id.
    pub fn stem(&self) -> &str {
        super::sanitize::split_extension(&self.file_name).0
    }
}
