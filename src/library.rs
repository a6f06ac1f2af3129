//! The music directory: listing audio files and normalizing their names.

mod model;
mod rename;
mod sanitize;
mod scan;

pub use model::AudioEntry;
pub use rename::{RenameOutcome, rename_all};
pub use scan::list_audio_files;
