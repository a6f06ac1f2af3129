//! Track metadata inferred from filenames, plus a best-effort duration read.

mod classify;
mod duration;
mod extract;

pub use classify::{Category, categorize, generate_tags};
pub use duration::duration_or_fallback;
pub use extract::extract_metadata;
