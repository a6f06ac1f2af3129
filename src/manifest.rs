//! The `music.json` manifest: model, construction and output.
//!
//! A manifest is always rebuilt from the files on disk; existing manifest
//! content is never read or merged.

mod build;
mod model;

pub use build::{TrackContext, build_manifest, raw_base_url, write_manifest};
#[cfg(test)]
pub use model::Manifest;
