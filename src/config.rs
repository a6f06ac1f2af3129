//! Settings and credentials.
//!
//! Settings come from an optional TOML file plus environment overrides;
//! credentials come from the repository's `key=value` file.

mod credentials;
mod load;
mod schema;

pub use credentials::Credentials;
pub use schema::*;
