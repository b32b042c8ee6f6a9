//! Static virtual file system: node types, location helpers, and the compiled seed.

pub mod path;
pub mod seed;
pub mod types;
