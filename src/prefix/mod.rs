//! Message prefix (origin) parsing and serialization.

mod serialize;
mod types;

pub use self::types::Prefix;
