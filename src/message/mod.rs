//! IRC message types, parsing, and serialization.

mod parse;
mod serialize;
mod tokenizer;
mod types;

pub use self::serialize::MAX_LINE_LEN;
pub use self::tokenizer::RawLine;
pub use self::types::Message;
