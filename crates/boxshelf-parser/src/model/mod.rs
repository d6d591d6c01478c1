//! Data model types produced by the release parser.

mod group_key;
mod release;

pub use group_key::GroupKey;
pub use release::ParsedRelease;
