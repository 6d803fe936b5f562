//! Content type identification from leading "magic" bytes.

mod matcher;
mod prefix;
mod rules;

pub use matcher::{SignatureMatcher, UNKNOWN_LABEL};
pub use prefix::{FilePrefix, PREFIX_LEN};
pub use rules::SignatureRule;

pub use crate::error::SignatureError;
