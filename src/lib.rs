//! Word splitting with the lexical rules `/bin/sh` uses for arguments.
//!
//! ```
//! let words = rush_split::split(r#"grep -n "fn main" 'src/*.rs'"#).unwrap();
//! assert_eq!(words, vec!["grep", "-n", "fn main", "src/*.rs"]);
//! ```
//!
//! Quotes and backslashes are resolved; nothing is expanded.

mod chars;
mod error;
mod token;
mod tokenizer;

pub use error::SplitError;
pub use token::{Words, token, words};
pub use tokenizer::{split, split_into};
