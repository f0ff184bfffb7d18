use std::iter::FusedIterator;

use tracing::trace;

use crate::error::SplitError;
use crate::tokenizer::{skip_separators, split_word};

/// Splits off the next word of `input`.
///
/// The word is built in `buf`, which is cleared first and can be handed
/// back on the next call so its allocation is reused. Returns the word and
/// the unconsumed rest of the input, or `None` once only separators remain.
///
/// Calling this until it returns `None` yields the same words as
/// [`split`](crate::split), and fails after the same number of words.
///
/// ```
/// let mut buf = String::new();
/// let (word, rest) = rush_split::token("cp 'a b' c", &mut buf).unwrap().unwrap();
/// assert_eq!((word, rest), ("cp", "'a b' c"));
/// ```
pub fn token<'a, 'b>(
    input: &'a str,
    buf: &'b mut String,
) -> Result<Option<(&'b str, &'a str)>, SplitError> {
    let input = skip_separators(input)?;
    if input.is_empty() {
        return Ok(None);
    }
    let rest = split_word(input, buf)?;
    trace!(word = %buf.as_str(), "split token");
    Ok(Some((buf.as_str(), rest)))
}

/// Iterator over the words of a line, built on [`token`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
    buf: String,
    done: bool,
}

pub fn words(input: &str) -> Words<'_> {
    Words {
        rest: input,
        buf: String::new(),
        done: false,
    }
}

impl<'a> Words<'a> {
    /// Input not yet consumed.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl Iterator for Words<'_> {
    type Item = Result<String, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match token(self.rest, &mut self.buf) {
            Ok(Some((word, rest))) => {
                let word = word.to_owned();
                self.rest = rest;
                Some(Ok(word))
            }
            Ok(None) => {
                self.done = true;
                self.rest = "";
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Words<'_> {}
