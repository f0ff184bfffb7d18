use tracing::{debug, trace};

use crate::chars::{
    DOUBLE_QUOTE, ESCAPE, SINGLE_QUOTE, is_double_escapable, is_raw_special, is_separator,
};
use crate::error::SplitError;

/// Scanner position inside the word being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Raw,
    Escaped,
    SingleQuoted,
    DoubleQuoted,
}

/// Splits a line the way /bin/sh splits arguments.
///
/// Backslash escapes, single quotes and double quotes are honoured. No
/// expansion of any kind happens: `$HOME`, `*.rs`, `~` and `{a,b}` come
/// back untouched, and `$'...'` quoting is not recognised.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    split_into(input, &mut words)?;
    Ok(words)
}

/// Like [`split`], but appends to `words`.
///
/// On error the words that were complete before the failing one stay in
/// `words`. They are not the whole line and should not be treated as such.
pub fn split_into(mut input: &str, words: &mut Vec<String>) -> Result<(), SplitError> {
    let start = words.len();
    loop {
        input = skip_separators(input)?;
        if input.is_empty() {
            break;
        }
        let mut word = String::new();
        input = split_word(input, &mut word)?;
        trace!(word = %word.as_str(), "split word");
        words.push(word);
    }
    debug!(count = words.len() - start, "split line");
    Ok(())
}

/// Drops leading separators and `\<newline>` continuations.
///
/// Returns the input starting at the first character of the next word, or
/// an empty string if there is none. A lone trailing backslash is an error
/// even when only whitespace precedes it.
pub(crate) fn skip_separators(mut input: &str) -> Result<&str, SplitError> {
    loop {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if is_separator(c) => input = chars.as_str(),
            Some(ESCAPE) => match chars.next() {
                None => return Err(SplitError::UnterminatedEscape),
                Some('\n') => input = chars.as_str(),
                Some(_) => return Ok(input),
            },
            _ => return Ok(input),
        }
    }
}

/// Extracts one word from `input` into `buf`.
///
/// `input` must start at the first character of the word. The returned
/// remainder begins after the separator that ended the word, or is empty
/// when the word ran to the end of input. Literal runs are copied into
/// `buf` a span at a time; `rest` always starts at the first character not
/// yet copied.
pub(crate) fn split_word<'a>(input: &'a str, buf: &mut String) -> Result<&'a str, SplitError> {
    buf.clear();
    let mut rest = input;
    let mut state = State::Raw;

    loop {
        match state {
            State::Raw => {
                let Some((i, c)) = rest.char_indices().find(|&(_, c)| is_raw_special(c)) else {
                    buf.push_str(rest);
                    return Ok("");
                };
                buf.push_str(&rest[..i]);
                rest = &rest[i + c.len_utf8()..];
                state = match c {
                    SINGLE_QUOTE => State::SingleQuoted,
                    DOUBLE_QUOTE => State::DoubleQuoted,
                    ESCAPE => State::Escaped,
                    // separator: the word is done and the separator is consumed
                    _ => return Ok(rest),
                };
            }
            State::Escaped => {
                let mut chars = rest.chars();
                match chars.next() {
                    None => return Err(SplitError::UnterminatedEscape),
                    // line continuation
                    Some('\n') => {}
                    Some(c) => buf.push(c),
                }
                rest = chars.as_str();
                state = State::Raw;
            }
            State::SingleQuoted => {
                let Some(i) = rest.find(SINGLE_QUOTE) else {
                    return Err(SplitError::UnterminatedSingleQuote);
                };
                buf.push_str(&rest[..i]);
                rest = &rest[i + SINGLE_QUOTE.len_utf8()..];
                state = State::Raw;
            }
            State::DoubleQuoted => {
                rest = split_double_quoted(rest, buf)?;
                state = State::Raw;
            }
        }
    }
}

/// Copies the body of a double-quoted span into `buf` and returns what
/// follows the closing quote.
///
/// Only `$`, `` ` ``, `"`, `\` and newline can be escaped. A backslash
/// before anything else is kept together with that character.
fn split_double_quoted<'a>(rest: &'a str, buf: &mut String) -> Result<&'a str, SplitError> {
    // offset of the first byte not yet copied into buf
    let mut flushed = 0;
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            DOUBLE_QUOTE => {
                buf.push_str(&rest[flushed..i]);
                return Ok(&rest[i + DOUBLE_QUOTE.len_utf8()..]);
            }
            ESCAPE => {
                if let Some((j, next)) = chars.next() {
                    if is_double_escapable(next) {
                        buf.push_str(&rest[flushed..i]);
                        if next != '\n' {
                            buf.push(next);
                        }
                        flushed = j + next.len_utf8();
                    }
                }
            }
            _ => {}
        }
    }
    Err(SplitError::UnterminatedDoubleQuote)
}
