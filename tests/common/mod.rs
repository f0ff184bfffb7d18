/// Quotes each word so that splitting the result gives the words back.
///
/// Every word goes in single quotes; embedded single quotes are closed,
/// escaped and reopened (`'\''`).
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| format!("'{}'", w.as_ref().replace('\'', r"'\''")))
        .collect::<Vec<_>>()
        .join(" ")
}
