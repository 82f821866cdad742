//! Receipt text helpers.

/// Upper-case the first character of every space-separated word.
///
/// The rest of each word is kept as-is, and runs of spaces are preserved.
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render cents as dollars with exactly two decimals, e.g. `4550` -> `45.50`.
pub fn format_dollars(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
