//! Input tokenization.
//!
//! Turns a raw line into lower-cased words and knows which of them carry no meaning.

/// Function words dropped before matching.
pub const NOISE_WORDS: &[&str] = &["a", "an", "the", "and", "then", "my"];

/// Words that separate the two objects of "use X on Y".
pub const PREPOSITIONS: &[&str] = &["on", "with", "in", "to"];

/// Separates several objects of one verb ("take key and sword").
pub const LIST_SEPARATOR: &str = "and";

/// Lower-cases and splits on whitespace. Empty tokens never appear.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(|w| w.to_lowercase()).collect()
}

pub fn is_noise(word: &str) -> bool {
    NOISE_WORDS.contains(&word)
}

pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}

pub fn strip_noise<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !is_noise(w))
        .map(str::to_string)
        .collect()
}
