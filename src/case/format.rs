/// Uppercase the first character of a word and lowercase the rest.
///
/// Original casing is ignored, so `HTTP` becomes `Http`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Uppercase only the first character of an already formatted string.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

pub(crate) fn join_mapped<F>(words: &[String], joiner: &str, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    words
        .iter()
        .map(|w| transform(w.as_str()))
        .collect::<Vec<_>>()
        .join(joiner)
}
