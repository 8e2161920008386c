// Word extraction. Each split rule is a predicate over a character transition
// so it can be tested on its own; `extract_words` combines them in one scan.

/// Anything that is not an ASCII letter or digit separates words.
pub fn is_delimiter(ch: char) -> bool {
    !ch.is_ascii_alphanumeric()
}

/// `myVariable` splits between `y` and `V`.
pub fn is_camel_boundary(prev: char, current: char) -> bool {
    prev.is_ascii_lowercase() && current.is_ascii_uppercase()
}

/// `HTTPRequest` splits between `P` and `R`: an uppercase letter followed by
/// an uppercase letter that itself starts a lowercase run.
pub fn is_acronym_boundary(prev: char, current: char, next: Option<char>) -> bool {
    prev.is_ascii_uppercase()
        && current.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase())
}

/// `version2` splits between `n` and `2`.
pub fn is_letter_to_digit(prev: char, current: char) -> bool {
    prev.is_ascii_alphabetic() && current.is_ascii_digit()
}

/// `2nd` splits between `2` and `n`.
pub fn is_digit_to_letter(prev: char, current: char) -> bool {
    prev.is_ascii_digit() && current.is_ascii_alphabetic()
}

/// Whether a new word starts at `current`, given its neighbours.
///
/// Only meaningful when both `prev` and `current` are word characters; a
/// delimiter on either side is handled by [`is_delimiter`].
pub fn is_split_point(prev: char, current: char, next: Option<char>) -> bool {
    is_camel_boundary(prev, current)
        || is_acronym_boundary(prev, current, next)
        || is_letter_to_digit(prev, current)
        || is_digit_to_letter(prev, current)
}

/// Split arbitrary text into words of ASCII letters and digits.
///
/// Delimiter runs produce no words, and the words keep their original casing
/// and left-to-right order. Empty, whitespace-only or punctuation-only input
/// yields an empty vector.
pub fn extract_words(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if is_delimiter(ch) {
            flush(&mut current, &mut words);
            continue;
        }

        if !current.is_empty() && i > 0 {
            let prev = chars[i - 1];
            if is_split_point(prev, ch, chars.get(i + 1).copied()) {
                flush(&mut current, &mut words);
            }
        }

        current.push(ch);
    }

    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    let word = current.trim();
    if !word.is_empty() {
        words.push(word.to_string());
    }
    current.clear();
}
