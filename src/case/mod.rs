pub mod format;
pub mod tokenizer;

use crate::error::CaseError;
use format::{capitalize, join_mapped, upper_first};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
pub use tokenizer::extract_words;

/// The supported output conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// `hello world`
    Lowercase,
    /// `HELLO WORLD`
    Uppercase,
    /// `Hello world`
    Sentence,
    /// `Hello World`
    Title,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello.world`
    Dot,
    /// `HELLO_WORLD`
    Constant,
}

impl CaseType {
    /// Every valid case type, in canonical order.
    pub const ALL: [CaseType; 10] = [
        CaseType::Lowercase,
        CaseType::Uppercase,
        CaseType::Sentence,
        CaseType::Title,
        CaseType::Snake,
        CaseType::Kebab,
        CaseType::Camel,
        CaseType::Pascal,
        CaseType::Dot,
        CaseType::Constant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseType::Lowercase => "lowercase",
            CaseType::Uppercase => "uppercase",
            CaseType::Sentence => "sentence",
            CaseType::Title => "title",
            CaseType::Snake => "snake",
            CaseType::Kebab => "kebab",
            CaseType::Camel => "camel",
            CaseType::Pascal => "pascal",
            CaseType::Dot => "dot",
            CaseType::Constant => "constant",
        }
    }

    /// Separator placed between words.
    pub fn joiner(self) -> &'static str {
        match self {
            CaseType::Lowercase | CaseType::Uppercase | CaseType::Sentence | CaseType::Title => " ",
            CaseType::Snake | CaseType::Constant => "_",
            CaseType::Kebab => "-",
            CaseType::Dot => ".",
            CaseType::Camel | CaseType::Pascal => "",
        }
    }

    /// Convert `input` to this case.
    pub fn apply(self, input: &str) -> String {
        let words = extract_words(input);
        if words.is_empty() {
            return String::new();
        }
        self.join(&words)
    }

    /// Render an already extracted word sequence.
    pub fn join(self, words: &[String]) -> String {
        let joiner = self.joiner();
        match self {
            CaseType::Lowercase | CaseType::Snake | CaseType::Kebab | CaseType::Dot => {
                join_mapped(words, joiner, str::to_lowercase)
            }
            CaseType::Uppercase | CaseType::Constant => join_mapped(words, joiner, str::to_uppercase),
            CaseType::Sentence => upper_first(&join_mapped(words, joiner, str::to_lowercase)),
            CaseType::Title | CaseType::Pascal => join_mapped(words, joiner, capitalize),
            CaseType::Camel => match words {
                [] => String::new(),
                [only] => only.to_lowercase(),
                [first, rest @ ..] => {
                    first.to_lowercase() + &join_mapped(rest, joiner, capitalize)
                }
            },
        }
    }
}

impl FromStr for CaseType {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CaseType::ALL
            .into_iter()
            .find(|case| case.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CaseError::UnsupportedCaseType(s.to_string()))
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `input` to the case named by `case_type`.
///
/// The name is validated before any work is done, so an unsupported name
/// fails even for empty input.
pub fn convert_case(input: &str, case_type: &str) -> Result<String, CaseError> {
    let case = case_type.parse::<CaseType>()?;
    Ok(case.apply(input))
}

pub fn to_lower_case(input: &str) -> String {
    CaseType::Lowercase.apply(input)
}

pub fn to_upper_case(input: &str) -> String {
    CaseType::Uppercase.apply(input)
}

pub fn to_sentence_case(input: &str) -> String {
    CaseType::Sentence.apply(input)
}

pub fn to_title_case(input: &str) -> String {
    CaseType::Title.apply(input)
}

pub fn to_snake_case(input: &str) -> String {
    CaseType::Snake.apply(input)
}

pub fn to_kebab_case(input: &str) -> String {
    CaseType::Kebab.apply(input)
}

pub fn to_camel_case(input: &str) -> String {
    CaseType::Camel.apply(input)
}

pub fn to_pascal_case(input: &str) -> String {
    CaseType::Pascal.apply(input)
}

pub fn to_dot_case(input: &str) -> String {
    CaseType::Dot.apply(input)
}

pub fn to_constant_case(input: &str) -> String {
    CaseType::Constant.apply(input)
}

/// Method-call access to word extraction and case conversion.
pub trait Recase {
    fn words(&self) -> Vec<String>;
    fn to_case(&self, case: CaseType) -> String;
}

impl Recase for str {
    fn words(&self) -> Vec<String> {
        extract_words(self)
    }

    fn to_case(&self, case: CaseType) -> String {
        case.apply(self)
    }
}
