pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::{
    convert_case, extract_words, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_lower_case, to_pascal_case, to_sentence_case, to_snake_case, to_title_case,
    to_upper_case, CaseType, Recase,
};
pub use config::Config;
pub use error::CaseError;

use serde::Serialize;

/// One input rendered in one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub case: CaseType,
    pub output: String,
}

/// The words extracted from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordList {
    pub input: String,
    pub words: Vec<String>,
}

/// One input rendered in every supported case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllForms {
    pub input: String,
    pub forms: Vec<Rendering>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub case: CaseType,
    pub output: String,
}

impl Conversion {
    pub fn new(input: &str, case: CaseType) -> Self {
        Self {
            input: input.to_string(),
            case,
            output: case.apply(input),
        }
    }

    /// Input left as-is, e.g. because it matched an ignore pattern.
    pub fn passthrough(input: &str, case: CaseType) -> Self {
        Self {
            input: input.to_string(),
            case,
            output: input.to_string(),
        }
    }
}

impl WordList {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            words: extract_words(input),
        }
    }
}

impl AllForms {
    pub fn new(input: &str) -> Self {
        // Extract once and render each case from the same word sequence.
        let words = extract_words(input);
        let forms = CaseType::ALL
            .into_iter()
            .map(|case| Rendering {
                case,
                output: if words.is_empty() {
                    String::new()
                } else {
                    case.join(&words)
                },
            })
            .collect();
        Self {
            input: input.to_string(),
            forms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_record() {
        let conversion = Conversion::new("helloWorld", CaseType::Kebab);
        assert_eq!(conversion.output, "hello-world");
        assert_eq!(
            Conversion::passthrough("keep_ME", CaseType::Camel).output,
            "keep_ME"
        );
    }

    #[test]
    fn test_all_forms_covers_every_case() {
        let all = AllForms::new("userId");
        assert_eq!(all.forms.len(), CaseType::ALL.len());
        for rendering in &all.forms {
            assert_eq!(rendering.output, rendering.case.apply("userId"));
        }
        assert!(AllForms::new("   ").forms.iter().all(|r| r.output.is_empty()));
    }

    #[test]
    fn test_records_serialize_with_case_names() {
        let json = serde_json::to_value(Conversion::new("a b", CaseType::Dot)).unwrap();
        assert_eq!(json["case"], "dot");
        assert_eq!(json["output"], "a.b");
    }
}
