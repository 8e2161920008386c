use crate::case::CaseType;
use crate::{AllForms, Conversion, WordList};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const LIST_SAMPLE: &str = "XMLHttpRequest version2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(conversions),
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| c.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_words(lists: &[WordList], colored_output: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(lists),
        OutputFormat::Text => Ok(lists
            .iter()
            .map(|list| {
                if colored_output {
                    list.words
                        .iter()
                        .map(|w| w.cyan().to_string())
                        .collect::<Vec<_>>()
                        .join(&" | ".dimmed().to_string())
                } else {
                    list.words.join(" | ")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_all_forms(all: &[AllForms], colored_output: bool, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(all);
    }

    let mut blocks = Vec::new();
    for forms in all {
        let mut lines = Vec::new();
        if colored_output {
            lines.push(forms.input.bold().underline().to_string());
        } else {
            lines.push(forms.input.clone());
        }
        for rendering in &forms.forms {
            lines.push(case_line(rendering.case, &rendering.output, colored_output));
        }
        blocks.push(lines.join("\n"));
    }
    Ok(blocks.join("\n\n"))
}

pub fn render_case_list(colored_output: bool, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let conversions: Vec<Conversion> = CaseType::ALL
            .into_iter()
            .map(|case| Conversion::new(LIST_SAMPLE, case))
            .collect();
        return to_json(&conversions);
    }

    Ok(CaseType::ALL
        .into_iter()
        .map(|case| case_line(case, &case.apply(LIST_SAMPLE), colored_output))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn case_line(case: CaseType, output: &str, colored_output: bool) -> String {
    let name = format!("{:<10}", case.name());
    if colored_output {
        format!("  {} {}", name.blue().bold(), output.green())
    } else {
        format!("  {} {}", name, output)
    }
}

/// Print rendered output for `count` records; nothing at all when there are none.
pub fn print(rendered: &str, count: usize) {
    if count > 0 {
        println!("{}", rendered);
    }
}
