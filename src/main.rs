use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::debug;
use recase::cli::output::{self, OutputFormat};
use recase::{AllForms, CaseType, Config, Conversion, WordList};
use regex::Regex;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Split text into words and convert it between case conventions", long_about = None)]
struct Cli {
    /// Strings to convert (reads stdin line by line when empty).
    /// Put `--` before an input spelled `list` so it is not taken as the subcommand
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Target case (lowercase, uppercase, sentence, title, snake, kebab, camel, pascal, dot, constant)
    #[arg(short, long)]
    case: Option<String>,

    /// Convert every line of these files
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Print the extracted words instead of converting
    #[arg(short, long, conflicts_with = "all")]
    words: bool,

    /// Print every supported case for each input
    #[arg(short, long)]
    all: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Pass inputs matching this regex through unchanged
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the supported case types
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // An unsupported case name is reported before anything else is read.
    let case = cli
        .case
        .as_deref()
        .map(str::parse::<CaseType>)
        .transpose()?;

    let config = Config::load(case, cli.ignore_pattern.clone())?;
    debug!("resolved config: {:?}", config);
    let colored = config.color && !cli.no_color;

    if let Some(Commands::List) = cli.command {
        output::print(
            &output::render_case_list(colored, cli.format)?,
            CaseType::ALL.len(),
        );
        return Ok(());
    }

    let inputs = collect_inputs(&cli)?;
    debug!("processing {} inputs", inputs.len());

    let rendered = if cli.words {
        let lists: Vec<WordList> = inputs.iter().map(|input| WordList::new(input)).collect();
        output::render_words(&lists, colored, cli.format)?
    } else if cli.all {
        let all: Vec<AllForms> = inputs.iter().map(|input| AllForms::new(input)).collect();
        output::render_all_forms(&all, colored, cli.format)?
    } else {
        let patterns = config.compiled_patterns();
        let conversions: Vec<Conversion> = inputs
            .iter()
            .map(|input| convert(input, config.default_case, &patterns))
            .collect();
        output::render_conversions(&conversions, cli.format)?
    };

    output::print(&rendered, inputs.len());
    Ok(())
}

fn convert(input: &str, case: CaseType, patterns: &[Regex]) -> Conversion {
    if patterns.iter().any(|p| p.is_match(input)) {
        debug!("leaving {:?} unchanged (matches ignore pattern)", input);
        return Conversion::passthrough(input, case);
    }
    Conversion::new(input, case)
}

fn collect_inputs(cli: &Cli) -> Result<Vec<String>> {
    let mut inputs = cli.inputs.clone();

    for path in &cli.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        inputs.extend(content.lines().map(str::to_string));
    }

    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            inputs.push(line.context("Failed to read stdin")?);
        }
    }

    Ok(inputs)
}
