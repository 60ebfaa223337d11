use crate::{
    config::PromptKind,
    constants::{exit_codes, verbosity},
};
use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use log::LevelFilter;
use serde_json::Value;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for inquiry.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["question", "message"])))]
pub struct Args {
    /// Question file (.json, .yaml or .yml).
    #[arg(short, long, value_name = "FILE")]
    pub question: Option<PathBuf>,

    /// Question text, when no question file is given.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Prompt variant for an inline question.
    #[arg(short = 't', long = "type", value_enum, default_value_t = PromptKind::Input)]
    pub kind: PromptKind,

    /// Name the answer is reported under.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Default answer. Parsed as JSON when possible, otherwise taken as text.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Choice for a list prompt (repeatable).
    #[arg(short, long = "choice")]
    pub choices: Vec<String>,

    /// Answer lines to use instead of reading the terminal (repeatable).
    #[arg(short, long = "input", value_name = "LINE")]
    pub inputs: Vec<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The `--default` value as JSON.
    pub fn default_value(&self) -> Option<Value> {
        self.default.as_deref().map(|raw| {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        })
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
