use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use caseconv::config::Config;
use caseconv::{parse, Style};

#[derive(Parser)]
#[command(name = "caseconv", about = "Convert identifiers between naming conventions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert each TEXT (or each stdin line) to a naming convention
    Convert {
        /// Target style, e.g. snake, kebab, camel (falls back to the config's default_style)
        #[arg(short, long)]
        style: Option<Style>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the words, detected case style and separator of each TEXT
    Parse {
        /// Keep the original casing of each word
        #[arg(long)]
        preserve_case: bool,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// List the supported styles and their aliases
    Styles,
}

#[derive(Args)]
struct InputArgs {
    /// Acronym to keep upper-case (repeatable)
    #[arg(short, long = "acronym")]
    acronyms: Vec<String>,

    /// JSON config file with acronyms and a default style
    #[arg(short, long)]
    config: Option<String>,

    /// Identifiers to process; read from stdin when omitted
    text: Vec<String>,
}

impl InputArgs {
    fn config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    fn texts(&self) -> Result<Vec<String>> {
        if !self.text.is_empty() {
            return Ok(self.text.clone());
        }
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read stdin")?;
            lines.push(line.trim_end_matches('\r').to_string());
        }
        Ok(lines)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { style, input } => {
            let config = input.config()?;
            let Some(style) = style.or(config.default_style) else {
                anyhow::bail!("No style given: pass --style or set default_style in the config");
            };
            let acronyms = config.acronyms_with(&input.acronyms);
            let acronyms: Vec<&str> = acronyms.iter().map(String::as_str).collect();

            tracing::info!("Converting to {} with {} acronym(s)", style, acronyms.len());

            for text in input.texts()? {
                println!("{}", style.convert(&text, &acronyms)?);
            }
        }

        Commands::Parse {
            preserve_case,
            json,
            input,
        } => {
            let config = input.config()?;
            let acronyms = config.acronyms_with(&input.acronyms);
            let acronyms: Vec<&str> = acronyms.iter().map(String::as_str).collect();

            for text in input.texts()? {
                let parsed = parse(&text, &acronyms, preserve_case)?;
                if json {
                    println!("{}", serde_json::to_string(&parsed)?);
                } else {
                    println!(
                        "{:<30} {:<8} {:<4} {}",
                        text,
                        parsed.case,
                        format!("{:?}", parsed.separator),
                        parsed.words.join(" ")
                    );
                }
            }
        }

        Commands::Styles => {
            println!("{:<16} {:<24} {}", "STYLE", "EXAMPLE", "ALIASES");
            println!("{}", "-".repeat(72));
            for style in Style::ALL {
                let example = style.convert("hello_html_world", &["HTML"])?;
                let aliases: Vec<&str> = style.aliases().collect();
                println!("{:<16} {:<24} {}", style, example, aliases.join(", "));
            }
        }
    }

    Ok(())
}
