use std::{
    fs::read_to_string,
    io::{stdin, Read},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use lexan::{
    errors::errors::ErrorTip,
    lexer::{
        lexer::{tokenize_all, tokenize_with},
        rules::{RuleTable, DEFAULT_RULES},
        tokens::TokenKind,
    },
    render_json, render_table, render_unknown,
};
use log::{info, warn};

/// Lexical analyzer: lists the classified tokens of a source text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to analyze.  If omitted, source is read from stdin.
    input: Option<PathBuf>,

    /// TOML rule table to use instead of the built-in language.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Also list whitespace and comments.
    #[arg(long)]
    all: bool,

    /// Point at every unrecognised lexeme on stderr.
    #[arg(long)]
    diagnostics: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn load_rules(path: &Path) -> Result<RuleTable> {
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read rule table {}", path.display()))?;

    RuleTable::from_toml(&text).map_err(|error| {
        let rule = error
            .get_rule()
            .map(|index| format!(" (rule {})", index + 1))
            .unwrap_or_default();

        match error.get_tip() {
            ErrorTip::None => anyhow!("{}{}: {}", path.display(), rule, error),
            tip => anyhow!("{}{}: {} ({})", path.display(), rule, error, tip),
        }
    })
}

fn read_source(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            stdin()
                .read_to_string(&mut source)
                .context("Failed to read standard input")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let custom_rules = cli.rules.as_deref().map(load_rules).transpose()?;
    let rules = custom_rules.as_ref().unwrap_or(&DEFAULT_RULES);

    let (source, file_name) = read_source(cli.input.as_deref())?;

    let start = Instant::now();
    let tokens = if cli.all {
        tokenize_all(&source, rules)
    } else {
        tokenize_with(&source, rules)
    };
    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    let unknown = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Unknown)
        .count();
    if unknown > 0 {
        warn!("{} unrecognised lexemes in {}", unknown, file_name);
    }

    match cli.format {
        Format::Table => print!("{}", render_table(&tokens)),
        Format::Json => println!("{}", render_json(&tokens)?),
    }

    if cli.diagnostics {
        for token in tokens.iter().filter(|token| token.kind == TokenKind::Unknown) {
            eprint!("{}", render_unknown(&source, &file_name, token));
        }
    }

    Ok(())
}
