#![allow(clippy::module_inception)]

use unicode_width::UnicodeWidthStr;

use crate::lexer::tokens::{Token, TokenRecord};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A point in the source: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Text of the 1-based `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}

fn escape_lexeme(lexeme: &str) -> String {
    let mut escaped = String::with_capacity(lexeme.len());
    for ch in lexeme.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders tokens as rows of `ID | TYPE | LEXEME | LINE | COLUMN`.
pub fn render_table(tokens: &[Token]) -> String {
    let rows: Vec<[String; 5]> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            [
                (index + 1).to_string(),
                token.kind.to_string(),
                escape_lexeme(&token.lexeme),
                token.line().to_string(),
                token.column().to_string(),
            ]
        })
        .collect();

    let header = ["ID", "TYPE", "LEXEME", "LINE", "COLUMN"];
    let mut widths = header.map(|title| title.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut result = String::new();
    let mut push_row = |cells: [&str; 5]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width - cell.width())))
            .collect::<Vec<String>>()
            .join(" | ");
        result.push_str(line.trim_end());
        result.push('\n');
    };

    push_row(header);
    let rule = widths.map(|width| "-".repeat(width));
    push_row([&rule[0], &rule[1], &rule[2], &rule[3], &rule[4]]);
    for row in &rows {
        push_row([&row[0], &row[1], &row[2], &row[3], &row[4]]);
    }

    result
}

/// Renders tokens as a JSON array of `{id, kind, lexeme, line, column}`.
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    let records: Vec<TokenRecord> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| TokenRecord::new(index + 1, token))
        .collect();
    serde_json::to_string_pretty(&records)
}

/// Points at an `UNKNOWN` token in its source line.
///
/// ```text
/// Error: unrecognised input `@`
/// -> main.src
///   |
/// 1 | a @ b
///   | --^
/// ```
pub fn render_unknown(source: &str, file: &str, token: &Token) -> String {
    let line_text = get_line(source, token.line()).unwrap_or("").replace('\t', " ");
    let line_string = token.line().to_string();
    let padding = line_string.len() + 2;
    let arrows = token.column() as usize;

    let mut result = String::new();
    result.push_str(&format!(
        "Error: unrecognised input `{}`\n",
        escape_lexeme(&token.lexeme)
    ));
    result.push_str(&format!("-> {}\n", file));
    result.push_str(&format!("{:>padding$}\n", "|"));
    result.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    result
}
