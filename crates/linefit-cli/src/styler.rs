//! Terminal styling for wrapped output
//!
//! Applies ANSI attributes to styled tokens using crossterm.

use crossterm::style::Stylize;
use linefit::{Line, WordToken, WordType};

/// Render one token, bold/italic tokens get the matching attribute
fn style_token(token: &WordToken) -> String {
    let content = token.content.as_str();
    match token.word_type {
        WordType::Normal => content.to_string(),
        WordType::Bold => format!("{}", content.bold()),
        WordType::Italic => format!("{}", content.italic()),
    }
}

/// Render packed lines as terminal text, one line per row
pub fn render_lines(lines: &[Line], colorize: bool) -> String {
    let rows: Vec<String> = lines
        .iter()
        .map(|line| {
            if colorize {
                line.iter().map(style_token).collect()
            } else {
                linefit::line_text(line)
            }
        })
        .collect();
    rows.join("\n")
}
