use std::io::{self, BufRead, Write};

use crate::domain::{Element, ElementKind, Notifier, QueryInput};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

// The topic field: whatever the user typed, captured once at startup.
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    // Arguments joined with single spaces; one stdin line when there are none.
    pub fn from_args_or_stdin(args: impl IntoIterator<Item = String>) -> io::Result<Self> {
        let args: Vec<String> = args.into_iter().collect();
        if !args.is_empty() {
            return Ok(Self::new(args.join(" ")));
        }

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(Self::new(strip_line_ending(&line)))
    }
}

impl QueryInput for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }
}

// Only the line terminator goes; other whitespace is part of the topic.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

// Alerts go to stderr so they never mix with rendered results.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{message}");
    }
}

// Chips on one line as `[#tag]`, paragraphs on lines of their own.
pub fn render_text(elements: &[Element], color: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut chips: Vec<String> = Vec::new();

    for element in elements {
        match element.kind {
            ElementKind::Chip => chips.push(format!("[{}]", element.text)),
            ElementKind::Paragraph => {
                if !chips.is_empty() {
                    lines.push(chips.join(" "));
                    chips.clear();
                }
                if color && element.is_error() {
                    lines.push(format!("{ANSI_RED}{}{ANSI_RESET}", element.text));
                } else {
                    lines.push(element.text.clone());
                }
            }
        }
    }
    if !chips.is_empty() {
        lines.push(chips.join(" "));
    }

    lines.join("\n")
}
