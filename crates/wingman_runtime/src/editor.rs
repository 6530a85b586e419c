//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use wingman_foundation::{Error, ErrorKind, Result};
use wingman_model::{
    CrewRank, FlightCrewType, FlightLocationType, FlightPilotType, PilotRank, Role,
};

use crate::command::{COMMAND_WORDS, ItemKind};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered by completion.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Every word the command language uses, sorted and deduplicated.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    let mut words: Vec<String> = COMMAND_WORDS.iter().map(|w| (*w).to_string()).collect();
    for kind in ItemKind::ALL {
        words.push(kind.keyword().to_string());
        words.push(kind.plural().to_string());
    }
    words.push("as".to_string());
    words.extend(FlightPilotType::ALL.iter().map(|r| r.keyword().to_string()));
    words.extend(FlightCrewType::ALL.iter().map(|r| r.keyword().to_string()));
    words.extend(FlightLocationType::ALL.iter().map(|r| r.keyword().to_string()));
    words.extend(PilotRank::ALL.iter().map(|r| r.keyword().to_string()));
    words.extend(CrewRank::ALL.iter().map(|r| r.keyword().to_string()));
    words.sort();
    words.dedup();
    words
}

/// Helper for rustyline that provides completion, hints, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct WingmanHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: QuoteValidator,
}

impl Highlighter for WingmanHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;34m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from a fixed vocabulary.
struct WordCompleter {
    keywords: Vec<String>,
}

impl WordCompleter {
    fn complete_word(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // No completion inside a quoted name
        if line[..pos].chars().filter(|&c| c == '"').count() % 2 == 1 {
            return Ok((pos, Vec::new()));
        }
        Ok(self.complete_word(line, pos))
    }
}

/// Rejects lines with an unterminated quote before they are submitted.
#[derive(Default)]
struct QuoteValidator;

impl Validator for QuoteValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if has_open_quote(ctx.input()) {
            Ok(ValidationResult::Invalid(Some(
                "  (unterminated quote)".to_string(),
            )))
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

fn has_open_quote(input: &str) -> bool {
    input.chars().filter(|&c| c == '"').count() % 2 == 1
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<WingmanHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = WingmanHelper {
            completer: WordCompleter {
                keywords: default_keywords(),
            },
            hinter: HistoryHinter::new(),
            validator: QuoteValidator,
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::IoError(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
