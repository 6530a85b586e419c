//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use wingman_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Outcome, Session};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (model, configuration).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and an in-memory session.
    pub fn with_editor(editor: E) -> Self {
        let session = Session::default();
        Self {
            editor,
            show_banner: session.config().show_banner,
            prompt: session.config().prompt.clone(),
            session,
        }
    }

    /// Sets the session for this REPL. Banner and prompt follow the
    /// session's configuration.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.show_banner = session.config().show_banner;
        self.prompt.clone_from(&session.config().prompt);
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consumes the REPL, returning its session.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs the REPL loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(trimmed);

        match self.eval(trimmed) {
            Ok(outcome) => {
                Self::print_outcome(&outcome);
                Ok(!outcome.exit)
            }
            Err(e) => {
                Self::print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one command line.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or execution fails.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        self.session.eval(input)
    }

    /// Runs every command in a file, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Stops at the
    /// first failing line or at `exit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or the first command
    /// error with the file and line number attached.
    pub fn eval_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let outcome = self.eval(line).map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_source(line)
                        .with_frame(format!("{}:{}", path.display(), number + 1)),
                )
            })?;
            Self::print_outcome(&outcome);
            if outcome.exit {
                break;
            }
        }
        Ok(())
    }

    fn print_outcome(outcome: &Outcome) {
        if !outcome.message.is_empty() {
            println!("{}", outcome.message);
        }
    }

    /// Prints an error to stderr.
    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;34m");
        println!(" __        ___                                ");
        println!(" \\ \\      / (_)_ __   __ _ _ __ ___   __ _ _ __  ");
        println!("  \\ \\ /\\ / /| | '_ \\ / _` | '_ ` _ \\ / _` | '_ \\ ");
        println!("   \\ V  V / | | | | | (_| | | | | | | (_| | | | |");
        println!("    \\_/\\_/  |_|_| |_|\\__, |_| |_| |_|\\__,_|_| |_|");
        println!("                     |___/                       ");
        println!("\x1b[0m");
        println!("Wingman flight operations v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands. Use Ctrl+D or 'exit' to leave.\n");

        let _ = io::stdout().flush();
    }
}
