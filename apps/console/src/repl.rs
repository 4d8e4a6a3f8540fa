//! # Read-Eval-Print Loop
//!
//! Reads one command per line, runs it, prints the result.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read line ──► split_line ──► clap ──► confirm? ──► execute ──► render │
//! │      │              │           │          │            │               │
//! │     EOF        bad quoting   usage /     "n" →       ApiError →        │
//! │      │         or UTF-8      help text  Cancelled   error line         │
//! │      ▼           message                                                │
//! │    stop                                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive a whole session from a
//! byte slice and inspect what would have been printed.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::commands::{self, CommandLine, Outcome};
use crate::error::{ApiError, StartupError};
use crate::render;
use crate::state::{ConsoleConfig, DbState, OutputFormat, SessionState};

pub const PROMPT: &str = "clientele> ";

/// An interactive console session over one store.
pub struct Repl<R, W> {
    db: DbState,
    session: SessionState,
    config: ConsoleConfig,
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(db: DbState, config: ConsoleConfig, input: R, output: W) -> Self {
        Repl {
            db,
            session: SessionState::new(),
            config,
            input,
            output,
            prompt: true,
        }
    }

    /// Whether to print the prompt before each line (off for piped input).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Loads the initial view and processes lines until `quit` or EOF.
    ///
    /// Only console I/O failures end the loop early; command errors are
    /// printed and the loop continues.
    pub async fn run(&mut self) -> Result<(), StartupError> {
        match commands::load(&self.db, &mut self.session).await {
            Ok(()) => {
                let text = render::customers(&self.session, self.config.output);
                writeln!(self.output, "{}", text)?;
            }
            Err(err) => self.print_error(&err)?,
        }

        while let Some(bytes) = self.read_line(PROMPT)? {
            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(_) => {
                    self.print_error(&ApiError::validation("Input is not valid UTF-8"))?;
                    continue;
                }
            };
            if !self.handle_line(&line).await? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Handles one input line. Returns false when the session should end.
    pub async fn handle_line(&mut self, line: &str) -> Result<bool, StartupError> {
        let words = match split_line(line) {
            Ok(words) if words.is_empty() => return Ok(true),
            Ok(words) => words,
            Err(err) => {
                self.print_error(&err)?;
                return Ok(true);
            }
        };

        let command = match CommandLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                let text = err.render().to_string();
                match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        self.print(&render::message(text.trim_end(), self.config.output))?
                    }
                    _ => {
                        let text = text.trim_end().trim_start_matches("error: ");
                        self.print_error(&ApiError::validation(text))?
                    }
                }
                return Ok(true);
            }
        };
        debug!(?command, "Command parsed");

        if self.config.confirm_deletes {
            if let Some(question) = command.confirmation(&self.session) {
                if !self.confirm(&question)? {
                    self.print(&render::message("Cancelled", self.config.output))?;
                    return Ok(true);
                }
            }
        }

        match commands::execute(&self.db, &mut self.session, command).await {
            Ok(Outcome::Quit) => Ok(false),
            Ok(outcome) => {
                if let Some(text) = render::outcome(&outcome, &self.session, self.config.output) {
                    self.print(&text)?;
                }
                Ok(true)
            }
            Err(err) => {
                self.print_error(&err)?;
                Ok(true)
            }
        }
    }

    /// Asks a yes/no question; anything but `y`/`yes` (or EOF, or bytes
    /// that aren't UTF-8) means no.
    fn confirm(&mut self, question: &str) -> Result<bool, StartupError> {
        let text = render::confirm(question, self.config.output);
        match self.config.output {
            OutputFormat::Json => writeln!(self.output, "{}", text)?,
            OutputFormat::Table => write!(self.output, "{}", text)?,
        }
        self.output.flush()?;

        let answer = self.read_raw()?;
        if !self.prompt && self.config.output == OutputFormat::Table {
            writeln!(self.output)?;
        }

        let answer = answer
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|a| a.trim().to_ascii_lowercase());
        Ok(matches!(answer.as_deref(), Some("y") | Some("yes")))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>, StartupError> {
        if self.prompt {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        self.read_raw()
    }

    /// One raw line including its newline; `None` at EOF.
    fn read_raw(&mut self) -> Result<Option<Vec<u8>>, StartupError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> Result<(), StartupError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn print_error(&mut self, err: &ApiError) -> Result<(), StartupError> {
        let text = render::error(err, self.config.output);
        self.print(&text)
    }
}

/// Splits a command line into words.
///
/// Whitespace separates words; single or double quotes group a word and
/// may be empty (`--notes ""`). A backslash escapes the next character
/// outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, ApiError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_word = true;
                }
                None => return Err(ApiError::validation("Line ends with a backslash")),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ApiError::validation("Unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_line("  add  C1 Alice\tVIP \n").unwrap(),
            vec!["add", "C1", "Alice", "VIP"]
        );
        assert!(split_line("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_split_quotes() {
        assert_eq!(
            split_line(r#"add C1 "Alice Smith" 'VIP Customers' --notes """#).unwrap(),
            vec!["add", "C1", "Alice Smith", "VIP Customers", "--notes", ""]
        );
        assert_eq!(
            split_line(r#"save --notes "say \"hi\"""#).unwrap(),
            vec!["save", "--notes", "say \"hi\""]
        );
        assert_eq!(split_line(r"a\ b 'c\d'").unwrap(), vec!["a b", r"c\d"]);
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(
            split_line("add \"C1").unwrap_err().message,
            "Unterminated quote"
        );
        assert!(split_line("add C1\\").is_err());
    }
}
