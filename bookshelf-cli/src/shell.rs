//! Interactive catalog shell
//!
//! Reads line-oriented commands (`add`, `remove`, `show`, `find_author`,
//! `exit`) and drives a [`CatalogManager`]. Generic over its input/output
//! handles so tests can run whole sessions against in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use bookshelf_core::{Catalog, CatalogManager, Record};

/// Input errors at the shell boundary. These are rendered to the user and
/// the loop continues; nothing propagates out of the session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid command. Please try again.")]
    UnknownCommand,

    #[error("Year must be an integer.")]
    YearNotInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellCommand {
    Add,
    Remove,
    Show,
    FindAuthor,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ShellCommand::Add),
            "remove" => Ok(ShellCommand::Remove),
            "show" => Ok(ShellCommand::Show),
            "find_author" => Ok(ShellCommand::FindAuthor),
            "exit" => Ok(ShellCommand::Exit),
            _ => Err(ShellError::UnknownCommand),
        }
    }
}

/// One interactive session over a pair of I/O handles.
pub struct Shell<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, json: bool) -> Self {
        Shell {
            input,
            output,
            json,
        }
    }

    /// Run the command loop until `exit` or end of input.
    pub fn run<C: Catalog>(&mut self, manager: &mut CatalogManager<C>) -> Result<()> {
        loop {
            let Some(line) =
                self.prompt("Enter command (add, remove, show, find_author, exit): ")?
            else {
                break; // EOF behaves like exit
            };

            let command = match line.to_ascii_lowercase().parse::<ShellCommand>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match command {
                ShellCommand::Add => self.handle_add(manager)?,
                ShellCommand::Remove => self.handle_remove(manager)?,
                ShellCommand::Show => {
                    let records = manager.list_all();
                    self.print_records(&records, "(empty)")?;
                }
                ShellCommand::FindAuthor => self.handle_find_author(manager)?,
                ShellCommand::Exit => break,
            }
        }
        Ok(())
    }

    fn handle_add<C: Catalog>(&mut self, manager: &mut CatalogManager<C>) -> Result<()> {
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter book author: ")? else {
            return Ok(());
        };
        let Some(year_text) = self.prompt("Enter book year: ")? else {
            return Ok(());
        };

        match parse_year(&year_text) {
            Ok(year) => manager.add(title, author, year),
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn handle_remove<C: Catalog>(&mut self, manager: &mut CatalogManager<C>) -> Result<()> {
        let Some(title) = self.prompt("Enter book title to remove: ")? else {
            return Ok(());
        };
        if !manager.remove(&title) {
            writeln!(self.output, "Book not found.")?;
        }
        Ok(())
    }

    fn handle_find_author<C: Catalog>(&mut self, manager: &mut CatalogManager<C>) -> Result<()> {
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(());
        };
        let records = manager.search_by_author(&author);
        self.print_records(&records, "(no results)")
    }

    /// Write a prompt, read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_records(&mut self, records: &[Record], empty_message: &str) -> Result<()> {
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(records)?)?;
            return Ok(());
        }
        if records.is_empty() {
            writeln!(self.output, "{empty_message}")?;
        }
        for record in records {
            writeln!(self.output, "{record}")?;
        }
        Ok(())
    }
}

fn parse_year(text: &str) -> Result<i32, ShellError> {
    text.parse::<i32>().map_err(|_| ShellError::YearNotInteger)
}
