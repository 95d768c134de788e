//! Line-oriented command shell.
//!
//! The shell owns the store and is generic over its input and output so the
//! whole session can be driven from a string in tests.

use std::io::{self, BufRead, Write};

use log::{debug, error};

use crate::command::{Command, HELP};
use crate::formatters::{
    format_candidates, format_exact, format_groups, format_records, format_scored,
};
use crate::models::BoxLabel;
use crate::query::{QueryEngine, Settings};
use crate::removal::{RemovalFlow, RemovalOutcome, RemovalState};
use crate::store::CatalogStore;

pub struct Shell<R, W> {
    store: CatalogStore,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: CatalogStore, settings: Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn into_store(self) -> CatalogStore {
        self.store
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Manual Query Tool ({} manuals, case-insensitive fuzzy search, BOX + COVER aware)",
            self.store.len()
        )?;
        writeln!(self.output, "{HELP}")?;

        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nGoodbye!")?;
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let keep_going = match Command::parse(line) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    writeln!(self.output, "Error: {e}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command) -> io::Result<bool> {
        debug!("Executing {command:?}");
        let engine = QueryEngine::new(self.store.records(), self.settings);

        match command {
            Command::Search(query) => {
                let exact = engine.exact(&query);
                if !exact.is_empty() {
                    writeln!(self.output, "Exact match:")?;
                    write!(self.output, "{}", format_exact(&exact))?;
                }

                let results = engine.search(&query);
                if results.is_empty() {
                    writeln!(self.output, "No close matches found.")?;
                } else {
                    writeln!(self.output, "Matches:")?;
                    write!(self.output, "{}", format_scored(&results))?;
                }
            }
            Command::Exact(title) => {
                let found = engine.exact(&title);
                if found.is_empty() {
                    writeln!(self.output, "No exact (case-insensitive) match.")?;
                } else {
                    write!(self.output, "{}", format_exact(&found))?;
                }
            }
            Command::List => {
                write!(self.output, "{}", format_groups(&engine.list()))?;
            }
            Command::ListBox(label) => {
                let members = engine.list_box(&label);
                let shown = BoxLabel::parse(&label)
                    .map(|b| b.as_str().to_string())
                    .unwrap_or_else(|| format!("box {label}"));
                if members.is_empty() {
                    writeln!(self.output, "No items in {shown}.")?;
                } else {
                    write!(self.output, "{}", format_records(&members))?;
                }
            }
            Command::ListCover => {
                let covered = engine.list_cover();
                if covered.is_empty() {
                    writeln!(self.output, "No items with cover flag.")?;
                } else {
                    write!(self.output, "{}", format_records(&covered))?;
                }
            }
            Command::Remove(text) => self.remove(&text)?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn remove(&mut self, text: &str) -> io::Result<()> {
        let engine = QueryEngine::new(self.store.records(), self.settings);
        let mut flow = RemovalFlow::start(&engine, text);

        if let RemovalState::Selecting { candidates } = flow.state() {
            writeln!(self.output, "Candidates:")?;
            write!(self.output, "{}", format_candidates(candidates))?;
        }

        while !flow.is_finished() {
            match flow.state() {
                RemovalState::Selecting { .. } => {
                    write!(self.output, "Select a number to remove (blank to cancel): ")?
                }
                RemovalState::Confirming { candidate } => write!(
                    self.output,
                    "Remove '{}' ({})? [y/N]: ",
                    candidate.record.title(),
                    candidate.record.display_location()
                )?,
                RemovalState::Finished(_) => break,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                flow.cancel();
                break;
            };
            if let Err(e) = flow.handle(&line) {
                writeln!(self.output, "{e}")?;
            }
        }

        match flow.outcome() {
            Some(RemovalOutcome::NoMatch) => {
                writeln!(self.output, "No match for '{text}'.")?;
            }
            Some(RemovalOutcome::Confirmed(candidate)) => {
                let title = candidate.record.title().to_string();
                match flow.commit(&mut self.store) {
                    Ok(true) => writeln!(
                        self.output,
                        "Removed '{title}'. {} manuals remain.",
                        self.store.len()
                    )?,
                    Ok(false) => writeln!(self.output, "'{title}' is no longer in the catalog.")?,
                    Err(e) => {
                        error!("Removal of '{title}' was not saved: {e}");
                        writeln!(
                            self.output,
                            "Error: could not save the catalog ({e}). '{title}' was kept; try again."
                        )?;
                    }
                }
            }
            Some(RemovalOutcome::Cancelled) | None => {
                writeln!(self.output, "Cancelled. Nothing was removed.")?;
            }
        }

        Ok(())
    }
}
