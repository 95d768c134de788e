use log::debug;
use thiserror::Error;

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Exact(String),
    List,
    ListBox(String),
    ListCover,
    Remove(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
Commands:
  search <text>       fuzzy/partial search
  exact <title>       exact title match (case-insensitive)
  list                list all grouped by BOX 1/2/3, COVER, UNKNOWN
  list box 1|2|3      list a specific box
  list cover          list all items that have a cover
  remove <text>       find a manual and delete it after confirmation
  help                show this help
  quit                exit";

fn split_command(line: &str) -> (String, String) {
    let parts: Vec<&str> = line.trim().splitn(2, char::is_whitespace).collect();
    let keyword = parts[0].to_lowercase();
    let argument = parts.get(1).map(|s| s.trim()).unwrap_or("").to_string();
    (keyword, argument)
}

impl Command {
    /// Parse a non-blank input line. The keyword is case-insensitive; the
    /// rest of the line, trimmed, is the argument.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (keyword, argument) = split_command(line);
        debug!("Parsed keyword '{keyword}' with argument '{argument}'");

        let require = |usage: &'static str| {
            if argument.is_empty() {
                Err(CommandError::MissingArgument(usage))
            } else {
                Ok(argument.clone())
            }
        };

        match keyword.as_str() {
            "search" => require("search <text>").map(Command::Search),
            "exact" => require("exact <title>").map(Command::Exact),
            "remove" => require("remove <text>").map(Command::Remove),
            "list" => Self::parse_list(&argument),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(keyword)),
        }
    }

    fn parse_list(argument: &str) -> Result<Self, CommandError> {
        let (sub, rest) = split_command(argument);
        match sub.as_str() {
            "" => Ok(Command::List),
            "cover" if rest.is_empty() => Ok(Command::ListCover),
            "box" if rest.is_empty() => Err(CommandError::MissingArgument("list box 1|2|3")),
            "box" => Ok(Command::ListBox(rest)),
            _ => Err(CommandError::Unknown(format!("list {argument}"))),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
