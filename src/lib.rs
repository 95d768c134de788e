//! Manual Catalog - fuzzy search and housekeeping for a CSV list of printed manuals
//!
//! The catalog is a `title,box,cover` CSV file loaded into a [`CatalogStore`].
//! Queries run through [`QueryEngine`], removals through the [`RemovalFlow`]
//! state machine, and [`Shell`] ties both to a line-oriented prompt.

pub mod command;
pub mod config;
pub mod error;
pub mod formatters;
pub mod io;
pub mod matcher;
pub mod models;
pub mod query;
pub mod removal;
pub mod shell;
pub mod store;

// Re-export commonly used items
pub use command::{Command, CommandError};
pub use config::Args;
pub use error::{CatalogError, Result};
pub use io::{read_catalog, write_catalog, write_catalog_with_skipped, RowWarning};
pub use models::{parse_cover, BoxLabel, ManualRecord};
pub use query::{Group, QueryEngine, ScoredRecord, Settings};
pub use removal::{Candidate, RemovalFlow, RemovalOutcome, RemovalState, SelectionError};
pub use shell::Shell;
pub use store::CatalogStore;
