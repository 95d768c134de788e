use std::path::PathBuf;

use clap::Parser;

use crate::matcher::DEFAULT_MIN_SCORE;
use crate::query::Settings;

/// Interactive catalog of printed manuals stored in a CSV file
#[derive(Parser, Debug)]
#[command(name = "manual_catalog")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the catalog CSV file (created if missing)
    #[arg(short, long, env = "MANUAL_CATALOG", default_value_os_t = default_catalog_path())]
    pub catalog: PathBuf,

    /// Relevance threshold between 0 and 1 for search and removal candidates
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE, value_parser = parse_score)]
    pub min_score: f64,

    /// Maximum number of search results to show (default: all)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            min_score: self.min_score,
            limit: self.limit,
        }
    }
}

/// Returns the default catalog path: ~/.local/share/manual_catalog/manuals.csv
pub fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("manual_catalog")
        .join("manuals.csv")
}

fn parse_score(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside 0..=1"))
    }
}
