use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::matcher::{self, DEFAULT_MIN_SCORE};
use crate::models::{BoxLabel, ManualRecord};

/// Tunables shared by search and removal-candidate lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Relevance threshold; scores below it are dropped
    pub min_score: f64,
    /// Cap on the number of search results (removal candidates are never capped)
    pub limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord<'a> {
    pub record: &'a ManualRecord,
    pub score: f64,
}

/// Display groups used by `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Box(BoxLabel),
    Cover,
    Unknown,
}

impl Group {
    pub fn label(&self) -> &'static str {
        match self {
            Group::Box(label) => label.as_str(),
            Group::Cover => "COVER",
            Group::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only queries over a borrowed slice of records.
///
/// "Nothing found" is always an empty `Vec`, never an error.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    records: &'a [ManualRecord],
    settings: Settings,
}

impl<'a> QueryEngine<'a> {
    pub fn new(records: &'a [ManualRecord], settings: Settings) -> Self {
        Self { records, settings }
    }

    /// Fuzzy search, best score first, honoring the configured limit
    pub fn search(&self, query: &str) -> Vec<ScoredRecord<'a>> {
        let mut results = self.rank(query);
        if let Some(limit) = self.settings.limit {
            results.truncate(limit);
        }
        results
    }

    /// Every record at or above the threshold, best score first. Equal scores
    /// keep store order.
    pub fn rank(&self, query: &str) -> Vec<ScoredRecord<'a>> {
        let mut scored: Vec<ScoredRecord<'a>> = self
            .records
            .iter()
            .map(|record| ScoredRecord {
                record,
                score: matcher::score(query, record.title()),
            })
            .filter(|s| s.score >= self.settings.min_score)
            .collect();

        // sort_by is stable, so ties stay in store order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!("'{query}' matched {} of {} manuals", scored.len(), self.records.len());
        scored
    }

    /// Case-insensitive, whitespace-collapsed title match. Returns every
    /// record whose title matches, in store order.
    pub fn exact(&self, title: &str) -> Vec<&'a ManualRecord> {
        let wanted = collapse(title);
        if wanted.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| collapse(record.title()) == wanted)
            .collect()
    }

    /// All five groups in display order: BOX 1-3, COVER, UNKNOWN.
    ///
    /// Groups overlap: a boxed manual with a cover is listed under its box
    /// and under COVER. UNKNOWN holds manuals with neither.
    pub fn list(&self) -> Vec<(Group, Vec<&'a ManualRecord>)> {
        let mut groups: Vec<(Group, Vec<&'a ManualRecord>)> = BoxLabel::all()
            .iter()
            .map(|&label| (Group::Box(label), self.in_box(label)))
            .collect();

        groups.push((Group::Cover, self.list_cover()));

        let mut unknown: Vec<&'a ManualRecord> = self
            .records
            .iter()
            .filter(|r| r.location().is_none() && !r.cover())
            .collect();
        sort_by_title(&mut unknown);
        groups.push((Group::Unknown, unknown));

        groups
    }

    /// Manuals in the given box ("BOX 2", "box2" or "2"). An unknown label
    /// yields an empty list.
    pub fn list_box(&self, label: &str) -> Vec<&'a ManualRecord> {
        match BoxLabel::parse(label) {
            Some(label) => self.in_box(label),
            None => {
                debug!("'{label}' is not a known box");
                Vec::new()
            }
        }
    }

    /// Manuals that have a protective cover, wherever they are stored
    pub fn list_cover(&self) -> Vec<&'a ManualRecord> {
        let mut covered: Vec<&'a ManualRecord> = self.records.iter().filter(|r| r.cover()).collect();
        sort_by_title(&mut covered);
        covered
    }

    fn in_box(&self, label: BoxLabel) -> Vec<&'a ManualRecord> {
        let mut members: Vec<&'a ManualRecord> = self
            .records
            .iter()
            .filter(|r| r.location() == Some(label))
            .collect();
        sort_by_title(&mut members);
        members
    }
}

fn collapse(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn sort_by_title(records: &mut [&ManualRecord]) {
    records.sort_by_cached_key(|r| r.title().to_lowercase());
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
