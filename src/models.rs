use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CatalogError, Result};

lazy_static! {
    static ref BOX_PATTERN: Regex = Regex::new(r"(?i)^\s*(?:box\s*)?([1-3])\s*$").unwrap();
}

/// Physical storage boxes the manuals live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoxLabel {
    Box1,
    Box2,
    Box3,
}

impl BoxLabel {
    /// Returns the display label (e.g., "BOX 1")
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxLabel::Box1 => "BOX 1",
            BoxLabel::Box2 => "BOX 2",
            BoxLabel::Box3 => "BOX 3",
        }
    }

    /// Parse a box label such as "BOX 2", "box2" or a bare "2"
    pub fn parse(s: &str) -> Option<Self> {
        let caps = BOX_PATTERN.captures(s)?;
        match &caps[1] {
            "1" => Some(BoxLabel::Box1),
            "2" => Some(BoxLabel::Box2),
            "3" => Some(BoxLabel::Box3),
            _ => None,
        }
    }

    /// Returns all boxes in display order
    pub fn all() -> &'static [BoxLabel] {
        &[BoxLabel::Box1, BoxLabel::Box2, BoxLabel::Box3]
    }
}

impl fmt::Display for BoxLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a cover flag from the catalog file.
///
/// Accepted spellings (case-insensitive, surrounding whitespace ignored):
/// * `1`, `yes`, `y`, `true` -> `true`
/// * `0`, `no`, `n`, `false`, empty -> `false`
///
/// Anything else is rejected with [`CatalogError::InvalidCover`].
pub fn parse_cover(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "y" | "true" => Ok(true),
        "0" | "no" | "n" | "false" | "" => Ok(false),
        _ => Err(CatalogError::InvalidCover(value.to_string())),
    }
}

/// Canonical spelling written back to disk
pub fn format_cover(cover: bool) -> &'static str {
    if cover {
        "1"
    } else {
        "0"
    }
}

/// One printed manual in the catalog.
///
/// The box text is kept exactly as it appeared in the file so a load/save
/// cycle does not rewrite it; [`ManualRecord::location`] gives the parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualRecord {
    title: String,
    box_label: String,
    cover: bool,
}

impl ManualRecord {
    /// Build a validated record. The title is trimmed and must not be empty;
    /// a non-empty box must parse as a [`BoxLabel`].
    pub fn new(title: &str, box_label: &str, cover: bool) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        let box_label = box_label.trim();
        if !box_label.is_empty() && BoxLabel::parse(box_label).is_none() {
            return Err(CatalogError::InvalidBox(box_label.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            box_label: box_label.to_string(),
            cover,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Box text as stored in the catalog file (may be empty)
    pub fn box_label(&self) -> &str {
        &self.box_label
    }

    pub fn cover(&self) -> bool {
        self.cover
    }

    /// Parsed box, or `None` when the manual has not been put in a box
    pub fn location(&self) -> Option<BoxLabel> {
        BoxLabel::parse(&self.box_label)
    }

    /// Label shown in the "Box" column: the box, else COVER, else UNKNOWN
    pub fn display_location(&self) -> &'static str {
        match self.location() {
            Some(label) => label.as_str(),
            None if self.cover => "COVER",
            None => "UNKNOWN",
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
