use crate::models::ManualRecord;
use crate::query::{Group, ScoredRecord};
use crate::removal::Candidate;

const MAX_TITLE_WIDTH: usize = 64;
const BOX_WIDTH: usize = 8;
const COVER_WIDTH: usize = 5;
const SCORE_WIDTH: usize = 6;

struct Row<'a> {
    index: Option<usize>,
    record: &'a ManualRecord,
    score: Option<f64>,
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width <= 3 {
        return s.chars().take(width).collect();
    }
    let mut out: String = s.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

fn format_rows(rows: &[Row], numbered: bool, show_score: bool) -> String {
    let title_width = rows
        .iter()
        .map(|row| row.record.title().chars().count())
        .max()
        .unwrap_or(0)
        .clamp("Title".len(), MAX_TITLE_WIDTH);
    let index_width = rows.len().to_string().len().max(1);

    let mut header = String::new();
    if numbered {
        header.push_str(&format!("{:>index_width$}  ", "#"));
    }
    header.push_str(&format!(
        "{:<title_width$}  {:<BOX_WIDTH$}  {:<COVER_WIDTH$}",
        "Title", "Box", "Cover"
    ));
    if show_score {
        header.push_str(&format!("  {:>SCORE_WIDTH$}", "Score"));
    }
    let header = header.trim_end().to_string();

    let mut output = String::new();
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(header.chars().count()));
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        if let Some(index) = row.index {
            line.push_str(&format!("{index:>index_width$}  "));
        }
        line.push_str(&format!(
            "{:<title_width$}  {:<BOX_WIDTH$}  {:<COVER_WIDTH$}",
            truncate(row.record.title(), title_width),
            row.record.display_location(),
            if row.record.cover() { "Yes" } else { "No" },
        ));
        if show_score {
            match row.score {
                Some(score) => line.push_str(&format!("  {score:>SCORE_WIDTH$.2}")),
                None => line.push_str(&format!("  {:>SCORE_WIDTH$}", "")),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Aligned Title/Box/Cover table
pub fn format_records(records: &[&ManualRecord]) -> String {
    let rows: Vec<Row> = records
        .iter()
        .map(|&record| Row {
            index: None,
            record,
            score: None,
        })
        .collect();
    format_rows(&rows, false, false)
}

/// Table for exact matches, shown with a score of 1.00
pub fn format_exact(records: &[&ManualRecord]) -> String {
    let rows: Vec<Row> = records
        .iter()
        .map(|&record| Row {
            index: None,
            record,
            score: Some(1.0),
        })
        .collect();
    format_rows(&rows, false, true)
}

/// Search results with their relevance score
pub fn format_scored(results: &[ScoredRecord]) -> String {
    let rows: Vec<Row> = results
        .iter()
        .map(|scored| Row {
            index: None,
            record: scored.record,
            score: Some(scored.score),
        })
        .collect();
    format_rows(&rows, false, true)
}

/// Numbered removal candidates (1-based, matching the selection prompt)
pub fn format_candidates(candidates: &[Candidate]) -> String {
    let rows: Vec<Row> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| Row {
            index: Some(i + 1),
            record: &candidate.record,
            score: Some(candidate.score),
        })
        .collect();
    format_rows(&rows, true, true)
}

/// Every non-empty group under its label, separated by blank lines
pub fn format_groups(groups: &[(Group, Vec<&ManualRecord>)]) -> String {
    let sections: Vec<String> = groups
        .iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(group, members)| format!("{group} ({})\n{}", members.len(), format_records(members)))
        .collect();

    if sections.is_empty() {
        "The catalog is empty.\n".to_string()
    } else {
        sections.join("\n")
    }
}

#[cfg(test)]
#[path = "formatters_tests.rs"]
mod tests;
