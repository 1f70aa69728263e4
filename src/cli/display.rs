// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal reports for the fuzzdex CLI.
//!
//! Every cell is laid out on plain text first and colored last, so column
//! widths never have to account for escape sequences. Color is dropped under
//! `NO_COLOR` or when stdout isn't a TTY.

use fuzzdex::{ResultType, SearchPage, SearchResult, SearchStats};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

const TITLE_WIDTH: usize = 44;
const BADGE_WIDTH: usize = 10;

/// ANSI SGR codes used by the reports.
mod sgr {
    pub const BOLD_CYAN: &str = "1;36";
    pub const DIM: &str = "2";
    pub const GREEN: &str = "32";
    pub const YELLOW: &str = "33";
    pub const BLUE: &str = "34";
    pub const MAGENTA: &str = "35";
    pub const CYAN: &str = "36";
}

/// Respects NO_COLOR and non-TTY stdout.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(code: &str, text: &str, colored: bool) -> String {
    if colored {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Truncate to `max` characters, ending in "…" when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Left-align plain `text` in `width` characters.
fn cell(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width))
}

fn type_color(kind: ResultType) -> &'static str {
    match kind {
        ResultType::Guide => sgr::GREEN,
        ResultType::Class => sgr::BLUE,
        ResultType::Spec => sgr::CYAN,
        ResultType::Dungeon => sgr::MAGENTA,
        ResultType::Item => sgr::YELLOW,
        _ => sgr::DIM,
    }
}

fn relevance_color(relevance: f64) -> &'static str {
    if relevance >= 50.0 {
        sgr::GREEN
    } else if relevance >= 10.0 {
        sgr::YELLOW
    } else {
        sgr::DIM
    }
}

/// A report is a titled list of plain-text rows with optional colors.
struct Report {
    colored: bool,
    lines: Vec<String>,
}

impl Report {
    fn new(label: &str, colored: bool) -> Self {
        let label = truncate(label, BOX_WIDTH - 4);
        let fill = "─".repeat(BOX_WIDTH - 3 - label.chars().count());
        let top = format!(
            "{}{}{}",
            paint(sgr::DIM, "┌─ ", colored),
            paint(sgr::BOLD_CYAN, &label, colored),
            paint(sgr::DIM, &format!(" {fill}┐"), colored)
        );
        Self {
            colored,
            lines: vec![top],
        }
    }

    /// Add a row from pre-measured segments: `(text, color)` pairs whose
    /// plain text is already laid out.
    fn row(&mut self, segments: &[(&str, Option<&str>)]) {
        let used: usize = segments.iter().map(|(text, _)| text.chars().count()).sum();
        let mut line = paint(sgr::DIM, "│", self.colored);
        for (text, color) in segments {
            match color {
                Some(code) => line.push_str(&paint(code, text, self.colored)),
                None => line.push_str(text),
            }
        }
        line.push_str(&" ".repeat(BOX_WIDTH.saturating_sub(used)));
        line.push_str(&paint(sgr::DIM, "│", self.colored));
        self.lines.push(line);
    }

    fn text(&mut self, text: &str) {
        self.row(&[(truncate(text, BOX_WIDTH).as_str(), None)]);
    }

    fn note(&mut self, text: &str) {
        self.row(&[(truncate(text, BOX_WIDTH).as_str(), Some(sgr::DIM))]);
    }

    fn finish(mut self) -> String {
        self.lines
            .push(paint(sgr::DIM, &format!("└{}┘", "─".repeat(BOX_WIDTH)), self.colored));
        self.lines.join("\n")
    }
}

fn push_result(report: &mut Report, rank: usize, result: &SearchResult) {
    let rank = format!(" {rank:>3}. ");
    let title = cell(&result.title, TITLE_WIDTH);
    let badge = cell(&format!("[{}]", result.kind), BADGE_WIDTH);
    let relevance = format!(" {:>7.1}", result.relevance);
    report.row(&[
        (rank.as_str(), None),
        (title.as_str(), Some(sgr::BOLD_CYAN)),
        (" ", None),
        (badge.as_str(), Some(type_color(result.kind))),
        (relevance.as_str(), Some(relevance_color(result.relevance))),
    ]);
    if !result.tags.is_empty() {
        let tags: Vec<&str> = result.tags.iter().map(String::as_str).collect();
        report.note(&format!("      tags: {}", tags.join(", ")));
    }
}

pub fn render_page(query: &str, page: &SearchPage, colored: bool) -> String {
    let mut report = Report::new(&format!("SEARCH \"{}\"", truncate(query, 50)), colored);
    if page.results.is_empty() {
        report.note(" no results");
    }
    for (i, result) in page.results.iter().enumerate() {
        push_result(&mut report, page.offset + i + 1, result);
    }
    if page.results.is_empty() {
        report.note(&format!(" {} total", page.total_matches));
    } else {
        report.note(&format!(
            " showing {}-{} of {}",
            page.offset + 1,
            page.offset + page.results.len(),
            page.total_matches
        ));
    }
    report.finish()
}

pub fn render_suggestions(text: &str, suggestions: &[String], colored: bool) -> String {
    let mut report = Report::new(&format!("SUGGESTIONS \"{}\"", truncate(text, 50)), colored);
    if suggestions.is_empty() {
        report.note(" none");
    }
    for suggestion in suggestions {
        report.text(&format!(" {suggestion}"));
    }
    report.finish()
}

pub fn render_stats(stats: &SearchStats, colored: bool) -> String {
    let mut report = Report::new("STATS", colored);
    report.text(&format!(" indexed keys     {}", stats.indexed_key_count));
    report.text(&format!(" indexed results  {}", stats.indexed_result_count));
    report.text(&format!(" history length   {}", stats.history_length));
    if !stats.recent_queries.is_empty() {
        report.note(" recent");
        for query in &stats.recent_queries {
            report.text(&format!("   {query}"));
        }
    }
    report.finish()
}

pub fn print_page(query: &str, page: &SearchPage) {
    println!("{}", render_page(query, page, use_colors()));
}

pub fn print_suggestions(text: &str, suggestions: &[String]) {
    println!("{}", render_suggestions(text, suggestions, use_colors()));
}

pub fn print_stats(stats: &SearchStats) {
    println!("{}", render_stats(stats, use_colors()));
}
