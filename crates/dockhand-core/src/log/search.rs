//! Search state over a log buffer: pattern, match spans, navigation
//!
//! Patterns are regex, always compiled case-insensitive. Matches are byte
//! spans into each record's decoded text; navigation (n/N) moves between
//! matching lines with wraparound. Matches may go stale between a buffer
//! append and the next recompute; callers recompute on search-affecting
//! events rather than per incoming line.

use regex::Regex;

use super::buffer::LogBuffer;
use super::record::LogRecord;
use crate::error::{Error, Result};

/// A single match within a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Index of the line in the full buffer
    pub line_index: usize,
    /// Start byte offset of the match within the line text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SearchMatch {
    pub fn new(line_index: usize, start: usize, end: usize) -> Self {
        Self {
            line_index,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// State for log search functionality
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// The query text behind the compiled pattern
    query: String,
    /// Compiled case-insensitive pattern, None when no filter is active
    pattern: Option<Regex>,
    /// All matches in the current buffer, in line order
    matches: Vec<SearchMatch>,
    /// Distinct matching line indices, ascending
    matched_lines: Vec<usize>,
    /// Index into `matched_lines` for next/previous navigation
    cursor: Option<usize>,
    /// Error message from the most recent failed compile
    pub last_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pattern is currently filtering the view
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the active pattern and recompute matches over the buffer.
    ///
    /// An empty query clears the filter. A query that fails to compile
    /// leaves the previous pattern and matches fully in effect; only
    /// `last_error` changes, and the error is returned for the caller to
    /// surface.
    pub fn set_pattern(&mut self, query: &str, buffer: &LogBuffer) -> Result<()> {
        if query.is_empty() {
            self.clear();
            return Ok(());
        }

        // Case-insensitivity is mandatory regardless of what was typed
        let regex = match Regex::new(&format!("(?i){query}")) {
            Ok(r) => r,
            Err(e) => {
                let err = Error::pattern_compile(e.to_string());
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        self.query = query.to_string();
        self.pattern = Some(regex);
        self.last_error = None;
        self.recompute(buffer);
        self.cursor = if self.matched_lines.is_empty() {
            None
        } else {
            Some(0)
        };
        Ok(())
    }

    /// Drop the pattern and all matches; the full buffer becomes the view
    pub fn clear(&mut self) {
        self.query.clear();
        self.pattern = None;
        self.matches.clear();
        self.matched_lines.clear();
        self.cursor = None;
        self.last_error = None;
    }

    /// Re-run the active pattern over the buffer contents.
    ///
    /// Bounded by buffer capacity, so a synchronous scan is fine to run on
    /// the event loop. Keeps the cursor where possible, resetting to the
    /// first match when the old position no longer exists.
    pub fn recompute(&mut self, buffer: &LogBuffer) {
        let Some(regex) = &self.pattern else {
            self.matches.clear();
            self.matched_lines.clear();
            self.cursor = None;
            return;
        };

        let mut matches = Vec::new();
        let mut matched_lines = Vec::new();
        for (line_index, record) in buffer.iter().enumerate() {
            let mut any = false;
            for mat in regex.find_iter(&record.text) {
                matches.push(SearchMatch::new(line_index, mat.start(), mat.end()));
                any = true;
            }
            if any {
                matched_lines.push(line_index);
            }
        }

        self.matches = matches;
        self.matched_lines = matched_lines;

        if self.matched_lines.is_empty() {
            self.cursor = None;
        } else if let Some(i) = self.cursor {
            if i >= self.matched_lines.len() {
                self.cursor = Some(0);
            }
        } else {
            self.cursor = Some(0);
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matched_lines.is_empty()
    }

    /// Number of matching lines (0 when no pattern is set)
    pub fn match_count(&self) -> usize {
        self.matched_lines.len()
    }

    /// Distinct matching line indices, ascending
    pub fn matched_lines(&self) -> &[usize] {
        &self.matched_lines
    }

    /// All matches within one line, empty when the line does not match
    pub fn matches_for_line(&self, line_index: usize) -> &[SearchMatch] {
        let start = self.matches.partition_point(|m| m.line_index < line_index);
        let end = self.matches.partition_point(|m| m.line_index <= line_index);
        &self.matches[start..end]
    }

    /// Full-buffer line index of the focused match
    pub fn current_line(&self) -> Option<usize> {
        self.cursor.and_then(|i| self.matched_lines.get(i)).copied()
    }

    /// 1-based position of the focused match, for status display
    pub fn current_match_index(&self) -> Option<usize> {
        self.cursor.map(|i| i + 1)
    }

    /// Move focus to the next matching line, wrapping past the end
    pub fn next_match(&mut self) {
        if self.matched_lines.is_empty() {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1) % self.matched_lines.len(),
            None => 0,
        });
    }

    /// Move focus to the previous matching line, wrapping past the start
    pub fn prev_match(&mut self) {
        if self.matched_lines.is_empty() {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => self.matched_lines.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Focus the first match at or after the given line, wrapping to the
    /// first match when none follows
    pub fn seek(&mut self, line_index: usize) {
        if self.matched_lines.is_empty() {
            self.cursor = None;
            return;
        }
        let at_or_after = self
            .matched_lines
            .iter()
            .position(|&line| line >= line_index);
        self.cursor = Some(at_or_after.unwrap_or(0));
    }

    /// Next matching line strictly after `from`, wrapping to the first
    /// match. `None` when nothing matches.
    pub fn jump_to_next_match(&self, from: usize) -> Option<usize> {
        if self.matched_lines.is_empty() {
            return None;
        }
        self.matched_lines
            .iter()
            .copied()
            .find(|&line| line > from)
            .or_else(|| self.matched_lines.first().copied())
    }

    /// Previous matching line strictly before `from`, wrapping to the last
    /// match. `None` when nothing matches.
    pub fn jump_to_previous_match(&self, from: usize) -> Option<usize> {
        if self.matched_lines.is_empty() {
            return None;
        }
        self.matched_lines
            .iter()
            .rev()
            .copied()
            .find(|&line| line < from)
            .or_else(|| self.matched_lines.last().copied())
    }

    /// Format the search status for display
    pub fn display_status(&self) -> String {
        if !self.is_active() {
            return String::new();
        }
        if self.matched_lines.is_empty() {
            return "[No matches]".to_string();
        }
        match self.current_match_index() {
            Some(i) => format!("[{}/{} matches]", i, self.matched_lines.len()),
            None => format!("[{} matches]", self.matched_lines.len()),
        }
    }

    /// The projection the viewer renders: the full buffer when no pattern
    /// is set, otherwise only matching lines with their highlight spans.
    pub fn active_view<'a>(&'a self, buffer: &'a LogBuffer) -> ActiveView<'a> {
        if !self.is_active() {
            let lines = buffer
                .iter()
                .enumerate()
                .map(|(index, record)| ViewLine {
                    index,
                    record,
                    spans: &[],
                })
                .collect();
            return ActiveView {
                lines,
                filtered: false,
                query: None,
            };
        }

        // Stale indices (evictions since the last recompute) are skipped
        let lines = self
            .matched_lines
            .iter()
            .filter_map(|&index| {
                buffer.get(index).map(|record| ViewLine {
                    index,
                    record,
                    spans: self.matches_for_line(index),
                })
            })
            .collect();
        ActiveView {
            lines,
            filtered: true,
            query: Some(self.query.clone()),
        }
    }
}

/// One renderable line of the active view
#[derive(Debug, Clone, Copy)]
pub struct ViewLine<'a> {
    /// Index into the full buffer (not the filtered view)
    pub index: usize,
    pub record: &'a LogRecord,
    /// Highlight spans within the record text, empty when unfiltered
    pub spans: &'a [SearchMatch],
}

/// Ordered projection of the buffer through the current search state
#[derive(Debug)]
pub struct ActiveView<'a> {
    pub lines: Vec<ViewLine<'a>>,
    /// Whether a pattern produced this view
    pub filtered: bool,
    /// The query behind a filtered view
    pub query: Option<String>,
}

impl ActiveView<'_> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A pattern is set but nothing matches; render the placeholder, not
    /// an empty screen
    pub fn no_matches(&self) -> bool {
        self.filtered && self.lines.is_empty()
    }

    pub fn placeholder(&self) -> Option<String> {
        if !self.no_matches() {
            return None;
        }
        self.query
            .as_ref()
            .map(|q| format!("No matches found for '{q}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(lines: &[&str]) -> LogBuffer {
        let mut buffer = LogBuffer::new();
        for line in lines {
            buffer.append(LogRecord::from_text(*line));
        }
        buffer
    }

    #[test]
    fn test_case_insensitive_match_count_counts_lines() {
        let buffer = buffer_of(&["INFO start", "ERROR boom", "error retry", "done"]);
        let mut search = SearchState::new();
        search.set_pattern("ERROR", &buffer).unwrap();

        assert_eq!(search.match_count(), 2);
        assert_eq!(search.matched_lines(), &[1, 2]);
    }

    #[test]
    fn test_active_view_contains_only_matching_lines_with_spans() {
        let buffer = buffer_of(&["INFO start", "ERROR boom", "error retry", "done"]);
        let mut search = SearchState::new();
        search.set_pattern("ERROR", &buffer).unwrap();

        let view = search.active_view(&buffer);
        assert!(view.filtered);
        let texts: Vec<_> = view.lines.iter().map(|l| l.record.text.as_str()).collect();
        assert_eq!(texts, ["ERROR boom", "error retry"]);

        // Both lines start with the matched word
        for line in &view.lines {
            assert_eq!(line.spans.len(), 1);
            assert_eq!(line.spans[0].start, 0);
            assert_eq!(line.spans[0].end, 5);
        }
    }

    #[test]
    fn test_no_matches_renders_placeholder_not_empty_screen() {
        let buffer = buffer_of(&["alpha", "beta"]);
        let mut search = SearchState::new();
        search.set_pattern("zzz-no-match", &buffer).unwrap();

        assert_eq!(search.match_count(), 0);
        let view = search.active_view(&buffer);
        assert!(view.no_matches());
        assert_eq!(
            view.placeholder().as_deref(),
            Some("No matches found for 'zzz-no-match'")
        );
    }

    #[test]
    fn test_invalid_pattern_keeps_previous_filter() {
        let buffer = buffer_of(&["ERROR boom", "fine"]);
        let mut search = SearchState::new();
        search.set_pattern("error", &buffer).unwrap();
        assert_eq!(search.match_count(), 1);

        let result = search.set_pattern("[unclosed", &buffer);
        assert!(result.is_err());
        assert!(search.last_error.is_some());
        // Previous pattern still in effect
        assert!(search.is_active());
        assert_eq!(search.query(), "error");
        assert_eq!(search.match_count(), 1);
    }

    #[test]
    fn test_clear_restores_full_buffer_without_highlights() {
        let buffer = buffer_of(&["one", "two", "three"]);
        let mut search = SearchState::new();
        search.set_pattern("two", &buffer).unwrap();
        assert_eq!(search.active_view(&buffer).len(), 1);

        search.clear();
        let view = search.active_view(&buffer);
        assert!(!view.filtered);
        assert_eq!(view.len(), 3);
        assert!(view.lines.iter().all(|l| l.spans.is_empty()));
        assert_eq!(search.display_status(), "");
    }

    #[test]
    fn test_empty_query_clears() {
        let buffer = buffer_of(&["one"]);
        let mut search = SearchState::new();
        search.set_pattern("one", &buffer).unwrap();
        search.set_pattern("", &buffer).unwrap();
        assert!(!search.is_active());
    }

    #[test]
    fn test_navigation_wraps_both_directions() {
        let buffer = buffer_of(&["hit a", "miss", "hit b", "hit c"]);
        let mut search = SearchState::new();
        search.set_pattern("hit", &buffer).unwrap();
        assert_eq!(search.current_line(), Some(0));

        search.next_match();
        assert_eq!(search.current_line(), Some(2));
        search.next_match();
        assert_eq!(search.current_line(), Some(3));
        // Wrap to first
        search.next_match();
        assert_eq!(search.current_line(), Some(0));
        // Wrap to last
        search.prev_match();
        assert_eq!(search.current_line(), Some(3));
    }

    #[test]
    fn test_jump_helpers_wrap_at_buffer_ends() {
        let buffer = buffer_of(&["x", "hit", "y", "hit", "z"]);
        let mut search = SearchState::new();
        search.set_pattern("hit", &buffer).unwrap();

        assert_eq!(search.jump_to_next_match(1), Some(3));
        assert_eq!(search.jump_to_next_match(3), Some(1));
        assert_eq!(search.jump_to_previous_match(3), Some(1));
        assert_eq!(search.jump_to_previous_match(1), Some(3));
    }

    #[test]
    fn test_jump_helpers_with_no_matches_are_noops() {
        let buffer = buffer_of(&["a", "b"]);
        let search = SearchState::new();
        assert_eq!(search.jump_to_next_match(0), None);
        assert_eq!(search.jump_to_previous_match(1), None);
    }

    #[test]
    fn test_seek_focuses_first_match_at_or_after() {
        let buffer = buffer_of(&["hit", "x", "hit", "x", "hit"]);
        let mut search = SearchState::new();
        search.set_pattern("hit", &buffer).unwrap();

        search.seek(1);
        assert_eq!(search.current_line(), Some(2));
        search.seek(3);
        assert_eq!(search.current_line(), Some(4));
        // Past the last match wraps to the first
        search.seek(5);
        assert_eq!(search.current_line(), Some(0));
    }

    #[test]
    fn test_multiple_spans_on_one_line() {
        let buffer = buffer_of(&["abc ABC abC"]);
        let mut search = SearchState::new();
        search.set_pattern("abc", &buffer).unwrap();

        assert_eq!(search.match_count(), 1);
        assert_eq!(search.matches_for_line(0).len(), 3);
        assert_eq!(search.matches_for_line(0)[1].start, 4);
        assert_eq!(search.matches_for_line(0)[1].end, 7);
    }

    #[test]
    fn test_recompute_after_append_picks_up_new_lines() {
        let mut buffer = buffer_of(&["ERROR one"]);
        let mut search = SearchState::new();
        search.set_pattern("error", &buffer).unwrap();
        assert_eq!(search.match_count(), 1);

        buffer.append(LogRecord::from_text("ERROR two"));
        search.recompute(&buffer);
        assert_eq!(search.match_count(), 2);
    }

    #[test]
    fn test_display_status() {
        let buffer = buffer_of(&["hit", "hit"]);
        let mut search = SearchState::new();
        assert_eq!(search.display_status(), "");

        search.set_pattern("hit", &buffer).unwrap();
        assert_eq!(search.display_status(), "[1/2 matches]");

        search.set_pattern("none-such", &buffer).unwrap();
        assert_eq!(search.display_status(), "[No matches]");
    }
}
