use regex::{Regex, RegexBuilder};

use crate::{Cursor, TextBuffer};

/// One occurrence of the query, in char columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub line: usize,
    pub column: usize,
    pub len: usize,
}

impl SearchMatch {
    pub fn cursor(&self) -> Cursor {
        Cursor::at(self.line, self.column)
    }

    fn contains(&self, line: usize, column: usize) -> bool {
        self.line == line && column >= self.column && column < self.column + self.len
    }
}

/// Incremental search state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Current position in results
    pub current_match: Option<usize>,
    /// All found matches, ordered by (line, column)
    pub matches: Vec<SearchMatch>,
}

/// Build a case-insensitive literal matcher for the query
fn literal_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Find non-overlapping occurrences in one line, in char columns
fn find_in_line(regex: &Regex, line_idx: usize, line: &str, out: &mut Vec<SearchMatch>) {
    let mut chars_seen = 0;
    let mut bytes_seen = 0;

    for m in regex.find_iter(line) {
        chars_seen += line[bytes_seen..m.start()].chars().count();
        let len = m.as_str().chars().count();
        out.push(SearchMatch {
            line: line_idx,
            column: chars_seen,
            len,
        });
        chars_seen += len;
        bytes_seen = m.end();
    }
}

impl SearchState {
    /// Create an empty search state
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget query and results
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.current_match = None;
    }

    /// Check if search is active
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Get match count
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Get current match
    pub fn current(&self) -> Option<&SearchMatch> {
        self.current_match.and_then(|idx| self.matches.get(idx))
    }

    /// Replace the query and recompute matches.
    ///
    /// Returns the first match, if any; the caller moves the cursor there.
    pub fn set_query(&mut self, query: &str, buffer: &TextBuffer) -> Option<SearchMatch> {
        self.query = query.to_string();
        self.recompute(buffer)
    }

    /// Append a character to the query and recompute
    pub fn push_char(&mut self, ch: char, buffer: &TextBuffer) -> Option<SearchMatch> {
        self.query.push(ch);
        self.recompute(buffer)
    }

    /// Remove the last character of the query and recompute.
    ///
    /// Returns `None` without touching results when the query is already empty.
    pub fn pop_char(&mut self, buffer: &TextBuffer) -> Option<SearchMatch> {
        self.query.pop()?;
        self.recompute(buffer)
    }

    /// Rescan the whole buffer for the current query
    pub fn recompute(&mut self, buffer: &TextBuffer) -> Option<SearchMatch> {
        self.matches.clear();
        self.current_match = None;

        if self.query.is_empty() {
            return None;
        }
        let regex = literal_matcher(&self.query)?;

        for (idx, line) in buffer.lines().iter().enumerate() {
            find_in_line(&regex, idx, line, &mut self.matches);
        }

        if self.matches.is_empty() {
            None
        } else {
            self.current_match = Some(0);
            self.current().copied()
        }
    }

    /// Go to next match, wrapping around after the last one
    pub fn next_match(&mut self) -> Option<SearchMatch> {
        if self.matches.is_empty() {
            return None;
        }

        self.current_match = Some(match self.current_match {
            Some(idx) => (idx + 1) % self.matches.len(),
            None => 0,
        });
        self.current().copied()
    }

    /// Whether a cell lies in a match: `Some(true)` for the current one
    pub fn match_at(&self, line: usize, column: usize) -> Option<bool> {
        let start = self.matches.partition_point(|m| m.line < line);
        self.matches[start..]
            .iter()
            .take_while(|m| m.line == line)
            .enumerate()
            .find(|(_, m)| m.contains(line, column))
            .map(|(offset, _)| self.current_match == Some(start + offset))
    }

    /// One-based index of the current match and the total, for display
    pub fn status(&self) -> Option<(usize, usize)> {
        self.current_match
            .map(|idx| (idx + 1, self.matches.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect())
    }

    fn positions(state: &SearchState) -> Vec<(usize, usize, usize)> {
        state
            .matches
            .iter()
            .map(|m| (m.line, m.column, m.len))
            .collect()
    }

    #[test]
    fn test_matches_in_document_order() {
        let buf = buffer(&["xaby", "abab"]);
        let mut search = SearchState::new();
        let first = search.set_query("ab", &buf);

        assert_eq!(positions(&search), vec![(0, 1, 2), (1, 0, 2), (1, 2, 2)]);
        assert_eq!(first.map(|m| m.cursor()), Some(Cursor::at(0, 1)));
        assert_eq!(search.current_match, Some(0));
    }

    #[test]
    fn test_self_overlapping_query_not_double_counted() {
        let buf = buffer(&["aaaa"]);
        let mut search = SearchState::new();
        search.set_query("aa", &buf);
        assert_eq!(positions(&search), vec![(0, 0, 2), (0, 2, 2)]);
    }

    #[test]
    fn test_case_insensitive() {
        let buf = buffer(&["Hello HELLO hello"]);
        let mut search = SearchState::new();
        search.set_query("hello", &buf);
        assert_eq!(search.match_count(), 3);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let buf = buffer(&["a.b axb (x)"]);
        let mut search = SearchState::new();
        search.set_query("a.b", &buf);
        assert_eq!(positions(&search), vec![(0, 0, 3)]);
        search.set_query("(x)", &buf);
        assert_eq!(positions(&search), vec![(0, 8, 3)]);
    }

    #[test]
    fn test_columns_are_char_indices() {
        let buf = buffer(&["привет мир, мир"]);
        let mut search = SearchState::new();
        search.set_query("мир", &buf);
        assert_eq!(positions(&search), vec![(0, 7, 3), (0, 12, 3)]);
    }

    #[test]
    fn test_empty_query_has_no_matches() {
        let buf = buffer(&["abc"]);
        let mut search = SearchState::new();
        search.set_query("b", &buf);
        assert_eq!(search.pop_char(&buf), None);
        assert!(search.matches.is_empty());
        assert_eq!(search.current_match, None);
        assert!(!search.is_active());
    }

    #[test]
    fn test_pop_char_on_empty_query_is_noop() {
        let buf = buffer(&["abc"]);
        let mut search = SearchState::new();
        assert_eq!(search.pop_char(&buf), None);
        assert_eq!(search.query, "");
    }

    #[test]
    fn test_push_char_narrows_results() {
        let buf = buffer(&["cat car cab"]);
        let mut search = SearchState::new();
        search.push_char('c', &buf);
        search.push_char('a', &buf);
        assert_eq!(search.match_count(), 3);
        let hit = search.push_char('r', &buf);
        assert_eq!(hit.map(|m| m.cursor()), Some(Cursor::at(0, 4)));
        assert_eq!(search.match_count(), 1);
    }

    #[test]
    fn test_next_match_is_cyclic() {
        let buf = buffer(&["ab ab", "ab", "xx ab"]);
        let mut search = SearchState::new();
        search.set_query("ab", &buf);
        let n = search.match_count();
        assert_eq!(n, 4);

        let start = search.current_match;
        for _ in 0..n {
            search.next_match();
        }
        assert_eq!(search.current_match, start);

        search.next_match();
        assert_eq!(search.status(), Some((2, 4)));
    }

    #[test]
    fn test_next_match_without_matches() {
        let mut search = SearchState::new();
        assert_eq!(search.next_match(), None);
        assert_eq!(search.status(), None);
    }

    #[test]
    fn test_match_at_marks_current() {
        let buf = buffer(&["ab ab"]);
        let mut search = SearchState::new();
        search.set_query("ab", &buf);

        assert_eq!(search.match_at(0, 0), Some(true));
        assert_eq!(search.match_at(0, 1), Some(true));
        assert_eq!(search.match_at(0, 2), None);
        assert_eq!(search.match_at(0, 3), Some(false));
        assert_eq!(search.match_at(1, 0), None);
    }

    #[test]
    fn test_clear() {
        let buf = buffer(&["abc"]);
        let mut search = SearchState::new();
        search.set_query("a", &buf);
        search.clear();
        assert_eq!(search.query, "");
        assert!(search.matches.is_empty());
        assert_eq!(search.current_match, None);
    }
}
