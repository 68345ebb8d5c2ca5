//! Syntax highlighting for pow using tree-sitter.
//!
//! Highlighting is a pure function of the language and the full document
//! text: it returns, per line, non-overlapping styled column ranges. Columns
//! count chars, matching the editor's cursor columns.

mod palette;

pub use palette::Palette;

use ratatui::style::Style;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tree_sitter_highlight::{HighlightConfiguration, HighlightEvent, Highlighter};

/// Global static highlighter (lazily initialized)
static GLOBAL_HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();

/// Get global highlighter
pub fn global_highlighter() -> &'static SyntaxHighlighter {
    GLOBAL_HIGHLIGHTER.get_or_init(SyntaxHighlighter::new)
}

/// File type shown when no grammar matches
pub const PLAIN_TEXT: &str = "plaintext";

/// Standard highlight categories used by tree-sitter.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",
    "comment",
    "constant",
    "constant.builtin",
    "constructor",
    "function",
    "function.builtin",
    "function.method",
    "keyword",
    "label",
    "number",
    "operator",
    "property",
    "punctuation",
    "punctuation.bracket",
    "punctuation.delimiter",
    "punctuation.special",
    "string",
    "string.special",
    "tag",
    "type",
    "type.builtin",
    "variable",
    "variable.builtin",
    "variable.parameter",
    "escape",
    "embedded",
];

/// Detect language from file extension, or from well-known file names.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            "Cargo.lock" | "Pipfile" => return Some("toml"),
            ".bashrc" | ".bash_profile" | ".profile" | ".zshrc" | "PKGBUILD" => {
                return Some("bash")
            }
            _ => {}
        }
    }

    let ext = path.extension()?.to_str()?;

    match ext.to_lowercase().as_str() {
        "rs" => Some("rust"),
        "py" | "pyw" => Some("python"),
        "go" => Some("go"),
        "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "c" | "h" => Some("c"),
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => Some("cpp"),
        "java" => Some("java"),
        "rb" => Some("ruby"),
        "html" | "htm" => Some("html"),
        "css" => Some("css"),
        "json" => Some("json"),
        "toml" => Some("toml"),
        "yaml" | "yml" => Some("yaml"),
        "sh" | "bash" | "zsh" => Some("bash"),
        _ => None,
    }
}

/// Display name of the file type: the detected language or `plaintext`.
pub fn file_type(path: Option<&Path>) -> &'static str {
    path.and_then(detect_language).unwrap_or(PLAIN_TEXT)
}

/// A styled column range `[start_col, end_col)` on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start_col: usize,
    pub end_col: usize,
    pub style: Style,
}

impl HighlightSpan {
    pub fn contains(&self, col: usize) -> bool {
        self.start_col <= col && col < self.end_col
    }
}

/// Style of the span covering `col`, if any.
pub fn style_at(spans: &[HighlightSpan], col: usize) -> Option<Style> {
    // Spans are sorted and non-overlapping
    let idx = spans.partition_point(|span| span.end_col <= col);
    spans
        .get(idx)
        .filter(|span| span.contains(col))
        .map(|span| span.style)
}

/// Syntax highlighter manager based on tree-sitter
pub struct SyntaxHighlighter {
    /// Configurations for each supported language
    configs: HashMap<&'static str, HighlightConfiguration>,
}

impl SyntaxHighlighter {
    /// Create new highlighter with support for all languages
    pub fn new() -> Self {
        let mut configs = HashMap::new();

        let grammars: [(&'static str, tree_sitter::Language, &str, &str); 16] = [
            (
                "rust",
                tree_sitter_rust::LANGUAGE.into(),
                tree_sitter_rust::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "python",
                tree_sitter_python::LANGUAGE.into(),
                tree_sitter_python::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "go",
                tree_sitter_go::LANGUAGE.into(),
                tree_sitter_go::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "javascript",
                tree_sitter_javascript::LANGUAGE.into(),
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::INJECTIONS_QUERY,
            ),
            (
                "typescript",
                tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "tsx",
                tree_sitter_typescript::LANGUAGE_TSX.into(),
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "c",
                tree_sitter_c::LANGUAGE.into(),
                tree_sitter_c::HIGHLIGHT_QUERY,
                "",
            ),
            (
                "cpp",
                tree_sitter_cpp::LANGUAGE.into(),
                tree_sitter_cpp::HIGHLIGHT_QUERY,
                "",
            ),
            (
                "java",
                tree_sitter_java::LANGUAGE.into(),
                tree_sitter_java::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "ruby",
                tree_sitter_ruby::LANGUAGE.into(),
                tree_sitter_ruby::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "html",
                tree_sitter_html::LANGUAGE.into(),
                tree_sitter_html::HIGHLIGHTS_QUERY,
                tree_sitter_html::INJECTIONS_QUERY,
            ),
            (
                "css",
                tree_sitter_css::LANGUAGE.into(),
                tree_sitter_css::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "json",
                tree_sitter_json::LANGUAGE.into(),
                tree_sitter_json::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "toml",
                tree_sitter_toml_ng::LANGUAGE.into(),
                tree_sitter_toml_ng::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "yaml",
                tree_sitter_yaml::LANGUAGE.into(),
                tree_sitter_yaml::HIGHLIGHTS_QUERY,
                "",
            ),
            (
                "bash",
                tree_sitter_bash::LANGUAGE.into(),
                tree_sitter_bash::HIGHLIGHT_QUERY,
                "",
            ),
        ];

        for (name, language, highlights, injections) in grammars {
            Self::load_language_config(&mut configs, name, language, highlights, injections);
        }

        Self { configs }
    }

    fn load_language_config(
        configs: &mut HashMap<&'static str, HighlightConfiguration>,
        name: &'static str,
        language: tree_sitter::Language,
        highlights_query: &str,
        injections_query: &str,
    ) {
        // A grammar whose queries fail to compile is left unsupported
        if let Ok(mut config) =
            HighlightConfiguration::new(language, name, highlights_query, injections_query, "")
        {
            config.configure(HIGHLIGHT_NAMES);
            configs.insert(name, config);
        }
    }

    /// Check if language is supported.
    pub fn is_supported(&self, language: &str) -> bool {
        self.configs.contains_key(language)
    }

    /// Highlight a whole document.
    ///
    /// The result has one entry per `\n`-separated line of `text`. Unknown
    /// languages and parse failures yield lines without spans.
    pub fn highlight(&self, language: &str, text: &str, palette: Palette) -> Vec<Vec<HighlightSpan>> {
        let line_count = text.split('\n').count();
        let plain = || vec![Vec::new(); line_count];

        let Some(config) = self.configs.get(language) else {
            return plain();
        };

        let mut highlighter = Highlighter::new();
        let events = match highlighter.highlight(config, text.as_bytes(), None, |_| None) {
            Ok(events) => events,
            Err(_) => return plain(),
        };

        let mut spans: Vec<Vec<HighlightSpan>> = plain();
        let mut styles: Vec<Style> = Vec::new();
        let mut line = 0;
        let mut col = 0;

        for event in events {
            match event {
                Ok(HighlightEvent::HighlightStart(highlight)) => {
                    let name = HIGHLIGHT_NAMES.get(highlight.0).copied().unwrap_or("");
                    styles.push(palette.style(name));
                }
                Ok(HighlightEvent::HighlightEnd) => {
                    styles.pop();
                }
                Ok(HighlightEvent::Source { start, end }) => {
                    let Some(chunk) = text.get(start..end) else {
                        return plain();
                    };
                    let style = styles.last().copied();

                    for (i, piece) in chunk.split('\n').enumerate() {
                        if i > 0 {
                            line += 1;
                            col = 0;
                        }
                        let width = piece.chars().count();
                        if let (Some(style), true) = (style, width > 0) {
                            if let Some(row) = spans.get_mut(line) {
                                row.push(HighlightSpan {
                                    start_col: col,
                                    end_col: col + width,
                                    style,
                                });
                            }
                        }
                        col += width;
                    }
                }
                Err(_) => return plain(),
            }
        }

        spans
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
