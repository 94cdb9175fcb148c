//! Bounded completion context built fresh per trigger.

/// Lines of context captured on each side of the cursor.
pub const CONTEXT_WINDOW_LINES: usize = 100;

/// The document slice a completion request is built from: the declared
/// language, bounded windows of text before and after the cursor, and the
/// full current line. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub language: String,
    pub text_before: String,
    pub text_after: String,
    pub current_line: String,
}

impl CompletionContext {
    /// Build a context from the full document text and a cursor position
    /// (zero-based line and character column). Out-of-range positions are
    /// clamped rather than rejected; the windows are capped at
    /// [`CONTEXT_WINDOW_LINES`] lines on each side.
    pub fn from_document(
        language: impl Into<String>,
        text: &str,
        cursor_line: usize,
        cursor_col: usize,
    ) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_idx = cursor_line.min(lines.len().saturating_sub(1));
        let current = lines.get(line_idx).copied().unwrap_or("");

        let col = cursor_col.min(current.chars().count());
        let mut chars = current.chars();
        let head: String = chars.by_ref().take(col).collect();
        let tail: String = chars.collect();

        let window_start = line_idx.saturating_sub(CONTEXT_WINDOW_LINES);
        let mut text_before = lines[window_start..line_idx].join("\n");
        if !text_before.is_empty() {
            text_before.push('\n');
        }
        text_before.push_str(&head);

        let window_end = (line_idx + 1 + CONTEXT_WINDOW_LINES).min(lines.len());
        let mut text_after = tail;
        if line_idx + 1 < window_end {
            text_after.push('\n');
            text_after.push_str(&lines[line_idx + 1..window_end].join("\n"));
        }

        Self {
            language: language.into(),
            text_before,
            text_after,
            current_line: current.to_string(),
        }
    }
}
