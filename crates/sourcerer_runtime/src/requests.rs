//! Request message assembly for each assistant operation.
//!
//! All editor-facing operations funnel through here so the prompt shapes
//! live in one place: inline completion, inline edits, diagnostic-driven
//! fixes, and refactors.

use sourcerer_core::{prompts, CompletionContext, DiagnosticGroup};
use sourcerer_llms::ChatMessage;

/// The inline-completion request: system prompt plus the bounded context
/// windows, labeled the way the model expects to read them.
pub fn completion_messages(context: &CompletionContext) -> Vec<ChatMessage> {
    let user = format!(
        "Language: {}\n\nCode before cursor:\n{}\n\nCode after cursor:\n{}\n\nCurrent line:\n{}",
        context.language, context.text_before, context.text_after, context.current_line
    );
    vec![
        ChatMessage::system(prompts::INLINE_CODE_COMPLETION),
        ChatMessage::user(user),
    ]
}

/// An inline edit request: apply `instruction` to the selected code.
pub fn edit_messages(language: &str, instruction: &str, selection: &str) -> Vec<ChatMessage> {
    let user = format!(
        "Language: {language}\nUser query: {instruction}\nContext: {selection}"
    );
    vec![
        ChatMessage::system(prompts::INLINE_CODE_ASSISTANT),
        ChatMessage::user(user),
    ]
}

/// A diagnostic-driven fix request for the most severe line group: the full
/// file for reference, the offending snippet, and the diagnostics to address.
pub fn fix_messages(
    language: &str,
    file_name: &str,
    file_text: &str,
    snippet: &str,
    target: &DiagnosticGroup,
) -> Vec<ChatMessage> {
    let diagnostics: Vec<String> = target
        .diagnostics
        .iter()
        .map(|d| format!("{}: {}", d.severity.label(), d.message))
        .collect();

    let user = format!(
        "I need you to fix code in a {language} file named \"{file_name}\".\n\n\
         FULL FILE CONTEXT (for reference only):\n```{language}\n{file_text}\n```\n\n\
         THE CODE WITH ERRORS (line {}):\n```{language}\n{snippet}\n```\n\n\
         DIAGNOSTICS FOUND:\n{}\n\n\
         Fix the code to address the specific diagnostics listed above. \
         Return ONLY the fixed code that should replace the selected section.",
        target.line + 1,
        diagnostics.join("\n"),
    );
    vec![
        ChatMessage::system(prompts::ERROR_FIXING),
        ChatMessage::user(user),
    ]
}

/// A refactor request: improve the selection without changing behavior.
pub fn refactor_messages(language: &str, selection: &str) -> Vec<ChatMessage> {
    let user = format!("Language: {language}\n\nCode to refactor:\n{selection}");
    vec![
        ChatMessage::system(prompts::CODE_REFACTORING),
        ChatMessage::user(user),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sourcerer_core::{Diagnostic, Severity};

    #[test]
    fn completion_messages_carry_context() {
        let context =
            CompletionContext::from_document("rust", "fn main() {\n    let x\n}", 1, 9);
        let messages = completion_messages(&context);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("Language: rust"));
        assert!(messages[1].content.contains("fn main() {"));
        assert!(messages[1].content.contains("Current line:\n    let x"));
    }

    #[test]
    fn edit_messages_carry_instruction_and_selection() {
        let messages = edit_messages("python", "add type hints", "def f(x): return x");
        assert_eq!(messages[0].content, prompts::INLINE_CODE_ASSISTANT);
        assert!(messages[1].content.contains("add type hints"));
        assert!(messages[1].content.contains("def f(x): return x"));
    }

    #[test]
    fn fix_messages_list_diagnostics_with_labels() {
        let target = DiagnosticGroup {
            line: 4,
            diagnostics: vec![
                Diagnostic::new(4, Severity::Error, "cannot find value `y`"),
                Diagnostic::new(4, Severity::Warning, "unused variable `x`"),
            ],
        };
        let messages = fix_messages("rust", "main.rs", "fn main() { y; }", "y;", &target);
        let user = &messages[1].content;
        assert!(user.contains("ERROR: cannot find value `y`"));
        assert!(user.contains("WARNING: unused variable `x`"));
        // One-based line number for the human-readable prompt.
        assert!(user.contains("line 5"));
        assert!(user.contains("main.rs"));
    }

    #[test]
    fn refactor_messages_use_refactoring_prompt() {
        let messages = refactor_messages("go", "func add(a, b int) int { return a + b }");
        assert_eq!(messages[0].content, prompts::CODE_REFACTORING);
        assert!(messages[1].content.contains("func add"));
    }
}
