//! Diagnostic grouping: pick the most severe line cluster as the fix target.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Diagnostic severity, most severe first.
///
/// Comparison order is fixed by convention: `Error < Warning < Information <
/// Hint`, ordinals 0 through 3, where a numerically smaller ordinal means
/// more severe. `Ord` follows declaration order, so `min()` over severities
/// yields the worst one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl Severity {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Uppercase label used when reporting diagnostics to the model.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Information => "INFO",
            Severity::Hint => "HINT",
        }
    }
}

/// One diagnostic record as supplied by the host: a line, a column span on
/// that line, a severity, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: u32,
    pub col_start: u32,
    pub col_end: u32,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: u32, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            col_start: 0,
            col_end: 0,
            severity,
            message: message.into(),
        }
    }

    pub fn with_cols(mut self, start: u32, end: u32) -> Self {
        self.col_start = start;
        self.col_end = end;
        self
    }
}

/// Diagnostics sharing a start line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticGroup {
    pub line: u32,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticGroup {
    /// The worst severity present in the group. Groups are never empty, but
    /// degrade to `Hint` rather than panic.
    pub fn min_severity(&self) -> Severity {
        self.diagnostics
            .iter()
            .map(|d| d.severity)
            .min()
            .unwrap_or(Severity::Hint)
    }
}

/// Group diagnostics by start line, ordered by each group's worst severity
/// ascending (most severe group first). Groups tying on severity keep their
/// first-appearance order, and diagnostics within a group keep input order.
pub fn group_by_line(diagnostics: &[Diagnostic]) -> Vec<DiagnosticGroup> {
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut groups: Vec<DiagnosticGroup> = Vec::new();

    for diag in diagnostics {
        let slot = *index.entry(diag.line).or_insert_with(|| {
            groups.push(DiagnosticGroup {
                line: diag.line,
                diagnostics: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].diagnostics.push(diag.clone());
    }

    // Stable sort keeps first-appearance order for equal severities.
    groups.sort_by_key(DiagnosticGroup::min_severity);
    groups
}

/// The single most severe line group — the host's highlight/select target.
pub fn fix_target(diagnostics: &[Diagnostic]) -> Option<DiagnosticGroup> {
    group_by_line(diagnostics).into_iter().next()
}
