//! Extraction of insertable code from raw model output.
//!
//! Model responses arrive as free text that may or may not wrap the code in a
//! markdown fence. Every call site that turns a response into an editor edit
//! goes through [`extract_code`], so the fence-stripping policy lives in
//! exactly one place.

/// Extract the code payload from a raw model response.
///
/// Policy:
/// 1. The first well-formed fenced block wins: an opening line that is
///    exactly three backticks plus an optional language tag, at least one
///    body line, and a closing fence line. The fence markers and tag are
///    discarded; the body keeps its indentation, with surrounding blank
///    lines removed.
/// 2. With no well-formed block the whole response, trimmed, is treated as
///    plain code. A fence followed by code on the same line is malformed and
///    takes this path.
/// 3. Either way, any leftover line that is exactly a fence marker is
///    dropped, so the result never contains a bare fence line.
///
/// Total over all inputs; never panics.
pub fn extract_code(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let mut body: Option<String> = None;
    for (i, line) in lines.iter().enumerate() {
        if !is_fence_line(line) {
            continue;
        }
        // Candidate opening fence. A block needs a closing fence and at
        // least one body line; anything else falls back to the plain path.
        if let Some(offset) = lines[i + 1..].iter().position(|l| is_fence_line(l)) {
            let inner = &lines[i + 1..i + 1 + offset];
            if !inner.is_empty() {
                body = Some(inner.join("\n"));
            }
        }
        break;
    }

    let candidate = match body {
        Some(b) => trim_blank_edges(&b),
        None => raw.trim().to_string(),
    };

    strip_fence_lines(&candidate)
}

/// True if the line (ignoring surrounding whitespace) is exactly a fence
/// marker: three backticks plus at most a single language tag.
fn is_fence_line(line: &str) -> bool {
    match line.trim().strip_prefix("```") {
        Some(rest) => is_language_tag(rest),
        None => false,
    }
}

/// Language tags are single tokens like `python`, `c++`, `c#`, `objective-c`.
/// The empty tag is a plain fence. Anything with whitespace is not a tag.
fn is_language_tag(tag: &str) -> bool {
    tag.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '.' | '#' | '-'))
}

/// Remove blank lines from both ends, keeping inner indentation intact.
fn trim_blank_edges(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|e| e + 1)
        .unwrap_or(lines.len());
    lines[start..end].join("\n")
}

/// Secondary pass: drop lines that are exactly a fence marker. Catches
/// unclosed or nested fences the block scan could not pair up.
fn strip_fence_lines(text: &str) -> String {
    if !text.contains("```") {
        return text.to_string();
    }
    let kept: Vec<&str> = text.split('\n').filter(|l| !is_fence_line(l)).collect();
    trim_blank_edges(&kept.join("\n"))
}
