//! Measure-and-wrap line breaking.
//!
//! Explicit line breaks (`\r\n`, `\n`, `\r`) always start a new line. Within a
//! paragraph words are packed greedily; a word wider than the budget on its own is
//! split between characters.

/// Splits `text` into lines no wider than `max_width` according to `measure`.
///
/// Empty input produces no lines. Blank paragraphs are kept as empty lines.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    if text.is_empty() {
        return Vec::new();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();

    for paragraph in normalized.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if measure(word) <= max_width {
                current = word.to_string();
            } else {
                break_word(word, max_width, &measure, &mut lines, &mut current);
            }
        }
        lines.push(current);
    }

    lines
}

fn break_word<F>(word: &str, max_width: f32, measure: &F, lines: &mut Vec<String>, current: &mut String)
where
    F: Fn(&str) -> f32,
{
    for ch in word.chars() {
        current.push(ch);
        // A single glyph always stays on its line, even when it alone overflows.
        if measure(current) > max_width && current.chars().count() > 1 {
            current.pop();
            lines.push(std::mem::take(current));
            current.push(ch);
        }
    }
}

/// Marks a line cut short because the text continued past the available space.
pub const ELLIPSIS: &str = "...";

/// Appends [`ELLIPSIS`] to `line`, dropping trailing characters until it fits `max_width`.
pub fn ellipsize<F>(line: &str, max_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    let mut kept = line.trim_end().to_string();
    loop {
        let candidate = format!("{}{}", kept, ELLIPSIS);
        if kept.is_empty() || measure(&candidate) <= max_width {
            return candidate;
        }
        kept.pop();
        kept.truncate(kept.trim_end().len());
    }
}
