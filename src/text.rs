//! Text sanitization and display formatting shared by the renderers.

/// Escapes the five HTML-significant characters.
///
/// `&` is replaced first so the entities produced for the other characters are not
/// escaped a second time.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes `value` and turns its line breaks into `<br />`.
///
/// `\r\n` is handled before `\n` so a Windows line ending yields a single break.
pub fn format_multiline(value: &str) -> String {
    escape_html(value)
        .replace("\r\n", "<br />")
        .replace('\n', "<br />")
        .replace('\r', "<br />")
}

/// Puts every comma separated address segment on its own line.
pub fn format_address(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format_multiline(&value.replace(", ", ",\n"))
}

/// Address segments as displayed one per line.
pub fn address_segments(value: &str) -> Vec<String> {
    value
        .split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Masks a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Non-digits are ignored and at most 14 digits are kept. Shorter inputs get the
/// separators their length has reached, so partial values format progressively.
pub fn format_cnpj(value: &str) -> String {
    let mut formatted = String::with_capacity(18);
    for (i, digit) in value.chars().filter(char::is_ascii_digit).take(14).enumerate() {
        match i {
            2 | 5 => formatted.push('.'),
            8 => formatted.push('/'),
            12 => formatted.push('-'),
            _ => {}
        }
        formatted.push(digit);
    }
    formatted
}

/// Replaces every run of whitespace with a single underscore.
pub fn collapse_whitespace(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push('_');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    collapsed
}
