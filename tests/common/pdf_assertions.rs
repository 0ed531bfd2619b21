use lopdf::content::Content;
use lopdf::Document as LopdfDocument;

/// Decodes WinAnsi bytes written by the renderer. Latin-1 covers every byte it emits.
fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Operands of every `Tj` operator on page `page_num` (1-based), decoded.
pub fn page_texts(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(decode_win_ansi)
        .collect()
}

/// Number of operations named `operator` on page `page_num`.
pub fn count_operator(doc: &LopdfDocument, page_num: u32, operator: &str) -> usize {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return 0;
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|data| Content::decode(&data).ok())
        .map(|content| content.operations.iter().filter(|op| op.operator == operator).count())
        .unwrap_or(0)
}

/// A string entry of the trailer's Info dictionary.
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let dict = match info.as_reference() {
        Ok(id) => doc.get_object(id).ok()?.as_dict().ok()?,
        Err(_) => info.as_dict().ok()?,
    };
    let value = dict.get(key.as_bytes()).ok()?.as_str().ok()?;
    Some(decode_win_ansi(value))
}

pub fn assert_page_count(doc: &LopdfDocument, expected: usize) {
    let actual = doc.get_pages().len();
    assert_eq!(actual, expected, "Expected {} pages, found {}", expected, actual);
}
