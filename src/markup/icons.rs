use selo_types::Instruction;

/// Inline SVG glyph for an instruction, drawn in `currentColor` on the panel background.
pub(super) fn svg(instruction: Instruction) -> &'static str {
    match instruction {
        Instruction::Fragile => concat!(
            r#"<svg viewBox="0 0 40 40" aria-hidden="true">"#,
            r#"<circle cx="20" cy="20" r="17" fill="none" stroke="currentColor" stroke-width="3"/>"#,
            r#"<rect x="18" y="9" width="4" height="15" fill="currentColor"/>"#,
            r#"<circle cx="20" cy="30" r="2.5" fill="currentColor"/>"#,
            "</svg>"
        ),
        Instruction::ThisWayUp => concat!(
            r#"<svg viewBox="0 0 40 40" aria-hidden="true">"#,
            r#"<polygon points="20,4 35,20 5,20" fill="none" stroke="currentColor" stroke-width="3"/>"#,
            r#"<rect x="16" y="20" width="8" height="14" fill="currentColor"/>"#,
            r#"<line x1="4" y1="37" x2="36" y2="37" stroke="currentColor" stroke-width="3"/>"#,
            "</svg>"
        ),
        Instruction::HandleWithCare => concat!(
            r#"<svg viewBox="0 0 40 40" aria-hidden="true">"#,
            r#"<rect x="5" y="5" width="30" height="30" fill="none" stroke="currentColor" stroke-width="3"/>"#,
            r#"<path d="M11 23 Q20 32 29 23" fill="none" stroke="currentColor" stroke-width="3"/>"#,
            r#"<rect x="14" y="12" width="12" height="8" fill="currentColor"/>"#,
            "</svg>"
        ),
        Instruction::Attention => concat!(
            r#"<svg viewBox="0 0 40 40" aria-hidden="true">"#,
            r#"<polygon points="20,3 38,36 2,36" fill="currentColor"/>"#,
            r#"<rect x="18" y="13" width="4" height="12" style="fill: var(--primary)"/>"#,
            r#"<circle cx="20" cy="30" r="2.2" style="fill: var(--primary)"/>"#,
            "</svg>"
        ),
    }
}
