use crate::types::TextAlign;

/// Convert a top-down Y coordinate to PDF's bottom-up space.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Left edge of a run of `width` anchored at `x`.
pub fn aligned_x(x: f32, width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    }
}
