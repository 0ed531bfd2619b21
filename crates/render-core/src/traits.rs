use crate::types::{FontWeight, PaintMode, TextAlign};
use crate::wrap::{ellipsize, wrap_text};
use selo_types::{Color, Point, Rect, Size};

/// An immediate-mode canvas for a single page.
///
/// Coordinates are in points with the origin at the top-left corner of the page and
/// `y` growing downwards. Text is positioned by its baseline. Backends translate
/// these calls into their native drawing model.
pub trait DrawingContext {
    fn page_size(&self) -> Size;

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn rect(&mut self, rect: Rect, mode: PaintMode);

    fn circle(&mut self, center: Point, radius: f32, mode: PaintMode);

    fn triangle(&mut self, a: Point, b: Point, c: Point, mode: PaintMode);

    fn line(&mut self, from: Point, to: Point);

    /// Selects the font used by subsequent text calls.
    fn set_font(&mut self, weight: FontWeight, size: f32);

    fn font_size(&self) -> f32;

    /// Width of `text` in the current font.
    fn measure_text(&self, text: &str) -> f32;

    /// Draws a single run with its baseline at `y`, filled with the current fill color.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Wraps `text` to `max_width` and draws at most `max_lines` of it, line `i` at
    /// `y + i * font_size * line_height_factor`. When lines are left over the last
    /// drawn line ends with an ellipsis. Returns the number of lines drawn.
    #[allow(clippy::too_many_arguments)]
    fn draw_wrapped_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: f32,
        line_height_factor: f32,
        max_lines: usize,
        align: TextAlign,
    ) -> usize {
        let mut lines = wrap_text(text, max_width, |s| self.measure_text(s));
        if lines.len() > max_lines {
            lines.truncate(max_lines);
            if let Some(last) = lines.last_mut() {
                *last = ellipsize(last, max_width, |s| self.measure_text(s));
            }
        }
        let step = self.font_size() * line_height_factor;
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(line, x, y + i as f32 * step, align);
        }
        lines.len()
    }

    /// Line count `draw_wrapped_text` would produce, without drawing.
    fn count_wrapped_lines(&self, text: &str, max_width: f32) -> usize {
        wrap_text(text, max_width, |s| self.measure_text(s)).len()
    }
}
