use crate::config::Palette;
use selo_render_core::{DrawingContext, FontWeight, PaintMode, TextAlign};
use selo_types::{Instruction, Point, Rect};

/// Half the side of the square every glyph fits in.
pub(super) const GLYPH_RADIUS: f32 = 12.0;

/// Draws the glyph of `instruction` centered on `center`.
pub(super) fn draw_glyph<C: DrawingContext>(ctx: &mut C, instruction: Instruction, center: Point, palette: &Palette) {
    let r = GLYPH_RADIUS;
    ctx.set_line_width(1.5);
    ctx.set_stroke_color(palette.text);

    match instruction {
        Instruction::Fragile => {
            ctx.set_fill_color(palette.danger);
            ctx.circle(center, r, PaintMode::FillStroke);
            ctx.set_fill_color(palette.on_primary);
            ctx.rect(Rect::new(center.x - 1.5, center.y - 7.0, 3.0, 9.0), PaintMode::Fill);
            ctx.circle(Point::new(center.x, center.y + 5.5), 1.5, PaintMode::Fill);
        }
        Instruction::Attention => {
            ctx.set_fill_color(palette.warning);
            ctx.triangle(
                Point::new(center.x, center.y - r),
                Point::new(center.x - r, center.y + r - 2.0),
                Point::new(center.x + r, center.y + r - 2.0),
                PaintMode::FillStroke,
            );
            ctx.set_fill_color(palette.text);
            ctx.set_font(FontWeight::Bold, 11.0);
            ctx.draw_text("!", center.x, center.y + 6.0, TextAlign::Center);
        }
        Instruction::ThisWayUp => {
            ctx.triangle(
                Point::new(center.x, center.y - r),
                Point::new(center.x - r + 2.0, center.y),
                Point::new(center.x + r - 2.0, center.y),
                PaintMode::Stroke,
            );
            ctx.set_fill_color(palette.text);
            ctx.rect(Rect::new(center.x - 3.0, center.y, 6.0, r - 2.0), PaintMode::Fill);
            ctx.line(Point::new(center.x - r, center.y + r), Point::new(center.x + r, center.y + r));
        }
        Instruction::HandleWithCare => {
            ctx.set_fill_color(palette.shade);
            ctx.rect(Rect::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r), PaintMode::FillStroke);
            ctx.set_fill_color(palette.text);
            ctx.rect(Rect::new(center.x - 5.0, center.y - 5.0, 10.0, 6.0), PaintMode::Fill);
            ctx.line(Point::new(center.x - 7.0, center.y + 4.0), Point::new(center.x + 7.0, center.y + 4.0));
        }
    }
}
