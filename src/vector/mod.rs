//! Vector label renderer.
//!
//! Every company gets its own portrait A4 page, composed top to bottom with a
//! running cursor: header band, campaign block, recipient, sender and observation.
//! The handling instructions box sits just above the footer. Text that would run
//! into it is cut short with an ellipsis. Layout is written against
//! [`DrawingContext`] so any backend can replay it; [`VectorRenderer`] records it
//! with the lopdf canvas.

mod glyphs;

use crate::config::{Palette, SeloConfig};
use crate::document::{PageStats, RenderedPage, SealDocument};
use crate::error::SeloError;
use crate::label::{derive_all, LabelContent};
use chrono::{Local, NaiveDate};
use selo_render_core::{DrawingContext, FontWeight, PaintMode, TextAlign};
use selo_render_lopdf::LopdfCanvas;
use selo_types::{Point, Rect, SealData, Size};

const SECTION_GAP: f32 = 14.0;
const BLOCK_PADDING: f32 = 10.0;
const INSTRUCTION_BOX_HEIGHT: f32 = 84.0;
const FOOTER_OFFSET: f32 = 45.0;

/// Baseline of a line of text whose top edge is at `top`.
fn baseline(top: f32, size: f32) -> f32 {
    top + size * 0.8
}

pub struct VectorRenderer {
    config: SeloConfig,
    page_size: Size,
}

impl VectorRenderer {
    pub fn new(config: &SeloConfig) -> Result<Self, SeloError> {
        config.validate()?;
        Ok(Self { config: config.clone(), page_size: Size::A4_PORTRAIT })
    }

    /// Renders one page per company, dated today.
    pub fn render(&self, seal: &SealData) -> SealDocument {
        self.render_on(seal, Local::now().date_naive())
    }

    /// Renders one page per company with `date` in the footers.
    pub fn render_on(&self, seal: &SealData, date: NaiveDate) -> SealDocument {
        let labels = derive_all(seal);
        let total = labels.len();
        let date = date.format("%d/%m/%Y").to_string();

        let pages = labels
            .iter()
            .map(|label| {
                let mut canvas = LopdfCanvas::new(self.page_size);
                let stats = draw_label_page(&mut canvas, label, total, &date, &self.config);
                RenderedPage { content: canvas.finish(), stats }
            })
            .collect::<Vec<_>>();
        log::debug!("Rendered {} label pages for '{}'", pages.len(), seal.campaign_name);

        SealDocument::new(seal.campaign_name.clone(), self.page_size, pages)
    }
}

/// Draws the label page of `label`, which is page `label.position` of `total`.
pub fn draw_label_page<C: DrawingContext>(
    ctx: &mut C,
    label: &LabelContent,
    total: usize,
    date: &str,
    config: &SeloConfig,
) -> PageStats {
    let palette = &config.palette;
    let layout = &config.layout;
    let page = ctx.page_size();
    let footer_top = page.height - FOOTER_OFFSET;
    // The instruction box is reserved up front so text never pushes it off the page.
    let reserved = if label.has_instructions() { INSTRUCTION_BOX_HEIGHT + SECTION_GAP } else { 0.0 };
    let mut frame = Frame {
        left: layout.margin,
        width: page.width - 2.0 * layout.margin,
        bottom: footer_top - SECTION_GAP - reserved,
        line_height: layout.line_height_factor,
        truncated: false,
    };
    let mut stats = PageStats::default();

    // Header
    ctx.set_fill_color(palette.primary);
    ctx.rect(Rect::new(0.0, 0.0, page.width, layout.header_height), PaintMode::Fill);
    ctx.set_fill_color(palette.on_primary);
    ctx.set_font(FontWeight::Bold, 20.0);
    ctx.draw_text("SELO DE ENVIO", page.width / 2.0, layout.header_height / 2.0 + 7.0, TextAlign::Center);
    let mut y = layout.header_height + 20.0;

    y = frame.shaded_block(ctx, palette, "Campanha:", &label.campaign_name, FontWeight::Bold, y);

    // Recipient
    y = frame.banner(ctx, palette, layout.banner_height, "DESTINATÁRIO", y);
    ctx.set_fill_color(palette.text);
    y = frame.paragraph(ctx, &label.company_name, FontWeight::Bold, 14.0, y);
    y = frame.paragraph(ctx, &format!("CNPJ: {}", label.cnpj), FontWeight::Regular, 11.0, y);
    y = frame.paragraph(ctx, &label.address, FontWeight::Regular, 11.0, y);
    if let Some(contact) = &label.contact_person {
        y = frame.paragraph(ctx, &format!("A/C {}", contact), FontWeight::Regular, 11.0, y);
    }
    if let Some(phone) = &label.phone {
        y = frame.paragraph(ctx, &format!("Tel: {}", phone), FontWeight::Regular, 11.0, y);
    }
    y += SECTION_GAP;

    // Sender
    y = frame.banner(ctx, palette, layout.banner_height, "REMETENTE", y);
    ctx.set_fill_color(palette.text);
    y = frame.paragraph(ctx, &label.sender, FontWeight::Regular, 11.0, y);
    y += SECTION_GAP;

    if let Some(observation) = &label.observation {
        frame.shaded_block(ctx, palette, "Observação:", observation, FontWeight::Regular, y);
    }

    if label.has_instructions() {
        let top = frame.bottom + SECTION_GAP;
        ctx.set_stroke_color(palette.rule);
        ctx.set_line_width(1.0);
        ctx.rect(Rect::new(frame.left, top, frame.width, INSTRUCTION_BOX_HEIGHT), PaintMode::Stroke);
        stats.has_instruction_box = true;

        ctx.set_fill_color(palette.text);
        ctx.set_font(FontWeight::Bold, 10.0);
        ctx.draw_text("INSTRUÇÕES DE MANUSEIO", frame.left + BLOCK_PADDING, baseline(top + BLOCK_PADDING, 10.0), TextAlign::Left);

        let icon_y = top + 42.0;
        let mut x = frame.left + BLOCK_PADDING + layout.icon_pitch / 2.0;
        for &instruction in &label.instructions {
            glyphs::draw_glyph(ctx, instruction, Point::new(x, icon_y), palette);
            ctx.set_fill_color(palette.text);
            ctx.set_font(FontWeight::Regular, 7.0);
            ctx.draw_text(instruction.caption(), x, icon_y + glyphs::GLYPH_RADIUS + 12.0, TextAlign::Center);
            x += layout.icon_pitch;
            stats.instruction_icons += 1;
        }
    }

    if frame.truncated {
        log::warn!("Label {} ({}) was cut short to fit its page", label.position, label.company_name);
        stats.truncated = true;
    }

    // Footer
    ctx.set_stroke_color(palette.rule);
    ctx.set_line_width(0.5);
    ctx.line(Point::new(frame.left, footer_top), Point::new(frame.left + frame.width, footer_top));
    ctx.set_fill_color(palette.text);
    ctx.set_font(FontWeight::Regular, 9.0);
    ctx.draw_text(
        &format!("Selo {} de {} | {}", label.position, total, date),
        page.width / 2.0,
        footer_top + 17.0,
        TextAlign::Center,
    );

    stats
}

/// The page body: its horizontal extent and the lowest point text may reach.
struct Frame {
    left: f32,
    width: f32,
    bottom: f32,
    line_height: f32,
    /// Set once any block had to drop content to stay above `bottom`.
    truncated: bool,
}

impl Frame {
    /// Lines of `size` text that fit between `top` and the frame bottom.
    fn lines_fitting(&self, top: f32, size: f32) -> usize {
        ((self.bottom - top) / (size * self.line_height)).floor().max(0.0) as usize
    }

    /// Wrapped text starting at `top`; returns the cursor below it.
    fn paragraph<C: DrawingContext>(&mut self, ctx: &mut C, text: &str, weight: FontWeight, size: f32, top: f32) -> f32 {
        ctx.set_font(weight, size);
        let max_lines = self.lines_fitting(top, size);
        if ctx.count_wrapped_lines(text, self.width) > max_lines {
            self.truncated = true;
        }
        let lines = ctx.draw_wrapped_text(
            text,
            self.left,
            baseline(top, size),
            self.width,
            self.line_height,
            max_lines,
            TextAlign::Left,
        );
        top + lines as f32 * size * self.line_height
    }

    fn banner<C: DrawingContext>(&mut self, ctx: &mut C, palette: &Palette, height: f32, title: &str, top: f32) -> f32 {
        if top + height > self.bottom {
            self.truncated = true;
            return top;
        }
        ctx.set_fill_color(palette.primary);
        ctx.rect(Rect::new(self.left, top, self.width, height), PaintMode::Fill);
        ctx.set_fill_color(palette.on_primary);
        ctx.set_font(FontWeight::Bold, 11.0);
        ctx.draw_text(title, self.left + BLOCK_PADDING, top + height / 2.0 + 4.0, TextAlign::Left);
        top + height + 10.0
    }

    /// A shaded box with a small bold title above wrapped body text.
    fn shaded_block<C: DrawingContext>(
        &mut self,
        ctx: &mut C,
        palette: &Palette,
        title: &str,
        body: &str,
        body_weight: FontWeight,
        top: f32,
    ) -> f32 {
        const TITLE_SIZE: f32 = 10.0;
        const BODY_SIZE: f32 = 12.0;
        let inner_width = self.width - 2.0 * BLOCK_PADDING;
        let body_top = top + BLOCK_PADDING + TITLE_SIZE + 6.0;

        ctx.set_font(body_weight, BODY_SIZE);
        let wanted = ctx.count_wrapped_lines(body, inner_width).max(1);
        let available = self.lines_fitting(body_top + BLOCK_PADDING, BODY_SIZE);
        if wanted > available {
            self.truncated = true;
        }
        let lines = wanted.min(available);
        if lines == 0 {
            return top;
        }
        let height = body_top - top + lines as f32 * BODY_SIZE * self.line_height + BLOCK_PADDING;

        ctx.set_fill_color(palette.shade);
        ctx.rect(Rect::new(self.left, top, self.width, height), PaintMode::Fill);

        ctx.set_fill_color(palette.text);
        ctx.set_font(FontWeight::Bold, TITLE_SIZE);
        ctx.draw_text(title, self.left + BLOCK_PADDING, baseline(top + BLOCK_PADDING, TITLE_SIZE), TextAlign::Left);
        ctx.set_font(body_weight, BODY_SIZE);
        ctx.draw_wrapped_text(
            body,
            self.left + BLOCK_PADDING,
            baseline(body_top, BODY_SIZE),
            inner_width,
            self.line_height,
            lines,
            TextAlign::Left,
        );

        top + height + SECTION_GAP
    }
}
