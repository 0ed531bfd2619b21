use crate::metrics::{self, to_win_ansi};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use selo_render_core::utils::{aligned_x, flip_y};
use selo_render_core::{DrawingContext, FontWeight, PaintMode, TextAlign};
use selo_types::{Color, Point, Rect, Size};

/// Resource name of Helvetica in the page resource dictionary.
pub const REGULAR_FONT_RESOURCE: &str = "F1";
/// Resource name of Helvetica-Bold in the page resource dictionary.
pub const BOLD_FONT_RESOURCE: &str = "F2";

/// Control point distance for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

#[derive(Default, Clone, PartialEq)]
struct CanvasState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// A `DrawingContext` that records a page as lopdf content operations.
pub struct LopdfCanvas {
    page_size: Size,
    content: Content,
    state: CanvasState,
    font_weight: FontWeight,
    font_size: f32,
}

impl LopdfCanvas {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            content: Content { operations: vec![] },
            state: CanvasState::default(),
            font_weight: FontWeight::Regular,
            font_size: 12.0,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn y(&self, y: f32) -> f32 {
        flip_y(y, self.page_size.height)
    }

    fn paint(&mut self, mode: PaintMode) {
        let operator = match mode {
            PaintMode::Stroke => "S",
            PaintMode::Fill => "f",
            PaintMode::FillStroke => "B",
        };
        self.push(operator, vec![]);
    }

    fn rgb_operands(color: Color) -> Vec<Object> {
        color.to_unit_rgb().into_iter().map(Object::from).collect()
    }
}

impl DrawingContext for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", Self::rgb_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.push("RG", Self::rgb_operands(color));
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn rect(&mut self, rect: Rect, mode: PaintMode) {
        // `re` takes the lower-left corner in PDF space.
        let y = self.y(rect.bottom());
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.paint(mode);
    }

    fn circle(&mut self, center: Point, radius: f32, mode: PaintMode) {
        let cx = center.x;
        let cy = self.y(center.y);
        let k = radius * KAPPA;

        self.push("m", vec![(cx + radius).into(), cy.into()]);
        let quarters = [
            [cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius],
            [cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy],
            [cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius],
            [cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy],
        ];
        for quarter in quarters {
            self.push("c", quarter.into_iter().map(Object::from).collect());
        }
        self.push("h", vec![]);
        self.paint(mode);
    }

    fn triangle(&mut self, a: Point, b: Point, c: Point, mode: PaintMode) {
        let (ay, by, cy) = (self.y(a.y), self.y(b.y), self.y(c.y));
        self.push("m", vec![a.x.into(), ay.into()]);
        self.push("l", vec![b.x.into(), by.into()]);
        self.push("l", vec![c.x.into(), cy.into()]);
        self.push("h", vec![]);
        self.paint(mode);
    }

    fn line(&mut self, from: Point, to: Point) {
        let (fy, ty) = (self.y(from.y), self.y(to.y));
        self.push("m", vec![from.x.into(), fy.into()]);
        self.push("l", vec![to.x.into(), ty.into()]);
        self.push("S", vec![]);
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        self.font_weight = weight;
        self.font_size = size;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn measure_text(&self, text: &str) -> f32 {
        metrics::text_width(text, self.font_weight, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        if text.trim().is_empty() {
            return;
        }
        let resource = match self.font_weight {
            FontWeight::Regular => REGULAR_FONT_RESOURCE,
            FontWeight::Bold => BOLD_FONT_RESOURCE,
        };
        let left = aligned_x(x, self.measure_text(text), align);
        let baseline = self.y(y);

        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(resource.as_bytes().to_vec()), self.font_size.into()],
        );
        self.push("Td", vec![left.into(), baseline.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}
