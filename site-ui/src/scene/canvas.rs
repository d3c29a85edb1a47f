//! Canvas Surface
//!
//! Paints a projected [`SceneFrame`] with `CanvasRenderingContext2d`:
//! white stars, two white strand polylines and glowing category spheres.

use dois_de_muitos::scene::{RenderSurface, SceneFrame, ScreenPoint, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

const BACKGROUND: &str = "#000000";
const STAR_COLOR: &str = "#ffffff";
const STRAND_COLOR: &str = "#ffffff";

/// Stars smaller than this still get a visible dot
pub const MIN_STAR_RADIUS: f64 = 0.5;
/// Marker glow, in pixels
pub const MARKER_GLOW: f64 = 12.0;

/// Canvas appended to the mount element
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Create the canvas and its 2D context; `None` when the browser refuses
    pub fn create(document: &Document) -> Option<Self> {
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            _ => return None,
        };

        let style = canvas.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");

        Some(Self { canvas, ctx })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn fill_circle(&self, center: &ScreenPoint, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        self.ctx.fill();
    }

    fn stroke_polyline(&self, points: &[ScreenPoint]) {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in iter {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}

impl RenderSurface for CanvasSurface {
    fn set_size(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn draw(&mut self, frame: &SceneFrame) {
        let width = frame.viewport.width as f64;
        let height = frame.viewport.height as f64;

        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style(&BACKGROUND.into());
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style(&STAR_COLOR.into());
        for star in &frame.stars {
            self.fill_circle(&star.point, star_radius(star.radius));
        }

        self.ctx.set_stroke_style(&STRAND_COLOR.into());
        self.ctx.set_line_width(1.0);
        for strand in &frame.strands {
            self.stroke_polyline(strand);
        }

        self.ctx.set_shadow_blur(MARKER_GLOW);
        for marker in &frame.markers {
            self.ctx.set_fill_style(&marker.color.into());
            self.ctx.set_shadow_color(marker.color);
            self.fill_circle(&marker.point, marker.radius as f64);
        }
        self.ctx.set_shadow_blur(0.0);
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}

/// Pixel radius a star is painted with
pub fn star_radius(projected: f32) -> f64 {
    (projected as f64).max(MIN_STAR_RADIUS)
}
