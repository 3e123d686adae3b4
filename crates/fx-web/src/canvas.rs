use crate::dom;
use anyhow::anyhow;
use fx_core::{Canvas2d, ColorStop, Rect, Rgb, Shape};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Canvas2d` over an HTML canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[allow(deprecated)]
    fn fill_with(&self, style: &JsValue) {
        self.ctx.set_fill_style(style);
    }

    fn trace(&self, shape: &Shape) {
        self.ctx.begin_path();
        match shape {
            Shape::Circle { radius } => {
                let _ = self.ctx.arc(0.0, 0.0, *radius as f64, 0.0, TAU);
            }
            Shape::Rect { origin, size } => {
                self.ctx.rect(
                    origin.x as f64,
                    origin.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
            }
            Shape::Polygon(points) => {
                let mut points = points.iter();
                if let Some(first) = points.next() {
                    self.ctx.move_to(first.x as f64, first.y as f64);
                    for p in points {
                        self.ctx.line_to(p.x as f64, p.y as f64);
                    }
                    self.ctx.close_path();
                }
            }
        }
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        if let Err(e) = gradient.add_color_stop(stop.offset, &stop.css()) {
            log::debug!("[canvas] rejected color stop {:?}: {:?}", stop, e);
        }
    }
}

impl Canvas2d for CanvasSurface {
    fn bounding_rect(&self) -> Rect {
        dom::rect_of(&self.canvas)
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
    }

    fn scale(&mut self, factor: f64) {
        let _ = self.ctx.scale(factor, factor);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[canvas] radial gradient failed: {:?}", e);
                return;
            }
        };
        add_stops(&gradient, stops);
        self.fill_with(&gradient);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, stops: &[ColorStop], width: f32) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        add_stops(&gradient, stops);
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_shape(&mut self, origin: Vec2, rotation: f32, alpha: f32, color: Rgb, shape: &Shape) {
        self.ctx.save();
        let _ = self.ctx.translate(origin.x as f64, origin.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        self.ctx.set_global_alpha(alpha as f64);
        self.fill_with(&JsValue::from_str(&color.hex()));
        self.trace(shape);
        self.ctx.fill();
        self.ctx.restore();
    }
}
