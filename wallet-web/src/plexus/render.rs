//! Canvas 2D painter for plexus frames

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame::{Frame, NodeSprite, LINK_WIDTH};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "canvas: get_context threw".to_string())?
            .ok_or("canvas: missing 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "canvas: context is not 2d".to_string())?;

        Ok(Self { canvas, ctx })
    }

    /// Match the canvas to the viewport and return the new size
    pub fn fit_to_window(&self) -> (f64, f64) {
        let (width, height) = web_sys::window()
            .map(|window| {
                let dimension = |value: Result<JsValue, JsValue>| {
                    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
                };
                (dimension(window.inner_width()), dimension(window.inner_height()))
            })
            .unwrap_or((0.0, 0.0));

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    pub fn paint(&self, frame: &Frame) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );

        for layer in &frame.layers {
            for node in &layer.nodes {
                self.paint_node(node);
            }

            ctx.set_line_width(LINK_WIDTH);
            for link in &layer.links {
                ctx.begin_path();
                ctx.move_to(link.from.0, link.from.1);
                ctx.line_to(link.to.0, link.to.1);
                ctx.set_stroke_style_str(&link.color.to_string());
                ctx.stroke();
            }
        }
    }

    fn paint_node(&self, node: &NodeSprite) {
        let ctx = &self.ctx;
        match node.shadow {
            Some(shadow) => {
                ctx.set_shadow_color(&shadow.color.to_string());
                ctx.set_shadow_blur(shadow.blur);
            }
            None => ctx.set_shadow_blur(0.0),
        }

        ctx.begin_path();
        // arc only throws for a negative radius, which sprites never have
        let _ = ctx.arc(node.x, node.y, node.radius, 0.0, TAU);
        ctx.set_fill_style_str(&node.color.to_string());
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}
