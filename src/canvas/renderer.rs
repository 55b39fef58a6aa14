use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::projection::Camera;
use super::{Primitive, Viewport};

/// Glyphs thinner than this (seen edge-on) are skipped.
const MIN_GLYPH_SQUASH: f64 = 0.02;

pub fn viewport_of(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport { width, height })
}

/// Match the canvas backing store to the viewport.
pub fn resize_canvas(canvas: &HtmlCanvasElement, viewport: &Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

pub fn clear(ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
}

pub fn draw_frame(ctx: &CanvasRenderingContext2d, camera: &Camera, viewport: &Viewport, frame: &[Primitive]) {
    clear(ctx, viewport);
    ctx.save();
    ctx.set_line_width(1.0);

    for primitive in frame {
        match *primitive {
            Primitive::Point { at, size, color, alpha } => {
                let Some(p) = camera.project(at, viewport) else { continue };
                let px = (size * p.scale).max(1.0);
                ctx.set_global_alpha(alpha);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(p.x - px / 2.0, p.y - px / 2.0, px, px);
            }
            Primitive::Line { from, to, color, alpha } => {
                let (Some(a), Some(b)) = (camera.project(from, viewport), camera.project(to, viewport)) else {
                    continue;
                };
                ctx.set_global_alpha(alpha);
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
                ctx.stroke();
            }
            Primitive::Glyph { at, text, size, color, alpha, squash } => {
                if squash.0.abs() < MIN_GLYPH_SQUASH || squash.1.abs() < MIN_GLYPH_SQUASH {
                    continue;
                }
                let Some(p) = camera.project(at, viewport) else { continue };
                ctx.save();
                ctx.set_global_alpha(alpha);
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("bold {:.0}px monospace", size * p.scale));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                // Failures here only lose one glyph for one frame.
                let _ = ctx.translate(p.x, p.y);
                let _ = ctx.scale(squash.0, squash.1);
                let _ = ctx.fill_text(text, 0.0, 0.0);
                ctx.restore();
            }
        }
    }

    ctx.restore();
}
