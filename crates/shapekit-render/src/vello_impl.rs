//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use crate::text::TextShaper;
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape, Stroke};
use parley::layout::PositionedLayoutItem;
use peniko::{Brush, Color, Fill};
use shapekit_core::paint::DrawCommand;
use shapekit_core::style::TextStyle;
use std::collections::HashMap;
use std::sync::Arc;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    shaper: TextShaper,
    /// Decoded images keyed by source path. `None` marks a source that
    /// failed to load, so it is not retried every frame.
    image_cache: HashMap<String, Option<peniko::ImageData>>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            shaper: TextShaper::new(),
            image_cache: HashMap::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_command(&mut self, command: &DrawCommand, transform: Affine) {
        match command {
            DrawCommand::Fill { path, color } => {
                self.scene
                    .fill(Fill::NonZero, transform, Color::from(*color), None, path);
            }
            DrawCommand::Stroke { path, color, width } => {
                self.scene
                    .stroke(&Stroke::new(*width), transform, Color::from(*color), None, path);
            }
            DrawCommand::Text { text, style, center } => self.render_text(text, style, *center, transform),
            DrawCommand::Image { source, rect } => self.render_image(source, *rect, transform),
        }
    }

    /// Render text centred on `center` using Parley for layout.
    fn render_text(&mut self, text: &str, style: &TextStyle, center: Point, transform: Affine) {
        if text.is_empty() {
            return;
        }
        let brush = Brush::Solid(style.color.into());
        let layout = self.shaper.layout_styled(text, style);

        let width = layout.width() as f64;
        let height = layout.height() as f64;
        let text_transform =
            transform * Affine::translate((center.x - width / 2.0, center.y - height / 2.0));

        // adapted from Parley's vello example
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }
    }

    /// Render the image at `source` scaled into `rect`.
    fn render_image(&mut self, source: &str, rect: Rect, transform: Affine) {
        let cached = match self.image_cache.get(source) {
            Some(cached) => cached.clone(),
            None => {
                let decoded = match decode_image(source) {
                    Ok(data) => Some(data),
                    Err(err) => {
                        log::warn!("{}", err);
                        None
                    }
                };
                self.image_cache.insert(source.to_string(), decoded.clone());
                decoded
            }
        };
        let Some(image_data) = cached else {
            self.render_image_placeholder(rect, transform);
            return;
        };

        let scale_x = rect.width() / image_data.width as f64;
        let scale_y = rect.height() / image_data.height as f64;
        let image_transform = transform
            * Affine::translate((rect.x0, rect.y0))
            * Affine::scale_non_uniform(scale_x, scale_y);

        self.scene.draw_image(&image_data.into(), image_transform);
    }

    /// Render a placeholder for images that couldn't be loaded.
    fn render_image_placeholder(&mut self, rect: Rect, transform: Affine) {
        let rect_path = rect.to_path(0.1);
        self.scene
            .fill(Fill::NonZero, transform, Color::from_rgba8(200, 200, 200, 255), None, &rect_path);

        let stroke = Stroke::new(2.0);
        let mut x_path = BezPath::new();
        x_path.move_to(Point::new(rect.x0, rect.y0));
        x_path.line_to(Point::new(rect.x1, rect.y1));
        x_path.move_to(Point::new(rect.x1, rect.y0));
        x_path.line_to(Point::new(rect.x0, rect.y1));
        self.scene
            .stroke(&stroke, transform, Color::from_rgba8(150, 150, 150, 255), None, &x_path);
        self.scene
            .stroke(&stroke, transform, Color::from_rgba8(100, 100, 100, 255), None, &rect_path);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let transform = Affine::scale(ctx.scale_factor);
        for command in ctx.display_list.commands() {
            self.render_command(command, transform);
        }
    }
}

/// Load and decode an image file into RGBA8.
fn decode_image(source: &str) -> RenderResult<peniko::ImageData> {
    let decoded = ::image::open(source)
        .map_err(|e| RendererError::RenderFailed(format!("cannot load image {}: {}", source, e)))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(peniko::ImageData {
        data: peniko::Blob::new(Arc::new(rgba.into_vec())),
        format: peniko::ImageFormat::Rgba8,
        width,
        height,
        alpha_type: peniko::ImageAlphaType::Alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use shapekit_core::paint::{DisplayList, Painter};
    use shapekit_core::shapes::{Circle, Rectangle, Shape};
    use shapekit_core::style::{Border, Rgba8, ShapeStyle};

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_shapes() {
        let mut renderer = VelloRenderer::new();
        let mut list = DisplayList::new();
        let style = ShapeStyle::filled(Rgba8::rgb(30, 120, 200)).with_border(Border::new(Rgba8::BLACK, 2.0));
        list.shape(&Shape::from(Rectangle::new((100, 100), 200, 150).unwrap()), &style);
        list.shape(&Shape::from(Circle::new((300, 200), 40).unwrap()), &style);

        let ctx = RenderContext::new(&list, Size::new(800.0, 600.0));
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_missing_image_is_cached_as_failure() {
        let mut renderer = VelloRenderer::new();
        let mut list = DisplayList::new();
        list.image("does/not/exist.png", Rect::new(0.0, 0.0, 50.0, 50.0));

        let ctx = RenderContext::new(&list, Size::new(800.0, 600.0));
        renderer.build_scene(&ctx);
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
        assert!(matches!(renderer.image_cache.get("does/not/exist.png"), Some(None)));
    }
}
