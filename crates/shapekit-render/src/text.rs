//! Text layout with Parley.

use kurbo::Size;
use parley::{FontContext, Layout, LayoutContext, StyleProperty};
use peniko::{Brush, Color};
use shapekit_core::paint::TextMetrics;
use shapekit_core::style::{FontSpec, TextStyle};
use std::borrow::Cow;
use std::cell::RefCell;

/// Families tried when a font does not name one.
const FALLBACK_STACK: &str = "system-ui, sans-serif";

/// Font and layout contexts shared by drawing and measuring.
pub struct TextShaper {
    font_cx: FontContext,
    layout_cx: LayoutContext<Brush>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        Self {
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Lay out a single unwrapped line of `text`.
    pub fn layout(&mut self, text: &str, font: &FontSpec, color: Color) -> Layout<Brush> {
        let stack = match &font.family {
            Some(family) => parley::FontStack::Single(parley::FontFamily::Named(Cow::Borrowed(family.as_str()))),
            None => parley::FontStack::Source(Cow::Borrowed(FALLBACK_STACK)),
        };

        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font.size as f32));
        builder.push_default(StyleProperty::Brush(Brush::Solid(color)));
        builder.push_default(StyleProperty::FontStack(stack));
        let mut layout = builder.build(text);

        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        layout
    }

    pub fn layout_styled(&mut self, text: &str, style: &TextStyle) -> Layout<Brush> {
        self.layout(text, &style.font, style.color.into())
    }

    pub fn measure(&mut self, text: &str, font: &FontSpec) -> Size {
        let layout = self.layout(text, font, Color::BLACK);
        Size::new(layout.width() as f64, layout.height() as f64)
    }
}

/// [`TextMetrics`] backed by real font data.
///
/// Use it with `DisplayList::with_metrics` so that widgets size text the
/// same way the renderer draws it.
#[derive(Default)]
pub struct ParleyMetrics {
    shaper: RefCell<TextShaper>,
}

impl ParleyMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextMetrics for ParleyMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        self.shaper.borrow_mut().measure(text, font)
    }
}
