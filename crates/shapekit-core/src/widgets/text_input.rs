//! Single-line text entry.

use super::{Button, Label, TextButton, WidgetId, new_id};
use crate::dispatch::Handler;
use crate::input::{KeyInput, PointerSample};
use crate::interaction::Interaction;
use crate::paint::Painter;
use crate::style::TextStyle;

const DEFAULT_MIN_FONT_SIZE: f64 = 10.0;

/// A button that takes keyboard text while selected.
///
/// Clicking the input selects it. Pressing the primary button anywhere
/// outside it deselects it.
#[derive(Debug)]
pub struct TextInput {
    id: WidgetId,
    field: TextButton,
    text: String,
    prefix: String,
    selected: bool,
    base_font_size: f64,
    pub min_font_size: f64,
    /// Shrink the font while the displayed text is wider than the shape.
    pub auto_shrink: bool,
    pub on_selected: Option<Handler<(), TextInput>>,
    pub on_deselect: Option<Handler<(), TextInput>>,
    pub on_text_input: Option<Handler<String, TextInput>>,
}

impl TextInput {
    pub fn new(button: Button, text_style: TextStyle) -> Self {
        let base_font_size = text_style.font.size;
        Self {
            id: new_id(),
            field: TextButton::new(button, Label::new(String::new(), text_style)),
            text: String::new(),
            prefix: String::new(),
            selected: false,
            base_font_size,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            auto_shrink: true,
            on_selected: None,
            on_deselect: None,
            on_text_input: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Text shown before the entered text. Not part of [`TextInput::text`].
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_min_font_size(mut self, size: f64) -> Self {
        self.min_font_size = size;
        self
    }

    pub fn with_auto_shrink(mut self, enabled: bool) -> Self {
        self.auto_shrink = enabled;
        self
    }

    pub fn with_on_selected(mut self, handler: Handler<(), TextInput>) -> Self {
        self.on_selected = Some(handler);
        self
    }

    pub fn with_on_deselect(mut self, handler: Handler<(), TextInput>) -> Self {
        self.on_deselect = Some(handler);
        self
    }

    pub fn with_on_text_input(mut self, handler: Handler<String, TextInput>) -> Self {
        self.on_text_input = Some(handler);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix followed by the entered text.
    pub fn displayed_text(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Font size used on the last update.
    pub fn font_size(&self) -> f64 {
        self.field.label.style.font.size
    }

    pub fn button(&self) -> &Button {
        &self.field.button
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.field.button
    }

    /// Track selection and consume `keys` if selected.
    pub fn poll(&mut self, pointer: &PointerSample, keys: &[KeyInput]) -> Interaction {
        let interaction = self.field.button.poll(pointer);

        if self.selected
            && pointer.primary_pressed
            && !self.field.button.contains(pointer.position)
        {
            self.set_selected(false);
        }
        if interaction == Interaction::Clicked && !self.selected {
            self.set_selected(true);
        }
        if self.selected {
            for key in keys {
                self.apply_key(key);
            }
        }
        interaction
    }

    /// Refresh the displayed text and fit its font to the shape.
    pub fn layout(&mut self, painter: &dyn Painter) {
        self.field.label.text = self.displayed_text();
        if self.auto_shrink {
            self.fit_font(painter);
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.field.draw(painter);
    }

    pub fn dispatch(&mut self, interaction: Interaction, pointer: &PointerSample) {
        self.field.button.dispatch(interaction, pointer);
    }

    /// Update with this frame's pointer and key input.
    pub fn update(
        &mut self,
        pointer: &PointerSample,
        keys: &[KeyInput],
        painter: &mut dyn Painter,
    ) -> Interaction {
        let interaction = self.poll(pointer, keys);
        self.layout(painter);
        self.draw(painter);
        self.dispatch(interaction, pointer);
        interaction
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        log::debug!("text input {} selected = {}", self.id, selected);
        let slot = if selected {
            &mut self.on_selected
        } else {
            &mut self.on_deselect
        };
        if let Some(mut handler) = slot.take() {
            handler.invoke((), &*self);
            let slot = if selected {
                &mut self.on_selected
            } else {
                &mut self.on_deselect
            };
            slot.get_or_insert(handler);
        }
    }

    fn apply_key(&mut self, key: &KeyInput) {
        match key {
            KeyInput::Backspace => {
                self.text.pop();
            }
            KeyInput::Text(text) => self.text.push_str(text),
        }
        if let Some(mut handler) = self.on_text_input.take() {
            handler.invoke(self.text.clone(), &*self);
            self.on_text_input.get_or_insert(handler);
        }
    }

    /// Restart from the base size and step down until the text fits.
    fn fit_font(&mut self, painter: &dyn Painter) {
        let available = self.field.button.shape.width();
        let label = &mut self.field.label;
        label.style.font.size = self.base_font_size;
        while label.measure(painter).width > available && label.style.font.size > self.min_font_size {
            label.style.font.size -= 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::DisplayList;
    use crate::shapes::Rectangle;
    use crate::style::{Rgba8, ShapeStyle};
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(x: f64, y: f64, pressed: bool) -> PointerSample {
        PointerSample::new(Point::new(x, y), pressed)
    }

    fn input() -> TextInput {
        TextInput::new(
            Button::new(Rectangle::new((100, 100), 100, 40).unwrap(), ShapeStyle::filled(Rgba8::WHITE)),
            TextStyle::sized(20.0, Rgba8::BLACK),
        )
    }

    fn text(s: &str) -> KeyInput {
        KeyInput::Text(s.to_string())
    }

    #[test]
    fn test_keys_ignored_until_selected() {
        let mut input = input();
        let mut list = DisplayList::new();
        input.update(&at(0.0, 0.0, false), &[text("a")], &mut list);
        assert_eq!(input.text(), "");

        input.update(&at(100.0, 100.0, true), &[text("h"), text("i")], &mut list);
        assert!(input.is_selected());
        assert_eq!(input.text(), "hi");
    }

    #[test]
    fn test_typing_and_backspace_fire_text_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let out = seen.clone();
        let mut input = input().with_on_text_input(Handler::value(move |t| out.borrow_mut().push(t)));
        let mut list = DisplayList::new();

        input.update(&at(100.0, 100.0, true), &[], &mut list);
        input.update(
            &at(100.0, 100.0, false),
            &[text("a"), text("b"), KeyInput::Backspace, text("c")],
            &mut list,
        );
        assert_eq!(input.text(), "ac");
        assert_eq!(*seen.borrow(), vec!["a", "ab", "a", "ac"]);
    }

    #[test]
    fn test_backspace_on_empty_text() {
        let mut input = input();
        let mut list = DisplayList::new();
        input.update(&at(100.0, 100.0, true), &[KeyInput::Backspace], &mut list);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_select_and_deselect_fire_on_transitions() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let (s, d) = (events.clone(), events.clone());
        let mut input = input()
            .with_on_selected(Handler::bare(move || s.borrow_mut().push("selected")))
            .with_on_deselect(Handler::bare(move || d.borrow_mut().push("deselect")));
        let mut list = DisplayList::new();

        input.update(&at(0.0, 0.0, true), &[], &mut list);
        input.update(&at(100.0, 100.0, false), &[], &mut list);
        input.update(&at(100.0, 100.0, true), &[], &mut list);
        input.update(&at(100.0, 100.0, true), &[], &mut list);
        input.update(&at(100.0, 100.0, false), &[], &mut list);
        input.update(&at(0.0, 0.0, true), &[], &mut list);
        input.update(&at(0.0, 0.0, true), &[], &mut list);

        assert!(!input.is_selected());
        assert_eq!(*events.borrow(), vec!["selected", "deselect"]);
    }

    #[test]
    fn test_prefix_is_displayed_not_stored() {
        let mut input = input().with_prefix("Name: ").with_text("Bo");
        let mut list = DisplayList::new();
        input.update(&at(0.0, 0.0, false), &[], &mut list);
        assert_eq!(input.text(), "Bo");
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Name: Bo"]);
    }

    #[test]
    fn test_auto_shrink_fits_width() {
        // ApproximateMetrics: 0.6 * size per char, width available is 100
        let mut input = input().with_text("abcdefghij");
        let mut list = DisplayList::new();
        input.update(&at(0.0, 0.0, false), &[], &mut list);
        assert!((input.font_size() - 16.0).abs() < f64::EPSILON);

        input.set_text("abc");
        input.update(&at(0.0, 0.0, false), &[], &mut list);
        assert!((input.font_size() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_auto_shrink_stops_at_minimum() {
        let mut input = input().with_text("a".repeat(30)).with_min_font_size(12.0);
        let mut list = DisplayList::new();
        input.update(&at(0.0, 0.0, false), &[], &mut list);
        assert!((input.font_size() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_auto_shrink_disabled() {
        let mut input = input().with_text("a".repeat(30)).with_auto_shrink(false);
        let mut list = DisplayList::new();
        input.update(&at(0.0, 0.0, false), &[], &mut list);
        assert!((input.font_size() - 20.0).abs() < f64::EPSILON);
    }
}
