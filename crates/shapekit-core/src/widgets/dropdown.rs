//! Dropdown list.

use super::{Button, Label, TextButton, WidgetError, WidgetId, WidgetResult, new_id};
use crate::dispatch::Handler;
use crate::input::PointerSample;
use crate::interaction::{Interaction, TriggerMode};
use crate::paint::Painter;
use crate::shapes::Shape;
use crate::style::{ShapeStyle, TextStyle};

/// A header button that opens a list of option buttons.
///
/// Clicking an option selects it, closes the list and shows the option's
/// text on the header.
#[derive(Debug)]
pub struct Dropdown {
    id: WidgetId,
    header: TextButton,
    options: Vec<TextButton>,
    selected: usize,
    open: bool,
    pub on_option_changed: Option<Handler<usize, Dropdown>>,
}

impl Dropdown {
    /// Build from caller-made buttons, one per option name.
    pub fn new(
        mut header: Button,
        options: Vec<Button>,
        names: impl IntoIterator<Item = impl Into<String>>,
        text_style: TextStyle,
        initial: usize,
    ) -> WidgetResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(WidgetError::NoOptions);
        }
        if options.len() != names.len() {
            return Err(WidgetError::OptionCountMismatch {
                buttons: options.len(),
                names: names.len(),
            });
        }
        if initial >= names.len() {
            return Err(WidgetError::InitialOptionOutOfRange {
                index: initial,
                len: names.len(),
            });
        }

        header.set_trigger_mode(TriggerMode::EdgeTriggered);
        let header = TextButton::new(header, Label::new(names[initial].clone(), text_style.clone()));
        let options = options
            .into_iter()
            .zip(names)
            .map(|(button, name)| TextButton::new(button, Label::new(name, text_style.clone())))
            .collect();

        Ok(Self {
            id: new_id(),
            header,
            options,
            selected: initial,
            open: false,
            on_option_changed: None,
        })
    }

    /// Options are copies of the header shape stacked below it, `y_offset`
    /// pixels apart.
    pub fn stacked(
        shape: impl Into<Shape>,
        style: ShapeStyle,
        names: impl IntoIterator<Item = impl Into<String>>,
        text_style: TextStyle,
        y_offset: i32,
        initial: usize,
    ) -> WidgetResult<Self> {
        let shape = shape.into();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let step = shape.height() as i32 + y_offset;
        let center = shape.center();

        let options = (1..=names.len() as i32)
            .map(|i| {
                let mut option = shape.clone();
                option.move_to(center.offset(0, i * step));
                Button::new(option, style)
            })
            .collect();
        Self::new(Button::new(shape, style), options, names, text_style, initial)
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_on_option_changed(mut self, handler: Handler<usize, Dropdown>) -> Self {
        self.on_option_changed = Some(handler);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_name(&self) -> &str {
        self.options[self.selected].text()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn header(&self) -> &TextButton {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut TextButton {
        &mut self.header
    }

    pub fn options(&self) -> &[TextButton] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [TextButton] {
        &mut self.options
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.header.button.poll(pointer);
        if interaction == Interaction::Clicked {
            self.open = !self.open;
            log::debug!("dropdown {} open = {}", self.id, self.open);
        }
        self.header.draw(painter);
        self.header.button.dispatch(interaction, pointer);

        let mut chosen = None;
        if self.open {
            for (i, option) in self.options.iter_mut().enumerate() {
                if option.update(pointer, painter) == Interaction::Clicked && chosen.is_none() {
                    chosen = Some(i);
                }
            }
        }
        if let Some(index) = chosen {
            self.choose(index);
        }
        interaction
    }

    fn choose(&mut self, index: usize) {
        self.selected = index;
        self.open = false;
        let name = self.options[index].text().to_string();
        log::debug!("dropdown {} selected {} ({})", self.id, index, name);
        self.header.set_text(name);

        if let Some(mut handler) = self.on_option_changed.take() {
            handler.invoke(index, &*self);
            self.on_option_changed.get_or_insert(handler);
        }
    }
}
