//! Text input that shows its selection through colour and size.

use super::StateSizes;
use crate::input::{KeyInput, PointerSample};
use crate::interaction::{Interaction, TriggerMode};
use crate::paint::Painter;
use crate::style::Rgba8;
use crate::widgets::{TextInput, WidgetResult};

#[derive(Debug)]
pub struct HighlightInput {
    pub input: TextInput,
    pub deselected: Rgba8,
    pub selected: Rgba8,
    sizes: Option<StateSizes>,
}

impl HighlightInput {
    pub fn new(mut input: TextInput, deselected: impl Into<Rgba8>, selected: impl Into<Rgba8>) -> Self {
        input.button_mut().set_trigger_mode(TriggerMode::Continuous);
        let deselected = deselected.into();
        input.button_mut().style.fill = deselected;
        Self {
            input,
            deselected,
            selected: selected.into(),
            sizes: None,
        }
    }

    /// Fails if the input's shape cannot take these sizes.
    pub fn with_sizes(mut self, sizes: StateSizes) -> WidgetResult<Self> {
        sizes.fit(&mut self.input.button_mut().shape)?;
        self.sizes = Some(sizes);
        Ok(self)
    }

    pub fn sizes(&self) -> Option<&StateSizes> {
        self.sizes.as_ref()
    }

    fn apply(&mut self, interaction: Interaction) {
        let fill = if self.input.is_selected() {
            self.selected
        } else {
            self.deselected
        };
        let sizes = self.sizes;
        let id = self.input.id();
        let button = self.input.button_mut();
        button.style.fill = fill;
        if let Some(sizes) = sizes {
            if let Err(err) = button.shape.resize(sizes.pick(interaction)) {
                log::warn!("text input {}: {}", id, err);
            }
        }
    }

    pub fn update(
        &mut self,
        pointer: &PointerSample,
        keys: &[KeyInput],
        painter: &mut dyn Painter,
    ) -> Interaction {
        let interaction = self.input.poll(pointer, keys);
        self.apply(interaction);
        self.input.layout(painter);
        self.input.draw(painter);
        self.input.dispatch(interaction, pointer);
        interaction
    }
}
