//! Buttons that restyle themselves per interaction.

use crate::input::PointerSample;
use crate::interaction::{Interaction, TriggerMode};
use crate::paint::Painter;
use crate::shapes::{Shape, ShapeError, ShapeSize};
use crate::style::Rgba8;
use crate::widgets::{Button, WidgetResult};
use serde::{Deserialize, Serialize};

/// Fill colour for each interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateColours {
    pub normal: Rgba8,
    pub hover: Rgba8,
    pub click: Rgba8,
}

impl StateColours {
    pub fn new(normal: impl Into<Rgba8>, hover: impl Into<Rgba8>, click: impl Into<Rgba8>) -> Self {
        Self {
            normal: normal.into(),
            hover: hover.into(),
            click: click.into(),
        }
    }

    pub fn pick(&self, interaction: Interaction) -> Rgba8 {
        match interaction {
            Interaction::Clicked => self.click,
            Interaction::Hovered => self.hover,
            Interaction::Normal => self.normal,
        }
    }
}

/// Image source for each interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateImages {
    pub normal: String,
    pub hover: String,
    pub click: String,
}

impl StateImages {
    pub fn new(normal: impl Into<String>, hover: impl Into<String>, click: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            hover: hover.into(),
            click: click.into(),
        }
    }

    pub fn pick(&self, interaction: Interaction) -> &str {
        match interaction {
            Interaction::Clicked => &self.click,
            Interaction::Hovered => &self.hover,
            Interaction::Normal => &self.normal,
        }
    }
}

/// Shape size for each interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSizes {
    pub normal: ShapeSize,
    pub hover: ShapeSize,
    pub click: ShapeSize,
}

impl StateSizes {
    /// Rectangle `(width, height)` per interaction.
    pub fn extents(normal: (i32, i32), hover: (i32, i32), click: (i32, i32)) -> Self {
        let extent = |(width, height)| ShapeSize::Extent { width, height };
        Self {
            normal: extent(normal),
            hover: extent(hover),
            click: extent(click),
        }
    }

    /// Circle radius per interaction.
    pub fn radii(normal: i32, hover: i32, click: i32) -> Self {
        Self {
            normal: ShapeSize::Radius(normal),
            hover: ShapeSize::Radius(hover),
            click: ShapeSize::Radius(click),
        }
    }

    pub fn pick(&self, interaction: Interaction) -> ShapeSize {
        match interaction {
            Interaction::Clicked => self.click,
            Interaction::Hovered => self.hover,
            Interaction::Normal => self.normal,
        }
    }

    /// Check every size against `shape` and apply the normal one.
    pub(crate) fn fit(&self, shape: &mut Shape) -> Result<(), ShapeError> {
        let mut trial = shape.clone();
        for size in [self.hover, self.click, self.normal] {
            trial.resize(size)?;
        }
        *shape = trial;
        Ok(())
    }
}

/// A button whose fill, image and size follow its interaction.
///
/// The button is switched to continuous triggering so that the click style
/// holds for as long as the button is pressed.
#[derive(Debug)]
pub struct ReactiveButton {
    pub button: Button,
    colours: Option<StateColours>,
    images: Option<StateImages>,
    sizes: Option<StateSizes>,
}

impl ReactiveButton {
    pub fn new(mut button: Button) -> Self {
        button.set_trigger_mode(TriggerMode::Continuous);
        Self {
            button,
            colours: None,
            images: None,
            sizes: None,
        }
    }

    pub fn with_colours(mut self, colours: StateColours) -> Self {
        self.button.style.fill = colours.normal;
        self.colours = Some(colours);
        self
    }

    /// Draw an image in place of the fill, swapped per interaction.
    pub fn with_images(mut self, images: StateImages) -> Self {
        self.button.image = Some(images.normal.clone());
        self.images = Some(images);
        self
    }

    /// Fails if the button's shape cannot take these sizes.
    pub fn with_sizes(mut self, sizes: StateSizes) -> WidgetResult<Self> {
        sizes.fit(&mut self.button.shape)?;
        self.sizes = Some(sizes);
        Ok(self)
    }

    pub fn colours(&self) -> Option<&StateColours> {
        self.colours.as_ref()
    }

    pub fn images(&self) -> Option<&StateImages> {
        self.images.as_ref()
    }

    pub fn sizes(&self) -> Option<&StateSizes> {
        self.sizes.as_ref()
    }

    /// Restyle the button for `interaction`.
    pub fn apply(&mut self, interaction: Interaction) {
        if let Some(colours) = self.colours {
            self.button.style.fill = colours.pick(interaction);
        }
        if let Some(images) = &self.images {
            let source = images.pick(interaction);
            if self.button.image.as_deref() != Some(source) {
                self.button.image = Some(source.to_string());
            }
        }
        if let Some(sizes) = self.sizes {
            if let Err(err) = self.button.shape.resize(sizes.pick(interaction)) {
                log::warn!("button {}: {}", self.button.id(), err);
            }
        }
    }

    pub fn update(&mut self, pointer: &PointerSample, painter: &mut dyn Painter) -> Interaction {
        let interaction = self.button.poll(pointer);
        self.apply(interaction);
        self.button.draw(painter);
        self.button.dispatch(interaction, pointer);
        interaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Handler;
    use crate::paint::{DisplayList, DrawCommand};
    use crate::shapes::{Circle, Polygon, Rectangle};
    use crate::style::ShapeStyle;
    use crate::widgets::WidgetError;
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    const NORMAL: Rgba8 = Rgba8::rgb(200, 200, 200);
    const HOVER: Rgba8 = Rgba8::rgb(150, 150, 150);
    const CLICK: Rgba8 = Rgba8::rgb(100, 100, 100);

    fn at(x: f64, y: f64, pressed: bool) -> PointerSample {
        PointerSample::new(Point::new(x, y), pressed)
    }

    fn rect_button() -> Button {
        Button::new(Rectangle::new((50, 50), 40, 20).unwrap(), ShapeStyle::default())
    }

    #[test]
    fn test_colour_follows_interaction() {
        let mut button =
            ReactiveButton::new(rect_button()).with_colours(StateColours::new(NORMAL, HOVER, CLICK));
        assert_eq!(button.button.style.fill, NORMAL);
        let mut list = DisplayList::new();

        button.update(&at(50.0, 50.0, false), &mut list);
        button.update(&at(50.0, 50.0, true), &mut list);
        button.update(&at(50.0, 50.0, true), &mut list);
        button.update(&at(0.0, 0.0, false), &mut list);

        assert_eq!(list.fills().collect::<Vec<_>>(), vec![HOVER, CLICK, CLICK, NORMAL]);
    }

    #[test]
    fn test_image_follows_interaction() {
        let mut button = ReactiveButton::new(rect_button())
            .with_images(StateImages::new("idle.png", "over.png", "down.png"));
        assert_eq!(button.button.image.as_deref(), Some("idle.png"));
        let mut list = DisplayList::new();

        button.update(&at(0.0, 0.0, false), &mut list);
        button.update(&at(50.0, 50.0, false), &mut list);
        button.update(&at(50.0, 50.0, true), &mut list);
        button.update(&at(50.0, 50.0, false), &mut list);
        button.update(&at(0.0, 0.0, false), &mut list);

        assert_eq!(
            list.images().collect::<Vec<_>>(),
            vec!["idle.png", "over.png", "down.png", "over.png", "idle.png"]
        );
        assert_eq!(list.fills().count(), 0);
    }

    #[test]
    fn test_images_and_sizes_combine() {
        let mut button = ReactiveButton::new(rect_button())
            .with_images(StateImages::new("idle.png", "over.png", "down.png"))
            .with_sizes(StateSizes::extents((40, 20), (48, 24), (40, 20)))
            .unwrap();
        let mut list = DisplayList::new();
        button.update(&at(50.0, 50.0, false), &mut list);
        match list.commands() {
            [DrawCommand::Image { source, rect }] => {
                assert_eq!(source, "over.png");
                assert!((rect.width() - 48.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn test_rect_sizes() {
        let mut button = ReactiveButton::new(rect_button())
            .with_sizes(StateSizes::extents((40, 20), (44, 24), (36, 16)))
            .unwrap();
        let mut list = DisplayList::new();
        button.update(&at(50.0, 50.0, false), &mut list);
        assert!((button.button.shape.width() - 44.0).abs() < f64::EPSILON);
        button.update(&at(50.0, 50.0, true), &mut list);
        assert!((button.button.shape.height() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_sizes() {
        let mut button = ReactiveButton::new(Button::new(
            Circle::new((0, 0), 10).unwrap(),
            ShapeStyle::default(),
        ))
        .with_sizes(StateSizes::radii(12, 15, 8))
        .unwrap();
        assert!((button.button.shape.width() - 24.0).abs() < f64::EPSILON);
        button.apply(Interaction::Hovered);
        assert!((button.button.shape.width() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let polygon = Button::new(
            Polygon::new([(0, 0), (10, 0), (5, 10)]).unwrap(),
            ShapeStyle::default(),
        );
        let err = ReactiveButton::new(polygon)
            .with_sizes(StateSizes::radii(1, 2, 3))
            .unwrap_err();
        assert!(matches!(err, WidgetError::Shape(ShapeError::UnsupportedResize { .. })));

        assert!(ReactiveButton::new(rect_button())
            .with_sizes(StateSizes::radii(1, 2, 3))
            .is_err());
    }

    #[test]
    fn test_user_handlers_still_run() {
        let clicks = Rc::new(RefCell::new(0));
        let counter = clicks.clone();
        let mut button = ReactiveButton::new(
            rect_button().with_on_click(Handler::bare(move || *counter.borrow_mut() += 1)),
        )
        .with_colours(StateColours::new(NORMAL, HOVER, CLICK));
        let mut list = DisplayList::new();
        button.update(&at(50.0, 50.0, true), &mut list);
        button.update(&at(50.0, 50.0, true), &mut list);
        assert_eq!(*clicks.borrow(), 2);
    }
}
