//! Demo scene showing every widget.

use shapekit_core::dispatch::Handler;
use shapekit_core::input::{KeyInput, PointerSample};
use shapekit_core::paint::Painter;
use shapekit_core::presets::{
    HighlightInput, ReactiveButton, SliderReadout, StateColours, StateImages, StateSizes,
    ValueFormat,
};
use shapekit_core::shapes::{Circle, Polygon, Rectangle};
use shapekit_core::style::{Border, Rgba8, ShapeStyle, TextStyle};
use shapekit_core::widgets::{
    Button, Dropdown, Label, Orientation, Slider, TextBox, TextButton, TextInput, TickBoxLayout,
    TickBoxToggle, TickMark, WidgetResult,
};
use std::cell::RefCell;
use std::rc::Rc;

const INK: Rgba8 = Rgba8::rgb(40, 40, 48);
const PANEL: Rgba8 = Rgba8::rgb(235, 237, 242);
const ACCENT: Rgba8 = Rgba8::rgb(59, 130, 246);
const PICTURES: [&str; 3] = [
    "demos/images/normal.png",
    "demos/images/hover.png",
    "demos/images/click.png",
];

/// Shared line of text the demo handlers write to.
type Status = Rc<RefCell<String>>;

fn report(status: &Status, message: impl Into<String>) {
    let message = message.into();
    log::info!("{}", message);
    *status.borrow_mut() = message;
}

/// Every widget the toolkit offers, laid out on one screen.
#[derive(Debug)]
pub struct Gallery {
    counter: TextButton,
    clicks: Rc<RefCell<u32>>,
    reactive: ReactiveButton,
    picture: ReactiveButton,
    triangle: Button,
    horizontal: SliderReadout,
    vertical: SliderReadout,
    snap: TickBoxToggle,
    name: HighlightInput,
    status_box: TextBox,
    shapes: Dropdown,
    status: Status,
}

impl Gallery {
    pub fn new() -> WidgetResult<Self> {
        let status: Status = Rc::new(RefCell::new("Ready".to_string()));
        let clicks = Rc::new(RefCell::new(0));
        let text = TextStyle::sized(20.0, INK);
        let bordered = |fill: Rgba8| ShapeStyle::filled(fill).with_border(Border::new(INK, 2.0));

        let counted = clicks.clone();
        let counter = TextButton::new(
            Button::new(
                Rectangle::new((170, 110), 220, 50)?.with_corner_radius(8.0),
                bordered(PANEL),
            )
            .with_on_click(Handler::bare(move || *counted.borrow_mut() += 1)),
            Label::new("Click me", text.clone()),
        );

        let s = status.clone();
        let reactive = ReactiveButton::new(
            Button::new(Circle::new((400, 110), 40)?, ShapeStyle::default())
                .with_on_click(Handler::bare(move || report(&s, "Circle held"))),
        )
        .with_colours(StateColours::new(PANEL, Rgba8::rgb(190, 210, 250), ACCENT))
        .with_sizes(StateSizes::radii(40, 44, 36))?;

        let s = status.clone();
        let [normal, hover, click] = PICTURES;
        let picture = ReactiveButton::new(
            Button::new(
                Rectangle::new((700, 540), 100, 60)?,
                ShapeStyle::filled(PANEL).with_border(Border::new(INK, 1.0)),
            )
            .with_on_click(Handler::bare(move || report(&s, "Picture pressed"))),
        )
        .with_images(StateImages::new(normal, hover, click));

        let s = status.clone();
        let triangle = Button::new(
            Polygon::new([(540, 150), (640, 150), (590, 70)])?,
            bordered(Rgba8::rgb(250, 220, 160)),
        )
        .with_on_hover(Handler::value(move |pointer: PointerSample| {
            report(&s, format!("Triangle entered at ({:.0}, {:.0})", pointer.position.x, pointer.position.y));
        }));

        let track = ShapeStyle::filled(Rgba8::rgb(200, 204, 212));
        let s = status.clone();
        let horizontal = SliderReadout::new(
            Slider::new(Orientation::Horizontal, (250, 250), 300, 8, 0.0, 100.0, 25.0, track)?
                .with_knob_style(bordered(Rgba8::WHITE))
                .with_on_value_changed(Handler::value(move |value: f64| {
                    report(&s, format!("Volume {:.0}", value));
                })),
            Label::new("", text.clone()),
            (450, 250),
        );

        let vertical = SliderReadout::new(
            Slider::new(Orientation::Vertical, (820, 300), 200, 8, 0.0, 1.0, 0.5, track)?
                .with_knob_style(bordered(Rgba8::WHITE)),
            Label::new("", text.clone()),
            (820, 430),
        )
        .with_format(ValueFormat::OneDecimal);

        let s = status.clone();
        let mut snap = TickBoxToggle::new(
            (200, 360),
            240,
            50,
            bordered(PANEL),
            bordered(Rgba8::WHITE),
            TickMark::new(ACCENT, 4.0),
            Label::new("Snap to grid", text.clone()),
            TickBoxLayout::default(),
            false,
        )?
        .with_corner_radii(8.0, 4.0);
        snap.toggle.on_value_changed = Some(Handler::value(move |on: bool| {
            report(&s, if on { "Snapping on" } else { "Snapping off" });
        }));

        let s = status.clone();
        let name = HighlightInput::new(
            TextInput::new(
                Button::new(Rectangle::new((250, 470), 300, 44)?, bordered(PANEL)),
                text.clone(),
            )
            .with_prefix("Name: ")
            .with_on_deselect(Handler::with_source(move |_, input: &TextInput| {
                report(&s, format!("Hello, {}", input.text()));
            })),
            PANEL,
            Rgba8::WHITE,
        )
        .with_sizes(StateSizes::extents((300, 44), (306, 46), (300, 44)))?;

        let status_box = TextBox::new(
            Rectangle::new((512, 640), 700, 44)?,
            ShapeStyle::filled(Rgba8::TRANSPARENT),
            Label::new("", TextStyle::sized(18.0, INK)),
        );

        let s = status.clone();
        let shapes = Dropdown::stacked(
            Rectangle::new((540, 360), 160, 36)?,
            bordered(Rgba8::WHITE),
            ["Rectangle", "Circle", "Triangle"],
            text,
            4,
            0,
        )?
        .with_on_option_changed(Handler::with_source(move |_, dropdown: &Dropdown| {
            report(&s, format!("Picked {}", dropdown.selected_name()));
        }));

        Ok(Self {
            counter,
            clicks,
            reactive,
            picture,
            triangle,
            horizontal,
            vertical,
            snap,
            name,
            status_box,
            shapes,
            status,
        })
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    pub fn clicks(&self) -> u32 {
        *self.clicks.borrow()
    }

    /// Run one frame of every widget.
    pub fn update(&mut self, pointer: &PointerSample, keys: &[KeyInput], painter: &mut dyn Painter) {
        self.counter.update(pointer, painter);
        let clicks = self.clicks();
        if clicks > 0 {
            self.counter.set_text(format!("Clicked {} times", clicks));
        }

        self.reactive.update(pointer, painter);
        self.picture.update(pointer, painter);
        self.triangle.update(pointer, painter);
        self.horizontal.update(pointer, painter);
        self.vertical.update(pointer, painter);
        self.snap.update(pointer, painter);
        self.name.update(pointer, keys, painter);

        self.status_box.set_text(self.status());
        self.status_box.draw(painter);

        // drawn last so the open list covers everything else
        self.shapes.update(pointer, painter);
    }
}
