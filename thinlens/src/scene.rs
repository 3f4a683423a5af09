#![warn(missing_docs)]
//! State of the interactive simulation
//!
//! Each [`ParameterKind`] is controlled by a [`ParameterControl`], a slider paired with an editable
//! text field. Only one of them is authoritative at any time, which is tracked by the [`EditMode`]
//! of the control:
//!
//! - [`EditMode::Idle`]: the slider determines the value, the text field mirrors it.
//! - [`EditMode::EditingText`]: the text field has the focus. Whenever its buffer parses into a value
//!   within the range of the parameter, this value is taken and the slider follows. Otherwise the
//!   last valid value is kept.
//!
//! The [`Scene`] owns the controls, the current [`LensParameters`] and the drawing [`Layout`]. User
//! input is queued via [`Scene::push_event`] and processed once per frame by [`Scene::update`].
use std::collections::VecDeque;

use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::{
    error::LensResult,
    geometry::{Layout, RayDiagram},
    optics::ImageResult,
    parameters::{LensParameters, ParameterKind, ParameterRange},
};

/// Maximum number of characters of a text field
pub const MAX_TEXT_LENGTH: usize = 5;

/// Which widget of a [`ParameterControl`] is authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// the slider determines the value
    #[default]
    Idle,
    /// the text field has the focus and is being edited
    EditingText,
}

/// A horizontal slider within a [`ParameterRange`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    range: ParameterRange,
    value: f64,
    dragging: bool,
}
impl Slider {
    /// Creates a new [`Slider`]. The value is clamped to the given range.
    #[must_use]
    pub fn new(range: ParameterRange, value: f64) -> Self {
        Self {
            range,
            value: range.clamp(value),
            dragging: false,
        }
    }
    /// current value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
    /// range of the slider
    #[must_use]
    pub const fn range(&self) -> ParameterRange {
        self.range
    }
    /// relative position of the knob (0.0 ..= 1.0)
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.range.fraction_of(self.value)
    }
    /// Returns `true` while the knob is pressed.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }
    /// Set the value. Values outside of the range are clamped, `NaN` is ignored.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_nan() {
            self.value = self.range.clamp(value);
        }
    }
    /// Press the track at the given relative position. The knob jumps there and follows
    /// subsequent [`drag`](Self::drag) calls.
    pub fn press(&mut self, fraction: f64) {
        self.dragging = true;
        self.set_value(self.range.value_at_fraction(fraction));
    }
    /// Move the pressed knob to the given relative position.
    pub fn drag(&mut self, fraction: f64) {
        if self.dragging {
            self.set_value(self.range.value_at_fraction(fraction));
        }
    }
    /// Release the knob.
    pub fn release(&mut self) {
        self.dragging = false;
    }
}

/// Editable numeric text buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    buffer: String,
}
impl TextField {
    /// Creates a new [`TextField`] with the given initial content.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            buffer: text.to_owned(),
        }
    }
    /// current content
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn text(&self) -> &str {
        &self.buffer
    }
    /// Append a character.
    ///
    /// Only digits and a single decimal point are accepted, up to [`MAX_TEXT_LENGTH`] characters.
    /// Returns `true` if the character was appended.
    pub fn insert(&mut self, c: char) -> bool {
        if self.buffer.chars().count() >= MAX_TEXT_LENGTH {
            return false;
        }
        if c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')) {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }
    /// Remove the last character (if any).
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }
    /// Replace the content.
    pub fn set_text(&mut self, text: String) {
        self.buffer = text;
    }
    /// Parse the content. Returns `None` for empty or malformed content.
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        self.buffer.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Keyboard input for a focused text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// a printable character
    Char(char),
    /// remove the last character
    Backspace,
    /// confirm the input
    Enter,
}

/// Input events of a single [`ParameterControl`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// slider track pressed at a relative position
    SliderPressed(f64),
    /// pressed slider knob moved to a relative position
    SliderDragged(f64),
    /// slider knob released
    SliderReleased,
    /// slider set to an absolute value (e.g. by a native range input)
    SliderSet(f64),
    /// text field gained the focus
    TextFocused,
    /// text field lost the focus
    TextBlurred,
    /// key pressed while the text field has the focus
    Key(Key),
}

/// A slider and a text field controlling one lens parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterControl {
    kind: ParameterKind,
    slider: Slider,
    text_field: TextField,
    mode: EditMode,
    value: f64,
}
impl ParameterControl {
    /// Creates a new [`ParameterControl`] with the given initial value (clamped to the range of the
    /// parameter).
    #[must_use]
    pub fn new(kind: ParameterKind, value: f64) -> Self {
        let slider = Slider::new(kind.range(), value);
        Self {
            kind,
            slider,
            text_field: TextField::new(&format_value(slider.value())),
            mode: EditMode::Idle,
            value: slider.value(),
        }
    }
    /// the controlled parameter
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }
    /// the last resolved (valid) value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
    /// the slider
    #[must_use]
    pub const fn slider(&self) -> &Slider {
        &self.slider
    }
    /// the text field
    #[must_use]
    pub const fn text_field(&self) -> &TextField {
        &self.text_field
    }
    /// the current edit mode
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }
    /// Process an input event.
    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SliderPressed(fraction) => {
                self.end_edit();
                self.slider.press(fraction);
            }
            ControlEvent::SliderDragged(fraction) => self.slider.drag(fraction),
            ControlEvent::SliderReleased => self.slider.release(),
            ControlEvent::SliderSet(value) => {
                self.end_edit();
                self.slider.set_value(value);
            }
            ControlEvent::TextFocused => self.mode = EditMode::EditingText,
            ControlEvent::TextBlurred => self.end_edit(),
            ControlEvent::Key(key) => {
                if self.mode != EditMode::EditingText {
                    debug!("ignoring key {key:?} for unfocused field {}", self.kind);
                    return;
                }
                match key {
                    Key::Char(c) => {
                        self.text_field.insert(c);
                    }
                    Key::Backspace => self.text_field.backspace(),
                    Key::Enter => self.end_edit(),
                }
            }
        }
    }
    /// Leave [`EditMode::EditingText`]. A valid buffer is taken over, an invalid one is reverted to
    /// the last valid value.
    pub fn end_edit(&mut self) {
        if self.mode != EditMode::EditingText {
            return;
        }
        self.mode = EditMode::Idle;
        if let Some(value) = self.valid_input() {
            self.value = value;
            self.slider.set_value(value);
        } else {
            debug!(
                "discarding input '{}' for {}",
                self.text_field.text(),
                self.kind
            );
            self.slider.set_value(self.value);
        }
        self.text_field.set_text(format_value(self.value));
    }
    /// Determine the current value from the authoritative widget.
    pub fn resolve(&mut self) -> f64 {
        match self.mode {
            EditMode::EditingText => {
                if let Some(value) = self.valid_input() {
                    self.value = value;
                    self.slider.set_value(value);
                }
            }
            EditMode::Idle => {
                self.value = self.slider.value();
                self.text_field.set_text(format_value(self.value));
            }
        }
        self.value
    }
    fn valid_input(&self) -> Option<f64> {
        self.text_field
            .parse()
            .filter(|v| self.kind.range().contains(*v))
    }
}
fn format_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Input events of a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// an event for the control of the given parameter
    Control {
        /// addressed parameter
        kind: ParameterKind,
        /// the event
        event: ControlEvent,
    },
    /// the drawing area was resized (in pixels)
    Resize {
        /// new width
        width: f64,
        /// new height
        height: f64,
    },
    /// restore the initial values of all parameters
    Reset,
}

/// Result of a single [`Scene::update`]
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    parameters: LensParameters,
    image: LensResult<ImageResult>,
    diagram: RayDiagram,
}
impl Frame {
    /// the parameters used for this frame
    #[must_use]
    pub const fn parameters(&self) -> &LensParameters {
        &self.parameters
    }
    /// the calculated image or the reason why no finite image is formed
    #[must_use]
    pub const fn image(&self) -> &LensResult<ImageResult> {
        &self.image
    }
    /// the ray diagram to be drawn
    #[must_use]
    pub const fn diagram(&self) -> &RayDiagram {
        &self.diagram
    }
}

/// The interactive simulation
#[derive(Debug, Clone)]
pub struct Scene {
    controls: Vec<ParameterControl>,
    parameters: LensParameters,
    layout: Layout,
    events: VecDeque<SceneEvent>,
}
impl Default for Scene {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
impl Scene {
    /// Creates a new [`Scene`] with the initial parameter values.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            controls: initial_controls(),
            parameters: LensParameters::default(),
            layout,
            events: VecDeque::new(),
        }
    }
    /// the parameters resolved by the last [`update`](Self::update)
    #[must_use]
    pub const fn parameters(&self) -> &LensParameters {
        &self.parameters
    }
    /// the current drawing layout
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }
    /// all controls in the order of [`ParameterKind::iter`]
    #[must_use]
    pub fn controls(&self) -> &[ParameterControl] {
        &self.controls
    }
    /// the control of the given parameter
    #[must_use]
    pub fn control(&self, kind: ParameterKind) -> &ParameterControl {
        &self.controls[slot(kind)]
    }
    /// number of queued, not yet processed events
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
    /// Queue an input event. It is processed during the next [`update`](Self::update).
    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push_back(event);
    }
    /// Process all queued events, resolve the parameter values and calculate a new [`Frame`].
    pub fn update(&mut self) -> Frame {
        while let Some(event) = self.events.pop_front() {
            self.apply(event);
        }
        let mut parameters = self.parameters;
        for control in &mut self.controls {
            let kind = control.kind();
            let value = control.resolve();
            match parameters.with_value_cm(kind, value) {
                Ok(p) => parameters = p,
                Err(e) => warn!("keeping previous value of {kind}: {e}"),
            }
        }
        self.parameters = parameters;
        let image = parameters.image();
        let diagram = RayDiagram::new(&parameters, &image, &self.layout);
        Frame {
            parameters,
            image,
            diagram,
        }
    }
    fn apply(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::Control { kind, event } => {
                if matches!(
                    event,
                    ControlEvent::TextFocused | ControlEvent::SliderPressed(_)
                ) {
                    for control in self.controls.iter_mut().filter(|c| c.kind() != kind) {
                        control.end_edit();
                    }
                }
                self.controls[slot(kind)].handle(event);
            }
            SceneEvent::Resize { width, height } => {
                self.layout = self.layout.resized(width, height);
                debug!(
                    "drawing area resized to {} x {}",
                    self.layout.width(),
                    self.layout.height()
                );
            }
            SceneEvent::Reset => {
                self.controls = initial_controls();
                self.parameters = LensParameters::default();
            }
        }
    }
}
fn initial_controls() -> Vec<ParameterControl> {
    ParameterKind::iter()
        .map(|kind| ParameterControl::new(kind, kind.initial_value()))
        .collect()
}
const fn slot(kind: ParameterKind) -> usize {
    match kind {
        ParameterKind::FocalLength => 0,
        ParameterKind::ObjectDistance => 1,
        ParameterKind::ObjectHeight => 2,
    }
}
