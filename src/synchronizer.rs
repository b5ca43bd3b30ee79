//! Cross-model color synchronization.
//!
//! Provides [`ColorSynchronizer`] which owns the six bands, the alpha slider and
//! the seven numeric fields, and keeps them agreeing on one color. Also defines
//! the [`ColorSink`] trait through which the owner hears about changes.

use core::ops::{Deref, DerefMut};

use log::{debug, trace};
use palette::Srgba;

use crate::alpha::AlphaSlider;
use crate::band::ColorBand;
use crate::command::PickerAction;
use crate::control::{ControlEvent, InteractiveControl};
use crate::layout::PickerLayout;
use crate::numeric::NumericField;
use crate::tuple::ColorTuple;
use crate::types::{BandId, ControlId, FieldId, Point, TupleType};

/// Receiver of composed color updates.
///
/// Implement this for whatever displays or stores the picked color.
pub trait ColorSink {
    /// Called once per user-initiated change that altered the color state.
    fn color_changed(&mut self, state: &ColorState);
}

/// The color as both models plus alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorState {
    pub rgb: ColorTuple,
    pub hsb: ColorTuple,
    pub alpha: u8,
}

impl ColorState {
    /// Builds a consistent state from an 8-bit color.
    pub fn from_color(color: Srgba<u8>) -> Self {
        let pixel = color.color;
        Self {
            rgb: ColorTuple::from_pixel(pixel),
            hsb: ColorTuple::hsb_from_pixel(pixel),
            alpha: color.alpha,
        }
    }

    /// Final display color: RGB composed with alpha.
    pub fn color(&self) -> Srgba<u8> {
        self.rgb.to_color_with_alpha(TupleType::Rgb, self.alpha)
    }
}

/// Colors for the split preview swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    /// Color as of the last pointer release or load.
    pub committed: Srgba<u8>,
    /// Color under the current interaction.
    pub live: Srgba<u8>,
}

const BLACK: Srgba<u8> = Srgba::new(0, 0, 0, 255);

/// Keeps RGB bands, HSB bands, the alpha slider and the numeric fields in sync.
///
/// Every input (pointer, field edit, load) resolves to a new [`ColorState`],
/// which is then pushed into every control with outgoing events suppressed.
/// The sink is notified once, and only if the state actually changed.
///
/// # Type Parameters
/// * `S` - Sink implementation type
pub struct ColorSynchronizer<S: ColorSink> {
    sink: S,
    bands: [ColorBand; 6],
    alpha_slider: AlphaSlider,
    fields: [NumericField; 7],
    state: ColorState,
    committed: Srgba<u8>,
    active: Option<ControlId>,
    suppressed: bool,
}

/// Suppresses event dispatch until dropped.
struct Suppressed<'a, S: ColorSink> {
    sync: &'a mut ColorSynchronizer<S>,
    previous: bool,
}

impl<S: ColorSink> Deref for Suppressed<'_, S> {
    type Target = ColorSynchronizer<S>;

    fn deref(&self) -> &Self::Target {
        self.sync
    }
}

impl<S: ColorSink> DerefMut for Suppressed<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sync
    }
}

impl<S: ColorSink> Drop for Suppressed<'_, S> {
    fn drop(&mut self) {
        self.sync.suppressed = self.previous;
    }
}

impl<S: ColorSink> ColorSynchronizer<S> {
    /// Creates a synchronizer showing opaque black.
    pub fn new(sink: S, layout: &PickerLayout) -> Self {
        let bands = BandId::ALL.map(|id| ColorBand::new(id, layout.band_geometry(id)));
        let fields = FieldId::ALL.map(NumericField::new);

        let mut sync = Self {
            sink,
            bands,
            alpha_slider: AlphaSlider::new(layout.alpha_bounds(), BLACK.color),
            fields,
            state: ColorState::from_color(BLACK),
            committed: BLACK,
            active: None,
            suppressed: false,
        };
        sync.load_color(BLACK);
        sync
    }

    /// Routes a control event through the synchronization protocol.
    ///
    /// Events arriving while a push is in progress are dropped.
    ///
    /// # Returns
    /// `true` if the color state changed and the sink was notified.
    pub fn dispatch(&mut self, event: ControlEvent) -> bool {
        if self.suppressed {
            trace!("suppressed {:?}", event);
            return false;
        }
        trace!("dispatch {:?}", event);

        let next = match event {
            ControlEvent::BandChanged {
                tuple_type,
                channel,
                value,
            } => {
                let Some(id) = BandId::from_parts(tuple_type, channel) else {
                    return false;
                };
                let band = &mut self.bands[id.index()];
                if band.value() != value {
                    band.update(value);
                }
                self.state_from_bands(tuple_type)
            }
            ControlEvent::AlphaChanged { value } => {
                if self.alpha_slider.value() != value {
                    self.alpha_slider.set_alpha(i32::from(value));
                }
                ColorState {
                    alpha: value,
                    ..self.state
                }
            }
            ControlEvent::FieldChanged { field, value } => {
                self.fields[field.index()].set_from_int(value);
                self.state_from_fields(field.tuple_type())
            }
        };

        self.push(next);
        self.publish(next)
    }

    /// Handles an input action.
    ///
    /// # Returns
    /// `true` if the color state changed.
    pub fn handle_action(&mut self, action: PickerAction) -> bool {
        match action {
            PickerAction::PointerDown(point) => {
                let before = self.state;
                self.pointer_down(point);
                self.state != before
            }
            PickerAction::PointerDrag(point) => self.pointer_drag(point),
            PickerAction::PointerUp => {
                self.pointer_up();
                false
            }
            PickerAction::EditField(field, value) => self.edit_field(field, value),
            PickerAction::Load(color) => {
                let before = self.state;
                self.load_color(color);
                self.state != before
            }
        }
    }

    /// Hit-tests `point` and, on a hit, gives that control the pointer.
    ///
    /// # Returns
    /// The control that took ownership, if any.
    pub fn pointer_down(&mut self, point: Point) -> Option<ControlId> {
        let id = ControlId::HIT_ORDER
            .into_iter()
            .find(|&id| self.control(id).contains_point(point))?;

        debug!("ColorSynchronizer: started dragging {:?}", id);
        self.active = Some(id);
        let event = self.control_mut(id).update_from_point(point);
        self.dispatch(event);
        Some(id)
    }

    /// Drags the active control, if any.
    ///
    /// # Returns
    /// `true` if the color state changed.
    pub fn pointer_drag(&mut self, point: Point) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        let event = self.control_mut(id).update_from_point(point);
        self.dispatch(event)
    }

    /// Releases the pointer and commits the live color to the preview.
    ///
    /// # Returns
    /// The control that was released, if any.
    pub fn pointer_up(&mut self) -> Option<ControlId> {
        let released = self.active.take()?;
        debug!("ColorSynchronizer: stopped dragging {:?}", released);
        self.committed = self.state.color();
        Some(released)
    }

    /// Applies a numeric edit.
    ///
    /// # Returns
    /// `true` if the color state changed.
    pub fn edit_field(&mut self, field: FieldId, value: i32) -> bool {
        match self.fields[field.index()].set_value(value) {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    /// Loads an absolute color into every control without notifying the sink.
    pub fn load_color(&mut self, color: Srgba<u8>) {
        debug!("ColorSynchronizer: loading {:?}", color);
        let state = ColorState::from_color(color);
        self.push(state);
        self.state = state;
        self.committed = color;
    }

    /// Current color state.
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Current composed display color.
    pub fn color(&self) -> Srgba<u8> {
        self.state.color()
    }

    pub fn preview(&self) -> Preview {
        Preview {
            committed: self.committed,
            live: self.state.color(),
        }
    }

    /// Control currently owning the pointer.
    pub fn active_control(&self) -> Option<ControlId> {
        self.active
    }

    /// Returns true while derived state is being pushed into the controls.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn band(&self, id: BandId) -> &ColorBand {
        &self.bands[id.index()]
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn alpha_slider(&self) -> &AlphaSlider {
        &self.alpha_slider
    }

    pub fn field(&self, id: FieldId) -> &NumericField {
        &self.fields[id.index()]
    }

    pub fn fields(&self) -> &[NumericField] {
        &self.fields
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn control(&self, id: ControlId) -> &dyn InteractiveControl {
        match id {
            ControlId::Band(band) => &self.bands[band.index()],
            ControlId::Alpha => &self.alpha_slider,
        }
    }

    fn control_mut(&mut self, id: ControlId) -> &mut dyn InteractiveControl {
        match id {
            ControlId::Band(band) => &mut self.bands[band.index()],
            ControlId::Alpha => &mut self.alpha_slider,
        }
    }

    fn suppress(&mut self) -> Suppressed<'_, S> {
        let previous = self.suppressed;
        self.suppressed = true;
        Suppressed {
            sync: self,
            previous,
        }
    }

    /// Reads one model from its bands and derives the other through the pixel color.
    fn state_from_bands(&self, tuple_type: TupleType) -> ColorState {
        let read = |a: BandId, b: BandId, c: BandId| {
            ColorTuple::new(
                self.band(a).value() as f32,
                self.band(b).value() as f32,
                self.band(c).value() as f32,
            )
        };

        match tuple_type {
            TupleType::Hsb => {
                let hsb = read(BandId::Hue, BandId::Saturation, BandId::Brightness);
                ColorState {
                    rgb: ColorTuple::from_pixel(hsb.to_color(TupleType::Hsb)),
                    hsb,
                    alpha: self.state.alpha,
                }
            }
            _ => {
                let rgb = read(BandId::Red, BandId::Green, BandId::Blue);
                ColorState {
                    rgb,
                    hsb: ColorTuple::hsb_from_pixel(rgb.to_color(TupleType::Rgb)),
                    alpha: self.state.alpha,
                }
            }
        }
    }

    /// Reads one model from its fields and derives the other through the pixel color.
    fn state_from_fields(&self, tuple_type: TupleType) -> ColorState {
        match tuple_type {
            TupleType::Rgb => {
                let rgb = ColorTuple::from_rgb8(
                    self.field(FieldId::Red).value(),
                    self.field(FieldId::Green).value(),
                    self.field(FieldId::Blue).value(),
                );
                ColorState {
                    rgb,
                    hsb: ColorTuple::hsb_from_pixel(rgb.to_color(TupleType::Rgb)),
                    alpha: self.state.alpha,
                }
            }
            TupleType::Hsb => {
                let hsb = ColorTuple::new(
                    self.field(FieldId::Hue).value_scale(),
                    self.field(FieldId::Saturation).value_scale(),
                    self.field(FieldId::Brightness).value_scale(),
                );
                ColorState {
                    rgb: ColorTuple::from_pixel(hsb.to_color(TupleType::Hsb)),
                    hsb,
                    alpha: self.state.alpha,
                }
            }
            TupleType::Alpha => ColorState {
                alpha: self.field(FieldId::Alpha).value().clamp(0, 255) as u8,
                ..self.state
            },
        }
    }

    /// Writes `state` into every band, the slider and every field.
    fn push(&mut self, state: ColorState) {
        let mut sync = self.suppress();

        for id in BandId::ALL {
            let tuple = match id.tuple_type() {
                TupleType::Hsb => state.hsb,
                _ => state.rgb,
            };
            let value = tuple.channel(id.channel());
            let band = &mut sync.bands[id.index()];
            if band.value() as f32 != value {
                band.update(f64::from(value));
            }
        }
        sync.regradient(&state);

        sync.alpha_slider.set_alpha(i32::from(state.alpha));
        sync.alpha_slider.set_color(state.rgb.to_color(TupleType::Rgb));

        for id in FieldId::ALL {
            let changed = match id.tuple_type() {
                TupleType::Rgb => sync.fields[id.index()].set_from_tuple(&state.rgb),
                TupleType::Hsb => sync.fields[id.index()].set_from_tuple(&state.hsb),
                TupleType::Alpha => sync.fields[id.index()].set_value(i32::from(state.alpha)),
            };
            if let Some(event) = changed {
                sync.dispatch(event);
            }
        }
    }

    /// Gradients show each channel sweeping 0..1 with the other two held.
    fn regradient(&mut self, state: &ColorState) {
        for id in BandId::ALL {
            let tuple = match id.tuple_type() {
                TupleType::Hsb => state.hsb,
                _ => state.rgb,
            };
            let channel = id.channel();
            let start = tuple.with_channel(channel, 0.0);
            let end = tuple.with_channel(channel, 1.0);
            self.bands[id.index()].set_colors(start, end);
        }
    }

    /// Stores `next` and notifies the sink if it differs from the current state.
    fn publish(&mut self, next: ColorState) -> bool {
        if next == self.state {
            return false;
        }

        self.state = next;
        self.sink.color_changed(&next);
        true
    }
}
