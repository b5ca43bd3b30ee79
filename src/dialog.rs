//! Modal dialog session around a [`ColorSynchronizer`].

use heapless::String;
use log::debug;
use palette::Srgba;

use crate::command::PickerAction;
use crate::layout::PickerLayout;
use crate::synchronizer::{ColorSink, ColorSynchronizer};

/// Maximum title length in bytes.
pub const TITLE_CAPACITY: usize = 64;

/// Dialog session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogState {
    /// Never shown.
    Hidden,
    /// Shown and accepting input.
    Open,
    /// Closed with OK. The live color was kept.
    Accepted,
    /// Closed with Cancel. The color it was shown with was restored.
    Cancelled,
}

/// Errors from dialog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogError {
    /// Operation not valid in current state.
    InvalidState {
        /// Human-readable description of expected state(s)
        expected: &'static str,
        /// The actual current state
        actual: DialogState,
    },
    /// Title does not fit in [`TITLE_CAPACITY`] bytes.
    TitleTooLong,
}

impl core::fmt::Display for DialogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DialogError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but dialog is in {:?}",
                    expected, actual
                )
            }
            DialogError::TitleTooLong => {
                write!(f, "title exceeds {} bytes", TITLE_CAPACITY)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialogError {}

/// Show / accept / cancel session for picking one color.
///
/// The dialog owns the picker. Input is forwarded only while the dialog is
/// open, so a closed dialog never notifies its sink.
pub struct ColorDialog<S: ColorSink> {
    picker: ColorSynchronizer<S>,
    state: DialogState,
    title: String<TITLE_CAPACITY>,
    initial: Srgba<u8>,
    result: Srgba<u8>,
}

impl<S: ColorSink> ColorDialog<S> {
    /// Creates a hidden dialog.
    pub fn new(sink: S, layout: &PickerLayout) -> Self {
        let picker = ColorSynchronizer::new(sink, layout);
        let color = picker.color();
        Self {
            picker,
            state: DialogState::Hidden,
            title: String::new(),
            initial: color,
            result: color,
        }
    }

    /// Opens the dialog showing `color`.
    ///
    /// Can be called from any state except `Open`.
    pub fn show(&mut self, color: Srgba<u8>, title: &str) -> Result<(), DialogError> {
        if self.state == DialogState::Open {
            return Err(DialogError::InvalidState {
                expected: "Hidden, Accepted, or Cancelled",
                actual: self.state,
            });
        }

        let mut stored = String::new();
        stored
            .push_str(title)
            .map_err(|_| DialogError::TitleTooLong)?;

        debug!("ColorDialog: show {:?}", color);
        self.title = stored;
        self.initial = color;
        self.result = color;
        self.picker.load_color(color);
        self.state = DialogState::Open;
        Ok(())
    }

    /// Closes the dialog keeping the live color.
    ///
    /// Must be called from `Open` state.
    pub fn accept(&mut self) -> Result<Srgba<u8>, DialogError> {
        self.require_open()?;

        self.picker.pointer_up();
        self.result = self.picker.color();
        self.state = DialogState::Accepted;
        debug!("ColorDialog: accepted {:?}", self.result);
        Ok(self.result)
    }

    /// Closes the dialog discarding every change since `show`.
    ///
    /// Must be called from `Open` state.
    pub fn cancel(&mut self) -> Result<(), DialogError> {
        self.require_open()?;

        self.picker.pointer_up();
        self.picker.load_color(self.initial);
        self.result = self.initial;
        self.state = DialogState::Cancelled;
        debug!("ColorDialog: cancelled");
        Ok(())
    }

    /// Forwards input to the picker.
    ///
    /// Must be called from `Open` state.
    ///
    /// # Returns
    /// `Ok(true)` if the color changed.
    pub fn handle_action(&mut self, action: PickerAction) -> Result<bool, DialogError> {
        self.require_open()?;
        Ok(self.picker.handle_action(action))
    }

    /// Color of the session.
    ///
    /// The live color while open, otherwise the color the last session ended with.
    pub fn color(&self) -> Srgba<u8> {
        match self.state {
            DialogState::Open => self.picker.color(),
            _ => self.result,
        }
    }

    /// Color the dialog was last shown with.
    pub fn initial_color(&self) -> Srgba<u8> {
        self.initial
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn picker(&self) -> &ColorSynchronizer<S> {
        &self.picker
    }

    fn require_open(&self) -> Result<(), DialogError> {
        if self.state != DialogState::Open {
            return Err(DialogError::InvalidState {
                expected: "Open",
                actual: self.state,
            });
        }
        Ok(())
    }
}
