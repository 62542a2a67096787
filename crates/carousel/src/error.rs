//! Error types for the carousel widget.

/// Result type alias for carousel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while initializing a slider.
///
/// All variants are fatal setup errors: a selector was configured but
/// resolved no elements. They are raised by [`crate::Slider::init`] before
/// any event wiring happens, so a failed init leaves no handlers attached.
/// Runtime event handling never errors; malformed events are silently
/// dropped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slide selector matched no elements.
    #[error("Slides not found")]
    SlidesNotFound {
        /// The selector that resolved nothing.
        selector: String,
    },

    /// A button selector was configured but matched no elements.
    #[error("Buttons not found")]
    ButtonsNotFound {
        /// The selector that resolved nothing.
        selector: String,
    },

    /// An indicator selector was configured but matched no elements.
    #[error("Indicators not found")]
    IndicatorsNotFound {
        /// The selector that resolved nothing.
        selector: String,
    },
}

impl Error {
    /// The selector that failed to resolve.
    pub fn selector(&self) -> &str {
        match self {
            Self::SlidesNotFound { selector }
            | Self::ButtonsNotFound { selector }
            | Self::IndicatorsNotFound { selector } => selector,
        }
    }
}
