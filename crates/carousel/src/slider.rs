//! Slider widget implementation.
//!
//! This module provides [`Slider`], an infinite-loop carousel over an
//! abstract element tree, with next/previous trigger buttons, indicator
//! dots, and change notification.
//!
//! # Slide model
//!
//! The host supplies the slide elements *including* two clone slides: a
//! duplicate of the last real slide at position 0 and a duplicate of the
//! first real slide at the end. The widget therefore works in a padded
//! index space of length N + 2 for N real slides, starting at index 1
//! (the first real slide). When a transition lands on a clone, the widget
//! silently re-jumps to the mirrored real slide with a near-zero
//! transition duration, producing the seamless-loop illusion.
//!
//! The widget never creates, destroys or reparents elements; it only
//! reads attributes and writes the track's inline transform and
//! transition duration plus the indicators' active class.
//!
//! # Example
//!
//! ```
//! use carousel::fake::{FakeElement, FakeTree};
//! use carousel::{Slider, SliderOptions};
//!
//! let mut tree = FakeTree::new();
//! tree.insert(".slider", FakeElement::generic());
//! // 3 real slides plus the two clones the markup convention requires
//! for _ in 0..5 {
//!     tree.insert(".slide", FakeElement::generic());
//! }
//!
//! let slider = Slider::new(tree, SliderOptions::new(".slider", ".slide"));
//! slider.init()?;
//! slider.subscribe(|index| println!("slide changed: {index}"));
//! assert_eq!(slider.current_index(), 1);
//! # Ok::<(), carousel::Error>(())
//! ```

use std::sync::Arc;
use std::time::Duration;

use carousel_core::Signal;
use parking_lot::Mutex;

use crate::element::{ClickEvent, Element, ElementKind, ElementTree, Transform};
use crate::error::{Error, Result};

/// Attribute naming the travel direction of a trigger button.
pub const DIRECTION_ATTRIBUTE: &str = "data-direction";

/// Attribute value selecting forward travel; any other value (or a
/// missing attribute) selects backward travel.
pub const DIRECTION_NEXT: &str = "next";

/// Default duration of a user-visible slide transition.
const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(350);

/// Near-zero duration used when snapping from a clone back to its real
/// slide, short enough to suppress a visible transition.
const SNAP_DURATION: Duration = Duration::from_millis(1);

/// Configuration for a [`Slider`].
///
/// The track and slide selectors are required; buttons and indicators are
/// optional features enabled by configuring their selectors.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use carousel::SliderOptions;
///
/// let options = SliderOptions::new(".slider", ".slide")
///     .with_buttons(".slider-btn")
///     .with_indicators(".indicator")
///     .with_indicator_active_class("indicator--active")
///     .with_transition_duration(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct SliderOptions {
    slider_selector: String,
    slide_selector: String,
    button_selector: Option<String>,
    indicator_selector: Option<String>,
    indicator_active_class: Option<String>,
    transition_duration: Duration,
}

impl SliderOptions {
    /// Create options with the two required selectors: the single track
    /// element that receives the style writes, and the slide elements.
    pub fn new(slider_selector: impl Into<String>, slide_selector: impl Into<String>) -> Self {
        Self {
            slider_selector: slider_selector.into(),
            slide_selector: slide_selector.into(),
            button_selector: None,
            indicator_selector: None,
            indicator_active_class: None,
            transition_duration: DEFAULT_TRANSITION_DURATION,
        }
    }

    /// Enable next/previous trigger buttons.
    pub fn with_buttons(mut self, selector: impl Into<String>) -> Self {
        self.button_selector = Some(selector.into());
        self
    }

    /// Enable indicator dots, one per real slide.
    pub fn with_indicators(mut self, selector: impl Into<String>) -> Self {
        self.indicator_selector = Some(selector.into());
        self
    }

    /// Class toggled on the active indicator. Defaults to the empty
    /// string when indicators are configured without one.
    pub fn with_indicator_active_class(mut self, class: impl Into<String>) -> Self {
        self.indicator_active_class = Some(class.into());
        self
    }

    /// Duration of a user-visible slide transition. Defaults to 350 ms.
    /// The clone-snap duration is fixed at 1 ms and not configurable.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// The configured transition duration.
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }
}

/// Mutable widget state behind the shared lock.
struct State<E: Element> {
    /// In-flight-transition guard; true from an accepted move request
    /// until the track's transition completes.
    moving: bool,
    /// Current position in the padded index space.
    current_index: i32,
    /// The track element, if discovery found one.
    track: Option<E>,
    /// Slide elements including the two clones.
    slides: Vec<E>,
    /// Trigger buttons, empty unless configured.
    buttons: Vec<E>,
    /// Indicator dots, empty unless configured.
    indicators: Vec<E>,
    /// Active-indicator class; `None` when indicators are not configured.
    active_class: Option<String>,
    /// Duration restored after a non-wrap transition completes.
    transition_duration: Duration,
}

impl<E: Element> State<E> {
    /// Apply the visual move: write the track offset and refresh the
    /// indicator highlighting.
    fn apply(&self) {
        let Some(track) = &self.track else { return };
        track.set_transform(Transform::translate_x(-(self.current_index as f64) * 100.0));
        self.refresh_indicators();
    }

    /// Move exactly one active class to the indicator for the current
    /// index, mapping clone indices back to real-slide ordinals: the
    /// prepended clone and the last real slide both highlight the last
    /// indicator, the appended clone and the first real slide both
    /// highlight the first.
    fn refresh_indicators(&self) {
        let Some(class) = &self.active_class else { return };

        for indicator in &self.indicators {
            indicator.remove_class(class);
        }

        let len = self.slides.len() as i32;
        let active = if self.current_index == 0 || self.current_index == len - 2 {
            self.indicators.len().checked_sub(1)
        } else if self.current_index == len - 1 || self.current_index == 1 {
            Some(0)
        } else {
            usize::try_from(self.current_index - 1).ok()
        };

        if let Some(indicator) = active.and_then(|i| self.indicators.get(i)) {
            indicator.add_class(class);
        }
    }
}

/// State and change signal shared between the widget handle and the event
/// handlers wired to the element tree.
struct Shared<E: Element> {
    state: Mutex<State<E>>,
    changed: Signal<i32>,
}

impl<E: Element> Shared<E> {
    /// Button click handler. Ignores the event while a move is in flight
    /// or when the trigger element is missing or not a button.
    fn on_button_click(&self, event: &ClickEvent<E>) {
        let Some(trigger) = event.current_target.as_ref() else {
            return;
        };
        if trigger.kind() != ElementKind::Button {
            return;
        }

        let mut state = self.state.lock();
        if state.moving {
            tracing::trace!(target: "carousel::slider", "button click ignored, move in flight");
            return;
        }
        state.moving = true;

        if trigger.attribute(DIRECTION_ATTRIBUTE).as_deref() == Some(DIRECTION_NEXT) {
            state.current_index += 1;
        } else {
            state.current_index -= 1;
        }
        state.apply();

        let index = state.current_index;
        drop(state);

        tracing::debug!(target: "carousel::slider", index, "button move accepted");
        self.changed.emit(index);
    }

    /// Indicator click handler. The clicked indicator's position within
    /// the indicator collection maps to padded index position + 1.
    ///
    /// A button target that is not itself one of the registered
    /// indicators is dropped without touching the moving flag or
    /// notifying; there is no fallback mapping for unknown targets.
    fn on_indicator_click(&self, event: &ClickEvent<E>) {
        let Some(target) = event.target.as_ref() else {
            return;
        };
        if target.kind() != ElementKind::Button {
            return;
        }

        let mut state = self.state.lock();
        if state.moving {
            tracing::trace!(target: "carousel::slider", "indicator click ignored, move in flight");
            return;
        }
        let Some(position) = state.indicators.iter().position(|ind| ind == target) else {
            // Bubbled click from a child of an indicator; nothing to map.
            return;
        };
        state.moving = true;

        state.current_index = position as i32 + 1;
        state.apply();

        let index = state.current_index;
        drop(state);

        tracing::debug!(target: "carousel::slider", index, "indicator move accepted");
        self.changed.emit(index);
    }

    /// Transition-completion handler implementing the loop wrap.
    ///
    /// Clears the moving flag; when the transition landed on a clone, the
    /// index is silently reset to the mirrored real slide and the move is
    /// reissued with a near-zero duration so the re-jump is invisible.
    /// Otherwise the normal duration is restored and the widget settles.
    fn on_transition_end(&self) {
        let mut state = self.state.lock();
        let Some(track) = state.track.clone() else {
            return;
        };

        state.moving = false;

        let len = state.slides.len() as i32;
        if state.current_index == 0 {
            state.current_index = len - 2;
            track.set_transition_duration(SNAP_DURATION);
            tracing::debug!(
                target: "carousel::slider",
                index = state.current_index,
                "wrapped past first slide, snapping to last"
            );
            state.apply();
            return;
        }

        if state.current_index == len - 1 {
            state.current_index = 1;
            track.set_transition_duration(SNAP_DURATION);
            tracing::debug!(
                target: "carousel::slider",
                index = state.current_index,
                "wrapped past last slide, snapping to first"
            );
            state.apply();
            return;
        }

        track.set_transition_duration(state.transition_duration);
    }
}

/// An infinite-loop carousel widget.
///
/// `Slider` resolves its elements from an [`ElementTree`], wires itself to
/// their event sources, and from then on reacts to clicks and transition
/// completions. All state lives behind a shared lock so the widget handle
/// and the wired handlers can both reach it; a single moving flag
/// serializes move requests, and requests arriving while a move is in
/// flight are dropped, not queued.
///
/// Call [`init`](Self::init) exactly once after construction, before any
/// interaction.
pub struct Slider<T: ElementTree> {
    root: T,
    options: SliderOptions,
    shared: Arc<Shared<T::Element>>,
}

impl<T: ElementTree> Slider<T> {
    /// Create a slider scoped to `root` with the given options.
    ///
    /// No element lookups happen here; construction cannot fail.
    pub fn new(root: T, options: SliderOptions) -> Self {
        let active_class = options
            .indicator_selector
            .as_ref()
            .map(|_| options.indicator_active_class.clone().unwrap_or_default());

        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                moving: false,
                current_index: 1,
                track: None,
                slides: Vec::new(),
                buttons: Vec::new(),
                indicators: Vec::new(),
                active_class,
                transition_duration: options.transition_duration,
            }),
            changed: Signal::new(),
        });

        Self {
            root,
            options,
            shared,
        }
    }

    /// Initialize the widget: resolve elements, then wire event handlers.
    ///
    /// Discovery runs first and propagates its errors before any wiring,
    /// so a failed init leaves no handlers attached. Wiring is a no-op
    /// when the track lookup resolved nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::SlidesNotFound`] when the slide selector matches nothing
    /// - [`Error::ButtonsNotFound`] when a button selector is configured
    ///   but matches nothing
    /// - [`Error::IndicatorsNotFound`] likewise for indicators
    pub fn init(&self) -> Result<()> {
        self.register_selectors()?;
        self.register_events();
        Ok(())
    }

    /// Subscribe to slide changes.
    ///
    /// The callback receives the padded index after every accepted
    /// button or indicator move, synchronously and in subscription order.
    /// Programmatic moves via [`move_slider_to`](Self::move_slider_to) do
    /// not notify. Duplicate subscriptions are kept; there is no
    /// unsubscribe.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.shared.changed.connect(move |&index| callback(index));
    }

    /// Move the slider to an arbitrary padded index.
    ///
    /// Silently ignored while a move is in flight. The index is not
    /// validated; steering into a clone or out of range is the caller's
    /// responsibility, and without a completing transition the widget
    /// will not wrap-correct it.
    pub fn move_slider_to(&self, index: i32) {
        let mut state = self.shared.state.lock();
        if state.moving {
            tracing::trace!(target: "carousel::slider", index, "move ignored, move in flight");
            return;
        }
        state.moving = true;
        state.current_index = index;
        state.apply();
    }

    /// The current position in the padded index space.
    pub fn current_index(&self) -> i32 {
        self.shared.state.lock().current_index
    }

    /// Whether a move is currently in flight.
    pub fn is_moving(&self) -> bool {
        self.shared.state.lock().moving
    }

    /// Number of resolved slide elements, clones included. Zero before
    /// a successful [`init`](Self::init).
    pub fn slide_count(&self) -> usize {
        self.shared.state.lock().slides.len()
    }

    fn register_selectors(&self) -> Result<()> {
        let mut state = self.shared.state.lock();

        state.track = self.root.query(&self.options.slider_selector);

        let slides = self.root.query_all(&self.options.slide_selector);
        if slides.is_empty() {
            return Err(Error::SlidesNotFound {
                selector: self.options.slide_selector.clone(),
            });
        }
        state.slides = slides;

        if let Some(selector) = &self.options.button_selector {
            let buttons = self.root.query_all(selector);
            if buttons.is_empty() {
                return Err(Error::ButtonsNotFound {
                    selector: selector.clone(),
                });
            }
            state.buttons = buttons;
        }

        if let Some(selector) = &self.options.indicator_selector {
            let indicators = self.root.query_all(selector);
            if indicators.is_empty() {
                return Err(Error::IndicatorsNotFound {
                    selector: selector.clone(),
                });
            }
            state.indicators = indicators;
        }

        tracing::debug!(
            target: "carousel::slider",
            slides = state.slides.len(),
            buttons = state.buttons.len(),
            indicators = state.indicators.len(),
            "selectors resolved"
        );
        Ok(())
    }

    fn register_events(&self) {
        let state = self.shared.state.lock();
        let Some(track) = state.track.clone() else {
            return;
        };
        let buttons = state.buttons.clone();
        let indicators = state.indicators.clone();
        drop(state);

        for button in &buttons {
            let shared = Arc::clone(&self.shared);
            button.clicks().connect(move |event| {
                shared.on_button_click(event);
            });
        }

        for indicator in &indicators {
            let shared = Arc::clone(&self.shared);
            indicator.clicks().connect(move |event| {
                shared.on_indicator_click(event);
            });
        }

        let shared = Arc::clone(&self.shared);
        track.transition_ends().connect(move |_| {
            shared.on_transition_end();
        });
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider<crate::fake::FakeTree>: Send, Sync);
