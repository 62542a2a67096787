//! Element abstraction for the carousel widget.
//!
//! The carousel does not talk to a concrete UI toolkit or browser API.
//! Instead it depends on two capabilities supplied by the host:
//!
//! - [`ElementTree`]: a queryable collection of elements, the
//!   `querySelector`-like lookup used during initialization
//! - [`Element`]: a styleable element exposing class-list mutation, the
//!   two inline style outputs the widget writes (transform and transition
//!   duration), data attributes, and the event sources the widget wires
//!   itself to
//!
//! Event delivery uses the [`Signal`] primitive from `carousel-core`: each
//! element owns a click signal and a transition-end signal, and the widget
//! connects handlers to them during [`init`](crate::Slider::init). The
//! in-memory implementation in [`crate::fake`] drives these signals from
//! test code; a host binding would drive them from its real event loop.

use std::fmt;
use std::time::Duration;

use carousel_core::Signal;

/// Coarse element classification.
///
/// Stands in for the host's runtime type check on event targets: only
/// `Button` elements qualify as click triggers, anything else is ignored
/// by the widget's handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A push-button style trigger element.
    Button,
    /// Any non-trigger element (slides, the track, wrappers).
    Generic,
}

/// A typed inline-transform value.
///
/// The widget only ever writes horizontal translations, expressed as a
/// percentage of the element's own width (each slide occupies 100% of the
/// track). `Display` renders the CSS form:
///
/// ```
/// use carousel::Transform;
///
/// let t = Transform::translate_x(-300.0);
/// assert_eq!(t.to_string(), "translateX(-300%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Horizontal translation as a percentage of the element's width.
    TranslateX {
        /// Signed offset, negative values shift content left.
        percent: f64,
    },
}

impl Transform {
    /// Create a horizontal translation.
    pub fn translate_x(percent: f64) -> Self {
        Self::TranslateX { percent }
    }

    /// The horizontal offset in percent.
    pub fn x_percent(&self) -> f64 {
        match self {
            Self::TranslateX { percent } => *percent,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateX { percent } => write!(f, "translateX({}%)", percent),
        }
    }
}

/// A click on an element.
///
/// Carries both the element the event originated on (`target`) and the
/// element the handler was attached to (`current_target`). The distinction
/// matters: button handlers consult `current_target` while indicator
/// handlers consult `target`, mirroring event bubbling in a real host.
/// Either may be absent on malformed events; the widget treats such events
/// as no-ops.
#[derive(Debug, Clone)]
pub struct ClickEvent<E> {
    /// The element the event originated on.
    pub target: Option<E>,
    /// The element whose click signal delivered the event.
    pub current_target: Option<E>,
}

impl<E: Clone> ClickEvent<E> {
    /// A well-formed click where the event originated on the element it
    /// was observed on.
    pub fn on(element: E) -> Self {
        Self {
            target: Some(element.clone()),
            current_target: Some(element),
        }
    }

    /// A click with no target information.
    pub fn empty() -> Self {
        Self {
            target: None,
            current_target: None,
        }
    }
}

/// Completion of an element's CSS transition.
///
/// The widget's wrap logic runs on this event; it carries no payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEvent;

/// A styleable element with class-list, attribute and event capabilities.
///
/// Implementations are cheap handles (`Clone` shares the underlying
/// element) with interior mutability for the style state, so the widget
/// can hold non-owning references and mutate style from `&self`. Equality
/// must be identity: two handles compare equal only when they refer to the
/// same element, which the indicator handler relies on to locate a clicked
/// indicator within its collection.
pub trait Element: Clone + PartialEq + Send + Sync + 'static {
    /// The element's coarse classification.
    fn kind(&self) -> ElementKind;

    /// Write the element's inline transform.
    fn set_transform(&self, transform: Transform);

    /// Write the element's inline transition duration.
    fn set_transition_duration(&self, duration: Duration);

    /// Add a class to the element's class list. Adding a class that is
    /// already present is a no-op.
    fn add_class(&self, class: &str);

    /// Remove a class from the element's class list.
    fn remove_class(&self, class: &str);

    /// Check whether the element currently carries a class.
    fn has_class(&self, class: &str) -> bool;

    /// Read an attribute, e.g. the `data-direction` trigger convention.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The element's click event source.
    fn clicks(&self) -> &Signal<ClickEvent<Self>>;

    /// The element's transition-completion event source.
    fn transition_ends(&self) -> &Signal<TransitionEvent>;
}

/// A queryable collection of elements scoped to a root.
///
/// This is the discovery capability the widget uses during
/// initialization; selector syntax is up to the implementation.
pub trait ElementTree {
    /// The element handle type produced by lookups.
    type Element: Element;

    /// Resolve the first element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Resolve all elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}
