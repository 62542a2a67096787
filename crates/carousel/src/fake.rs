//! In-memory element tree for headless operation and tests.
//!
//! [`FakeTree`] and [`FakeElement`] implement the capabilities in
//! [`crate::element`] without a host toolkit: lookups match against
//! registered selectors, style writes are recorded for inspection, and
//! events are fired explicitly from test code via [`FakeElement::click`]
//! and [`FakeElement::finish_transition`].
//!
//! # Example
//!
//! ```
//! use carousel::ElementTree;
//! use carousel::fake::{FakeElement, FakeTree};
//!
//! let mut tree = FakeTree::new();
//! let track = FakeElement::generic();
//! tree.insert(".track", track.clone());
//!
//! assert!(tree.query(".track").is_some());
//! assert!(tree.query(".missing").is_none());
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use carousel_core::Signal;
use parking_lot::Mutex;

use crate::element::{ClickEvent, Element, ElementKind, ElementTree, Transform, TransitionEvent};

struct FakeElementInner {
    kind: ElementKind,
    attributes: Mutex<HashMap<String, String>>,
    classes: Mutex<Vec<String>>,
    transform: Mutex<Option<Transform>>,
    transition_duration: Mutex<Option<Duration>>,
    clicks: Signal<ClickEvent<FakeElement>>,
    transition_ends: Signal<TransitionEvent>,
}

/// A recordable element handle.
///
/// Cloning shares the underlying element; equality is allocation identity,
/// so two handles compare equal only when they refer to the same element.
#[derive(Clone)]
pub struct FakeElement {
    inner: Arc<FakeElementInner>,
}

impl FakeElement {
    /// Create an element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            inner: Arc::new(FakeElementInner {
                kind,
                attributes: Mutex::new(HashMap::new()),
                classes: Mutex::new(Vec::new()),
                transform: Mutex::new(None),
                transition_duration: Mutex::new(None),
                clicks: Signal::new(),
                transition_ends: Signal::new(),
            }),
        }
    }

    /// Create a button element, the only kind that qualifies as a click
    /// trigger.
    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    /// Create a generic (non-trigger) element.
    pub fn generic() -> Self {
        Self::new(ElementKind::Generic)
    }

    /// Set an attribute, builder style.
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.attributes.lock().insert(name.into(), value.into());
        self
    }

    // =========================================================================
    // Stimuli
    // =========================================================================

    /// Fire a well-formed click on this element: both the target and the
    /// current target are the element itself.
    pub fn click(&self) {
        self.inner.clicks.emit(ClickEvent::on(self.clone()));
    }

    /// Fire an arbitrary click event, e.g. a malformed one with missing
    /// targets or a bubbled one whose target is a child element.
    pub fn click_with(&self, event: ClickEvent<FakeElement>) {
        self.inner.clicks.emit(event);
    }

    /// Fire the completion of this element's CSS transition.
    pub fn finish_transition(&self) {
        self.inner.transition_ends.emit(TransitionEvent);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// The last transform written to this element, if any.
    pub fn transform(&self) -> Option<Transform> {
        *self.inner.transform.lock()
    }

    /// The last transition duration written to this element, if any.
    pub fn transition_duration(&self) -> Option<Duration> {
        *self.inner.transition_duration.lock()
    }

    /// Snapshot of the current class list.
    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.lock().clone()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("kind", &self.inner.kind)
            .field("classes", &*self.inner.classes.lock())
            .finish_non_exhaustive()
    }
}

impl Element for FakeElement {
    fn kind(&self) -> ElementKind {
        self.inner.kind
    }

    fn set_transform(&self, transform: Transform) {
        tracing::trace!(target: "carousel::element", %transform, "style write");
        *self.inner.transform.lock() = Some(transform);
    }

    fn set_transition_duration(&self, duration: Duration) {
        *self.inner.transition_duration.lock() = Some(duration);
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.inner.classes.lock();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.inner.classes.lock().retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.classes.lock().iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.attributes.lock().get(name).cloned()
    }

    fn clicks(&self) -> &Signal<ClickEvent<Self>> {
        &self.inner.clicks
    }

    fn transition_ends(&self) -> &Signal<TransitionEvent> {
        &self.inner.transition_ends
    }
}

/// An in-memory element collection keyed by selector.
///
/// Elements are registered under a literal selector string; lookups match
/// by string equality in registration order. This deliberately sidesteps
/// selector syntax, which belongs to the host.
#[derive(Default)]
pub struct FakeTree {
    elements: Vec<(String, FakeElement)>,
}

impl FakeTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under a selector. The same element may be
    /// registered under several selectors.
    pub fn insert(&mut self, selector: impl Into<String>, element: FakeElement) {
        self.elements.push((selector.into(), element));
    }
}

impl ElementTree for FakeTree {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.elements
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, e)| e.clone())
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.elements
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, e)| e.clone())
            .collect()
    }
}
