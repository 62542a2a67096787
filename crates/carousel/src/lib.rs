//! An infinite-loop carousel/slider widget over an abstract element tree.
//!
//! The widget cycles through a set of slide elements, advances via
//! next/previous buttons or indicator dots, and notifies subscribers of
//! slide changes. It does not depend on a concrete UI toolkit: the host
//! supplies a queryable [`ElementTree`] whose [`Element`]s expose class
//! and style mutation plus click and transition-end event sources. The
//! [`fake`] module ships an in-memory implementation for headless use.
//!
//! # Example
//!
//! ```
//! use carousel::fake::{FakeElement, FakeTree};
//! use carousel::{Slider, SliderOptions};
//!
//! // The host markup: one track, 3 real slides framed by two clone
//! // slides, and a pair of direction buttons.
//! let mut tree = FakeTree::new();
//! tree.insert(".slider", FakeElement::generic());
//! for _ in 0..5 {
//!     tree.insert(".slide", FakeElement::generic());
//! }
//! let next = FakeElement::button().with_attribute("data-direction", "next");
//! tree.insert(".slider-btn", next.clone());
//!
//! let slider = Slider::new(
//!     tree,
//!     SliderOptions::new(".slider", ".slide").with_buttons(".slider-btn"),
//! );
//! slider.init()?;
//! slider.subscribe(|index| println!("slide changed: {index}"));
//!
//! next.click();
//! assert_eq!(slider.current_index(), 2);
//! # Ok::<(), carousel::Error>(())
//! ```

pub mod element;
mod error;
pub mod fake;
mod slider;

pub use carousel_core::{ConnectionGuard, ConnectionId, Signal, logging};
pub use element::{ClickEvent, Element, ElementKind, ElementTree, Transform, TransitionEvent};
pub use error::{Error, Result};
pub use slider::{DIRECTION_ATTRIBUTE, DIRECTION_NEXT, Slider, SliderOptions};
