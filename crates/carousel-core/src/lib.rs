//! Core primitives for the carousel widget.
//!
//! This crate provides the foundational components shared by the carousel
//! workspace:
//!
//! - **Signal/Slot System**: Type-safe observer-pattern communication,
//!   used both for the widget's change notifications and as the abstract
//!   event sources of the element layer
//! - **Logging**: `tracing` target constants for log filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use carousel_core::Signal;
//!
//! // Create a signal that notifies when the slide changes
//! let slide_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = slide_changed.connect(|index| {
//!     println!("Now showing slide: {}", index);
//! });
//!
//! // Emit the signal
//! slide_changed.emit(1);
//!
//! // Disconnect when done
//! slide_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
