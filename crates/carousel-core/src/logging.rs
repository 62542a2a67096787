//! Logging facilities for the carousel widget.
//!
//! The crates in this workspace instrument themselves with the `tracing`
//! crate. To see logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Log lines carry explicit targets so individual subsystems can be
//! filtered, e.g. `RUST_LOG=carousel::slider=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "carousel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "carousel_core::signal";
    /// Slider widget target.
    pub const SLIDER: &str = "carousel::slider";
    /// Element abstraction target.
    pub const ELEMENT: &str = "carousel::element";
}
