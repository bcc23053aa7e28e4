//! Pointer input dispatch for a tiling Wayland compositor.
//!
//! The crate decides what a pointer event over the container tree means: focusing, starting a
//! resize or move gesture, running a mouse binding, or forwarding the event to the client. The
//! tree and the seat are consumed through the [`tree::Tree`] and [`seat::Seat`] traits.

#[macro_use]
extern crate tracing;

pub mod input;
pub mod options;
pub mod seat;
pub mod tree;
pub mod utils;
