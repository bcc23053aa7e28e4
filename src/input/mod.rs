//! Pointer input dispatch.
//!
//! The seat feeds pointer events into the active [`Seatop`]. The default op, [`DefaultSeatop`],
//! decides for every event whether to run a mouse binding, start a gesture or hand the event to
//! the client under the cursor.

use kurbo::Vec2;

use crate::seat::{Gestures, Seat};
use crate::tree::Tree;

pub mod binds;
pub mod cursor;
pub mod default_op;
pub mod edges;
pub mod focus_follows_mouse;
pub mod hit;
pub mod pressed;

#[cfg(test)]
pub(crate) mod testing;

pub use default_op::{ButtonAction, DefaultSeatop};
pub use tessel_config::buttons::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, NO_BUTTON, SCROLL_DOWN, SCROLL_LEFT, SCROLL_RIGHT, SCROLL_UP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Released,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    Wheel,
    Finger,
    Continuous,
    WheelTilt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent<'a> {
    pub time_msec: u32,
    /// Identifier of the device that sent the event, if there is one.
    pub device: Option<&'a str>,
    pub button: u32,
    pub state: ButtonState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisEvent<'a> {
    pub time_msec: u32,
    pub device: Option<&'a str>,
    pub orientation: Axis,
    pub delta: f64,
    pub delta_discrete: i32,
    pub source: AxisSource,
}

impl AxisEvent<'_> {
    /// Synthetic button code for the scroll direction.
    pub fn button(&self) -> u32 {
        axis_to_button(self.orientation, self.delta)
    }
}

/// Device identifier used to match bindings, `"*"` for events without a device.
pub fn device_identifier(device: Option<&str>) -> &str {
    device.unwrap_or("*")
}

/// Maps a scroll direction to its synthetic button code.
///
/// A zero delta has no direction and maps to [`NO_BUTTON`].
pub fn axis_to_button(orientation: Axis, delta: f64) -> u32 {
    match orientation {
        Axis::Vertical if delta < 0. => SCROLL_UP,
        Axis::Vertical if delta > 0. => SCROLL_DOWN,
        Axis::Horizontal if delta < 0. => SCROLL_LEFT,
        Axis::Horizontal if delta > 0. => SCROLL_RIGHT,
        _ => NO_BUTTON,
    }
}

/// Pointer interaction mode of a seat.
///
/// The seat holds exactly one seat op at a time and routes every pointer event to it.
pub trait Seatop<T: Tree, S: Seat + Gestures> {
    fn button(&mut self, tree: &T, seat: &mut S, event: ButtonEvent<'_>);
    fn motion(&mut self, tree: &T, seat: &mut S, time_msec: u32, delta: Vec2);
    fn axis(&mut self, tree: &T, seat: &mut S, event: AxisEvent<'_>);
    /// Refreshes the pointer image and focus without an input event, for example after the tree
    /// changed under a still cursor.
    fn rebase(&mut self, tree: &T, seat: &mut S, time_msec: u32);

    /// Whether clients may set their own cursor image during this op.
    fn allow_set_cursor(&self) -> bool {
        false
    }

    /// Called when the seat switches to another op.
    fn end(&mut self, _seat: &mut S) {}
}
