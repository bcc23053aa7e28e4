//! Seat collaborator consumed by the input core.
//!
//! The compositor owns the seat: the wire-level pointer, keyboard modifier state, the focus stack
//! and the command interpreter. The input core talks to it only through these traits.

use kurbo::Point;
use tessel_config::Modifiers;

use crate::input::binds::MouseBinding;
use crate::input::cursor::{Cursor, CursorImage};
use crate::input::{Axis, AxisSource, ButtonState};
use crate::tree::{ClientId, NodeId, SurfaceId};
use crate::utils::ResizeEdge;

pub trait Seat {
    fn cursor(&self) -> &Cursor;
    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Shows `image` as the pointer image for `client`, or as the compositor's own image.
    fn apply_cursor_image(&mut self, image: CursorImage, client: Option<ClientId>);

    /// Modifiers of the seat keyboard, `None` if the seat has no keyboard.
    fn keyboard_modifiers(&self) -> Option<Modifiers>;

    /// Whether input may currently be delivered to `client` (it is not blocked by a lock screen
    /// or an exclusive layer surface).
    fn is_input_allowed(&self, client: ClientId) -> bool;

    fn pointer_notify_enter(&mut self, surface: SurfaceId, local: Point);
    fn pointer_notify_motion(&mut self, time_msec: u32, local: Point);
    fn pointer_notify_button(&mut self, time_msec: u32, button: u32, state: ButtonState);
    fn pointer_notify_axis(
        &mut self,
        time_msec: u32,
        orientation: Axis,
        delta: f64,
        delta_discrete: i32,
        source: AxisSource,
    );
    fn pointer_clear_focus(&mut self);

    /// Currently focused node.
    fn focus(&self) -> Option<NodeId>;

    /// Most recently focused leaf inside `node`, or `node` itself.
    fn focus_inactive(&self, node: NodeId) -> Option<NodeId>;

    /// Active child of a tabbed or stacked container or workspace.
    fn active_tiling_child(&self, node: NodeId) -> Option<NodeId>;

    fn focused_container(&self) -> Option<NodeId>;

    fn set_focus(&mut self, node: NodeId);
    fn set_focus_container(&mut self, container: NodeId);
    fn set_focus_layer(&mut self, layer: SurfaceId);

    /// Moves focus without the usual side effects (no IPC events, no warping).
    fn set_raw_focus(&mut self, node: NodeId);

    fn execute_command(&mut self, binding: &MouseBinding);

    /// Moves drag-and-drop icons along with the cursor.
    fn update_drag_icons(&mut self);
}

/// Seat ops that can be started from the default op.
///
/// Each call replaces the current seat op and returns right away.
pub trait Gestures {
    fn begin_resize_tiling(&mut self, container: NodeId, edge: ResizeEdge);
    fn begin_move_tiling(&mut self, container: NodeId);
    /// Starts a tiling move that only takes effect once the pointer travels past the drag
    /// threshold.
    fn begin_move_tiling_threshold(&mut self, container: NodeId);
    fn begin_resize_floating(&mut self, container: NodeId, edge: ResizeEdge);
    fn begin_move_floating(&mut self, container: NodeId);
    /// Locks the pointer to the container's surface until the button is released.
    fn begin_down(&mut self, container: NodeId, time_msec: u32, local: Point);
}

