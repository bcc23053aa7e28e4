//! Seat that records every call for tests.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Point;
use tessel_config::Modifiers;
use tracing_subscriber::EnvFilter;

use super::binds::MouseBinding;
use super::cursor::{Cursor, CursorImage};
use super::{Axis, AxisSource, ButtonState};
use crate::seat::{Gestures, Seat};
use crate::tree::{ClientId, NodeId, SurfaceId};
use crate::utils::ResizeEdge;

#[derive(Debug)]
pub struct RecordingSeat {
    pub cursor: Cursor,
    log: Vec<String>,
    /// `None` means the seat has no keyboard.
    pub modifiers: Option<Modifiers>,
    pub blocked_clients: Vec<ClientId>,
    pub focused: Option<NodeId>,
    /// Inactive focus per subtree. Subtrees missing here resolve to themselves.
    pub focus_inactive: HashMap<NodeId, NodeId>,
    pub active_tiling_child: HashMap<NodeId, NodeId>,
}

impl Default for RecordingSeat {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            log: Vec::new(),
            modifiers: Some(Modifiers::empty()),
            blocked_clients: Vec::new(),
            focused: None,
            focus_inactive: HashMap::new(),
            active_tiling_child: HashMap::new(),
        }
    }
}

impl RecordingSeat {
    /// Returns the calls recorded so far, one per line, and clears them.
    pub fn take_log(&mut self) -> String {
        std::mem::take(&mut self.log).join("\n")
    }

    fn record(&mut self, line: String) {
        self.log.push(line);
    }
}

/// Prints logs of the code under test, filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fmt_point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}

pub fn fmt_edge(edge: ResizeEdge) -> String {
    let mut out = String::new();
    for (bit, name) in [
        (ResizeEdge::TOP, "top"),
        (ResizeEdge::BOTTOM, "bottom"),
        (ResizeEdge::LEFT, "left"),
        (ResizeEdge::RIGHT, "right"),
    ] {
        if edge.contains(bit) {
            if !out.is_empty() {
                out.push('|');
            }
            out.push_str(name);
        }
    }
    if out.is_empty() {
        out.push_str("none");
    }
    out
}

impl Seat for RecordingSeat {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn apply_cursor_image(&mut self, image: CursorImage, client: Option<ClientId>) {
        let mut line = format!("cursor {image}");
        if let Some(client) = client {
            let _ = write!(line, " client={}", client.0);
        }
        self.record(line);
    }

    fn keyboard_modifiers(&self) -> Option<Modifiers> {
        self.modifiers
    }

    fn is_input_allowed(&self, client: ClientId) -> bool {
        !self.blocked_clients.contains(&client)
    }

    fn pointer_notify_enter(&mut self, surface: SurfaceId, local: Point) {
        self.record(format!(
            "pointer enter surface={} at {}",
            surface.0,
            fmt_point(local)
        ));
    }

    fn pointer_notify_motion(&mut self, time_msec: u32, local: Point) {
        self.record(format!(
            "pointer motion time={time_msec} at {}",
            fmt_point(local)
        ));
    }

    fn pointer_notify_button(&mut self, time_msec: u32, button: u32, state: ButtonState) {
        self.record(format!(
            "pointer button time={time_msec} {button:#x} {state:?}"
        ));
    }

    fn pointer_notify_axis(
        &mut self,
        time_msec: u32,
        orientation: Axis,
        delta: f64,
        delta_discrete: i32,
        source: AxisSource,
    ) {
        self.record(format!(
            "pointer axis time={time_msec} {orientation:?} delta={delta} discrete={delta_discrete} \
             {source:?}"
        ));
    }

    fn pointer_clear_focus(&mut self) {
        self.record(String::from("pointer clear"));
    }

    fn focus(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus_inactive(&self, node: NodeId) -> Option<NodeId> {
        Some(self.focus_inactive.get(&node).copied().unwrap_or(node))
    }

    fn active_tiling_child(&self, node: NodeId) -> Option<NodeId> {
        self.active_tiling_child.get(&node).copied()
    }

    fn focused_container(&self) -> Option<NodeId> {
        self.focused
    }

    fn set_focus(&mut self, node: NodeId) {
        self.record(format!("set_focus {node}"));
        self.focused = Some(node);
    }

    fn set_focus_container(&mut self, container: NodeId) {
        self.record(format!("set_focus_container {container}"));
        self.focused = Some(container);
    }

    fn set_focus_layer(&mut self, layer: SurfaceId) {
        self.record(format!("set_focus_layer surface={}", layer.0));
    }

    fn set_raw_focus(&mut self, node: NodeId) {
        self.record(format!("set_raw_focus {node}"));
        self.focused = Some(node);
    }

    fn execute_command(&mut self, binding: &MouseBinding) {
        self.record(format!("exec {:?}", binding.command));
    }

    fn update_drag_icons(&mut self) {
        self.record(String::from("update drag icons"));
    }
}

impl Gestures for RecordingSeat {
    fn begin_resize_tiling(&mut self, container: NodeId, edge: ResizeEdge) {
        self.record(format!("begin_resize_tiling {container} {}", fmt_edge(edge)));
    }

    fn begin_move_tiling(&mut self, container: NodeId) {
        self.record(format!("begin_move_tiling {container}"));
    }

    fn begin_move_tiling_threshold(&mut self, container: NodeId) {
        self.record(format!("begin_move_tiling_threshold {container}"));
    }

    fn begin_resize_floating(&mut self, container: NodeId, edge: ResizeEdge) {
        self.record(format!("begin_resize_floating {container} {}", fmt_edge(edge)));
    }

    fn begin_move_floating(&mut self, container: NodeId) {
        self.record(format!("begin_move_floating {container}"));
    }

    fn begin_down(&mut self, container: NodeId, time_msec: u32, local: Point) {
        self.record(format!(
            "begin_down {container} time={time_msec} at {}",
            fmt_point(local)
        ));
    }
}
