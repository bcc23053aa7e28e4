//! The default seat op.
//!
//! The seat is in this op whenever no gesture is running. Every button press goes through a fixed
//! list of rules, and the first one that applies decides what happens: run a binding, start a
//! gesture, or pass the click to the client.

use std::rc::Rc;

use kurbo::{Point, Vec2};
use tessel_config::{FocusFollowsMouse, Modifiers};

use super::binds::{find_mouse_binding, MouseBinding};
use super::cursor::{rebase_cursor, CursorImage};
use super::edges::corner_edge;
use super::focus_follows_mouse::check_focus_follows_mouse;
use super::hit::PointerHit;
use super::pressed::PressedButtons;
use super::{device_identifier, AxisEvent, ButtonEvent, ButtonState, Seatop, BTN_LEFT};
use crate::options::InputOptions;
use crate::seat::{Gestures, Seat};
use crate::tree::{Container, Layout, NodeId, SurfaceId, SurfaceRole, Tree};
use crate::utils::ResizeEdge;

/// Outcome of a button event in the default op.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonAction {
    ExecBinding(MouseBinding),
    FocusWorkspace(NodeId),
    /// Click on a layer surface. The button is forwarded either way.
    FocusLayerSurface {
        surface: SurfaceId,
        keyboard_interactive: bool,
    },
    BeginResizeTiling {
        container: NodeId,
        edge: ResizeEdge,
        /// Image to show for the whole resize, when it was not picked by hovering a border.
        image: Option<CursorImage>,
    },
    BeginMoveTiling {
        container: NodeId,
        /// Node to focus first, when grabbing the title bar of an unfocused container.
        focus: Option<NodeId>,
        /// Wait for the pointer to move past the drag threshold.
        threshold: bool,
    },
    BeginResizeFloating {
        container: NodeId,
        edge: ResizeEdge,
    },
    BeginMoveFloating {
        container: NodeId,
    },
    BeginDown {
        container: NodeId,
        local: Point,
    },
    FocusAndForward {
        focus: Option<NodeId>,
    },
    ForwardOnly,
}

#[derive(Debug)]
pub struct DefaultSeatop {
    options: Rc<InputOptions>,
    /// Node hovered at the last motion or rebase. Never dereferenced.
    previous_node: Option<NodeId>,
    pressed: PressedButtons,
}

impl DefaultSeatop {
    pub fn new(options: Rc<InputOptions>) -> Self {
        Self {
            options,
            previous_node: None,
            pressed: PressedButtons::new(),
        }
    }

    /// Switches the seat to the default op.
    ///
    /// The pointer state is resent right away since the previous op may have left the cursor
    /// image and pointer focus anywhere.
    pub fn begin<T: Tree, S: Seat>(tree: &T, seat: &mut S, options: Rc<InputOptions>) -> Self {
        let mut op = Self::new(options);
        seat.cursor_mut().invalidate();
        op.on_rebase(tree, seat, 0);
        op
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replaces the options, for example after a binding mode change or a config reload.
    pub fn update_options(&mut self, options: Rc<InputOptions>) {
        self.options = options;
    }

    pub fn previous_node(&self) -> Option<NodeId> {
        self.previous_node
    }

    pub fn pressed(&self) -> &PressedButtons {
        &self.pressed
    }

    pub fn on_button<T: Tree, S: Seat + Gestures>(
        &mut self,
        tree: &T,
        seat: &mut S,
        event: ButtonEvent<'_>,
    ) {
        let _span = tracy_client::span!("DefaultSeatop::on_button");

        let hit = PointerHit::compute(tree, seat.cursor().location);
        let action = self.dispatch_button(tree, seat, &event, &hit);
        debug!("button {:#x} {:?}: {action:?}", event.button, event.state);
        apply_button(seat, &event, action);

        #[cfg(test)]
        self.pressed.verify_invariants();
    }

    /// Updates the held buttons and picks the action for a button event.
    ///
    /// On press the button is added before looking for a binding. On release the binding is
    /// looked up first, so that release bindings see the button being released.
    pub fn dispatch_button<T: Tree, S: Seat>(
        &mut self,
        tree: &T,
        seat: &S,
        event: &ButtonEvent<'_>,
        hit: &PointerHit<'_>,
    ) -> ButtonAction {
        let options = Rc::clone(&self.options);
        let keyboard = seat.keyboard_modifiers();
        let modifiers = keyboard.unwrap_or_default();
        let device = device_identifier(event.device);
        let pressed = event.state == ButtonState::Pressed;

        let binding = if pressed {
            self.pressed.add(event.button);
            self.find_binding(&options, modifiers, false, hit, device)
        } else {
            let binding = self.find_binding(&options, modifiers, true, hit, device);
            self.pressed.erase(event.button);
            binding
        };
        if let Some(binding) = binding {
            return ButtonAction::ExecBinding(binding.clone());
        }

        if hit.on_workspace {
            if let Some(node) = hit.node {
                return ButtonAction::FocusWorkspace(node);
            }
        }

        if let Some(surface) = &hit.surface {
            if let SurfaceRole::Layer {
                keyboard_interactive,
            } = surface.role
            {
                return ButtonAction::FocusLayerSurface {
                    surface: surface.surface,
                    keyboard_interactive,
                };
            }
        }

        let Some(cont) = hit.container else {
            return ButtonAction::ForwardOnly;
        };

        let mod_pressed = keyboard.is_some_and(|m| m.intersects(options.floating_mod));
        let button = event.button;

        // Tiling resize by dragging a border.
        if !hit.resize_edge.is_empty() && button == BTN_LEFT && pressed && !hit.is_floating {
            return ButtonAction::BeginResizeTiling {
                container: cont.id,
                edge: hit.resize_edge,
                image: None,
            };
        }

        // Tiling resize with the modifier, from the nearest corner.
        if !hit.is_floating_or_child && mod_pressed && pressed && button == options.resize_button()
        {
            let edge = corner_edge(cont.geometry, hit.location);
            return ButtonAction::BeginResizeTiling {
                container: cont.id,
                edge,
                image: Some(edge.cursor_image()),
            };
        }

        if hit.is_floating_or_child && !hit.is_fullscreen_or_child && pressed {
            let floater: &Container = tree.toplevel(cont);

            if button == options.move_button() && (mod_pressed || hit.on_titlebar) {
                return ButtonAction::BeginMoveFloating {
                    container: floater.id,
                };
            }

            if button == BTN_LEFT && !hit.resize_edge.is_empty() {
                return ButtonAction::BeginResizeFloating {
                    container: cont.id,
                    edge: hit.resize_edge,
                };
            }

            if mod_pressed && button == options.resize_button() {
                return ButtonAction::BeginResizeFloating {
                    container: floater.id,
                    edge: corner_edge(floater.geometry, hit.location),
                };
            }
        }

        if options.tiling_drag
            && (mod_pressed || hit.on_titlebar)
            && pressed
            && !hit.is_floating_or_child
            && !hit.is_fullscreen_or_child
        {
            let focused = seat.focused_container();
            let is_focused =
                focused.is_some_and(|f| f == cont.id || tree.has_ancestor(f, cont.id));
            let focus = if hit.on_titlebar && !is_focused {
                seat.focus_inactive(cont.id)
            } else {
                None
            };

            return ButtonAction::BeginMoveTiling {
                container: cont.id,
                focus,
                threshold: !mod_pressed && options.tiling_drag_threshold > 0,
            };
        }

        if let Some(surface) = &hit.surface {
            if pressed {
                return ButtonAction::BeginDown {
                    container: cont.id,
                    local: surface.local,
                };
            }
        }

        ButtonAction::FocusAndForward {
            focus: seat.focus_inactive(cont.id),
        }
    }

    fn find_binding<'a>(
        &self,
        options: &'a InputOptions,
        modifiers: Modifiers,
        release: bool,
        hit: &PointerHit<'_>,
        device: &str,
    ) -> Option<&'a MouseBinding> {
        find_mouse_binding(
            &options.mouse_bindings,
            self.pressed.as_slice(),
            modifiers,
            release,
            hit.regions(),
            device,
        )
    }

    pub fn on_motion<T: Tree, S: Seat>(&mut self, tree: &T, seat: &mut S, time_msec: u32) {
        let _span = tracy_client::span!("DefaultSeatop::on_motion");

        let location = seat.cursor().location;
        let hit = tree.node_at(location);

        if let Some(node) = hit.node {
            let policy = self.options.focus_follows_mouse;
            if policy != FocusFollowsMouse::No {
                check_focus_follows_mouse(tree, seat, policy, self.previous_node, node);
            }
        }

        rebase_cursor(tree, seat, time_msec, &hit);
        seat.update_drag_icons();

        self.previous_node = hit.node;
    }

    pub fn on_axis<T: Tree, S: Seat>(&mut self, tree: &T, seat: &mut S, event: AxisEvent<'_>) {
        let _span = tracy_client::span!("DefaultSeatop::on_axis");

        let options = Rc::clone(&self.options);
        let hit = PointerHit::compute(tree, seat.cursor().location);
        let device = device_identifier(event.device);
        let scroll_factor = options.scroll_factor(device);
        let modifiers = seat.keyboard_modifiers().unwrap_or_default();
        let button = event.button();

        let mut handled = false;

        // Scrolling counts as a press and a release of a synthetic button.
        self.pressed.add(button);
        if let Some(binding) = self.find_binding(&options, modifiers, false, &hit, device) {
            debug!("axis {button:#x} runs press binding {:?}", binding.command);
            seat.execute_command(binding);
            handled = true;
        }

        if !handled && (hit.on_titlebar || hit.on_titlebar_border) {
            if let Some(cont) = hit.container {
                if matches!(cont.parent_layout, Layout::Tabbed | Layout::Stacked) {
                    scroll_tabs(tree, seat, cont, scroll_factor, event.delta_discrete);
                    handled = true;
                }
            }
        }

        let release = self.find_binding(&options, modifiers, true, &hit, device);
        self.pressed.erase(button);
        if let Some(binding) = release {
            debug!("axis {button:#x} runs release binding {:?}", binding.command);
            seat.execute_command(binding);
            handled = true;
        }

        if !handled {
            seat.pointer_notify_axis(
                event.time_msec,
                event.orientation,
                scroll_factor * event.delta,
                scale_discrete(scroll_factor, event.delta_discrete),
                event.source,
            );
        }
    }

    pub fn on_rebase<T: Tree, S: Seat>(&mut self, tree: &T, seat: &mut S, time_msec: u32) {
        let _span = tracy_client::span!("DefaultSeatop::on_rebase");

        let hit = tree.node_at(seat.cursor().location);
        self.previous_node = hit.node;
        rebase_cursor(tree, seat, time_msec, &hit);
    }
}

impl<T: Tree, S: Seat + Gestures> Seatop<T, S> for DefaultSeatop {
    fn button(&mut self, tree: &T, seat: &mut S, event: ButtonEvent<'_>) {
        self.on_button(tree, seat, event);
    }

    // The seat has already moved the cursor by the time motion reaches the op.
    fn motion(&mut self, tree: &T, seat: &mut S, time_msec: u32, _delta: Vec2) {
        self.on_motion(tree, seat, time_msec);
    }

    fn axis(&mut self, tree: &T, seat: &mut S, event: AxisEvent<'_>) {
        self.on_axis(tree, seat, event);
    }

    fn rebase(&mut self, tree: &T, seat: &mut S, time_msec: u32) {
        self.on_rebase(tree, seat, time_msec);
    }

    fn allow_set_cursor(&self) -> bool {
        true
    }
}

fn apply_button<S: Seat + Gestures>(seat: &mut S, event: &ButtonEvent<'_>, action: ButtonAction) {
    let time = event.time_msec;

    match action {
        ButtonAction::ExecBinding(binding) => seat.execute_command(&binding),
        ButtonAction::FocusWorkspace(workspace) => seat.set_focus(workspace),
        ButtonAction::FocusLayerSurface {
            surface,
            keyboard_interactive,
        } => {
            if keyboard_interactive {
                seat.set_focus_layer(surface);
            }
            seat.pointer_notify_button(time, event.button, event.state);
        }
        ButtonAction::BeginResizeTiling {
            container,
            edge,
            image,
        } => {
            if let Some(image) = image {
                if seat.cursor_mut().set_image(image, None) {
                    seat.apply_cursor_image(image, None);
                }
            }
            seat.set_focus_container(container);
            seat.begin_resize_tiling(container, edge);
        }
        ButtonAction::BeginMoveTiling {
            container,
            focus,
            threshold,
        } => {
            if let Some(focus) = focus {
                seat.set_focus(focus);
            }
            if threshold {
                seat.begin_move_tiling_threshold(container);
            } else {
                seat.begin_move_tiling(container);
            }
        }
        ButtonAction::BeginResizeFloating { container, edge } => {
            seat.begin_resize_floating(container, edge);
        }
        ButtonAction::BeginMoveFloating { container } => {
            seat.set_focus_container(container);
            seat.begin_move_floating(container);
        }
        ButtonAction::BeginDown { container, local } => {
            seat.set_focus_container(container);
            seat.begin_down(container, time, local);
            seat.pointer_notify_button(time, event.button, ButtonState::Pressed);
        }
        ButtonAction::FocusAndForward { focus } => {
            if let Some(focus) = focus {
                seat.set_focus(focus);
            }
            seat.pointer_notify_button(time, event.button, event.state);
        }
        ButtonAction::ForwardOnly => {
            seat.pointer_notify_button(time, event.button, event.state);
        }
    }
}

/// Switches the active tab of the tabbed or stacked container around `cont`.
fn scroll_tabs<S: Seat>(
    tree: &impl Tree,
    seat: &mut S,
    cont: &Container,
    scroll_factor: f64,
    delta_discrete: i32,
) {
    let Some(tabs) = tree.parent(cont.id) else {
        return;
    };
    let siblings = tree.siblings(cont.id);
    if siblings.is_empty() {
        return;
    }

    let position = |id: NodeId| siblings.iter().position(|s| *s == id);
    let current = seat
        .active_tiling_child(tabs)
        .and_then(position)
        .or_else(|| position(cont.id))
        .unwrap_or(0);

    let last = siblings.len() as i64 - 1;
    let desired = (current as i64 + i64::from(scale_discrete(scroll_factor, delta_discrete)))
        .clamp(0, last) as usize;

    let new_sibling = siblings[desired];
    let new_focus = seat.focus_inactive(new_sibling).unwrap_or(new_sibling);
    let old_focus = seat.focus();
    debug!("scrolling tabs of {tabs} from {current} to {desired}");

    if old_focus.is_some_and(|focus| tree.has_ancestor(focus, tabs)) {
        seat.set_focus(new_focus);
    } else {
        // Focus is outside the tabs: make the new tab active without taking focus.
        seat.set_raw_focus(new_sibling);
        seat.set_raw_focus(new_focus);
        if let Some(old_focus) = old_focus {
            seat.set_raw_focus(old_focus);
        }
    }
}

/// Scales a discrete scroll step count, rounding half away from zero.
fn scale_discrete(scroll_factor: f64, delta_discrete: i32) -> i32 {
    (scroll_factor * f64::from(delta_discrete)).round() as i32
}
