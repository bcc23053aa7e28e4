use tessel_config::FocusFollowsMouse;

use crate::seat::Seat;
use crate::tree::{Node, NodeId, Tree};

/// Moves focus to what the pointer hovers, according to `policy`.
///
/// `previous` is the node hovered at the previous motion event. It is only compared against, so
/// it may refer to a node that no longer exists.
pub fn check_focus_follows_mouse<S: Seat>(
    tree: &impl Tree,
    seat: &mut S,
    policy: FocusFollowsMouse,
    previous: Option<NodeId>,
    hovered: NodeId,
) {
    if policy == FocusFollowsMouse::No {
        return;
    }

    let Some(node) = tree.node(hovered) else {
        return;
    };

    // Hovering a workspace (gaps or an empty workspace) only moves focus across outputs.
    if node.is_workspace() {
        let Some(focus) = seat.focus() else {
            return;
        };
        if tree.output_of(focus) != tree.output_of(hovered) {
            if let Some(next) = seat.focus_inactive(hovered) {
                trace!("focus follows mouse to workspace {hovered}: {next}");
                seat.set_focus(next);
            }
        }
        return;
    }

    if !node.is_view() {
        return;
    }

    if previous != Some(hovered) || policy == FocusFollowsMouse::Always {
        trace!("focus follows mouse to {hovered}");
        seat.set_focus(hovered);
        return;
    }

    // The hovered view may be covered by another tab of a tabbed container that has a split
    // child; refocus whichever leaf is actually visible.
    let Some(next) = seat.focus_inactive(tree.root()) else {
        return;
    };
    if let Some(Node::View(c)) = tree.node(next) {
        if c.view.is_some_and(|v| v.visible) {
            trace!("focus follows mouse to visible {next}");
            seat.set_focus(next);
        }
    }
}
