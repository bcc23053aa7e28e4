//! Border and resize-edge classification.

use kurbo::{Point, Rect};

use crate::tree::{Border, Container, Layout, Tree};
use crate::utils::{rect_contains, ResizeEdge};

/// Edges of `container` whose border band contains `pos`.
///
/// Only views with a drawn border have edges. Corners report two edges.
pub fn find_edge(container: &Container, pos: Point) -> ResizeEdge {
    if container.view.is_none() {
        return ResizeEdge::empty();
    }
    if matches!(container.border, Border::None | Border::Csd) || container.border_thickness <= 0. {
        return ResizeEdge::empty();
    }

    let geo = container.geometry;
    if !rect_contains(geo, pos) {
        return ResizeEdge::empty();
    }

    let t = container.border_thickness;
    let mut edge = ResizeEdge::empty();
    if pos.x < geo.x0 + t {
        edge |= ResizeEdge::LEFT;
    }
    if pos.y < geo.y0 + t {
        edge |= ResizeEdge::TOP;
    }
    if pos.x >= geo.x1 - t {
        edge |= ResizeEdge::RIGHT;
    }
    if pos.y >= geo.y1 - t {
        edge |= ResizeEdge::BOTTOM;
    }
    edge
}

/// Whether a single `edge` of a tiled container lies on the boundary of its workspace.
///
/// Walks up from `container`. Any ancestor split along the edge's axis that has a sibling on the
/// edge's side makes the edge internal.
pub fn edge_is_external(tree: &impl Tree, container: &Container, edge: ResizeEdge) -> bool {
    let axis = if edge.intersects(ResizeEdge::TOP_BOTTOM) {
        Layout::Vertical
    } else if edge.intersects(ResizeEdge::LEFT_RIGHT) {
        Layout::Horizontal
    } else {
        debug_assert!(false, "edge must not be empty");
        return false;
    };

    let mut current = Some(container);
    while let Some(c) = current {
        if c.parent_layout == axis {
            let siblings = tree.siblings(c.id);
            if let Some(idx) = siblings.iter().position(|id| *id == c.id) {
                if idx > 0 && edge.intersects(ResizeEdge::TOP | ResizeEdge::LEFT) {
                    return false;
                }
                if idx + 1 < siblings.len() && edge.intersects(ResizeEdge::BOTTOM | ResizeEdge::RIGHT)
                {
                    return false;
                }
            }
        }
        current = c.parent.and_then(|id| tree.container(id));
    }

    true
}

/// Edges at `pos` that can actually be resized.
///
/// Floating containers can be resized on every edge. Tiled containers lose the edges that touch
/// the workspace boundary.
pub fn find_resize_edge(tree: &impl Tree, container: &Container, pos: Point) -> ResizeEdge {
    let edge = find_edge(container, pos);
    if edge.is_empty() || container.floating {
        return edge;
    }

    edge.iter()
        .filter(|bit| !edge_is_external(tree, container, *bit))
        .collect()
}

/// Corner of `rect` closest to `pos`, as a horizontal plus a vertical edge.
pub fn corner_edge(rect: Rect, pos: Point) -> ResizeEdge {
    let center = rect.center();
    let horizontal = if pos.x > center.x {
        ResizeEdge::RIGHT
    } else {
        ResizeEdge::LEFT
    };
    let vertical = if pos.y > center.y {
        ResizeEdge::BOTTOM
    } else {
        ResizeEdge::TOP
    };
    horizontal | vertical
}
