use kurbo::Point;

use super::binds::ClickRegions;
use super::edges::{find_edge, find_resize_edge};
use crate::tree::{Container, Node, NodeAt, NodeId, SurfaceHit, Tree};
use crate::utils::ResizeEdge;

/// Everything the dispatch rules need to know about the cursor position.
#[derive(Debug, Clone, Copy)]
pub struct PointerHit<'a> {
    pub location: Point,
    pub node: Option<NodeId>,
    pub surface: Option<SurfaceHit>,
    /// Container or view under the cursor.
    pub container: Option<&'a Container>,
    pub is_floating: bool,
    pub is_floating_or_child: bool,
    pub is_fullscreen_or_child: bool,
    /// Border edges under the cursor.
    pub edge: ResizeEdge,
    /// Border edges under the cursor that can be resized.
    pub resize_edge: ResizeEdge,
    pub on_workspace: bool,
    pub on_border: bool,
    pub on_titlebar: bool,
    pub on_contents: bool,
    /// On the part of the border band above the contents, next to the title bar.
    pub on_titlebar_border: bool,
}

impl<'a> PointerHit<'a> {
    pub fn compute(tree: &'a impl Tree, location: Point) -> Self {
        let NodeAt { node, surface } = tree.node_at(location);
        Self::from_node_at(tree, location, node, surface)
    }

    pub fn from_node_at(
        tree: &'a impl Tree,
        location: Point,
        node: Option<NodeId>,
        surface: Option<SurfaceHit>,
    ) -> Self {
        let resolved = node.and_then(|id| tree.node(id));
        if node.is_some() && resolved.is_none() {
            warn!("hit test returned a destroyed node");
        }

        let container = resolved.and_then(Node::container);
        let on_workspace = resolved.is_some_and(Node::is_workspace);

        let (edge, resize_edge) = match container {
            Some(c) => {
                let edge = find_edge(c, location);
                let resize_edge = if edge.is_empty() {
                    edge
                } else {
                    find_resize_edge(tree, c, location)
                };
                (edge, resize_edge)
            }
            None => (ResizeEdge::empty(), ResizeEdge::empty()),
        };

        let on_border = !edge.is_empty();
        let has_container = container.is_some();

        Self {
            location,
            node,
            surface,
            container,
            is_floating: container.is_some_and(|c| c.floating),
            is_floating_or_child: container.is_some_and(|c| tree.is_floating_or_child(c)),
            is_fullscreen_or_child: container.is_some_and(|c| tree.is_fullscreen_or_child(c)),
            edge,
            resize_edge,
            on_workspace,
            on_border,
            on_titlebar: has_container && !on_border && surface.is_none(),
            on_contents: has_container && !on_border && surface.is_some(),
            on_titlebar_border: container
                .is_some_and(|c| on_border && location.y < c.content.y0),
        }
    }

    pub fn regions(&self) -> ClickRegions {
        ClickRegions {
            on_titlebar: self.on_titlebar,
            on_border: self.on_border,
            on_contents: self.on_contents,
            on_workspace: self.on_workspace,
        }
    }
}
