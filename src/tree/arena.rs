//! Arena-backed container tree.
//!
//! Geometry is set explicitly by whoever builds the tree; no layout is computed here. The tree
//! exists so that the input core can be driven without a full compositor, and it implements the
//! same hit-test rules a compositor tree would.

use kurbo::{Point, Rect};

use super::{
    Border, ClientId, Container, FullscreenMode, Layout, Node, NodeAt, NodeId, OutputId,
    SurfaceHit, SurfaceId, SurfaceRole, Tree, View, Workspace,
};
use crate::utils::rect_contains;

/// Height of a title bar, and of every tab in a stacked container.
pub const DEFAULT_TITLEBAR_HEIGHT: f64 = 20.;

/// Border thickness new views start with.
pub const DEFAULT_BORDER_THICKNESS: f64 = 2.;

/// Layer-shell surface anchored to an output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSurface {
    pub surface: SurfaceId,
    pub client: ClientId,
    pub geometry: Rect,
    pub keyboard_interactive: bool,
}

#[derive(Debug)]
pub struct Output {
    pub id: OutputId,
    pub geometry: Rect,
    workspaces: Vec<NodeId>,
    active_workspace: Option<NodeId>,
    /// Layer surfaces, bottom to top.
    layers: Vec<LayerSurface>,
}

#[derive(Debug)]
struct Entry {
    generation: u32,
    item: Option<Item>,
}

#[derive(Debug)]
enum Item {
    Root,
    Workspace(WorkspaceNode),
    Container(ContainerNode),
}

#[derive(Debug)]
struct WorkspaceNode {
    data: Workspace,
    tiling: Vec<NodeId>,
    /// Floating containers, bottom to top.
    floating: Vec<NodeId>,
}

#[derive(Debug)]
struct ContainerNode {
    data: Container,
    children: Vec<NodeId>,
}

/// Arena of outputs, workspaces and containers.
///
/// Builder methods take handles returned by this tree. Queries through [`Tree`] accept any
/// handle and report stale ones as missing.
#[derive(Debug)]
pub struct LayoutTree {
    entries: Vec<Entry>,
    free: Vec<u32>,
    root: NodeId,
    outputs: Vec<Output>,
    titlebar_height: f64,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                generation: 0,
                item: Some(Item::Root),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 0),
            outputs: Vec::new(),
            titlebar_height: DEFAULT_TITLEBAR_HEIGHT,
        }
    }

    pub fn titlebar_height(&self) -> f64 {
        self.titlebar_height
    }

    pub fn add_output(&mut self, geometry: Rect) -> OutputId {
        let id = OutputId(self.outputs.len() as u32);
        self.outputs.push(Output {
            id,
            geometry,
            workspaces: Vec::new(),
            active_workspace: None,
            layers: Vec::new(),
        });
        id
    }

    /// Adds a workspace covering the whole output.
    ///
    /// The first workspace of an output becomes its active one.
    ///
    /// # Panics
    ///
    /// Panics if `output` was not added to this tree.
    pub fn add_workspace(&mut self, output: OutputId, name: &str) -> NodeId {
        let geometry = self.output(output).geometry;
        let id = self.alloc();
        self.entries[id.index()].item = Some(Item::Workspace(WorkspaceNode {
            data: Workspace {
                id,
                name: name.to_owned(),
                output,
                geometry,
                layout: Layout::Horizontal,
            },
            tiling: Vec::new(),
            floating: Vec::new(),
        }));

        let output = self.output_mut(output);
        output.workspaces.push(id);
        output.active_workspace.get_or_insert(id);
        id
    }

    /// # Panics
    ///
    /// Panics if `workspace` is not a live workspace.
    pub fn set_active_workspace(&mut self, workspace: NodeId) {
        let output = self.workspace(workspace).data.output;
        self.output_mut(output).active_workspace = Some(workspace);
    }

    /// # Panics
    ///
    /// Panics if `output` was not added to this tree.
    pub fn add_layer_surface(&mut self, output: OutputId, layer: LayerSurface) {
        self.output_mut(output).layers.push(layer);
    }

    /// Adds a split container under a workspace or a container.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live workspace or container.
    pub fn add_container(&mut self, parent: NodeId, geometry: Rect) -> NodeId {
        self.insert(parent, geometry, None, false)
    }

    /// Adds a view under a workspace or a container.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a live workspace or container.
    pub fn add_view(&mut self, parent: NodeId, geometry: Rect, view: View) -> NodeId {
        self.insert(parent, geometry, Some(view), false)
    }

    /// Adds a floating view on top of the workspace's floating stack.
    ///
    /// # Panics
    ///
    /// Panics if `workspace` is not a live workspace.
    pub fn add_floating_view(&mut self, workspace: NodeId, geometry: Rect, view: View) -> NodeId {
        self.insert(workspace, geometry, Some(view), true)
    }

    /// Adds a floating split container on top of the workspace's floating stack.
    ///
    /// # Panics
    ///
    /// Panics if `workspace` is not a live workspace.
    pub fn add_floating_container(&mut self, workspace: NodeId, geometry: Rect) -> NodeId {
        self.insert(workspace, geometry, None, true)
    }

    /// Sets the layout of a workspace's tiling children or of a container's children.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live workspace or container.
    pub fn set_layout(&mut self, id: NodeId, layout: Layout) {
        let children = match self.item_mut(id) {
            Item::Workspace(ws) => {
                ws.data.layout = layout;
                ws.tiling.clone()
            }
            Item::Container(c) => {
                c.data.layout = layout;
                c.children.clone()
            }
            Item::Root => panic!("root has no layout"),
        };

        for child in children {
            self.container_node_mut(child).data.parent_layout = layout;
        }
    }

    /// # Panics
    ///
    /// Panics if `container` is not a live container. The same holds for the other container
    /// setters below.
    pub fn set_border(&mut self, container: NodeId, border: Border, thickness: f64) {
        let titlebar_height = self.titlebar_height;
        let data = &mut self.container_node_mut(container).data;
        data.border = border;
        data.border_thickness = thickness;
        data.content = content_rect(data.geometry, border, thickness, titlebar_height);
    }

    pub fn set_geometry(&mut self, container: NodeId, geometry: Rect) {
        let titlebar_height = self.titlebar_height;
        let data = &mut self.container_node_mut(container).data;
        data.geometry = geometry;
        data.content = content_rect(geometry, data.border, data.border_thickness, titlebar_height);
    }

    pub fn set_fullscreen(&mut self, container: NodeId, mode: FullscreenMode) {
        self.container_node_mut(container).data.fullscreen_mode = mode;
    }

    /// # Panics
    ///
    /// Panics if `container` is not a live view.
    pub fn set_visible(&mut self, container: NodeId, visible: bool) {
        let data = &mut self.container_node_mut(container).data;
        let Some(view) = &mut data.view else {
            panic!("{container} has no view");
        };
        view.visible = visible;
    }

    /// Destroys a container and everything below it.
    ///
    /// Handles to the destroyed nodes stay comparable but no longer resolve.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live container.
    pub fn remove(&mut self, id: NodeId) {
        let data = &self.container_node(id).data;
        let (parent, workspace, floating) = (data.parent, data.workspace, data.floating);

        match (parent, workspace) {
            (Some(parent), _) => self.container_node_mut(parent).children.retain(|c| *c != id),
            (None, Some(ws)) => {
                let ws = self.workspace_mut(ws);
                if floating {
                    ws.floating.retain(|c| *c != id);
                } else {
                    ws.tiling.retain(|c| *c != id);
                }
            }
            (None, None) => (),
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let entry = &mut self.entries[id.index()];
            if let Some(Item::Container(c)) = entry.item.take() {
                stack.extend(c.children);
            }
            entry.generation += 1;
            self.free.push(id.index() as u32);
        }
    }

    fn alloc(&mut self) -> NodeId {
        if let Some(index) = self.free.pop() {
            let generation = self.entries[index as usize].generation;
            return NodeId::new(index, generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(Entry {
            generation: 0,
            item: None,
        });
        NodeId::new(index, 0)
    }

    fn insert(
        &mut self,
        parent: NodeId,
        geometry: Rect,
        view: Option<View>,
        floating: bool,
    ) -> NodeId {
        let (parent_container, workspace, parent_layout) = match self.item(parent) {
            Item::Workspace(ws) => {
                let layout = if floating {
                    Layout::None
                } else {
                    ws.data.layout
                };
                (None, ws.data.id, layout)
            }
            Item::Container(c) => {
                assert!(!floating, "only workspace children can float");
                let workspace = c.data.workspace.unwrap_or_else(|| panic!("{parent} is detached"));
                (Some(parent), workspace, c.data.layout)
            }
            Item::Root => panic!("containers can't be children of the root"),
        };

        let (border, border_thickness) = if view.is_some() {
            (Border::Normal, DEFAULT_BORDER_THICKNESS)
        } else {
            (Border::None, 0.)
        };

        let id = self.alloc();
        self.entries[id.index()].item = Some(Item::Container(ContainerNode {
            data: Container {
                id,
                geometry,
                content: content_rect(geometry, border, border_thickness, self.titlebar_height),
                border,
                border_thickness,
                fullscreen_mode: FullscreenMode::None,
                layout: Layout::Horizontal,
                parent: parent_container,
                workspace: Some(workspace),
                parent_layout,
                floating,
                view,
            },
            children: Vec::new(),
        }));

        match parent_container {
            Some(parent) => self.container_node_mut(parent).children.push(id),
            None => {
                let ws = self.workspace_mut(workspace);
                if floating {
                    ws.floating.push(id);
                } else {
                    ws.tiling.push(id);
                }
            }
        }

        id
    }

    fn entry(&self, id: NodeId) -> Option<&Item> {
        let entry = self.entries.get(id.index())?;
        if entry.generation != id.generation() {
            return None;
        }
        entry.item.as_ref()
    }

    fn item(&self, id: NodeId) -> &Item {
        self.entry(id).unwrap_or_else(|| panic!("{id} does not exist"))
    }

    fn item_mut(&mut self, id: NodeId) -> &mut Item {
        let entry = &mut self.entries[id.index()];
        assert_eq!(entry.generation, id.generation(), "{id} does not exist");
        entry
            .item
            .as_mut()
            .unwrap_or_else(|| panic!("{id} does not exist"))
    }

    fn workspace(&self, id: NodeId) -> &WorkspaceNode {
        match self.item(id) {
            Item::Workspace(ws) => ws,
            _ => panic!("{id} is not a workspace"),
        }
    }

    fn workspace_mut(&mut self, id: NodeId) -> &mut WorkspaceNode {
        match self.item_mut(id) {
            Item::Workspace(ws) => ws,
            _ => panic!("{id} is not a workspace"),
        }
    }

    fn container_node(&self, id: NodeId) -> &ContainerNode {
        match self.item(id) {
            Item::Container(c) => c,
            _ => panic!("{id} is not a container"),
        }
    }

    fn container_node_mut(&mut self, id: NodeId) -> &mut ContainerNode {
        match self.item_mut(id) {
            Item::Container(c) => c,
            _ => panic!("{id} is not a container"),
        }
    }

    fn output(&self, id: OutputId) -> &Output {
        &self.outputs[id.0 as usize]
    }

    fn output_mut(&mut self, id: OutputId) -> &mut Output {
        &mut self.outputs[id.0 as usize]
    }

    fn is_visible(&self, id: NodeId) -> bool {
        let Some(Item::Container(c)) = self.entry(id) else {
            return false;
        };
        match c.data.view {
            Some(view) => view.visible,
            None => c.children.iter().any(|child| self.is_visible(*child)),
        }
    }

    fn fullscreen_on(&self, ws: &WorkspaceNode) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = ws.tiling.iter().chain(&ws.floating).copied().collect();
        while let Some(id) = stack.pop() {
            let c = self.container_node(id);
            if c.data.fullscreen_mode != FullscreenMode::None {
                return Some(id);
            }
            stack.extend(&c.children);
        }
        None
    }

    fn container_at(&self, id: NodeId, pos: Point) -> NodeAt {
        let c = self.container_node(id);

        if let Some(view) = c.data.view {
            if rect_contains(c.data.content, pos) {
                let surface = SurfaceHit {
                    surface: view.surface,
                    client: view.client,
                    role: SurfaceRole::Toplevel,
                    local: pos - c.data.content.origin().to_vec2(),
                };
                return NodeAt {
                    node: Some(id),
                    surface: Some(surface),
                };
            }
        } else if let Some(hit) = self.children_at(&c.children, c.data.layout, c.data.geometry, pos)
        {
            return hit;
        }

        NodeAt {
            node: Some(id),
            surface: None,
        }
    }

    fn children_at(
        &self,
        children: &[NodeId],
        layout: Layout,
        area: Rect,
        pos: Point,
    ) -> Option<NodeAt> {
        if children.is_empty() {
            return None;
        }

        if let Layout::Tabbed | Layout::Stacked = layout {
            let count = children.len();
            let bar_height = match layout {
                Layout::Stacked => self.titlebar_height * count as f64,
                _ => self.titlebar_height,
            };

            if rect_contains(area, pos) && pos.y < area.y0 + bar_height {
                let idx = match layout {
                    Layout::Stacked => (pos.y - area.y0) / self.titlebar_height,
                    _ => (pos.x - area.x0) / (area.width() / count as f64),
                };
                let idx = (idx.max(0.) as usize).min(count - 1);
                return Some(NodeAt {
                    node: Some(children[idx]),
                    surface: None,
                });
            }

            let visible = children.iter().find(|child| self.is_visible(**child))?;
            let geometry = self.container_node(*visible).data.geometry;
            return rect_contains(geometry, pos).then(|| self.container_at(*visible, pos));
        }

        children
            .iter()
            .find(|child| rect_contains(self.container_node(**child).data.geometry, pos))
            .map(|child| self.container_at(*child, pos))
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree for LayoutTree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<Node<'_>> {
        let node = match self.entry(id)? {
            Item::Root => Node::Root,
            Item::Workspace(ws) => Node::Workspace(&ws.data),
            Item::Container(c) if c.data.view.is_some() => Node::View(&c.data),
            Item::Container(c) => Node::Container(&c.data),
        };
        Some(node)
    }

    fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.entry(id) {
            Some(Item::Workspace(ws)) => &self.output(ws.data.output).workspaces,
            Some(Item::Container(c)) => match (c.data.parent, c.data.workspace) {
                (Some(parent), _) => &self.container_node(parent).children,
                (None, Some(ws)) if c.data.floating => &self.workspace(ws).floating,
                (None, Some(ws)) => &self.workspace(ws).tiling,
                (None, None) => &[],
            },
            Some(Item::Root) | None => &[],
        }
    }

    fn output_of(&self, id: NodeId) -> Option<OutputId> {
        match self.entry(id)? {
            Item::Root => None,
            Item::Workspace(ws) => Some(ws.data.output),
            Item::Container(c) => self.output_of(c.data.workspace?),
        }
    }

    fn node_at(&self, pos: Point) -> NodeAt {
        let Some(output) = self.outputs.iter().find(|o| rect_contains(o.geometry, pos)) else {
            return NodeAt::default();
        };

        if let Some(layer) = output
            .layers
            .iter()
            .rev()
            .find(|layer| rect_contains(layer.geometry, pos))
        {
            let surface = SurfaceHit {
                surface: layer.surface,
                client: layer.client,
                role: SurfaceRole::Layer {
                    keyboard_interactive: layer.keyboard_interactive,
                },
                local: pos - layer.geometry.origin().to_vec2(),
            };
            return NodeAt {
                node: None,
                surface: Some(surface),
            };
        }

        let Some(ws_id) = output.active_workspace else {
            return NodeAt::default();
        };
        let ws = self.workspace(ws_id);

        if let Some(fullscreen) = self.fullscreen_on(ws) {
            return self.container_at(fullscreen, pos);
        }

        if let Some(floating) = ws
            .floating
            .iter()
            .rev()
            .find(|id| rect_contains(self.container_node(**id).data.geometry, pos))
        {
            return self.container_at(*floating, pos);
        }

        if let Some(hit) = self.children_at(&ws.tiling, ws.data.layout, ws.data.geometry, pos) {
            return hit;
        }

        NodeAt {
            node: Some(ws_id),
            surface: None,
        }
    }
}

/// Area left for the client surface once decorations are drawn.
fn content_rect(geometry: Rect, border: Border, thickness: f64, titlebar_height: f64) -> Rect {
    match border {
        Border::None | Border::Csd => geometry,
        Border::Pixel => Rect::new(
            geometry.x0 + thickness,
            geometry.y0 + thickness,
            geometry.x1 - thickness,
            geometry.y1 - thickness,
        ),
        Border::Normal => Rect::new(
            geometry.x0 + thickness,
            geometry.y0 + titlebar_height,
            geometry.x1 - thickness,
            geometry.y1 - thickness,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(n: u64) -> View {
        View::new(SurfaceId(n), ClientId(n))
    }

    #[test]
    fn stale_handles_do_not_resolve() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        let a = tree.add_view(ws, Rect::new(0., 0., 1000., 1000.), view(1));
        tree.remove(a);

        let b = tree.add_view(ws, Rect::new(0., 0., 1000., 1000.), view(2));
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(tree.node(a).is_none());
        assert!(tree.node(b).is_some());
        assert_eq!(tree.siblings(b), [b]);
        assert_eq!(tree.node_at(Point::new(500., 500.)).node, Some(b));
    }

    #[test]
    fn remove_takes_descendants() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        let split = tree.add_container(ws, Rect::new(0., 0., 1000., 1000.));
        let a = tree.add_view(split, Rect::new(0., 0., 500., 1000.), view(1));

        tree.remove(split);
        assert!(tree.node(split).is_none());
        assert!(tree.node(a).is_none());
        // Nothing tiled is left, so the whole output hits the workspace.
        assert_eq!(tree.node_at(Point::new(250., 500.)).node, Some(ws));
        assert_eq!(tree.siblings(ws), [ws]);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn builders_reject_stale_handles() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        let a = tree.add_view(ws, Rect::new(0., 0., 1000., 1000.), view(1));
        tree.remove(a);

        tree.set_border(a, Border::Pixel, 1.);
    }

    #[test]
    fn hit_contents_and_titlebar() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        let a = tree.add_view(ws, Rect::new(0., 0., 500., 1000.), view(1));
        let b = tree.add_view(ws, Rect::new(500., 0., 1000., 1000.), view(2));

        let hit = tree.node_at(Point::new(600., 100.));
        assert_eq!(hit.node, Some(b));
        let surface = hit.surface.unwrap();
        assert_eq!(surface.surface, SurfaceId(2));
        assert_eq!(surface.local, Point::new(98., 80.));

        let hit = tree.node_at(Point::new(100., 5.));
        assert_eq!(hit.node, Some(a));
        assert_eq!(hit.surface, None);
    }

    #[test]
    fn empty_area_hits_workspace() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        tree.add_view(ws, Rect::new(0., 0., 500., 1000.), view(1));

        let hit = tree.node_at(Point::new(700., 100.));
        assert_eq!(hit.node, Some(ws));
        assert_eq!(hit.surface, None);

        assert_eq!(tree.node_at(Point::new(-5., 100.)), NodeAt::default());
    }

    #[test]
    fn layer_shadows_containers() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        tree.add_view(ws, Rect::new(0., 0., 1000., 1000.), view(1));
        tree.add_layer_surface(
            output,
            LayerSurface {
                surface: SurfaceId(10),
                client: ClientId(10),
                geometry: Rect::new(0., 0., 1000., 30.),
                keyboard_interactive: true,
            },
        );

        let hit = tree.node_at(Point::new(100., 10.));
        assert_eq!(hit.node, None);
        let surface = hit.surface.unwrap();
        assert_eq!(surface.surface, SurfaceId(10));
        assert_eq!(
            surface.role,
            SurfaceRole::Layer {
                keyboard_interactive: true
            }
        );
    }

    #[test]
    fn fullscreen_shadows_siblings() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        tree.add_view(ws, Rect::new(0., 0., 500., 1000.), view(1));
        let b = tree.add_view(ws, Rect::new(500., 0., 1000., 1000.), view(2));
        tree.set_geometry(b, Rect::new(0., 0., 1000., 1000.));
        tree.set_border(b, Border::None, 0.);
        tree.set_fullscreen(b, FullscreenMode::Application);

        let hit = tree.node_at(Point::new(100., 100.));
        assert_eq!(hit.node, Some(b));
        assert_eq!(hit.surface.unwrap().local, Point::new(100., 100.));
    }

    #[test]
    fn floating_is_above_tiling() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        tree.add_view(ws, Rect::new(0., 0., 1000., 1000.), view(1));
        let low = tree.add_floating_view(ws, Rect::new(100., 100., 400., 400.), view(2));
        let high = tree.add_floating_view(ws, Rect::new(200., 200., 500., 500.), view(3));

        assert_eq!(tree.node_at(Point::new(300., 300.)).node, Some(high));
        assert_eq!(tree.node_at(Point::new(150., 150.)).node, Some(low));

        let c = tree.container(high).unwrap();
        assert!(c.floating);
        assert_eq!(c.parent_layout, Layout::None);
        assert!(tree.is_floating_or_child(c));
    }

    #[test]
    fn tabbed_titles_and_visible_child() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        let tabs = tree.add_container(ws, Rect::new(0., 0., 1000., 1000.));
        tree.set_layout(tabs, Layout::Tabbed);

        let inner = Rect::new(0., 20., 1000., 1000.);
        let a = tree.add_view(tabs, inner, view(1));
        let b = tree.add_view(tabs, inner, view(2));
        tree.set_border(a, Border::Pixel, 2.);
        tree.set_border(b, Border::Pixel, 2.);
        tree.set_visible(a, false);

        assert_eq!(tree.container(a).unwrap().parent_layout, Layout::Tabbed);

        // Tab bar is split evenly.
        let hit = tree.node_at(Point::new(100., 10.));
        assert_eq!(hit.node, Some(a));
        assert_eq!(hit.surface, None);
        assert_eq!(tree.node_at(Point::new(700., 10.)).node, Some(b));

        // Below the bar only the visible tab takes input.
        let hit = tree.node_at(Point::new(100., 500.));
        assert_eq!(hit.node, Some(b));
        assert_eq!(hit.surface.unwrap().surface, SurfaceId(2));
    }

    #[test]
    fn stacked_titles() {
        let mut tree = LayoutTree::new();
        let output = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let ws = tree.add_workspace(output, "1");
        tree.set_layout(ws, Layout::Stacked);

        let inner = Rect::new(0., 60., 1000., 1000.);
        let a = tree.add_view(ws, inner, view(1));
        let b = tree.add_view(ws, inner, view(2));
        let c = tree.add_view(ws, inner, view(3));

        assert_eq!(tree.node_at(Point::new(500., 5.)).node, Some(a));
        assert_eq!(tree.node_at(Point::new(500., 25.)).node, Some(b));
        assert_eq!(tree.node_at(Point::new(500., 45.)).node, Some(c));
    }

    #[test]
    fn outputs_and_parents() {
        let mut tree = LayoutTree::new();
        let left = tree.add_output(Rect::new(0., 0., 1000., 1000.));
        let right = tree.add_output(Rect::new(1000., 0., 2000., 1000.));
        let ws1 = tree.add_workspace(left, "1");
        let ws2 = tree.add_workspace(right, "2");
        let split = tree.add_container(ws1, Rect::new(0., 0., 1000., 1000.));
        let a = tree.add_view(split, Rect::new(0., 0., 1000., 1000.), view(1));

        assert_eq!(tree.output_of(a), Some(left));
        assert_eq!(tree.output_of(ws2), Some(right));
        assert_eq!(tree.output_of(tree.root()), None);

        assert_eq!(tree.parent(a), Some(split));
        assert_eq!(tree.parent(split), Some(ws1));
        assert_eq!(tree.parent(ws1), Some(tree.root()));
        assert!(tree.has_ancestor(a, ws1));
        assert!(!tree.has_ancestor(a, ws2));

        assert_eq!(tree.node_at(Point::new(1500., 500.)).node, Some(ws2));
    }
}
