//! Read-only view of the container tree.
//!
//! The input core never mutates the tree. It looks nodes up through [`Tree`], compares them by
//! [`NodeId`] and asks the tree what lies under the cursor with [`Tree::node_at`].

use std::fmt;

use kurbo::{Point, Rect};

pub mod arena;

pub use arena::{LayerSurface, LayoutTree};

/// Generational handle to a node.
///
/// A handle stays valid as a value after its node is destroyed: it keeps comparing unequal to
/// every live node, and [`Tree::node`] returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}v{}", self.index, self.generation)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    None,
    Horizontal,
    Vertical,
    Tabbed,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    None,
    /// Border with a title bar.
    Normal,
    /// Border without a title bar.
    Pixel,
    /// The client draws its own decorations.
    Csd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMode {
    None,
    /// Fullscreen on the container's workspace.
    Application,
    /// Fullscreen across all outputs.
    Global,
}

/// Client surface shown by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub surface: SurfaceId,
    pub client: ClientId,
    pub visible: bool,
}

impl View {
    pub fn new(surface: SurfaceId, client: ClientId) -> Self {
        Self {
            surface,
            client,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: NodeId,
    /// Outer geometry including borders and the title bar.
    pub geometry: Rect,
    /// Area covered by the client surface.
    pub content: Rect,
    pub border: Border,
    pub border_thickness: f64,
    pub fullscreen_mode: FullscreenMode,
    /// Layout of this container's own children.
    pub layout: Layout,
    /// Parent container, `None` for children of a workspace.
    pub parent: Option<NodeId>,
    pub workspace: Option<NodeId>,
    /// Layout of whatever this container is a child of.
    ///
    /// Top-level floating containers report [`Layout::None`].
    pub parent_layout: Layout,
    /// Whether this container sits in its workspace's floating list.
    ///
    /// Only top-level containers can be floating; their descendants are "floating children".
    pub floating: bool,
    pub view: Option<View>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: NodeId,
    pub name: String,
    pub output: OutputId,
    pub geometry: Rect,
    pub layout: Layout,
}

/// A node, discriminated by kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Root,
    Workspace(&'a Workspace),
    /// Split container without a view of its own.
    Container(&'a Container),
    /// Container showing a client view.
    View(&'a Container),
}

impl<'a> Node<'a> {
    /// Returns the container data for both split containers and views.
    pub fn container(self) -> Option<&'a Container> {
        match self {
            Node::Container(c) | Node::View(c) => Some(c),
            Node::Root | Node::Workspace(_) => None,
        }
    }

    pub fn is_workspace(self) -> bool {
        matches!(self, Node::Workspace(_))
    }

    pub fn is_view(self) -> bool {
        matches!(self, Node::View(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRole {
    Toplevel,
    Layer { keyboard_interactive: bool },
}

/// Surface under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub surface: SurfaceId,
    pub client: ClientId,
    pub role: SurfaceRole,
    /// Cursor position in surface-local coordinates.
    pub local: Point,
}

/// Result of a hit test.
///
/// A layer surface hit has no node. A container hit without a surface means the cursor is over
/// the container's decorations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeAt {
    pub node: Option<NodeId>,
    pub surface: Option<SurfaceHit>,
}

/// Read-only tree API.
pub trait Tree {
    fn root(&self) -> NodeId;

    /// Looks a node up. Returns `None` for destroyed nodes.
    fn node(&self, id: NodeId) -> Option<Node<'_>>;

    /// The list `id` is part of, including `id` itself.
    ///
    /// For a container this is its parent's children, or its workspace's tiling or floating
    /// list. For a workspace, the workspaces of its output.
    fn siblings(&self, id: NodeId) -> &[NodeId];

    fn output_of(&self, id: NodeId) -> Option<OutputId>;

    /// Finds what is under `pos`.
    ///
    /// Layer surfaces shadow containers, and a fullscreen container shadows everything else on
    /// its workspace.
    fn node_at(&self, pos: Point) -> NodeAt;

    fn container(&self, id: NodeId) -> Option<&Container> {
        self.node(id).and_then(Node::container)
    }

    /// Parent node: the parent container, the workspace, or the root.
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id)? {
            Node::Root => None,
            Node::Workspace(_) => Some(self.root()),
            Node::Container(c) | Node::View(c) => c.parent.or(c.workspace),
        }
    }

    fn has_ancestor(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Outermost container above `container`, possibly `container` itself.
    fn toplevel<'a>(&'a self, container: &'a Container) -> &'a Container {
        let mut current = container;
        while let Some(parent) = current.parent.and_then(|id| self.container(id)) {
            current = parent;
        }
        current
    }

    fn is_floating_or_child(&self, container: &Container) -> bool {
        self.toplevel(container).floating
    }

    fn is_fullscreen_or_child(&self, container: &Container) -> bool {
        let mut current = Some(container);
        while let Some(c) = current {
            if c.fullscreen_mode != FullscreenMode::None {
                return true;
            }
            current = c.parent.and_then(|id| self.container(id));
        }
        false
    }
}
