use std::fmt;

use kurbo::Point;

use super::edges::find_resize_edge;
use crate::seat::Seat;
use crate::tree::{ClientId, Node, NodeAt, SurfaceId, Tree};
use crate::utils::ResizeEdge;

/// Named xcursor image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorImage {
    LeftPtr,
    ColResize,
    RowResize,
    NResize,
    SResize,
    EResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
}

impl CursorImage {
    pub fn name(self) -> &'static str {
        match self {
            CursorImage::LeftPtr => "left_ptr",
            CursorImage::ColResize => "col-resize",
            CursorImage::RowResize => "row-resize",
            CursorImage::NResize => "n-resize",
            CursorImage::SResize => "s-resize",
            CursorImage::EResize => "e-resize",
            CursorImage::WResize => "w-resize",
            CursorImage::NeResize => "ne-resize",
            CursorImage::NwResize => "nw-resize",
            CursorImage::SeResize => "se-resize",
            CursorImage::SwResize => "sw-resize",
        }
    }
}

impl fmt::Display for CursorImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pointer focus as last sent to the seat.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum PointerFocus {
    /// Whatever the seat has is unknown, so the next rebase must notify it.
    #[default]
    Unknown,
    None,
    Surface(SurfaceId, Point),
}

#[derive(Debug, Default)]
pub struct Cursor {
    /// Position in global coordinates. Moved by the seat before events are dispatched.
    pub location: Point,
    image: Option<CursorImage>,
    image_client: Option<ClientId>,
    pointer_focus: PointerFocus,
}

impl Cursor {
    pub fn new(location: Point) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    pub fn image(&self) -> Option<CursorImage> {
        self.image
    }

    /// Client the current image was set for. `None` for compositor images.
    pub fn image_client(&self) -> Option<ClientId> {
        self.image_client
    }

    /// Records a new image. Returns whether anything changed.
    pub fn set_image(&mut self, image: CursorImage, client: Option<ClientId>) -> bool {
        if self.image == Some(image) && self.image_client == client {
            return false;
        }

        trace!("cursor image {image} for client {client:?}");
        self.image = Some(image);
        self.image_client = client;
        true
    }

    /// Forgets what the seat was last told, so the next rebase sends everything again.
    ///
    /// Needed after another seat op drove the pointer directly.
    pub fn invalidate(&mut self) {
        self.image = None;
        self.image_client = None;
        self.pointer_focus = PointerFocus::Unknown;
    }
}

/// Picks the cursor image for what is under the cursor and updates pointer focus.
///
/// Seat calls are only made for actual changes, so repeating a rebase without motion is silent.
pub fn rebase_cursor<S: Seat>(tree: &impl Tree, seat: &mut S, time_msec: u32, hit: &NodeAt) {
    let location = seat.cursor().location;

    let image = if let Some(surface) = &hit.surface {
        // Client surfaces set their own image; reset it when crossing into another client.
        (seat.cursor().image_client != Some(surface.client))
            .then_some((CursorImage::LeftPtr, Some(surface.client)))
    } else if let Some(c) = hit.node.and_then(|id| tree.node(id)).and_then(Node::container) {
        let edge = find_resize_edge(tree, c, location);
        let image = if edge.is_empty() {
            CursorImage::LeftPtr
        } else if c.floating {
            edge.cursor_image()
        } else if edge.intersects(ResizeEdge::LEFT_RIGHT) {
            CursorImage::ColResize
        } else {
            CursorImage::RowResize
        };
        Some((image, None))
    } else {
        Some((CursorImage::LeftPtr, None))
    };

    if let Some((image, client)) = image {
        if seat.cursor_mut().set_image(image, client) {
            seat.apply_cursor_image(image, client);
        }
    }

    match &hit.surface {
        Some(surface) => {
            if !seat.is_input_allowed(surface.client) {
                return;
            }

            let focus = PointerFocus::Surface(surface.surface, surface.local);
            let previous = seat.cursor().pointer_focus;
            if previous == focus {
                return;
            }

            let entered = match previous {
                PointerFocus::Surface(previous, _) => previous != surface.surface,
                PointerFocus::Unknown | PointerFocus::None => true,
            };
            if entered {
                trace!("pointer enters {:?}", surface.surface);
                seat.pointer_notify_enter(surface.surface, surface.local);
            }
            seat.pointer_notify_motion(time_msec, surface.local);
            seat.cursor_mut().pointer_focus = focus;
        }
        None => {
            if seat.cursor().pointer_focus != PointerFocus::None {
                trace!("clearing pointer focus");
                seat.pointer_clear_focus();
                seat.cursor_mut().pointer_focus = PointerFocus::None;
            }
        }
    }
}
