use bitflags::bitflags;
use kurbo::{Point, Rect};

use crate::input::cursor::CursorImage;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdge: u32 {
        const TOP          = 0b0001;
        const BOTTOM       = 0b0010;
        const LEFT         = 0b0100;
        const RIGHT        = 0b1000;

        const TOP_LEFT     = Self::TOP.bits() | Self::LEFT.bits();
        const BOTTOM_LEFT  = Self::BOTTOM.bits() | Self::LEFT.bits();

        const TOP_RIGHT    = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();

        const LEFT_RIGHT   = Self::LEFT.bits() | Self::RIGHT.bits();
        const TOP_BOTTOM   = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl ResizeEdge {
    /// Directional xcursor image for resizing along these edges.
    pub fn cursor_image(self) -> CursorImage {
        match self {
            Self::LEFT => CursorImage::WResize,
            Self::RIGHT => CursorImage::EResize,
            Self::TOP => CursorImage::NResize,
            Self::BOTTOM => CursorImage::SResize,
            Self::TOP_LEFT => CursorImage::NwResize,
            Self::TOP_RIGHT => CursorImage::NeResize,
            Self::BOTTOM_RIGHT => CursorImage::SeResize,
            Self::BOTTOM_LEFT => CursorImage::SwResize,
            _ => CursorImage::LeftPtr,
        }
    }
}

/// Whether `pos` lies inside `rect`, using half-open bounds on the right and bottom.
pub fn rect_contains(rect: Rect, pos: Point) -> bool {
    rect.x0 <= pos.x && pos.x < rect.x1 && rect.y0 <= pos.y && pos.y < rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_images() {
        assert_eq!(ResizeEdge::TOP_RIGHT.cursor_image().name(), "ne-resize");
        assert_eq!(ResizeEdge::BOTTOM_LEFT.cursor_image().name(), "sw-resize");
        assert_eq!(ResizeEdge::LEFT.cursor_image().name(), "w-resize");
        assert_eq!(ResizeEdge::LEFT_RIGHT.cursor_image().name(), "left_ptr");
        assert_eq!(ResizeEdge::empty().cursor_image().name(), "left_ptr");
    }

    #[test]
    fn half_open_contains() {
        let rect = Rect::new(10., 10., 20., 20.);
        assert!(rect_contains(rect, Point::new(10., 10.)));
        assert!(rect_contains(rect, Point::new(19.9, 19.9)));
        assert!(!rect_contains(rect, Point::new(20., 15.)));
        assert!(!rect_contains(rect, Point::new(15., 20.)));
        assert!(!rect_contains(rect, Point::new(9.9, 15.)));
    }
}
