//! Pointer button codes.
//!
//! Real buttons use their evdev codes. Scroll directions get synthetic codes right above
//! `KEY_MAX` so that they can never collide with a real button and can be tracked in the same
//! pressed-button set as real buttons.

pub const BTN_LEFT: u32 = 0x110;
pub const BTN_RIGHT: u32 = 0x111;
pub const BTN_MIDDLE: u32 = 0x112;
pub const BTN_SIDE: u32 = 0x113;
pub const BTN_EXTRA: u32 = 0x114;
pub const BTN_FORWARD: u32 = 0x115;
pub const BTN_BACK: u32 = 0x116;
pub const BTN_TASK: u32 = 0x117;

const KEY_MAX: u32 = 0x2ff;

pub const SCROLL_UP: u32 = KEY_MAX + 1;
pub const SCROLL_DOWN: u32 = KEY_MAX + 2;
pub const SCROLL_LEFT: u32 = KEY_MAX + 3;
pub const SCROLL_RIGHT: u32 = KEY_MAX + 4;

/// Code for an axis event without a direction.
///
/// The parser never produces it, so no binding can match it.
pub const NO_BUTTON: u32 = 0;

const NAMES: &[(&str, u32)] = &[
    // X11 numbering.
    ("button1", BTN_LEFT),
    ("button2", BTN_MIDDLE),
    ("button3", BTN_RIGHT),
    ("button4", SCROLL_UP),
    ("button5", SCROLL_DOWN),
    ("button6", SCROLL_LEFT),
    ("button7", SCROLL_RIGHT),
    ("button8", BTN_SIDE),
    ("button9", BTN_EXTRA),
    // evdev names.
    ("BTN_LEFT", BTN_LEFT),
    ("BTN_RIGHT", BTN_RIGHT),
    ("BTN_MIDDLE", BTN_MIDDLE),
    ("BTN_SIDE", BTN_SIDE),
    ("BTN_EXTRA", BTN_EXTRA),
    ("BTN_FORWARD", BTN_FORWARD),
    ("BTN_BACK", BTN_BACK),
    ("BTN_TASK", BTN_TASK),
];

/// Looks up a button by its X11 (`button3`) or evdev (`BTN_RIGHT`) name, ignoring case.
pub fn button_from_name(name: &str) -> Option<u32> {
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x11_and_evdev_names_agree() {
        assert_eq!(button_from_name("button1"), Some(BTN_LEFT));
        assert_eq!(button_from_name("BTN_LEFT"), Some(BTN_LEFT));
        assert_eq!(button_from_name("btn_right"), Some(BTN_RIGHT));
        assert_eq!(button_from_name("Button3"), Some(BTN_RIGHT));
        assert_eq!(button_from_name("button4"), Some(SCROLL_UP));
        assert_eq!(button_from_name("button10"), None);
    }

    #[test]
    fn scroll_codes_do_not_collide() {
        for code in [SCROLL_UP, SCROLL_DOWN, SCROLL_LEFT, SCROLL_RIGHT] {
            assert!(code > KEY_MAX);
            assert_ne!(code, NO_BUTTON);
        }
    }
}
