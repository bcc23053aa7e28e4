use std::str::FromStr;

use miette::miette;

use crate::buttons::button_from_name;
use crate::Modifiers;

/// A `mouse-bind` node inside a `mode`.
///
/// ```kdl
/// mouse-bind "Super+button3" "floating toggle" whole-window=true
/// ```
#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct MouseBind {
    #[knuffel(argument, str)]
    pub chord: MouseChord,
    #[knuffel(argument)]
    pub command: String,
    #[knuffel(property, default)]
    pub release: bool,
    #[knuffel(property, default)]
    pub whole_window: bool,
    #[knuffel(property, default)]
    pub border: bool,
    #[knuffel(property, default)]
    pub exclude_titlebar: bool,
    #[knuffel(property)]
    pub input: Option<String>,
}

impl MouseBind {
    /// Input device identifier this bind is restricted to, or `"*"` for any device.
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or("*")
    }
}

/// Modifiers plus the set of buttons that must be held together.
///
/// Buttons are kept sorted ascending and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseChord {
    pub modifiers: Modifiers,
    pub buttons: Vec<u32>,
}

impl FromStr for MouseChord {
    type Err = miette::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::empty();
        let mut buttons = Vec::new();

        for part in s.split('+') {
            let part = part.trim();

            if let Some(modifier) = Modifiers::from_modifier_name(part) {
                modifiers |= modifier;
                continue;
            }

            let Some(button) = button_from_name(part) else {
                return Err(miette!("invalid modifier or button: {part:?}"));
            };
            if buttons.contains(&button) {
                return Err(miette!("button {part:?} is listed more than once"));
            }
            buttons.push(button);
        }

        if buttons.is_empty() {
            return Err(miette!("mouse binding {s:?} has no button"));
        }

        buttons.sort_unstable();

        Ok(Self { modifiers, buttons })
    }
}
