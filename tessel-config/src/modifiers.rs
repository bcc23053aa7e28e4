use std::str::FromStr;

use bitflags::bitflags;
use miette::miette;

bitflags! {
    /// Keyboard modifier mask.
    ///
    /// The bit layout follows the wlroots keyboard modifier mask so that masks coming from the
    /// seat can be used directly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT = 1;
        const CAPS = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const LOGO = 1 << 6;
        const MOD5 = 1 << 7;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

impl Modifiers {
    /// Parses a single modifier name, ignoring case.
    pub fn from_modifier_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let modifier = match &*name {
            "shift" => Self::SHIFT,
            "lock" | "caps" => Self::CAPS,
            "ctrl" | "control" => Self::CTRL,
            "alt" | "mod1" => Self::ALT,
            "mod2" => Self::MOD2,
            "mod3" => Self::MOD3,
            "super" | "mod4" | "logo" | "win" => Self::LOGO,
            "mod5" => Self::MOD5,
            _ => return None,
        };
        Some(modifier)
    }
}

impl FromStr for Modifiers {
    type Err = miette::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::empty());
        }

        let mut modifiers = Self::empty();
        for part in s.split('+') {
            let part = part.trim();
            let Some(modifier) = Self::from_modifier_name(part) else {
                return Err(miette!("invalid modifier: {part}"));
            };
            modifiers |= modifier;
        }
        Ok(modifiers)
    }
}
