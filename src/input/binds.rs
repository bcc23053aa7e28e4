//! Mouse binding resolution.
//!
//! This module matches pointer buttons against the bindings of the active mode. It has no seat or
//! tree dependencies so that it can be tested in isolation.

use bitflags::bitflags;
use tessel_config::{Modifiers, MouseBind};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BindingFlags: u32 {
        /// Fires on button release rather than press.
        const RELEASE = 1;
        const BORDER = 1 << 1;
        const CONTENTS = 1 << 2;
        const TITLEBAR = 1 << 3;

        const REGIONS = Self::BORDER.bits() | Self::CONTENTS.bits() | Self::TITLEBAR.bits();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseBinding {
    pub modifiers: Modifiers,
    /// Buttons of the chord, sorted ascending.
    pub keys: Vec<u32>,
    pub flags: BindingFlags,
    /// Device identifier, or `"*"` for any device.
    pub input: String,
    pub command: String,
}

impl MouseBinding {
    pub fn from_config(bind: &MouseBind) -> Self {
        let mut flags = BindingFlags::empty();
        if !bind.exclude_titlebar {
            flags |= BindingFlags::TITLEBAR;
        }
        if bind.border {
            flags |= BindingFlags::BORDER;
        }
        if bind.whole_window {
            flags |= BindingFlags::REGIONS;
        }
        if bind.release {
            flags |= BindingFlags::RELEASE;
        }

        Self {
            modifiers: bind.chord.modifiers,
            keys: bind.chord.buttons.clone(),
            flags,
            input: bind.input().to_owned(),
            command: bind.command.clone(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.input == "*"
    }
}

/// Where the cursor is, for matching binding regions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegions {
    pub on_titlebar: bool,
    pub on_border: bool,
    pub on_contents: bool,
    pub on_workspace: bool,
}

impl ClickRegions {
    /// Binding regions that the click falls into.
    ///
    /// A click on an empty workspace counts as every region at once.
    pub fn click_region(self) -> BindingFlags {
        let mut region = BindingFlags::empty();
        if self.on_titlebar || self.on_workspace {
            region |= BindingFlags::TITLEBAR;
        }
        if self.on_border || self.on_workspace {
            region |= BindingFlags::BORDER;
        }
        if self.on_contents || self.on_workspace {
            region |= BindingFlags::CONTENTS;
        }
        region
    }
}

/// Finds the binding for the held buttons.
///
/// Modifiers must match exactly. A binding for the exact `device` wins over a `"*"` binding;
/// otherwise the first matching binding wins.
pub fn find_mouse_binding<'a>(
    bindings: impl IntoIterator<Item = &'a MouseBinding>,
    pressed: &[u32],
    modifiers: Modifiers,
    release: bool,
    regions: ClickRegions,
    device: &str,
) -> Option<&'a MouseBinding> {
    let click_region = regions.click_region();

    let mut current: Option<&MouseBinding> = None;
    for binding in bindings {
        if binding.modifiers != modifiers
            || binding.keys.len() != pressed.len()
            || binding.flags.contains(BindingFlags::RELEASE) != release
            || !binding.flags.intersects(click_region)
        {
            continue;
        }

        // An empty workspace is every region at once, so the binding must accept all of them.
        if regions.on_workspace && !binding.flags.contains(click_region) {
            continue;
        }

        if binding.input != device && !binding.is_wildcard() {
            continue;
        }

        if binding.keys != pressed {
            continue;
        }

        if binding.input == device {
            return Some(binding);
        }
        if current.is_none() {
            current = Some(binding);
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tessel_config::buttons::{BTN_LEFT, BTN_RIGHT, SCROLL_UP};
    use tessel_config::MouseChord;

    use super::*;

    fn binding(keys: &[u32], flags: BindingFlags, input: &str, command: &str) -> MouseBinding {
        MouseBinding {
            modifiers: Modifiers::empty(),
            keys: keys.to_vec(),
            flags,
            input: input.to_owned(),
            command: command.to_owned(),
        }
    }

    const CONTENTS: ClickRegions = ClickRegions {
        on_titlebar: false,
        on_border: false,
        on_contents: true,
        on_workspace: false,
    };

    const WORKSPACE: ClickRegions = ClickRegions {
        on_titlebar: false,
        on_border: false,
        on_contents: false,
        on_workspace: true,
    };

    fn command(found: Option<&MouseBinding>) -> Option<&str> {
        found.map(|b| b.command.as_str())
    }

    #[test]
    fn flags_from_config() {
        let bind = |whole_window, border, exclude_titlebar, release| MouseBind {
            chord: MouseChord {
                modifiers: Modifiers::LOGO,
                buttons: vec![BTN_LEFT],
            },
            command: String::from("cmd"),
            release,
            whole_window,
            border,
            exclude_titlebar,
            input: None,
        };

        let b = MouseBinding::from_config(&bind(false, false, false, false));
        assert_eq!(b.flags, BindingFlags::TITLEBAR);
        assert_eq!(b.input, "*");
        assert_eq!(b.modifiers, Modifiers::LOGO);

        let b = MouseBinding::from_config(&bind(false, true, true, true));
        assert_eq!(b.flags, BindingFlags::BORDER | BindingFlags::RELEASE);

        let b = MouseBinding::from_config(&bind(true, false, true, false));
        assert_eq!(b.flags, BindingFlags::REGIONS);
    }

    #[test]
    fn click_regions() {
        assert_eq!(CONTENTS.click_region(), BindingFlags::CONTENTS);
        assert_eq!(WORKSPACE.click_region(), BindingFlags::REGIONS);
        assert_eq!(ClickRegions::default().click_region(), BindingFlags::empty());
    }

    #[test]
    fn workspace_needs_every_region() {
        let bindings = [
            binding(&[BTN_LEFT], BindingFlags::TITLEBAR, "*", "titlebar only"),
            binding(&[BTN_LEFT], BindingFlags::REGIONS, "*", "whole window"),
        ];

        let found = find_mouse_binding(&bindings, &[BTN_LEFT], Modifiers::empty(), false, WORKSPACE, "*");
        assert_eq!(command(found), Some("whole window"));

        let found =
            find_mouse_binding(&bindings[..1], &[BTN_LEFT], Modifiers::empty(), false, WORKSPACE, "*");
        assert_eq!(command(found), None);
    }

    #[test]
    fn exact_device_wins() {
        let bindings = [
            binding(&[BTN_LEFT], BindingFlags::REGIONS, "*", "any 1"),
            binding(&[BTN_LEFT], BindingFlags::REGIONS, "*", "any 2"),
            binding(&[BTN_LEFT], BindingFlags::REGIONS, "1:1:mouse", "mouse 1"),
            binding(&[BTN_LEFT], BindingFlags::REGIONS, "1:1:mouse", "mouse 2"),
        ];

        let find = |device: &str| {
            command(find_mouse_binding(
                &bindings,
                &[BTN_LEFT],
                Modifiers::empty(),
                false,
                CONTENTS,
                device,
            ))
        };
        assert_eq!(find("1:1:mouse"), Some("mouse 1"));
        assert_eq!(find("2:2:trackball"), Some("any 1"));
        assert_eq!(find("*"), Some("any 1"));
    }

    #[test]
    fn other_device_is_skipped() {
        let bindings = [binding(&[BTN_LEFT], BindingFlags::REGIONS, "1:1:mouse", "mouse")];
        let found =
            find_mouse_binding(&bindings, &[BTN_LEFT], Modifiers::empty(), false, CONTENTS, "*");
        assert_eq!(found, None);
    }

    #[test]
    fn modifiers_match_exactly() {
        let mut b = binding(&[BTN_RIGHT], BindingFlags::REGIONS, "*", "resize");
        b.modifiers = Modifiers::LOGO;
        let bindings = [b];

        let find = |modifiers| {
            command(find_mouse_binding(&bindings, &[BTN_RIGHT], modifiers, false, CONTENTS, "*"))
        };
        assert_eq!(find(Modifiers::LOGO), Some("resize"));
        assert_eq!(find(Modifiers::LOGO | Modifiers::SHIFT), None);
        assert_eq!(find(Modifiers::empty()), None);
    }

    #[test]
    fn release_and_chords() {
        let bindings = [
            binding(
                &[BTN_LEFT],
                BindingFlags::REGIONS | BindingFlags::RELEASE,
                "*",
                "on release",
            ),
            binding(&[BTN_LEFT, BTN_RIGHT], BindingFlags::REGIONS, "*", "chord"),
            binding(&[SCROLL_UP], BindingFlags::CONTENTS, "*", "scroll"),
        ];

        let find = |pressed: &[u32], release| {
            command(find_mouse_binding(
                &bindings,
                pressed,
                Modifiers::empty(),
                release,
                CONTENTS,
                "*",
            ))
        };
        assert_eq!(find(&[BTN_LEFT], false), None);
        assert_eq!(find(&[BTN_LEFT], true), Some("on release"));
        assert_eq!(find(&[BTN_LEFT, BTN_RIGHT], false), Some("chord"));
        assert_eq!(find(&[BTN_RIGHT], false), None);
        assert_eq!(find(&[SCROLL_UP], false), Some("scroll"));
        assert_eq!(find(&[], false), None);
    }

    #[test]
    fn region_must_overlap() {
        let bindings = [binding(&[BTN_LEFT], BindingFlags::TITLEBAR, "*", "titlebar")];
        let on_titlebar = ClickRegions {
            on_titlebar: true,
            ..Default::default()
        };

        let find = |regions| {
            command(find_mouse_binding(
                &bindings,
                &[BTN_LEFT],
                Modifiers::empty(),
                false,
                regions,
                "*",
            ))
        };
        assert_eq!(find(on_titlebar), Some("titlebar"));
        assert_eq!(find(CONTENTS), None);
    }

    fn arbitrary_binding() -> impl Strategy<Value = MouseBinding> {
        (
            prop::sample::subsequence(vec![BTN_LEFT, BTN_RIGHT, SCROLL_UP], 1..=2),
            0u32..16,
            prop::sample::select(vec!["*", "1:1:mouse", "2:2:pad"]),
            0u32..2,
        )
            .prop_map(|(keys, flags, input, modifiers)| MouseBinding {
                modifiers: Modifiers::from_bits_truncate(modifiers << 6),
                keys,
                flags: BindingFlags::from_bits_truncate(flags),
                input: input.to_owned(),
                command: String::new(),
            })
    }

    proptest! {
        #[test]
        fn matching_is_deterministic(
            bindings in prop::collection::vec(arbitrary_binding(), 0..12),
            pressed in prop::sample::subsequence(vec![BTN_LEFT, BTN_RIGHT, SCROLL_UP], 0..=2),
            logo in any::<bool>(),
            release in any::<bool>(),
            regions in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
            device in prop::sample::select(vec!["*", "1:1:mouse", "3:3:other"]),
        ) {
            let modifiers = if logo { Modifiers::LOGO } else { Modifiers::empty() };
            let regions = ClickRegions {
                on_titlebar: regions.0,
                on_border: regions.1,
                on_contents: regions.2,
                on_workspace: regions.3,
            };

            let first = find_mouse_binding(&bindings, &pressed, modifiers, release, regions, device)
                .map(|b| b as *const MouseBinding);
            let second = find_mouse_binding(&bindings, &pressed, modifiers, release, regions, device)
                .map(|b| b as *const MouseBinding);
            prop_assert_eq!(first, second);

            // An exact match, when one exists, is the first exact match in the list.
            let exact = bindings.iter().position(|b| {
                b.input == device
                    && find_mouse_binding([b], &pressed, modifiers, release, regions, device).is_some()
            });
            if let Some(idx) = exact {
                prop_assert_eq!(first, Some(&bindings[idx] as *const MouseBinding));
            }
        }
    }
}
