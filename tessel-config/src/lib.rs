#[macro_use]
extern crate tracing;

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use miette::{miette, Context, IntoDiagnostic};

pub mod binds;
pub mod buttons;
pub mod modifiers;

pub use binds::{MouseBind, MouseChord};
pub use modifiers::Modifiers;

/// Name of the binding mode that is always present.
pub const DEFAULT_MODE: &str = "default";

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub input: Input,
    #[knuffel(children(name = "input-device"))]
    pub input_devices: Vec<InputDevice>,
    #[knuffel(children(name = "mode"))]
    pub modes: Vec<Mode>,
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Input {
    #[knuffel(child, unwrap(argument), default)]
    pub focus_follows_mouse: FocusFollowsMouse,
    #[knuffel(child, unwrap(argument, str), default)]
    pub floating_mod: Modifiers,
    #[knuffel(child)]
    pub floating_mod_inverse: bool,
    #[knuffel(child, unwrap(argument), default = true)]
    pub tiling_drag: bool,
    #[knuffel(child, unwrap(argument), default = 9)]
    pub tiling_drag_threshold: u32,
}

#[derive(knuffel::DecodeScalar, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusFollowsMouse {
    No,
    #[default]
    Yes,
    Always,
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct InputDevice {
    #[knuffel(argument)]
    pub identifier: String,
    #[knuffel(child, unwrap(argument))]
    pub scroll_factor: Option<f64>,
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Mode {
    #[knuffel(argument)]
    pub name: String,
    #[knuffel(children(name = "mouse-bind"))]
    pub mouse_binds: Vec<MouseBind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: Input::default(),
            input_devices: Vec::new(),
            modes: vec![Mode::new(DEFAULT_MODE)],
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self {
            focus_follows_mouse: FocusFollowsMouse::Yes,
            floating_mod: Modifiers::empty(),
            floating_mod_inverse: false,
            tiling_drag: true,
            tiling_drag_threshold: 9,
        }
    }
}

impl Mode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            mouse_binds: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let config = Self::parse(
            path.file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("config.kdl"),
            &contents,
        )
        .context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> miette::Result<Self> {
        let _span = tracy_client::span!("Config::parse");

        let mut config: Self = knuffel::parse(filename, text)?;

        let mut seen = HashSet::new();
        for mode in &config.modes {
            if !seen.insert(mode.name.as_str()) {
                return Err(miette!("mode {:?} is defined more than once", mode.name));
            }
        }

        if config.mode(DEFAULT_MODE).is_none() {
            config.modes.push(Mode::new(DEFAULT_MODE));
        }

        Ok(config)
    }

    pub fn mode(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.name == name)
    }
}
