use std::collections::HashMap;

use anyhow::Context;
use tessel_config::buttons::{BTN_LEFT, BTN_RIGHT};
use tessel_config::{Config, FocusFollowsMouse, Modifiers};

use crate::input::binds::MouseBinding;

/// Input settings of one binding mode, resolved from the config.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOptions {
    pub focus_follows_mouse: FocusFollowsMouse,
    pub floating_mod: Modifiers,
    pub floating_mod_inverse: bool,
    pub tiling_drag: bool,
    pub tiling_drag_threshold: u32,
    /// Mouse bindings of the active mode, in config order.
    pub mouse_bindings: Vec<MouseBinding>,
    /// Scroll factors keyed by device identifier, `"*"` included.
    pub scroll_factors: HashMap<String, f64>,
}

impl InputOptions {
    /// Resolves options for the binding mode called `mode`.
    ///
    /// Fails when the mode does not exist.
    pub fn from_config(config: &Config, mode: &str) -> anyhow::Result<Self> {
        let _span = tracy_client::span!("InputOptions::from_config");

        let mode = config
            .mode(mode)
            .with_context(|| format!("binding mode {mode:?} does not exist"))?;

        let input = &config.input;
        let scroll_factors = config
            .input_devices
            .iter()
            .filter_map(|dev| Some((dev.identifier.clone(), dev.scroll_factor?)))
            .collect();

        let mouse_bindings: Vec<_> = mode
            .mouse_binds
            .iter()
            .map(MouseBinding::from_config)
            .collect();
        for bind in &mouse_bindings {
            let known = bind.is_wildcard()
                || config.input_devices.iter().any(|dev| dev.identifier == bind.input);
            if !known {
                warn!(
                    "mouse binding {:?} is for unknown device {:?}",
                    bind.command, bind.input
                );
            }
        }
        debug!(
            "resolved input options for mode {:?}: {} mouse bindings",
            mode.name,
            mouse_bindings.len()
        );

        Ok(Self {
            focus_follows_mouse: input.focus_follows_mouse,
            floating_mod: input.floating_mod,
            floating_mod_inverse: input.floating_mod_inverse,
            tiling_drag: input.tiling_drag,
            tiling_drag_threshold: input.tiling_drag_threshold,
            mouse_bindings,
            scroll_factors,
        })
    }

    /// Scroll factor for a device, falling back to the `"*"` entry and then to `1.0`.
    pub fn scroll_factor(&self, device: &str) -> f64 {
        self.scroll_factors
            .get(device)
            .or_else(|| self.scroll_factors.get("*"))
            .copied()
            .unwrap_or(1.)
    }

    /// Button that moves a container while the floating modifier is held.
    pub fn move_button(&self) -> u32 {
        if self.floating_mod_inverse {
            BTN_RIGHT
        } else {
            BTN_LEFT
        }
    }

    /// Button that resizes a container while the floating modifier is held.
    pub fn resize_button(&self) -> u32 {
        if self.floating_mod_inverse {
            BTN_LEFT
        } else {
            BTN_RIGHT
        }
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        let input = tessel_config::Input::default();
        Self {
            focus_follows_mouse: input.focus_follows_mouse,
            floating_mod: input.floating_mod,
            floating_mod_inverse: input.floating_mod_inverse,
            tiling_drag: input.tiling_drag,
            tiling_drag_threshold: input.tiling_drag_threshold,
            mouse_bindings: Vec::new(),
            scroll_factors: HashMap::new(),
        }
    }
}
