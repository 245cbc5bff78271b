//! Keybinding storage edited by Bind-kind settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Joypad button sentinel meaning "not bound".
pub const NO_BTN: u16 = 0xFFFF;

/// Joypad axis sentinel meaning "not bound".
pub const AXIS_NONE: u32 = 0xFFFF_FFFF;

/// Keyboard keycode meaning "no key".
pub const KEY_UNKNOWN: u32 = 0;

/// First menu identifier of the bind range. A setting's `bind_type` minus this
/// value indexes the default binding tables.
pub const BIND_TYPE_BEGIN: u32 = 0x1000;

/// One logical input action mapped to a keyboard key, a joypad button and a
/// joypad axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybind {
    /// Logical input action this binding belongs to.
    pub id: u32,
    pub key: u32,
    pub joykey: u16,
    pub joyaxis: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keybind {
    pub fn new(id: u32, key: u32) -> Self {
        Self {
            id,
            key,
            joykey: NO_BTN,
            joyaxis: AXIS_NONE,
            description: None,
        }
    }

    pub fn with_joykey(mut self, joykey: u16) -> Self {
        self.joykey = joykey;
        self
    }

    pub fn with_joyaxis(mut self, joyaxis: u32) -> Self {
        self.joyaxis = joyaxis;
        self
    }

    /// Clears the joypad half of the binding, leaving the key untouched.
    pub fn clear_joypad(&mut self) {
        self.joykey = NO_BTN;
        self.joyaxis = AXIS_NONE;
    }

    pub fn is_unbound(&self) -> bool {
        self.key == KEY_UNKNOWN && self.joykey == NO_BTN && self.joyaxis == AXIS_NONE
    }
}

impl Default for Keybind {
    fn default() -> Self {
        Self::new(0, KEY_UNKNOWN)
    }
}

/// Fallback label used when no input-binding formatter is available.
impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.joykey != NO_BTN {
            write!(f, "btn {}", self.joykey)
        } else if self.joyaxis != AXIS_NONE {
            write!(f, "axis {}", self.joyaxis)
        } else if self.key != KEY_UNKNOWN {
            write!(f, "key {}", self.key)
        } else {
            f.write_str("---")
        }
    }
}
