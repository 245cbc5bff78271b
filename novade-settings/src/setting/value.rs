//! Kind-tagged value snapshots (`original_value`, `default_value`).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::bind::Keybind;

/// A value captured for a setting, tagged by the shape of the target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SettingValue {
    /// No value applies (markers, actions, or a string kind without default).
    #[default]
    None,
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
    String(Cow<'static, str>),
    Bind(Keybind),
}

impl SettingValue {
    pub fn is_none(&self) -> bool {
        matches!(self, SettingValue::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u32> {
        match self {
            SettingValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bind(&self) -> Option<&Keybind> {
        match self {
            SettingValue::Bind(b) => Some(b),
            _ => None,
        }
    }
}
