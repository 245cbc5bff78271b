//! Setting descriptors and their per-kind behavior.
//!
//! A [`Setting`] describes one configurable value: what it edits (its
//! [`Target`]), how it is bounded, how it renders, and which navigation
//! actions it reacts to. The kind-specific parts are plain function pointers
//! in [`SettingOps`], wired by the constructors in [`factory`].

pub mod actions;
pub mod bind;
pub mod descriptor;
pub mod factory;
pub mod flags;
pub mod kind;
pub mod render;
pub mod target;
pub mod value;

pub use bind::{Keybind, AXIS_NONE, BIND_TYPE_BEGIN, KEY_UNKNOWN, NO_BTN};
pub use descriptor::{
    ActionFn, BoolLabels, ChangeHandler, CmdTrigger, DirInfo, Label, RenderFn, Setting, SettingAction,
    SettingOps,
};
pub use factory::SettingHeader;
pub use flags::{FreeFlags, SettingFlags};
pub use kind::SettingKind;
pub use target::{
    shared, shared_keybind, shared_string, SharedBool, SharedFloat, SharedInt, SharedKeybind, SharedString,
    SharedUInt, Target,
};
pub use value::SettingValue;
