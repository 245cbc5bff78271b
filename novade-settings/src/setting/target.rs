//! Handles to the live application variables a setting edits.
//!
//! The application owns its configuration state and hands the registry a
//! clone of a shared handle for each configurable value. The registry writes
//! through the handle; the application reads its own clone. Handles are
//! reference counted, so a target always outlives every descriptor that
//! points at it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::bind::Keybind;

pub type SharedBool = Rc<Cell<bool>>;
pub type SharedInt = Rc<Cell<i32>>;
pub type SharedUInt = Rc<Cell<u32>>;
pub type SharedFloat = Rc<Cell<f32>>;
pub type SharedString = Rc<RefCell<String>>;
pub type SharedKeybind = Rc<RefCell<Keybind>>;

/// Creates a shared scalar handle.
pub fn shared<T: Copy>(value: T) -> Rc<Cell<T>> {
    Rc::new(Cell::new(value))
}

/// Creates a shared string handle.
pub fn shared_string(value: impl Into<String>) -> SharedString {
    Rc::new(RefCell::new(value.into()))
}

/// Creates a shared keybinding handle.
pub fn shared_keybind(bind: Keybind) -> SharedKeybind {
    Rc::new(RefCell::new(bind))
}

/// The live variable behind a setting.
#[derive(Debug, Clone, Default)]
pub enum Target {
    /// Markers, actions and terminators edit nothing.
    #[default]
    None,
    Bool(SharedBool),
    Int(SharedInt),
    /// Used by both UInt and Hex settings.
    UInt(SharedUInt),
    Float(SharedFloat),
    /// Used by String, StringOptions, Path and Dir settings.
    String(SharedString),
    Bind(SharedKeybind),
}

impl Target {
    pub fn is_none(&self) -> bool {
        matches!(self, Target::None)
    }

    /// Short name of the handle shape, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Target::None => "no target",
            Target::Bool(_) => "bool",
            Target::Int(_) => "int",
            Target::UInt(_) => "uint",
            Target::Float(_) => "float",
            Target::String(_) => "string",
            Target::Bind(_) => "keybind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_writes_are_visible_to_owner() {
        let owner = shared(5u32);
        let target = Target::UInt(Rc::clone(&owner));
        if let Target::UInt(cell) = &target {
            cell.set(9);
        }
        assert_eq!(owner.get(), 9);
    }

    #[test]
    fn describe_names_shape() {
        assert_eq!(Target::None.describe(), "no target");
        assert_eq!(Target::String(shared_string("x")).describe(), "string");
        assert_eq!(Target::Bind(shared_keybind(Keybind::default())).describe(), "keybind");
    }
}
