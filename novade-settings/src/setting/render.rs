//! Display/persistence renderers wired into the `render` slot.
//!
//! A renderer never fails: a missing or busy target renders as an empty
//! string.

use crate::context::InputBindings;
use crate::utils::{format_float, paths};

use super::descriptor::Setting;

const DEFAULT_FLOAT_FORMAT: &str = "%f";

fn with_string(setting: &Setting, f: impl FnOnce(&str) -> String) -> String {
    setting
        .string_cell()
        .ok()
        .and_then(|cell| cell.try_borrow().ok().map(|value| f(value.as_str())))
        .unwrap_or_default()
}

/// Actions, group markers and anything else without a value.
pub fn render_default(_setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    "...".to_string()
}

/// The on/off label. Without labels the `true`/`false` literal is shown.
pub fn render_bool(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    let Ok(cell) = setting.bool_cell() else {
        return String::new();
    };
    let (label, literal) = if cell.get() {
        (&setting.boolean.on_label, "true")
    } else {
        (&setting.boolean.off_label, "false")
    };
    label.as_deref().unwrap_or(literal).to_string()
}

pub fn render_int(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    setting.int_cell().map(|cell| cell.get().to_string()).unwrap_or_default()
}

pub fn render_uint(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    setting.uint_cell().map(|cell| cell.get().to_string()).unwrap_or_default()
}

/// Eight lowercase hex digits, zero padded.
pub fn render_hex(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    setting
        .uint_cell()
        .map(|cell| format!("{:08x}", cell.get()))
        .unwrap_or_default()
}

/// Formats through `rounding_fraction`, falling back to `%f`.
pub fn render_float(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    let format = setting.rounding_fraction.as_deref().unwrap_or(DEFAULT_FLOAT_FORMAT);
    setting
        .float_cell()
        .map(|cell| format_float(format, f64::from(cell.get())))
        .unwrap_or_default()
}

pub fn render_string(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    with_string(setting, str::to_string)
}

/// File name only.
pub fn render_path(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    with_string(setting, |value| paths::short_representation(value).to_string())
}

/// The directory, or the `empty_path` placeholder when none is set.
pub fn render_dir(setting: &Setting, _input: Option<&dyn InputBindings>) -> String {
    with_string(setting, |value| {
        if value.is_empty() {
            setting.dir.empty_path.as_deref().unwrap_or_default().to_string()
        } else {
            value.to_string()
        }
    })
}

/// Formats the binding through the input subsystem, passing along whatever
/// an auto-configured device on the setting's port supplies for the same
/// action.
pub fn render_bind(setting: &Setting, input: Option<&dyn InputBindings>) -> String {
    let Ok(cell) = setting.bind_cell() else {
        return String::new();
    };
    let Ok(bind) = cell.try_borrow() else {
        return String::new();
    };
    match input {
        Some(input) => {
            let auto_bind = input.auto_bind(setting.index_offset, bind.id);
            input.bind_to_string(&bind, auto_bind.as_ref())
        }
        None => bind.to_string(),
    }
}
