//! The setting descriptor and its operation table.

use std::borrow::Cow;
use std::cell::{Cell, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use num_traits::{Bounded, NumCast, ToPrimitive};
use tracing::trace;

use crate::context::{ActionContext, CommandEvent, InputBindings};
use crate::error::{SettingsError, SettingsResult};
use crate::utils::{paths, scan, string_utils};

use super::bind::Keybind;
use super::flags::{FreeFlags, SettingFlags};
use super::kind::SettingKind;
use super::target::Target;
use super::value::SettingValue;

/// Owned-or-static string used for names, labels and placement.
pub type Label = Cow<'static, str>;

/// Callback fired after a setting's value was written (or read).
pub type ChangeHandler = Rc<dyn Fn(&Setting)>;

/// Navigation action slot: start, left, right, up, down, cancel, ok, select.
pub type ActionFn = fn(&mut Setting, &mut ActionContext<'_>) -> SettingsResult<()>;

/// String rendering slot.
pub type RenderFn = fn(&Setting, Option<&dyn InputBindings>) -> String;

/// Navigation events the menu layer forwards to a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingAction {
    Start,
    Left,
    Right,
    Up,
    Down,
    Cancel,
    Ok,
    Select,
}

/// Per-setting dispatch table. Every slot is optional; an empty slot is a no-op.
#[derive(Clone, Default)]
pub struct SettingOps {
    pub change_handler: Option<ChangeHandler>,
    pub read_handler: Option<ChangeHandler>,
    pub action_start: Option<ActionFn>,
    pub action_left: Option<ActionFn>,
    pub action_right: Option<ActionFn>,
    pub action_up: Option<ActionFn>,
    pub action_down: Option<ActionFn>,
    pub action_cancel: Option<ActionFn>,
    pub action_ok: Option<ActionFn>,
    pub action_select: Option<ActionFn>,
    pub render: Option<RenderFn>,
}

impl SettingOps {
    pub fn slot(&self, action: SettingAction) -> Option<ActionFn> {
        match action {
            SettingAction::Start => self.action_start,
            SettingAction::Left => self.action_left,
            SettingAction::Right => self.action_right,
            SettingAction::Up => self.action_up,
            SettingAction::Down => self.action_down,
            SettingAction::Cancel => self.action_cancel,
            SettingAction::Ok => self.action_ok,
            SettingAction::Select => self.action_select,
        }
    }
}

impl fmt::Debug for SettingOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingOps")
            .field("change_handler", &self.change_handler.is_some())
            .field("read_handler", &self.read_handler.is_some())
            .field("action_start", &self.action_start.is_some())
            .field("action_left", &self.action_left.is_some())
            .field("action_right", &self.action_right.is_some())
            .field("action_up", &self.action_up.is_some())
            .field("action_down", &self.action_down.is_some())
            .field("action_cancel", &self.action_cancel.is_some())
            .field("action_ok", &self.action_ok.is_some())
            .field("action_select", &self.action_select.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Command armed by OK and consumed by the command dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CmdTrigger {
    pub idx: Option<CommandEvent>,
    pub triggered: bool,
}

/// Display strings for Bool settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoolLabels {
    pub on_label: Option<Label>,
    pub off_label: Option<Label>,
}

/// Display fallback for Dir/Path settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirInfo {
    pub empty_path: Option<Label>,
}

/// One configurable entry of the registry.
///
/// Fields are public so the menu layer and the builder can inspect and tag
/// entries; the kind-specific behavior lives in [`SettingOps`], wired by the
/// factories in [`crate::setting::factory`].
#[derive(Debug, Clone, Default)]
pub struct Setting {
    pub kind: SettingKind,
    pub name: Option<Label>,
    /// Fingerprint of `name`, zero when there is no name.
    pub name_hash: u32,
    pub short_description: Option<Label>,
    pub group: Option<Label>,
    pub subgroup: Option<Label>,
    pub parent_group: Option<Label>,
    /// `|`-separated option list for StringOptions.
    pub values: Option<Label>,

    pub index: u32,
    pub index_offset: u32,

    pub min: f64,
    pub max: f64,
    pub enforce_minrange: bool,
    pub enforce_maxrange: bool,

    /// Storage width in bytes; for string kinds the buffer capacity
    /// including the terminator slot.
    pub size: usize,
    pub step: f32,

    pub flags: SettingFlags,
    pub free_flags: FreeFlags,

    pub ops: SettingOps,

    pub target: Target,
    pub original_value: SettingValue,
    pub default_value: SettingValue,

    pub bind_type: u32,
    pub browser_selection_type: SettingKind,
    /// printf-style format used to render Float values, e.g. `"%.1f"`.
    pub rounding_fraction: Option<Label>,
    pub cmd_trigger: CmdTrigger,
    pub boolean: BoolLabels,
    pub dir: DirInfo,
}

impl Setting {
    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn name_hash(&self) -> u32 {
        self.name_hash
    }

    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    pub fn flags(&self) -> SettingFlags {
        self.flags
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn index_offset(&self) -> u32 {
        self.index_offset
    }

    pub fn bind_type(&self) -> u32 {
        self.bind_type
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Options of a StringOptions setting, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.values
            .as_deref()
            .into_iter()
            .flat_map(|values| values.split('|'))
            .filter(|option| !option.is_empty())
    }

    pub(crate) fn display_name(&self) -> String {
        self.name().unwrap_or("<anonymous>").to_string()
    }

    fn mismatch(&self) -> SettingsError {
        match self.target {
            Target::None => SettingsError::MissingTarget { name: self.display_name() },
            ref other => SettingsError::KindMismatch {
                name: self.display_name(),
                expected: self.kind,
                found: other.describe(),
            },
        }
    }

    pub(crate) fn bool_cell(&self) -> SettingsResult<&Cell<bool>> {
        match &self.target {
            Target::Bool(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    pub(crate) fn int_cell(&self) -> SettingsResult<&Cell<i32>> {
        match &self.target {
            Target::Int(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    pub(crate) fn uint_cell(&self) -> SettingsResult<&Cell<u32>> {
        match &self.target {
            Target::UInt(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    pub(crate) fn float_cell(&self) -> SettingsResult<&Cell<f32>> {
        match &self.target {
            Target::Float(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    pub(crate) fn string_cell(&self) -> SettingsResult<&RefCell<String>> {
        match &self.target {
            Target::String(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    pub(crate) fn bind_cell(&self) -> SettingsResult<&RefCell<Keybind>> {
        match &self.target {
            Target::Bind(cell) => Ok(cell),
            _ => Err(self.mismatch()),
        }
    }

    /// Mutable access to a string target. Fails instead of panicking when
    /// the application still holds a borrow of the same handle.
    pub(crate) fn string_mut(&self) -> SettingsResult<RefMut<'_, String>> {
        self.string_cell()?
            .try_borrow_mut()
            .map_err(|_| SettingsError::TargetBusy { name: self.display_name() })
    }

    pub(crate) fn bind_mut(&self) -> SettingsResult<RefMut<'_, Keybind>> {
        self.bind_cell()?
            .try_borrow_mut()
            .map_err(|_| SettingsError::TargetBusy { name: self.display_name() })
    }

    /// Current value of the target as a snapshot.
    pub fn current_value(&self) -> SettingsResult<SettingValue> {
        Ok(match self.kind {
            SettingKind::Bool => SettingValue::Bool(self.bool_cell()?.get()),
            SettingKind::Int => SettingValue::Int(self.int_cell()?.get()),
            SettingKind::UInt | SettingKind::Hex => SettingValue::UInt(self.uint_cell()?.get()),
            SettingKind::Float => SettingValue::Float(self.float_cell()?.get()),
            kind if kind.is_string_like() => SettingValue::String(Cow::Owned(
                self.string_cell()?
                    .try_borrow()
                    .map_err(|_| SettingsError::TargetBusy { name: self.display_name() })?
                    .clone(),
            )),
            SettingKind::Bind => SettingValue::Bind(
                self.bind_cell()?
                    .try_borrow()
                    .map_err(|_| SettingsError::TargetBusy { name: self.display_name() })?
                    .clone(),
            ),
            _ => SettingValue::None,
        })
    }

    /// Invokes the change handler, if any.
    pub fn notify_change(&self) {
        if let Some(handler) = &self.ops.change_handler {
            handler(self);
        }
    }

    /// Invokes the read handler, if any.
    pub fn read(&self) {
        if let Some(handler) = &self.ops.read_handler {
            handler(self);
        }
    }

    /// Applies the range policy after a parsed numeric write.
    ///
    /// Only the high side wraps; the low side always clamps.
    fn constrain<T>(&self, value: T, wraparound: bool) -> T
    where
        T: Copy + NumCast + Bounded,
    {
        if !self.flags.contains(SettingFlags::HAS_RANGE) {
            return value;
        }
        let as_f64 = value.to_f64().unwrap_or_default();
        if self.enforce_minrange && as_f64 < self.min {
            return from_bound(self.min);
        }
        if self.enforce_maxrange && as_f64 > self.max {
            return if wraparound { from_bound(self.min) } else { from_bound(self.max) };
        }
        value
    }

    /// Sets the value from its string form, then fires the change handler.
    ///
    /// Numbers are scanned like `scanf` (longest numeric prefix; no number
    /// leaves the value untouched). Bool accepts only `"true"`/`"false"`
    /// and silently ignores anything else. String kinds copy the text,
    /// truncated to fit `size`. Other kinds are left as they are.
    pub fn set_with_string(&self, value: &str, wraparound: bool) -> SettingsResult<()> {
        match self.kind {
            SettingKind::Int => {
                let cell = self.int_cell()?;
                if let Some(parsed) = scan::scan_i32(value) {
                    cell.set(self.constrain(parsed, wraparound));
                }
            }
            SettingKind::UInt => {
                let cell = self.uint_cell()?;
                if let Some(parsed) = scan::scan_u32(value) {
                    cell.set(self.constrain(parsed, wraparound));
                }
            }
            SettingKind::Float => {
                let cell = self.float_cell()?;
                if let Some(parsed) = scan::scan_f32(value) {
                    cell.set(self.constrain(parsed, wraparound));
                }
            }
            SettingKind::Path | SettingKind::Dir | SettingKind::String | SettingKind::StringOptions => {
                let mut target = self.string_mut()?;
                target.clear();
                target.push_str(string_utils::truncate_to_size(value, self.size));
            }
            SettingKind::Action => {
                // Actions only carry a string buffer when a caller attached one.
                if let Target::String(_) = self.target {
                    let mut target = self.string_mut()?;
                    target.clear();
                    target.push_str(string_utils::truncate_to_size(value, self.size));
                }
            }
            SettingKind::Bool => {
                let cell = self.bool_cell()?;
                match value {
                    "true" => cell.set(true),
                    "false" => cell.set(false),
                    _ => {}
                }
            }
            _ => {}
        }

        self.notify_change();
        Ok(())
    }

    /// Restores the target from `default_value`, then fires the change
    /// handler.
    ///
    /// A String setting is restored through [`Setting::set_with_string`],
    /// which fires the handler as well. StringOptions, Path and Dir defaults
    /// go through special-path expansion instead.
    pub fn reset(&self) -> SettingsResult<()> {
        match (self.kind, &self.default_value) {
            (SettingKind::Bool, SettingValue::Bool(value)) => self.bool_cell()?.set(*value),
            (SettingKind::Int, SettingValue::Int(value)) => self.int_cell()?.set(*value),
            (SettingKind::UInt | SettingKind::Hex, SettingValue::UInt(value)) => {
                self.uint_cell()?.set(*value)
            }
            (SettingKind::Float, SettingValue::Float(value)) => self.float_cell()?.set(*value),
            (SettingKind::Bind, SettingValue::Bind(bind)) => *self.bind_mut()? = bind.clone(),
            (SettingKind::String, SettingValue::String(value)) => {
                self.set_with_string(value, false)?;
            }
            (SettingKind::StringOptions | SettingKind::Path | SettingKind::Dir, SettingValue::String(value)) => {
                let expanded = paths::expand_special(value);
                let mut target = self.string_mut()?;
                target.clear();
                target.push_str(string_utils::truncate_to_size(&expanded, self.size));
            }
            _ => {}
        }

        self.notify_change();
        Ok(())
    }

    /// Dispatches a navigation action to its slot. An empty slot is a no-op.
    pub fn invoke(&mut self, action: SettingAction, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
        match self.ops.slot(action) {
            Some(handler) => {
                trace!(setting = self.name().unwrap_or_default(), ?action, "Dispatching setting action");
                handler(self, ctx)
            }
            None => Ok(()),
        }
    }

    /// Renders the current value for display and persistence.
    pub fn string_representation(&self, input: Option<&dyn InputBindings>) -> String {
        match self.ops.render {
            Some(render) => render(self, input),
            None => String::new(),
        }
    }

    /// Returns and clears the armed command, if OK armed one.
    pub fn take_triggered(&mut self) -> Option<CommandEvent> {
        if !self.cmd_trigger.triggered {
            return None;
        }
        self.cmd_trigger.triggered = false;
        self.cmd_trigger.idx
    }

    /// Drops the string fields this registry owns, as recorded in `free_flags`.
    pub(crate) fn release_owned_strings(&mut self) {
        if self.free_flags.contains(FreeFlags::NAME) {
            self.name = None;
            self.name_hash = 0;
        }
        if self.free_flags.contains(FreeFlags::SHORT) {
            self.short_description = None;
        }
        if self.free_flags.contains(FreeFlags::VALUES) {
            self.values = None;
        }
        self.free_flags = FreeFlags::empty();
    }
}

/// Converts an `f64` bound into the target's numeric type, truncating toward
/// zero and saturating at the type's limits.
pub(crate) fn from_bound<T: NumCast + Bounded>(bound: f64) -> T {
    match T::from(bound) {
        Some(value) => value,
        None if bound.is_nan() || bound < 0.0 => T::min_value(),
        None => T::max_value(),
    }
}
