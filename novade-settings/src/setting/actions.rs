//! Navigation action handlers wired into [`SettingOps`](super::SettingOps).
//!
//! Every handler has the [`ActionFn`](super::ActionFn) signature so the
//! factories can store them as plain function pointers. Left and right step
//! numeric targets by `step` and apply the enforce flags directly; they do
//! not fire the change handler. Arithmetic happens in `f64` and the result is
//! saturated into the target type.

use tracing::{trace, warn};

use crate::context::ActionContext;
use crate::error::{SettingsError, SettingsResult};

use super::bind::BIND_TYPE_BEGIN;
use super::descriptor::{from_bound, Setting};

/// Start: restore the default value.
pub fn generic_start(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    setting.reset()
}

/// Start for Path and Dir: empty the stored path.
pub fn string_start_clear(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    setting.string_mut()?.clear();
    Ok(())
}

/// Result of stepping right: past `max` becomes `min` or `max`.
fn step_up(setting: &Setting, value: f64, wraparound: bool) -> f64 {
    let stepped = value + f64::from(setting.step);
    if setting.enforce_maxrange && stepped > setting.max {
        if wraparound {
            setting.min
        } else {
            setting.max
        }
    } else {
        stepped
    }
}

/// Result of stepping left: below `min` clamps, it never wraps.
fn step_down(setting: &Setting, value: f64, skip_at_min: bool) -> f64 {
    let stepped = if skip_at_min && value == setting.min {
        value
    } else {
        value - f64::from(setting.step)
    };
    if setting.enforce_minrange && stepped < setting.min {
        setting.min
    } else {
        stepped
    }
}

pub fn int_left(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.int_cell()?;
    cell.set(from_bound(step_down(setting, f64::from(cell.get()), true)));
    Ok(())
}

pub fn int_right(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.int_cell()?;
    cell.set(from_bound(step_up(setting, f64::from(cell.get()), ctx.wraparound)));
    Ok(())
}

pub fn uint_left(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.uint_cell()?;
    cell.set(from_bound(step_down(setting, f64::from(cell.get()), true)));
    Ok(())
}

pub fn uint_right(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.uint_cell()?;
    cell.set(from_bound(step_up(setting, f64::from(cell.get()), ctx.wraparound)));
    Ok(())
}

pub fn float_left(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.float_cell()?;
    cell.set(from_bound(step_down(setting, f64::from(cell.get()), false)));
    Ok(())
}

pub fn float_right(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let cell = setting.float_cell()?;
    cell.set(from_bound(step_up(setting, f64::from(cell.get()), ctx.wraparound)));
    Ok(())
}

/// Left/right on a Bool: write the opposite literal through the string
/// round trip, which fires the change handler once.
pub fn bool_toggle(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let current = setting.bool_cell()?.get();
    setting.set_with_string(if current { "false" } else { "true" }, ctx.wraparound)
}

/// OK on a Bool toggles it as well.
pub fn bool_ok(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    bool_toggle(setting, ctx)
}

/// OK/select: arm the attached command, if any, for the dispatcher to
/// collect through [`Setting::take_triggered`].
pub fn generic_ok(setting: &mut Setting, _ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    if setting.cmd_trigger.idx.is_some() {
        setting.cmd_trigger.triggered = true;
    }
    Ok(())
}

/// OK on an Action: run the attached command right away.
pub fn action_ok(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let Some(event) = setting.cmd_trigger.idx else {
        return Ok(());
    };
    let dispatcher = ctx
        .commands()
        .ok_or(SettingsError::CollaboratorMissing("command dispatcher"))?;
    if dispatcher.dispatch(event) {
        trace!(setting = setting.name().unwrap_or_default(), %event, "Dispatched setting command");
    } else {
        warn!(setting = setting.name().unwrap_or_default(), %event, "Setting command reported failure");
    }
    Ok(())
}

/// Start on a Bind: drop the joypad half and reseed the key from the
/// default binding table.
pub fn bind_start(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    setting.bind_mut()?.clear_joypad();

    let input = ctx
        .input()
        .ok_or(SettingsError::CollaboratorMissing("input bindings"))?;
    let defaults = input.default_binds(setting.index_offset != 0);
    let default_key = setting
        .bind_type
        .checked_sub(BIND_TYPE_BEGIN)
        .and_then(|slot| defaults.get(slot as usize))
        .map(|bind| bind.key);

    match default_key {
        Some(key) => {
            setting.bind_mut()?.key = key;
            Ok(())
        }
        None => {
            warn!(
                setting = setting.name().unwrap_or_default(),
                bind_type = setting.bind_type,
                table_len = defaults.len(),
                "No default binding for bind type"
            );
            Err(SettingsError::BindLookup { bind_type: setting.bind_type })
        }
    }
}

/// OK/select on a Bind: ask the input subsystem to capture a new binding.
pub fn bind_ok(setting: &mut Setting, ctx: &mut ActionContext<'_>) -> SettingsResult<()> {
    let input = ctx
        .input_mut()
        .ok_or(SettingsError::CollaboratorMissing("input bindings"))?;
    if input.bind_single(setting) {
        Ok(())
    } else {
        let name = setting.name().unwrap_or_default().to_string();
        warn!(setting = %name, "Input binding capture declined");
        Err(SettingsError::BindCapture { name })
    }
}
