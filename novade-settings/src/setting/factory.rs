//! Constructors that produce fully wired descriptors, one per kind.
//!
//! Factories never fail and never validate their targets. Fields a kind does
//! not use stay at their defaults; the operation table is filled in per kind
//! and `original_value` snapshots the target at construction time.

use std::mem::size_of;
use std::rc::Rc;

use crate::utils::fingerprint;

use super::actions;
use super::bind::Keybind;
use super::descriptor::{ActionFn, ChangeHandler, Label, RenderFn, Setting, SettingOps};
use super::kind::SettingKind;
use super::render;
use super::target::{SharedBool, SharedFloat, SharedInt, SharedKeybind, SharedString, SharedUInt, Target};
use super::value::SettingValue;

/// Identity, placement and callbacks shared by every value-carrying kind.
#[derive(Clone, Default)]
pub struct SettingHeader {
    pub name: Option<Label>,
    pub short_description: Option<Label>,
    pub group: Option<Label>,
    pub subgroup: Option<Label>,
    pub parent_group: Option<Label>,
    pub change_handler: Option<ChangeHandler>,
    pub read_handler: Option<ChangeHandler>,
}

impl SettingHeader {
    pub fn new(name: impl Into<Label>, short_description: impl Into<Label>) -> Self {
        Self {
            name: Some(name.into()),
            short_description: Some(short_description.into()),
            ..Self::default()
        }
    }

    /// Places the setting under `group`/`subgroup` of `parent_group`.
    pub fn placed(mut self, group: Option<Label>, subgroup: Option<Label>, parent_group: Option<Label>) -> Self {
        self.group = group;
        self.subgroup = subgroup;
        self.parent_group = parent_group;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&Setting) + 'static) -> Self {
        self.change_handler = Some(Rc::new(handler));
        self
    }

    pub fn on_read(mut self, handler: impl Fn(&Setting) + 'static) -> Self {
        self.read_handler = Some(Rc::new(handler));
        self
    }
}

fn with_header(kind: SettingKind, header: SettingHeader) -> Setting {
    let name_hash = header.name.as_deref().map_or(0, fingerprint);
    Setting {
        kind,
        name_hash,
        name: header.name,
        short_description: header.short_description,
        group: header.group,
        subgroup: header.subgroup,
        parent_group: header.parent_group,
        ops: SettingOps {
            change_handler: header.change_handler,
            read_handler: header.read_handler,
            ..SettingOps::default()
        },
        ..Setting::default()
    }
}

/// Start/left/right/ok/select wiring shared by the numeric kinds.
fn numeric_ops(
    ops: &mut SettingOps,
    left: Option<ActionFn>,
    right: Option<ActionFn>,
    render: RenderFn,
) {
    ops.action_start = Some(actions::generic_start);
    ops.action_left = left;
    ops.action_right = right;
    ops.action_ok = Some(actions::generic_ok);
    ops.action_select = Some(actions::generic_ok);
    ops.render = Some(render);
}

/// The end-of-list sentinel: no kind, no name, no operations.
pub fn terminator_setting() -> Setting {
    Setting::default()
}

/// An entry that runs a command on OK. Actions have no change or read
/// handler.
pub fn action_setting(
    name: impl Into<Label>,
    short_description: impl Into<Label>,
    group: Option<Label>,
    subgroup: Option<Label>,
    parent_group: Option<Label>,
) -> Setting {
    let header = SettingHeader::new(name, short_description).placed(group, subgroup, parent_group);
    let mut setting = with_header(SettingKind::Action, header);
    setting.ops.action_ok = Some(actions::action_ok);
    setting.ops.action_select = Some(actions::action_ok);
    setting.ops.render = Some(render::render_default);
    setting
}

/// A Group or EndGroup marker. A named marker is labelled with its name.
pub fn group_setting(kind: SettingKind, name: Option<Label>, parent_group: Option<Label>) -> Setting {
    let setting = Setting {
        kind,
        name_hash: name.as_deref().map_or(0, fingerprint),
        short_description: name.clone(),
        name,
        parent_group,
        ..Setting::default()
    };
    with_default_render(setting)
}

/// A SubGroup or EndSubGroup marker. `parent_name` is the group that owns
/// it and is stored as the marker's `group`.
pub fn subgroup_setting(
    kind: SettingKind,
    name: Option<Label>,
    parent_name: Option<Label>,
    parent_group: Option<Label>,
) -> Setting {
    let setting = Setting {
        kind,
        name_hash: name.as_deref().map_or(0, fingerprint),
        short_description: name.clone(),
        name,
        group: parent_name,
        parent_group,
        ..Setting::default()
    };
    with_default_render(setting)
}

fn with_default_render(mut setting: Setting) -> Setting {
    setting.ops.render = Some(render::render_default);
    setting
}

pub fn bool_setting(
    header: SettingHeader,
    target: SharedBool,
    default_value: bool,
    off_label: impl Into<Label>,
    on_label: impl Into<Label>,
) -> Setting {
    let mut setting = with_header(SettingKind::Bool, header);
    setting.size = size_of::<bool>();
    setting.ops.action_start = Some(actions::generic_start);
    setting.ops.action_left = Some(actions::bool_toggle);
    setting.ops.action_right = Some(actions::bool_toggle);
    setting.ops.action_ok = Some(actions::bool_ok);
    setting.ops.action_select = Some(actions::generic_ok);
    setting.ops.render = Some(render::render_bool);
    setting.original_value = SettingValue::Bool(target.get());
    setting.default_value = SettingValue::Bool(default_value);
    setting.boolean.off_label = Some(off_label.into());
    setting.boolean.on_label = Some(on_label.into());
    setting.target = Target::Bool(target);
    setting
}

pub fn int_setting(header: SettingHeader, target: SharedInt, default_value: i32) -> Setting {
    let mut setting = with_header(SettingKind::Int, header);
    setting.size = size_of::<i32>();
    numeric_ops(
        &mut setting.ops,
        Some(actions::int_left),
        Some(actions::int_right),
        render::render_int,
    );
    setting.original_value = SettingValue::Int(target.get());
    setting.default_value = SettingValue::Int(default_value);
    setting.target = Target::Int(target);
    setting
}

pub fn uint_setting(header: SettingHeader, target: SharedUInt, default_value: u32) -> Setting {
    let mut setting = with_header(SettingKind::UInt, header);
    setting.size = size_of::<u32>();
    numeric_ops(
        &mut setting.ops,
        Some(actions::uint_left),
        Some(actions::uint_right),
        render::render_uint,
    );
    setting.original_value = SettingValue::UInt(target.get());
    setting.default_value = SettingValue::UInt(default_value);
    setting.target = Target::UInt(target);
    setting
}

/// An unsigned value shown in hex. Hex settings cannot be stepped.
pub fn hex_setting(header: SettingHeader, target: SharedUInt, default_value: u32) -> Setting {
    let mut setting = with_header(SettingKind::Hex, header);
    setting.size = size_of::<u32>();
    numeric_ops(&mut setting.ops, None, None, render::render_hex);
    setting.original_value = SettingValue::UInt(target.get());
    setting.default_value = SettingValue::UInt(default_value);
    setting.target = Target::UInt(target);
    setting
}

/// `rounding` is the printf-style format used for display, e.g. `"%.1f"`.
pub fn float_setting(
    header: SettingHeader,
    target: SharedFloat,
    default_value: f32,
    rounding: impl Into<Label>,
) -> Setting {
    let mut setting = with_header(SettingKind::Float, header);
    setting.size = size_of::<f32>();
    numeric_ops(
        &mut setting.ops,
        Some(actions::float_left),
        Some(actions::float_right),
        render::render_float,
    );
    setting.rounding_fraction = Some(rounding.into());
    setting.original_value = SettingValue::Float(target.get());
    setting.default_value = SettingValue::Float(default_value);
    setting.target = Target::Float(target);
    setting
}

/// A keybinding for player `idx` (`idx_offset` selects the per-player
/// table). Binds have no change or read handler; any in `header` are
/// dropped.
pub fn bind_setting(
    header: SettingHeader,
    target: SharedKeybind,
    idx: u32,
    idx_offset: u32,
    default_value: Option<Keybind>,
) -> Setting {
    let header = SettingHeader {
        change_handler: None,
        read_handler: None,
        ..header
    };
    let mut setting = with_header(SettingKind::Bind, header);
    setting.index = idx;
    setting.index_offset = idx_offset;
    setting.ops.action_start = Some(actions::bind_start);
    setting.ops.action_ok = Some(actions::bind_ok);
    setting.ops.action_select = Some(actions::bind_ok);
    setting.ops.render = Some(render::render_bind);
    setting.original_value = target
        .try_borrow()
        .map(|bind| SettingValue::Bind(bind.clone()))
        .unwrap_or_default();
    setting.default_value = default_value.map_or(SettingValue::None, SettingValue::Bind);
    setting.target = Target::Bind(target);
    setting
}

/// A String, Path or Dir setting backed by a buffer of `size` bytes.
///
/// Path and Dir clear on start and render as a file name or directory;
/// `empty` is what a Dir shows when no directory is set. Plain strings have
/// no actions.
pub fn string_setting(
    kind: SettingKind,
    header: SettingHeader,
    target: SharedString,
    size: usize,
    default_value: impl Into<Label>,
    empty: Option<Label>,
) -> Setting {
    let mut setting = with_header(kind, header);
    setting.size = size;
    setting.dir.empty_path = empty;
    setting.ops.render = Some(render::render_string);
    match kind {
        SettingKind::Dir => {
            setting.ops.action_start = Some(actions::string_start_clear);
            setting.browser_selection_type = SettingKind::Dir;
            setting.ops.render = Some(render::render_dir);
        }
        SettingKind::Path => {
            setting.ops.action_start = Some(actions::string_start_clear);
            setting.browser_selection_type = SettingKind::Path;
            setting.ops.render = Some(render::render_path);
        }
        _ => {}
    }
    setting.original_value = target
        .try_borrow()
        .map(|value| SettingValue::String(value.clone().into()))
        .unwrap_or_default();
    setting.default_value = SettingValue::String(default_value.into());
    setting.target = Target::String(target);
    setting
}

/// A string restricted to the `|`-separated choices in `values`.
pub fn string_options_setting(
    header: SettingHeader,
    target: SharedString,
    size: usize,
    default_value: impl Into<Label>,
    empty: Option<Label>,
    values: impl Into<Label>,
) -> Setting {
    let mut setting = string_setting(SettingKind::StringOptions, header, target, size, default_value, empty);
    setting.values = Some(values.into());
    setting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ActionContext;
    use crate::setting::target::{shared, shared_keybind, shared_string};
    use crate::setting::SettingAction;
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;
    use std::cell::Cell;

    fn header(name: &'static str) -> SettingHeader {
        SettingHeader::new(name, "Label").placed(
            Some(Cow::Borrowed("Video")),
            Some(Cow::Borrowed("Sync")),
            Some(Cow::Borrowed("Main Menu")),
        )
    }

    #[test]
    fn terminator_is_empty() {
        let setting = terminator_setting();
        assert_eq!(setting.kind, SettingKind::None);
        assert_eq!(setting.name, None);
        assert_eq!(setting.name_hash, 0);
        assert!(setting.ops.render.is_none());
        assert_eq!(setting.string_representation(None), "");
    }

    #[test]
    fn bool_factory_wires_toggle_and_snapshot() {
        let target = shared(true);
        let setting = bool_setting(header("video_vsync"), Rc::clone(&target), false, "OFF", "ON");
        assert_eq!(setting.size, 1);
        assert_eq!(setting.original_value, SettingValue::Bool(true));
        assert_eq!(setting.default_value, SettingValue::Bool(false));
        assert_eq!(setting.name_hash, fingerprint("video_vsync"));
        assert_eq!(setting.group.as_deref(), Some("Video"));
        assert!(setting.ops.action_left.is_some());
        assert!(setting.ops.action_up.is_none());
        assert_eq!(setting.string_representation(None), "ON");
    }

    #[test]
    fn numeric_factories_have_expected_sizes() {
        assert_eq!(int_setting(header("a"), shared(0), 0).size, 4);
        assert_eq!(uint_setting(header("b"), shared(0u32), 0).size, 4);
        assert_eq!(hex_setting(header("c"), shared(0u32), 0).size, 4);
        assert_eq!(float_setting(header("d"), shared(0.0f32), 0.0, "%.1f").size, 4);
    }

    #[test]
    fn hex_cannot_step() {
        let target = shared(0x10u32);
        let mut setting = hex_setting(header("video_message_color"), Rc::clone(&target), 0xff);
        setting.step = 1.0;
        let mut ctx = ActionContext::new(false);
        setting.invoke(SettingAction::Right, &mut ctx).unwrap();
        assert_eq!(target.get(), 0x10);
        setting.invoke(SettingAction::Start, &mut ctx).unwrap();
        assert_eq!(target.get(), 0xff);
        assert_eq!(setting.string_representation(None), "000000ff");
    }

    #[test]
    fn float_start_resets_and_notifies() {
        let target = shared(2.0f32);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut setting = float_setting(
            header("audio_volume").on_change(move |_| counter.set(counter.get() + 1)),
            Rc::clone(&target),
            0.5,
            "%.1f",
        );
        setting.invoke(SettingAction::Start, &mut ActionContext::new(false)).unwrap();
        assert_eq!(target.get(), 0.5);
        assert_eq!(calls.get(), 1);
        assert_eq!(setting.string_representation(None), "0.5");
    }

    #[test]
    fn bind_factory_drops_handlers() {
        let target = shared_keybind(Keybind::new(2, 0));
        let setting = bind_setting(
            header("input_player1_up").on_change(|_| {}).on_read(|_| {}),
            Rc::clone(&target),
            0,
            0,
            Some(Keybind::new(2, 273)),
        );
        assert!(setting.ops.change_handler.is_none());
        assert!(setting.ops.read_handler.is_none());
        assert_eq!(setting.original_value, SettingValue::Bind(Keybind::new(2, 0)));
        assert_eq!(setting.size, 0);
        assert!(setting.ops.action_ok.is_some());
    }

    #[test]
    fn bind_reset_copies_default() {
        let target = shared_keybind(Keybind::new(2, 0));
        let setting = bind_setting(header("input_player1_up"), Rc::clone(&target), 0, 0, Some(Keybind::new(2, 273)));
        setting.reset().unwrap();
        assert_eq!(target.borrow().key, 273);
    }

    #[test]
    fn action_has_no_value_handlers() {
        let setting = action_setting("quit_retroarch", "Quit", None, None, None);
        assert_eq!(setting.kind, SettingKind::Action);
        assert!(setting.ops.change_handler.is_none());
        assert!(setting.target.is_none());
        assert_eq!(setting.string_representation(None), "...");
    }

    #[test]
    fn group_markers_label_with_name() {
        let group = group_setting(SettingKind::Group, Some(Cow::Borrowed("Driver Settings")), None);
        assert_eq!(group.short_description.as_deref(), Some("Driver Settings"));
        assert_ne!(group.name_hash, 0);

        let end = group_setting(SettingKind::EndGroup, None, Some(Cow::Borrowed("Main Menu")));
        assert_eq!(end.name_hash, 0);
        assert_eq!(end.short_description, None);

        let sub = subgroup_setting(
            SettingKind::SubGroup,
            Some(Cow::Borrowed("State")),
            Some(Cow::Borrowed("Driver Settings")),
            None,
        );
        assert_eq!(sub.group.as_deref(), Some("Driver Settings"));
        assert_eq!(sub.string_representation(None), "...");
    }

    #[test]
    fn path_and_dir_clear_on_start() {
        let path_target = shared_string("/games/bios/scph1001.bin");
        let mut path = string_setting(
            SettingKind::Path,
            header("libretro_info_path"),
            Rc::clone(&path_target),
            256,
            "",
            None,
        );
        assert_eq!(path.browser_selection_type, SettingKind::Path);
        assert_eq!(path.string_representation(None), "scph1001.bin");
        path.invoke(SettingAction::Start, &mut ActionContext::new(false)).unwrap();
        assert!(path_target.borrow().is_empty());

        let dir = string_setting(
            SettingKind::Dir,
            header("rgui_browser_directory"),
            shared_string(""),
            256,
            "",
            Some(Cow::Borrowed("<default>")),
        );
        assert_eq!(dir.browser_selection_type, SettingKind::Dir);
        assert_eq!(dir.string_representation(None), "<default>");
    }

    #[test]
    fn plain_string_has_no_actions() {
        let setting = string_setting(
            SettingKind::String,
            header("netplay_nickname"),
            shared_string("player"),
            32,
            "",
            None,
        );
        assert!(setting.ops.action_start.is_none());
        assert!(setting.ops.action_ok.is_none());
        assert_eq!(setting.original_value, SettingValue::String(Cow::Borrowed("player")));
        assert_eq!(setting.string_representation(None), "player");
    }

    #[test]
    fn string_options_carry_values() {
        let setting = string_options_setting(
            header("video_driver"),
            shared_string("gl"),
            32,
            "gl",
            None,
            "gl|vulkan|sdl2",
        );
        assert_eq!(setting.kind, SettingKind::StringOptions);
        assert_eq!(setting.options().collect::<Vec<_>>(), vec!["gl", "vulkan", "sdl2"]);
    }
}
