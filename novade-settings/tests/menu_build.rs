// novade-settings/tests/menu_build.rs

use novade_settings::builder::{Handlers, SettingsBuilder};
use novade_settings::config::ConfigLoader;
use novade_settings::setting::{
    shared, shared_keybind, shared_string, FreeFlags, Keybind, Setting, SettingFlags, SettingKind, SettingValue,
    BIND_TYPE_BEGIN,
};
use novade_settings::utils::fingerprint;
use novade_settings::SettingsList;
use pretty_assertions::assert_eq;
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(SettingsList: Default, std::fmt::Debug);
assert_not_impl_any!(SettingsList: Send, Sync);
assert_not_impl_any!(Setting: Send, Sync);
assert_impl_all!(novade_settings::SettingsError: std::error::Error, Send, Sync);

// Helper that declares a small driver/video/input tree.
fn build_menu(capacity: usize) -> SettingsList {
    let mut builder = SettingsBuilder::new(capacity).unwrap();
    builder
        .start_group("Driver Settings")
        .unwrap()
        .config_string_options(
            shared_string("gl"),
            32,
            "video_driver",
            "Video Driver",
            "gl",
            "gl|vulkan|sdl2",
            Handlers::none(),
        )
        .unwrap()
        .add_flags(SettingFlags::IS_DRIVER)
        .unwrap()
        .end_group()
        .unwrap()
        .start_group("Video Settings")
        .unwrap()
        .start_sub_group("Sync")
        .unwrap()
        .config_bool(
            shared(true),
            "video_vsync",
            "VSync",
            true,
            "OFF",
            "ON",
            Handlers::none(),
            SettingFlags::empty(),
        )
        .unwrap()
        .config_uint(shared(1u32), "video_swap_interval", "Swap Interval", 1, Handlers::none())
        .unwrap()
        .add_range(1.0, 4.0, 1.0, true, true)
        .unwrap()
        .end_sub_group()
        .unwrap()
        .config_hex(shared(0xffff00u32), "video_message_color", "Message Color", 0xffff00, Handlers::none())
        .unwrap()
        .end_group()
        .unwrap()
        .start_group("Input Settings")
        .unwrap()
        .config_bind(
            shared_keybind(Keybind::new(0, 120)),
            0,
            0,
            "input_player1_b",
            "B button (down)",
            Some(Keybind::new(0, 122)),
        )
        .unwrap()
        .add_bind_type(BIND_TYPE_BEGIN)
        .unwrap()
        .config_dir(
            shared_string(""),
            256,
            "joypad_autoconfig_dir",
            "Joypad Autoconfig Directory",
            "",
            "<default>",
            Handlers::none(),
        )
        .unwrap()
        .config_action("input_remap_save", "Save Remap")
        .unwrap()
        .end_group()
        .unwrap();
    builder.into_list()
}

#[test]
fn registrations_keep_call_order() {
    let list = build_menu(1);
    let kinds: Vec<_> = list.iter().map(Setting::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SettingKind::Group,
            SettingKind::StringOptions,
            SettingKind::EndGroup,
            SettingKind::Group,
            SettingKind::SubGroup,
            SettingKind::Bool,
            SettingKind::UInt,
            SettingKind::EndSubGroup,
            SettingKind::Hex,
            SettingKind::EndGroup,
            SettingKind::Group,
            SettingKind::Bind,
            SettingKind::Dir,
            SettingKind::Action,
            SettingKind::EndGroup,
        ]
    );
    assert_eq!(list.len(), 15);
    assert_eq!(list.capacity(), 16);
}

#[test]
fn name_hash_is_set_iff_named() {
    let list = build_menu(4);
    for setting in &list {
        match setting.name() {
            Some(name) => assert_eq!(setting.name_hash, fingerprint(name), "{}", name),
            None => assert_eq!(setting.name_hash, 0),
        }
    }
}

#[test]
fn lookups_by_group_and_name() {
    let list = build_menu(8);
    let video: Vec<_> = list.entries_in_group("Video Settings").filter_map(Setting::name).collect();
    // The "Sync" subgroup marker is itself placed in "Video Settings" but is skipped.
    assert_eq!(video, vec!["video_vsync", "video_swap_interval", "video_message_color"]);

    let bind = list.find("input_player1_b").unwrap();
    assert_eq!(bind.free_flags, FreeFlags::NAME | FreeFlags::SHORT);
    assert_eq!(bind.default_value, SettingValue::Bind(Keybind::new(0, 122)));
    assert_eq!(bind.group.as_deref(), Some("Input Settings"));

    let driver = list.find("video_driver").unwrap();
    assert_eq!(driver.flags, SettingFlags::IS_DRIVER);
    assert_eq!(driver.options().collect::<Vec<_>>(), vec!["gl", "vulkan", "sdl2"]);
}

#[test]
fn registry_sized_from_config() {
    let config = ConfigLoader::load_from_str("[registry]\ninitial_capacity = 3\n").unwrap();
    let mut builder = SettingsBuilder::with_config(&config).unwrap();
    assert_eq!(builder.list().capacity(), 3);
    for name in ["a", "b", "c", "d"] {
        builder
            .config_int(shared(0), name, name, 0, Handlers::none())
            .unwrap();
    }
    assert_eq!(builder.list().capacity(), 6);
}

#[test]
fn clearing_releases_owned_names() {
    let mut list = build_menu(16);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 16);
}
