// novade-settings/tests/navigation.rs

use std::cell::Cell;
use std::rc::Rc;

use novade_settings::builder::{Handlers, SettingsBuilder};
use novade_settings::config::RegistryConfig;
use novade_settings::context::{ActionContext, CommandDispatcher, CommandEvent, InputBindings};
use novade_settings::setting::{
    shared, shared_keybind, shared_string, Keybind, Setting, SettingAction, SettingKind, SettingValue, BIND_TYPE_BEGIN,
    NO_BTN,
};
use novade_settings::{SettingsError, SettingsList};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn swap_interval(value: u32) -> (SettingsList, Rc<Cell<u32>>) {
    let target = shared(value);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_uint(Rc::clone(&target), "video_swap_interval", "Swap Interval", 10, Handlers::none())
        .unwrap()
        .add_range(0.0, 10.0, 1.0, true, true)
        .unwrap();
    (builder.into_list(), target)
}

fn config_with_wraparound(wraparound: bool) -> RegistryConfig {
    let mut config = RegistryConfig::default();
    config.navigation.wraparound_setting_enable = wraparound;
    config
}

#[test]
fn right_clamps_at_max_without_wraparound() {
    let (mut list, target) = swap_interval(5);
    let config = config_with_wraparound(false);
    let mut ctx = ActionContext::from_config(&config);
    let setting = list.find_mut("video_swap_interval").unwrap();

    let mut seen = Vec::new();
    for _ in 0..6 {
        setting.invoke(SettingAction::Right, &mut ctx).unwrap();
        seen.push(target.get());
    }
    assert_eq!(seen, vec![6, 7, 8, 9, 10, 10]);
}

#[test]
fn right_wraps_to_min_with_wraparound() {
    let (mut list, target) = swap_interval(10);
    let config = config_with_wraparound(true);
    let mut ctx = ActionContext::from_config(&config);
    list.find_mut("video_swap_interval")
        .unwrap()
        .invoke(SettingAction::Right, &mut ctx)
        .unwrap();
    assert_eq!(target.get(), 0);
}

#[rstest]
#[case(false)]
#[case(true)]
fn left_clamps_at_min(#[case] wraparound: bool) {
    let (mut list, target) = swap_interval(0);
    let mut ctx = ActionContext::new(wraparound);
    list.find_mut("video_swap_interval")
        .unwrap()
        .invoke(SettingAction::Left, &mut ctx)
        .unwrap();
    assert_eq!(target.get(), 0);
}

#[test]
fn left_then_right_round_trips_unranged_numbers() {
    let int = shared(-3);
    let uint = shared(7u32);
    let float = shared(0.75f32);
    let mut builder = SettingsBuilder::new(4).unwrap();
    builder
        .config_int(Rc::clone(&int), "input_axis_threshold", "Threshold", 0, Handlers::none())
        .unwrap()
        .config_uint(Rc::clone(&uint), "audio_latency", "Latency", 64, Handlers::none())
        .unwrap()
        .config_float(Rc::clone(&float), "audio_volume", "Volume", 1.0, "%.2f", Handlers::none())
        .unwrap();
    for setting in builder.list_mut().iter_mut() {
        // Integer kinds truncate fractional steps.
        setting.step = if setting.kind == SettingKind::Float { 0.25 } else { 2.0 };
    }
    let mut list = builder.into_list();
    let mut ctx = ActionContext::new(false);

    for setting in list.iter_mut() {
        setting.invoke(SettingAction::Left, &mut ctx).unwrap();
        setting.invoke(SettingAction::Right, &mut ctx).unwrap();
    }
    assert_eq!((int.get(), uint.get(), float.get()), (-3, 7, 0.75));

    for setting in list.iter_mut() {
        setting.invoke(SettingAction::Right, &mut ctx).unwrap();
        setting.invoke(SettingAction::Left, &mut ctx).unwrap();
    }
    assert_eq!((int.get(), uint.get(), float.get()), (-3, 7, 0.75));
}

#[test]
fn bool_ok_toggles_and_notifies_once_per_transition() {
    let target = shared(false);
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_bool(
            Rc::clone(&target),
            "pause_nonactive",
            "Pause when inactive",
            true,
            "OFF",
            "ON",
            Handlers::on_change(move |_| counter.set(counter.get() + 1)),
            Default::default(),
        )
        .unwrap();
    let mut list = builder.into_list();
    let setting = list.get_mut(0).unwrap();
    let mut ctx = ActionContext::new(false);

    setting.invoke(SettingAction::Ok, &mut ctx).unwrap();
    assert_eq!((target.get(), changes.get()), (true, 1));
    setting.invoke(SettingAction::Ok, &mut ctx).unwrap();
    assert_eq!((target.get(), changes.get()), (false, 2));
    assert_eq!(setting.string_representation(None), "OFF");
}

#[test]
fn string_round_trip_and_truncation() {
    let target = shared_string("");
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_string(Rc::clone(&target), 8, "netplay_nickname", "Nickname", "", Handlers::none())
        .unwrap();
    let list = builder.into_list();
    let setting = list.get(0).unwrap();

    setting.set_with_string("Player1", false).unwrap();
    assert_eq!(setting.string_representation(None), "Player1");
    setting.set_with_string("LongNickname", false).unwrap();
    assert_eq!(*target.borrow(), "LongNic");
}

#[rstest]
#[case("42", 42)]
#[case("  -17 frames", -17)]
#[case("not a number", 5)]
fn int_parses_like_scanf(#[case] text: &str, #[case] expected: i32) {
    let target = shared(5);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_int(Rc::clone(&target), "state_slot", "State Slot", 0, Handlers::none())
        .unwrap();
    builder.list().get(0).unwrap().set_with_string(text, false).unwrap();
    assert_eq!(target.get(), expected);
}

#[rstest]
#[case(-42)]
#[case(17)]
#[case(i32::MIN)]
fn int_text_round_trips(#[case] value: i32) {
    let target = shared(value);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_int(Rc::clone(&target), "state_slot", "State Slot", 0, Handlers::none())
        .unwrap();
    let setting = builder.list().get(0).unwrap();

    let rendered = setting.string_representation(None);
    target.set(0);
    setting.set_with_string(&rendered, false).unwrap();
    assert_eq!(target.get(), value);
    assert_eq!(setting.current_value().unwrap(), SettingValue::Int(value));
}

#[rstest]
#[case(0)]
#[case(64)]
#[case(3_000_000_000)]
fn uint_text_round_trips(#[case] value: u32) {
    let target = shared(value);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_uint(Rc::clone(&target), "audio_latency", "Audio Latency", 0, Handlers::none())
        .unwrap();
    let setting = builder.list().get(0).unwrap();

    let rendered = setting.string_representation(None);
    target.set(1);
    setting.set_with_string(&rendered, false).unwrap();
    assert_eq!(target.get(), value);
    assert_eq!(setting.current_value().unwrap(), SettingValue::UInt(value));
}

#[rstest]
#[case(0.75, "%f")]
#[case(-2.5, "%.1f")]
#[case(1.125, "%.3f")]
fn float_text_round_trips(#[case] value: f32, #[case] rounding: &'static str) {
    let target = shared(value);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_float(Rc::clone(&target), "video_scale", "Scale", 1.0, rounding, Handlers::none())
        .unwrap();
    let setting = builder.list().get(0).unwrap();

    let rendered = setting.string_representation(None);
    target.set(9.0);
    setting.set_with_string(&rendered, false).unwrap();
    assert_eq!(target.get(), value);
    assert_eq!(setting.current_value().unwrap(), SettingValue::Float(value));
}

/// Hex targets render as eight hex digits but are not parsed back from text.
#[test]
fn hex_text_is_not_parsed_back() {
    let target = shared(0xff00_00ffu32);
    let changes = Rc::new(Cell::new(0));
    let seen = Rc::clone(&changes);
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_hex(
            Rc::clone(&target),
            "video_message_color",
            "Message Color",
            0,
            Handlers::on_change(move |_| seen.set(seen.get() + 1)),
        )
        .unwrap();
    let setting = builder.list().get(0).unwrap();

    assert_eq!(setting.string_representation(None), "ff0000ff");
    setting.set_with_string("000000ff", false).unwrap();
    assert_eq!(target.get(), 0xff00_00ff);
    assert_eq!(changes.get(), 1);
}

#[derive(Default)]
struct Commands {
    fired: Vec<CommandEvent>,
}

impl CommandDispatcher for Commands {
    fn dispatch(&mut self, event: CommandEvent) -> bool {
        self.fired.push(event);
        true
    }
}

#[test]
fn action_ok_dispatches_its_command() {
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_action("savestate", "Save State")
        .unwrap()
        .add_cmd(CommandEvent(21))
        .unwrap();
    let mut list = builder.into_list();
    let setting = list.find_mut("savestate").unwrap();

    assert!(matches!(
        setting.invoke(SettingAction::Ok, &mut ActionContext::new(false)),
        Err(SettingsError::CollaboratorMissing(_))
    ));

    let mut commands = Commands::default();
    let mut ctx = ActionContext::new(false).with_commands(&mut commands);
    setting.invoke(SettingAction::Ok, &mut ctx).unwrap();
    drop(ctx);
    assert_eq!(commands.fired, vec![CommandEvent(21)]);
}

#[test]
fn value_ok_arms_the_trigger() {
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_uint(shared(0u32), "audio_out_rate", "Output Rate", 48000, Handlers::none())
        .unwrap()
        .add_cmd(CommandEvent(3))
        .unwrap();
    let mut list = builder.into_list();
    let setting = list.get_mut(0).unwrap();
    setting.invoke(SettingAction::Ok, &mut ActionContext::new(false)).unwrap();
    assert_eq!(setting.take_triggered(), Some(CommandEvent(3)));
    assert_eq!(setting.take_triggered(), None);
}

struct Input {
    defaults: Vec<Keybind>,
    accept_capture: bool,
    captured: Vec<String>,
}

impl InputBindings for Input {
    fn default_binds(&self, _rest_of_players: bool) -> &[Keybind] {
        &self.defaults
    }

    fn auto_bind(&self, _port: u32, _id: u32) -> Option<Keybind> {
        None
    }

    fn bind_to_string(&self, bind: &Keybind, _auto_bind: Option<&Keybind>) -> String {
        format!("key {}", bind.key)
    }

    fn bind_single(&mut self, setting: &Setting) -> bool {
        self.captured.push(setting.name().unwrap_or_default().to_string());
        self.accept_capture
    }
}

#[test]
fn bind_start_and_capture() {
    let target = shared_keybind(Keybind::new(1, 0).with_joykey(3));
    let mut builder = SettingsBuilder::new(1).unwrap();
    builder
        .config_bind(Rc::clone(&target), 0, 0, "input_player1_y", "Y button (left)", None)
        .unwrap()
        .add_bind_type(BIND_TYPE_BEGIN + 1)
        .unwrap();
    let mut list = builder.into_list();
    let setting = list.get_mut(0).unwrap();

    let mut input = Input {
        defaults: vec![Keybind::new(0, 122), Keybind::new(1, 97)],
        accept_capture: false,
        captured: Vec::new(),
    };
    {
        let mut ctx = ActionContext::new(false).with_input(&mut input);
        setting.invoke(SettingAction::Start, &mut ctx).unwrap();
        assert!(matches!(
            setting.invoke(SettingAction::Ok, &mut ctx),
            Err(SettingsError::BindCapture { .. })
        ));
    }
    assert_eq!(target.borrow().key, 97);
    assert_eq!(target.borrow().joykey, NO_BTN);
    assert_eq!(input.captured, vec!["input_player1_y".to_string()]);
    assert_eq!(setting.string_representation(Some(&input)), "key 97");
}
