//! Public API for declaring a settings tree.
//!
//! [`SettingsBuilder`] keeps track of the open group and subgroup and stamps
//! every registered setting with that placement. Each `config_*` call builds
//! a descriptor through [`crate::setting::factory`] and appends it; the
//! `add_*` calls then tag the entry just registered.
//!
//! ```
//! use novade_settings::builder::{Handlers, SettingsBuilder};
//! use novade_settings::setting::{shared, SettingFlags};
//!
//! # fn main() -> Result<(), novade_settings::error::SettingsError> {
//! let vsync = shared(true);
//! let latency = shared(64u32);
//!
//! let mut builder = SettingsBuilder::new(8)?;
//! builder
//!     .start_group("Video")?
//!     .config_bool(vsync, "video_vsync", "VSync", true, "OFF", "ON", Handlers::none(), SettingFlags::empty())?
//!     .end_group()?
//!     .start_group("Audio")?
//!     .config_uint(latency, "audio_latency", "Latency", 64, Handlers::none())?
//!     .add_range(8.0, 512.0, 8.0, true, true)?
//!     .end_group()?;
//!
//! let list = builder.into_list();
//! assert_eq!(list.len(), 6);
//! # Ok(())
//! # }
//! ```

use std::rc::Rc;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::context::CommandEvent;
use crate::error::SettingsResult;
use crate::registry::SettingsList;
use crate::setting::factory::{self, SettingHeader};
use crate::setting::{
    ChangeHandler, FreeFlags, Keybind, Label, Setting, SettingFlags, SettingKind, SharedBool, SharedFloat,
    SharedInt, SharedKeybind, SharedString, SharedUInt,
};

/// Change and read callbacks for one setting.
#[derive(Clone, Default)]
pub struct Handlers {
    pub change: Option<ChangeHandler>,
    pub read: Option<ChangeHandler>,
}

impl Handlers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn on_change(handler: impl Fn(&Setting) + 'static) -> Self {
        Self {
            change: Some(Rc::new(handler)),
            read: None,
        }
    }

    pub fn with_read(mut self, handler: impl Fn(&Setting) + 'static) -> Self {
        self.read = Some(Rc::new(handler));
        self
    }
}

/// Declares settings into a [`SettingsList`] while tracking group placement.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    list: SettingsList,
    group: Option<Label>,
    subgroup: Option<Label>,
    parent_group: Option<Label>,
}

impl SettingsBuilder {
    pub fn new(capacity: usize) -> SettingsResult<Self> {
        Ok(Self::from_list(SettingsList::new(capacity)?))
    }

    pub fn with_config(config: &RegistryConfig) -> SettingsResult<Self> {
        Ok(Self::from_list(SettingsList::with_config(config)?))
    }

    /// Continues declaring into an existing list.
    pub fn from_list(list: SettingsList) -> Self {
        Self {
            list,
            group: None,
            subgroup: None,
            parent_group: None,
        }
    }

    /// Sets the parent group stamped on every following entry, e.g. the
    /// menu the groups are shown under.
    pub fn set_parent_group(&mut self, parent_group: Option<Label>) -> &mut Self {
        self.parent_group = parent_group;
        self
    }

    pub fn list(&self) -> &SettingsList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SettingsList {
        &mut self.list
    }

    pub fn into_list(self) -> SettingsList {
        self.list
    }

    fn header(&self, name: impl Into<Label>, short_description: impl Into<Label>, handlers: Handlers) -> SettingHeader {
        SettingHeader {
            change_handler: handlers.change,
            read_handler: handlers.read,
            ..SettingHeader::new(name, short_description).placed(
                self.group.clone(),
                self.subgroup.clone(),
                self.parent_group.clone(),
            )
        }
    }

    fn push(&mut self, setting: Setting) -> SettingsResult<&mut Self> {
        self.list.append(setting)?;
        Ok(self)
    }

    pub fn start_group(&mut self, name: impl Into<Label>) -> SettingsResult<&mut Self> {
        let name = name.into();
        debug!(group = %name, "Starting settings group");
        let marker = factory::group_setting(SettingKind::Group, Some(name.clone()), self.parent_group.clone());
        self.group = Some(name);
        self.push(marker)
    }

    pub fn end_group(&mut self) -> SettingsResult<&mut Self> {
        debug!(group = self.group.as_deref().unwrap_or_default(), "Ending settings group");
        let marker = factory::group_setting(SettingKind::EndGroup, None, self.parent_group.clone());
        self.push(marker)
    }

    /// Opens a subgroup owned by the currently open group.
    pub fn start_sub_group(&mut self, name: impl Into<Label>) -> SettingsResult<&mut Self> {
        let name = name.into();
        debug!(subgroup = %name, group = self.group.as_deref().unwrap_or_default(), "Starting settings subgroup");
        let marker = factory::subgroup_setting(
            SettingKind::SubGroup,
            Some(name.clone()),
            self.group.clone(),
            self.parent_group.clone(),
        );
        self.subgroup = Some(name);
        self.push(marker)
    }

    pub fn end_sub_group(&mut self) -> SettingsResult<&mut Self> {
        let marker = factory::group_setting(SettingKind::EndSubGroup, None, self.parent_group.clone());
        self.push(marker)
    }

    /// Registers a Bool. Non-empty `flags` are added to the new entry.
    #[allow(clippy::too_many_arguments)]
    pub fn config_bool(
        &mut self,
        target: SharedBool,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: bool,
        off_label: impl Into<Label>,
        on_label: impl Into<Label>,
        handlers: Handlers,
        flags: SettingFlags,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::bool_setting(header, target, default_value, off_label, on_label))?;
        if !flags.is_empty() {
            self.list.current_add_flags(flags)?;
        }
        Ok(self)
    }

    pub fn config_int(
        &mut self,
        target: SharedInt,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: i32,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::int_setting(header, target, default_value))
    }

    pub fn config_uint(
        &mut self,
        target: SharedUInt,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: u32,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::uint_setting(header, target, default_value))
    }

    pub fn config_hex(
        &mut self,
        target: SharedUInt,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: u32,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::hex_setting(header, target, default_value))
    }

    pub fn config_float(
        &mut self,
        target: SharedFloat,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: f32,
        rounding: impl Into<Label>,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::float_setting(header, target, default_value, rounding))
    }

    /// Registers a file path. Paths may be left empty.
    pub fn config_path(
        &mut self,
        target: SharedString,
        size: usize,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: impl Into<Label>,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        let empty = Some(Label::Borrowed(""));
        self.push(factory::string_setting(
            SettingKind::Path,
            header,
            target,
            size,
            default_value,
            empty,
        ))?;
        self.list.current_add_flags(SettingFlags::ALLOW_EMPTY)?;
        Ok(self)
    }

    /// Registers a directory; `empty` is shown while no directory is set.
    #[allow(clippy::too_many_arguments)]
    pub fn config_dir(
        &mut self,
        target: SharedString,
        size: usize,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: impl Into<Label>,
        empty: impl Into<Label>,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        self.push(factory::string_setting(
            SettingKind::Dir,
            header,
            target,
            size,
            default_value,
            Some(empty.into()),
        ))?;
        self.list
            .current_add_flags(SettingFlags::ALLOW_EMPTY | SettingFlags::PATH_DIR | SettingFlags::BROWSER_ACTION)?;
        Ok(self)
    }

    pub fn config_string(
        &mut self,
        target: SharedString,
        size: usize,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: impl Into<Label>,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        let empty = Some(Label::Borrowed(""));
        self.push(factory::string_setting(
            SettingKind::String,
            header,
            target,
            size,
            default_value,
            empty,
        ))
    }

    /// Registers a string limited to the `|`-separated `values`. The
    /// registry owns the option list.
    #[allow(clippy::too_many_arguments)]
    pub fn config_string_options(
        &mut self,
        target: SharedString,
        size: usize,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: impl Into<Label>,
        values: impl Into<Label>,
        handlers: Handlers,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, handlers);
        let empty = Some(Label::Borrowed(""));
        self.push(factory::string_options_setting(
            header,
            target,
            size,
            default_value,
            empty,
            values,
        ))?;
        self.list.current_add_free_flags(FreeFlags::VALUES)?;
        Ok(self)
    }

    /// Registers a keybinding for `player`. Bind names are usually built
    /// per player, so the registry owns the name and label.
    pub fn config_bind(
        &mut self,
        target: SharedKeybind,
        player: u32,
        player_offset: u32,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
        default_value: Option<Keybind>,
    ) -> SettingsResult<&mut Self> {
        let header = self.header(name, short_description, Handlers::none());
        self.push(factory::bind_setting(header, target, player, player_offset, default_value))?;
        self.list.current_add_free_flags(FreeFlags::NAME | FreeFlags::SHORT)?;
        Ok(self)
    }

    pub fn config_action(
        &mut self,
        name: impl Into<Label>,
        short_description: impl Into<Label>,
    ) -> SettingsResult<&mut Self> {
        let setting = factory::action_setting(
            name,
            short_description,
            self.group.clone(),
            self.subgroup.clone(),
            self.parent_group.clone(),
        );
        self.push(setting)
    }

    pub fn add_flags(&mut self, flags: SettingFlags) -> SettingsResult<&mut Self> {
        self.list.current_add_flags(flags)?;
        Ok(self)
    }

    pub fn add_free_flags(&mut self, free_flags: FreeFlags) -> SettingsResult<&mut Self> {
        self.list.current_add_free_flags(free_flags)?;
        Ok(self)
    }

    pub fn add_range(
        &mut self,
        min: f64,
        max: f64,
        step: f32,
        enforce_minrange: bool,
        enforce_maxrange: bool,
    ) -> SettingsResult<&mut Self> {
        self.list
            .current_add_range(min, max, step, enforce_minrange, enforce_maxrange)?;
        Ok(self)
    }

    pub fn add_cmd(&mut self, event: CommandEvent) -> SettingsResult<&mut Self> {
        self.list.current_add_cmd(event)?;
        Ok(self)
    }

    pub fn add_values(&mut self, values: impl Into<Label>) -> SettingsResult<&mut Self> {
        self.list.current_add_values(values)?;
        Ok(self)
    }

    pub fn add_bind_type(&mut self, bind_type: u32) -> SettingsResult<&mut Self> {
        self.list.current_add_bind_type(bind_type)?;
        Ok(self)
    }
}
