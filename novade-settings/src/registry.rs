//! The growable, ordered list of setting descriptors.
//!
//! Insertion order is presentation order. Group and subgroup markers are
//! ordinary entries interleaved with the settings they enclose.

use std::slice;

use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::context::CommandEvent;
use crate::error::{SettingsError, SettingsResult};
use crate::setting::{FreeFlags, Label, Setting, SettingFlags};
use crate::utils::fingerprint;

/// Ordered settings registry with a logical capacity that doubles when full.
#[derive(Debug, Default)]
pub struct SettingsList {
    entries: Vec<Setting>,
    capacity: usize,
}

impl SettingsList {
    /// Creates an empty list with room for `capacity` entries.
    ///
    /// Fails with [`SettingsError::Allocation`] if the storage cannot be
    /// reserved.
    pub fn new(capacity: usize) -> SettingsResult<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity).map_err(|_| {
            warn!(requested = capacity, "Failed to allocate settings registry");
            SettingsError::Allocation { requested: capacity }
        })?;
        Ok(Self { entries, capacity })
    }

    /// Creates an empty list sized by `registry.initial_capacity`.
    pub fn with_config(config: &RegistryConfig) -> SettingsResult<Self> {
        Self::new(config.registry.initial_capacity)
    }

    /// Appends `setting`, doubling the capacity first if the list is full.
    ///
    /// On allocation failure the list is left exactly as it was.
    pub fn append(&mut self, setting: Setting) -> SettingsResult<()> {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }
        trace!(
            index = self.entries.len(),
            kind = %setting.kind,
            name = setting.name().unwrap_or_default(),
            "Appending setting"
        );
        self.entries.push(setting);
        Ok(())
    }

    fn grow(&mut self) -> SettingsResult<()> {
        let requested = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(SettingsError::Allocation { requested: usize::MAX })?
        };
        let additional = requested - self.entries.len();
        if let Err(e) = self.entries.try_reserve_exact(additional) {
            warn!(requested, error = %e, "Failed to grow settings registry");
            return Err(SettingsError::Allocation { requested });
        }
        debug!(from = self.capacity, to = requested, "Grew settings registry");
        self.capacity = requested;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical capacity. Always at least `len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Setting> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Setting> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Setting> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Setting> {
        self.entries.iter_mut()
    }

    pub fn as_slice(&self) -> &[Setting] {
        &self.entries
    }

    /// The entry appended last.
    pub fn current_mut(&mut self) -> SettingsResult<&mut Setting> {
        self.entries.last_mut().ok_or(SettingsError::EmptyRegistry)
    }

    pub fn current_add_flags(&mut self, flags: SettingFlags) -> SettingsResult<()> {
        self.current_mut()?.flags |= flags;
        Ok(())
    }

    pub fn current_add_free_flags(&mut self, free_flags: FreeFlags) -> SettingsResult<()> {
        self.current_mut()?.free_flags |= free_flags;
        Ok(())
    }

    /// Sets the bounds and step of the current entry and marks it
    /// [`SettingFlags::HAS_RANGE`].
    pub fn current_add_range(
        &mut self,
        min: f64,
        max: f64,
        step: f32,
        enforce_minrange: bool,
        enforce_maxrange: bool,
    ) -> SettingsResult<()> {
        let current = self.current_mut()?;
        if !current.kind.is_numeric() {
            warn!(name = %current.display_name(), kind = ?current.kind, "Range set on a non-numeric setting");
        }
        current.min = min;
        current.max = max;
        current.step = step;
        current.enforce_minrange = enforce_minrange;
        current.enforce_maxrange = enforce_maxrange;
        current.flags |= SettingFlags::HAS_RANGE;
        Ok(())
    }

    pub fn current_add_cmd(&mut self, event: CommandEvent) -> SettingsResult<()> {
        self.current_mut()?.cmd_trigger.idx = Some(event);
        Ok(())
    }

    pub fn current_add_values(&mut self, values: impl Into<Label>) -> SettingsResult<()> {
        self.current_mut()?.values = Some(values.into());
        Ok(())
    }

    pub fn current_add_bind_type(&mut self, bind_type: u32) -> SettingsResult<()> {
        self.current_mut()?.bind_type = bind_type;
        Ok(())
    }

    /// Index of the first entry named `name`. Fingerprints are compared
    /// before names.
    pub fn position(&self, name: &str) -> Option<usize> {
        let hash = fingerprint(name);
        self.entries
            .iter()
            .position(|setting| setting.name_hash == hash && setting.name() == Some(name))
    }

    pub fn find(&self, name: &str) -> Option<&Setting> {
        self.position(name).and_then(|index| self.entries.get(index))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Setting> {
        self.position(name).and_then(move |index| self.entries.get_mut(index))
    }

    /// Non-marker entries placed in `group`, in presentation order.
    pub fn entries_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Setting> + 'a {
        self.entries
            .iter()
            .filter(move |setting| !setting.kind.is_marker() && setting.group.as_deref() == Some(group))
    }

    /// Releases every entry, dropping the strings marked in `free_flags`.
    /// The logical capacity is kept.
    pub fn clear(&mut self) {
        let released = self
            .entries
            .iter()
            .filter(|setting| !setting.free_flags.is_empty())
            .count();
        for setting in &mut self.entries {
            setting.release_owned_strings();
        }
        debug!(entries = self.entries.len(), released, "Clearing settings registry");
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a SettingsList {
    type Item = &'a Setting;
    type IntoIter = slice::Iter<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
