//! The kind tag that selects a setting's type-specific behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which variant of behavior a [`Setting`](super::Setting) carries.
///
/// The kind decides which target shape is valid, which action slots the
/// factory wires up and how the value renders to a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Terminator entry, or "no browser selection" for non-path kinds.
    #[default]
    None,
    Action,
    Bool,
    Int,
    UInt,
    Float,
    Hex,
    Path,
    Dir,
    String,
    StringOptions,
    Bind,
    Group,
    SubGroup,
    EndGroup,
    EndSubGroup,
}

impl SettingKind {
    /// Returns `true` for the structural markers that open or close a group
    /// or subgroup.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            SettingKind::Group | SettingKind::SubGroup | SettingKind::EndGroup | SettingKind::EndSubGroup
        )
    }

    /// Returns `true` for kinds whose target is a string buffer.
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            SettingKind::String | SettingKind::StringOptions | SettingKind::Path | SettingKind::Dir
        )
    }

    /// Returns `true` for kinds that step through `min..=max` with left/right.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SettingKind::Int | SettingKind::UInt | SettingKind::Float | SettingKind::Hex)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::None => "none",
            SettingKind::Action => "action",
            SettingKind::Bool => "bool",
            SettingKind::Int => "int",
            SettingKind::UInt => "uint",
            SettingKind::Float => "float",
            SettingKind::Hex => "hex",
            SettingKind::Path => "path",
            SettingKind::Dir => "dir",
            SettingKind::String => "string",
            SettingKind::StringOptions => "string_options",
            SettingKind::Bind => "bind",
            SettingKind::Group => "group",
            SettingKind::SubGroup => "sub_group",
            SettingKind::EndGroup => "end_group",
            SettingKind::EndSubGroup => "end_sub_group",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SettingKind: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Send, Sync);

    #[test]
    fn kind_default_is_none() {
        assert_eq!(SettingKind::default(), SettingKind::None);
    }

    #[test]
    fn numeric_kinds_are_classified() {
        for kind in [SettingKind::Int, SettingKind::UInt, SettingKind::Float, SettingKind::Hex] {
            assert!(kind.is_numeric(), "{:?}", kind);
        }
        for kind in [SettingKind::Bool, SettingKind::String, SettingKind::Bind, SettingKind::Group] {
            assert!(!kind.is_numeric(), "{:?}", kind);
        }
    }

    #[test]
    fn markers_are_classified() {
        assert!(SettingKind::Group.is_marker());
        assert!(SettingKind::EndSubGroup.is_marker());
        assert!(!SettingKind::Action.is_marker());
        assert!(!SettingKind::None.is_marker());
    }

    #[test]
    fn string_like_kinds() {
        for kind in [SettingKind::String, SettingKind::StringOptions, SettingKind::Path, SettingKind::Dir] {
            assert!(kind.is_string_like(), "{} should be string-like", kind);
        }
        assert!(!SettingKind::Bind.is_string_like());
    }

    #[test]
    fn kind_serde_uses_snake_case() {
        let serialized = serde_json::to_string(&SettingKind::StringOptions).unwrap();
        assert_eq!(serialized, "\"string_options\"");
        let back: SettingKind = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, SettingKind::StringOptions);
        assert_eq!(SettingKind::UInt.to_string(), "uint");
    }
}
