//! Identifier and Category Definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdError;
use crate::hash::hash_name;

// ═══════════════════════════════════════════════════════════════════════════════
// UNIQUE ID
// ═══════════════════════════════════════════════════════════════════════════════

/// Numeric ID of a sound-bank object (event, state, switch, bus, ...).
///
/// The value is the hash of the object's design-time name, so it is stable
/// across regenerations as long as the name does not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AkUniqueId(pub u32);

impl AkUniqueId {
    /// Wrap a raw numeric ID
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Compute the ID of a design-time name
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        Self(hash_name(name))
    }

    /// Raw numeric value
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AkUniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AkUniqueId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<AkUniqueId> for u32 {
    fn from(id: AkUniqueId) -> u32 {
        id.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CATEGORY
// ═══════════════════════════════════════════════════════════════════════════════

/// Namespace an identifier belongs to.
///
/// Flat categories map names straight to IDs. Group categories name a state
/// or switch group, and value categories name one value inside such a group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Event,
    StateGroup,
    StateValue,
    SwitchGroup,
    SwitchValue,
    GameParameter,
    Bus,
    AudioDevice,
}

impl Category {
    /// Every category, in generated-table order
    pub const ALL: [Category; 8] = [
        Category::Event,
        Category::StateGroup,
        Category::StateValue,
        Category::SwitchGroup,
        Category::SwitchValue,
        Category::GameParameter,
        Category::Bus,
        Category::AudioDevice,
    ];

    /// Stable snake_case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Event => "event",
            Category::StateGroup => "state_group",
            Category::StateValue => "state_value",
            Category::SwitchGroup => "switch_group",
            Category::SwitchValue => "switch_value",
            Category::GameParameter => "game_parameter",
            Category::Bus => "bus",
            Category::AudioDevice => "audio_device",
        }
    }

    /// Namespace holding this category in the generated header.
    ///
    /// Group values live one level deeper, under [`Category::value_namespace`].
    pub const fn namespace(self) -> &'static str {
        match self {
            Category::Event => "EVENTS",
            Category::StateGroup | Category::StateValue => "STATES",
            Category::SwitchGroup | Category::SwitchValue => "SWITCHES",
            Category::GameParameter => "GAME_PARAMETERS",
            Category::Bus => "BUSSES",
            Category::AudioDevice => "AUDIO_DEVICES",
        }
    }

    /// Inner namespace holding group values (`STATE` / `SWITCH`)
    pub const fn value_namespace(self) -> Option<&'static str> {
        match self {
            Category::StateGroup | Category::StateValue => Some("STATE"),
            Category::SwitchGroup | Category::SwitchValue => Some("SWITCH"),
            _ => None,
        }
    }

    /// Plain name → ID category
    pub const fn is_flat(self) -> bool {
        matches!(
            self,
            Category::Event | Category::GameParameter | Category::Bus | Category::AudioDevice
        )
    }

    /// State or switch group
    pub const fn is_group(self) -> bool {
        matches!(self, Category::StateGroup | Category::SwitchGroup)
    }

    /// Value scoped inside a state or switch group
    pub const fn is_group_value(self) -> bool {
        matches!(self, Category::StateValue | Category::SwitchValue)
    }

    /// Group category owning this value category (and vice versa for groups)
    pub const fn group_category(self) -> Option<Category> {
        match self {
            Category::StateGroup | Category::StateValue => Some(Category::StateGroup),
            Category::SwitchGroup | Category::SwitchValue => Some(Category::SwitchGroup),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| IdError::UnknownCategory(s.to_string()))
    }
}
