//! Static Identifier Tables
//!
//! Compile-time descriptors for a generated identifier table. The generated
//! [`crate::ids`] module declares every ID twice: once as a named constant for
//! static access (`ids::events::PLAY_COWS`) and once in these descriptors so
//! the same data can be walked at runtime.

use crate::id::{AkUniqueId, Category};

/// One named ID inside a flat list or a group
pub type StaticEntry = (&'static str, AkUniqueId);

/// A state or switch group: its own ID plus its ordered values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDef {
    /// Group symbol (e.g. `REGION`)
    pub name: &'static str,
    /// Group ID
    pub id: AkUniqueId,
    /// Values in declaration order
    pub values: &'static [StaticEntry],
}

impl GroupDef {
    /// Look up a value of this group by symbol
    pub fn value(&self, name: &str) -> Option<AkUniqueId> {
        self.values
            .iter()
            .find(|(value, _)| *value == name)
            .map(|(_, id)| *id)
    }
}

/// A complete generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdTable {
    pub events: &'static [StaticEntry],
    pub state_groups: &'static [GroupDef],
    pub switch_groups: &'static [GroupDef],
    pub game_parameters: &'static [StaticEntry],
    pub busses: &'static [StaticEntry],
    pub audio_devices: &'static [StaticEntry],
}

impl IdTable {
    /// Entries of a flat category
    pub fn flat(&self, category: Category) -> Option<&'static [StaticEntry]> {
        match category {
            Category::Event => Some(self.events),
            Category::GameParameter => Some(self.game_parameters),
            Category::Bus => Some(self.busses),
            Category::AudioDevice => Some(self.audio_devices),
            _ => None,
        }
    }

    /// Groups of a state/switch category (group or value)
    pub fn groups(&self, category: Category) -> Option<&'static [GroupDef]> {
        match category.group_category() {
            Some(Category::StateGroup) => Some(self.state_groups),
            Some(Category::SwitchGroup) => Some(self.switch_groups),
            _ => None,
        }
    }

    /// Total number of IDs, group IDs included
    pub fn len(&self) -> usize {
        let flat = self.events.len()
            + self.game_parameters.len()
            + self.busses.len()
            + self.audio_devices.len();
        let grouped: usize = self
            .state_groups
            .iter()
            .chain(self.switch_groups)
            .map(|g| 1 + g.values.len())
            .sum();
        flat + grouped
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TABLE MACROS
// ═══════════════════════════════════════════════════════════════════════════════

/// Declare a flat module of ID constants plus its `entries()` descriptor.
macro_rules! id_list {
    ($(#[$meta:meta])* $vis:vis mod $module:ident { $($name:ident = $value:literal),* $(,)? }) => {
        $(#[$meta])*
        $vis mod $module {
            #[allow(unused_imports)]
            use $crate::id::AkUniqueId;

            $(pub const $name: AkUniqueId = AkUniqueId::new($value);)*

            /// Every ID of this list, in declaration order
            pub const fn entries() -> &'static [$crate::table::StaticEntry] {
                &[$((stringify!($name), $name)),*]
            }
        }
    };
}

/// Declare a state/switch group module: `GROUP`, a values submodule, and
/// the group's `def()` descriptor.
macro_rules! id_group {
    (
        $(#[$meta:meta])*
        $symbol:ident => $module:ident = $group:literal,
        $values:ident { $($name:ident = $value:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        pub mod $module {
            use $crate::id::AkUniqueId;

            pub const GROUP: AkUniqueId = AkUniqueId::new($group);

            id_list! {
                pub mod $values { $($name = $value),* }
            }

            /// Runtime descriptor of this group
            pub const fn def() -> $crate::table::GroupDef {
                $crate::table::GroupDef {
                    name: stringify!($symbol),
                    id: GROUP,
                    values: $values::entries(),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    id_list! {
        mod sample_events {
            PLAY_A = 1,
            PLAY_B = 2,
        }
    }

    id_group! {
        SURFACE => surface = 10,
        switch { GRASS = 11, WOOD = 12 }
    }

    id_list! {
        mod empty {}
    }

    #[test]
    fn test_id_list_declares_constants_and_entries() {
        assert_eq!(sample_events::PLAY_A, AkUniqueId(1));
        assert_eq!(
            sample_events::entries(),
            &[("PLAY_A", AkUniqueId(1)), ("PLAY_B", AkUniqueId(2))]
        );
        assert!(empty::entries().is_empty());
    }

    #[test]
    fn test_id_group_descriptor() {
        let def = surface::def();
        assert_eq!(def.name, "SURFACE");
        assert_eq!(def.id, surface::GROUP);
        assert_eq!(def.value("WOOD"), Some(surface::switch::WOOD));
        assert_eq!(def.value("GRAVEL"), None);
    }

    #[test]
    fn test_table_len_counts_groups() {
        const GROUPS: &[GroupDef] = &[surface::def()];
        let table = IdTable {
            events: sample_events::entries(),
            state_groups: &[],
            switch_groups: GROUPS,
            game_parameters: &[],
            busses: &[],
            audio_devices: &[],
        };
        assert_eq!(table.len(), 2 + 3);
        assert_eq!(table.groups(Category::SwitchValue).map(<[_]>::len), Some(1));
        assert!(table.flat(Category::StateGroup).is_none());
    }
}
