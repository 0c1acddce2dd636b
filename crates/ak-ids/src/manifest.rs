//! Identifier Manifest
//!
//! Owned, serializable form of a complete identifier table. This is what
//! gets loaded at runtime, produced by the header parser, and fed to the
//! renderers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IdResult;
use crate::id::{AkUniqueId, Category};
use crate::table::{GroupDef, IdTable, StaticEntry};

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRIES
// ═══════════════════════════════════════════════════════════════════════════════

/// A named ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdEntry {
    /// Symbol (e.g. `MASTER_AUDIO_BUS`)
    pub name: String,
    /// Numeric ID
    pub id: AkUniqueId,
    /// Design-time name the ID was hashed from (e.g. `Master Audio Bus`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl IdEntry {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id: AkUniqueId(id),
            source_name: None,
        }
    }

    /// Entry whose symbol and ID are both derived from a design-time name
    pub fn from_source(source_name: impl Into<String>) -> Self {
        let source_name = source_name.into();
        Self {
            name: crate::hash::symbol_name(&source_name),
            id: AkUniqueId::from_name(&source_name),
            source_name: Some(source_name),
        }
    }

    /// Set the design-time name
    pub fn with_source(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }
}

impl From<&StaticEntry> for IdEntry {
    fn from((name, id): &StaticEntry) -> Self {
        Self::new(*name, id.as_u32())
    }
}

/// A state or switch group with its ordered values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGroupEntry {
    /// Group symbol
    pub name: String,
    /// Group ID
    pub id: AkUniqueId,
    /// Design-time group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Values in declaration order
    #[serde(default)]
    pub values: Vec<IdEntry>,
}

impl IdGroupEntry {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id: AkUniqueId(id),
            source_name: None,
            values: Vec::new(),
        }
    }

    /// Group whose symbol and ID are derived from a design-time name
    pub fn from_source(source_name: impl Into<String>) -> Self {
        let entry = IdEntry::from_source(source_name);
        Self {
            name: entry.name,
            id: entry.id,
            source_name: entry.source_name,
            values: Vec::new(),
        }
    }

    /// Append a value
    pub fn with_value(mut self, value: IdEntry) -> Self {
        self.values.push(value);
        self
    }

    /// Look up a value by symbol
    pub fn value(&self, name: &str) -> Option<&IdEntry> {
        self.values.iter().find(|v| v.name == name)
    }
}

impl From<&GroupDef> for IdGroupEntry {
    fn from(def: &GroupDef) -> Self {
        Self {
            name: def.name.to_string(),
            id: def.id,
            source_name: None,
            values: def.values.iter().map(IdEntry::from).collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MANIFEST
// ═══════════════════════════════════════════════════════════════════════════════

/// Complete identifier table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdManifest {
    #[serde(default)]
    pub events: Vec<IdEntry>,
    #[serde(default)]
    pub state_groups: Vec<IdGroupEntry>,
    #[serde(default)]
    pub switch_groups: Vec<IdGroupEntry>,
    #[serde(default)]
    pub game_parameters: Vec<IdEntry>,
    #[serde(default)]
    pub busses: Vec<IdEntry>,
    #[serde(default)]
    pub audio_devices: Vec<IdEntry>,
}

impl IdManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a compiled table into an owned manifest
    pub fn from_table(table: &IdTable) -> Self {
        let flat = |entries: &[StaticEntry]| entries.iter().map(IdEntry::from).collect();
        let groups = |defs: &[GroupDef]| defs.iter().map(IdGroupEntry::from).collect();
        Self {
            events: flat(table.events),
            state_groups: groups(table.state_groups),
            switch_groups: groups(table.switch_groups),
            game_parameters: flat(table.game_parameters),
            busses: flat(table.busses),
            audio_devices: flat(table.audio_devices),
        }
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> IdResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> IdResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON manifest from disk
    pub fn load(path: impl AsRef<Path>) -> IdResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> IdResult<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Entries of a flat category
    pub fn flat(&self, category: Category) -> Option<&[IdEntry]> {
        match category {
            Category::Event => Some(&self.events),
            Category::GameParameter => Some(&self.game_parameters),
            Category::Bus => Some(&self.busses),
            Category::AudioDevice => Some(&self.audio_devices),
            _ => None,
        }
    }

    /// Mutable entries of a flat category
    pub fn flat_mut(&mut self, category: Category) -> Option<&mut Vec<IdEntry>> {
        match category {
            Category::Event => Some(&mut self.events),
            Category::GameParameter => Some(&mut self.game_parameters),
            Category::Bus => Some(&mut self.busses),
            Category::AudioDevice => Some(&mut self.audio_devices),
            _ => None,
        }
    }

    /// Groups of a state/switch category (group or value category)
    pub fn groups(&self, category: Category) -> Option<&[IdGroupEntry]> {
        match category.group_category() {
            Some(Category::StateGroup) => Some(&self.state_groups),
            Some(Category::SwitchGroup) => Some(&self.switch_groups),
            _ => None,
        }
    }

    /// Mutable groups of a state/switch category
    pub fn groups_mut(&mut self, category: Category) -> Option<&mut Vec<IdGroupEntry>> {
        match category.group_category() {
            Some(Category::StateGroup) => Some(&mut self.state_groups),
            Some(Category::SwitchGroup) => Some(&mut self.switch_groups),
            _ => None,
        }
    }

    /// Total number of IDs, group IDs included
    pub fn entry_count(&self) -> usize {
        let flat = self.events.len()
            + self.game_parameters.len()
            + self.busses.len()
            + self.audio_devices.len();
        let grouped: usize = self
            .state_groups
            .iter()
            .chain(&self.switch_groups)
            .map(|g| 1 + g.values.len())
            .sum();
        flat + grouped
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Canonically ordered copy: every list sorted by symbol (byte order),
    /// groups and their values included.
    ///
    /// Renderers work from this so output never depends on input order.
    pub fn canonical(&self) -> Self {
        fn sort_entries(entries: &mut [IdEntry]) {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        fn sort_groups(groups: &mut [IdGroupEntry]) {
            groups.sort_by(|a, b| a.name.cmp(&b.name));
            for group in groups {
                sort_entries(&mut group.values);
            }
        }

        let mut sorted = self.clone();
        sort_entries(&mut sorted.events);
        sort_groups(&mut sorted.state_groups);
        sort_groups(&mut sorted.switch_groups);
        sort_entries(&mut sorted.game_parameters);
        sort_entries(&mut sorted.busses);
        sort_entries(&mut sorted.audio_devices);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_manifest() {
        let json = json!({
            "events": [
                { "name": "PLAY_COWS", "id": 3349065862u32 }
            ],
            "state_groups": [
                {
                    "name": "REGION",
                    "id": 1374134669u32,
                    "values": [
                        { "name": "NONE", "id": 748895195u32 }
                    ]
                }
            ]
        })
        .to_string();

        let manifest = IdManifest::from_json(&json).unwrap();
        assert_eq!(manifest.events.len(), 1);
        assert_eq!(manifest.events[0].id, AkUniqueId(3349065862));
        let none = manifest.state_groups[0].value("NONE").unwrap();
        assert_eq!(none.id, AkUniqueId(748895195));
        assert!(manifest.busses.is_empty());
        assert_eq!(manifest.entry_count(), 3);
    }

    #[test]
    fn test_source_name_is_optional_in_json() {
        let manifest = IdManifest {
            busses: vec![IdEntry::from_source("Master Audio Bus")],
            events: vec![IdEntry::new("PLAY_COWS", 3349065862)],
            ..Default::default()
        };
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"source_name\": \"Master Audio Bus\""));
        assert_eq!(json.matches("source_name").count(), 1);
        assert_eq!(IdManifest::from_json(&json).unwrap(), manifest);
    }

    #[test]
    fn test_from_source_derives_symbol_and_id() {
        let bus = IdEntry::from_source("Master Audio Bus");
        assert_eq!(bus.name, "MASTER_AUDIO_BUS");
        assert_eq!(bus.id, AkUniqueId(3803692087));

        let group = IdGroupEntry::from_source("Switch_FootstepType")
            .with_value(IdEntry::from_source("Walk"));
        assert_eq!(group.name, "SWITCH_FOOTSTEPTYPE");
        assert_eq!(group.id, AkUniqueId(3294598210));
        assert_eq!(group.values[0].id, AkUniqueId(2108779966));
    }

    #[test]
    fn test_canonical_sorts_everything() {
        let manifest = IdManifest {
            events: vec![IdEntry::new("PLAY_TREES", 2), IdEntry::new("PLAY_COWS", 1)],
            state_groups: vec![
                IdGroupEntry::new("REGION", 20)
                    .with_value(IdEntry::new("NONE", 21))
                    .with_value(IdEntry::new("FOREST", 22)),
                IdGroupEntry::new("MUSICSTATE", 10),
            ],
            ..Default::default()
        };
        let sorted = manifest.canonical();
        assert_eq!(sorted.events[0].name, "PLAY_COWS");
        assert_eq!(sorted.state_groups[0].name, "MUSICSTATE");
        assert_eq!(sorted.state_groups[1].values[0].name, "FOREST");
        // Original untouched
        assert_eq!(manifest.events[0].name, "PLAY_TREES");
    }

    #[test]
    fn test_category_accessors() {
        let mut manifest = IdManifest::new();
        manifest
            .flat_mut(Category::Bus)
            .unwrap()
            .push(IdEntry::new("SFX", 393239870));
        manifest
            .groups_mut(Category::SwitchValue)
            .unwrap()
            .push(IdGroupEntry::new("SWITCH_FOOTSTEPTYPE", 3294598210));

        assert_eq!(manifest.flat(Category::Bus).unwrap().len(), 1);
        assert_eq!(manifest.groups(Category::SwitchGroup).unwrap().len(), 1);
        assert!(manifest.flat(Category::StateValue).is_none());
        assert!(manifest.groups(Category::Event).is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.json");

        let manifest = IdManifest {
            audio_devices: vec![IdEntry::new("SYSTEM", 3859886410)],
            ..Default::default()
        };
        manifest.save(&path).unwrap();
        assert_eq!(IdManifest::load(&path).unwrap(), manifest);
    }
}
