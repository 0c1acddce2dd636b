//! Design-time project names
//!
//! The sound designer's project only knows objects by name. IDs and table
//! symbols are both derived from those names, so a list of names per
//! category is enough to regenerate the whole table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ak_ids::{IdEntry, IdGroupEntry, IdManifest};

use crate::error::GenResult;

/// A state or switch group by design-time names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroup {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl SourceGroup {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Design-time object names of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSource {
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub game_parameters: Vec<String>,
    #[serde(default)]
    pub busses: Vec<String>,
    #[serde(default)]
    pub audio_devices: Vec<String>,
    #[serde(default)]
    pub state_groups: Vec<SourceGroup>,
    #[serde(default)]
    pub switch_groups: Vec<SourceGroup>,
}

impl ProjectSource {
    /// Load from TOML string
    pub fn from_toml(toml_str: &str) -> GenResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save to TOML string
    pub fn to_toml(&self) -> GenResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        Self::from_toml(&std::fs::read_to_string(path.as_ref())?)
    }

    /// Hash every name into a manifest, keeping the design-time names
    pub fn to_manifest(&self) -> IdManifest {
        let flat = |names: &[String]| names.iter().map(IdEntry::from_source).collect();
        let groups = |groups: &[SourceGroup]| {
            groups
                .iter()
                .map(|g| IdGroupEntry {
                    values: g.values.iter().map(IdEntry::from_source).collect(),
                    ..IdGroupEntry::from_source(g.name.as_str())
                })
                .collect()
        };

        IdManifest {
            events: flat(&self.events),
            state_groups: groups(&self.state_groups),
            switch_groups: groups(&self.switch_groups),
            game_parameters: flat(&self.game_parameters),
            busses: flat(&self.busses),
            audio_devices: flat(&self.audio_devices),
        }
    }

    /// Recover names from a manifest. Entries without a design-time name
    /// fall back to their symbol, which hashes the same unless the symbol
    /// rewrote characters.
    pub fn from_manifest(manifest: &IdManifest) -> Self {
        fn name(entry: &IdEntry) -> String {
            entry.source_name.as_ref().unwrap_or(&entry.name).clone()
        }
        let flat = |entries: &[IdEntry]| entries.iter().map(name).collect();
        let groups = |groups: &[IdGroupEntry]| {
            groups
                .iter()
                .map(|g| SourceGroup {
                    name: g.source_name.as_ref().unwrap_or(&g.name).clone(),
                    values: g.values.iter().map(name).collect(),
                })
                .collect()
        };

        Self {
            events: flat(&manifest.events),
            game_parameters: flat(&manifest.game_parameters),
            busses: flat(&manifest.busses),
            audio_devices: flat(&manifest.audio_devices),
            state_groups: groups(&manifest.state_groups),
            switch_groups: groups(&manifest.switch_groups),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ak_ids::AkUniqueId;

    #[test]
    fn test_names_hash_to_shipped_ids() {
        let source = ProjectSource {
            events: vec!["Play_BallKick".into(), "Play_Cows".into()],
            busses: vec!["Master Audio Bus".into()],
            state_groups: vec![SourceGroup::new("Region", ["Country_NoRiding", "None"])],
            ..Default::default()
        };
        let manifest = source.to_manifest();

        assert_eq!(manifest.events[0].name, "PLAY_BALLKICK");
        assert_eq!(manifest.events[0].id, AkUniqueId(4269038391));
        assert_eq!(manifest.busses[0].name, "MASTER_AUDIO_BUS");
        assert_eq!(manifest.busses[0].id, AkUniqueId(3803692087));
        let bus = &manifest.busses[0];
        assert_eq!(bus.source_name.as_deref(), Some("Master Audio Bus"));

        let region = &manifest.state_groups[0];
        assert_eq!(region.name, "REGION");
        assert_eq!(region.id, AkUniqueId(1374134669));
        let country = region.value("COUNTRY_NORIDING").unwrap();
        assert_eq!(country.id, AkUniqueId(3288159938));
        assert_eq!(region.value("NONE").unwrap().id, AkUniqueId(748895195));
    }

    #[test]
    fn test_same_input_same_manifest() {
        let toml_str = r#"
            events = ["Play_Trees"]

            [[switch_groups]]
            name = "Switch_FootstepType"
            values = ["Walk", "Run"]
        "#;
        let first = ProjectSource::from_toml(toml_str).unwrap().to_manifest();
        let second = ProjectSource::from_toml(toml_str).unwrap().to_manifest();
        assert_eq!(first, second);
        assert_eq!(first.switch_groups[0].values[1].id, AkUniqueId(712161704));
    }

    #[test]
    fn test_from_manifest_round_trip() {
        let source = ProjectSource {
            busses: vec!["Master Audio Bus".into(), "SFX".into()],
            switch_groups: vec![SourceGroup::new("Surface", ["Grass"])],
            ..Default::default()
        };
        assert_eq!(ProjectSource::from_manifest(&source.to_manifest()), source);
    }

    #[test]
    fn test_toml_round_trip() {
        let source = ProjectSource {
            audio_devices: vec!["System".into()],
            state_groups: vec![SourceGroup::new("MusicState", ["None", "GameStart"])],
            ..Default::default()
        };
        let toml_str = source.to_toml().unwrap();
        assert_eq!(ProjectSource::from_toml(&toml_str).unwrap(), source);
    }
}
