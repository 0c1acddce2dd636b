//! Manifest Validation
//!
//! Structural checks a table must pass before game code can rely on it:
//! well-formed symbols, unique names per scope, no two names sharing an ID
//! inside one scope, and IDs matching the hash of their design-time name.
//!
//! The same ID appearing in two different scopes (`NONE` in two state
//! groups) is not an error: lookups are always scoped, so such IDs are only
//! reported.

use std::collections::{HashMap, HashSet};

use crate::error::{IdError, IdResult};
use crate::hash::{hash_name, is_symbol};
use crate::id::{AkUniqueId, Category};
use crate::manifest::{IdEntry, IdManifest};

/// An ID used by more than one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedId {
    pub id: AkUniqueId,
    /// `scope::NAME` of every entry carrying this ID
    pub paths: Vec<String>,
}

/// Outcome of a successful validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of IDs checked, group IDs included
    pub checked: usize,
    /// Entries whose ID matched the hash of their source name or symbol
    pub verified: usize,
    /// Entries whose ID could not be tied to a name (symbol differs from
    /// the design-time name and no `source_name` was recorded)
    pub unverified: usize,
    /// `scope::NAME` of every unverified entry
    pub unverified_paths: Vec<String>,
    /// IDs shared across scopes
    pub shared: Vec<SharedId>,
}

impl ValidationReport {
    /// Whether every entry's ID was tied back to its name
    pub fn fully_verified(&self) -> bool {
        self.unverified == 0
    }
}

/// Validate a manifest, stopping at the first structural error.
pub fn validate(manifest: &IdManifest) -> IdResult<ValidationReport> {
    let mut validator = Validator::default();

    for category in [
        Category::Event,
        Category::GameParameter,
        Category::Bus,
        Category::AudioDevice,
    ] {
        if let Some(entries) = manifest.flat(category) {
            validator.check_scope(category.namespace(), entries)?;
        }
    }

    for category in [Category::StateGroup, Category::SwitchGroup] {
        let Some(groups) = manifest.groups(category) else {
            continue;
        };
        let namespace = category.namespace();

        let mut seen: HashSet<&str> = HashSet::with_capacity(groups.len());
        let mut ids: HashMap<AkUniqueId, &str> = HashMap::with_capacity(groups.len());
        for group in groups {
            let source = group.source_name.as_deref();
            validator.check_entry(namespace, &group.name, group.id, source)?;
            if !seen.insert(group.name.as_str()) {
                return Err(IdError::DuplicateName {
                    scope: namespace.to_string(),
                    name: group.name.clone(),
                });
            }
            if let Some(first) = ids.insert(group.id, group.name.as_str()) {
                return Err(IdError::IdCollision {
                    scope: namespace.to_string(),
                    first: first.to_string(),
                    second: group.name.clone(),
                    id: group.id,
                });
            }

            let scope = format!("{}::{}", namespace, group.name);
            validator.check_scope(&scope, &group.values)?;
        }
    }

    Ok(validator.finish())
}

#[derive(Default)]
struct Validator {
    report: ValidationReport,
    usage: HashMap<AkUniqueId, Vec<String>>,
}

impl Validator {
    fn check_scope(&mut self, scope: &str, entries: &[IdEntry]) -> IdResult<()> {
        let mut names: HashMap<&str, AkUniqueId> = HashMap::with_capacity(entries.len());
        let mut ids: HashMap<AkUniqueId, &str> = HashMap::with_capacity(entries.len());

        for entry in entries {
            self.check_entry(scope, &entry.name, entry.id, entry.source_name.as_deref())?;

            if names.insert(entry.name.as_str(), entry.id).is_some() {
                return Err(IdError::DuplicateName {
                    scope: scope.to_string(),
                    name: entry.name.clone(),
                });
            }
            if let Some(first) = ids.insert(entry.id, entry.name.as_str()) {
                return Err(IdError::IdCollision {
                    scope: scope.to_string(),
                    first: first.to_string(),
                    second: entry.name.clone(),
                    id: entry.id,
                });
            }
        }
        Ok(())
    }

    fn check_entry(
        &mut self,
        scope: &str,
        name: &str,
        id: AkUniqueId,
        source_name: Option<&str>,
    ) -> IdResult<()> {
        if name.is_empty() {
            return Err(IdError::EmptyName {
                scope: scope.to_string(),
            });
        }
        if !is_symbol(name) {
            return Err(IdError::InvalidSymbol {
                scope: scope.to_string(),
                name: name.to_string(),
            });
        }

        match source_name {
            Some(source) => {
                let expected = AkUniqueId(hash_name(source));
                if expected != id {
                    return Err(IdError::HashMismatch {
                        scope: scope.to_string(),
                        name: name.to_string(),
                        expected,
                        actual: id,
                    });
                }
                self.report.verified += 1;
            }
            // The symbol hashes to the ID whenever the design-time name had
            // no characters the symbol rewrote
            None if hash_name(name) == id.0 => self.report.verified += 1,
            None => {
                log::debug!("{}::{} ({}) not verifiable by hash", scope, name, id);
                self.report.unverified += 1;
                self.report.unverified_paths.push(format!("{}::{}", scope, name));
            }
        }

        self.report.checked += 1;
        self.usage
            .entry(id)
            .or_default()
            .push(format!("{}::{}", scope, name));
        Ok(())
    }

    fn finish(mut self) -> ValidationReport {
        let mut shared: Vec<SharedId> = self
            .usage
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(id, paths)| SharedId { id, paths })
            .collect();
        shared.sort_by_key(|s| s.id);

        for s in &shared {
            log::debug!("Id {} shared across scopes: {}", s.id, s.paths.join(", "));
        }

        self.report.shared = shared;
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IdGroupEntry;

    fn region() -> IdGroupEntry {
        IdGroupEntry::new("REGION", 1374134669)
            .with_value(IdEntry::new("FOREST", 491961918))
            .with_value(IdEntry::new("NONE", 748895195))
    }

    fn music() -> IdGroupEntry {
        IdGroupEntry::new("MUSICSTATE", 1021618141)
            .with_value(IdEntry::new("GAMESTART", 4058101365))
            .with_value(IdEntry::new("NONE", 748895195))
    }

    #[test]
    fn test_same_id_across_groups_is_reported_not_rejected() {
        let manifest = IdManifest {
            state_groups: vec![music(), region()],
            ..Default::default()
        };
        let report = validate(&manifest).unwrap();

        assert_eq!(report.checked, 6);
        assert_eq!(report.shared.len(), 1);
        assert_eq!(report.shared[0].id, AkUniqueId(748895195));
        assert_eq!(
            report.shared[0].paths,
            vec!["STATES::MUSICSTATE::NONE", "STATES::REGION::NONE"]
        );
    }

    #[test]
    fn test_duplicate_name_in_group() {
        let manifest = IdManifest {
            state_groups: vec![region().with_value(IdEntry::new("FOREST", 491961918))],
            ..Default::default()
        };
        match validate(&manifest) {
            Err(IdError::DuplicateName { scope, name }) => {
                assert_eq!(scope, "STATES::REGION");
                assert_eq!(name, "FOREST");
            }
            other => panic!("expected DuplicateName, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_group_name() {
        let manifest = IdManifest {
            state_groups: vec![region(), region()],
            ..Default::default()
        };
        assert!(matches!(
            validate(&manifest),
            Err(IdError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_collision_within_scope() {
        let manifest = IdManifest {
            events: vec![IdEntry::new("PLAY_A", 7), IdEntry::new("PLAY_B", 7)],
            ..Default::default()
        };
        match validate(&manifest) {
            Err(IdError::IdCollision { first, second, id, .. }) => {
                assert_eq!((first.as_str(), second.as_str()), ("PLAY_A", "PLAY_B"));
                assert_eq!(id, AkUniqueId(7));
            }
            other => panic!("expected IdCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_same_name_in_two_categories_is_fine() {
        let manifest = IdManifest {
            events: vec![IdEntry::new("SPEED", 640949982)],
            game_parameters: vec![IdEntry::new("SPEED", 640949982)],
            ..Default::default()
        };
        let report = validate(&manifest).unwrap();
        assert_eq!(report.shared.len(), 1);
    }

    #[test]
    fn test_invalid_and_empty_symbols() {
        let empty = IdManifest {
            busses: vec![IdEntry::new("", 1)],
            ..Default::default()
        };
        assert!(matches!(validate(&empty), Err(IdError::EmptyName { .. })));

        let spaced = IdManifest {
            busses: vec![IdEntry::new("Master Audio Bus", 3803692087)],
            ..Default::default()
        };
        assert!(matches!(validate(&spaced), Err(IdError::InvalidSymbol { .. })));

        let dash = IdEntry::from_source("-");
        let underscore = IdManifest {
            switch_groups: vec![IdGroupEntry::new("SURFACE", 1).with_value(dash)],
            ..Default::default()
        };
        match validate(&underscore) {
            Err(IdError::InvalidSymbol { scope, name }) => {
                assert_eq!(scope, "SWITCHES::SURFACE");
                assert_eq!(name, "_");
            }
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_source_name_verification() {
        let bus = IdEntry::new("MASTER_AUDIO_BUS", 3803692087);
        let good = IdManifest {
            busses: vec![bus.clone().with_source("Master Audio Bus")],
            ..Default::default()
        };
        let report = validate(&good).unwrap();
        assert!(report.fully_verified());

        let bad = IdManifest {
            busses: vec![bus.with_source("Master_Audio_Bus")],
            ..Default::default()
        };
        match validate(&bad) {
            Err(IdError::HashMismatch { expected, actual, .. }) => {
                assert_eq!(expected, AkUniqueId(2392784291));
                assert_eq!(actual, AkUniqueId(3803692087));
            }
            other => panic!("expected HashMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unverifiable_symbol_is_counted() {
        let manifest = IdManifest {
            busses: vec![
                IdEntry::new("MASTER_AUDIO_BUS", 3803692087),
                IdEntry::new("SFX", 393239870),
            ],
            ..Default::default()
        };
        let report = validate(&manifest).unwrap();
        assert_eq!(report.verified, 1);
        assert_eq!(report.unverified, 1);
        assert_eq!(report.unverified_paths, vec!["BUSSES::MASTER_AUDIO_BUS"]);
        assert!(!report.fully_verified());
    }
}
