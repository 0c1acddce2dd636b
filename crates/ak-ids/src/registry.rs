//! Identifier Registry
//!
//! Scoped runtime lookup by category and group.
//!
//! Static access through [`crate::ids`] covers code that knows its IDs at
//! build time. The registry serves data-driven callers (scripts, config
//! files naming sounds) with the same scoping rules: every lookup goes
//! through a category, and group values through their group. There is no
//! global name → ID map, which keeps `NONE` in two state groups from
//! colliding.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::IdResult;
use crate::hash::hash_name;
use crate::id::{AkUniqueId, Category};
use crate::ids;
use crate::manifest::{IdEntry, IdGroupEntry, IdManifest};
use crate::table::IdTable;
use crate::validate::validate;

/// Separator between group and value in qualified names (`REGION::NONE`)
pub const SCOPE_SEPARATOR: &str = "::";

static BUILTIN: LazyLock<IdRegistry> = LazyLock::new(|| IdRegistry::from_table(&ids::TABLE));

// ═══════════════════════════════════════════════════════════════════════════════
// NAME TABLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Ordered name → ID list with a hash index
#[derive(Debug, Clone, Default)]
struct NameTable {
    entries: Vec<(String, AkUniqueId)>,
    index: HashMap<String, AkUniqueId>,
}

impl NameTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert unless the name is taken. Returns false on duplicates.
    fn insert(&mut self, name: &str, id: AkUniqueId) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), id);
        self.entries.push((name.to_string(), id));
        true
    }

    fn get(&self, name: &str) -> Option<AkUniqueId> {
        self.index.get(name).copied()
    }

    fn name_of(&self, id: AkUniqueId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry_id)| *entry_id == id)
            .map(|(name, _)| name.as_str())
    }

    fn to_entries(&self) -> Vec<IdEntry> {
        self.entries
            .iter()
            .map(|(name, id)| IdEntry::new(name.as_str(), id.as_u32()))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// GROUP
// ═══════════════════════════════════════════════════════════════════════════════

/// A state or switch group as held by the registry
#[derive(Debug, Clone)]
pub struct IdGroup {
    name: String,
    id: AkUniqueId,
    values: NameTable,
}

impl IdGroup {
    fn from_entry(group: &IdGroupEntry, scope: &str) -> Self {
        let mut values = NameTable::with_capacity(group.values.len());
        for value in &group.values {
            if !values.insert(&value.name, value.id) {
                log::warn!(
                    "Ignoring duplicate {}{}{}{}{}",
                    scope,
                    SCOPE_SEPARATOR,
                    group.name,
                    SCOPE_SEPARATOR,
                    value.name
                );
            }
        }
        Self {
            name: group.name.clone(),
            id: group.id,
            values,
        }
    }

    /// Group symbol
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group ID
    pub fn id(&self) -> AkUniqueId {
        self.id
    }

    /// ID of a value in this group
    pub fn value(&self, name: &str) -> Option<AkUniqueId> {
        self.values.get(name)
    }

    /// Symbol of a value in this group
    pub fn value_name(&self, id: AkUniqueId) -> Option<&str> {
        self.values.name_of(id)
    }

    /// Values in declaration order
    pub fn values(&self) -> impl Iterator<Item = (&str, AkUniqueId)> {
        let entries = &self.values.entries;
        entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.values.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
struct GroupTable {
    groups: Vec<IdGroup>,
    index: HashMap<String, usize>,
}

impl GroupTable {
    fn get(&self, name: &str) -> Option<&IdGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRY
// ═══════════════════════════════════════════════════════════════════════════════

/// Immutable, category-scoped name → ID registry.
///
/// Built once and only read afterwards; shared freely across threads.
///
/// ## Example
///
/// ```rust
/// use ak_ids::{AkUniqueId, Category, IdRegistry};
///
/// let registry = IdRegistry::builtin();
/// assert_eq!(
///     registry.lookup(Category::Event, "PLAY_COWS"),
///     Some(AkUniqueId(3349065862))
/// );
/// assert_eq!(registry.state("REGION", "NONE"), registry.state("MUSICSTATE", "NONE"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    flat: HashMap<Category, NameTable>,
    groups: HashMap<Category, GroupTable>,
}

impl IdRegistry {
    /// Create empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry of the compiled table, built on first use.
    pub fn builtin() -> &'static IdRegistry {
        &BUILTIN
    }

    /// Build from a compiled table
    pub fn from_table(table: &IdTable) -> Self {
        Self::from_manifest(&IdManifest::from_table(table))
    }

    /// Build from a manifest without validating it.
    ///
    /// On duplicate names within a scope the first entry wins.
    pub fn from_manifest(manifest: &IdManifest) -> Self {
        let mut registry = Self::new();

        for category in Category::ALL.into_iter().filter(|c| c.is_flat()) {
            let entries = manifest.flat(category).unwrap_or_default();
            let mut table = NameTable::with_capacity(entries.len());
            for entry in entries {
                if !table.insert(&entry.name, entry.id) {
                    log::warn!(
                        "Ignoring duplicate {}{}{}",
                        category.namespace(),
                        SCOPE_SEPARATOR,
                        entry.name
                    );
                }
            }
            registry.flat.insert(category, table);
        }

        for category in Category::ALL.into_iter().filter(|c| c.is_group()) {
            let entries = manifest.groups(category).unwrap_or_default();
            let mut table = GroupTable::default();
            for entry in entries {
                if table.index.contains_key(&entry.name) {
                    log::warn!(
                        "Ignoring duplicate group {}{}{}",
                        category.namespace(),
                        SCOPE_SEPARATOR,
                        entry.name
                    );
                    continue;
                }
                table.index.insert(entry.name.clone(), table.groups.len());
                table
                    .groups
                    .push(IdGroup::from_entry(entry, category.namespace()));
            }
            registry.groups.insert(category, table);
        }

        log::debug!("Built id registry with {} ids", registry.len());
        registry
    }

    /// Validate a manifest, then build from it.
    pub fn load(manifest: &IdManifest) -> IdResult<Self> {
        let report = validate(manifest)?;
        log::debug!(
            "Validated {} ids ({} unverified, {} shared across scopes)",
            report.checked,
            report.unverified,
            report.shared.len()
        );
        Ok(Self::from_manifest(manifest))
    }

    // === Lookup ===

    /// Look up an ID by category and symbol.
    ///
    /// Value categories take a group-qualified name, `GROUP::VALUE`.
    pub fn lookup(&self, category: Category, name: &str) -> Option<AkUniqueId> {
        if category.is_group_value() {
            let (group, value) = name.split_once(SCOPE_SEPARATOR)?;
            return self.lookup_in(category, group, value);
        }
        if category.is_group() {
            return self.group(category, name).map(IdGroup::id);
        }
        self.flat.get(&category)?.get(name)
    }

    /// Look up a value inside a named group.
    ///
    /// Accepts either the group or the value category of a state/switch.
    pub fn lookup_in(&self, category: Category, group: &str, name: &str) -> Option<AkUniqueId> {
        self.group(category, group)?.value(name)
    }

    /// ID of a state value
    pub fn state(&self, group: &str, value: &str) -> Option<AkUniqueId> {
        self.lookup_in(Category::StateValue, group, value)
    }

    /// ID of a switch value
    pub fn switch(&self, group: &str, value: &str) -> Option<AkUniqueId> {
        self.lookup_in(Category::SwitchValue, group, value)
    }

    /// A state or switch group by symbol
    pub fn group(&self, category: Category, name: &str) -> Option<&IdGroup> {
        self.groups.get(&category.group_category()?)?.get(name)
    }

    /// All groups of a state/switch category, in declaration order
    pub fn groups(&self, category: Category) -> impl Iterator<Item = &IdGroup> {
        category
            .group_category()
            .and_then(|c| self.groups.get(&c))
            .into_iter()
            .flat_map(|table| table.groups.iter())
    }

    /// Resolve a design-time name (any case, spaces kept) to its ID, if that
    /// ID exists in the category.
    pub fn resolve(&self, category: Category, design_name: &str) -> Option<AkUniqueId> {
        let id = AkUniqueId(hash_name(design_name));
        if category.is_group_value() {
            return self
                .groups(category)
                .any(|g| g.value_name(id).is_some())
                .then_some(id);
        }
        self.name_of(category, id).map(|_| id)
    }

    /// Resolve a design-time value name inside a design-time group name
    pub fn resolve_in(&self, category: Category, group: &str, value: &str) -> Option<AkUniqueId> {
        let group_id = AkUniqueId(hash_name(group));
        let value_id = AkUniqueId(hash_name(value));
        self.groups(category)
            .find(|g| g.id() == group_id)?
            .value_name(value_id)
            .map(|_| value_id)
    }

    /// Symbol carrying an ID in a flat or group category
    pub fn name_of(&self, category: Category, id: AkUniqueId) -> Option<&str> {
        if category.is_flat() {
            return self.flat.get(&category)?.name_of(id);
        }
        if category.is_group() {
            let group = self.groups(category).find(|g| g.id() == id)?;
            return Some(group.name());
        }
        None
    }

    /// Every symbol of a category; group values come qualified
    /// (`GROUP::VALUE`).
    pub fn names(&self, category: Category) -> Vec<String> {
        if category.is_flat() {
            return self
                .flat
                .get(&category)
                .map(|t| t.entries.iter().map(|(name, _)| name.clone()).collect())
                .unwrap_or_default();
        }
        if category.is_group() {
            return self.groups(category).map(|g| g.name.clone()).collect();
        }
        self.groups(category)
            .flat_map(|g| {
                g.values()
                    .map(move |(value, _)| format!("{}{}{}", g.name, SCOPE_SEPARATOR, value))
            })
            .collect()
    }

    // === Stats ===

    /// Number of IDs in a category
    pub fn category_len(&self, category: Category) -> usize {
        if category.is_flat() {
            return self.flat.get(&category).map_or(0, |t| t.entries.len());
        }
        if category.is_group() {
            return self.groups(category).count();
        }
        self.groups(category).map(IdGroup::len).sum()
    }

    /// Total number of IDs, group IDs included
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.category_len(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy back into a manifest, declaration order preserved
    pub fn to_manifest(&self) -> IdManifest {
        let flat = |category: Category| {
            self.flat
                .get(&category)
                .map(NameTable::to_entries)
                .unwrap_or_default()
        };
        let groups = |category: Category| {
            self.groups(category)
                .map(|g| IdGroupEntry {
                    name: g.name.clone(),
                    id: g.id,
                    source_name: None,
                    values: g.values.to_entries(),
                })
                .collect()
        };
        IdManifest {
            events: flat(Category::Event),
            state_groups: groups(Category::StateGroup),
            switch_groups: groups(Category::SwitchGroup),
            game_parameters: flat(Category::GameParameter),
            busses: flat(Category::Bus),
            audio_devices: flat(Category::AudioDevice),
        }
    }
}
