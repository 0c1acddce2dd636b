//! Generator Configuration
//!
//! TOML config for table regeneration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Kind of input a source path points at, by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Generated C/C++ include file (`.h`, `.hpp`)
    Header,
    /// JSON identifier manifest (`.json`)
    Manifest,
    /// Design-time project names (`.toml`)
    Project,
}

impl SourceKind {
    /// Detect from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "h" | "hpp" => Some(SourceKind::Header),
            "json" => Some(SourceKind::Manifest),
            "toml" => Some(SourceKind::Project),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HEADER STYLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Layout of the generated include file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Outermost namespace
    pub root_namespace: String,
    /// Include guard macro
    pub include_guard: String,
    /// Headers pulled in before the tables
    pub includes: Vec<String>,
    /// C++ type of every constant
    pub id_type: String,
    /// Comment line inside the banner
    pub banner: String,
    /// Width of the `////` rules around the banner
    pub rule_width: usize,
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            root_namespace: "AK".to_string(),
            include_guard: "__WWISE_IDS_H__".to_string(),
            includes: vec!["AK/SoundEngine/Common/AkTypes.h".to_string()],
            id_type: "AkUniqueID".to_string(),
            banner: "Audiokinetic Wwise generated include file. Do not edit.".to_string(),
            rule_width: 101,
            indent: 4,
        }
    }
}

impl HeaderConfig {
    /// Validate the style
    pub fn validate(&self) -> GenResult<()> {
        if !is_c_identifier(&self.root_namespace) {
            return Err(GenError::Config(format!(
                "root_namespace {:?} is not an identifier",
                self.root_namespace
            )));
        }
        if !is_c_identifier(&self.include_guard) {
            return Err(GenError::Config(format!(
                "include_guard {:?} is not an identifier",
                self.include_guard
            )));
        }
        if !is_c_identifier(&self.id_type) {
            return Err(GenError::Config(format!(
                "id_type {:?} is not an identifier",
                self.id_type
            )));
        }
        if self.indent == 0 {
            return Err(GenError::Config("indent must be at least 1".to_string()));
        }
        if self.rule_width < 2 {
            return Err(GenError::Config(
                "rule_width must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// GENERATOR CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Complete generator configuration (`ids.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Input table: header, JSON manifest or design-time project
    pub source: PathBuf,

    /// Include file to write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<PathBuf>,

    /// Rust table module to write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust: Option<PathBuf>,

    /// JSON manifest to write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Include file layout
    #[serde(default)]
    pub header_style: HeaderConfig,
}

impl GeneratorConfig {
    /// Create a config reading from `source` with no outputs
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            header: None,
            rust: None,
            manifest: None,
            header_style: HeaderConfig::default(),
        }
    }

    /// Load from TOML string
    pub fn from_toml(toml_str: &str) -> GenResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save to TOML string
    pub fn to_toml(&self) -> GenResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a file. Relative paths are resolved against the file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let config = Self::from_toml(&std::fs::read_to_string(path)?)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolved(base))
    }

    /// Copy with every relative path joined onto `base`
    pub fn resolved(mut self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.source = join(self.source);
        self.header = self.header.map(join);
        self.rust = self.rust.map(join);
        self.manifest = self.manifest.map(join);
        self
    }

    /// Kind of the configured source
    pub fn source_kind(&self) -> GenResult<SourceKind> {
        SourceKind::from_path(&self.source).ok_or_else(|| {
            GenError::Config(format!(
                "cannot tell source kind of {} (expected .h, .json or .toml)",
                self.source.display()
            ))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenResult<()> {
        self.source_kind()?;
        if self.header.is_none() && self.rust.is_none() && self.manifest.is_none() {
            return Err(GenError::Config(
                "at least one of header, rust or manifest must be set".to_string(),
            ));
        }
        self.header_style.validate()
    }
}
