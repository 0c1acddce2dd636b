//! Table Regeneration
//!
//! ```text
//! source (.h | .json | .toml) ──▶ IdManifest ──▶ validate ──┬──▶ Wwise_IDs.h
//!                                                           ├──▶ ids.rs
//!                                                           └──▶ ids.json
//! ```
//!
//! Outputs are only rewritten when their contents change, and [`Generator::check`]
//! reports the ones that are stale without touching them.

use std::path::{Path, PathBuf};

use ak_ids::{IdManifest, ValidationReport, validate};

use crate::config::{GeneratorConfig, SourceKind};
use crate::error::GenResult;
use crate::header::{parse_header, render_header};
use crate::rust::render_rust;
use crate::source::ProjectSource;

/// One rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    /// Whether the file on disk already holds these contents
    pub fn is_current(&self) -> bool {
        std::fs::read_to_string(&self.path)
            .map(|existing| existing == self.contents)
            .unwrap_or(false)
    }
}

/// Read a table from any supported source
pub fn load_manifest(path: &Path, kind: SourceKind) -> GenResult<IdManifest> {
    let manifest = match kind {
        SourceKind::Header => parse_header(&std::fs::read_to_string(path)?)?,
        SourceKind::Manifest => IdManifest::load(path)?,
        SourceKind::Project => ProjectSource::load(path)?.to_manifest(),
    };
    log::debug!(
        "Loaded {} ids from {} ({:?})",
        manifest.entry_count(),
        path.display(),
        kind
    );
    Ok(manifest)
}

/// Renders every configured output from one source
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator. Fails on an invalid configuration.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create from an `ids.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        Self::new(GeneratorConfig::load(path)?)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Read the configured source
    pub fn load_source(&self) -> GenResult<IdManifest> {
        load_manifest(&self.config.source, self.config.source_kind()?)
    }

    /// Render the outputs of an already loaded table
    pub fn render(&self, manifest: &IdManifest) -> GenResult<Vec<GeneratedFile>> {
        let mut files = Vec::new();
        if let Some(path) = &self.config.header {
            files.push(GeneratedFile {
                path: path.clone(),
                contents: render_header(manifest, &self.config.header_style),
            });
        }
        if let Some(path) = &self.config.rust {
            files.push(GeneratedFile {
                path: path.clone(),
                contents: render_rust(manifest),
            });
        }
        if let Some(path) = &self.config.manifest {
            let mut json = manifest.canonical().to_json()?;
            json.push('\n');
            files.push(GeneratedFile {
                path: path.clone(),
                contents: json,
            });
        }
        Ok(files)
    }

    /// Load, validate and render
    pub fn generate(&self) -> GenResult<(ValidationReport, Vec<GeneratedFile>)> {
        let manifest = self.load_source()?;
        let report = validate(&manifest)?;

        log::info!(
            "{} ids checked, {} verified by name hash",
            report.checked,
            report.verified
        );
        if report.unverified > 0 {
            log::warn!(
                "{} ids could not be verified from their symbols: {}",
                report.unverified,
                report.unverified_paths.join(", ")
            );
        }
        for shared in &report.shared {
            log::debug!("id {} shared by {}", shared.id, shared.paths.join(", "));
        }

        let files = self.render(&manifest)?;
        Ok((report, files))
    }

    /// Regenerate and write every output that changed. Returns the paths
    /// that were written.
    pub fn write(&self) -> GenResult<Vec<PathBuf>> {
        let (_, files) = self.generate()?;
        let mut written = Vec::new();

        for file in files {
            if file.is_current() {
                log::debug!("{} is up to date", file.path.display());
                continue;
            }
            if let Some(parent) = file.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&file.path, &file.contents)?;
            log::info!("Wrote {}", file.path.display());
            written.push(file.path);
        }

        Ok(written)
    }

    /// Paths whose contents differ from a fresh regeneration
    pub fn check(&self) -> GenResult<Vec<PathBuf>> {
        let (_, files) = self.generate()?;
        let stale: Vec<PathBuf> = files
            .into_iter()
            .filter(|file| !file.is_current())
            .map(|file| file.path)
            .collect();

        for path in &stale {
            log::warn!("{} is out of date", path.display());
        }
        Ok(stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use ak_ids::{IdEntry, IdError};

    fn write_source(dir: &Path) -> PathBuf {
        let path = dir.join("project.toml");
        std::fs::write(
            &path,
            "events = [\"Play_Cows\"]\nbusses = [\"Master Audio Bus\"]\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_write_then_check_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GeneratorConfig::new(write_source(dir.path()));
        config.header = Some(dir.path().join("out/Wwise_IDs.h"));
        config.rust = Some(dir.path().join("out/ids.rs"));
        config.manifest = Some(dir.path().join("out/ids.json"));

        let generator = Generator::new(config).unwrap();
        assert_eq!(generator.write().unwrap().len(), 3);
        assert!(generator.check().unwrap().is_empty());

        // Unchanged outputs are left alone
        assert!(generator.write().unwrap().is_empty());

        let header = std::fs::read_to_string(dir.path().join("out/Wwise_IDs.h")).unwrap();
        assert!(header.contains("static const AkUniqueID MASTER_AUDIO_BUS = 3803692087U;"));

        let manifest = IdManifest::load(dir.path().join("out/ids.json")).unwrap();
        let bus = &manifest.busses[0];
        assert_eq!(bus.source_name.as_deref(), Some("Master Audio Bus"));
    }

    #[test]
    fn test_check_reports_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let rust_path = dir.path().join("ids.rs");
        let mut config = GeneratorConfig::new(write_source(dir.path()));
        config.rust = Some(rust_path.clone());

        let generator = Generator::new(config).unwrap();
        assert_eq!(generator.check().unwrap(), vec![rust_path.clone()]);

        generator.write().unwrap();
        std::fs::write(&rust_path, "// edited by hand\n").unwrap();
        assert_eq!(generator.check().unwrap(), vec![rust_path]);
    }

    #[test]
    fn test_name_without_identifier_characters_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("project.toml");
        std::fs::write(&source, "events = [\"Play_Cows\", \"-\"]\n").unwrap();

        let mut config = GeneratorConfig::new(&source);
        config.rust = Some(dir.path().join("ids.rs"));
        let generator = Generator::new(config).unwrap();

        assert!(matches!(
            generator.write(),
            Err(GenError::Id(IdError::InvalidSymbol { .. }))
        ));
        assert!(!dir.path().join("ids.rs").exists());
    }

    #[test]
    fn test_generate_reports_unverified_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("ids.json");
        let manifest = IdManifest {
            busses: vec![
                IdEntry::new("MASTER_AUDIO_BUS", 3803692087),
                IdEntry::new("SFX", 393239870),
            ],
            ..Default::default()
        };
        manifest.save(&source).unwrap();

        let mut config = GeneratorConfig::new(&source);
        config.rust = Some(dir.path().join("ids.rs"));
        let (report, files) = Generator::new(config).unwrap().generate().unwrap();

        assert_eq!(report.checked, 2);
        assert_eq!(report.unverified, 1);
        assert_eq!(report.unverified_paths, vec!["BUSSES::MASTER_AUDIO_BUS"]);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("ids.json");
        let manifest = IdManifest {
            events: vec![IdEntry::new("PLAY_A", 1), IdEntry::new("PLAY_A", 2)],
            ..Default::default()
        };
        manifest.save(&source).unwrap();

        let mut config = GeneratorConfig::new(&source);
        config.header = Some(dir.path().join("out.h"));
        let generator = Generator::new(config).unwrap();

        assert!(matches!(
            generator.write(),
            Err(GenError::Id(IdError::DuplicateName { .. }))
        ));
        assert!(!dir.path().join("out.h").exists());
    }

    #[test]
    fn test_new_rejects_config_without_outputs() {
        assert!(Generator::new(GeneratorConfig::new("ids.h")).is_err());
    }
}
