//! Generated Include File
//!
//! Parser and byte-exact renderer for the generated C++ header.
//!
//! The sound-bank pipeline emits one C++ header per project:
//!
//! ```text
//! namespace AK
//! {
//!     namespace EVENTS
//!     {
//!         static const AkUniqueID PLAY_COWS = 3349065862U;
//!     } // namespace EVENTS
//!
//!     namespace STATES
//!     {
//!         namespace REGION
//!         {
//!             static const AkUniqueID GROUP = 1374134669U;
//!
//!             namespace STATE
//!             {
//!                 static const AkUniqueID NONE = 748895195U;
//!             } // namespace STATE
//!         } // namespace REGION
//!
//!     } // namespace STATES
//!
//! }// namespace AK
//! ```
//!
//! [`render_header`] reproduces this layout byte for byte, so a header parsed
//! with [`parse_header`] and rendered again is unchanged.

use ak_ids::{AkUniqueId, Category, IdEntry, IdError, IdGroupEntry, IdManifest, IdResult};

use crate::config::HeaderConfig;

/// Constant naming a group's own ID inside its namespace
pub const GROUP_CONSTANT: &str = "GROUP";

/// Section order of the generated file
pub const SECTION_ORDER: [Category; 6] = [
    Category::Event,
    Category::StateGroup,
    Category::SwitchGroup,
    Category::GameParameter,
    Category::Bus,
    Category::AudioDevice,
];

// ═══════════════════════════════════════════════════════════════════════════════
// PARSER
// ═══════════════════════════════════════════════════════════════════════════════

/// Group being collected while its namespace is open
struct OpenGroup {
    category: Category,
    name: String,
    id: Option<AkUniqueId>,
    values: Vec<IdEntry>,
}

#[derive(Default)]
struct Parser {
    manifest: IdManifest,
    stack: Vec<String>,
    pending: Option<String>,
    group: Option<OpenGroup>,
    /// Stack depth at which an unknown namespace was entered
    skip_from: Option<usize>,
}

/// Parse a generated include file into a manifest.
///
/// Entries keep their file order. Namespaces other than the known
/// categories are skipped with a warning.
pub fn parse_header(text: &str) -> IdResult<IdManifest> {
    let mut parser = Parser::default();
    for (index, raw) in text.lines().enumerate() {
        parser.line(index + 1, raw.trim())?;
    }
    parser.finish()
}

fn parse_error(line: usize, message: impl Into<String>) -> IdError {
    IdError::Parse {
        line,
        message: message.into(),
    }
}

fn flat_category(namespace: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| c.is_flat() && c.namespace() == namespace)
}

fn group_category(namespace: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| c.is_group() && c.namespace() == namespace)
}

impl Parser {
    fn line(&mut self, line: usize, text: &str) -> IdResult<()> {
        if text.is_empty() || text.starts_with("//") || text.starts_with('#') {
            return Ok(());
        }

        if let Some(rest) = text.strip_prefix("namespace") {
            let rest = rest.trim();
            let (name, opens) = match rest.strip_suffix('{') {
                Some(name) => (name.trim(), true),
                None => (rest, false),
            };
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(parse_error(line, format!("malformed namespace {:?}", text)));
            }
            if self.pending.is_some() {
                return Err(parse_error(line, "namespace without opening brace"));
            }
            self.pending = Some(name.to_string());
            if opens {
                self.open(line)?;
            }
            return Ok(());
        }

        if text == "{" {
            return self.open(line);
        }

        if text.starts_with('}') {
            return self.close(line);
        }

        if let Some(rest) = text.strip_prefix("static const") {
            return self.constant(line, rest);
        }

        Err(parse_error(line, format!("unexpected {:?}", text)))
    }

    fn open(&mut self, line: usize) -> IdResult<()> {
        let Some(name) = self.pending.take() else {
            return Err(parse_error(line, "opening brace without namespace"));
        };
        self.stack.push(name);
        let depth = self.stack.len();

        if self.skip_from.is_some() {
            return Ok(());
        }

        match depth {
            2 => {
                let ns = &self.stack[1];
                if flat_category(ns).is_none() && group_category(ns).is_none() {
                    log::warn!("Skipping unknown namespace {} (line {})", ns, line);
                    self.skip_from = Some(depth);
                }
            }
            3 => {
                let Some(category) = group_category(&self.stack[1]) else {
                    return Err(parse_error(
                        line,
                        format!("nested namespace inside {}", self.stack[1]),
                    ));
                };
                self.group = Some(OpenGroup {
                    category,
                    name: self.stack[2].clone(),
                    id: None,
                    values: Vec::new(),
                });
            }
            4 => {
                let expected = group_category(&self.stack[1]).and_then(Category::value_namespace);
                if expected != Some(self.stack[3].as_str()) {
                    log::warn!(
                        "Skipping unknown namespace {}::{} (line {})",
                        self.stack[2],
                        self.stack[3],
                        line
                    );
                    self.skip_from = Some(depth);
                }
            }
            d if d > 4 => {
                return Err(parse_error(line, "namespaces nested too deep"));
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, line: usize) -> IdResult<()> {
        let depth = self.stack.len();
        if self.stack.pop().is_none() {
            return Err(parse_error(line, "unbalanced closing brace"));
        }

        if let Some(from) = self.skip_from {
            if depth == from {
                self.skip_from = None;
            }
            return Ok(());
        }

        if depth == 3 {
            if let Some(group) = self.group.take() {
                let id = group.id.ok_or_else(|| IdError::MissingGroupId {
                    group: group.name.clone(),
                })?;
                let entry = IdGroupEntry {
                    name: group.name,
                    id,
                    source_name: None,
                    values: group.values,
                };
                if let Some(groups) = self.manifest.groups_mut(group.category) {
                    groups.push(entry);
                }
            }
        }
        Ok(())
    }

    fn constant(&mut self, line: usize, rest: &str) -> IdResult<()> {
        let (name, id) = parse_constant(line, rest)?;

        if self.skip_from.is_some() {
            return Ok(());
        }

        match self.stack.len() {
            2 => {
                let Some(category) = flat_category(&self.stack[1]) else {
                    return Err(parse_error(
                        line,
                        format!("constant {} directly inside {}", name, self.stack[1]),
                    ));
                };
                if let Some(entries) = self.manifest.flat_mut(category) {
                    entries.push(IdEntry::new(name, id.as_u32()));
                }
            }
            3 => {
                let Some(group) = self.group.as_mut() else {
                    return Err(parse_error(line, "constant outside a group"));
                };
                if name != GROUP_CONSTANT {
                    let expected = format!("expected {} in group {}", GROUP_CONSTANT, group.name);
                    return Err(parse_error(line, format!("{}, found {}", expected, name)));
                }
                if group.id.replace(id).is_some() {
                    return Err(parse_error(
                        line,
                        format!("group {} declares {} twice", group.name, GROUP_CONSTANT),
                    ));
                }
            }
            4 => {
                let Some(group) = self.group.as_mut() else {
                    return Err(parse_error(line, "value outside a group"));
                };
                group.values.push(IdEntry::new(name, id.as_u32()));
            }
            _ => {
                return Err(parse_error(
                    line,
                    format!("constant {} outside a category namespace", name),
                ));
            }
        }
        Ok(())
    }

    fn finish(self) -> IdResult<IdManifest> {
        if let Some(name) = self.pending {
            return Err(parse_error(0, format!("namespace {} never opened", name)));
        }
        if let Some(open) = self.stack.last() {
            return Err(parse_error(0, format!("namespace {} never closed", open)));
        }
        log::debug!("Parsed header with {} ids", self.manifest.entry_count());
        Ok(self.manifest)
    }
}

/// Parse `<Type> NAME = 123U;` (the part after `static const`)
fn parse_constant(line: usize, rest: &str) -> IdResult<(String, AkUniqueId)> {
    let malformed = || parse_error(line, format!("malformed constant {:?}", rest.trim()));

    let rest = rest.trim();
    let (lhs, rhs) = rest.split_once('=').ok_or_else(malformed)?;
    let mut words = lhs.split_whitespace();
    let (Some(_ty), Some(name), None) = (words.next(), words.next(), words.next()) else {
        return Err(malformed());
    };

    let value = rhs.trim().strip_suffix(';').ok_or_else(malformed)?.trim();
    let digits = value.trim_end_matches(['U', 'u']);
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let id = digits.parse::<u32>().map_err(|_| IdError::ValueOutOfRange {
        line,
        value: value.to_string(),
    })?;
    Ok((name.to_string(), AkUniqueId(id)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERER
// ═══════════════════════════════════════════════════════════════════════════════

struct HeaderWriter<'a> {
    out: String,
    style: &'a HeaderConfig,
}

impl HeaderWriter<'_> {
    fn line(&mut self, level: usize, text: &str) {
        for _ in 0..level * self.style.indent {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, level: usize, name: &str) {
        self.line(level, &format!("namespace {}", name));
        self.line(level, "{");
    }

    fn close(&mut self, level: usize, name: &str) {
        self.line(level, &format!("}} // namespace {}", name));
    }

    fn constant(&mut self, level: usize, name: &str, id: AkUniqueId) {
        let text = format!("static const {} {} = {}U;", self.style.id_type, name, id);
        self.line(level, &text);
    }

    fn preamble(&mut self) {
        let rule = "/".repeat(self.style.rule_width);
        self.line(0, &rule);
        self.line(0, "//");
        self.line(0, &format!("// {}", self.style.banner));
        self.line(0, "//");
        self.line(0, &rule);
        self.blank();

        let guard = &self.style.include_guard;
        self.line(0, &format!("#ifndef {}", guard));
        self.line(0, &format!("#define {}", guard));
        self.blank();

        if !self.style.includes.is_empty() {
            for include in &self.style.includes {
                self.line(0, &format!("#include <{}>", include));
            }
            self.blank();
        }

        let root = &self.style.root_namespace;
        self.line(0, &format!("namespace {}", root));
        self.line(0, "{");
    }

    fn flat_section(&mut self, namespace: &str, entries: &[IdEntry]) {
        self.open(1, namespace);
        for entry in entries {
            self.constant(2, &entry.name, entry.id);
        }
        self.close(1, namespace);
        self.blank();
    }

    fn group_section(&mut self, category: Category, groups: &[IdGroupEntry]) {
        let namespace = category.namespace();
        let value_namespace = category.value_namespace().unwrap_or_default();

        self.open(1, namespace);
        for group in groups {
            self.open(2, &group.name);
            self.constant(3, GROUP_CONSTANT, group.id);
            if !group.values.is_empty() {
                self.blank();
                self.open(3, value_namespace);
                for value in &group.values {
                    self.constant(4, &value.name, value.id);
                }
                self.close(3, value_namespace);
            }
            self.close(2, &group.name);
            self.blank();
        }
        self.close(1, namespace);
        self.blank();
    }

    fn footer(&mut self) {
        self.out
            .push_str(&format!("}}// namespace {}\n", self.style.root_namespace));
        self.blank();
        self.line(0, &format!("#endif // {}", self.style.include_guard));
    }
}

/// Render a manifest as the generated include file.
///
/// Entries are written in canonical (sorted) order and empty sections are
/// left out, so the output depends only on the table's content.
pub fn render_header(manifest: &IdManifest, style: &HeaderConfig) -> String {
    let manifest = manifest.canonical();
    let mut writer = HeaderWriter {
        out: String::with_capacity(256 + manifest.entry_count() * 64),
        style,
    };

    writer.preamble();
    for category in SECTION_ORDER {
        if category.is_group() {
            let groups = manifest.groups(category).unwrap_or_default();
            if !groups.is_empty() {
                writer.group_section(category, groups);
            }
        } else {
            let entries = manifest.flat(category).unwrap_or_default();
            if !entries.is_empty() {
                writer.flat_section(category.namespace(), entries);
            }
        }
    }
    writer.footer();
    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_TREES = 767397161U;
        static const AkUniqueID PLAY_COWS = 3349065862U;
    } // namespace EVENTS

    namespace SWITCHES
    {
        namespace SWITCH_FOOTSTEPTYPE
        {
            static const AkUniqueID GROUP = 3294598210U;

            namespace SWITCH
            {
                static const AkUniqueID WALK = 2108779966U;
            } // namespace SWITCH
        } // namespace SWITCH_FOOTSTEPTYPE

    } // namespace SWITCHES

}// namespace AK
";

    #[test]
    fn test_parse_small_header() {
        let manifest = parse_header(SMALL).unwrap();

        // File order kept
        assert_eq!(manifest.events[0].name, "PLAY_TREES");
        assert_eq!(manifest.events[1].id, AkUniqueId(3349065862));
        assert_eq!(manifest.switch_groups.len(), 1);
        let group = &manifest.switch_groups[0];
        assert_eq!(group.id, AkUniqueId(3294598210));
        assert_eq!(group.value("WALK").unwrap().id, AkUniqueId(2108779966));
        assert!(manifest.state_groups.is_empty());
    }

    #[test]
    fn test_render_sorts_and_omits_empty_sections() {
        let rendered = render_header(&parse_header(SMALL).unwrap(), &HeaderConfig::default());

        let cows = rendered.find("PLAY_COWS").unwrap();
        let trees = rendered.find("PLAY_TREES").unwrap();
        assert!(cows < trees);
        assert!(!rendered.contains("namespace STATES"));
        assert!(!rendered.contains("namespace BUSSES"));
        assert!(rendered.ends_with("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n"));
    }

    #[test]
    fn test_render_then_parse_is_stable() {
        let style = HeaderConfig::default();
        let once = render_header(&parse_header(SMALL).unwrap(), &style);
        let twice = render_header(&parse_header(&once).unwrap(), &style);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_style() {
        let style = HeaderConfig {
            root_namespace: "GAME".to_string(),
            include_guard: "GAME_IDS_H".to_string(),
            includes: Vec::new(),
            indent: 2,
            ..Default::default()
        };
        let manifest = IdManifest {
            busses: vec![IdEntry::new("SFX", 393239870)],
            ..Default::default()
        };
        let rendered = render_header(&manifest, &style);

        assert!(rendered.contains("#define GAME_IDS_H\n\nnamespace GAME\n{\n"));
        assert!(rendered.contains("\n  namespace BUSSES\n  {\n"));
        assert!(rendered.contains("\n    static const AkUniqueID SFX = 393239870U;\n"));
        assert!(!rendered.contains("#include"));
        assert_eq!(parse_header(&rendered).unwrap(), manifest);
    }

    #[test]
    fn test_group_without_values() {
        let manifest = IdManifest {
            state_groups: vec![IdGroupEntry::new("EMPTY", 1)],
            ..Default::default()
        };
        let rendered = render_header(&manifest, &HeaderConfig::default());
        assert!(!rendered.contains("namespace STATE\n"));
        assert_eq!(parse_header(&rendered).unwrap(), manifest);
    }

    #[test]
    fn test_value_out_of_range() {
        let text = "namespace AK\n{\nnamespace BUSSES\n{\n\
                    static const AkUniqueID SFX = 4294967296U;\n}\n}\n";
        match parse_header(text) {
            Err(IdError::ValueOutOfRange { line, value }) => {
                assert_eq!(line, 5);
                assert_eq!(value, "4294967296U");
            }
            other => panic!("expected ValueOutOfRange, got {:?}", other),
        }

        let negative = text.replace("4294967296U", "-5");
        assert!(matches!(
            parse_header(&negative),
            Err(IdError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_malformed_constant() {
        let text = "namespace AK\n{\nnamespace BUSSES\n{\n\
                    static const AkUniqueID SFX = abc;\n}\n}\n";
        assert!(matches!(parse_header(text), Err(IdError::Parse { line: 5, .. })));

        let no_type = "namespace AK {\nnamespace BUSSES {\nstatic const SFX = 1U;\n}\n}\n";
        assert!(matches!(parse_header(no_type), Err(IdError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_missing_group_id() {
        let text = "namespace AK {\nnamespace STATES {\nnamespace REGION {\nnamespace STATE {\n\
                    static const AkUniqueID NONE = 748895195U;\n}\n}\n}\n}\n";
        match parse_header(text) {
            Err(IdError::MissingGroupId { group }) => assert_eq!(group, "REGION"),
            other => panic!("expected MissingGroupId, got {:?}", other),
        }
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(parse_header("namespace AK\n{\n").is_err());
        assert!(parse_header("}\n").is_err());
        assert!(parse_header("{\n").is_err());
    }

    #[test]
    fn test_unknown_namespaces_are_skipped() {
        let text = "\
namespace AK
{
    namespace TRIGGERS
    {
        static const AkUniqueID HIT = 1U;
    } // namespace TRIGGERS

    namespace STATES
    {
        namespace REGION
        {
            static const AkUniqueID GROUP = 1374134669U;

            namespace EXTRA
            {
                static const AkUniqueID X = 2U;
            } // namespace EXTRA
        } // namespace REGION
    } // namespace STATES
}// namespace AK
";
        let manifest = parse_header(text).unwrap();
        assert_eq!(manifest.entry_count(), 1);
        assert!(manifest.state_groups[0].values.is_empty());
    }

    #[test]
    fn test_constant_outside_category() {
        let text = "namespace AK\n{\nstatic const AkUniqueID X = 1U;\n}\n";
        assert!(matches!(parse_header(text), Err(IdError::Parse { line: 3, .. })));
    }
}
