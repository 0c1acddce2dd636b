//! Rust table renderer
//!
//! Emits the `ids.rs` module of `ak-ids`: one `id_list!` per flat category
//! and one `id_group!` per state/switch group, plus the `TABLE` descriptor.

use ak_ids::{Category, IdEntry, IdGroupEntry, IdManifest};

const INDENT: &str = "    ";

/// rustfmt `max_width` and `array_width` defaults
const MAX_WIDTH: usize = 100;
const ARRAY_WIDTH: usize = 60;

const GROUPS_DECL: &str = "pub const GROUPS: &[GroupDef] = ";

/// Words that cannot be used as plain module names
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "do", "dyn", "else", "enum",
    "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static", "struct",
    "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
];

/// Keywords that cannot be raw identifiers either
const RESERVED: &[&str] = &["self", "super", "crate", "_"];

/// Module name for a group symbol: lowercase, keywords escaped.
pub fn module_name(symbol: &str) -> String {
    let lower = symbol.to_ascii_lowercase();
    if RESERVED.contains(&lower.as_str()) {
        format!("{}_", lower)
    } else if KEYWORDS.contains(&lower.as_str()) {
        format!("r#{}", lower)
    } else {
        lower
    }
}

fn section_doc(category: Category) -> &'static str {
    match category {
        Category::Event => "Event IDs",
        Category::StateGroup | Category::StateValue => "State groups",
        Category::SwitchGroup | Category::SwitchValue => "Switch groups",
        Category::GameParameter => "Game parameter IDs",
        Category::Bus => "Bus IDs",
        Category::AudioDevice => "Audio device IDs",
    }
}

fn section_module(category: Category) -> &'static str {
    match category {
        Category::Event => "events",
        Category::StateGroup | Category::StateValue => "states",
        Category::SwitchGroup | Category::SwitchValue => "switches",
        Category::GameParameter => "game_parameters",
        Category::Bus => "busses",
        Category::AudioDevice => "audio_devices",
    }
}

fn push_line(out: &mut String, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn push_entries(out: &mut String, level: usize, header: &str, entries: &[IdEntry]) {
    if entries.is_empty() {
        push_line(out, level, &format!("{} {{}}", header));
        return;
    }
    push_line(out, level, &format!("{} {{", header));
    for entry in entries {
        push_line(out, level + 1, &format!("{} = {},", entry.name, entry.id));
    }
    push_line(out, level, "}");
}

fn flat_section(out: &mut String, category: Category, entries: &[IdEntry]) {
    out.push_str("id_list! {\n");
    let module = format!("pub mod {}", section_module(category));
    push_line(out, 1, &format!("/// {}", section_doc(category)));
    push_entries(out, 1, &module, entries);
    out.push_str("}\n");
}

fn group_section(out: &mut String, category: Category, groups: &[IdGroupEntry]) {
    let values_module = match category {
        Category::SwitchGroup => "switch",
        _ => "state",
    };

    push_line(out, 0, &format!("/// {}", section_doc(category)));
    push_line(out, 0, &format!("pub mod {} {{", section_module(category)));
    push_line(out, 1, "use crate::table::GroupDef;");
    out.push('\n');

    for group in groups {
        let module = module_name(&group.name);
        push_line(out, 1, "id_group! {");
        let line = format!("{} => {} = {},", group.name, module, group.id);
        push_line(out, 2, &line);
        push_entries(out, 2, values_module, &group.values);
        push_line(out, 1, "}");
        out.push('\n');
    }

    let defs: Vec<String> = groups
        .iter()
        .map(|g| format!("{}::def()", module_name(&g.name)))
        .collect();
    let array = format!("[{}]", defs.join(", "));
    let single = format!("{}&{};", GROUPS_DECL, array);

    // Same layout rustfmt picks for the array
    if array.len() <= ARRAY_WIDTH && INDENT.len() + single.len() <= MAX_WIDTH {
        push_line(out, 1, &single);
    } else {
        push_line(out, 1, &format!("{}&[", GROUPS_DECL));
        for def in &defs {
            push_line(out, 2, &format!("{},", def));
        }
        push_line(out, 1, "];");
    }
    out.push_str("}\n");
}

/// Render a manifest as the `ak-ids` table module.
///
/// Works from the canonical (sorted) manifest, so equal tables always
/// render to equal source.
pub fn render_rust(manifest: &IdManifest) -> String {
    let manifest = manifest.canonical();
    let mut out = String::with_capacity(1024 + manifest.entry_count() * 48);

    out.push_str("//! Generated sound-bank identifiers. Do not edit.\n");
    out.push_str("//!\n");
    out.push_str("//! Regenerate with `cargo xtask regen`.\n");
    out.push('\n');
    out.push_str("use crate::table::IdTable;\n");

    for category in crate::header::SECTION_ORDER {
        out.push('\n');
        if let Some(groups) = manifest.groups(category) {
            group_section(&mut out, category, groups);
        } else {
            let entries = manifest.flat(category).unwrap_or_default();
            flat_section(&mut out, category, entries);
        }
    }

    out.push('\n');
    out.push_str("/// The complete table, for runtime iteration\n");
    out.push_str("pub const TABLE: IdTable = IdTable {\n");
    push_line(&mut out, 1, "events: events::entries(),");
    push_line(&mut out, 1, "state_groups: states::GROUPS,");
    push_line(&mut out, 1, "switch_groups: switches::GROUPS,");
    push_line(&mut out, 1, "game_parameters: game_parameters::entries(),");
    push_line(&mut out, 1, "busses: busses::entries(),");
    push_line(&mut out, 1, "audio_devices: audio_devices::entries(),");
    out.push_str("};\n");
    out
}
