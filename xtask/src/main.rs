//! Sound-Bank ID Tasks
//!
//! Usage:
//!   cargo xtask regen           - Regenerate Wwise_IDs.h and ids.rs from ids.toml
//!   cargo xtask check           - Fail if any generated file is out of date
//!   cargo xtask dump            - Print the compiled table as JSON
//!   cargo xtask lookup          - Look up one ID in the compiled table
//!   cargo xtask test            - Run all tests
//!   cargo xtask lint            - Clippy, format check, generated table check

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use ak_idgen::{Generator, SourceKind, load_manifest};
use ak_ids::{Category, IdRegistry, validate};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

const DEFAULT_CONFIG: &str = "ids.toml";

#[derive(Parser)]
#[command(name = "xtask", about = "Sound-bank ID tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the header and Rust table
    Regen {
        /// Generator config, relative to the workspace root
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
    /// Verify generated files are up to date
    Check {
        /// Generator config, relative to the workspace root
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
    /// Print a table as JSON
    Dump {
        /// Header, JSON manifest or project names (defaults to the compiled table)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Only list the symbols of one category (e.g. `state_value`)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Look up an ID by category and symbol (`GROUP::VALUE` for values)
    Lookup {
        category: Category,
        name: String,
    },
    /// Run all tests
    Test,
    /// Check code quality
    Lint,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let project_root = project_root()?;

    match cli.command {
        Commands::Regen { config } => regen(&project_root.join(config)),
        Commands::Check { config } => check(&project_root.join(config)),
        Commands::Dump { source, category } => {
            dump(source.map(|s| project_root.join(s)).as_deref(), category)
        }
        Commands::Lookup { category, name } => lookup(category, &name),
        Commands::Test => run_tests(&project_root),
        Commands::Lint => lint(&project_root),
    }
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;

    Ok(Path::new(&manifest_dir)
        .parent()
        .context("Failed to get parent directory")?
        .to_path_buf())
}

fn regen(config: &Path) -> Result<()> {
    println!("🔧 Regenerating identifier tables...\n");

    let generator = Generator::from_file(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    let written = generator.write().context("Regeneration failed")?;

    if written.is_empty() {
        println!("\n✅ Everything up to date");
    } else {
        for path in &written {
            println!("  📝 {}", path.display());
        }
        println!("\n✅ Regenerated {} file(s)", written.len());
    }
    Ok(())
}

fn check(config: &Path) -> Result<()> {
    println!("🔍 Checking generated identifier tables...\n");

    let generator = Generator::from_file(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    let stale = generator.check().context("Check failed")?;

    if !stale.is_empty() {
        for path in &stale {
            println!("  ⚠️  {}", path.display());
        }
        bail!(
            "{} generated file(s) out of date, run 'cargo xtask regen'",
            stale.len()
        );
    }

    println!("\n✅ Generated tables match their source");
    Ok(())
}

fn dump(source: Option<&Path>, category: Option<Category>) -> Result<()> {
    let manifest = match source {
        Some(path) => {
            let kind = SourceKind::from_path(path)
                .with_context(|| format!("Unknown source kind: {}", path.display()))?;
            load_manifest(path, kind)?
        }
        None => IdRegistry::builtin().to_manifest(),
    };
    let report = validate(&manifest)?;
    log::info!(
        "{} ids, {} verified by name hash",
        report.checked,
        report.verified
    );

    match category {
        Some(category) => {
            let registry = IdRegistry::from_manifest(&manifest);
            for name in registry.names(category) {
                let id = registry
                    .lookup(category, &name)
                    .with_context(|| format!("{} vanished from the registry", name))?;
                println!("{:<40} {}", name, id);
            }
        }
        None => println!("{}", manifest.to_json()?),
    }
    Ok(())
}

fn lookup(category: Category, name: &str) -> Result<()> {
    let registry = IdRegistry::builtin();
    let id = registry
        .lookup(category, name)
        .or_else(|| registry.resolve(category, name))
        .with_context(|| format!("No {} named {}", category, name))?;
    println!("{}", id);
    Ok(())
}

/// Run one cargo subcommand in the workspace root
fn cargo(root: &Path, args: &[&str]) -> Result<bool> {
    let status = Command::new("cargo")
        .current_dir(root)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;
    Ok(status.success())
}

fn run_tests(root: &Path) -> Result<()> {
    println!("🧪 Running tests...\n");

    if !cargo(root, &["test", "--workspace"])? {
        bail!("Tests failed");
    }

    println!("\n✅ All tests passed!");
    Ok(())
}

fn lint(root: &Path) -> Result<()> {
    println!("🔍 Checking code quality...\n");

    println!("Running clippy...");
    let clippy = [
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ];
    if !cargo(root, &clippy)? {
        bail!("Clippy found issues");
    }

    println!("\nChecking formatting...");
    if !cargo(root, &["fmt", "--all", "--check"])? {
        bail!("Formatting issues found, run 'cargo fmt --all'");
    }

    // Formatting must leave the generated tables alone
    println!();
    check(&root.join(DEFAULT_CONFIG))?;

    println!("\n✅ Code quality check complete!");
    Ok(())
}
