//! Sound-Bank Object Identifiers
//!
//! Symbolic access to the numeric IDs the sound engine and its banks agree
//! on (events, states, switches, game parameters, busses, audio devices):
//! - Generated constants for build-time access (`ids::events::PLAY_COWS`)
//! - Category-scoped runtime registry for data-driven lookup
//! - Name hashing that reproduces every ID from its design-time name
//! - JSON manifest + validation for tables loaded at runtime
//!
//! ## Scoping
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ EVENTS            PLAY_COWS ───────────────────▶ 3349065862  │
//! │ STATES                                                       │
//! │   ├── MUSICSTATE  GROUP ───────────────────────▶ 1021618141  │
//! │   │     └── STATE NONE ────────────┐                         │
//! │   └── REGION      GROUP ───────────┼───────────▶ 1374134669  │
//! │         └── STATE NONE ────────────┴───────────▶  748895195  │
//! │ SWITCHES / GAME_PARAMETERS / BUSSES / AUDIO_DEVICES          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Equal names hash to equal IDs, so `NONE` carries the same value in both
//! state groups. Lookups always go through a category (and a group for
//! values), which keeps such IDs apart.
//!
//! ## Usage
//!
//! ```rust
//! use ak_ids::{ids, AkUniqueId, Category, IdRegistry};
//!
//! // Static: unknown names fail to build
//! let footsteps: AkUniqueId = ids::events::PLAY_FOOTSTEPS;
//! let walk = ids::switches::switch_footsteptype::switch::WALK;
//!
//! // Runtime: scoped by category and group
//! let registry = IdRegistry::builtin();
//! assert_eq!(registry.lookup(Category::Event, "PLAY_FOOTSTEPS"), Some(footsteps));
//! assert_eq!(registry.switch("SWITCH_FOOTSTEPTYPE", "WALK"), Some(walk));
//! ```

#[macro_use]
pub mod table;

pub mod error;
pub mod hash;
pub mod id;
// Generated; `cargo xtask check` compares it byte for byte
#[rustfmt::skip]
pub mod ids;
pub mod manifest;
pub mod registry;
pub mod validate;

// Re-exports
pub use error::{IdError, IdResult};
pub use hash::{hash_name, is_symbol, symbol_name};
pub use id::{AkUniqueId, Category};
pub use manifest::{IdEntry, IdGroupEntry, IdManifest};
pub use registry::{IdGroup, IdRegistry, SCOPE_SEPARATOR};
pub use table::{GroupDef, IdTable, StaticEntry};
pub use validate::{SharedId, ValidationReport, validate};
