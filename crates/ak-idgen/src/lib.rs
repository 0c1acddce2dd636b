//! Sound-Bank Identifier Generator
//!
//! Keeps the identifier table in lock step across its three renderings:
//! - `Wwise_IDs.h`, the include file the sound engine's authoring tool ships
//! - `ak-ids/src/ids.rs`, the same table as Rust constants
//! - an optional JSON manifest for runtime loading
//!
//! Any of the three (or a list of design-time names) can serve as source;
//! the rest are regenerated from it. Every table is validated before anything
//! is written.
//!
//! ```rust
//! use ak_idgen::{parse_header, render_header, HeaderConfig};
//!
//! let text = "namespace AK\n{\n    namespace EVENTS\n    {\n        \
//!             static const AkUniqueID PLAY_COWS = 3349065862U;\n    } // namespace EVENTS\n\n}\n";
//! let manifest = parse_header(text).unwrap();
//! assert_eq!(manifest.events[0].name, "PLAY_COWS");
//!
//! let rendered = render_header(&manifest, &HeaderConfig::default());
//! assert_eq!(parse_header(&rendered).unwrap(), manifest);
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod header;
pub mod rust;
pub mod source;

// Re-exports
pub use config::{GeneratorConfig, HeaderConfig, SourceKind};
pub use error::{GenError, GenResult};
pub use generate::{GeneratedFile, Generator, load_manifest};
pub use header::{parse_header, render_header};
pub use rust::render_rust;
pub use source::{ProjectSource, SourceGroup};
