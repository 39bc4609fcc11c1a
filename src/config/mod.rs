//! Configuration for the `tctx` tool.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → TctxConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; a missing file section means defaults
//! - Validation separates syntactic (serde) from semantic checks
//! - The codecs themselves take no configuration; only the binary reads this

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggingConfig, TctxConfig, TraceparentConfig};
pub use validation::{validate_config, ValidationError};
