//! Serializable logger settings.
//!
//! ```rust
//! use veecle_log::{Config, Level};
//!
//! let config: Config = serde_json::from_str(r#"{ "level": "notice" }"#).unwrap();
//! assert_eq!(config.level, Level::Notice);
//! assert!(config.show_level);
//! ```

use serde::{Deserialize, Serialize};

use crate::format::Strictness;
use crate::level::Level;

/// The runtime-adjustable settings of a [`Logger`](crate::Logger).
///
/// Missing fields take their [`Config::DEFAULT`] value when deserializing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Messages up to and including this level are emitted.
    pub level: Level,
    /// Whether each message starts with its one-letter level tag.
    pub show_level: bool,
    /// How unknown specifiers are treated.
    pub strictness: Strictness,
}

impl Config {
    /// A `const` version of `Config::default()`: silent, level tags on, lenient.
    pub const DEFAULT: Self = Self {
        level: Level::Silent,
        show_level: true,
        strictness: Strictness::Lenient,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
