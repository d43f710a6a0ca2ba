//! TOML scenario file parsing.
//!
//! Defines the structure of the scenario file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root structure of a scenario file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Notifier options
    #[serde(default)]
    pub notifier: NotifierSection,

    /// Host element layout
    #[serde(default)]
    pub host: HostSection,

    /// Replay driver options
    #[serde(default)]
    pub replay: ReplaySection,

    /// Declared elements besides the host
    #[serde(default)]
    pub elements: Vec<ElementSection>,

    /// Ordered replay steps
    #[serde(default)]
    pub steps: Vec<StepSection>,
}

/// Notifier options section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifierSection {
    /// Report width changes
    pub horizontal: Option<bool>,

    /// Report height changes
    pub vertical: Option<bool>,

    /// Report the first measurement after each subscription
    pub initial: Option<bool>,

    /// Tag of the host element
    pub host_tag: Option<String>,

    /// Declared element to observe from mount on
    pub element: Option<String>,
}

/// Host element section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    /// Initial content width
    pub width: Option<f64>,

    /// Initial content height
    pub height: Option<f64>,
}

/// Replay driver section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaySection {
    /// Settle window in milliseconds
    pub settle_ms: Option<u64>,

    /// Output format: "text" or "json"
    pub format: Option<String>,
}

/// A declared element.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSection {
    /// Unique element name
    pub name: String,

    /// Initial content width
    pub width: f64,

    /// Initial content height
    pub height: f64,
}

/// A replay step, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepSection {
    /// Create the host element and start observing
    Mount,
    /// Stop observing
    Unmount,
    /// Change an element's size
    Resize {
        /// Element name (`host` for the host element)
        element: String,
        /// New content width
        width: f64,
        /// New content height
        height: f64,
    },
    /// Observe a declared element instead of the host
    Select {
        /// Element name
        element: String,
    },
    /// Go back to observing the host element
    Clear,
    /// Remove an element from the layout
    Detach {
        /// Element name (`host` for the host element)
        element: String,
    },
    /// Change notifier options
    Configure {
        /// Report width changes
        horizontal: Option<bool>,
        /// Report height changes
        vertical: Option<bool>,
        /// Report the first measurement after each subscription
        initial: Option<bool>,
    },
}

impl TomlConfig {
    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a commented scenario template.
#[must_use]
pub fn default_config_template() -> String {
    r#"# resize-replay scenario file

[notifier]
# Report width changes (default: true, --ignore-width disables)
# horizontal = true

# Report height changes (default: true, --ignore-height disables)
# vertical = true

# Report the first measurement after each subscription
# (default: true, --skip-initial disables)
# initial = true

# Tag of the host element created on mount (default: "div")
# host_tag = "div"

# Declared element to observe instead of the host element
# element = "panel"

[host]
# Initial content size of the host element
width = 200
height = 100

[replay]
# Milliseconds to wait for measurements after each step (default: 50)
# settle_ms = 50

# Output format: "text" or "json"
# format = "text"

[[elements]]
name = "panel"
width = 320
height = 240

[[steps]]
action = "mount"

[[steps]]
action = "resize"
element = "host"
width = 300
height = 100

[[steps]]
action = "select"
element = "panel"

[[steps]]
action = "resize"
element = "panel"
width = 320
height = 480

[[steps]]
action = "clear"

[[steps]]
action = "unmount"
"#
    .to_string()
}
