//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the replay tool. All validation is performed during construction.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::HOST_ELEMENT;
use crate::notifier::{AxisConfig, NotifierOptions};
use crate::replay::{ElementSpec, OutputFormat, Scenario, Step};
use crate::watcher::Size;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{StepSection, TomlConfig};

/// Notifier options resolved from CLI and scenario file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Which axes trigger notifications
    pub axes: AxisConfig,

    /// Whether the first measurement after a subscription is reported
    pub initial: bool,

    /// Tag of the host element
    pub host_tag: String,

    /// Declared element observed from mount on
    pub element: Option<String>,
}

impl NotifierSettings {
    /// Builds notifier options around `on_resize`.
    ///
    /// The explicit element is resolved by the caller, since only the replay
    /// layout knows its handle.
    #[must_use]
    pub fn to_options<T>(&self, on_resize: impl FnMut(f64, f64) + 'static) -> NotifierOptions<T> {
        NotifierOptions::new(on_resize)
            .axes_config(self.axes)
            .initial(self.initial)
            .host_tag(self.host_tag.clone())
    }
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            axes: AxisConfig::new(defaults::HORIZONTAL, defaults::VERTICAL),
            initial: defaults::INITIAL,
            host_tag: defaults::HOST_TAG.to_string(),
            element: None,
        }
    }
}

/// Fully validated configuration ready for use by the replay tool.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Notifier options
    pub notifier: NotifierSettings,

    /// Layout script to replay
    pub scenario: Scenario,

    /// Time allowed for measurements to arrive after each step
    pub settle: Duration,

    /// Notification output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ horizontal: {}, vertical: {}, initial: {}, host_tag: {}, element: {}, \
             elements: {}, steps: {}, settle: {}ms, format: {} }}",
            self.notifier.axes.horizontal,
            self.notifier.axes.vertical,
            self.notifier.initial,
            self.notifier.host_tag,
            self.notifier.element.as_deref().unwrap_or("none"),
            self.scenario.elements.len(),
            self.scenario.steps.len(),
            self.settle.as_millis(),
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML values. The boolean flags
    /// `--ignore-width`, `--ignore-height` and `--skip-initial` only ever
    /// disable: a feature is on only if neither source turns it off.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Element names are empty, duplicated or reserved
    /// - Sizes are negative or not finite
    /// - Steps or options refer to undeclared elements
    /// - The settle window is zero
    /// - The host tag or output format is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let elements = Self::resolve_elements(toml)?;
        let names: HashSet<&str> = elements.iter().map(|e| e.name.as_str()).collect();

        let notifier = Self::resolve_notifier(cli, toml, &names)?;
        let host_size = Self::resolve_host_size(toml)?;
        let steps = Self::resolve_steps(toml, &names)?;
        let settle = Self::resolve_settle(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            notifier,
            scenario: Scenario {
                host_size,
                elements,
                steps,
            },
            settle,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads the scenario named on the command line and merges it with CLI options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scenario file was given
    /// - The scenario file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli.scenario.as_ref().ok_or_else(|| {
            ConfigError::missing(
                field::SCENARIO,
                "Use --scenario to name the scenario file to replay",
            )
        })?;
        let toml = TomlConfig::load(path)?;

        Self::from_raw(cli, Some(&toml))
    }

    fn resolve_notifier(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        names: &HashSet<&str>,
    ) -> Result<NotifierSettings, ConfigError> {
        let section = toml.map(|t| &t.notifier);

        // Flags only disable; TOML may disable too
        let horizontal = !cli.ignore_width
            && section
                .and_then(|s| s.horizontal)
                .unwrap_or(defaults::HORIZONTAL);
        let vertical = !cli.ignore_height
            && section
                .and_then(|s| s.vertical)
                .unwrap_or(defaults::VERTICAL);
        let initial =
            !cli.skip_initial && section.and_then(|s| s.initial).unwrap_or(defaults::INITIAL);

        // Priority: CLI explicit > TOML > default
        let host_tag = cli
            .host_tag
            .as_deref()
            .or_else(|| section.and_then(|s| s.host_tag.as_deref()))
            .unwrap_or(defaults::HOST_TAG);
        if host_tag.is_empty() || host_tag.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHostTag(host_tag.to_string()));
        }

        let element = cli
            .element
            .clone()
            .or_else(|| section.and_then(|s| s.element.clone()));
        if let Some(ref name) = element {
            require_declared(name, names, "notifier.element")?;
        }

        Ok(NotifierSettings {
            axes: AxisConfig::new(horizontal, vertical),
            initial,
            host_tag: host_tag.to_string(),
            element,
        })
    }

    fn resolve_elements(toml: Option<&TomlConfig>) -> Result<Vec<ElementSpec>, ConfigError> {
        let Some(toml) = toml else {
            return Ok(Vec::new());
        };

        let mut seen = HashSet::new();
        let mut elements = Vec::with_capacity(toml.elements.len());

        for element in &toml.elements {
            let name = element.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidElement {
                    name: element.name.clone(),
                    reason: "name must not be empty".to_string(),
                });
            }
            if name == HOST_ELEMENT {
                return Err(ConfigError::InvalidElement {
                    name: element.name.clone(),
                    reason: format!("'{HOST_ELEMENT}' is reserved for the host element"),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::InvalidElement {
                    name: element.name.clone(),
                    reason: "declared more than once".to_string(),
                });
            }

            let size = parse_size(element.width, element.height, &format!("element '{name}'"))?;
            elements.push(ElementSpec::new(name, size));
        }

        Ok(elements)
    }

    fn resolve_host_size(toml: Option<&TomlConfig>) -> Result<Size, ConfigError> {
        let host = toml.map(|t| &t.host);
        let width = host
            .and_then(|h| h.width)
            .unwrap_or(defaults::HOST_WIDTH);
        let height = host
            .and_then(|h| h.height)
            .unwrap_or(defaults::HOST_HEIGHT);

        parse_size(width, height, "host")
    }

    fn resolve_steps(
        toml: Option<&TomlConfig>,
        names: &HashSet<&str>,
    ) -> Result<Vec<Step>, ConfigError> {
        let Some(toml) = toml else {
            return Ok(Vec::new());
        };

        toml.steps
            .iter()
            .enumerate()
            .map(|(index, step)| convert_step(index + 1, step, names))
            .collect()
    }

    fn resolve_settle(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let millis = cli
            .settle_ms
            .or_else(|| toml.and_then(|t| t.replay.settle_ms))
            .unwrap_or(defaults::SETTLE_MS);

        if millis == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "settle_ms",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_millis(millis))
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        match toml.and_then(|t| t.replay.format.as_deref()) {
            Some(value) => parse_format(value),
            None => Ok(OutputFormat::default()),
        }
    }
}

/// Writes the scenario template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn convert_step(
    index: usize,
    step: &StepSection,
    names: &HashSet<&str>,
) -> Result<Step, ConfigError> {
    let context = || format!("step {index}");

    let converted = match step {
        StepSection::Mount => Step::Mount,
        StepSection::Unmount => Step::Unmount,
        StepSection::Clear => Step::Clear,
        StepSection::Resize {
            element,
            width,
            height,
        } => {
            require_layout_element(element, names, &context())?;
            Step::Resize {
                element: element.clone(),
                size: parse_size(*width, *height, &context())?,
            }
        }
        StepSection::Select { element } => {
            require_declared(element, names, &context())?;
            Step::Select {
                element: element.clone(),
            }
        }
        StepSection::Detach { element } => {
            require_layout_element(element, names, &context())?;
            Step::Detach {
                element: element.clone(),
            }
        }
        StepSection::Configure {
            horizontal,
            vertical,
            initial,
        } => Step::Configure {
            horizontal: *horizontal,
            vertical: *vertical,
            initial: *initial,
        },
    };

    Ok(converted)
}

fn require_declared(name: &str, names: &HashSet<&str>, context: &str) -> Result<(), ConfigError> {
    if names.contains(name) {
        Ok(())
    } else {
        Err(ConfigError::UnknownElement {
            name: name.to_string(),
            context: context.to_string(),
        })
    }
}

fn require_layout_element(
    name: &str,
    names: &HashSet<&str>,
    context: &str,
) -> Result<(), ConfigError> {
    if name == HOST_ELEMENT {
        return Ok(());
    }
    require_declared(name, names, context)
}

fn parse_size(width: f64, height: f64, context: &str) -> Result<Size, ConfigError> {
    for (axis, value) in [("width", width), ("height", height)] {
        if !value.is_finite() {
            return Err(ConfigError::InvalidSize {
                context: context.to_string(),
                reason: format!("{axis} must be a finite number"),
            });
        }
        if value < 0.0 {
            return Err(ConfigError::InvalidSize {
                context: context.to_string(),
                reason: format!("{axis} must not be negative"),
            });
        }
    }
    Ok(Size::new(width, height))
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" | "jsonl" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
