//! Configuration for the logger middleware

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::error::{Error, Result};
use crate::LIBRARY_NAME;

/// Configuration for the logger middleware
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggerConfig {
    /// Whether log lines are emitted at all. Actions are forwarded either way.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Tag rendered by `LogElement::LibraryName`
    #[serde(default = "default_library_name")]
    pub library_name: String,

    /// chrono strftime format for `LogElement::Date`
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Timezone the timestamp is rendered in
    #[serde(default)]
    pub timezone: Timezone,

    /// Joins the fragments of a line
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether to render state and action with `{:#?}`
    #[serde(default = "default_false")]
    pub pretty_print: bool,

    /// Where emitted lines go
    #[serde(default)]
    pub output: Output,

    /// Level used when `output` is `Output::Log`
    #[serde(default = "default_log_level")]
    pub log_level: log::Level,

    /// Elements to log, in order
    #[serde(default = "default_elements")]
    pub elements: Vec<ElementKind>,
}

/// Timezone for rendered timestamps
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    #[default]
    Utc,
    Local,
}

/// Destination for emitted log lines
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Print to stdout
    #[default]
    Console,
    /// Forward to the `log` facade
    Log,
}

fn default_enabled() -> bool {
    cfg!(debug_assertions)
}

fn default_false() -> bool {
    false
}

fn default_library_name() -> String {
    LIBRARY_NAME.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S %z".to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

fn default_log_level() -> log::Level {
    log::Level::Debug
}

fn default_elements() -> Vec<ElementKind> {
    vec![
        ElementKind::Date,
        ElementKind::LibraryName,
        ElementKind::State,
        ElementKind::Action,
    ]
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            library_name: default_library_name(),
            date_format: default_date_format(),
            timezone: Timezone::default(),
            separator: default_separator(),
            pretty_print: false,
            output: Output::default(),
            log_level: default_log_level(),
            elements: default_elements(),
        }
    }
}

impl LoggerConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values that would render broken lines
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidDateFormat(self.date_format.clone()));
        }

        if self.library_name.is_empty() && self.elements.contains(&ElementKind::LibraryName) {
            return Err(Error::InvalidConfig(
                "library_name is empty but LibraryName is configured".to_string(),
            ));
        }

        Ok(())
    }
}
