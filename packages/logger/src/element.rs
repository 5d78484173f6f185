//! Log elements
//!
//! A `LogElement` describes one fragment of the line the logger emits for
//! each action. Fragments are rendered in the configured order and joined
//! with the configured separator.

use std::fmt;
use std::fmt::Write;
use std::sync::Arc;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{LoggerConfig, Timezone};

/// User-supplied formatter for `LogElement::Custom`
pub type CustomLog<S, A> = Arc<dyn Fn(&A, Option<&S>) -> String + Send + Sync>;

/// What the logger renders for each incoming action
pub enum LogElement<S, A> {
    /// Current date, e.g. "2020-10-02 17:44:37 +0000"
    Date,
    /// Name of the library, handy for filtering console output
    LibraryName,
    /// Current application state, e.g. "- State: AppState { counter: 0 }"
    State,
    /// The incoming action, e.g. "- Action: Increment"
    Action,
    /// Caller-defined rendering of the action and state
    Custom(CustomLog<S, A>),
}

impl<S, A> LogElement<S, A>
where
    S: fmt::Debug,
    A: fmt::Debug,
{
    /// Wrap a closure as a `Custom` element
    pub fn custom<F>(log: F) -> Self
    where
        F: Fn(&A, Option<&S>) -> String + Send + Sync + 'static,
    {
        LogElement::Custom(Arc::new(log))
    }

    /// `[Date, LibraryName, State, Action]`
    pub fn defaults() -> Vec<Self> {
        vec![
            LogElement::Date,
            LogElement::LibraryName,
            LogElement::State,
            LogElement::Action,
        ]
    }

    /// Render this element. Built-in elements always produce a fragment.
    pub fn log_value(&self, action: &A, state: Option<&S>, config: &LoggerConfig) -> Option<String> {
        match self {
            LogElement::Date => Some(timestamp(config)),
            LogElement::LibraryName => Some(config.library_name.clone()),
            LogElement::State => Some(match state {
                Some(state) if config.pretty_print => format!("- State: {:#?}", state),
                Some(state) => format!("- State: {:?}", state),
                None => "- State: nil".to_string(),
            }),
            LogElement::Action if config.pretty_print => Some(format!("- Action: {:#?}", action)),
            LogElement::Action => Some(format!("- Action: {:?}", action)),
            LogElement::Custom(log) => Some(log(action, state)),
        }
    }
}

fn timestamp(config: &LoggerConfig) -> String {
    let mut out = String::new();
    let written = match config.timezone {
        Timezone::Utc => {
            let now = Utc::now();
            write!(out, "{}", now.format(&config.date_format)).map_err(|_| now.to_rfc3339())
        }
        Timezone::Local => {
            let now = Local::now();
            write!(out, "{}", now.format(&config.date_format)).map_err(|_| now.to_rfc3339())
        }
    };
    match written {
        Ok(()) => out,
        // Unrenderable format, fall back to RFC 3339
        Err(fallback) => fallback,
    }
}

impl<S, A> Clone for LogElement<S, A> {
    fn clone(&self) -> Self {
        match self {
            LogElement::Date => LogElement::Date,
            LogElement::LibraryName => LogElement::LibraryName,
            LogElement::State => LogElement::State,
            LogElement::Action => LogElement::Action,
            LogElement::Custom(log) => LogElement::Custom(log.clone()),
        }
    }
}

impl<S, A> fmt::Debug for LogElement<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogElement::Date => f.write_str("Date"),
            LogElement::LibraryName => f.write_str("LibraryName"),
            LogElement::State => f.write_str("State"),
            LogElement::Action => f.write_str("Action"),
            LogElement::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Built-in elements, as they appear in a serialized `LoggerConfig`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Date,
    LibraryName,
    State,
    Action,
}

impl<S, A> From<ElementKind> for LogElement<S, A> {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Date => LogElement::Date,
            ElementKind::LibraryName => LogElement::LibraryName,
            ElementKind::State => LogElement::State,
            ElementKind::Action => LogElement::Action,
        }
    }
}
