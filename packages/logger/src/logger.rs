//! Logger middleware
//!
//! Formats one line per dispatched action from the configured elements,
//! hands it to a sink when logging is enabled, then forwards the action
//! untouched to the next step of the pipeline.

use std::sync::Arc;

use ducks_core::{Action, DispatchFunction, GetState, Middleware, StateProtocol, Wrapper};

use crate::config::{LoggerConfig, Output};
use crate::element::LogElement;
use crate::error::Result;
use crate::sink::{ConsoleSink, LogCrateSink, LogSink};

/// Middleware that logs information about incoming actions
pub struct LoggerMiddleware<S, A> {
    elements: Vec<LogElement<S, A>>,
    config: LoggerConfig,
    sink: Arc<dyn LogSink>,
}

impl<S, A> LoggerMiddleware<S, A>
where
    S: StateProtocol,
    A: Action,
{
    /// Create a logger for the given elements. Order and duplicates matter.
    pub fn new(elements: Vec<LogElement<S, A>>) -> Self {
        let config = LoggerConfig::default();
        let sink = sink_for(&config);

        log::trace!(
            "Logger created: enabled={}, output={:?}, elements={:?}",
            config.enabled,
            config.output,
            elements
        );

        Self {
            elements,
            config,
            sink,
        }
    }

    /// Create a logger from a validated config, logging `config.elements`
    pub fn with_config(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        let elements = config.elements.iter().copied().map(LogElement::from).collect();
        let sink = sink_for(&config);

        log::trace!(
            "Logger configured: enabled={}, output={:?}, elements={:?}",
            config.enabled,
            config.output,
            config.elements
        );

        Ok(Self {
            elements,
            config,
            sink,
        })
    }

    /// Replace the logged elements, e.g. to add `Custom` ones to a config-built logger
    pub fn with_elements(mut self, elements: Vec<LogElement<S, A>>) -> Self {
        self.elements = elements;
        self
    }

    /// Send lines to `sink` instead of the configured output
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Turn line emission on or off
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn elements(&self) -> &[LogElement<S, A>] {
        &self.elements
    }

    /// Render the line for `action` and `state` without emitting it
    pub fn format_line(&self, action: &A, state: Option<&S>) -> String {
        self.elements
            .iter()
            .filter_map(|element| element.log_value(action, state, &self.config))
            .collect::<Vec<_>>()
            .join(self.config.separator.as_str())
    }

    fn log(&self, action: &A, state: &GetState<S>) {
        // Exactly one read per action, enabled or not
        let state = state();
        if !self.config.enabled {
            return;
        }
        let line = self.format_line(action, state.as_ref());
        self.sink.emit(&line);
    }
}

fn sink_for(config: &LoggerConfig) -> Arc<dyn LogSink> {
    match config.output {
        Output::Console => Arc::new(ConsoleSink),
        Output::Log => Arc::new(LogCrateSink::new(config.log_level)),
    }
}

impl<S, A> Clone for LoggerMiddleware<S, A> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            config: self.config.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<S, A> Default for LoggerMiddleware<S, A>
where
    S: StateProtocol,
    A: Action,
{
    fn default() -> Self {
        Self::new(LogElement::defaults())
    }
}

impl<S, A> Middleware<S, A> for LoggerMiddleware<S, A>
where
    S: StateProtocol,
    A: Action,
{
    fn body(&self, _dispatch: DispatchFunction<A>, state: GetState<S>) -> Wrapper<A> {
        let logger = self.clone();
        Box::new(move |next: DispatchFunction<A>| -> DispatchFunction<A> {
            Arc::new(move |action: A| {
                logger.log(&action, &state);
                next(action);
            })
        })
    }
}
