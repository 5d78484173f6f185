//! Ducks Logger
//!
//! A logging middleware for the Ducks state container. For every dispatched
//! action it formats a line from the configured [`LogElement`]s, emits it when
//! logging is enabled and forwards the action unchanged to the next step of
//! the pipeline.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ducks_core::{MiddlewareChain, Store};
//! use ducks_logger::{LogElement, LoggerMiddleware};
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! let logger = LoggerMiddleware::new(vec![
//!     LogElement::Date,
//!     LogElement::State,
//!     LogElement::custom(|action: &CounterAction, _state: Option<&i64>| {
//!         format!("handled {:?}", action)
//!     }),
//! ]);
//!
//! let mut chain = MiddlewareChain::<i64, CounterAction>::new();
//! chain.add(Arc::new(logger));
//!
//! let store = Store::new(0i64, Arc::new(|state: &mut i64, _action: CounterAction| *state += 1), chain);
//! store.dispatch(CounterAction::Increment);
//! ```

mod config;
mod element;
mod error;
mod logger;
mod sink;

#[cfg(test)]
mod testing;

pub use config::{LoggerConfig, Output, Timezone};
pub use element::{CustomLog, ElementKind, LogElement};
pub use error::{Error, Result};
pub use logger::LoggerMiddleware;
pub use sink::{ConsoleSink, LogCrateSink, LogHistory, LogSink, LOG_TARGET};

/// Default tag rendered by `LogElement::LibraryName`
pub const LIBRARY_NAME: &str = "DucksSwift";
