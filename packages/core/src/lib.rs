// Main entry point for ducks-core
// Defines the dispatch pipeline that middlewares plug into and a minimal store hosting it

pub mod core;
pub mod middleware;

// Re-export core types for convenience
pub use crate::core::store::{Reducer, Store};
pub use middleware::{
    Action, DispatchFunction, GetState, Middleware, MiddlewareChain, StateProtocol, Wrapper,
};
